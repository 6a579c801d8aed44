//! DynamoDB operation enum.

use std::fmt;

/// DynamoDB operations whose responses this crate models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DynamoDBOperation {
    // Item reads
    /// Get an item by primary key.
    GetItem,
    /// Query items by key condition.
    Query,
    /// Scan all items in a table.
    Scan,
    /// Batch get items from multiple tables.
    BatchGetItem,

    // Writes and table listing
    /// Put (insert or replace) an item.
    PutItem,
    /// Update an item.
    UpdateItem,
    /// Delete an item by primary key.
    DeleteItem,
    /// List all tables.
    ListTables,
}

impl DynamoDBOperation {
    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetItem => "GetItem",
            Self::Query => "Query",
            Self::Scan => "Scan",
            Self::BatchGetItem => "BatchGetItem",
            Self::PutItem => "PutItem",
            Self::UpdateItem => "UpdateItem",
            Self::DeleteItem => "DeleteItem",
            Self::ListTables => "ListTables",
        }
    }

    /// Parse an operation name string into a `DynamoDBOperation`.
    ///
    /// Accepts the bare name (`Query`) and the `X-Amz-Target` form
    /// (`DynamoDB_20120810.Query`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.strip_prefix("DynamoDB_20120810.").unwrap_or(name);
        match name {
            "GetItem" => Some(Self::GetItem),
            "Query" => Some(Self::Query),
            "Scan" => Some(Self::Scan),
            "BatchGetItem" => Some(Self::BatchGetItem),
            "PutItem" => Some(Self::PutItem),
            "UpdateItem" => Some(Self::UpdateItem),
            "DeleteItem" => Some(Self::DeleteItem),
            "ListTables" => Some(Self::ListTables),
            _ => None,
        }
    }
}

impl fmt::Display for DynamoDBOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
