//! The closed set of typed responses a DynamoDB client can hand over.

use serde::Deserialize;

use crate::error::ResponseError;
use crate::operations::DynamoDBOperation;
use crate::output::{
    BatchGetItemOutput, DeleteItemOutput, GetItemOutput, ListTablesOutput, PutItemOutput,
    QueryOutput, ScanOutput, UpdateItemOutput,
};

/// A parsed DynamoDB operation output.
///
/// Only `GetItem`, `Query`, `Scan` and `BatchGetItem` carry decodable items;
/// the remaining variants exist so callers can pass any output they hold.
#[derive(Debug, Clone, PartialEq)]
pub enum DynamoDBResponse {
    /// Single-item shape.
    GetItem(GetItemOutput),
    /// Multi-item shape.
    Query(QueryOutput),
    /// Multi-item shape.
    Scan(ScanOutput),
    /// Batch shape: items grouped by table name.
    BatchGetItem(BatchGetItemOutput),
    /// `PutItem` output.
    PutItem(PutItemOutput),
    /// `UpdateItem` output.
    UpdateItem(UpdateItemOutput),
    /// `DeleteItem` output.
    DeleteItem(DeleteItemOutput),
    /// `ListTables` output.
    ListTables(ListTablesOutput),
}

impl DynamoDBResponse {
    /// The operation that produced this response.
    #[must_use]
    pub fn operation(&self) -> DynamoDBOperation {
        match self {
            Self::GetItem(_) => DynamoDBOperation::GetItem,
            Self::Query(_) => DynamoDBOperation::Query,
            Self::Scan(_) => DynamoDBOperation::Scan,
            Self::BatchGetItem(_) => DynamoDBOperation::BatchGetItem,
            Self::PutItem(_) => DynamoDBOperation::PutItem,
            Self::UpdateItem(_) => DynamoDBOperation::UpdateItem,
            Self::DeleteItem(_) => DynamoDBOperation::DeleteItem,
            Self::ListTables(_) => DynamoDBOperation::ListTables,
        }
    }

    /// Name of the concrete output type, e.g. `"PutItemOutput"`.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::GetItem(_) => "GetItemOutput",
            Self::Query(_) => "QueryOutput",
            Self::Scan(_) => "ScanOutput",
            Self::BatchGetItem(_) => "BatchGetItemOutput",
            Self::PutItem(_) => "PutItemOutput",
            Self::UpdateItem(_) => "UpdateItemOutput",
            Self::DeleteItem(_) => "DeleteItemOutput",
            Self::ListTables(_) => "ListTablesOutput",
        }
    }

    /// Build a typed response from an operation name and its JSON body.
    pub fn from_json(operation: &str, body: &serde_json::Value) -> Result<Self, ResponseError> {
        if !body.is_object() {
            return Err(ResponseError::NotAnObject);
        }
        let op = DynamoDBOperation::from_name(operation)
            .ok_or_else(|| ResponseError::UnknownOperation(operation.to_owned()))?;

        let response = match op {
            DynamoDBOperation::GetItem => Self::GetItem(parse(op, body)?),
            DynamoDBOperation::Query => Self::Query(parse(op, body)?),
            DynamoDBOperation::Scan => Self::Scan(parse(op, body)?),
            DynamoDBOperation::BatchGetItem => Self::BatchGetItem(parse(op, body)?),
            DynamoDBOperation::PutItem => Self::PutItem(parse(op, body)?),
            DynamoDBOperation::UpdateItem => Self::UpdateItem(parse(op, body)?),
            DynamoDBOperation::DeleteItem => Self::DeleteItem(parse(op, body)?),
            DynamoDBOperation::ListTables => Self::ListTables(parse(op, body)?),
        };
        Ok(response)
    }
}

fn parse<'a, T: Deserialize<'a>>(
    operation: DynamoDBOperation,
    body: &'a serde_json::Value,
) -> Result<T, ResponseError> {
    T::deserialize(body).map_err(|source| ResponseError::Malformed { operation, source })
}

macro_rules! impl_from_output {
    ($($output:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$output> for DynamoDBResponse {
                fn from(output: $output) -> Self {
                    Self::$variant(output)
                }
            }
        )*
    };
}

impl_from_output! {
    GetItemOutput => GetItem,
    QueryOutput => Query,
    ScanOutput => Scan,
    BatchGetItemOutput => BatchGetItem,
    PutItemOutput => PutItem,
    UpdateItemOutput => UpdateItem,
    DeleteItemOutput => DeleteItem,
    ListTablesOutput => ListTables,
}
