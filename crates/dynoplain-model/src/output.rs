//! DynamoDB output types.
//!
//! All output structs use `PascalCase` JSON field naming to match the DynamoDB
//! wire protocol (`awsJson1_0`). Only the fields that carry items are kept;
//! everything else (`Count`, `ConsumedCapacity`, `UnprocessedKeys`, ...) is
//! ignored on input. A field that is `null` reads as absent.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::attribute_value::Item;

// ---------------------------------------------------------------------------
// Item reads
// ---------------------------------------------------------------------------

/// Output for the `GetItem` operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetItemOutput {
    /// A map of attribute names to `AttributeValue` objects for the retrieved
    /// item. `None` if the item does not exist.
    #[serde(default)]
    pub item: Option<Item>,
}

/// Output for the `Query` operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryOutput {
    /// An array of item attributes that match the query conditions.
    /// Absent (or `null`) when `Select=COUNT`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<Item>,
}

/// Output for the `Scan` operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScanOutput {
    /// An array of item attributes that match the scan conditions.
    /// Absent (or `null`) when `Select=COUNT`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<Item>,
}

/// Output for the `BatchGetItem` operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchGetItemOutput {
    /// A map of table names to the items retrieved from each table.
    ///
    /// Table entries whose value is not an array are dropped on input.
    #[serde(default, deserialize_with = "deserialize_table_items")]
    pub responses: HashMap<String, Vec<Item>>,
}

/// Reads `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn deserialize_table_items<'de, D>(deserializer: D) -> Result<HashMap<String, Vec<Item>>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let raw: HashMap<String, serde_json::Value> = null_as_default(deserializer)?;
    let mut responses = HashMap::with_capacity(raw.len());
    for (table, value) in raw {
        if !value.is_array() {
            debug!(table = %table, "skipping batch table entry that is not an item list");
            continue;
        }
        let items: Vec<Item> = serde_json::from_value(value).map_err(D::Error::custom)?;
        responses.insert(table, items);
    }
    Ok(responses)
}

// ---------------------------------------------------------------------------
// Writes and table listing
// ---------------------------------------------------------------------------

/// Output for the `PutItem` operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutItemOutput {
    /// The attribute values as they appeared before the `PutItem` operation
    /// (only returned when `ReturnValues` is specified).
    #[serde(default, deserialize_with = "null_as_default")]
    pub attributes: Item,
}

/// Output for the `UpdateItem` operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateItemOutput {
    /// The attribute values as they appeared before or after the update
    /// (depending on the `ReturnValues` setting).
    #[serde(default, deserialize_with = "null_as_default")]
    pub attributes: Item,
}

/// Output for the `DeleteItem` operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteItemOutput {
    /// The attribute values as they appeared before the deletion (only
    /// returned when `ReturnValues` is `ALL_OLD`).
    #[serde(default, deserialize_with = "null_as_default")]
    pub attributes: Item,
}

/// Output for the `ListTables` operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTablesOutput {
    /// The names of the tables associated with the current account and region.
    #[serde(default, deserialize_with = "null_as_default")]
    pub table_names: Vec<String>,
}
