//! Conversions from `aws-sdk-dynamodb` types.
//!
//! Only the item-bearing fields are carried over.

use std::collections::HashMap;

use aws_sdk_dynamodb::operation::batch_get_item::BatchGetItemOutput as SdkBatchGetItemOutput;
use aws_sdk_dynamodb::operation::get_item::GetItemOutput as SdkGetItemOutput;
use aws_sdk_dynamodb::operation::query::QueryOutput as SdkQueryOutput;
use aws_sdk_dynamodb::operation::scan::ScanOutput as SdkScanOutput;
use aws_sdk_dynamodb::primitives::Blob;
use aws_sdk_dynamodb::types::AttributeValue as SdkAttributeValue;

use crate::attribute_value::{AttributeValue, Item};
use crate::output::{BatchGetItemOutput, GetItemOutput, QueryOutput, ScanOutput};
use crate::response::DynamoDBResponse;

impl From<SdkAttributeValue> for AttributeValue {
    /// `SdkAttributeValue::Unknown` becomes a value with no slot populated.
    fn from(value: SdkAttributeValue) -> Self {
        match value {
            SdkAttributeValue::S(s) => Self::s(s),
            SdkAttributeValue::N(n) => Self::n(n),
            SdkAttributeValue::Bool(b) => Self::bool(b),
            SdkAttributeValue::Null(b) => Self {
                null: Some(b),
                ..Self::default()
            },
            SdkAttributeValue::B(blob) => Self::b(blob.into_inner()),
            SdkAttributeValue::M(m) => Self::m(convert_item(m)),
            SdkAttributeValue::L(l) => Self::l(l.into_iter().map(Self::from).collect()),
            SdkAttributeValue::Ss(v) => Self::ss(v),
            SdkAttributeValue::Ns(v) => Self::ns(v),
            SdkAttributeValue::Bs(v) => Self::bs(v.into_iter().map(Blob::into_inner)),
            _ => Self::default(),
        }
    }
}

fn convert_item(item: HashMap<String, SdkAttributeValue>) -> Item {
    item.into_iter().map(|(k, v)| (k, v.into())).collect()
}

fn convert_items(items: Option<Vec<HashMap<String, SdkAttributeValue>>>) -> Vec<Item> {
    items
        .unwrap_or_default()
        .into_iter()
        .map(convert_item)
        .collect()
}

impl From<SdkGetItemOutput> for GetItemOutput {
    fn from(output: SdkGetItemOutput) -> Self {
        Self {
            item: output.item.map(convert_item),
        }
    }
}

impl From<SdkQueryOutput> for QueryOutput {
    fn from(output: SdkQueryOutput) -> Self {
        Self {
            items: convert_items(output.items),
        }
    }
}

impl From<SdkScanOutput> for ScanOutput {
    fn from(output: SdkScanOutput) -> Self {
        Self {
            items: convert_items(output.items),
        }
    }
}

impl From<SdkBatchGetItemOutput> for BatchGetItemOutput {
    fn from(output: SdkBatchGetItemOutput) -> Self {
        let responses = output
            .responses
            .unwrap_or_default()
            .into_iter()
            .map(|(table, items)| (table, items.into_iter().map(convert_item).collect()))
            .collect();
        Self { responses }
    }
}

impl From<SdkGetItemOutput> for DynamoDBResponse {
    fn from(output: SdkGetItemOutput) -> Self {
        Self::GetItem(output.into())
    }
}

impl From<SdkQueryOutput> for DynamoDBResponse {
    fn from(output: SdkQueryOutput) -> Self {
        Self::Query(output.into())
    }
}

impl From<SdkScanOutput> for DynamoDBResponse {
    fn from(output: SdkScanOutput) -> Self {
        Self::Scan(output.into())
    }
}

impl From<SdkBatchGetItemOutput> for DynamoDBResponse {
    fn from(output: SdkBatchGetItemOutput) -> Self {
        Self::BatchGetItem(output.into())
    }
}
