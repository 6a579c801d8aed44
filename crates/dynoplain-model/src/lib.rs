//! DynamoDB model types for dynoplain.
//!
//! These are the typed, still-tagged shapes a DynamoDB client hands back after
//! parsing the `awsJson1_0` wire protocol: attribute values, items, and the
//! per-operation output structs. They are hand-written since the JSON protocol
//! makes serde derives trivial; only [`AttributeValue`] needs a custom codec.
// "DynamoDB" appears in virtually every doc comment in this crate.
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]

pub mod attribute_value;
pub mod error;
pub mod operations;
pub mod output;
pub mod response;
#[cfg(feature = "aws-sdk")]
pub mod sdk;

pub use attribute_value::{AttributeValue, Item, Variant};
pub use error::ResponseError;
pub use operations::DynamoDBOperation;
pub use response::DynamoDBResponse;
