//! Turns typed DynamoDB responses into plain nested values.
//!
//! ```
//! use dynoplain_core::{ResponseDecoder, Value};
//! use serde_json::json;
//!
//! let decoder = ResponseDecoder::new();
//! let body = json!({"Item": {"id": {"N": "42"}, "name": {"S": "widget"}}});
//! let item = decoder.decode_json("GetItem", &body).unwrap();
//! assert_eq!(item.get("id").and_then(Value::as_i64), Some(42));
//! assert_eq!(item.get("name").and_then(Value::as_str), Some("widget"));
//! ```
#![allow(clippy::doc_markdown)]

pub mod config;
pub mod decoder;
pub mod error;
pub mod value;

pub use config::DecoderConfig;
pub use decoder::ResponseDecoder;
pub use error::DecodeError;
pub use value::{Number, PlainItem, Value};
