//! Errors raised while building a typed response from a JSON body.

use thiserror::Error;

use crate::operations::DynamoDBOperation;

/// Failure to turn an operation name and JSON body into a typed response.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// The body is not a JSON object.
    #[error("response body is not a JSON object")]
    NotAnObject,

    /// The operation name is not one this crate models.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// The body does not match the operation's output shape.
    #[error("malformed {operation} response: {source}")]
    Malformed {
        /// The operation whose output was being parsed.
        operation: DynamoDBOperation,
        /// The underlying JSON error.
        source: serde_json::Error,
    },
}
