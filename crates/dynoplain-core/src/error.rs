//! Decode failures.
//!
//! Every variant aborts the whole decode call; no partial structure is
//! returned.

use dynoplain_model::ResponseError;
use thiserror::Error;

/// Error returned by [`ResponseDecoder`](crate::ResponseDecoder).
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The response is not one of the item-bearing shapes, or not a response
    /// object at all.
    #[error("unsupported response type: {0}")]
    UnsupportedResponseType(String),

    /// An attribute value has no type slot populated. Carries a dump of the
    /// attribute.
    #[error("unsupported attribute type: {0}")]
    UnsupportedAttributeType(String),

    /// An `N` or `NS` member is not a finite decimal number.
    #[error("invalid number value: {0:?}")]
    InvalidNumber(String),

    /// Nested `M`/`L` values go deeper than the configured limit.
    #[error("attribute nesting exceeds maximum depth of {max_depth}")]
    DepthLimitExceeded {
        /// The configured limit.
        max_depth: usize,
    },

    /// The JSON body does not match the operation's output shape.
    #[error(transparent)]
    MalformedResponse(ResponseError),
}

impl From<ResponseError> for DecodeError {
    fn from(err: ResponseError) -> Self {
        match err {
            ResponseError::NotAnObject => {
                Self::UnsupportedResponseType("invalid response object".to_owned())
            }
            ResponseError::UnknownOperation(operation) => Self::UnsupportedResponseType(operation),
            malformed @ ResponseError::Malformed { .. } => Self::MalformedResponse(malformed),
        }
    }
}
