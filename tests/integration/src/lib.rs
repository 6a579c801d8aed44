//! Integration tests for dynoplain.
//!
//! Each test feeds a DynamoDB response, either as the JSON document the
//! service returns or as an `aws-sdk-dynamodb` output, through the decoder and
//! checks the plain result.

use std::sync::Once;

use dynoplain_core::{DecoderConfig, ResponseDecoder};

#[cfg(test)]
mod test_batch;
#[cfg(test)]
mod test_decode;
#[cfg(test)]
mod test_sdk;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// A decoder with the default configuration.
#[must_use]
pub fn decoder() -> ResponseDecoder {
    init_tracing();
    ResponseDecoder::new()
}

/// A decoder with an explicit configuration.
#[must_use]
pub fn decoder_with(config: DecoderConfig) -> ResponseDecoder {
    init_tracing();
    ResponseDecoder::with_config(config)
}
