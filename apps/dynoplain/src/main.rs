//! dynoplain - decode a DynamoDB JSON response into plain JSON.
//!
//! Reads the response body of one DynamoDB operation and prints the items with
//! their type tags stripped.
//!
//! # Usage
//!
//! ```text
//! aws dynamodb scan --table-name T --output json | dynoplain Scan
//! dynoplain GetItem response.json
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `DYNOPLAIN_MAX_DEPTH` | *(unset = unbounded)* | Maximum `M`/`L` nesting depth |
//! | `DYNOPLAIN_SORT_BATCH_TABLES` | `true` | Flatten `BatchGetItem` tables in name order |
//! | `LOG_LEVEL` | `warn` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use dynoplain_core::{DecoderConfig, ResponseDecoder};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: dynoplain <OPERATION> [FILE]

Decode a DynamoDB JSON response body into plain JSON.

  OPERATION  GetItem, Query, Scan or BatchGetItem
  FILE       response body to read; stdin when absent or '-'";

/// Initialize the tracing subscriber on stderr.
///
/// Uses `RUST_LOG` if set, otherwise falls back to `log_level`.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    Ok(())
}

fn log_level() -> String {
    std::env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_owned())
}

fn read_body(path: Option<&str>) -> Result<String> {
    match path {
        None | Some("-") => {
            let mut body = String::new();
            io::stdin()
                .read_to_string(&mut body)
                .context("failed to read response body from stdin")?;
            Ok(body)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read response body from {path}")),
    }
}

/// Command-line arguments after the program name.
#[derive(Debug, PartialEq, Eq)]
struct Args {
    operation: String,
    source: Option<String>,
}

/// Parse the arguments. `Ok(None)` means help was requested.
fn parse_args(args: &[String]) -> Result<Option<Args>> {
    if args.iter().any(|a| a == "--help" || a == "-h") {
        return Ok(None);
    }
    match args {
        [] => anyhow::bail!("missing OPERATION\n\n{USAGE}"),
        [operation] => Ok(Some(Args {
            operation: operation.clone(),
            source: None,
        })),
        [operation, source] => Ok(Some(Args {
            operation: operation.clone(),
            source: Some(source.clone()),
        })),
        [_, _, extra, ..] => anyhow::bail!("unexpected argument: {extra}\n\n{USAGE}"),
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(Args { operation, source }) = parse_args(&args)? else {
        println!("{USAGE}");
        return Ok(());
    };

    init_tracing(&log_level())?;

    let operation = operation.as_str();

    let config = DecoderConfig::from_env();
    info!(
        max_depth = ?config.max_depth,
        sort_batch_tables = config.sort_batch_tables,
        "starting decoder",
    );

    let raw = read_body(source.as_deref())?;
    debug!(bytes = raw.len(), "read response body");
    let body: serde_json::Value =
        serde_json::from_str(&raw).context("response body is not valid JSON")?;

    let decoded = ResponseDecoder::with_config(config)
        .decode_json(operation, &body)
        .with_context(|| format!("failed to decode {operation} response"))?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &decoded).context("failed to write output")?;
    writeln!(stdout).context("failed to write output")?;
    Ok(())
}
