//! CLI filter: reads a JSON document from stdin, writes MessagePack bytes
//! to stdout. See SPEC_FULL.md §4.I / §6.
//!
//! Takes no flags, reads no environment variables beyond `RUST_LOG`. On
//! unparsable JSON it logs a warning and emits a single `nil` byte rather
//! than failing the process (§9, DESIGN.md Open Question 11).

use std::io::{Read, Write};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use mpack::codec::encode;
use mpack::json::json_to_value;
use mpack::value::Value;

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .try_init();

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let value = match serde_json::from_str::<serde_json::Value>(&input) {
        Ok(json) => json_to_value(&json),
        Err(e) => {
            tracing::warn!(error = ?e, "input did not parse as JSON, emitting nil");
            Value::Nil
        }
    };

    let bytes = encode(&value);
    std::io::stdout().write_all(&bytes)?;
    Ok(())
}
