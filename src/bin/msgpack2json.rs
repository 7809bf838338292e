//! CLI filter: reads a MessagePack byte stream from stdin, writes a
//! pretty-printed JSON document to stdout. See SPEC_FULL.md §4.I / §6.
//!
//! Takes no flags, reads no environment variables beyond `RUST_LOG`
//! (consumed by `tracing-subscriber`'s `EnvFilter`). On unparsable input it
//! logs a warning and prints `null`, matching the documented current
//! behavior rather than changing the exit-code contract (§9, DESIGN.md
//! Open Question 11).

use std::io::{Read, Write};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use mpack::codec::decode;
use mpack::json::roots_to_json;

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .try_init();

    let mut input = Vec::new();
    std::io::stdin().read_to_end(&mut input)?;

    let json = match decode(&input) {
        Ok((roots, count)) => {
            tracing::debug!(count, "decoded stream for JSON bridge");
            roots_to_json(&roots)
        }
        Err(e) => {
            tracing::warn!(error = ?e, "input did not decode as MessagePack, emitting null");
            serde_json::Value::Null
        }
    };

    let rendered = serde_json::to_string_pretty(&json)?;
    let mut stdout = std::io::stdout();
    stdout.write_all(rendered.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}
