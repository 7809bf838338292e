//! Top-level codec (Component H): the multi-value unpack loop and the
//! single-value pack entry point. See SPEC_FULL.md §4.H.

use alloc::vec::Vec;

use crate::buffer::Buffer;
use crate::cursor::Cursor;
use crate::decode::decode_value;
use crate::encode::encode_value;
use crate::error::MPackError;
use crate::value::Value;

/// Decodes every MessagePack value in `input`, in order.
///
/// MessagePack carries no outer framing, so a byte slice may hold zero or
/// more concatenated top-level values; decoding continues until the input
/// is exhausted. Returns the root values and their count (`Vec::len()`
/// duplicated as a second field for parity with the distilled spec's
/// "count of roots" return convention). On any decode error the partial
/// tree is dropped and the error is returned — the decoder never hands
/// back a partially populated stream.
#[cfg_attr(feature = "std", tracing::instrument(level = "debug", skip(input), fields(len = input.len())))]
pub fn decode(input: &[u8]) -> Result<(Vec<Value>, usize), MPackError> {
    let mut cursor = Cursor::new(input);
    let mut roots = Vec::new();

    while !cursor.is_empty() {
        match decode_value(&mut cursor) {
            Ok(value) => roots.push(value),
            Err(e) => {
                #[cfg(feature = "std")]
                tracing::debug!(error = ?e, "decode failed, discarding partial stream");
                return Err(e);
            }
        }
    }

    if roots.is_empty() {
        return Err(MPackError::Truncated);
    }

    #[cfg(feature = "std")]
    tracing::debug!(roots = roots.len(), "decoded top-level stream");

    let count = roots.len();
    Ok((roots, count))
}

/// Encodes a single `Value` (and its full subtree) to an owned byte buffer.
///
/// Multi-value streams are packed by chaining siblings manually at a
/// higher layer — e.g. `Value::Array(values)` if a length-prefixed
/// grouping is wanted, or by calling `encode` once per root and
/// concatenating the results for a bare concatenated stream.
#[cfg_attr(feature = "std", tracing::instrument(level = "debug", skip(value)))]
pub fn encode(value: &Value) -> Vec<u8> {
    let mut buf = Buffer::with_capacity(64);
    encode_value(&mut buf, value);
    let bytes = buf.finish();

    #[cfg(feature = "std")]
    tracing::debug!(len = bytes.len(), "encoded value");

    bytes
}
