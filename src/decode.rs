//! Low-level decoder (Component E): a dispatch table on the header byte,
//! recursing into container children. See SPEC_FULL.md §4.E.
//!
//! Ext-32 is decoded per the strict MessagePack layout (4-byte BE length,
//! then 1-byte etype) — the reference implementation's header-overlap bug
//! is not reproduced. See DESIGN.md, Open Question 8/12.

use alloc::vec::Vec;

use crate::cursor::Cursor;
use crate::error::MPackError;
use crate::value::Value;

/// Nesting depth beyond which `decode_value` refuses to recurse further.
/// Raw MessagePack carries no depth field to bound this from; this caps an
/// adversarial input from driving a stack overflow. See DESIGN.md, Open
/// Question 10.
pub const MAX_DEPTH: usize = 512;

/// Decodes one MessagePack value (and, recursively, its children) from
/// `cursor`.
pub fn decode_value(cursor: &mut Cursor<'_>) -> Result<Value, MPackError> {
    decode_value_depth(cursor, 0)
}

fn decode_value_depth(cursor: &mut Cursor<'_>, depth: usize) -> Result<Value, MPackError> {
    if depth > MAX_DEPTH {
        return Err(MPackError::TooDeep);
    }

    let header = cursor.take_u8()?;
    match header {
        0xC0 => Ok(Value::Nil),
        0xC2 => Ok(Value::Bool(false)),
        0xC3 => Ok(Value::Bool(true)),

        0xCA => Ok(Value::Float(cursor.take_f32_be()? as f64)),
        0xCB => Ok(Value::Float(cursor.take_f64_be()?)),

        0xCC => Ok(canonicalize_uint(cursor.take_u8()? as u64)),
        0xCD => Ok(canonicalize_uint(cursor.take_u16_be()? as u64)),
        0xCE => Ok(canonicalize_uint(cursor.take_u32_be()? as u64)),
        0xCF => Ok(canonicalize_uint(cursor.take_u64_be()?)),

        0xD0 => Ok(Value::Int(cursor.take_i8()? as i64)),
        0xD1 => Ok(Value::Int(cursor.take_i16_be()? as i64)),
        0xD2 => Ok(Value::Int(cursor.take_i32_be()? as i64)),
        0xD3 => Ok(Value::Int(cursor.take_i64_be()?)),

        0xA0..=0xBF => decode_str(cursor, (header & 0x1F) as usize),
        0xD9 => {
            let len = cursor.take_u8()? as usize;
            decode_str(cursor, len)
        }
        0xDA => {
            let len = cursor.take_u16_be()? as usize;
            decode_str(cursor, len)
        }
        0xDB => {
            let len = cursor.take_u32_be()? as usize;
            decode_str(cursor, len)
        }

        0xC4 => {
            let len = cursor.take_u8()? as usize;
            decode_bin(cursor, len)
        }
        0xC5 => {
            let len = cursor.take_u16_be()? as usize;
            decode_bin(cursor, len)
        }
        0xC6 => {
            let len = cursor.take_u32_be()? as usize;
            decode_bin(cursor, len)
        }

        0xD4..=0xD8 => {
            let len = 1usize << (header - 0xD4);
            let etype = cursor.take_i8()?;
            decode_ext(cursor, etype, len)
        }
        0xC7 => {
            let len = cursor.take_u8()? as usize;
            let etype = cursor.take_i8()?;
            decode_ext(cursor, etype, len)
        }
        0xC8 => {
            let len = cursor.take_u16_be()? as usize;
            let etype = cursor.take_i8()?;
            decode_ext(cursor, etype, len)
        }
        0xC9 => {
            let len = cursor.take_u32_be()? as usize;
            let etype = cursor.take_i8()?;
            decode_ext(cursor, etype, len)
        }

        0x90..=0x9F => decode_array(cursor, (header & 0x0F) as usize, depth),
        0xDC => {
            let len = cursor.take_u16_be()? as usize;
            decode_array(cursor, len, depth)
        }
        0xDD => {
            let len = cursor.take_u32_be()? as usize;
            decode_array(cursor, len, depth)
        }

        0x80..=0x8F => decode_map(cursor, (header & 0x0F) as usize, depth),
        0xDE => {
            let len = cursor.take_u16_be()? as usize;
            decode_map(cursor, len, depth)
        }
        0xDF => {
            let len = cursor.take_u32_be()? as usize;
            decode_map(cursor, len, depth)
        }

        // Positive fixnum (0x00-0x7F) and negative fixnum (0xE0-0xFF).
        0x00..=0x7F => Ok(Value::Int(header as i64)),
        0xE0..=0xFF => Ok(Value::Int(header as i8 as i64)),

        other => Err(MPackError::Unknown(other)),
    }
}

/// Canonicalizes a decoded non-negative wire value by magnitude, not by
/// wire-family tag: uint8/16/32 always fit `i64`, and uint64 does too
/// unless its top bit is set. Every `0xCC..=0xCF` header routes through
/// this, so all of them agree with `0xCF`'s own canonicalization instead
/// of uint8/16/32 disagreeing with it. See DESIGN.md, Open Question 3.
fn canonicalize_uint(n: u64) -> Value {
    match i64::try_from(n) {
        Ok(signed) => Value::Int(signed),
        Err(_) => Value::UInt(n),
    }
}

/// Bound on a single length-prefixed payload, checked before allocating so
/// a hostile length prefix cannot force an oversized allocation.
fn checked_payload(cursor: &mut Cursor<'_>, len: usize) -> Result<&[u8], MPackError> {
    if len > cursor.remaining() {
        return Err(MPackError::PayloadTooLarge(len as u32));
    }
    cursor.take(len)
}

fn decode_str(cursor: &mut Cursor<'_>, len: usize) -> Result<Value, MPackError> {
    Ok(Value::Str(checked_payload(cursor, len)?.to_vec()))
}

fn decode_bin(cursor: &mut Cursor<'_>, len: usize) -> Result<Value, MPackError> {
    Ok(Value::Bin(checked_payload(cursor, len)?.to_vec()))
}

fn decode_ext(cursor: &mut Cursor<'_>, etype: i8, len: usize) -> Result<Value, MPackError> {
    Ok(Value::Ext(etype, checked_payload(cursor, len)?.to_vec()))
}

fn decode_array(cursor: &mut Cursor<'_>, len: usize, depth: usize) -> Result<Value, MPackError> {
    let mut items = Vec::with_capacity(len.min(1024));
    for _ in 0..len {
        items.push(decode_value_depth(cursor, depth + 1)?);
    }
    Ok(Value::Array(items))
}

fn decode_map(cursor: &mut Cursor<'_>, len: usize, depth: usize) -> Result<Value, MPackError> {
    let mut entries = Vec::with_capacity(len.min(1024));
    for _ in 0..len {
        let key = decode_value_depth(cursor, depth + 1)?;
        let value = decode_value_depth(cursor, depth + 1)?;
        entries.push((key, value));
    }
    Ok(Value::Map(entries))
}
