//! Low-level encoders (Component D): one function per wire family, emitting
//! the shortest correct header for the given length/value, then payload
//! bytes. See SPEC_FULL.md §4.D and DESIGN.md Open Question 12 for the
//! ext8/16/32 field-order decision.

use crate::buffer::Buffer;
use crate::endian::{write_f32_be, write_f64_be};
use crate::value::Value;
use byteorder::{BigEndian, ByteOrder};

/// Encodes one `Value` (and, recursively, its children) into `buf`.
pub fn encode_value(buf: &mut Buffer, value: &Value) {
    match value {
        Value::Nil => buf.push(0xC0),
        Value::Bool(false) => buf.push(0xC2),
        Value::Bool(true) => buf.push(0xC3),
        Value::Int(n) => encode_int(buf, *n),
        Value::UInt(n) => encode_nonneg(buf, *n),
        Value::Float(f) => encode_float(buf, *f),
        Value::Str(bytes) => encode_str(buf, bytes),
        Value::Bin(bytes) => encode_bin(buf, bytes),
        Value::Ext(etype, data) => encode_ext(buf, *etype, data),
        Value::Array(items) => encode_array(buf, items),
        Value::Map(entries) => encode_map(buf, entries),
    }
}

fn encode_int(buf: &mut Buffer, n: i64) {
    if n >= 0 {
        encode_nonneg(buf, n as u64);
        return;
    }
    if n >= -32 {
        buf.push(n as i8 as u8);
    } else if n >= -128 {
        buf.push(0xD0);
        buf.push(n as i8 as u8);
    } else if n >= -32768 {
        buf.push(0xD1);
        let mut b = [0u8; 2];
        BigEndian::write_i16(&mut b, n as i16);
        buf.extend(&b);
    } else if n >= -(1i64 << 31) {
        buf.push(0xD2);
        let mut b = [0u8; 4];
        BigEndian::write_i32(&mut b, n as i32);
        buf.extend(&b);
    } else {
        buf.push(0xD3);
        let mut b = [0u8; 8];
        BigEndian::write_i64(&mut b, n);
        buf.extend(&b);
    }
}

fn encode_nonneg(buf: &mut Buffer, n: u64) {
    if n <= 0x7F {
        buf.push(n as u8);
    } else if n <= 0xFF {
        buf.push(0xCC);
        buf.push(n as u8);
    } else if n <= 0xFFFF {
        buf.push(0xCD);
        let mut b = [0u8; 2];
        BigEndian::write_u16(&mut b, n as u16);
        buf.extend(&b);
    } else if n <= 0xFFFF_FFFF {
        buf.push(0xCE);
        let mut b = [0u8; 4];
        BigEndian::write_u32(&mut b, n as u32);
        buf.extend(&b);
    } else {
        buf.push(0xCF);
        let mut b = [0u8; 8];
        BigEndian::write_u64(&mut b, n);
        buf.extend(&b);
    }
}

fn encode_float(buf: &mut Buffer, f: f64) {
    let as32 = f as f32;
    if (as32 as f64) == f {
        buf.push(0xCA);
        let mut b = [0u8; 4];
        write_f32_be(&mut b, as32);
        buf.extend(&b);
    } else {
        buf.push(0xCB);
        let mut b = [0u8; 8];
        write_f64_be(&mut b, f);
        buf.extend(&b);
    }
}

fn encode_str(buf: &mut Buffer, bytes: &[u8]) {
    let len = bytes.len();
    if len < 32 {
        buf.push(0xA0 | len as u8);
    } else if len <= 0xFF {
        buf.push(0xD9);
        buf.push(len as u8);
    } else if len <= 0xFFFF {
        buf.push(0xDA);
        let mut b = [0u8; 2];
        BigEndian::write_u16(&mut b, len as u16);
        buf.extend(&b);
    } else {
        buf.push(0xDB);
        let mut b = [0u8; 4];
        BigEndian::write_u32(&mut b, len as u32);
        buf.extend(&b);
    }
    buf.extend(bytes);
}

fn encode_bin(buf: &mut Buffer, bytes: &[u8]) {
    let len = bytes.len();
    if len <= 0xFF {
        buf.push(0xC4);
        buf.push(len as u8);
    } else if len <= 0xFFFF {
        buf.push(0xC5);
        let mut b = [0u8; 2];
        BigEndian::write_u16(&mut b, len as u16);
        buf.extend(&b);
    } else {
        buf.push(0xC6);
        let mut b = [0u8; 4];
        BigEndian::write_u32(&mut b, len as u32);
        buf.extend(&b);
    }
    buf.extend(bytes);
}

fn encode_ext(buf: &mut Buffer, etype: i8, data: &[u8]) {
    let len = data.len();
    if let Some(log2) = fixext_log2(len) {
        buf.push(0xD4 + log2);
        buf.push(etype as u8);
        buf.extend(data);
        return;
    }
    if len <= 0xFF {
        buf.push(0xC7);
        buf.push(len as u8);
    } else if len <= 0xFFFF {
        buf.push(0xC8);
        let mut b = [0u8; 2];
        BigEndian::write_u16(&mut b, len as u16);
        buf.extend(&b);
    } else {
        buf.push(0xC9);
        let mut b = [0u8; 4];
        BigEndian::write_u32(&mut b, len as u32);
        buf.extend(&b);
    }
    buf.push(etype as u8);
    buf.extend(data);
}

/// `Some(log2)` for len in {1, 2, 4, 8, 16}, else `None`.
fn fixext_log2(len: usize) -> Option<u8> {
    match len {
        1 => Some(0),
        2 => Some(1),
        4 => Some(2),
        8 => Some(3),
        16 => Some(4),
        _ => None,
    }
}

fn encode_array(buf: &mut Buffer, items: &[Value]) {
    let len = items.len();
    if len <= 15 {
        buf.push(0x90 | len as u8);
    } else if len <= 0xFFFF {
        buf.push(0xDC);
        let mut b = [0u8; 2];
        BigEndian::write_u16(&mut b, len as u16);
        buf.extend(&b);
    } else {
        buf.push(0xDD);
        let mut b = [0u8; 4];
        BigEndian::write_u32(&mut b, len as u32);
        buf.extend(&b);
    }
    for item in items {
        encode_value(buf, item);
    }
}

fn encode_map(buf: &mut Buffer, entries: &[(Value, Value)]) {
    let len = entries.len();
    if len <= 15 {
        buf.push(0x80 | len as u8);
    } else if len <= 0xFFFF {
        buf.push(0xDE);
        let mut b = [0u8; 2];
        BigEndian::write_u16(&mut b, len as u16);
        buf.extend(&b);
    } else {
        buf.push(0xDF);
        let mut b = [0u8; 4];
        BigEndian::write_u32(&mut b, len as u32);
        buf.extend(&b);
    }
    for (k, v) in entries {
        encode_value(buf, k);
        encode_value(buf, v);
    }
}
