//! Fixed-width, wire-endianness float helpers.
//!
//! MessagePack is big-endian on the wire for every multi-byte field.
//! Integers are handled directly in [`crate::decode`]/[`crate::encode`] via
//! `byteorder::BigEndian`; this module exists for the float32/float64
//! payloads, which need the bit pattern preserved exactly (no value-based
//! rounding, only a byte-order transform).
//!
//! The reference C implementation this format is modeled on probes host
//! endianness at runtime and conditionally byte-swaps in place. `byteorder`
//! already picks the right instructions for the host at compile time, so
//! there is no runtime probe here — see DESIGN.md.

use byteorder::{BigEndian, ByteOrder};

#[inline]
pub fn write_f32_be(buf: &mut [u8; 4], value: f32) {
    BigEndian::write_f32(buf, value);
}

#[inline]
pub fn read_f32_be(buf: &[u8]) -> f32 {
    BigEndian::read_f32(buf)
}

#[inline]
pub fn write_f64_be(buf: &mut [u8; 8], value: f64) {
    BigEndian::write_f64(buf, value);
}

#[inline]
pub fn read_f64_be(buf: &[u8]) -> f64 {
    BigEndian::read_f64(buf)
}
