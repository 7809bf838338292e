//! The input cursor (Component C): position + remaining length over an
//! input slice, with bounded `need`/`consume` helpers so every decoder path
//! checks its bounds before reading.

use crate::error::MPackError;
use byteorder::{BigEndian, ByteOrder};

pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Fails with `Truncated` if fewer than `k` bytes remain.
    #[inline]
    pub fn need(&self, k: usize) -> Result<(), MPackError> {
        if self.remaining() < k {
            Err(MPackError::Truncated)
        } else {
            Ok(())
        }
    }

    /// Reads exactly `k` bytes and advances the cursor.
    pub fn take(&mut self, k: usize) -> Result<&'a [u8], MPackError> {
        self.need(k)?;
        let slice = &self.input[self.pos..self.pos + k];
        self.pos += k;
        Ok(slice)
    }

    pub fn take_u8(&mut self) -> Result<u8, MPackError> {
        Ok(self.take(1)?[0])
    }

    pub fn take_u16_be(&mut self) -> Result<u16, MPackError> {
        Ok(BigEndian::read_u16(self.take(2)?))
    }

    pub fn take_u32_be(&mut self) -> Result<u32, MPackError> {
        Ok(BigEndian::read_u32(self.take(4)?))
    }

    pub fn take_u64_be(&mut self) -> Result<u64, MPackError> {
        Ok(BigEndian::read_u64(self.take(8)?))
    }

    pub fn take_i8(&mut self) -> Result<i8, MPackError> {
        Ok(self.take_u8()? as i8)
    }

    pub fn take_i16_be(&mut self) -> Result<i16, MPackError> {
        Ok(BigEndian::read_i16(self.take(2)?))
    }

    pub fn take_i32_be(&mut self) -> Result<i32, MPackError> {
        Ok(BigEndian::read_i32(self.take(4)?))
    }

    pub fn take_i64_be(&mut self) -> Result<i64, MPackError> {
        Ok(BigEndian::read_i64(self.take(8)?))
    }

    pub fn take_f32_be(&mut self) -> Result<f32, MPackError> {
        Ok(crate::endian::read_f32_be(self.take(4)?))
    }

    pub fn take_f64_be(&mut self) -> Result<f64, MPackError> {
        Ok(crate::endian::read_f64_be(self.take(8)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn need_fails_before_consuming() {
        let mut c = Cursor::new(&[0x01]);
        assert_eq!(c.need(2), Err(MPackError::Truncated));
        assert_eq!(c.take_u8(), Ok(0x01));
        assert_eq!(c.take(1), Err(MPackError::Truncated));
    }

    #[test]
    fn multi_byte_reads_are_big_endian() {
        let mut c = Cursor::new(&[0x00, 0x01, 0x00, 0x00, 0x00, 0x02]);
        assert_eq!(c.take_u16_be(), Ok(1));
        assert_eq!(c.take_u32_be(), Ok(2));
    }

    #[test]
    fn is_empty_tracks_position() {
        let mut c = Cursor::new(&[0xAA]);
        assert!(!c.is_empty());
        let _ = c.take_u8();
        assert!(c.is_empty());
    }
}
