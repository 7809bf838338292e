#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

// Needed for Vec
extern crate alloc;

pub mod buffer;
pub mod codec;
pub mod cursor;
pub mod decode;
pub mod encode;
pub mod endian;
pub mod error;
pub mod value;

#[cfg(feature = "std")]
pub mod json;

pub use codec::{decode as decode_stream, encode as encode_value};
pub use error::MPackError;
pub use value::Value;
