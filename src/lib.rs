//! A sequential, bounds-checked cursor over byte buffers.
//!
//! [`ByteCursor`] is the runtime that generated binary-format parsers call into. It reads
//! fixed-width integers and floats in either byte order, raw byte ranges, length- and
//! terminator-delimited strings, and bit fields. It can also write the same primitives, growing
//! an owned buffer as needed.
//!
//! The [`process`] functions apply the byte transforms that formats commonly layer over a field
//! (XOR, bit rotation, zlib).
//!
//! # Known limitations
//! * 64-bit integers are not decoded. `read_u8le` and friends always fail with
//!   `Unsupported::Int64`.
//! * `process_rotate_left` only supports a group size of 1.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

extern crate alloc;

mod cursor;
mod encoding;
mod endian;
mod error;
pub mod process;
mod reader;
mod writer;


pub use cursor::ByteCursor;
pub use encoding::{Encoding, TextDecoder};
pub use endian::{
    array_to_native, flip_array_endianness, native_to_endian, Endian, NATIVE_IS_LITTLE_ENDIAN,
};
pub use error::{CursorError, DecodeError, Result, Unsupported};
#[cfg(feature = "zlib")]
pub use process::process_zlib;
pub use process::{
    bytes_strip_right, bytes_terminate, process_rotate_left, process_xor_many, process_xor_one,
};
pub use reader::Strz;
