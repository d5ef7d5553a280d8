//! Byte transforms applied to whole fields, independent of any cursor.

use crate::error::{Result, Unsupported};
use alloc::vec::Vec;

/// XORs every byte of `data` with `key`.
pub fn process_xor_one(data: &[u8], key: u8) -> Vec<u8> {
    data.iter().map(|&b| b ^ key).collect()
}

/// XORs `data` with `key`, repeating `key` as often as needed.
///
/// `key` must not be empty.
pub fn process_xor_many(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(Unsupported::EmptyXorKey.into());
    }
    Ok(data
        .iter()
        .zip(key.iter().cycle())
        .map(|(&b, &k)| b ^ k)
        .collect())
}

/// Rotates the bits of each group of `group_size` bytes left by `amount`. A negative `amount`
/// rotates right.
///
/// Only `group_size == 1` is implemented; other sizes fail with `Unsupported::RotateGroupSize`.
pub fn process_rotate_left(data: &[u8], amount: i32, group_size: usize) -> Result<Vec<u8>> {
    if group_size != 1 {
        return Err(Unsupported::RotateGroupSize(group_size).into());
    }
    let amount = amount.rem_euclid(8) as u32;
    Ok(data.iter().map(|&b| b.rotate_left(amount)).collect())
}

/// Decompresses a zlib stream (RFC 1950).
#[cfg(feature = "zlib")]
pub fn process_zlib(data: &[u8]) -> Result<Vec<u8>> {
    use crate::error::DecodeError;
    use std::io::Read;

    let mut out = Vec::new();
    match flate2::read::ZlibDecoder::new(data).read_to_end(&mut out) {
        Ok(_) => Ok(out),
        Err(e) => {
            log::debug!("zlib decompression failed after {} bytes: {e}", out.len());
            Err(DecodeError::Zlib(e.to_string()).into())
        }
    }
}

/// Removes trailing `pad` bytes.
pub fn bytes_strip_right(data: &[u8], pad: u8) -> &[u8] {
    let end = data.iter().rposition(|&b| b != pad).map_or(0, |i| i + 1);
    &data[..end]
}

/// Cuts `data` at the first `term` byte, keeping the terminator if `include` is set. Returns all
/// of `data` if there is no terminator.
pub fn bytes_terminate(data: &[u8], term: u8, include: bool) -> &[u8] {
    match data.iter().position(|&b| b == term) {
        Some(i) => &data[..i + include as usize],
        None => data,
    }
}
