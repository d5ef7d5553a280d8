use crate::cursor::ByteCursor;
use crate::encoding::{decode_opt, Encoding};
use crate::endian::Endian;
use crate::error::{CursorError, Result, Unsupported};
use alloc::string::String;

/// Policy for terminator-delimited reads (`read_strz`, `read_bytes_term`).
///
/// The default is the usual C string: stop at a zero byte, leave it out of the result, step over
/// it, and fail if there isn't one.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Strz {
    /// The byte that ends the string.
    pub terminator: u8,
    /// Include the terminator in the returned bytes.
    pub include: bool,
    /// Advance the position past the terminator. This is independent of `include`.
    pub consume: bool,
    /// If no terminator is found, fail with `TerminatorNotFound`. Otherwise the rest of the window
    /// is returned.
    pub eos_error: bool,
}

impl Default for Strz {
    fn default() -> Self {
        Self {
            terminator: 0,
            include: false,
            consume: true,
            eos_error: true,
        }
    }
}

impl Strz {
    /// Default policy with a different terminator.
    pub fn terminated_by(terminator: u8) -> Self {
        Self {
            terminator,
            ..Self::default()
        }
    }

    /// Sets `include`.
    pub fn include(self, include: bool) -> Self {
        Self { include, ..self }
    }

    /// Sets `consume`.
    pub fn consume(self, consume: bool) -> Self {
        Self { consume, ..self }
    }

    /// Sets `eos_error`.
    pub fn eos_error(self, eos_error: bool) -> Self {
        Self { eos_error, ..self }
    }
}

impl<'a> ByteCursor<'a> {
    /// Reads a small array of bytes, with a constant length.
    #[inline(always)]
    pub fn read_cbytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        let range = self.take(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.buf[range]);
        Ok(out)
    }

    /// Reads an unsigned 8-bit integer.
    #[inline(always)]
    pub fn read_u1(&mut self) -> Result<u8> {
        let [b] = self.read_cbytes()?;
        Ok(b)
    }

    /// Reads a signed 8-bit integer.
    #[inline(always)]
    pub fn read_s1(&mut self) -> Result<i8> {
        Ok(self.read_u1()? as i8)
    }

    /// Reads a `u16` in little-endian byte order.
    #[inline(always)]
    pub fn read_u2le(&mut self) -> Result<u16> {
        Ok(u16::from_le_bytes(self.read_cbytes()?))
    }

    /// Reads a `u16` in big-endian byte order.
    #[inline(always)]
    pub fn read_u2be(&mut self) -> Result<u16> {
        Ok(u16::from_be_bytes(self.read_cbytes()?))
    }

    /// Reads a `i16` in little-endian byte order.
    #[inline(always)]
    pub fn read_s2le(&mut self) -> Result<i16> {
        Ok(i16::from_le_bytes(self.read_cbytes()?))
    }

    /// Reads a `i16` in big-endian byte order.
    #[inline(always)]
    pub fn read_s2be(&mut self) -> Result<i16> {
        Ok(i16::from_be_bytes(self.read_cbytes()?))
    }

    /// Reads a `u32` in little-endian byte order.
    #[inline(always)]
    pub fn read_u4le(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.read_cbytes()?))
    }

    /// Reads a `u32` in big-endian byte order.
    #[inline(always)]
    pub fn read_u4be(&mut self) -> Result<u32> {
        Ok(u32::from_be_bytes(self.read_cbytes()?))
    }

    /// Reads a `i32` in little-endian byte order.
    #[inline(always)]
    pub fn read_s4le(&mut self) -> Result<i32> {
        Ok(i32::from_le_bytes(self.read_cbytes()?))
    }

    /// Reads a `i32` in big-endian byte order.
    #[inline(always)]
    pub fn read_s4be(&mut self) -> Result<i32> {
        Ok(i32::from_be_bytes(self.read_cbytes()?))
    }

    // 64-bit integers are a known gap. These exist so that callers get a clear error instead of a
    // missing method or a truncated value; they never consume input.

    /// Not implemented. Always fails with `Unsupported::Int64`.
    pub fn read_u8le(&mut self) -> Result<u64> {
        Err(Unsupported::Int64.into())
    }

    /// Not implemented. Always fails with `Unsupported::Int64`.
    pub fn read_u8be(&mut self) -> Result<u64> {
        Err(Unsupported::Int64.into())
    }

    /// Not implemented. Always fails with `Unsupported::Int64`.
    pub fn read_s8le(&mut self) -> Result<i64> {
        Err(Unsupported::Int64.into())
    }

    /// Not implemented. Always fails with `Unsupported::Int64`.
    pub fn read_s8be(&mut self) -> Result<i64> {
        Err(Unsupported::Int64.into())
    }

    /// Reads an `f32` in little-endian byte order.
    #[inline(always)]
    pub fn read_f4le(&mut self) -> Result<f32> {
        Ok(f32::from_le_bytes(self.read_cbytes()?))
    }

    /// Reads an `f32` in big-endian byte order.
    #[inline(always)]
    pub fn read_f4be(&mut self) -> Result<f32> {
        Ok(f32::from_be_bytes(self.read_cbytes()?))
    }

    /// Reads an `f64` in little-endian byte order.
    #[inline(always)]
    pub fn read_f8le(&mut self) -> Result<f64> {
        Ok(f64::from_le_bytes(self.read_cbytes()?))
    }

    /// Reads an `f64` in big-endian byte order.
    #[inline(always)]
    pub fn read_f8be(&mut self) -> Result<f64> {
        Ok(f64::from_be_bytes(self.read_cbytes()?))
    }

    /// Reads an `f32` in byte order `endian`, or native byte order if `None`.
    #[deprecated(note = "use `read_f4le` or `read_f4be`")]
    pub fn read_f4(&mut self, endian: Option<Endian>) -> Result<f32> {
        match endian.unwrap_or(Endian::NATIVE) {
            Endian::Little => self.read_f4le(),
            Endian::Big => self.read_f4be(),
        }
    }

    /// Reads an `f64` in byte order `endian`, or native byte order if `None`.
    #[deprecated(note = "use `read_f8le` or `read_f8be`")]
    pub fn read_f8(&mut self, endian: Option<Endian>) -> Result<f64> {
        match endian.unwrap_or(Endian::NATIVE) {
            Endian::Little => self.read_f8le(),
            Endian::Big => self.read_f8be(),
        }
    }

    /// Reads an `n`-bit unsigned integer, most-significant bit first. `n` may be up to 64.
    ///
    /// Bits not used by this read are kept for the next bit-level read. Any byte-level read or
    /// seek discards them.
    pub fn read_bits_int_be(&mut self, n: u32) -> Result<u64> {
        if n > 64 {
            return Err(Unsupported::BitWidth(n).into());
        }
        let mut acc = self.bits as u128;
        let mut have = self.bits_left;
        if n > have {
            let range = self.take_raw((n - have).div_ceil(8) as usize)?;
            for &b in &self.buf[range] {
                acc = (acc << 8) | b as u128;
                have += 8;
            }
        }
        let rest = have - n;
        let value = (acc >> rest) as u64 & low_mask(n);
        self.bits = acc as u64 & low_mask(rest);
        self.bits_left = rest;
        Ok(value)
    }

    /// Reads an `n`-bit unsigned integer, least-significant bit first. `n` may be up to 64.
    pub fn read_bits_int_le(&mut self, n: u32) -> Result<u64> {
        if n > 64 {
            return Err(Unsupported::BitWidth(n).into());
        }
        let mut acc = self.bits as u128;
        let mut have = self.bits_left;
        if n > have {
            let range = self.take_raw((n - have).div_ceil(8) as usize)?;
            for &b in &self.buf[range] {
                acc |= (b as u128) << have;
                have += 8;
            }
        }
        let value = acc as u64 & low_mask(n);
        self.bits = (acc >> n) as u64;
        self.bits_left = have - n;
        Ok(value)
    }

    /// Reads a slice of bytes whose length is `len`. This function returns a slice reference
    /// to the bytes; it does not copy them.
    pub fn read_bytes(&mut self, len: usize) -> Result<&[u8]> {
        let range = self.take(len)?;
        Ok(&self.buf[range])
    }

    /// Reads `len` bytes and returns them as a `bstr::BStr`.
    #[cfg(feature = "bstr")]
    pub fn read_bytes_bstr(&mut self, len: usize) -> Result<&bstr::BStr> {
        Ok(bstr::BStr::new(self.read_bytes(len)?))
    }

    /// Reads everything from the position to the end of the window.
    pub fn read_bytes_full(&mut self) -> Result<&[u8]> {
        self.read_bytes(self.remaining())
    }

    /// Reads bytes up to a terminator, as described by `strz`.
    ///
    /// The scan does not move the position. When the terminator is found `i` bytes ahead, the
    /// position advances by `i`, plus one if `strz.consume` is set. When it is not found and
    /// `strz.eos_error` is clear, the rest of the window is returned and the position moves to
    /// its end.
    pub fn read_bytes_term(&mut self, strz: Strz) -> Result<&[u8]> {
        self.align_to_byte();
        let start = self.offset + self.pos;
        let found = self.rest().iter().position(|&b| b == strz.terminator);
        match found {
            Some(i) => {
                self.pos += i + strz.consume as usize;
                Ok(&self.buf[start..start + i + strz.include as usize])
            }
            None if strz.eos_error => Err(CursorError::TerminatorNotFound {
                terminator: strz.terminator,
            }),
            None => {
                self.pos = self.size();
                Ok(&self.buf[start..self.true_len])
            }
        }
    }

    /// Reads exactly `len` bytes and decodes them. `None` decodes as [`Encoding::Ascii`].
    ///
    /// If decoding fails, the bytes have still been consumed.
    pub fn read_str_byte_limit(&mut self, len: usize, encoding: Option<Encoding>) -> Result<String> {
        decode_opt(self.read_bytes(len)?, encoding)
    }

    /// Decodes everything from the position to the end of the window.
    pub fn read_str_eos(&mut self, encoding: Option<Encoding>) -> Result<String> {
        decode_opt(self.read_bytes_full()?, encoding)
    }

    /// Reads a terminator-delimited string. See `read_bytes_term` for how `strz` is applied.
    pub fn read_strz(&mut self, encoding: Option<Encoding>, strz: Strz) -> Result<String> {
        decode_opt(self.read_bytes_term(strz)?, encoding)
    }
}

fn low_mask(n: u32) -> u64 {
    if n >= 64 {
        u64::MAX
    } else {
        (1u64 << n) - 1
    }
}
