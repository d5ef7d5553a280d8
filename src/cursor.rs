use crate::error::{CursorError, Result};
use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::ops::Range;

/// A sequential reader (and, optionally, writer) over a window of a byte buffer.
///
/// The cursor looks at the bytes `buf[byte_offset..]`. Positions are relative to that window, so
/// position 0 is the byte at `byte_offset`. The window ends at the *logical length*, which is the
/// size of the supplied buffer, or the highest byte ever written if the cursor has been written
/// past its original end.
///
/// Every `read_*` method checks that enough bytes remain before it changes any state. A failed read
/// returns `CursorError::EndOfBuffer` and leaves the position where it was.
///
/// Reads borrow the cursor mutably, because they advance the position. A cursor is not meant to
/// be shared between threads. Separate cursors over the same bytes are independent of each other.
pub struct ByteCursor<'a> {
    pub(crate) buf: Cow<'a, [u8]>,
    pub(crate) offset: usize,
    /// Index in `buf` one past the last meaningful byte. `buf` may be longer than this when the
    /// cursor owns an over-allocated buffer.
    pub(crate) true_len: usize,
    pub(crate) pos: usize,
    /// Unconsumed bits left over from a bit-level read, in the low `bits_left` bits.
    pub(crate) bits: u64,
    pub(crate) bits_left: u32,
}

impl core::fmt::Debug for ByteCursor<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ByteCursor")
            .field("offset", &self.offset)
            .field("size", &self.size())
            .field("pos", &self.pos)
            .field("bits_left", &self.bits_left)
            .finish()
    }
}

impl<'a> ByteCursor<'a> {
    /// Creates a cursor over all of `data`, positioned at the start.
    pub fn new(data: &'a [u8]) -> Self {
        Self::from_cow(Cow::Borrowed(data), 0)
    }

    /// Creates a cursor over `data[offset..]`.
    ///
    /// Fails with `EndOfBuffer` if `offset` is past the end of `data`.
    pub fn with_offset(data: &'a [u8], offset: usize) -> Result<Self> {
        check_offset(data.len(), offset)?;
        Ok(Self::from_cow(Cow::Borrowed(data), offset))
    }

    fn from_cow(buf: Cow<'a, [u8]>, offset: usize) -> Self {
        Self {
            true_len: buf.len(),
            buf,
            offset,
            pos: 0,
            bits: 0,
            bits_left: 0,
        }
    }

    /// The current position, relative to the start of the window.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The logical length of the window.
    pub fn size(&self) -> usize {
        self.true_len - self.offset
    }

    /// The fixed offset of the window within the backing buffer.
    pub fn byte_offset(&self) -> usize {
        self.offset
    }

    /// The number of bytes between the position and the end of the window.
    pub fn remaining(&self) -> usize {
        self.size() - self.pos
    }

    /// Returns `true` if there is nothing left to read.
    ///
    /// Bits buffered by a bit-level read count as unread data.
    pub fn is_eof(&self) -> bool {
        self.pos >= self.size() && self.bits_left == 0
    }

    /// Moves the position to `pos`, clamped to `0..=size()`. Never fails.
    ///
    /// Any bits buffered by a bit-level read are discarded.
    pub fn seek(&mut self, pos: i64) {
        self.align_to_byte();
        self.pos = match usize::try_from(pos) {
            Ok(p) => p.min(self.size()),
            Err(_) if pos < 0 => 0,
            Err(_) => self.size(),
        };
    }

    /// Advances the position by `len` bytes.
    pub fn skip(&mut self, len: usize) -> Result<()> {
        self.take(len).map(|_| ())
    }

    /// Discards any bits buffered by a bit-level read, so that the next read starts on a byte
    /// boundary.
    pub fn align_to_byte(&mut self) {
        self.bits = 0;
        self.bits_left = 0;
    }

    /// Points the cursor at a different buffer, or a different window of the same one.
    ///
    /// The logical length is recomputed from the new buffer and offset. The position is kept,
    /// clamped to the new logical length; call `seek` afterward to start somewhere else.
    ///
    /// If `offset` is past the end of `buf`, the error is returned together with this cursor,
    /// unchanged.
    pub fn rebind<'b>(
        self,
        buf: impl Into<Cow<'b, [u8]>>,
        offset: usize,
    ) -> core::result::Result<ByteCursor<'b>, (Self, CursorError)> {
        let buf = buf.into();
        if let Err(e) = check_offset(buf.len(), offset) {
            return Err((self, e));
        }
        let mut cursor = ByteCursor::from_cow(buf, offset);
        cursor.pos = self.pos.min(cursor.size());
        log::trace!(
            "rebind: offset {} -> {}, size {} -> {}, pos {}",
            self.offset,
            cursor.offset,
            self.size(),
            cursor.size(),
            cursor.pos
        );
        Ok(cursor)
    }

    /// Trims any over-allocated tail of an owned buffer down to the logical length.
    ///
    /// Idempotent. Does nothing for borrowed buffers, which are never over-allocated.
    pub fn compact(&mut self) {
        if let Cow::Owned(v) = &mut self.buf {
            if v.len() > self.true_len {
                log::trace!("compact: {} -> {} bytes", v.len(), self.true_len);
                v.truncate(self.true_len);
                v.shrink_to_fit();
            }
        }
    }

    /// Compacts the buffer and returns the bytes of the window.
    pub fn to_buffer(&mut self) -> &[u8] {
        self.compact();
        &self.buf[self.offset..self.true_len]
    }

    /// Consumes the cursor and returns the bytes of the window, compacted.
    pub fn into_buffer(mut self) -> Cow<'a, [u8]> {
        self.compact();
        match self.buf {
            Cow::Borrowed(b) => Cow::Borrowed(&b[self.offset..self.true_len]),
            Cow::Owned(mut v) => {
                v.drain(..self.offset);
                Cow::Owned(v)
            }
        }
    }

    /// The unread part of the window, without consuming it.
    pub(crate) fn rest(&self) -> &[u8] {
        &self.buf[self.offset + self.pos..self.true_len]
    }

    /// Checks that `len` bytes remain, advances past them, and returns their range in `buf`.
    /// Does not touch the bit buffer.
    pub(crate) fn take_raw(&mut self, len: usize) -> Result<Range<usize>> {
        let available = self.remaining();
        if available < len {
            return Err(CursorError::eob(len, available));
        }
        let start = self.offset + self.pos;
        self.pos += len;
        Ok(start..start + len)
    }

    /// Byte-aligned version of `take_raw`.
    pub(crate) fn take(&mut self, len: usize) -> Result<Range<usize>> {
        self.align_to_byte();
        self.take_raw(len)
    }
}

impl ByteCursor<'static> {
    /// Creates a cursor that owns a zero-filled buffer of `len` bytes.
    pub fn with_size(len: usize) -> Self {
        Self::from_vec(alloc::vec![0; len])
    }

    /// Creates a cursor that owns `data`.
    pub fn from_vec(data: Vec<u8>) -> Self {
        Self::from_cow(Cow::Owned(data), 0)
    }
}

fn check_offset(buf_len: usize, offset: usize) -> Result<()> {
    if offset > buf_len {
        Err(CursorError::eob(offset, buf_len))
    } else {
        Ok(())
    }
}
