use crate::cursor::ByteCursor;

impl<'a> ByteCursor<'a> {
    /// Writes `bytes` at the position and advances past them.
    ///
    /// Writing past the end of the window grows the buffer; the logical length becomes the end of
    /// the highest write. A borrowed buffer is copied into an owned one on the first write.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.align_to_byte();
        let start = self.offset + self.pos;
        let end = start + bytes.len();
        let out = self.buf.to_mut();
        if end > out.len() {
            let new_len = end.max(out.len() * 2);
            log::trace!("grow: {} -> {} bytes", out.len(), new_len);
            out.resize(new_len, 0);
        }
        out[start..end].copy_from_slice(bytes);
        self.pos += bytes.len();
        self.true_len = self.true_len.max(end);
    }

    /// Writes a small, fixed-size array of bytes.
    pub fn write_cbytes<const N: usize>(&mut self, value: [u8; N]) {
        self.write_bytes(&value)
    }

    /// Writes an unsigned 8-bit integer.
    pub fn write_u1(&mut self, value: u8) {
        self.write_bytes(&[value])
    }

    /// Writes a signed 8-bit integer.
    pub fn write_s1(&mut self, value: i8) {
        self.write_bytes(&[value as u8])
    }

    /// Writes a `u16` in little-endian byte order.
    pub fn write_u2le(&mut self, value: u16) {
        self.write_cbytes(value.to_le_bytes())
    }

    /// Writes a `u16` in big-endian byte order.
    pub fn write_u2be(&mut self, value: u16) {
        self.write_cbytes(value.to_be_bytes())
    }

    /// Writes an `i16` in little-endian byte order.
    pub fn write_s2le(&mut self, value: i16) {
        self.write_cbytes(value.to_le_bytes())
    }

    /// Writes an `i16` in big-endian byte order.
    pub fn write_s2be(&mut self, value: i16) {
        self.write_cbytes(value.to_be_bytes())
    }

    /// Writes a `u32` in little-endian byte order.
    pub fn write_u4le(&mut self, value: u32) {
        self.write_cbytes(value.to_le_bytes())
    }

    /// Writes a `u32` in big-endian byte order.
    pub fn write_u4be(&mut self, value: u32) {
        self.write_cbytes(value.to_be_bytes())
    }

    /// Writes an `i32` in little-endian byte order.
    pub fn write_s4le(&mut self, value: i32) {
        self.write_cbytes(value.to_le_bytes())
    }

    /// Writes an `i32` in big-endian byte order.
    pub fn write_s4be(&mut self, value: i32) {
        self.write_cbytes(value.to_be_bytes())
    }

    /// Writes an `f32` in little-endian byte order.
    pub fn write_f4le(&mut self, value: f32) {
        self.write_cbytes(value.to_le_bytes())
    }

    /// Writes an `f32` in big-endian byte order.
    pub fn write_f4be(&mut self, value: f32) {
        self.write_cbytes(value.to_be_bytes())
    }

    /// Writes an `f64` in little-endian byte order.
    pub fn write_f8le(&mut self, value: f64) {
        self.write_cbytes(value.to_le_bytes())
    }

    /// Writes an `f64` in big-endian byte order.
    pub fn write_f8be(&mut self, value: f64) {
        self.write_cbytes(value.to_be_bytes())
    }
}
