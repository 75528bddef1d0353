//! Byte cursors over engine buffers.
//!
//! Everything on the wire is little-endian. [`BufferReader`] is a borrowing
//! cursor with recoverable end-of-buffer errors; [`BufferWriter`] grows a
//! `Vec<u8>` and can optionally insert natural-alignment padding, which the
//! engine's fixed request structs require.

use crate::error::ProtocolError;

/// Read cursor over a borrowed byte slice.
#[derive(Debug, Clone)]
pub struct BufferReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> BufferReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        BufferReader { buf, pos: 0 }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Rewind to the start of the buffer.
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Consume `n` bytes and return them as a slice.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], ProtocolError> {
        if self.remaining() < n {
            return Err(ProtocolError::UnexpectedEof {
                needed: n,
                remaining: self.remaining(),
            });
        }
        let out = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    /// Consume `n` bytes and return a sub-cursor over just that window.
    ///
    /// The parent cursor advances past the window regardless of how much
    /// of the sub-cursor is later read, which is what keeps unknown or
    /// partially-understood records skippable.
    pub fn sub(&mut self, n: usize) -> Result<BufferReader<'a>, ProtocolError> {
        Ok(BufferReader::new(self.read_bytes(n)?))
    }

    pub fn read_u8(&mut self) -> Result<u8, ProtocolError> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_i8(&mut self) -> Result<i8, ProtocolError> {
        Ok(self.read_u8()? as i8)
    }

    pub fn read_bool(&mut self) -> Result<bool, ProtocolError> {
        Ok(self.read_u8()? != 0)
    }

    pub fn read_u16(&mut self) -> Result<u16, ProtocolError> {
        let b = self.read_bytes(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    pub fn read_i16(&mut self) -> Result<i16, ProtocolError> {
        Ok(self.read_u16()? as i16)
    }

    pub fn read_u32(&mut self) -> Result<u32, ProtocolError> {
        let b = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_i32(&mut self) -> Result<i32, ProtocolError> {
        Ok(self.read_u32()? as i32)
    }

    pub fn read_u64(&mut self) -> Result<u64, ProtocolError> {
        let b = self.read_bytes(8)?;
        Ok(u64::from_le_bytes([
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
        ]))
    }

    pub fn read_i64(&mut self) -> Result<i64, ProtocolError> {
        Ok(self.read_u64()? as i64)
    }
}

/// Growable little-endian write buffer.
#[derive(Debug, Default)]
pub struct BufferWriter {
    buf: Vec<u8>,
    aligned: bool,
}

impl BufferWriter {
    pub fn new() -> Self {
        BufferWriter {
            buf: Vec::new(),
            aligned: false,
        }
    }

    /// Writer that pads each value to its natural alignment, matching the
    /// in-memory layout of the engine's C request structs.
    pub fn new_aligned() -> Self {
        BufferWriter {
            buf: Vec::new(),
            aligned: true,
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }

    fn align_to(&mut self, size: usize) {
        if self.aligned {
            while self.buf.len() % size != 0 {
                self.buf.push(0);
            }
        }
    }

    /// Pad to a multiple of `size` even in unaligned mode (struct tails).
    pub fn pad_to(&mut self, size: usize) {
        while self.buf.len() % size != 0 {
            self.buf.push(0);
        }
    }

    pub fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    pub fn write_i8(&mut self, v: i8) {
        self.buf.push(v as u8);
    }

    pub fn write_u16(&mut self, v: u16) {
        self.align_to(2);
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_i16(&mut self, v: i16) {
        self.write_u16(v as u16);
    }

    pub fn write_u32(&mut self, v: u32) {
        self.align_to(4);
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_i32(&mut self, v: i32) {
        self.write_u32(v as u32);
    }

    pub fn write_u64(&mut self, v: u64) {
        self.align_to(8);
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_i64(&mut self, v: i64) {
        self.write_u64(v as u64);
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }
}
