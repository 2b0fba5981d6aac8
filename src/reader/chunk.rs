use super::{ReadResult, Reader, ReaderError};
use crate::{EventError, ParseError, TrackError};
use std::io::{Read, Seek};

/// The most bytes a delta time may occupy.
pub const MAX_VLQ_BYTES: usize = 4;

/// A [`Reader`] restricted to the declared length of one chunk.
///
/// Every byte read is counted, and any read that would cross the declared
/// boundary fails with [`TrackError::Overrun`] before touching the source.
pub struct ChunkReader<'r, R> {
    reader: &'r mut Reader<R>,
    declared: u32,
    consumed: u32,
}

impl<'r, R: Read + Seek> ChunkReader<'r, R> {
    /// Bound `reader` to the next `declared` bytes
    pub fn new(reader: &'r mut Reader<R>, declared: u32) -> Self {
        Self {
            reader,
            declared,
            consumed: 0,
        }
    }

    /// The declared length of the chunk
    pub const fn declared(&self) -> u32 {
        self.declared
    }

    /// Bytes consumed so far
    pub const fn consumed(&self) -> u32 {
        self.consumed
    }

    /// Bytes left before the boundary
    pub const fn remaining(&self) -> u32 {
        self.declared - self.consumed
    }

    /// True once every declared byte has been consumed
    pub const fn is_exhausted(&self) -> bool {
        self.consumed == self.declared
    }

    /// Offset of the cursor in the underlying source
    pub const fn buffer_position(&self) -> u64 {
        self.reader.buffer_position()
    }

    fn claim(&mut self, count: usize) -> ReadResult<()> {
        let fits = u32::try_from(count).is_ok_and(|count| count <= self.remaining());
        if !fits {
            return Err(self.reader.invalid(TrackError::Overrun {
                declared: self.declared,
            }));
        }
        Ok(())
    }

    /// Reads one byte of the chunk
    pub fn read_u8(&mut self) -> ReadResult<u8> {
        self.claim(1)?;
        let byte = self.reader.read_u8()?;
        self.consumed += 1;
        Ok(byte)
    }

    /// Reads `len` bytes of the chunk into an owned buffer
    pub fn read_bytes(&mut self, len: usize) -> ReadResult<Vec<u8>> {
        self.claim(len)?;
        let bytes = self.reader.read_bytes(len)?;
        // claim guarantees len fits in the remaining u32 budget
        self.consumed += len as u32;
        Ok(bytes)
    }

    /// Reads a variable-length quantity.
    ///
    /// Seven bits per byte, most significant group first, high bit set on
    /// every byte but the last. At most [`MAX_VLQ_BYTES`] bytes are read.
    pub fn read_vlq(&mut self) -> ReadResult<u32> {
        let mut value = 0u32;
        for _ in 0..MAX_VLQ_BYTES {
            let byte = self.read_u8()?;
            value = (value << 7) | u32::from(byte & 0x7F);
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(self.reader.invalid(EventError::VlqOverflow))
    }

    /// Builds a format error located at the cursor
    pub(crate) fn invalid(&self, error: impl Into<ParseError>) -> ReaderError {
        self.reader.invalid(error)
    }
}
