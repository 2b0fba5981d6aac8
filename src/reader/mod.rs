#![doc = r#"
Byte level access to a MIDI source

[`Reader`] wraps anything that is [`Read`] + [`Seek`] and keeps track of the
cursor so that every error can report where in the file it happened.

[`ChunkReader`] narrows a [`Reader`] to the declared length of a single chunk.
Event decoding only ever reads through a [`ChunkReader`], so no event can
silently run into the next chunk.
"#]

mod error;
pub use error::*;

mod chunk;
pub use chunk::*;

use crate::ParseError;
use std::io::{Cursor, Read, Seek, SeekFrom};

/// A cursor-tracking, seekable reader over a MIDI source.
#[derive(Debug)]
pub struct Reader<R> {
    inner: R,
    position: u64,
    len: u64,
}

impl<'slc> Reader<Cursor<&'slc [u8]>> {
    /// Create a reader over a byte slice held in memory
    pub fn from_byte_slice(bytes: &'slc [u8]) -> Self {
        Self {
            len: bytes.len() as u64,
            inner: Cursor::new(bytes),
            position: 0,
        }
    }
}

impl<R: Read + Seek> Reader<R> {
    /// Wraps a seekable source.
    ///
    /// The reader starts at the source's current position.
    /// The length of the source is measured once, up front, and used to
    /// bound every later seek.
    pub fn new(mut inner: R) -> ReadResult<Self> {
        let position = inner
            .stream_position()
            .map_err(|e| ReaderError::new(0, e.into()))?;
        let len = inner
            .seek(SeekFrom::End(0))
            .map_err(|e| ReaderError::new(position, e.into()))?;
        inner
            .seek(SeekFrom::Start(position))
            .map_err(|e| ReaderError::new(position, e.into()))?;
        Ok(Self {
            inner,
            position,
            len,
        })
    }

    /// The current offset of the cursor from the start of the source
    pub const fn buffer_position(&self) -> u64 {
        self.position
    }

    /// Total length of the source in bytes
    pub const fn len(&self) -> u64 {
        self.len
    }

    /// True if the source holds no bytes at all
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reads exactly `N` bytes into an array
    pub fn read_exact_size<const N: usize>(&mut self) -> ReadResult<[u8; N]> {
        let mut buf = [0; N];
        self.inner
            .read_exact(&mut buf)
            .map_err(|e| ReaderError::new(self.position, e.into()))?;
        self.position += N as u64;
        Ok(buf)
    }

    /// Reads a single byte
    pub fn read_u8(&mut self) -> ReadResult<u8> {
        let [byte] = self.read_exact_size()?;
        Ok(byte)
    }

    /// Reads a big-endian u16
    pub fn read_u16(&mut self) -> ReadResult<u16> {
        self.read_exact_size().map(u16::from_be_bytes)
    }

    /// Reads a big-endian u32
    pub fn read_u32(&mut self) -> ReadResult<u32> {
        self.read_exact_size().map(u32::from_be_bytes)
    }

    /// Reads `len` bytes into a freshly allocated buffer.
    ///
    /// A length reaching past the end of the source is rejected with
    /// [`ReaderErrorKind::OutOfBounds`] before anything is allocated.
    /// Allocation failure is reported as [`ReaderErrorKind::Resource`]
    /// instead of aborting.
    pub fn read_bytes(&mut self, len: usize) -> ReadResult<Vec<u8>> {
        let available = self.len.saturating_sub(self.position);
        let fits = u64::try_from(len).is_ok_and(|len| len <= available);
        if !fits {
            return Err(ReaderError::oob(self.position));
        }
        let mut buf = Vec::new();
        buf.try_reserve_exact(len)
            .map_err(|e| ReaderError::new(self.position, e.into()))?;
        buf.resize(len, 0);
        self.inner
            .read_exact(&mut buf)
            .map_err(|e| ReaderError::new(self.position, e.into()))?;
        self.position += len as u64;
        Ok(buf)
    }

    /// Moves the cursor to an absolute offset.
    ///
    /// Offsets past the end of the source are rejected with
    /// [`ReaderErrorKind::OutOfBounds`].
    pub fn seek_to(&mut self, position: u64) -> ReadResult<()> {
        if position > self.len {
            return Err(ReaderError::oob(self.position));
        }
        self.inner
            .seek(SeekFrom::Start(position))
            .map_err(|e| ReaderError::new(self.position, e.into()))?;
        self.position = position;
        Ok(())
    }

    /// Moves the cursor forward by `count` bytes without reading them
    pub fn skip(&mut self, count: u64) -> ReadResult<()> {
        let target = self
            .position
            .checked_add(count)
            .ok_or(ReaderError::oob(self.position))?;
        self.seek_to(target)
    }

    /// Builds a format error located at the cursor
    pub(crate) fn invalid(&self, error: impl Into<ParseError>) -> ReaderError {
        ReaderError::invalid(self.position, error)
    }

    /// Consumes the reader, returning the wrapped source
    pub fn into_inner(self) -> R {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reads_big_endian_fields() {
        let bytes = [0x00, 0x01, 0x01, 0xE0, 0x00, 0x00, 0x00, 0x06];
        let mut reader = Reader::from_byte_slice(&bytes);
        assert_eq!(reader.read_u16().unwrap(), 1);
        assert_eq!(reader.read_u16().unwrap(), 480);
        assert_eq!(reader.read_u32().unwrap(), 6);
        assert_eq!(reader.buffer_position(), 8);
    }

    #[test]
    fn short_read_is_io_error() {
        let bytes = [0x00];
        let mut reader = Reader::from_byte_slice(&bytes);
        let err = reader.read_u16().unwrap_err();
        assert!(err.is_io());
        assert_eq!(err.position(), 0);
    }

    #[test]
    fn skip_past_end_is_out_of_bounds() {
        let bytes = [0u8; 4];
        let mut reader = Reader::from_byte_slice(&bytes);
        reader.skip(4).unwrap();
        assert_eq!(reader.buffer_position(), 4);
        let err = reader.skip(1).unwrap_err();
        assert!(err.is_out_of_bounds());
        assert!(err.is_io());
    }

    #[test]
    fn read_bytes_longer_than_source() {
        let bytes = [0xAA, 0xBB, 0xCC];
        let mut reader = Reader::from_byte_slice(&bytes);
        reader.read_u8().unwrap();
        let err = reader.read_bytes(0x0FFF_FFFF).unwrap_err();
        assert!(err.is_out_of_bounds());
        assert_eq!(err.position(), 1);
        assert_eq!(reader.read_bytes(2).unwrap(), vec![0xBB, 0xCC]);
    }

    #[test]
    fn new_starts_at_current_position() {
        let mut cursor = Cursor::new(vec![1u8, 2, 3, 4]);
        cursor.set_position(2);
        let mut reader = Reader::new(cursor).unwrap();
        assert_eq!(reader.buffer_position(), 2);
        assert_eq!(reader.len(), 4);
        assert_eq!(reader.read_u8().unwrap(), 3);
    }
}
