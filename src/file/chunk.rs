#![doc = r#"
Chunk framing

MIDI files are organized into chunks, each identified by a 4-character ASCII
type identifier followed by a 32-bit big-endian length and then the chunk data.

```text
[Header Chunk: "MThd" <length> <format> <tracks> <division>]
[Track Chunk:  "MTrk" <length> <delta_time> <event> ...]
...
[Track Chunk:  "MTrk" <length> <delta_time> <event> ...]
```

The length is authoritative: it bounds event decoding, and it is the only
thing used to skip over tracks that are not being read.
"#]

use crate::{
    ChunkError,
    reader::{ReadResult, Reader, ReaderError, ReaderErrorKind},
};
use std::io::{Read, Seek};

/// Tag of the file header chunk
pub const HEADER_MAGIC: [u8; 4] = *b"MThd";
/// Tag of a track chunk
pub const TRACK_MAGIC: [u8; 4] = *b"MTrk";

/// The eight bytes that open every chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    magic: [u8; 4],
    length: u32,
}

impl ChunkHeader {
    /// Reads a chunk header and checks its tag against `expected`.
    pub(crate) fn read<R: Read + Seek>(
        reader: &mut Reader<R>,
        expected: [u8; 4],
    ) -> ReadResult<Self> {
        let start = reader.buffer_position();
        let magic: [u8; 4] = reader.read_exact_size()?;
        if magic != expected {
            return Err(ReaderError::new(
                start,
                ReaderErrorKind::chunk(ChunkError::InvalidMagic {
                    expected,
                    found: magic,
                }),
            ));
        }
        let length = reader.read_u32()?;
        Ok(Self { magic, length })
    }

    /// The four byte tag
    pub const fn magic(&self) -> [u8; 4] {
        self.magic
    }

    /// The declared length of the chunk body
    pub const fn length(&self) -> u32 {
        self.length
    }
}

/// The header of an `MTrk` chunk.
///
/// Only the declared length is carried; it is exactly the number of bytes
/// the track's events occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackChunkHeader {
    declared_length: u32,
}

impl TrackChunkHeader {
    /// Reads an `MTrk` chunk header
    pub(crate) fn read<R: Read + Seek>(reader: &mut Reader<R>) -> ReadResult<Self> {
        let chunk = ChunkHeader::read(reader, TRACK_MAGIC)?;
        Ok(Self {
            declared_length: chunk.length(),
        })
    }

    /// The length in bytes of the track data
    pub const fn declared_length(&self) -> u32 {
        self.declared_length
    }
}
