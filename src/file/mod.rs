#![doc = r#"
Random access to the tracks of a [`MidiFile`]

Opening a file decodes only its header. Tracks are decoded on request:
[`MidiFile::track`] skips the chunks before the requested one by their
declared lengths and decodes just that chunk.
"#]

pub mod chunk;

mod format;
pub use format::*;

mod header;
pub use header::*;

mod locator;

mod timing;
pub use timing::*;

mod track;
pub use track::*;

use crate::reader::{ReadResult, Reader, ReaderError};
use std::{
    fs::File,
    io::{BufReader, Cursor, Read, Seek},
    path::Path,
};

#[doc = r#"
An open Standard MIDI File.

# Example
```rust,no_run
# use smfreader::prelude::*;
# fn main() -> ReadResult<()> {
let mut midi = MidiFile::open("song.mid")?;
println!("ppqn: {}", midi.header().pulses_per_quarter_note());

for index in 0..midi.header().track_count() as usize {
    let track = midi.track(index)?;
    for event in &track {
        println!("{event}");
    }
}
midi.close();
# Ok(())
# }
```
"#]
#[derive(Debug)]
pub struct MidiFile<R> {
    reader: Reader<R>,
    header: FileHeader,
    track_base: u64,
}

impl MidiFile<BufReader<File>> {
    /// Opens the file at `path` and decodes its header
    pub fn open(path: impl AsRef<Path>) -> ReadResult<Self> {
        let file = File::open(path.as_ref()).map_err(|e| ReaderError::new(0, e.into()))?;
        Self::from_reader(BufReader::new(file))
    }
}

impl<'slc> MidiFile<Cursor<&'slc [u8]>> {
    /// Reads a MIDI file held in memory
    pub fn from_bytes(bytes: &'slc [u8]) -> ReadResult<Self> {
        Self::with_reader(Reader::from_byte_slice(bytes))
    }
}

impl<R: Read + Seek> MidiFile<R> {
    /// Reads a MIDI file from any seekable source, starting at its current position
    pub fn from_reader(source: R) -> ReadResult<Self> {
        Self::with_reader(Reader::new(source)?)
    }

    fn with_reader(mut reader: Reader<R>) -> ReadResult<Self> {
        let header = FileHeader::read(&mut reader)?;
        let track_base = reader.buffer_position();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            format = ?header.format(),
            track_count = header.track_count(),
            ppqn = header.pulses_per_quarter_note(),
            track_base,
            "read midi header"
        );

        Ok(Self {
            reader,
            header,
            track_base,
        })
    }

    /// The decoded header
    pub const fn header(&self) -> &FileHeader {
        &self.header
    }

    /// Offset of the first track chunk
    pub const fn track_base(&self) -> u64 {
        self.track_base
    }

    /// Decodes track `index` (0-based).
    ///
    /// The returned track is fully materialized; it does not borrow from
    /// the file.
    pub fn track(&mut self, index: usize) -> ReadResult<Track> {
        locator::seek_track(&mut self.reader, self.track_base, index)?;
        Track::read(&mut self.reader, index)
    }

    /// Decodes every track the header declares, in order.
    ///
    /// The iterator stops after the first error.
    pub fn tracks(&mut self) -> Tracks<'_, R> {
        Tracks {
            file: self,
            next: 0,
            failed: false,
        }
    }

    /// Closes the file
    pub fn close(self) {}

    /// Closes the file, handing back the source
    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }
}

/// Iterator returned by [`MidiFile::tracks`]
pub struct Tracks<'f, R> {
    file: &'f mut MidiFile<R>,
    next: usize,
    failed: bool,
}

impl<R: Read + Seek> Iterator for Tracks<'_, R> {
    type Item = ReadResult<Track>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.next >= usize::from(self.file.header.track_count()) {
            return None;
        }
        let result = if self.next == 0 {
            self.file.track(0)
        } else {
            // the previous track ended exactly at this chunk's header
            Track::read(&mut self.file.reader, self.next)
        };
        self.failed = result.is_err();
        self.next += 1;
        Some(result)
    }
}
