#![doc = r#"
A reader for Standard MIDI Files (SMF).

Opening a file decodes its `MThd` header. Each `MTrk` chunk is then decoded
on request into a [`Track`](crate::file::Track): an owned, ordered list of
typed events that can be walked as many times as needed.

```text
MidiFile::open ─> FileHeader
     │
     └─ track(n) ─> skip n chunks by declared length
                    └─> decode chunk n, event by event
                         (delta time, running status, payload)
                         until the declared length is consumed exactly
```

Malformed input is an error, never a best-effort result: a track whose
events do not land exactly on its declared length is rejected.

# Example
```rust
use smfreader::prelude::*;

let bytes = [
    0x4D, 0x54, 0x68, 0x64, 0x00, 0x00, 0x00, 0x06, // MThd, length 6
    0x00, 0x00, 0x00, 0x01, 0x01, 0xE0,             // format 0, 1 track, 480 ppqn
    0x4D, 0x54, 0x72, 0x6B, 0x00, 0x00, 0x00, 0x0B, // MTrk, length 11
    0x00, 0x90, 0x3C, 0x64,                         // note on
    0x60, 0x3C, 0x00,                               // note on, running status
    0x00, 0xFF, 0x2F, 0x00,                         // end of track
];

let mut midi = MidiFile::from_bytes(&bytes).unwrap();
assert_eq!(midi.header().pulses_per_quarter_note(), 480);

let track = midi.track(0).unwrap();
assert_eq!(track.event_count(), 3);

let note = track.events()[1].as_channel().unwrap();
assert_eq!(note.command(), Command::NoteOn);
assert!(note.is_note_off());
```
"#]
#![warn(missing_docs)]

mod error;
pub use error::*;

pub mod event;
pub mod file;
pub mod reader;

/// Commonly used types
pub mod prelude {
    pub use crate::{
        ChunkError, EventError, HeaderError, MetaError, ParseError, SmpteError, TrackError,
        event::{
            ChannelEvent, Command, Controller, DecodeSession, DecodedEvent, EventKind,
            KeySignature, MetaEvent, MetaType, SmpteOffset, SysExEvent, SysExKind, Tempo,
            TimeSignature, TrackEvent,
        },
        file::{
            FileHeader, FormatType, MidiFile, SmpteFps, SmpteHeader, Ticked, TicksPerQuarterNote,
            Timing, Track, TrackCursor, Tracks, chunk::TrackChunkHeader,
        },
        reader::{ReadResult, ReaderError, ReaderErrorKind},
    };
}
