mod cursor;
pub use cursor::*;

use super::chunk::TrackChunkHeader;
use crate::{
    event::{DecodeSession, TrackEvent},
    reader::{ChunkReader, ReadResult, Reader, ReaderError},
};
use core::slice;
use std::io::{Read, Seek};

#[doc = r#"
A fully decoded `MTrk` chunk.

Events are kept in file order, which is also musical time order within the
track. Once assembled, a track owns all of its events and has no tie to the
file it came from.
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Track {
    index: usize,
    header: TrackChunkHeader,
    events: Vec<TrackEvent>,
}

impl Track {
    /// Decodes the track chunk at the cursor.
    ///
    /// Events are decoded until the bytes they consumed add up to the
    /// chunk's declared length. An event that would reach past that length
    /// fails the whole track.
    pub(crate) fn read<R: Read + Seek>(reader: &mut Reader<R>, index: usize) -> ReadResult<Self> {
        let header = TrackChunkHeader::read(reader)?;
        let declared = header.declared_length();
        let mut chunk = ChunkReader::new(reader, declared);
        let mut session = DecodeSession::new();
        let mut events = Vec::new();

        let mut consumed = 0u32;
        while consumed < declared {
            let decoded = session.decode_event(&mut chunk)?;
            consumed += decoded.consumed;
            events
                .try_reserve(1)
                .map_err(|e| ReaderError::new(chunk.buffer_position(), e.into()))?;
            events.push(decoded.event);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            index,
            declared_length = declared,
            events = events.len(),
            "assembled track"
        );

        Ok(Self {
            index,
            header,
            events,
        })
    }

    /// The position of the track among the file's track chunks
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The chunk header of the track
    pub const fn header(&self) -> &TrackChunkHeader {
        &self.header
    }

    /// The number of events in the track
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// True if the track chunk held no events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The events, in file order
    pub fn events(&self) -> &[TrackEvent] {
        &self.events
    }

    /// The event at `index`, in file order
    pub fn get(&self, index: usize) -> Option<&TrackEvent> {
        self.events.get(index)
    }

    /// Iterate the events in file order
    pub fn iter(&self) -> slice::Iter<'_, TrackEvent> {
        self.events.iter()
    }

    /// A restartable cursor over the events
    pub fn cursor(&self) -> TrackCursor<'_> {
        TrackCursor::new(self)
    }

    /// Iterate the events along with the ticks accumulated since the start of the track
    pub fn ticked(&self) -> impl Iterator<Item = Ticked<'_>> {
        self.events.iter().scan(0u64, |ticks, event| {
            *ticks += u64::from(event.delta_ticks());
            Some(Ticked {
                accumulated_ticks: *ticks,
                event,
            })
        })
    }

    /// Takes the events out of the track
    pub fn into_events(self) -> Vec<TrackEvent> {
        self.events
    }
}

impl<'a> IntoIterator for &'a Track {
    type Item = &'a TrackEvent;
    type IntoIter = slice::Iter<'a, TrackEvent>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An event paired with its absolute position in the track, in ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticked<'a> {
    accumulated_ticks: u64,
    event: &'a TrackEvent,
}

impl<'a> Ticked<'a> {
    /// Ticks since the start of the track
    pub const fn accumulated_ticks(&self) -> u64 {
        self.accumulated_ticks
    }

    /// The event
    pub const fn event(&self) -> &'a TrackEvent {
        self.event
    }
}
