use super::{
    ChannelEvent, Command, EventKind, MetaEvent, SYSEX, SYSEX_ESCAPE, SysExEvent, SysExKind,
    TrackEvent,
};
use crate::{
    EventError,
    reader::{ChunkReader, ReadResult, ReaderError},
};
use std::io::{Read, Seek};

/// Status byte of a meta event
pub const META: u8 = 0xFF;

/// An event along with the exact number of bytes it occupied in the chunk.
///
/// `consumed` is the delta time's bytes, plus the status byte if it was
/// present, plus the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedEvent {
    /// The decoded event
    pub event: TrackEvent,
    /// Bytes read from the chunk to produce it
    pub consumed: u32,
}

#[doc = r#"
Decoding state for the event stream of one track.

Channel events may omit their status byte, reusing the last one seen in the
same track ("running status"):

```text
00 90 3C 64     note on, channel 0, key 0x3C
00    3E 64     status omitted: note on, channel 0, key 0x3E
```

A session remembers that status byte between calls. Running status never
crosses a track chunk, so every track is decoded with a fresh session.
"#]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DecodeSession {
    running_status: Option<u8>,
}

impl DecodeSession {
    /// A session with no running status
    pub const fn new() -> Self {
        Self {
            running_status: None,
        }
    }

    /// The status byte a channel event without one would reuse
    pub const fn running_status(&self) -> Option<u8> {
        self.running_status
    }

    /// Forget the running status
    pub fn reset(&mut self) {
        self.running_status = None;
    }

    /// Decodes exactly one event at the cursor.
    pub fn decode_event<R: Read + Seek>(
        &mut self,
        chunk: &mut ChunkReader<'_, R>,
    ) -> ReadResult<DecodedEvent> {
        let start = chunk.consumed();
        let delta_ticks = chunk.read_vlq()?;

        let status_pos = chunk.buffer_position();
        let byte = chunk.read_u8()?;
        let kind = match byte {
            META => {
                let meta_type = chunk.read_u8()?;
                let len = chunk.read_u8()?;
                let data = chunk.read_bytes(usize::from(len))?;
                EventKind::Meta(MetaEvent::new(meta_type, data))
            }
            SYSEX | SYSEX_ESCAPE => {
                self.running_status = None;
                let kind = if byte == SYSEX {
                    SysExKind::Message
                } else {
                    SysExKind::Escape
                };
                let len = chunk.read_vlq()?;
                let data = chunk.read_bytes(len as usize)?;
                EventKind::SysEx(SysExEvent::new(kind, data))
            }
            0xF1..=0xFE => {
                return Err(ReaderError::invalid(
                    status_pos,
                    EventError::UnsupportedStatus(byte),
                ));
            }
            0x80..=0xEF => {
                self.running_status = Some(byte);
                EventKind::Channel(Self::decode_channel(chunk, byte, None)?)
            }
            _ => {
                let Some(status) = self.running_status else {
                    return Err(ReaderError::invalid(
                        status_pos,
                        EventError::NoRunningStatus(byte),
                    ));
                };
                EventKind::Channel(Self::decode_channel(chunk, status, Some(byte))?)
            }
        };

        let consumed = chunk.consumed() - start;
        let event = TrackEvent::new(delta_ticks, kind);

        #[cfg(feature = "tracing")]
        tracing::trace!(consumed, "{event}");

        Ok(DecodedEvent { event, consumed })
    }

    /// Reads the data bytes of a channel event.
    ///
    /// `first` is the data byte that stood in for an omitted status byte.
    fn decode_channel<R: Read + Seek>(
        chunk: &mut ChunkReader<'_, R>,
        status: u8,
        first: Option<u8>,
    ) -> ReadResult<ChannelEvent> {
        let command = Command::try_from(status >> 4)
            .map_err(|_| chunk.invalid(EventError::UnsupportedStatus(status)))?;

        let mut data = [0u8; 2];
        let mut filled = 0;
        if let Some(first) = first {
            data[0] = first;
            filled = 1;
        }
        while filled < command.data_len() {
            data[filled] = chunk.read_u8()?;
            filled += 1;
        }
        Ok(ChannelEvent::new(command, status & 0x0F, data[0], data[1]))
    }
}
