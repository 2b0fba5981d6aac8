#![doc = r#"
Meta events: non-playback annotations carried in a track.

```text
FF <type> <length> <data...>
```

The decoder keeps the payload verbatim; the typed readers on [`MetaEvent`]
interpret it on request.
"#]

mod smpte_offset;
pub use smpte_offset::*;

use crate::{MetaError, ParseError};
use core::fmt;
use num_enum::{FromPrimitive, IntoPrimitive};
use std::borrow::Cow;

/// The type byte of a meta event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MetaType {
    /// `FF 00 02 ssss`
    SequenceNumber = 0x00,
    /// Arbitrary text
    Text = 0x01,
    /// Copyright notice
    Copyright = 0x02,
    /// Sequence or track name
    TrackName = 0x03,
    /// Instrument name
    InstrumentName = 0x04,
    /// Lyric
    Lyric = 0x05,
    /// Marker
    Marker = 0x06,
    /// Cue point
    CuePoint = 0x07,
    /// `FF 20 01 cc`
    ChannelPrefix = 0x20,
    /// `FF 2F 00`
    EndOfTrack = 0x2F,
    /// `FF 51 03 tttttt`
    Tempo = 0x51,
    /// `FF 54 05 hr mn se fr ff`
    SmpteOffset = 0x54,
    /// `FF 58 04 nn dd cc bb`
    TimeSignature = 0x58,
    /// `FF 59 02 sf mi`
    KeySignature = 0x59,
    /// `FF 7F len data`
    SequencerSpecific = 0x7F,
    /// Any other meta type
    #[num_enum(catch_all)]
    Unknown(u8),
}

impl MetaType {
    /// True for the meta types whose payload is text (0x01 - 0x0F)
    pub fn is_text(&self) -> bool {
        matches!(u8::from(*self), 0x01..=0x0F)
    }
}

/// A meta event, with its payload kept verbatim
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetaEvent {
    meta_type: u8,
    data: Vec<u8>,
}

impl MetaEvent {
    /// Create a meta event from its type byte and payload
    pub fn new(meta_type: u8, data: Vec<u8>) -> Self {
        Self { meta_type, data }
    }

    /// The raw type byte
    pub const fn meta_type(&self) -> u8 {
        self.meta_type
    }

    /// The type byte, named
    pub fn kind(&self) -> MetaType {
        MetaType::from(self.meta_type)
    }

    /// The payload bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// True for the end of track marker
    pub fn is_end_of_track(&self) -> bool {
        self.kind() == MetaType::EndOfTrack
    }

    fn payload(&self, expected_type: MetaType, len: usize) -> Result<&[u8], MetaError> {
        let expected = u8::from(expected_type);
        if self.meta_type != expected {
            return Err(MetaError::WrongType {
                expected,
                found: self.meta_type,
            });
        }
        if self.data.len() != len {
            return Err(MetaError::Length {
                meta_type: self.meta_type,
                expected: len,
                found: self.data.len(),
            });
        }
        Ok(&self.data)
    }

    /// Reads a set tempo event
    pub fn tempo(&self) -> Result<Tempo, ParseError> {
        let data = self.payload(MetaType::Tempo, 3)?;
        let micros = u32::from_be_bytes([0, data[0], data[1], data[2]]);
        Ok(Tempo::new(micros))
    }

    /// Reads a time signature event
    pub fn time_signature(&self) -> Result<TimeSignature, ParseError> {
        let data = self.payload(MetaType::TimeSignature, 4)?;
        Ok(TimeSignature {
            numerator: data[0],
            denominator_power: data[1],
            clocks_per_click: data[2],
            thirty_seconds_per_quarter: data[3],
        })
    }

    /// Reads a key signature event
    pub fn key_signature(&self) -> Result<KeySignature, ParseError> {
        let data = self.payload(MetaType::KeySignature, 2)?;
        Ok(KeySignature {
            sharps: data[0] as i8,
            minor: data[1] != 0,
        })
    }

    /// Reads a sequence number event
    pub fn sequence_number(&self) -> Result<u16, ParseError> {
        let data = self.payload(MetaType::SequenceNumber, 2)?;
        Ok(u16::from_be_bytes([data[0], data[1]]))
    }

    /// Reads a channel prefix event
    pub fn channel_prefix(&self) -> Result<u8, ParseError> {
        let data = self.payload(MetaType::ChannelPrefix, 1)?;
        Ok(data[0])
    }

    /// Reads an SMPTE offset event
    pub fn smpte_offset(&self) -> Result<SmpteOffset, ParseError> {
        let found = self.meta_type;
        let expected = u8::from(MetaType::SmpteOffset);
        if found != expected {
            return Err(MetaError::WrongType { expected, found }.into());
        }
        Ok(SmpteOffset::parse(&self.data)?)
    }

    /// Reads the payload of a text event.
    ///
    /// Invalid UTF-8 is replaced rather than rejected; MIDI files in the wild
    /// use all sorts of encodings.
    pub fn text(&self) -> Result<Cow<'_, str>, ParseError> {
        let kind = self.kind();
        if !kind.is_text() {
            return Err(MetaError::WrongType {
                expected: u8::from(MetaType::Text),
                found: self.meta_type,
            }
            .into());
        }
        Ok(String::from_utf8_lossy(&self.data))
    }
}

/// Microseconds per quarter note
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tempo(u32);

impl Tempo {
    /// 120 beats per minute, the tempo of a file with no tempo events
    pub const DEFAULT: Self = Self(500_000);

    /// Create a tempo from microseconds per quarter note
    pub const fn new(micros_per_quarter_note: u32) -> Self {
        Self(micros_per_quarter_note)
    }

    /// Microseconds per quarter note
    pub const fn micros_per_quarter_note(&self) -> u32 {
        self.0
    }

    /// Quarter notes per minute
    pub fn beats_per_minute(&self) -> f64 {
        60_000_000. / self.0 as f64
    }
}

impl Default for Tempo {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// `FF 58 04 nn dd cc bb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeSignature {
    /// Beats per bar
    pub numerator: u8,
    /// The denominator as a power of two: 2 means a quarter note
    pub denominator_power: u8,
    /// MIDI clocks per metronome click
    pub clocks_per_click: u8,
    /// Notated 32nd notes in a MIDI quarter note (24 clocks)
    pub thirty_seconds_per_quarter: u8,
}

impl TimeSignature {
    /// The denominator as written in a score.
    ///
    /// `None` if the power is too large to represent.
    pub const fn denominator(&self) -> Option<u32> {
        1u32.checked_shl(self.denominator_power as u32)
    }
}

/// `FF 59 02 sf mi`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeySignature {
    /// Positive for sharps, negative for flats
    pub sharps: i8,
    /// Minor key if true, major otherwise
    pub minor: bool,
}

impl fmt::Display for MetaEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Meta {:?}", self.kind())
    }
}
