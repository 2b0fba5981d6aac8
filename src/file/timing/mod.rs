mod smpte;
pub use smpte::*;

use crate::{HeaderError, ParseError, SmpteError};

/// The header timing type.
///
/// The 16-bit `<division>` field of the `MThd` chunk has two layouts:
///
/// ```text
/// +------------+----+----------------+-------------+
/// | Bit:       | 15 | 14 ......... 8 | 7 ....... 0 |
/// +------------+----+----------------+-------------+
/// | <division> |  0 | ticks per quarter note       |
/// +------------+----+----------------+-------------+
/// |            |  1 | -frames/second | ticks/frame |
/// +------------+----+----------------+-------------+
/// ```
///
/// Either way it normalizes to [`Timing::pulses_per_quarter_note`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Timing {
    /// The midi file's delta times are defined using a tick rate per quarter note
    TicksPerQuarterNote(TicksPerQuarterNote),

    /// The midi file's delta times are defined using an SMPTE and MIDI Time Code
    Smpte(SmpteHeader),
}

impl Timing {
    /// The leading bit of the u16 is disregarded.
    /// Zero is not rejected here; [`Timing::from_division`] checks it.
    pub(crate) const fn new_ticks_per_quarter_note(tpqn: u16) -> Self {
        Self::TicksPerQuarterNote(TicksPerQuarterNote {
            inner: tpqn & 0x7FFF,
        })
    }

    /// Timing in terms of fps and ticks per frame, unchecked
    #[cfg(test)]
    pub(crate) const fn new_smpte(fps: SmpteFps, ticks_per_frame: u8) -> Self {
        Self::Smpte(SmpteHeader {
            fps,
            ticks_per_frame,
        })
    }

    /// Decodes the raw `<division>` field.
    ///
    /// Fails if the frame rate is not one of the four SMPTE rates, or if the
    /// result would be zero pulses per quarter note.
    pub fn from_division(division: u16) -> Result<Self, ParseError> {
        let timing = match division >> 15 {
            0 => Self::new_ticks_per_quarter_note(division),
            _ => {
                let [fps, ticks_per_frame] = division.to_be_bytes();
                Self::Smpte(SmpteHeader::new(fps as i8, ticks_per_frame)?)
            }
        };
        if timing.pulses_per_quarter_note() == 0 {
            return Err(HeaderError::ZeroDivision(division).into());
        }
        Ok(timing)
    }

    /// Returns Some if the midi timing is defined
    /// as ticks per quarter note
    pub const fn ticks_per_quarter_note(&self) -> Option<u16> {
        match self {
            Self::TicksPerQuarterNote(t) => Some(t.ticks_per_quarter_note()),
            _ => None,
        }
    }

    /// The file's time resolution, in ticks per quarter note.
    ///
    /// For SMPTE timing this is frames per second times ticks per frame,
    /// using the nominal rate of 30 for drop-frame.
    pub const fn pulses_per_quarter_note(&self) -> u16 {
        match self {
            Self::TicksPerQuarterNote(t) => t.ticks_per_quarter_note(),
            Self::Smpte(s) => s.fps.as_division() as u16 * s.ticks_per_frame as u16,
        }
    }
}

/// A representation of the `tpqn` timing for a MIDI file
#[derive(Debug, Clone, PartialEq, Eq, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TicksPerQuarterNote {
    pub(crate) inner: u16,
}
impl TicksPerQuarterNote {
    /// Returns the ticks per quarter note for the file.
    pub const fn ticks_per_quarter_note(&self) -> u16 {
        self.inner
    }
}

/// A representation of the `smpte` timing for a MIDI file
#[derive(Debug, Clone, PartialEq, Eq, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmpteHeader {
    pub(crate) fps: SmpteFps,
    pub(crate) ticks_per_frame: u8,
}

impl SmpteHeader {
    fn new(fps: i8, ticks_per_frame: u8) -> Result<Self, SmpteError> {
        //Bits 14 thru 8 contain one of the four values -24, -25, -29, or -30
        let fps = match fps {
            -24 => SmpteFps::TwentyFour,
            -25 => SmpteFps::TwentyFive,
            -29 => {
                //drop frame (29.97)
                SmpteFps::TwentyNine
            }
            -30 => SmpteFps::Thirty,
            _ => return Err(SmpteError::HeaderFrameTime(fps)),
        };
        Ok(Self {
            fps,
            ticks_per_frame,
        })
    }

    /// Returns the frames per second
    pub const fn fps(&self) -> SmpteFps {
        self.fps
    }

    /// Returns the ticks per frame
    pub const fn ticks_per_frame(&self) -> u8 {
        self.ticks_per_frame
    }
}
