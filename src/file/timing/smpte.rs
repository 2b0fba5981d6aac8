#![doc = r#"
SMPTE frame rates

SMPTE time code labels each frame of film or video with an
hours:minutes:seconds:frames position. A MIDI file can use it in two places:

1. **The header division.** When bit 15 of `<division>` is set, the high
   byte holds a negative frame rate and the low byte holds ticks per frame.
   Delta times are then absolute time, unaffected by tempo events.
2. **The SMPTE offset meta event** (`FF 54`). It gives the time at which a
   track starts, with the frame rate stored as a two bit code.

# Rates

| Rate     | Header byte | Offset code | Used by                   |
|----------|-------------|-------------|---------------------------|
| 24       | -24 (`E8`)  | `00`        | film                      |
| 25       | -25 (`E7`)  | `01`        | PAL and SECAM video       |
| 29.97 df | -29 (`E3`)  | `10`        | NTSC color video          |
| 30       | -30 (`E2`)  | `11`        | NTSC monochrome, audio    |

29.97 is "drop frame": the frame numbers 0 and 1 are skipped at the start of
every minute not divisible by ten, so that the labels keep pace with the
real rate of 30000/1001 frames per second. No frames of picture are lost.
"#]

use core::fmt;

/// The possible FPS (Frames Per Second) for SMPTE timing.
///
/// A MIDI file header encodes these as the negative values -24, -25, -29
/// and -30. The same four rates appear, as a two bit code, in the SMPTE
/// offset meta event.
///
/// Two views of a rate are available: [`SmpteFps::as_division`] is the
/// nominal whole number used to size the header's tick resolution, and
/// [`SmpteFps::as_f64`] is the exact rate used to turn frame counts into
/// wall clock time. They differ only for [`SmpteFps::TwentyNine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SmpteFps {
    /// 24 frames per second
    TwentyFour,
    /// 25 frames per second
    TwentyFive,
    /// 29.97 frames per second (30000/1001), drop-frame
    TwentyNine,
    /// 30 frames per second, non-drop
    Thirty,
}

impl SmpteFps {
    /// Get the nominal frame rate as an integer division value.
    ///
    /// Drop-frame 29.97 fps returns 30 here, as MIDI uses the nominal rate
    /// for division calculations.
    pub const fn as_division(&self) -> u8 {
        match self {
            Self::TwentyFour => 24,
            Self::TwentyFive => 25,
            Self::TwentyNine => 30,
            Self::Thirty => 30,
        }
    }

    /// Get the actual frame rate, including the fractional drop-frame rate.
    pub const fn as_f64(&self) -> f64 {
        match self {
            Self::TwentyFour => 24.,
            Self::TwentyFive => 25.,
            Self::TwentyNine => DROP_FRAME,
            Self::Thirty => 30.,
        }
    }
}

impl fmt::Display for SmpteFps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TwentyNine => f.write_str("29.97"),
            other => write!(f, "{}", other.as_division()),
        }
    }
}

/// NTSC drop-frame rate: 29.97002997... fps
const DROP_FRAME: f64 = 30_000. / 1001.;

#[test]
fn nominal_and_exact_rates() {
    assert_eq!(SmpteFps::TwentyNine.as_division(), 30);
    assert!((SmpteFps::TwentyNine.as_f64() - 29.97).abs() < 0.001);
    assert_eq!(SmpteFps::TwentyFive.to_string(), "25");
    assert_eq!(SmpteFps::TwentyNine.to_string(), "29.97");
}
