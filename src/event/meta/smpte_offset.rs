#![doc = r#"
SMPTE offset meta events

An `FF 54 05` event places the start of a track at an absolute SMPTE time,
so that a sequencer can line it up with picture or with another tape
machine. It usually appears once, at delta time zero, before any channel
event of the track.

The five payload bytes carry a frame rate, hours, minutes, seconds, frames
and hundredths of a frame. The rate in the event is normally the same as
the header's SMPTE rate; when it is not, [`SmpteOffset::as_micros_with_override`]
counts frames at the rate of choice.
"#]

use crate::{SmpteError, file::SmpteFps};
use core::fmt;

/// The SMPTE time at which a track is meant to start.
///
/// Payload of the `FF 54 05` meta event:
///
/// ```text
/// byte 0: 0rrhhhhh   rr = frame rate, hhhhh = hours
/// byte 1: minutes
/// byte 2: seconds
/// byte 3: frames
/// byte 4: hundredths of a frame
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmpteOffset {
    /// The frame rate for this offset.
    pub fps: SmpteFps,
    /// Hour component of the time code (0-23).
    pub hour: u8,
    /// Minute component of the time code (0-59).
    pub minute: u8,
    /// Second component of the time code (0-59).
    pub second: u8,
    /// Frame number within the current second.
    pub frame: u8,
    /// Hundredths of a frame (0-99).
    pub subframe: u8,
}

impl SmpteOffset {
    /// Parse the five payload bytes of an SMPTE offset meta event.
    ///
    /// # Errors
    /// - [`SmpteError::Length`] if data is not exactly 5 bytes
    /// - [`SmpteError::TrackFrame`] if the frame rate bits are invalid
    /// - [`SmpteError::HourOffset`], [`SmpteError::MinuteOffset`],
    ///   [`SmpteError::SecondOffset`] and [`SmpteError::Subframe`] for
    ///   out of range fields
    pub const fn parse(data: &[u8]) -> Result<Self, SmpteError> {
        let [rate_hour, minute, second, frame, subframe] = *data else {
            return Err(SmpteError::Length(data.len()));
        };

        let fps = match rate_hour >> 5 {
            0 => SmpteFps::TwentyFour,
            1 => SmpteFps::TwentyFive,
            2 => SmpteFps::TwentyNine,
            3 => SmpteFps::Thirty,
            v => return Err(SmpteError::TrackFrame(v)),
        };
        let hour = rate_hour & 0b0001_1111;
        if hour > 23 {
            return Err(SmpteError::HourOffset(hour));
        }
        if minute > 59 {
            return Err(SmpteError::MinuteOffset(minute));
        }
        if second > 59 {
            return Err(SmpteError::SecondOffset(second));
        }
        if subframe > 99 {
            return Err(SmpteError::Subframe(subframe));
        }
        Ok(Self {
            fps,
            hour,
            minute,
            second,
            frame,
            subframe,
        })
    }

    /// The offset in microseconds, using the exact (fractional) frame rate
    pub fn as_micros(&self) -> f64 {
        self.as_micros_with_override(self.fps)
    }

    /// The offset in microseconds, counting frames at `fps` instead of the
    /// rate stored in the event.
    ///
    /// Useful when the header's SMPTE division disagrees with the offset.
    pub fn as_micros_with_override(&self, fps: SmpteFps) -> f64 {
        let whole_seconds =
            u64::from(self.hour) * 3600 + u64::from(self.minute) * 60 + u64::from(self.second);
        let frames = f64::from(self.frame) + f64::from(self.subframe) / 100.;
        whole_seconds as f64 * 1_000_000. + frames * 1_000_000. / fps.as_f64()
    }
}

impl fmt::Display for SmpteOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}.{:02}@{}",
            self.hour, self.minute, self.second, self.frame, self.subframe, self.fps
        )
    }
}

#[test]
fn parse_smpte_offset() {
    use pretty_assertions::assert_eq;
    // the bytes after FF 54 05
    let bytes = [0x41, 0x17, 0x2D, 0x0C, 0x22];
    let offset = SmpteOffset::parse(&bytes).unwrap();

    assert_eq!(offset.fps, SmpteFps::TwentyNine);
    assert_eq!(offset.hour, 1);
    assert_eq!(offset.minute, 23);
    assert_eq!(offset.second, 45);
    assert_eq!(offset.frame, 12);
    assert_eq!(offset.subframe, 34);
    assert_eq!(offset.to_string(), "01:23:45:12.34@29.97");
}

#[test]
fn smpte_offset_in_micros() {
    let offset = SmpteOffset::parse(&[0x20, 0x00, 0x01, 0x05, 0x00]).unwrap();
    assert_eq!(offset.fps, SmpteFps::TwentyFive);
    // one second and five frames at 25 fps
    assert_eq!(offset.as_micros(), 1_200_000.);
}
