use super::Controller;
use core::fmt;
use num_enum::{IntoPrimitive, TryFromPrimitive};

#[doc = r#"
The command nibble of a channel status byte.

```text
status byte: 1ccc nnnn
             ^^^^ command (0x8 - 0xE)
                  ^^^^ channel (0 - 15)
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Command {
    /// Release a key
    NoteOff = 0x8,
    /// Press a key. A velocity of zero is a release.
    NoteOn = 0x9,
    /// Polyphonic key pressure
    AfterTouch = 0xA,
    /// Controller change
    ControlChange = 0xB,
    /// Select an instrument
    ProgramChange = 0xC,
    /// Pressure applied to the whole channel
    ChannelPressure = 0xD,
    /// 14-bit pitch bend
    PitchWheel = 0xE,
}

impl Command {
    /// The number of data bytes that follow the status byte
    pub const fn data_len(&self) -> usize {
        match self {
            Self::ProgramChange | Self::ChannelPressure => 1,
            _ => 2,
        }
    }

    /// Human readable name of the command
    pub const fn name(&self) -> &'static str {
        match self {
            Self::NoteOff => "NoteOff",
            Self::NoteOn => "NoteOn",
            Self::AfterTouch => "AfterTouch",
            Self::ControlChange => "ControlChange",
            Self::ProgramChange => "ProgramChange",
            Self::ChannelPressure => "ChannelPressure",
            Self::PitchWheel => "PitchWheel",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A channel voice event: a command addressed to one of sixteen channels,
/// with one or two data bytes depending on the command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelEvent {
    command: Command,
    channel: u8,
    data: [u8; 2],
}

impl ChannelEvent {
    /// Create a new channel event.
    ///
    /// The channel is masked to four bits. `second` is ignored for commands
    /// that carry a single data byte.
    pub const fn new(command: Command, channel: u8, first: u8, second: u8) -> Self {
        let second = if command.data_len() == 1 { 0 } else { second };
        Self {
            command,
            channel: channel & 0x0F,
            data: [first, second],
        }
    }

    /// The command of the event
    pub const fn command(&self) -> Command {
        self.command
    }

    /// The channel, 0 through 15
    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// The full status byte, command and channel combined
    pub const fn status(&self) -> u8 {
        ((self.command as u8) << 4) | self.channel
    }

    /// The data bytes, one or two depending on the command
    pub fn data(&self) -> &[u8] {
        &self.data[..self.command.data_len()]
    }

    /// The key of a note or aftertouch event
    pub const fn key(&self) -> Option<u8> {
        match self.command {
            Command::NoteOff | Command::NoteOn | Command::AfterTouch => Some(self.data[0]),
            _ => None,
        }
    }

    /// The velocity of a note event
    pub const fn velocity(&self) -> Option<u8> {
        match self.command {
            Command::NoteOff | Command::NoteOn => Some(self.data[1]),
            _ => None,
        }
    }

    /// Key pressure for aftertouch, or channel pressure
    pub const fn pressure(&self) -> Option<u8> {
        match self.command {
            Command::AfterTouch => Some(self.data[1]),
            Command::ChannelPressure => Some(self.data[0]),
            _ => None,
        }
    }

    /// The controller targeted by a control change
    pub fn controller(&self) -> Option<Controller> {
        match self.command {
            Command::ControlChange => Some(Controller::from(self.data[0])),
            _ => None,
        }
    }

    /// The value of a control change
    pub const fn value(&self) -> Option<u8> {
        match self.command {
            Command::ControlChange => Some(self.data[1]),
            _ => None,
        }
    }

    /// The program selected by a program change
    pub const fn program(&self) -> Option<u8> {
        match self.command {
            Command::ProgramChange => Some(self.data[0]),
            _ => None,
        }
    }

    /// The 14-bit pitch bend value, 0x2000 being centered.
    ///
    /// The least significant seven bits come first in the stream.
    pub const fn pitch_bend(&self) -> Option<u16> {
        match self.command {
            Command::PitchWheel => {
                Some((((self.data[1] & 0x7F) as u16) << 7) | (self.data[0] & 0x7F) as u16)
            }
            _ => None,
        }
    }

    /// True for a note on with a nonzero velocity
    pub const fn is_note_on(&self) -> bool {
        matches!(self.command, Command::NoteOn) && self.data[1] > 0
    }

    /// True for a note off, or a note on with zero velocity
    pub const fn is_note_off(&self) -> bool {
        match self.command {
            Command::NoteOff => true,
            Command::NoteOn => self.data[1] == 0,
            _ => false,
        }
    }
}
