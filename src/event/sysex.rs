use core::fmt;

/// Status byte opening a system exclusive message
pub const SYSEX: u8 = 0xF0;
/// Status byte of an escaped or continued system exclusive packet
pub const SYSEX_ESCAPE: u8 = 0xF7;

/// Which of the two system exclusive forms an event uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SysExKind {
    /// `F0 <length> <bytes>`: a complete message, or the first packet of one
    Message,
    /// `F7 <length> <bytes>`: a continuation packet or arbitrary escaped bytes
    Escape,
}

/// A system exclusive event, payload kept verbatim
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SysExEvent {
    kind: SysExKind,
    data: Vec<u8>,
}

impl SysExEvent {
    /// Create a system exclusive event
    pub fn new(kind: SysExKind, data: Vec<u8>) -> Self {
        Self { kind, data }
    }

    /// The form of the event
    pub const fn kind(&self) -> SysExKind {
        self.kind
    }

    /// The status byte the event was introduced with
    pub const fn status(&self) -> u8 {
        match self.kind {
            SysExKind::Message => SYSEX,
            SysExKind::Escape => SYSEX_ESCAPE,
        }
    }

    /// The payload, without the length prefix
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Display for SysExEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SysEx {:#04X}", self.status())
    }
}
