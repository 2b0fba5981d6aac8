#![doc = r#"
The events stored in a track chunk.

Every event is preceded by a delta time: the number of ticks since the
previous event of the same track (or since the start of the track, for the
first one).

```text
<delta_time> <event>
     |          |- channel event:  [status] data [data]
     |          |- meta event:     FF type length data...
     |          |- sysex event:    F0|F7 length data...
     |- variable-length quantity, 1 to 4 bytes
```
"#]

mod channel;
pub use channel::*;

mod controller;
pub use controller::*;

mod meta;
pub use meta::*;

mod sysex;
pub use sysex::*;

mod decode;
pub use decode::*;

use core::fmt;

/// The body of a [`TrackEvent`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// A channel voice event
    Channel(ChannelEvent),
    /// A meta event
    Meta(MetaEvent),
    /// A system exclusive event
    SysEx(SysExEvent),
}

impl From<ChannelEvent> for EventKind {
    fn from(value: ChannelEvent) -> Self {
        Self::Channel(value)
    }
}

impl From<MetaEvent> for EventKind {
    fn from(value: MetaEvent) -> Self {
        Self::Meta(value)
    }
}

impl From<SysExEvent> for EventKind {
    fn from(value: SysExEvent) -> Self {
        Self::SysEx(value)
    }
}

/// One event of a track, with the ticks elapsed since the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackEvent {
    delta_ticks: u32,
    kind: EventKind,
}

impl TrackEvent {
    /// Create a new track event
    pub fn new(delta_ticks: u32, kind: impl Into<EventKind>) -> Self {
        Self {
            delta_ticks,
            kind: kind.into(),
        }
    }

    /// Ticks since the previous event in the track
    pub const fn delta_ticks(&self) -> u32 {
        self.delta_ticks
    }

    /// The body of the event
    pub const fn kind(&self) -> &EventKind {
        &self.kind
    }

    /// Returns the channel event, if this is one
    pub const fn as_channel(&self) -> Option<&ChannelEvent> {
        match &self.kind {
            EventKind::Channel(c) => Some(c),
            _ => None,
        }
    }

    /// Returns the meta event, if this is one
    pub const fn as_meta(&self) -> Option<&MetaEvent> {
        match &self.kind {
            EventKind::Meta(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the system exclusive event, if this is one
    pub const fn as_sysex(&self) -> Option<&SysExEvent> {
        match &self.kind {
            EventKind::SysEx(s) => Some(s),
            _ => None,
        }
    }

    /// The payload bytes of the event, whatever its kind
    pub fn data(&self) -> &[u8] {
        match &self.kind {
            EventKind::Channel(c) => c.data(),
            EventKind::Meta(m) => m.data(),
            EventKind::SysEx(s) => s.data(),
        }
    }
}

impl fmt::Display for TrackEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "delta_time: {:5}, ", self.delta_ticks)?;
        match &self.kind {
            EventKind::Channel(c) => write!(
                f,
                "{}, chan: {:2}, size: {:2}, data:",
                c.command(),
                c.channel(),
                c.data().len()
            )?,
            EventKind::Meta(m) => write!(
                f,
                "Meta {:#04X}, size: {:2}, data:",
                m.meta_type(),
                m.data().len()
            )?,
            EventKind::SysEx(s) => write!(f, "{}, size: {:2}, data:", s, s.data().len())?,
        }
        for byte in self.data() {
            write!(f, " {byte:02x}")?;
        }
        Ok(())
    }
}

#[test]
fn display_dumps_event() {
    use pretty_assertions::assert_eq;
    let on = TrackEvent::new(96, ChannelEvent::new(Command::NoteOn, 2, 0x3C, 0x64));
    assert_eq!(
        on.to_string(),
        "delta_time:    96, NoteOn, chan:  2, size:  2, data: 3c 64"
    );
    let tempo = TrackEvent::new(0, MetaEvent::new(0x51, vec![0x07, 0xA1, 0x20]));
    assert_eq!(
        tempo.to_string(),
        "delta_time:     0, Meta 0x51, size:  3, data: 07 a1 20"
    );
}
