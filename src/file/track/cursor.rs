use super::Track;
use crate::event::TrackEvent;

/// A forward cursor over the events of a [`Track`].
///
/// The cursor can be rewound with [`TrackCursor::reset`] and walked again;
/// the track itself is never modified.
///
/// # Example
/// ```rust
/// # use smfreader::prelude::*;
/// # fn dump(track: &Track) {
/// let mut cursor = track.cursor();
/// while cursor.has_next() {
///     let event = cursor.next_event().unwrap();
///     println!("{event}");
/// }
/// cursor.reset();
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TrackCursor<'t> {
    events: &'t [TrackEvent],
    position: usize,
}

impl<'t> TrackCursor<'t> {
    /// A cursor at the first event of `track`
    pub fn new(track: &'t Track) -> Self {
        Self {
            events: track.events(),
            position: 0,
        }
    }

    /// Rewind to the first event
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// True while there are events left to visit
    pub fn has_next(&self) -> bool {
        self.position < self.events.len()
    }

    /// Returns the next event and advances, or `None` at the end of the track
    pub fn next_event(&mut self) -> Option<&'t TrackEvent> {
        let event = self.events.get(self.position)?;
        self.position += 1;
        Some(event)
    }

    /// Index of the event [`TrackCursor::next_event`] will return
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<'t> Iterator for TrackCursor<'t> {
    type Item = &'t TrackEvent;
    fn next(&mut self) -> Option<Self::Item> {
        self.next_event()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.events.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TrackCursor<'_> {}
