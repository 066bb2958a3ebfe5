//! Append-only record of preprocessing events.

use std::fmt;
use std::slice;

use crate::event::PositionEvent;

/// Time-ordered record of [`PositionEvent`]s from one flattening pass.
///
/// The log is append-only while the flattener runs and read-only afterward;
/// the flattener returns it by value and resolvers only borrow it, so
/// arbitrarily many lookups can share one log without locking.
///
/// Invariant: `Start`/`Restart`/`Include`/`End` events nest like a
/// well-formed stack: each `Start`/`Restart` is eventually closed by an
/// `End` at the same depth, and each `Include` precedes the nested `Start`
/// it triggers. The flattener's depth-first recursion produces exactly this
/// shape; resolvers rely on it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct EventLog {
    events: Vec<PositionEvent>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        EventLog::default()
    }

    /// Append an event. Events are never modified or removed once recorded.
    pub fn push(&mut self, event: PositionEvent) {
        self.events.push(event);
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no event has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The recorded events, in order.
    pub fn events(&self) -> &[PositionEvent] {
        &self.events
    }

    /// Iterate over the recorded events in order.
    pub fn iter(&self) -> slice::Iter<'_, PositionEvent> {
        self.events.iter()
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a PositionEvent;
    type IntoIter = slice::Iter<'a, PositionEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

/// Numbered dump of the log, one event per line. Intended for `riva events`
/// and debugging sessions, not for end-user diagnostics.
impl fmt::Display for EventLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.events.iter().enumerate() {
            writeln!(
                f,
                "{i}. ({}, {}, {}, {})",
                e.concat_line,
                e.source_line,
                e.kind.name(),
                e.path
            )?;
        }
        Ok(())
    }
}
