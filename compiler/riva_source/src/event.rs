//! Preprocessing events recorded while a program is flattened.

/// What happened at a recorded point of the flattening pass.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// A document began streaming into the flattened output.
    Start,
    /// Control returned to an outer document after a nested include finished.
    Restart,
    /// An include directive was encountered.
    Include,
    /// A document was fully consumed.
    End,
}

impl EventKind {
    /// Lowercase name used in log dumps.
    pub fn name(self) -> &'static str {
        match self {
            EventKind::Start => "start",
            EventKind::Restart => "restart",
            EventKind::Include => "include",
            EventKind::End => "end",
        }
    }
}

/// An immutable fact about where a document's content landed in the
/// flattened stream.
///
/// `concat_line` is the number of lines already emitted to the flattened
/// output at the moment the event was recorded; it is non-decreasing across
/// a log. The meaning of `source_line` and `path` depends on [`kind`]:
///
/// | kind      | `path`                    | `source_line`                        |
/// |-----------|---------------------------|--------------------------------------|
/// | `Start`   | document that begins      | always 0                             |
/// | `Include` | the **target** included   | directive's 0-based line             |
/// | `Restart` | outer document resumed    | directive's 1-based line             |
/// | `End`     | document fully consumed   | number of lines read                 |
///
/// [`kind`]: PositionEvent::kind
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionEvent {
    /// Lines emitted to the flattened output so far.
    pub concat_line: u32,
    /// Position in the source document; interpretation depends on `kind`.
    pub source_line: u32,
    /// What happened.
    pub kind: EventKind,
    /// Document path; the include target for `Include` events.
    pub path: String,
}

impl PositionEvent {
    /// Record that `path` begins streaming at the current output position.
    pub fn start(concat_line: u32, path: impl Into<String>) -> Self {
        PositionEvent {
            concat_line,
            source_line: 0,
            kind: EventKind::Start,
            path: path.into(),
        }
    }

    /// Record an include directive for `target`, found on the 0-based
    /// `directive_line` of the active document.
    pub fn include(concat_line: u32, directive_line: u32, target: impl Into<String>) -> Self {
        PositionEvent {
            concat_line,
            source_line: directive_line,
            kind: EventKind::Include,
            path: target.into(),
        }
    }

    /// Record that reading resumes in `path` after the include on its
    /// 1-based `directive_line` finished.
    pub fn restart(concat_line: u32, directive_line: u32, path: impl Into<String>) -> Self {
        PositionEvent {
            concat_line,
            source_line: directive_line,
            kind: EventKind::Restart,
            path: path.into(),
        }
    }

    /// Record that `path` was fully consumed after `lines_read` lines.
    pub fn end(concat_line: u32, lines_read: u32, path: impl Into<String>) -> Self {
        PositionEvent {
            concat_line,
            source_line: lines_read,
            kind: EventKind::End,
            path: path.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn start_event_pins_source_line_to_zero() {
        let e = PositionEvent::start(7, "model.rv");
        assert_eq!(e.concat_line, 7);
        assert_eq!(e.source_line, 0);
        assert_eq!(e.kind, EventKind::Start);
        assert_eq!(e.path, "model.rv");
    }

    #[test]
    fn include_event_names_the_target() {
        let e = PositionEvent::include(3, 1, "helpers.rvfunc");
        assert_eq!(e.kind, EventKind::Include);
        assert_eq!(e.path, "helpers.rvfunc");
        assert_eq!(e.source_line, 1);
    }

    #[test]
    fn kind_names() {
        assert_eq!(EventKind::Start.name(), "start");
        assert_eq!(EventKind::Restart.name(), "restart");
        assert_eq!(EventKind::Include.name(), "include");
        assert_eq!(EventKind::End.name(), "end");
    }

    #[test]
    fn events_are_comparable_and_hashable() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(PositionEvent::end(4, 3, "a.rv"));
        set.insert(PositionEvent::end(4, 3, "a.rv")); // duplicate
        set.insert(PositionEvent::end(4, 3, "b.rv"));
        assert_eq!(set.len(), 2);
    }
}
