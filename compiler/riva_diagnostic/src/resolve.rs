//! Provenance reconstruction over an event log.

use riva_source::{EventKind, EventLog, ProvenanceChain, ProvenanceEntry};

use crate::error::TraceError;

/// The document whose lines are currently streaming into the flattened
/// output, as of some point in the scan.
struct ActiveWindow<'a> {
    path: &'a str,
    /// Line within `path` where the window opened.
    file_start: u32,
    /// Flattened position where the window opened.
    concat_start: u32,
}

/// Reconstruct the inclusion ancestry of 1-based flattened line `target`.
///
/// Replays the log in order, tracking the set of include sites still open
/// at each point. Because the log mirrors the flattener's depth-first
/// recursion exactly, that set is always the true ancestor chain of the
/// position being scanned, and the first event whose `concat_line` reaches
/// `target` belongs to the innermost active document: nested ranges are
/// strictly contained in their parents', so no later event can claim the
/// line.
///
/// Per event `e`:
/// 1. `target <= e.concat_line`: the answer lies in the active window;
///    the position is `file_start + (target - concat_start)` lines into
///    it. Close the chain with that entry and return.
/// 2. `Start`/`Restart`: a document (re)gained control; refresh the
///    window.
/// 3. `End`: the innermost pending include finished without covering
///    `target`; drop it. An `End` with nothing pending means the primary
///    document itself closed short of `target`.
/// 4. `Include`: a directive opened a subtree that may contain `target`;
///    push its site provisionally (dropped again at step 3 if not).
///
/// The scan runs in one forward pass, `O(log length)` with no allocation
/// beyond the returned chain. Fails with [`TraceError::TargetNotFound`]
/// when `target` is 0, the log ends before covering it, or the log is
/// malformed (an event arrives before any `Start`).
pub fn resolve_position(log: &EventLog, target: u32) -> Result<ProvenanceChain, TraceError> {
    let not_found = || TraceError::TargetNotFound { target };
    if target < 1 {
        return Err(not_found());
    }

    let mut chain = ProvenanceChain::new();
    let mut window: Option<ActiveWindow<'_>> = None;

    for e in log {
        if target <= e.concat_line {
            let w = window.ok_or_else(not_found)?;
            let line = w.file_start + (target - w.concat_start);
            chain.push(ProvenanceEntry::new(w.path, line));
            return Ok(chain);
        }
        match e.kind {
            EventKind::Start | EventKind::Restart => {
                window = Some(ActiveWindow {
                    path: &e.path,
                    file_start: e.source_line,
                    concat_start: e.concat_line,
                });
            }
            EventKind::End => {
                if chain.pop().is_none() {
                    return Err(not_found());
                }
            }
            EventKind::Include => {
                let w = window.as_ref().ok_or_else(not_found)?;
                chain.push(ProvenanceEntry::new(w.path, e.source_line + 1));
            }
        }
    }
    Err(not_found())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use riva_source::PositionEvent;

    fn entry(path: &str, line: u32) -> ProvenanceEntry {
        ProvenanceEntry::new(path, line)
    }

    /// Log for a 3-line `main.rv` whose line 2 includes a 3-line
    /// `helper.rvfunc`; the flattened program has 5 lines.
    fn single_include_log() -> EventLog {
        let mut log = EventLog::new();
        log.push(PositionEvent::start(0, "main.rv"));
        log.push(PositionEvent::include(1, 1, "helper.rvfunc"));
        log.push(PositionEvent::start(1, "helper.rvfunc"));
        log.push(PositionEvent::end(4, 3, "helper.rvfunc"));
        log.push(PositionEvent::restart(4, 2, "main.rv"));
        log.push(PositionEvent::end(5, 3, "main.rv"));
        log
    }

    /// Log for `a.rv` ⊃ `b.rvfunc` ⊃ `c.rvfunc`:
    /// a = [a1, #include b, a3], b = [b1, #include c, b3], c = [c1, c2].
    /// Flattened: a1 b1 c1 c2 b3 a3 (6 lines).
    fn nested_log() -> EventLog {
        let mut log = EventLog::new();
        log.push(PositionEvent::start(0, "a.rv"));
        log.push(PositionEvent::include(1, 1, "b.rvfunc"));
        log.push(PositionEvent::start(1, "b.rvfunc"));
        log.push(PositionEvent::include(2, 1, "c.rvfunc"));
        log.push(PositionEvent::start(2, "c.rvfunc"));
        log.push(PositionEvent::end(4, 2, "c.rvfunc"));
        log.push(PositionEvent::restart(4, 2, "b.rvfunc"));
        log.push(PositionEvent::end(5, 3, "b.rvfunc"));
        log.push(PositionEvent::restart(5, 2, "a.rv"));
        log.push(PositionEvent::end(6, 3, "a.rv"));
        log
    }

    #[test]
    fn plain_document_maps_line_to_itself() {
        let mut log = EventLog::new();
        log.push(PositionEvent::start(0, "model.rv"));
        log.push(PositionEvent::end(3, 3, "model.rv"));

        for k in 1..=3 {
            let chain = resolve_position(&log, k).unwrap();
            assert_eq!(chain.entries(), [entry("model.rv", k)]);
        }
    }

    #[test]
    fn line_before_include_stays_in_outer_file() {
        let chain = resolve_position(&single_include_log(), 1).unwrap();
        assert_eq!(chain.entries(), [entry("main.rv", 1)]);
    }

    #[test]
    fn first_included_line_gets_two_entry_chain() {
        let chain = resolve_position(&single_include_log(), 2).unwrap();
        assert_eq!(
            chain.entries(),
            [entry("main.rv", 2), entry("helper.rvfunc", 1)]
        );
    }

    #[test]
    fn last_included_line_gets_two_entry_chain() {
        let chain = resolve_position(&single_include_log(), 4).unwrap();
        assert_eq!(
            chain.entries(),
            [entry("main.rv", 2), entry("helper.rvfunc", 3)]
        );
    }

    #[test]
    fn line_after_include_resumes_outer_file() {
        let chain = resolve_position(&single_include_log(), 5).unwrap();
        assert_eq!(chain.entries(), [entry("main.rv", 3)]);
    }

    #[test]
    fn deeply_nested_line_gets_three_entry_chain() {
        // Flattened line 3 is c1, the first line of c.rvfunc.
        let chain = resolve_position(&nested_log(), 3).unwrap();
        assert_eq!(
            chain.entries(),
            [
                entry("a.rv", 2),
                entry("b.rvfunc", 2),
                entry("c.rvfunc", 1),
            ]
        );
    }

    #[test]
    fn middle_level_line_gets_two_entry_chain() {
        // Flattened line 5 is b3, back in b.rvfunc after c closed.
        let chain = resolve_position(&nested_log(), 5).unwrap();
        assert_eq!(chain.entries(), [entry("a.rv", 2), entry("b.rvfunc", 3)]);
    }

    #[test]
    fn zero_target_fails() {
        let err = resolve_position(&single_include_log(), 0).unwrap_err();
        assert_eq!(err, TraceError::TargetNotFound { target: 0 });
    }

    #[test]
    fn target_past_the_end_fails() {
        let err = resolve_position(&single_include_log(), 6).unwrap_err();
        assert_eq!(err, TraceError::TargetNotFound { target: 6 });
    }

    #[test]
    fn empty_log_fails() {
        let err = resolve_position(&EventLog::new(), 1).unwrap_err();
        assert_eq!(err, TraceError::TargetNotFound { target: 1 });
    }

    #[test]
    fn empty_document_covers_no_lines() {
        let mut log = EventLog::new();
        log.push(PositionEvent::start(0, "empty.rv"));
        log.push(PositionEvent::end(0, 0, "empty.rv"));
        assert!(resolve_position(&log, 1).is_err());
    }

    #[test]
    fn resolution_is_repeatable() {
        let log = nested_log();
        for k in 1..=6 {
            let a = resolve_position(&log, k).unwrap();
            let b = resolve_position(&log, k).unwrap();
            assert_eq!(a, b, "line {k} resolved differently on the second query");
        }
    }
}
