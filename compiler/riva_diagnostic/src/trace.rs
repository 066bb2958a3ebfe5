//! Rendering provenance chains as include traces.

use std::fmt::Write;

use riva_source::{EventLog, ProvenanceChain};

use crate::error::TraceError;
use crate::resolve::resolve_position;

/// Render a provenance chain as a human-readable include trace.
///
/// The innermost entry (the actual position) comes first, then its
/// enclosing include sites from nearest to outermost, one terminated line
/// each:
///
/// ```text
/// in file 'ode.rvfunc' at line 12
/// included from file 'helpers.rvfunc' at line 3
/// included from file 'model.rv' at line 42
/// ```
///
/// Fails with [`TraceError::EmptyChain`] on a chain with no entries; a
/// chain obtained from a successful [`resolve_position`] is never empty.
pub fn render_trace(chain: &ProvenanceChain) -> Result<String, TraceError> {
    let Some((innermost, sites)) = chain.entries().split_last() else {
        return Err(TraceError::EmptyChain);
    };
    let mut out = String::new();
    let _ = writeln!(out, "in file '{}' at line {}", innermost.path, innermost.line);
    for site in sites.iter().rev() {
        let _ = writeln!(out, "included from file '{}' at line {}", site.path, site.line);
    }
    Ok(out)
}

/// The include trace for 1-based flattened line `target`: resolution and
/// rendering in one call.
pub fn include_trace(log: &EventLog, target: u32) -> Result<String, TraceError> {
    render_trace(&resolve_position(log, target)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use riva_source::{PositionEvent, ProvenanceEntry};

    #[test]
    fn single_entry_renders_one_line() {
        let chain: ProvenanceChain =
            [ProvenanceEntry::new("model.rv", 42)].into_iter().collect();
        assert_eq!(render_trace(&chain).unwrap(), "in file 'model.rv' at line 42\n");
    }

    #[test]
    fn nested_chain_renders_outermost_last() {
        let chain: ProvenanceChain = [
            ProvenanceEntry::new("model.rv", 42),
            ProvenanceEntry::new("helpers.rvfunc", 3),
            ProvenanceEntry::new("ode.rvfunc", 12),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            render_trace(&chain).unwrap(),
            "in file 'ode.rvfunc' at line 12\n\
             included from file 'helpers.rvfunc' at line 3\n\
             included from file 'model.rv' at line 42\n"
        );
    }

    #[test]
    fn empty_chain_is_rejected() {
        assert_eq!(
            render_trace(&ProvenanceChain::new()).unwrap_err(),
            TraceError::EmptyChain
        );
    }

    #[test]
    fn include_trace_composes_resolution_and_rendering() {
        let mut log = EventLog::new();
        log.push(PositionEvent::start(0, "main.rv"));
        log.push(PositionEvent::include(1, 1, "helper.rvfunc"));
        log.push(PositionEvent::start(1, "helper.rvfunc"));
        log.push(PositionEvent::end(4, 3, "helper.rvfunc"));
        log.push(PositionEvent::restart(4, 2, "main.rv"));
        log.push(PositionEvent::end(5, 3, "main.rv"));

        assert_eq!(
            include_trace(&log, 3).unwrap(),
            "in file 'helper.rvfunc' at line 2\n\
             included from file 'main.rv' at line 2\n"
        );
        assert_eq!(include_trace(&log, 5).unwrap(), "in file 'main.rv' at line 3\n");
        assert_eq!(
            include_trace(&log, 9).unwrap_err(),
            TraceError::TargetNotFound { target: 9 }
        );
    }
}
