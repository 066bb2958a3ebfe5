//! `riva events` - dump the preprocessing event log.

use super::flatten_or_exit;

/// Flatten `path` and dump the recorded event log, one numbered
/// `(concat_line, source_line, kind, path)` tuple per line.
///
/// Debugging aid for include resolution: the dump shows exactly where each
/// document started, which directives fired, and where control returned.
pub fn dump_events(path: &str, include_dirs: &[String]) {
    let program = flatten_or_exit(path, include_dirs);
    print!("{}", program.log());
    println!(
        "{} events, {} flattened lines",
        program.log().len(),
        program.line_count()
    );
}
