//! `riva trace` - include trace for a flattened line.

use riva_diagnostic::include_trace;

use super::flatten_or_exit;

/// Print the include trace for 1-based flattened line `line` of `path`.
///
/// This is the same message the compiler attaches to diagnostics: the
/// innermost real file and line first, then each enclosing include site
/// out to the primary document.
pub fn trace_line(path: &str, line: &str, include_dirs: &[String]) {
    let Ok(target) = line.parse::<u32>() else {
        eprintln!("error: '{line}' is not a valid line number");
        std::process::exit(1);
    };

    let program = flatten_or_exit(path, include_dirs);
    match include_trace(program.log(), target) {
        Ok(trace) => print!("{trace}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
