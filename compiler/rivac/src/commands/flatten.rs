//! `riva flatten` - print the unified program.

use super::flatten_or_exit;

/// Flatten `path` and write the unified program to stdout.
///
/// The output is exactly the buffer a downstream parser would consume;
/// piping it to a file gives a standalone program with every include
/// spliced in place.
pub fn flatten_file(path: &str, include_dirs: &[String]) {
    let program = flatten_or_exit(path, include_dirs);
    print!("{}", program.text());
}
