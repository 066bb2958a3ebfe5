//! Command handlers for the Riva compiler CLI.
//!
//! Each submodule implements a specific CLI command (flatten, trace,
//! events). Shared utilities like opening the primary document and building
//! the include search path live here in the module root.

use std::fs::File;
use std::io::BufReader;

use riva_preproc::{FlattenedProgram, SearchPath};

mod events;
mod flatten;
mod trace;

pub use events::dump_events;
pub use flatten::flatten_file;
pub use trace::trace_line;

/// Build a [`SearchPath`] from `-I` directories.
///
/// The preprocessor concatenates directory and target verbatim, so a
/// directory given without its trailing separator gets one supplied here;
/// the CLI is the caller responsible for separators.
pub(super) fn search_path(include_dirs: &[String]) -> SearchPath {
    include_dirs
        .iter()
        .map(|dir| {
            if dir.ends_with('/') {
                dir.clone()
            } else {
                format!("{dir}/")
            }
        })
        .collect()
}

/// Open the primary document, exiting with a friendly message on failure.
pub(super) fn open_file(path: &str) -> BufReader<File> {
    match File::open(path) {
        Ok(file) => BufReader::new(file),
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                _ => format!("error opening '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Flatten `path` against the given include directories, exiting with the
/// preprocessor's message on failure.
///
/// This is the single entry to the preprocessor shared by every command.
pub(super) fn flatten_or_exit(path: &str, include_dirs: &[String]) -> FlattenedProgram {
    let reader = open_file(path);
    let search = search_path(include_dirs);
    tracing::debug!(path, dirs = include_dirs.len(), "flattening");
    match riva_preproc::flatten(reader, path, &search) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
