//! Ordered directory list probed for include targets.

use std::fs::File;
use std::path::Path;

/// Ordered list of directories probed for include targets; first match wins.
///
/// Directory strings are concatenated directly with the include target:
/// callers supply the trailing separator (`"inc/"`, not `"inc"`). The
/// library makes no attempt to be clever about platform separators; the
/// strings are joined byte-for-byte exactly as configured.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SearchPath {
    dirs: Vec<String>,
}

impl SearchPath {
    /// An empty search path. Every include lookup against it fails.
    pub fn new() -> Self {
        SearchPath::default()
    }

    /// Append a directory to the end of the probe order.
    pub fn push(&mut self, dir: impl Into<String>) {
        self.dirs.push(dir.into());
    }

    /// The configured directories, in probe order.
    pub fn dirs(&self) -> &[String] {
        &self.dirs
    }

    /// Whether no directory is configured.
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// Probe the directories in order for `target`.
    ///
    /// Returns the first candidate `dir + target` that opens as a regular
    /// file, together with the candidate path, or `None` when every
    /// directory misses. Candidates that exist but are not regular files
    /// (directories, sockets) are skipped.
    pub fn open(&self, target: &str) -> Option<(String, File)> {
        for dir in &self.dirs {
            let candidate = format!("{dir}{target}");
            if !Path::new(&candidate).is_file() {
                tracing::trace!(candidate = %candidate, "include probe miss");
                continue;
            }
            match File::open(&candidate) {
                Ok(file) => {
                    tracing::trace!(candidate = %candidate, "include probe hit");
                    return Some((candidate, file));
                }
                Err(e) => {
                    // Raced away or unreadable; keep probing later directories.
                    tracing::trace!(candidate = %candidate, error = %e, "include probe unreadable");
                }
            }
        }
        None
    }
}

impl<S: Into<String>> FromIterator<S> for SearchPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        SearchPath {
            dirs: iter.into_iter().map(Into::into).collect(),
        }
    }
}
