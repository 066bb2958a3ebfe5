//! Flattening failures.

use std::fmt;
use std::io;

/// Why a flattening pass was aborted.
///
/// Both variants are fatal and deterministic: the same inputs fail the same
/// way every time, and no partial output is exposed alongside them.
#[derive(Debug)]
pub enum PreprocError {
    /// An include target was absent from every search directory.
    IncludeNotFound {
        /// The target as written in the directive.
        target: String,
        /// Document containing the directive.
        directive_path: String,
        /// 1-based line of the directive within `directive_path`.
        directive_line: u32,
        /// Directories probed, in order.
        searched: Vec<String>,
    },
    /// An opened document failed mid-read.
    Read {
        /// Document being read when the failure occurred.
        path: String,
        /// Underlying IO error.
        source: io::Error,
    },
}

impl PreprocError {
    /// Create an include-not-found error at a directive site.
    #[cold]
    pub fn include_not_found(
        target: impl Into<String>,
        directive_path: impl Into<String>,
        directive_line: u32,
        searched: Vec<String>,
    ) -> Self {
        PreprocError::IncludeNotFound {
            target: target.into(),
            directive_path: directive_path.into(),
            directive_line,
            searched,
        }
    }

    /// Create a mid-read IO error.
    #[cold]
    pub fn read(path: impl Into<String>, source: io::Error) -> Self {
        PreprocError::Read {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for PreprocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreprocError::IncludeNotFound {
                target,
                directive_path,
                directive_line,
                searched,
            } => {
                write!(
                    f,
                    "could not find include file '{target}' \
                     (included from file '{directive_path}' at line {directive_line})"
                )?;
                if searched.is_empty() {
                    write!(f, "; no include paths configured")
                } else {
                    write!(f, "; searched: {}", searched.join(", "))
                }
            }
            PreprocError::Read { path, source } => {
                write!(f, "error reading '{path}': {source}")
            }
        }
    }
}

impl std::error::Error for PreprocError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PreprocError::IncludeNotFound { .. } => None,
            PreprocError::Read { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn include_not_found_names_the_site() {
        let err = PreprocError::include_not_found(
            "ode.rvfunc",
            "model.rv",
            12,
            vec!["inc/".to_string(), "lib/".to_string()],
        );
        let msg = err.to_string();
        assert!(msg.contains("'ode.rvfunc'"));
        assert!(msg.contains("'model.rv'"));
        assert!(msg.contains("line 12"));
        assert!(msg.contains("inc/, lib/"));
    }

    #[test]
    fn include_not_found_with_empty_search_path() {
        let err = PreprocError::include_not_found("ode.rvfunc", "model.rv", 1, Vec::new());
        assert!(err.to_string().contains("no include paths configured"));
    }

    #[test]
    fn read_error_carries_source() {
        use std::error::Error;
        let inner = io::Error::new(io::ErrorKind::InvalidData, "bad utf-8");
        let err = PreprocError::read("model.rv", inner);
        assert!(err.to_string().contains("'model.rv'"));
        assert!(err.source().is_some());
    }
}
