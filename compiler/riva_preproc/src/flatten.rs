//! The recursive flattening pass.

use std::io::{BufRead, BufReader};

use riva_source::{EventLog, PositionEvent};

use crate::directive::include_target;
use crate::error::PreprocError;
use crate::search::SearchPath;
use crate::stack::ensure_sufficient_stack;

/// Output of one flattening pass: the unified program text and the event
/// log that maps its lines back to user files.
///
/// Both parts are created by [`flatten`] and never mutated afterward; any
/// number of resolver queries may borrow them concurrently.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FlattenedProgram {
    text: String,
    log: EventLog,
}

impl FlattenedProgram {
    /// The flattened program text, one buffer for the parser.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The event log recorded while flattening.
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Number of lines in the flattened text.
    pub fn line_count(&self) -> u32 {
        u32::try_from(self.text.lines().count()).unwrap_or(u32::MAX)
    }

    /// Split into the text and the log.
    pub fn into_parts(self) -> (String, EventLog) {
        (self.text, self.log)
    }
}

/// Flatten `primary` (displayed as `name`) and its include tree into one
/// program.
///
/// Reads the primary document line by line. A line recognized as an
/// `#include` directive suspends the current document: each search
/// directory is probed in order, the first hit is recursively flattened
/// into the shared output, and reading resumes on the line after the
/// directive. Every other line is appended to the output verbatim, except
/// that a final line missing its `\n` has one supplied so each document
/// contributes exactly as many terminated lines as it has lines.
///
/// Visitation is depth-first and left-to-right; every opened document's
/// content appears exactly once. There is no cycle detection; a program
/// that includes itself recurses until the host runs out of memory.
///
/// On [`PreprocError::IncludeNotFound`] the whole pass is abandoned and no
/// partial output escapes.
pub fn flatten<R: BufRead>(
    primary: R,
    name: &str,
    search: &SearchPath,
) -> Result<FlattenedProgram, PreprocError> {
    let mut flattener = Flattener {
        search,
        concat_line: 0,
        text: String::new(),
        log: EventLog::new(),
    };
    flattener.read_document(primary, name)?;
    Ok(FlattenedProgram {
        text: flattener.text,
        log: flattener.log,
    })
}

/// Mutable state of one pass, threaded through the recursion as a single
/// exclusively-owned context.
struct Flattener<'a> {
    search: &'a SearchPath,
    /// Lines emitted to `text` so far.
    concat_line: u32,
    text: String,
    log: EventLog,
}

impl Flattener<'_> {
    /// Consume one document, recursing into its includes.
    ///
    /// `path` is the display name for the primary document and the
    /// directive target for included ones.
    #[tracing::instrument(level = "debug", skip(self, input))]
    fn read_document<R: BufRead>(&mut self, mut input: R, path: &str) -> Result<(), PreprocError> {
        self.log.push(PositionEvent::start(self.concat_line, path));
        let mut line = String::new();
        let mut line_num: u32 = 0;
        loop {
            line_num += 1;
            line.clear();
            let read = input
                .read_line(&mut line)
                .map_err(|e| PreprocError::read(path, e))?;
            if read == 0 {
                self.log
                    .push(PositionEvent::end(self.concat_line, line_num - 1, path));
                return Ok(());
            }
            if let Some(target) = include_target(&line) {
                self.log
                    .push(PositionEvent::include(self.concat_line, line_num - 1, target));
                let Some((candidate, file)) = self.search.open(target) else {
                    return Err(PreprocError::include_not_found(
                        target,
                        path,
                        line_num,
                        self.search.dirs().to_vec(),
                    ));
                };
                tracing::debug!(include = target, resolved = %candidate, "resolved include");
                // The File is dropped on every exit path of the nested
                // read, including the error one.
                ensure_sufficient_stack(|| self.read_document(BufReader::new(file), target))?;
                self.log
                    .push(PositionEvent::restart(self.concat_line, line_num, path));
                continue;
            }
            self.concat_line += 1;
            self.text.push_str(&line);
            if !line.ends_with('\n') {
                self.text.push('\n');
            }
        }
    }
}
