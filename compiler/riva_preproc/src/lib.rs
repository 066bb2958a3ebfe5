//! Include-resolving source flattener for the Riva compiler.
//!
//! A Riva program may pull function fragments into scope with line-level
//! `#include` directives. The parser, however, wants one linear token
//! stream. This crate bridges the two: [`flatten`] reads a primary document,
//! recursively resolves every `#include` against an ordered [`SearchPath`],
//! and concatenates the whole tree into a single buffer, recording a
//! [`riva_source::EventLog`] so diagnostics can later point at the real user
//! file behind any flattened line.
//!
//! Flattening is synchronous, single-threaded, and depth-first; the only
//! bound on include nesting is host memory (the recursion grows its own
//! stack, see `stack`). A missing include aborts the whole pass: [`flatten`]
//! returns an error and no partial output escapes.

mod directive;
mod error;
mod flatten;
mod search;
mod stack;

pub use directive::{include_target, INCLUDE_TOKEN};
pub use error::PreprocError;
pub use flatten::{flatten, FlattenedProgram};
pub use search::SearchPath;
