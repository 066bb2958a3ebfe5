//! Source provenance model for the Riva compiler.
//!
//! When the preprocessor unifies a program and its `#include` tree into one
//! flattened stream, every later compiler stage sees positions in that
//! synthetic stream. The types in this crate are the durable record that maps
//! those positions back to real user files:
//!
//! - [`PositionEvent`]: one fact about where a document's content landed in
//!   the flattened output.
//! - [`EventLog`]: the append-only, time-ordered sequence of events from one
//!   flattening pass.
//! - [`ProvenanceChain`]: the reconstructed inclusion ancestry for a single
//!   flattened position, outermost document first.
//!
//! An `EventLog` is produced exactly once per compiled program and never
//! mutated afterward; resolvers only ever borrow it. Lazy reconstruction from
//! the log replaces per-line bookkeeping: the log grows with the number of
//! includes, not the number of lines.

mod event;
mod log;
mod provenance;

pub use event::{EventKind, PositionEvent};
pub use log::EventLog;
pub use provenance::{ProvenanceChain, ProvenanceEntry};
