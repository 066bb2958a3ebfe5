//! Include-trace diagnostics for the Riva compiler.
//!
//! The parser reports positions in the flattened program, which is not a
//! file the user ever wrote. This crate turns such a position back into
//! something a person can act on:
//!
//! - [`resolve_position`] walks a [`riva_source::EventLog`] and rebuilds
//!   the full inclusion ancestry of a flattened line.
//! - [`render_trace`] prints that ancestry in the compiler's diagnostic
//!   style:
//!
//! ```text
//! in file 'ode.rvfunc' at line 12
//! included from file 'helpers.rvfunc' at line 3
//! included from file 'model.rv' at line 42
//! ```
//!
//! - [`include_trace`] composes the two for callers that only want the
//!   final message.
//!
//! Everything here is read-only over the log; any number of lookups may
//! run against the same flattening result.

mod error;
mod resolve;
mod trace;

pub use error::TraceError;
pub use resolve::resolve_position;
pub use trace::{include_trace, render_trace};
