//! Candidate corpus loading for Quickfind.
//!
//! A corpus is a plain text file with one candidate per line. The matcher
//! never performs I/O itself; this crate is the collaborator that produces
//! the candidate list the matcher is fanned out over.

mod error;
mod loader;

pub use error::{CorpusError, Result};
pub use loader::load_lines;
