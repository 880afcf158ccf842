//! CLI utilities for Quickfind tools
//!
//! Provides shared CLI functionality:
//! - Terminal output formatting
//! - Status messages
//! - Batch timing

#![warn(missing_docs)]

pub mod output;
pub mod stopwatch;
