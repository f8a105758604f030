//! mbchunk CLI library
//!
//! This library provides the command-line interface for multi-byte-safe
//! chunked reading of files and strings.

pub mod cli;
pub mod output;

pub use cli::Cli;
