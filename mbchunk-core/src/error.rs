//! Chunker error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while constructing a chunker
///
/// All of these are configuration errors: they surface synchronously from the
/// constructors and are never silently corrected. Running traversals never see
/// them; content-boundary conditions and transient read failures show up as
/// `None` chunks instead.
#[derive(Error, Debug)]
pub enum ChunkerError {
    /// Chunk size below the minimum for the source kind
    #[error("chunk size must be at least {min}, got {size}")]
    SizeTooSmall {
        /// The rejected size
        size: usize,
        /// The smallest size the source kind accepts
        min: usize,
    },

    /// Encoding label that does not resolve to a supported encoding
    #[error("unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// File missing or not readable when the chunker was opened
    #[error("cannot read {path}: {source}")]
    UnreadableFile {
        /// The path that failed the readability probe
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },
}

/// Result type for chunker construction
pub type Result<T> = std::result::Result<T, ChunkerError>;
