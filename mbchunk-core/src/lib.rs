//! Multi-byte-safe chunked reading of large strings and files
//!
//! Splits content into fixed-size chunks without ever splitting a multi-byte
//! character across a chunk boundary. [`TextChunker`] works over an in-memory
//! string in character units; [`FileChunker`] reads bounded byte windows from
//! disk and trims them back to character boundaries, so files never have to
//! fit in memory. Both share one cursor-based navigation surface.
//!
//! ```
//! use mbchunk_core::{ChunkConfig, TextChunker};
//!
//! let mut chunker = TextChunker::with_config("foo", ChunkConfig::new().size(1))?;
//! assert_eq!(chunker.chunk_count(), 3);
//! assert_eq!(chunker.current_chunk(), Some("f".to_string()));
//! assert_eq!(chunker.next_chunk(), Some("o".to_string()));
//!
//! // Probing past the end returns no chunk and leaves the cursor alone.
//! chunker.next_chunk();
//! assert_eq!(chunker.next_chunk(), None);
//! assert_eq!(chunker.current_chunk(), Some("o".to_string()));
//! # Ok::<(), mbchunk_core::ChunkerError>(())
//! ```

#![warn(missing_docs)]

pub mod chunker;
pub mod config;
pub mod encoding;
pub mod error;
pub mod file;
pub mod text;

pub use chunker::{Chunker, Chunks, Source};
pub use config::ChunkConfig;
pub use encoding::{Encoding, MAX_CHAR_BYTES};
pub use error::{ChunkerError, Result};
pub use file::{FileChunker, FileSource, DEFAULT_FILE_CHUNK_SIZE};
pub use text::{TextChunker, TextSource, DEFAULT_TEXT_CHUNK_SIZE};
