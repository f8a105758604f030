//! In-memory text source
//!
//! Offsets and chunk sizes are measured in characters, and chunk extraction
//! walks character boundaries, so multi-byte content can never be split
//! mid-character no matter where a chunk edge lands.

use crate::chunker::{Chunker, Source};
use crate::config::ChunkConfig;
use crate::encoding::Encoding;
use crate::error::{ChunkerError, Result};

/// Default text chunk size, in characters
pub const DEFAULT_TEXT_CHUNK_SIZE: usize = 2000;

/// Chunk source over an immutable in-memory string
///
/// The text is fixed at construction; reads from multiple threads are safe.
#[derive(Debug, Clone)]
pub struct TextSource {
    text: String,
    encoding: Encoding,
}

impl Source for TextSource {
    fn content_len(&self) -> usize {
        self.text.chars().count()
    }

    fn fetch(&self, offset: usize, size: usize) -> Option<String> {
        if offset >= self.content_len() {
            return None;
        }
        Some(self.text.chars().skip(offset).take(size).collect())
    }

    fn encoding(&self) -> Encoding {
        self.encoding
    }
}

/// Chunker over an in-memory string, sized in characters
pub type TextChunker = Chunker<TextSource>;

impl TextChunker {
    /// Creates a text chunker with the default size and encoding
    pub fn new(text: impl Into<String>) -> Self {
        Self::from_parts(
            TextSource {
                text: text.into(),
                encoding: Encoding::default(),
            },
            DEFAULT_TEXT_CHUNK_SIZE,
        )
    }

    /// Creates a text chunker with explicit configuration
    ///
    /// The chunk size must be at least one character.
    pub fn with_config(text: impl Into<String>, config: ChunkConfig) -> Result<Self> {
        let size = config.size.unwrap_or(DEFAULT_TEXT_CHUNK_SIZE);
        if size < 1 {
            return Err(ChunkerError::SizeTooSmall { size, min: 1 });
        }
        Ok(Self::from_parts(
            TextSource {
                text: text.into(),
                encoding: config.encoding,
            },
            size,
        ))
    }

    /// Decodes raw bytes with the configured encoding and chunks the result
    ///
    /// Malformed sequences are replaced during decoding, the same as when a
    /// file source decodes a raw read.
    pub fn from_bytes(bytes: &[u8], config: ChunkConfig) -> Result<Self> {
        let text = config.encoding.decode(bytes);
        Self::with_config(text, config)
    }

    /// The text being chunked
    pub fn text(&self) -> &str {
        &self.source().text
    }
}
