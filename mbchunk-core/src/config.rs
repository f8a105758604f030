//! Chunker configuration

use crate::encoding::Encoding;
use crate::error::Result;

/// Configuration shared by both chunker kinds
///
/// A plain value with chained setters:
///
/// ```
/// use mbchunk_core::{ChunkConfig, Encoding};
///
/// let config = ChunkConfig::new().size(4096).encoding(Encoding::Utf16Le);
/// # let _ = config;
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChunkConfig {
    /// Chunk size override; `None` keeps the per-kind default (2000
    /// characters for text, 8192 bytes for files)
    pub size: Option<usize>,
    /// Content encoding
    pub encoding: Encoding,
}

impl ChunkConfig {
    /// Creates a configuration with the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the chunk size, in bytes for files and characters for text
    pub fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the content encoding
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Sets the content encoding from a label such as `"utf-8"`
    pub fn encoding_label(mut self, label: &str) -> Result<Self> {
        self.encoding = Encoding::for_label(label)?;
        Ok(self)
    }
}
