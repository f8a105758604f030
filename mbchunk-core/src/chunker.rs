//! Shared chunk navigation over a pluggable content source

use crate::encoding::Encoding;

/// Where chunk content comes from
///
/// Implemented by [`TextSource`](crate::text::TextSource) and
/// [`FileSource`](crate::file::FileSource); the navigation in [`Chunker`] is
/// written against this interface alone and never assumes what the offset
/// unit is. Offsets and sizes are in the source's own unit: characters for
/// text, bytes for files.
pub trait Source {
    /// Content length in the source's offset unit, re-measured on every call
    fn content_len(&self) -> usize;

    /// Fetches the chunk of up to `size` units starting at `offset`
    ///
    /// Returns `None` when no content exists at `offset` (past the end, or
    /// the read failed). An empty `String` is a valid chunk, distinct from
    /// `None`.
    fn fetch(&self, offset: usize, size: usize) -> Option<String>;

    /// Encoding the source decodes content with
    fn encoding(&self) -> Encoding;
}

/// Cursor-based navigation over the fixed-size chunks of a [`Source`]
///
/// The cursor starts at chunk 0 and only ever moves to positions that hold a
/// real chunk: probing past either end returns `None` and leaves the cursor
/// where it was, so callers can poll the edges repeatedly without bounds
/// bookkeeping of their own.
#[derive(Debug, Clone)]
pub struct Chunker<S> {
    source: S,
    size: usize,
    index: usize,
}

impl<S: Source> Chunker<S> {
    pub(crate) fn from_parts(source: S, size: usize) -> Self {
        Self {
            source,
            size,
            index: 0,
        }
    }

    pub(crate) fn source(&self) -> &S {
        &self.source
    }

    /// Chunk size, in bytes for files and characters for text
    pub fn size(&self) -> usize {
        self.size
    }

    /// Current cursor position in the chunk sequence
    pub fn index(&self) -> usize {
        self.index
    }

    /// Encoding of the underlying content
    pub fn encoding(&self) -> Encoding {
        self.source.encoding()
    }

    /// Number of chunks the content currently splits into
    ///
    /// Zero for empty or missing content. File sources re-measure their
    /// length on every call, so the count can change between calls.
    pub fn chunk_count(&self) -> usize {
        self.source.content_len().div_ceil(self.size)
    }

    /// Returns the chunk under the cursor, or `None` past the end of content
    pub fn current_chunk(&self) -> Option<String> {
        self.source.fetch(self.index * self.size, self.size)
    }

    /// Advances the cursor and returns the chunk there
    ///
    /// At the last chunk this returns `None` without moving the cursor.
    pub fn next_chunk(&mut self) -> Option<String> {
        if !self.has_next_chunk() {
            return None;
        }
        self.index += 1;
        self.source.fetch(self.index * self.size, self.size)
    }

    /// Moves the cursor back and returns the chunk there
    ///
    /// At the first chunk this returns `None` without moving the cursor.
    pub fn previous_chunk(&mut self) -> Option<String> {
        if !self.has_previous_chunk() {
            return None;
        }
        self.index -= 1;
        self.source.fetch(self.index * self.size, self.size)
    }

    /// True when the content fits in exactly one chunk
    pub fn has_chunk(&self) -> bool {
        self.chunk_count() == 1
    }

    /// True when there is any content at all
    pub fn has_chunks(&self) -> bool {
        self.chunk_count() > 0
    }

    /// True when a chunk exists after the cursor
    pub fn has_next_chunk(&self) -> bool {
        self.index + 1 < self.chunk_count()
    }

    /// True when a chunk exists before the cursor
    pub fn has_previous_chunk(&self) -> bool {
        self.index >= 1
    }

    /// Moves the cursor back to the first chunk
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Iterates over every chunk from the beginning, without moving the cursor
    ///
    /// The iterator ends early if a file read fails mid-traversal.
    pub fn iter(&self) -> Chunks<'_, S> {
        Chunks {
            chunker: self,
            index: 0,
        }
    }
}

impl<'a, S: Source> IntoIterator for &'a Chunker<S> {
    type Item = String;
    type IntoIter = Chunks<'a, S>;

    fn into_iter(self) -> Chunks<'a, S> {
        self.iter()
    }
}

/// Forward iterator over all chunks of a [`Chunker`]
#[derive(Debug)]
pub struct Chunks<'a, S> {
    chunker: &'a Chunker<S>,
    index: usize,
}

impl<S: Source> Iterator for Chunks<'_, S> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.index >= self.chunker.chunk_count() {
            return None;
        }
        let chunk = self
            .chunker
            .source
            .fetch(self.index * self.chunker.size, self.chunker.size);
        self.index += 1;
        chunk
    }
}
