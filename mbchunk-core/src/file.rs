//! On-disk file source
//!
//! Chunks are addressed in bytes so that arbitrarily large files can be
//! traversed without loading them: every fetch reads one bounded window of
//! the file and holds no handle or buffer between calls. Because a byte
//! window can land in the middle of an encoded character, the raw read is
//! padded and then trimmed back to character boundaries.

use std::fs::{self, File};
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use crate::chunker::{Chunker, Source};
use crate::config::ChunkConfig;
use crate::encoding::{Encoding, MAX_CHAR_BYTES};
use crate::error::{ChunkerError, Result};

/// Default file chunk size, in bytes
pub const DEFAULT_FILE_CHUNK_SIZE: usize = 8192;

/// Chunk source over a file on disk, addressed in bytes
///
/// The file length is re-measured on every operation rather than snapshotted,
/// so the file may grow or shrink between calls. Since each fetch is a
/// self-contained short read, concurrent chunkers over the same file are safe
/// wherever the underlying storage supports concurrent reads.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    encoding: Encoding,
}

impl FileSource {
    /// Reads up to `len` bytes starting at byte `start` of the file.
    fn read_range(&self, start: usize, len: usize) -> std::io::Result<Vec<u8>> {
        let mut file = File::open(&self.path)?;
        file.seek(SeekFrom::Start(start as u64))?;
        let mut raw = Vec::with_capacity(len);
        file.take(len as u64).read_to_end(&mut raw)?;
        Ok(raw)
    }
}

impl Source for FileSource {
    fn content_len(&self) -> usize {
        // A file that disappeared mid-traversal counts as empty.
        fs::metadata(&self.path).map(|m| m.len() as usize).unwrap_or(0)
    }

    fn fetch(&self, offset: usize, size: usize) -> Option<String> {
        // Pad the raw read on the left so a character straddling the window
        // start is read in full. The first chunk begins at the file start and
        // gets no leading padding; the trim below must skip exactly as much
        // padding as was actually read.
        let lead = offset.min(MAX_CHAR_BYTES);
        let start = offset - lead;
        let raw = self.read_range(start, size + MAX_CHAR_BYTES).ok()?;
        if raw.len() <= lead {
            // Only padding (or nothing) came back: no byte at or beyond
            // `offset` exists, so there is no chunk here.
            return None;
        }
        let cut = self.encoding.cut(&raw, lead, size, start);
        Some(self.encoding.decode(cut))
    }

    fn encoding(&self) -> Encoding {
        self.encoding
    }
}

/// Chunker over a file on disk, sized in bytes
pub type FileChunker = Chunker<FileSource>;

impl FileChunker {
    /// Smallest accepted chunk size, in bytes
    ///
    /// A smaller byte window could never be guaranteed to hold one complete
    /// character in the widest supported encoding.
    pub const MIN_CHUNK_SIZE: usize = MAX_CHAR_BYTES;

    /// Opens a file chunker with the default size and encoding
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::with_config(path, ChunkConfig::default())
    }

    /// Opens a file chunker with explicit configuration
    ///
    /// Fails when the file cannot be opened for reading or when the chunk
    /// size is below [`MIN_CHUNK_SIZE`](Self::MIN_CHUNK_SIZE). I/O failures
    /// after construction are soft: they surface as `None` chunks so a
    /// traversal loop keeps working.
    pub fn with_config(path: impl Into<PathBuf>, config: ChunkConfig) -> Result<Self> {
        let path = path.into();
        let size = config.size.unwrap_or(DEFAULT_FILE_CHUNK_SIZE);
        if size < Self::MIN_CHUNK_SIZE {
            return Err(ChunkerError::SizeTooSmall {
                size,
                min: Self::MIN_CHUNK_SIZE,
            });
        }
        probe_readable(&path)?;
        Ok(Self::from_parts(
            FileSource {
                path,
                encoding: config.encoding,
            },
            size,
        ))
    }

    /// Path of the file being chunked
    pub fn path(&self) -> &Path {
        &self.source().path
    }
}

/// Opens and immediately drops the file; no handle outlives construction.
fn probe_readable(path: &Path) -> Result<()> {
    match File::open(path) {
        Ok(_) => Ok(()),
        Err(source) => Err(ChunkerError::UnreadableFile {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn temp_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn open_rejects_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = FileChunker::open(dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, ChunkerError::UnreadableFile { .. }));
    }

    #[test]
    fn rejects_size_below_minimum() {
        let file = temp_file(b"content");
        let err = FileChunker::with_config(file.path(), ChunkConfig::new().size(3)).unwrap_err();
        assert!(matches!(err, ChunkerError::SizeTooSmall { size: 3, min: 4 }));
    }

    #[test]
    fn minimum_size_is_accepted() {
        let file = temp_file(b"content");
        assert!(FileChunker::with_config(file.path(), ChunkConfig::new().size(4)).is_ok());
    }

    #[test]
    fn fetch_reads_a_bounded_window() {
        let file = temp_file(b"abcdefgh");
        let chunker = FileChunker::with_config(file.path(), ChunkConfig::new().size(4)).unwrap();
        assert_eq!(chunker.current_chunk(), Some("abcd".to_string()));
    }

    #[test]
    fn fetch_past_the_end_is_no_chunk() {
        let file = temp_file(b"abcd");
        let chunker = FileChunker::with_config(file.path(), ChunkConfig::new().size(4)).unwrap();
        let source = chunker.source();
        assert_eq!(source.fetch(4, 4), None);
        // Close enough past the end that the padded read still returns file
        // bytes, but none of them at or beyond the offset itself.
        assert_eq!(source.fetch(7, 4), None);
        assert_eq!(source.fetch(400, 4), None);
    }

    #[test]
    fn shrunken_file_under_a_stale_cursor_is_no_chunk() {
        let file = temp_file(b"abcdefghijklmnop");
        let mut chunker = FileChunker::with_config(file.path(), ChunkConfig::new().size(4)).unwrap();
        for _ in 0..3 {
            chunker.next_chunk();
        }
        assert_eq!(chunker.current_chunk(), Some("mnop".to_string()));

        // Truncate so the cursor's offset sits just past the new end, inside
        // the padded read window.
        fs::write(file.path(), b"abcdefghij").unwrap();
        assert_eq!(chunker.current_chunk(), None);
        assert_eq!(chunker.chunk_count(), 3);
    }

    #[test]
    fn empty_file_has_no_chunks() {
        let file = temp_file(b"");
        let chunker = FileChunker::open(file.path()).unwrap();
        assert_eq!(chunker.chunk_count(), 0);
        assert_eq!(chunker.current_chunk(), None);
        assert!(!chunker.has_chunks());
    }

    #[test]
    fn deleted_file_degrades_to_no_chunks() {
        let file = temp_file(b"still here");
        let chunker = FileChunker::open(file.path()).unwrap();
        assert!(chunker.has_chunks());
        file.close().unwrap();
        assert_eq!(chunker.chunk_count(), 0);
        assert_eq!(chunker.current_chunk(), None);
    }

    #[test]
    fn length_is_remeasured_every_call() {
        let mut file = temp_file(b"1234");
        let chunker = FileChunker::with_config(file.path(), ChunkConfig::new().size(4)).unwrap();
        assert_eq!(chunker.chunk_count(), 1);
        file.write_all(b"5678").unwrap();
        file.flush().unwrap();
        assert_eq!(chunker.chunk_count(), 2);
    }

    #[test]
    fn multibyte_character_on_the_window_edge() {
        // U+00A2 (2 bytes) then U+20AC (3 bytes): the 4-byte window splits the
        // euro sign, so chunk 0 must trim it away and chunk 1 must pull it
        // back in whole.
        let file = temp_file("\u{a2}\u{20ac}".as_bytes());
        let chunker = FileChunker::with_config(file.path(), ChunkConfig::new().size(4)).unwrap();
        assert_eq!(chunker.chunk_count(), 2);
        let all: Vec<String> = chunker.iter().collect();
        assert_eq!(all, vec!["\u{a2}", "\u{20ac}"]);
    }

    #[test]
    fn utf16le_file_respects_surrogate_pairs() {
        // "a" + U+1D11E (surrogate pair) + "b": 8 bytes of UTF-16LE.
        let bytes: Vec<u8> = "a\u{1d11e}b"
            .encode_utf16()
            .flat_map(|u| u.to_le_bytes())
            .collect();
        let file = temp_file(&bytes);
        let chunker = FileChunker::with_config(
            file.path(),
            ChunkConfig::new().size(4).encoding(Encoding::Utf16Le),
        )
        .unwrap();
        assert_eq!(chunker.chunk_count(), 2);
        let all: Vec<String> = chunker.iter().collect();
        assert_eq!(all, vec!["a", "\u{1d11e}b"]);
    }
}
