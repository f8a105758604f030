//! Supported encodings and character-boundary-safe byte operations
//!
//! File chunks are addressed in bytes, so a chunk window can land in the
//! middle of an encoded character. This module knows, for each supported
//! encoding, how to move a byte position to the nearest character boundary
//! using only a short window of bytes and the window's position in the
//! stream. That rules out the legacy CJK multibyte encodings, whose
//! boundaries cannot be recovered without decoding from the start.

use crate::error::ChunkerError;

/// Widest character any supported encoding can produce, in bytes: a four-byte
/// UTF-8 sequence or a UTF-16 surrogate pair.
pub const MAX_CHAR_BYTES: usize = 4;

/// Character encodings the chunkers can read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Encoding {
    /// UTF-8, one to four bytes per character
    #[default]
    Utf8,
    /// UTF-16 little-endian, two or four bytes per character
    Utf16Le,
    /// UTF-16 big-endian, two or four bytes per character
    Utf16Be,
}

impl Encoding {
    /// Resolves a WHATWG encoding label such as `"utf-8"` or `"UTF-16LE"`
    ///
    /// Labels that resolve to an encoding outside the supported set (or to
    /// nothing at all) are rejected.
    pub fn for_label(label: &str) -> Result<Self, ChunkerError> {
        let unsupported = || ChunkerError::UnsupportedEncoding(label.to_string());
        let encoding =
            encoding_rs::Encoding::for_label(label.trim().as_bytes()).ok_or_else(unsupported)?;
        match encoding.name() {
            "UTF-8" => Ok(Encoding::Utf8),
            "UTF-16LE" => Ok(Encoding::Utf16Le),
            "UTF-16BE" => Ok(Encoding::Utf16Be),
            _ => Err(unsupported()),
        }
    }

    /// Canonical name of the encoding
    pub fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn inner(&self) -> &'static encoding_rs::Encoding {
        match self {
            Encoding::Utf8 => encoding_rs::UTF_8,
            Encoding::Utf16Le => encoding_rs::UTF_16LE,
            Encoding::Utf16Be => encoding_rs::UTF_16BE,
        }
    }

    /// Decodes bytes to a string, replacing malformed sequences
    pub(crate) fn decode(&self, bytes: &[u8]) -> String {
        let (text, _had_errors) = self.inner().decode_without_bom_handling(bytes);
        text.into_owned()
    }

    /// Extracts the character-aligned window from a padded raw read.
    ///
    /// `raw` was read starting at byte `stream_pos` of the underlying stream,
    /// and the wanted window is the `len` bytes beginning `skip` bytes into
    /// it. An edge that falls inside a character moves left: the start picks
    /// up the whole straddling character, the end drops the partial one.
    pub(crate) fn cut<'a>(
        &self,
        raw: &'a [u8],
        skip: usize,
        len: usize,
        stream_pos: usize,
    ) -> &'a [u8] {
        if skip >= raw.len() {
            return &[];
        }
        let end = raw.len().min(skip.saturating_add(len));
        let (start, end) = match self {
            Encoding::Utf8 => (floor_utf8_start(raw, skip), floor_utf8_end(raw, end)),
            Encoding::Utf16Le | Encoding::Utf16Be => self.cut_utf16(raw, skip, end, stream_pos),
        };
        if start >= end {
            return &[];
        }
        &raw[start..end]
    }

    /// UTF-16 window edges: code units sit on the even byte positions of the
    /// stream, so alignment is computed from `stream_pos`, not from the buffer.
    fn cut_utf16(&self, raw: &[u8], skip: usize, end: usize, stream_pos: usize) -> (usize, usize) {
        let unit = |at: usize| -> u16 {
            let pair = [raw[at], raw[at + 1]];
            match self {
                Encoding::Utf16Be => u16::from_be_bytes(pair),
                _ => u16::from_le_bytes(pair),
            }
        };

        let mut start = skip;
        if (stream_pos + start) % 2 == 1 {
            // Off the code-unit grid: floor to the unit containing this byte,
            // or when the buffer itself begins mid-unit, step forward past
            // the partial leading byte instead.
            if start > 0 {
                start -= 1;
            } else {
                start += 1;
            }
        }
        if start + 2 <= raw.len() && start >= 2 && is_low_surrogate(unit(start)) {
            start -= 2;
        }

        let mut end = end;
        if end > 0 && (stream_pos + end) % 2 == 1 {
            end -= 1;
        }
        if end >= start + 2 && end >= 2 && is_high_surrogate(unit(end - 2)) {
            // A high surrogate whose partner lies past the cut is a partial
            // character; drop it.
            end -= 2;
        }

        (start, end)
    }
}

/// Moves a window start left onto the first byte of the character containing
/// it. The search is bounded; on malformed input the position stays put and
/// decoding substitutes replacement characters later.
fn floor_utf8_start(raw: &[u8], mut pos: usize) -> usize {
    let stop = pos.saturating_sub(MAX_CHAR_BYTES - 1);
    while pos > stop && is_utf8_continuation(raw[pos]) {
        pos -= 1;
    }
    pos
}

/// Moves a window end left past any trailing partial character.
fn floor_utf8_end(raw: &[u8], end: usize) -> usize {
    if end == 0 {
        return 0;
    }
    let mut head = end - 1;
    let stop = end.saturating_sub(MAX_CHAR_BYTES);
    while head > stop && is_utf8_continuation(raw[head]) {
        head -= 1;
    }
    if is_utf8_continuation(raw[head]) {
        // Continuation run longer than any sequence; malformed input.
        return end;
    }
    if head + utf8_sequence_len(raw[head]) <= end {
        end
    } else {
        head
    }
}

fn utf8_sequence_len(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        // Continuation or invalid lead byte; treat as one byte of garbage.
        _ => 1,
    }
}

fn is_utf8_continuation(byte: u8) -> bool {
    (byte & 0b1100_0000) == 0b1000_0000
}

fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}
