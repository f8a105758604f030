//! Chunk output formatting

use anyhow::Result;
use std::io::Write;

/// Write chunks joined by `separator`, followed by a trailing newline
pub fn write_text<W: Write>(
    out: &mut W,
    chunks: impl Iterator<Item = String>,
    separator: &str,
) -> Result<()> {
    let mut first = true;
    for chunk in chunks {
        if !first {
            out.write_all(separator.as_bytes())?;
        }
        out.write_all(chunk.as_bytes())?;
        first = false;
    }
    out.write_all(b"\n")?;
    Ok(())
}

/// Write chunks as a JSON array of strings
pub fn write_json<W: Write>(out: &mut W, chunks: impl Iterator<Item = String>) -> Result<()> {
    let chunks: Vec<String> = chunks.collect();
    serde_json::to_writer(&mut *out, &chunks)?;
    writeln!(out)?;
    Ok(())
}

/// Write the chunk count on its own line
pub fn write_count<W: Write>(out: &mut W, count: usize) -> Result<()> {
    writeln!(out, "{count}")?;
    Ok(())
}
