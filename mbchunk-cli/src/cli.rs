//! Argument parsing and command execution

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;

use mbchunk_core::{ChunkConfig, Chunker, FileChunker, Source, TextChunker};

use crate::output;

/// Read a file or string in fixed-size, multi-byte-safe chunks
#[derive(Debug, Parser)]
#[command(name = "mbchunk", version, about)]
pub struct Cli {
    /// Input file to chunk
    #[arg(value_name = "FILE", required_unless_present = "text")]
    pub input: Option<PathBuf>,

    /// Chunk an inline string instead of a file
    #[arg(short, long, conflicts_with = "input", value_name = "STRING")]
    pub text: Option<String>,

    /// Chunk size: bytes for files, characters for --text
    #[arg(short, long, value_name = "N")]
    pub size: Option<usize>,

    /// Content encoding label (utf-8, utf-16le, utf-16be)
    #[arg(short, long, default_value = "utf-8", value_name = "LABEL")]
    pub encoding: String,

    /// Print only the number of chunks
    #[arg(short, long)]
    pub count: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// String printed between chunks in text format
    #[arg(long, default_value = "\n", value_name = "SEP")]
    pub separator: String,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Chunks joined by the separator
    Text,
    /// JSON array of chunk strings
    Json,
}

impl Cli {
    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        let mut config = ChunkConfig::new()
            .encoding_label(&self.encoding)
            .context("invalid --encoding")?;
        if let Some(size) = self.size {
            config = config.size(size);
        }

        if let Some(text) = &self.text {
            let chunker = TextChunker::with_config(text.clone(), config)
                .context("invalid chunker configuration")?;
            log::debug!(
                "chunking {} characters into chunks of {}",
                text.chars().count(),
                chunker.size()
            );
            self.emit(&chunker)
        } else {
            let path = self.input.as_ref().context("no input file given")?;
            let chunker = FileChunker::with_config(path, config)
                .with_context(|| format!("cannot chunk {}", path.display()))?;
            log::debug!(
                "chunking {} into {} chunks of {} bytes",
                path.display(),
                chunker.chunk_count(),
                chunker.size()
            );
            self.emit(&chunker)
        }
    }

    fn emit<S: Source>(&self, chunker: &Chunker<S>) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        if self.count {
            return output::write_count(&mut out, chunker.chunk_count());
        }
        match self.format {
            OutputFormat::Text => output::write_text(&mut out, chunker.iter(), &self.separator),
            OutputFormat::Json => output::write_json(&mut out, chunker.iter()),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}
