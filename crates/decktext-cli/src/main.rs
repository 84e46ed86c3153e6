//! decktext - extract the visible text of a PowerPoint deck into a file.
//!
//! # Usage
//!
//! ```bash
//! # Writes ./talk_output.txt and prints the path
//! decktext talk.pptx
//!
//! # Explicit destination
//! decktext talk.pptx -o notes.txt
//! ```
//!
//! The run either writes the complete extracted text or nothing: extraction
//! happens fully in memory before the output file is touched.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

/// Extract the visible text of a PowerPoint presentation into a text file
#[derive(Parser, Debug)]
#[command(name = "decktext", version, about, long_about = None)]
struct Args {
    /// Input .pptx file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output text file (default: <input stem>_output.txt in the current directory)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Suppress the success line printed to stdout
    #[arg(short, long)]
    quiet: bool,
}

/// Derive the default output path from the input filename.
///
/// `slides/talk.pptx` becomes `talk_output.txt` in the current directory.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();
    PathBuf::from(format!("{}_output.txt", stem.to_string_lossy()))
}

/// Write `text` to `path`, creating the file with mode 0644.
///
/// Overwrites an existing file without confirmation; like `write(2)` through
/// a fresh descriptor, an already-existing file keeps its mode.
#[cfg(unix)]
fn write_output(path: &Path, text: &str) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o644)
        .open(path)?;
    file.write_all(text.as_bytes())
}

#[cfg(not(unix))]
fn write_output(path: &Path, text: &str) -> std::io::Result<()> {
    std::fs::write(path, text)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse();

    let text = decktext_core::extract_file(&args.input)
        .with_context(|| format!("failed to extract text from {}", args.input.display()))?;

    let output = args
        .output
        .unwrap_or_else(|| default_output_path(&args.input));
    write_output(&output, &text)
        .with_context(|| format!("failed to write output to {}", output.display()))?;

    if !args.quiet {
        println!("{}", output.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_strips_directory_and_extension() {
        let path = default_output_path(Path::new("slides/q3 review.pptx"));
        assert_eq!(path, PathBuf::from("q3 review_output.txt"));
    }

    #[test]
    fn test_default_output_for_extensionless_input() {
        let path = default_output_path(Path::new("deck"));
        assert_eq!(path, PathBuf::from("deck_output.txt"));
    }

    #[test]
    fn test_args_parse_minimal() {
        let args = Args::parse_from(["decktext", "deck.pptx"]);
        assert_eq!(args.input, PathBuf::from("deck.pptx"));
        assert!(args.output.is_none());
        assert!(!args.quiet);
    }

    #[test]
    fn test_args_parse_with_output_and_quiet() {
        let args = Args::parse_from(["decktext", "deck.pptx", "-o", "out.txt", "-q"]);
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));
        assert!(args.quiet);
    }

    #[test]
    fn test_args_require_input() {
        assert!(Args::try_parse_from(["decktext"]).is_err());
    }
}
