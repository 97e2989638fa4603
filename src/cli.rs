//! Command-line interface definition.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::kmer::KmerLength;

/// Counts k-mers across a set of FASTA files and answers frequency queries.
#[derive(Parser, Debug)]
#[command(name = "kmercorpus")]
#[command(version, author, about, long_about = None)]
pub struct Args {
    /// FASTA files to analyze (at least 5). Prompted for when omitted.
    pub paths: Vec<PathBuf>,

    /// K-mer length (6-16). Prompted for when omitted.
    #[arg(short, long, value_parser = parse_k)]
    pub k: Option<KmerLength>,

    /// Output format for the frequency tables
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Minimum count threshold (k-mers below this are not displayed)
    #[arg(short, long, default_value = "1")]
    pub min_count: u64,

    /// Show at most this many rows per table
    #[arg(short, long)]
    pub top: Option<usize>,

    /// Count files one after another instead of in parallel
    #[arg(long)]
    pub sequential: bool,

    /// Suppress informational output (tables and query answers are kept)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format for ranked frequency tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Titled, aligned text table
    #[default]
    Table,
    /// Tab-separated values (kmer\tcount), one block per table
    Tsv,
    /// JSON object per table
    Json,
}

fn parse_k(s: &str) -> Result<KmerLength, String> {
    let k: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    KmerLength::new(k).map_err(|e| e.to_string())
}
