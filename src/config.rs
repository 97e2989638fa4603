use std::path::PathBuf;

use crate::{cli::Args, kmer::KmerLength, report::DisplayOptions};

/// Settings for one analysis run, resolved from the command line.
///
/// Sources and k are optional here: whatever the command line leaves out is
/// asked for interactively. The default counts files in parallel, like the
/// command line and [`KmerAnalyzer`](crate::builder::KmerAnalyzer).
#[derive(Debug, Clone)]
pub struct Config {
    pub sources: Vec<PathBuf>,
    pub k: Option<KmerLength>,
    pub display: DisplayOptions,
    pub parallel: bool,
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            k: None,
            display: DisplayOptions::default(),
            parallel: true,
            quiet: false,
        }
    }
}

impl Config {
    pub fn new(args: Args) -> Self {
        Self {
            sources: args.paths,
            k: args.k,
            display: DisplayOptions {
                format: args.format,
                min_count: args.min_count,
                top: args.top,
            },
            parallel: !args.sequential,
            quiet: args.quiet,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self::new(args)
    }
}

/// Splits a line of whitespace-separated paths.
pub fn parse_sources(line: &str) -> Vec<PathBuf> {
    line.split_whitespace().map(PathBuf::from).collect()
}
