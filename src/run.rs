//! The full interactive analysis.
//!
//! Sources are read first, then k is chosen, every file is counted, the
//! ranked tables are printed and finally the search loop runs.

use std::io::{BufRead, Write};

use crate::{
    config::Config,
    corpus::{load_records, Corpus},
    error::KmerCorpusError,
    report::{write_corpus, write_plasmid_notices},
    session::{Session, QUIT_COMMAND},
};

#[cfg(feature = "tracing")]
use tracing::info;

/// Summary of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub files: usize,
    pub distinct_kmers: usize,
    pub searches: usize,
}

/// Runs one analysis, prompting on `input` for anything `config` leaves open.
///
/// # Errors
///
/// Returns [`KmerCorpusError::CorpusTooSmall`] before reading anything if
/// fewer than five sources are given, [`KmerCorpusError::UnreadableSource`]
/// if any source cannot be read, and I/O errors from the streams.
pub fn run<R, W>(config: &Config, input: R, output: W) -> Result<RunSummary, KmerCorpusError>
where
    R: BufRead,
    W: Write,
{
    let mut session = Session::new(input, output);

    let sources = if config.sources.is_empty() {
        session.prompt_sources()?
    } else {
        config.sources.clone()
    };

    let records = load_records(&sources)?;
    if !config.quiet {
        write_plasmid_notices(session.output(), &records)?;
    }

    let k = match config.k {
        Some(k) => k,
        None => session.prompt_k()?,
    };

    let corpus = Corpus::from_records(&records, k, config.parallel);
    write_corpus(session.output(), &corpus, &config.display)?;

    if !config.quiet {
        writeln!(
            session.output(),
            "\nSearch k-mers of length {k}. Type '{QUIT_COMMAND}' to finish."
        )?;
    }
    let searches = session.query_loop(&corpus.query_engine())?;
    if !config.quiet {
        writeln!(session.output(), "\nDone.")?;
    }
    session.output().flush()?;

    #[cfg(feature = "tracing")]
    info!(searches, "Session finished");

    Ok(RunSummary {
        files: corpus.files().len(),
        distinct_kmers: corpus.global().distinct(),
        searches,
    })
}
