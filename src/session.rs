//! Interactive prompts: sources, k-mer length and the search loop.
//!
//! The session works over any `BufRead`/`Write` pair, so the binary hands it
//! locked stdin/stdout while tests drive it with in-memory buffers.

use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use crate::{
    config::parse_sources,
    error::KmerCorpusError,
    kmer::KmerLength,
    query::QueryEngine,
    reader::read_line_lossy,
    report::write_outcome,
};

#[cfg(feature = "tracing")]
use tracing::debug;

/// Typed at the search prompt (any case) to leave the loop.
pub const QUIT_COMMAND: &str = "salir";

/// Prompt-and-answer driver over an input and an output stream.
#[derive(Debug)]
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The output stream, for writing between prompts.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Reads one line without its terminator; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, KmerCorpusError> {
        read_line_lossy(&mut self.input).map_err(|source| KmerCorpusError::ReadInput { source })
    }

    fn prompt(&mut self, text: &str) -> Result<(), KmerCorpusError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Asks for a single line of space-separated source paths.
    pub fn prompt_sources(&mut self) -> Result<Vec<PathBuf>, KmerCorpusError> {
        self.prompt("Enter the paths of 5 or more FASTA files, separated by spaces: ")?;
        let line = self.read_line()?.ok_or(KmerCorpusError::InputClosed)?;
        Ok(parse_sources(&line))
    }

    /// Asks for k until a number in the accepted range is entered.
    ///
    /// Fails only if the input ends first.
    pub fn prompt_k(&mut self) -> Result<KmerLength, KmerCorpusError> {
        let text = format!(
            "Enter the k-mer length ({}-{}): ",
            KmerLength::MIN,
            KmerLength::MAX
        );
        loop {
            self.prompt(&text)?;
            let line = self.read_line()?.ok_or(KmerCorpusError::InputClosed)?;
            let answer = line.trim();
            match answer.parse::<usize>().ok().map(KmerLength::new) {
                Some(Ok(k)) => return Ok(k),
                _invalid => {
                    #[cfg(feature = "tracing")]
                    debug!(answer, "Rejected k-mer length");
                    writeln!(self.output, "Invalid value. Try again.")?;
                }
            }
        }
    }

    /// Answers queries until [`QUIT_COMMAND`] or end of input.
    ///
    /// Returns how many well-formed searches were answered.
    pub fn query_loop(&mut self, engine: &QueryEngine<'_>) -> Result<usize, KmerCorpusError> {
        let mut searches = 0;
        loop {
            self.prompt("search> ")?;
            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                break;
            };
            let query = line.trim();
            if query.eq_ignore_ascii_case(QUIT_COMMAND) {
                break;
            }

            let outcome = engine.lookup(query);
            if outcome.is_ok() {
                searches += 1;
            }
            write_outcome(&mut self.output, &outcome)?;
        }
        Ok(searches)
    }
}
