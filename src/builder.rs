//! Builder pattern API for analyzing a corpus without the interactive session.
//!
//! # Example
//!
//! ```rust,no_run
//! use kmercorpus::builder::KmerAnalyzer;
//!
//! let corpus = KmerAnalyzer::new()
//!     .k(8)?
//!     .analyze(&["a.fa", "b.fa", "c.fa", "d.fa", "e.fa"])?;
//!
//! let answer = corpus.query_engine().lookup("ACGTACGT")?;
//! println!("{} occurrences", answer.total());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::path::Path;

use crate::{
    corpus::{load_records, Corpus},
    error::{BuilderError, KmerLengthError},
    kmer::KmerLength,
    record::SequenceRecord,
};

/// A builder for configuring corpus analyses.
///
/// Use [`KmerAnalyzer::new()`] to create a builder, set k, then call
/// [`analyze()`](KmerAnalyzer::analyze) with file paths or
/// [`analyze_records()`](KmerAnalyzer::analyze_records) with parsed records.
#[derive(Debug, Clone, Copy)]
pub struct KmerAnalyzer {
    k: Option<KmerLength>,
    parallel: bool,
}

impl Default for KmerAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl KmerAnalyzer {
    /// Creates a builder with no k set and parallel counting enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            k: None,
            parallel: true,
        }
    }

    /// Sets the k-mer length.
    ///
    /// # Errors
    ///
    /// Returns [`KmerLengthError`] if `k` is outside 6-16.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kmercorpus::builder::KmerAnalyzer;
    ///
    /// let analyzer = KmerAnalyzer::new().k(12)?;
    /// assert!(KmerAnalyzer::new().k(4).is_err());
    /// # Ok::<(), kmercorpus::error::KmerLengthError>(())
    /// ```
    pub const fn k(mut self, k: usize) -> Result<Self, KmerLengthError> {
        match KmerLength::new(k) {
            Ok(k) => {
                self.k = Some(k);
                Ok(self)
            }
            Err(err) => Err(err),
        }
    }

    /// Sets the k-mer length from a pre-validated `KmerLength`.
    #[must_use]
    pub const fn k_validated(mut self, k: KmerLength) -> Self {
        self.k = Some(k);
        self
    }

    /// Counts files in parallel (the default) or one after another.
    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Reads, parses and counts the files at `paths`.
    ///
    /// # Errors
    ///
    /// Returns an error if k has not been set, fewer than five paths are
    /// given, or any file cannot be read.
    pub fn analyze<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Corpus, BuilderError> {
        let k = self.k.ok_or(BuilderError::KmerLengthNotSet)?;
        let records = load_records(paths)?;
        Ok(Corpus::from_records(&records, k, self.parallel))
    }

    /// Counts already parsed records. No minimum count of records applies.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::KmerLengthNotSet`] if k has not been set.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kmercorpus::builder::KmerAnalyzer;
    /// use kmercorpus::record::SequenceRecord;
    ///
    /// let records = [SequenceRecord::from_lines("x.fa", ["acgtacgtac"])];
    /// let corpus = KmerAnalyzer::new().k(6)?.analyze_records(&records)?;
    /// assert_eq!(corpus.global().get("ACGTAC"), 2);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn analyze_records(&self, records: &[SequenceRecord]) -> Result<Corpus, BuilderError> {
        let k = self.k.ok_or(BuilderError::KmerLengthNotSet)?;
        Ok(Corpus::from_records(records, k, self.parallel))
    }

    /// Returns the configured k-mer length, if set.
    #[must_use]
    pub const fn get_k(&self) -> Option<KmerLength> {
        self.k
    }

    #[must_use]
    pub const fn is_parallel(&self) -> bool {
        self.parallel
    }
}
