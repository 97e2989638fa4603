//! Frequency lookups across the whole corpus.
//!
//! # Example
//!
//! ```rust
//! use kmercorpus::corpus::Corpus;
//! use kmercorpus::kmer::KmerLength;
//! use kmercorpus::query::{FileHit, QueryOutcome};
//! use kmercorpus::record::SequenceRecord;
//!
//! let records = vec![
//!     SequenceRecord::from_lines("a.fa", ["AAAAAAA"]),
//!     SequenceRecord::from_lines("b.fa", ["CCCCCC"]),
//! ];
//! let corpus = Corpus::from_records(&records, KmerLength::new(6)?, false);
//! let engine = corpus.query_engine();
//!
//! let outcome = engine.lookup("aaaaaa")?;
//! assert_eq!(
//!     outcome,
//!     QueryOutcome::Found {
//!         kmer: "AAAAAA".to_string(),
//!         total: 2,
//!         files: vec![FileHit { source_id: "a.fa".to_string(), count: 2 }],
//!     }
//! );
//! assert!(engine.lookup("AAA").is_err());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::Serialize;

use crate::{
    corpus::FileFrequencies, error::QueryLengthError, kmer::KmerLength, table::FrequencyTable,
};

/// Occurrences of a queried k-mer in one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileHit {
    pub source_id: String,
    pub count: u64,
}

/// Result of a well-formed query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QueryOutcome {
    /// The k-mer does not occur in any source.
    NotFound { kmer: String },
    /// The k-mer occurs `total` times, spread over `files` in input order.
    Found {
        kmer: String,
        total: u64,
        files: Vec<FileHit>,
    },
}

impl QueryOutcome {
    /// The normalized k-mer that was looked up.
    #[must_use]
    pub fn kmer(&self) -> &str {
        match self {
            Self::NotFound { kmer } | Self::Found { kmer, .. } => kmer,
        }
    }

    /// Total occurrences across the corpus.
    #[must_use]
    pub const fn total(&self) -> u64 {
        match self {
            Self::NotFound { .. } => 0,
            Self::Found { total, .. } => *total,
        }
    }
}

/// Read-only view over a corpus' tables.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    global: &'a FrequencyTable,
    files: &'a [FileFrequencies],
    k: KmerLength,
}

impl<'a> QueryEngine<'a> {
    #[must_use]
    pub const fn new(global: &'a FrequencyTable, files: &'a [FileFrequencies], k: KmerLength) -> Self {
        Self { global, files, k }
    }

    #[must_use]
    pub const fn k(&self) -> KmerLength {
        self.k
    }

    /// Looks up `query`, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`QueryLengthError`] if the uppercased query is not exactly k
    /// characters long; nothing is looked up in that case.
    pub fn lookup(&self, query: &str) -> Result<QueryOutcome, QueryLengthError> {
        let kmer = query.to_uppercase();
        let actual = kmer.chars().count();
        if actual != self.k.get() {
            return Err(QueryLengthError {
                expected: self.k.get(),
                actual,
            });
        }

        let total = self.global.get(&kmer);
        if total == 0 {
            return Ok(QueryOutcome::NotFound { kmer });
        }

        let files = self
            .files
            .iter()
            .filter_map(|file| match file.table().get(&kmer) {
                0 => None,
                count => Some(FileHit {
                    source_id: file.source_id().to_owned(),
                    count,
                }),
            })
            .collect();

        Ok(QueryOutcome::Found { kmer, total, files })
    }
}
