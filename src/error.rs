//! Error types for kmercorpus.
//!
//! Fatal conditions (too few sources, unreadable files, output failures) and the
//! recoverable ones raised while prompting or querying share one enum, so the
//! binary can report any of them the same way.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in kmercorpus operations.
#[derive(Debug, Error)]
pub enum KmerCorpusError {
    /// Fewer sources were supplied than the analysis needs.
    #[error("at least {min} FASTA files are required, got {found}")]
    CorpusTooSmall { found: usize, min: usize },

    /// A supplied source could not be opened or read.
    #[error("failed to read sequence file '{path}': {source}")]
    UnreadableSource {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// K-mer length is outside the valid range.
    #[error("invalid k-mer length {k}: must be between {min} and {max}")]
    InvalidKmerLength { k: usize, min: usize, max: usize },

    /// A query does not have the run's k-mer length.
    #[error("query has length {actual}, expected {expected}")]
    InvalidQueryLength { expected: usize, actual: usize },

    /// Input ended while a prompt was still waiting for an answer.
    #[error("input closed before a value was entered")]
    InputClosed,

    /// Failed to read interactive input.
    #[error("failed to read input: {source}")]
    ReadInput {
        #[source]
        source: std::io::Error,
    },

    /// Failed to write output.
    #[error("failed to write output: {source}")]
    WriteError {
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize JSON output.
    #[error("failed to serialize JSON: {source}")]
    JsonError {
        #[source]
        source: serde_json::Error,
    },
}

/// Error for invalid k-mer length.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("k-mer length {k} is out of range: must be between {min} and {max}")]
pub struct KmerLengthError {
    /// The invalid k value that was provided.
    pub k: usize,
    /// Minimum valid k-mer length.
    pub min: usize,
    /// Maximum valid k-mer length.
    pub max: usize,
}

/// Error for a query whose length differs from k.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("the k-mer must have length {expected}, got {actual}")]
pub struct QueryLengthError {
    /// The run's k.
    pub expected: usize,
    /// Length of the query after case normalization.
    pub actual: usize,
}

impl From<std::io::Error> for KmerCorpusError {
    fn from(source: std::io::Error) -> Self {
        Self::WriteError { source }
    }
}

impl From<serde_json::Error> for KmerCorpusError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonError { source }
    }
}

impl From<KmerLengthError> for KmerCorpusError {
    fn from(err: KmerLengthError) -> Self {
        Self::InvalidKmerLength {
            k: err.k,
            min: err.min,
            max: err.max,
        }
    }
}

impl From<QueryLengthError> for KmerCorpusError {
    fn from(err: QueryLengthError) -> Self {
        Self::InvalidQueryLength {
            expected: err.expected,
            actual: err.actual,
        }
    }
}

/// Errors that can occur when using the builder API.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// K-mer length was not set before calling `analyze`.
    #[error("k-mer length not set; call .k() first")]
    KmerLengthNotSet,

    /// Invalid k-mer length provided.
    #[error(transparent)]
    KmerLength(#[from] KmerLengthError),

    /// Error reading sources or building the corpus.
    #[error(transparent)]
    KmerCorpus(#[from] KmerCorpusError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kmer_length_error_display() {
        let err = KmerLengthError {
            k: 17,
            min: 6,
            max: 16,
        };
        assert_eq!(
            err.to_string(),
            "k-mer length 17 is out of range: must be between 6 and 16"
        );
    }

    #[test]
    fn query_length_error_display() {
        let err = QueryLengthError {
            expected: 8,
            actual: 5,
        };
        assert_eq!(err.to_string(), "the k-mer must have length 8, got 5");
    }

    #[test]
    fn corpus_too_small_display() {
        let err = KmerCorpusError::CorpusTooSmall { found: 3, min: 5 };
        assert_eq!(
            err.to_string(),
            "at least 5 FASTA files are required, got 3"
        );
    }

    #[test]
    fn kmer_corpus_error_from_kmer_length_error() {
        let err: KmerCorpusError = KmerLengthError {
            k: 5,
            min: 6,
            max: 16,
        }
        .into();
        assert!(matches!(err, KmerCorpusError::InvalidKmerLength { k: 5, .. }));
    }

    #[test]
    fn kmer_corpus_error_from_query_length_error() {
        let err: KmerCorpusError = QueryLengthError {
            expected: 8,
            actual: 5,
        }
        .into();
        assert!(matches!(
            err,
            KmerCorpusError::InvalidQueryLength {
                expected: 8,
                actual: 5
            }
        ));
    }
}
