//! The analyzed corpus: per-file k-mer tables plus their global sum.
//!
//! Loading happens in two steps because k is only known after the sources have
//! been read: [`load_records`] turns paths into [`SequenceRecord`]s, and
//! [`Corpus::from_records`] counts them for a chosen k.
//!
//! # Example
//!
//! ```rust
//! use kmercorpus::corpus::Corpus;
//! use kmercorpus::kmer::KmerLength;
//! use kmercorpus::record::SequenceRecord;
//!
//! let records = vec![
//!     SequenceRecord::from_lines("a.fa", [">a", "ACGTACGTAC"]),
//!     SequenceRecord::from_lines("b.fa", [">b", "ACGTACTTTT"]),
//! ];
//! let corpus = Corpus::from_records(&records, KmerLength::new(6)?, true);
//!
//! assert_eq!(corpus.global().get("ACGTAC"), 3);
//! assert_eq!(corpus.files()[1].source_id(), "b.fa");
//! # Ok::<(), kmercorpus::error::KmerLengthError>(())
//! ```

use std::{collections::HashSet, path::Path};

use rayon::prelude::*;

use crate::{
    error::KmerCorpusError,
    kmer::{kmers, KmerLength},
    query::QueryEngine,
    reader::read_lines,
    record::SequenceRecord,
    table::{aggregate, count_kmers, FrequencyTable},
};

#[cfg(feature = "tracing")]
use tracing::{debug, info, info_span, warn};

/// Minimum number of sources an analysis needs.
pub const MIN_SOURCES: usize = 5;

/// Fails with [`KmerCorpusError::CorpusTooSmall`] if fewer than
/// [`MIN_SOURCES`] sources were supplied.
pub fn check_corpus_size(found: usize) -> Result<(), KmerCorpusError> {
    if found < MIN_SOURCES {
        return Err(KmerCorpusError::CorpusTooSmall {
            found,
            min: MIN_SOURCES,
        });
    }
    Ok(())
}

/// Reads and parses every source, in the order given.
///
/// The size check runs before any file is touched. A path listed more than
/// once is read only once. The first unreadable source aborts the whole load.
pub fn load_records<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<SequenceRecord>, KmerCorpusError> {
    check_corpus_size(paths.len())?;

    #[cfg(feature = "tracing")]
    let _span = info_span!("load_records", sources = paths.len()).entered();

    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(paths.len());

    for path in paths {
        let path = path.as_ref();
        let source_id = path.display().to_string();
        if !seen.insert(source_id.clone()) {
            #[cfg(feature = "tracing")]
            warn!(source = %source_id, "Skipping duplicate source");
            continue;
        }

        let lines = read_lines(path)?;
        let record = SequenceRecord::from_lines(source_id, lines);

        #[cfg(feature = "tracing")]
        debug!(
            source = record.source_id(),
            bases = record.len(),
            headers = record.header_count(),
            "Parsed source"
        );

        records.push(record);
    }

    Ok(records)
}

/// K-mer counts of one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFrequencies {
    source_id: String,
    has_multiple_headers: bool,
    sequence_len: usize,
    table: FrequencyTable,
}

impl FileFrequencies {
    /// Counts the k-mers of `record`.
    #[must_use]
    pub fn from_record(record: &SequenceRecord, k: KmerLength) -> Self {
        Self {
            source_id: record.source_id().to_owned(),
            has_multiple_headers: record.has_multiple_headers(),
            sequence_len: record.len(),
            table: count_kmers(kmers(record.sequence(), k.get())),
        }
    }

    #[must_use]
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    #[must_use]
    pub const fn has_multiple_headers(&self) -> bool {
        self.has_multiple_headers
    }

    /// Length of the normalized sequence the table was built from.
    #[must_use]
    pub const fn sequence_len(&self) -> usize {
        self.sequence_len
    }

    #[must_use]
    pub const fn table(&self) -> &FrequencyTable {
        &self.table
    }
}

/// Per-file tables in input order and the global table derived from them.
#[derive(Debug, Clone)]
pub struct Corpus {
    k: KmerLength,
    files: Vec<FileFrequencies>,
    global: FrequencyTable,
}

impl Corpus {
    /// Counts every record and sums the results.
    ///
    /// With `parallel`, records are counted on the rayon thread pool; each
    /// worker builds its own table and the sum is taken after all of them
    /// finish. The result is identical either way.
    #[must_use]
    pub fn from_records(records: &[SequenceRecord], k: KmerLength, parallel: bool) -> Self {
        #[cfg(feature = "tracing")]
        let _span = info_span!("count_kmers", files = records.len(), k = k.get()).entered();

        let files: Vec<FileFrequencies> = if parallel {
            records
                .par_iter()
                .map(|record| FileFrequencies::from_record(record, k))
                .collect()
        } else {
            records
                .iter()
                .map(|record| FileFrequencies::from_record(record, k))
                .collect()
        };

        let global = aggregate(files.iter().map(FileFrequencies::table));

        #[cfg(feature = "tracing")]
        info!(
            distinct = global.distinct(),
            total = global.total(),
            "Aggregated corpus k-mer counts"
        );

        Self { k, files, global }
    }

    #[must_use]
    pub const fn k(&self) -> KmerLength {
        self.k
    }

    /// Per-file counts, in the order the sources were given.
    #[must_use]
    pub fn files(&self) -> &[FileFrequencies] {
        &self.files
    }

    /// Sum of all per-file tables.
    #[must_use]
    pub const fn global(&self) -> &FrequencyTable {
        &self.global
    }

    /// Looks up a source by id.
    #[must_use]
    pub fn file(&self, source_id: &str) -> Option<&FileFrequencies> {
        self.files.iter().find(|f| f.source_id == source_id)
    }

    /// Sources flagged by the plasmid heuristic.
    pub fn multi_header_files(&self) -> impl Iterator<Item = &FileFrequencies> + '_ {
        self.files.iter().filter(|f| f.has_multiple_headers)
    }

    /// Borrows the tables for interactive lookups.
    #[must_use]
    pub fn query_engine(&self) -> QueryEngine<'_> {
        QueryEngine::new(&self.global, &self.files, self.k)
    }
}
