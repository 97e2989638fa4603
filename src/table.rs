//! K-mer frequency tables.
//!
//! Tables are filled through a [`FrequencyTableBuilder`] and then sealed into a
//! read-only [`FrequencyTable`]. [`count_kmers`] builds the table of a single
//! file; [`aggregate`] sums any number of tables into one.
//!
//! # Example
//!
//! ```rust
//! use kmercorpus::kmer::kmers;
//! use kmercorpus::table::{aggregate, count_kmers};
//!
//! let a = count_kmers(kmers("ACGTACGT", 4));
//! let b = count_kmers(kmers("ACGTT", 4));
//! let global = aggregate([&a, &b]);
//!
//! assert_eq!(a.get("ACGT"), 2);
//! assert_eq!(global.get("ACGT"), 3);
//! assert_eq!(global.get("CGTT"), 1);
//! assert_eq!(global.get("GGGG"), 0);
//! ```

use rustc_hash::FxHashMap;

/// Mutable accumulator for k-mer counts.
#[derive(Debug, Default)]
pub struct FrequencyTableBuilder {
    counts: FxHashMap<String, u64>,
}

impl FrequencyTableBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `kmer`.
    pub fn add(&mut self, kmer: &str) {
        self.add_count(kmer, 1);
    }

    /// Records `count` occurrences of `kmer`. A zero count is ignored.
    pub fn add_count(&mut self, kmer: &str, count: u64) {
        if count == 0 {
            return;
        }
        // Avoid allocating a key for k-mers already present.
        if let Some(existing) = self.counts.get_mut(kmer) {
            *existing += count;
        } else {
            self.counts.insert(kmer.to_owned(), count);
        }
    }

    /// Adds every count of `table`.
    pub fn merge(&mut self, table: &FrequencyTable) {
        for (kmer, count) in table.iter() {
            self.add_count(kmer, count);
        }
    }

    /// Finishes the table. No further counts can be added.
    #[must_use]
    pub fn seal(self) -> FrequencyTable {
        FrequencyTable {
            counts: self.counts,
        }
    }
}

/// Read-only mapping from k-mer to occurrence count.
///
/// Every stored count is non-zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: FxHashMap<String, u64>,
}

impl FrequencyTable {
    /// Count of `kmer`, or 0 if it never occurred.
    #[must_use]
    pub fn get(&self, kmer: &str) -> u64 {
        self.counts.get(kmer).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn contains(&self, kmer: &str) -> bool {
        self.counts.contains_key(kmer)
    }

    /// Number of distinct k-mers.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over `(kmer, count)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(kmer, &count)| (kmer.as_str(), count))
    }
}

impl<S: AsRef<str>> FromIterator<(S, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut builder = FrequencyTableBuilder::new();
        for (kmer, count) in iter {
            builder.add_count(kmer.as_ref(), count);
        }
        builder.seal()
    }
}

/// Tallies each distinct k-mer of `kmers`.
///
/// Lengths are not re-checked here; callers pass windows of a single k.
pub fn count_kmers<'a, I>(kmers: I) -> FrequencyTable
where
    I: IntoIterator<Item = &'a str>,
{
    let mut builder = FrequencyTableBuilder::new();
    for kmer in kmers {
        builder.add(kmer);
    }
    builder.seal()
}

/// Sums tables key by key.
///
/// The result does not depend on the order of `tables`.
pub fn aggregate<'a, I>(tables: I) -> FrequencyTable
where
    I: IntoIterator<Item = &'a FrequencyTable>,
{
    let mut builder = FrequencyTableBuilder::new();
    for table in tables {
        builder.merge(table);
    }
    builder.seal()
}
