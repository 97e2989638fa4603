//! Ordering frequency tables for display.

use serde::Serialize;

use crate::table::FrequencyTable;

/// A k-mer with its count, as shown in ranked tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub kmer: String,
    pub count: u64,
}

impl RankedEntry {
    pub fn new(kmer: impl Into<String>, count: u64) -> Self {
        Self {
            kmer: kmer.into(),
            count,
        }
    }
}

/// Sorts `table` by count, highest first; equal counts by k-mer, ascending.
///
/// Keys are distinct, so the order is total and the output is the same on
/// every call.
///
/// # Example
///
/// ```rust
/// use kmercorpus::rank::{rank, RankedEntry};
/// use kmercorpus::table::FrequencyTable;
///
/// let table: FrequencyTable = [("GGGG", 3), ("TTTT", 1), ("ACGT", 3)].into_iter().collect();
/// assert_eq!(
///     rank(&table),
///     [
///         RankedEntry::new("ACGT", 3),
///         RankedEntry::new("GGGG", 3),
///         RankedEntry::new("TTTT", 1),
///     ]
/// );
/// ```
#[must_use]
pub fn rank(table: &FrequencyTable) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = table
        .iter()
        .map(|(kmer, count)| RankedEntry::new(kmer, count))
        .collect();
    entries.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.kmer.cmp(&b.kmer)));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_break_lexicographically() {
        let table: FrequencyTable = [("TTTT", 2), ("AAAA", 2), ("CCCC", 2), ("GGGG", 5)]
            .into_iter()
            .collect();
        let kmers: Vec<_> = rank(&table).into_iter().map(|e| e.kmer).collect();
        assert_eq!(kmers, ["GGGG", "AAAA", "CCCC", "TTTT"]);
    }

    #[test]
    fn empty_table() {
        assert!(rank(&FrequencyTable::default()).is_empty());
    }

    #[test]
    fn does_not_mutate_input() {
        let table: FrequencyTable = [("ACGT", 1), ("TTTT", 9)].into_iter().collect();
        let before = table.clone();
        let _ = rank(&table);
        assert_eq!(table, before);
    }
}
