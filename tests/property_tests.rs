//! Property-based tests using proptest.
//!
//! These tests verify invariants that should hold across all valid inputs,
//! catching edge cases that might be missed by example-based tests.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use kmercorpus::corpus::Corpus;
use kmercorpus::kmer::{kmers, KmerLength};
use kmercorpus::rank::rank;
use kmercorpus::record::{is_normalized, normalize, SequenceRecord};
use kmercorpus::table::{aggregate, count_kmers, FrequencyTable};
use proptest::prelude::*;

/// Strategy for generating valid DNA sequences.
fn dna_sequence(min_len: usize, max_len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![Just('A'), Just('C'), Just('G'), Just('T')],
        min_len..=max_len,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Strategy for generating valid k-mer lengths.
fn kmer_length() -> impl Strategy<Value = usize> {
    KmerLength::MIN..=KmerLength::MAX
}

/// Small tables over a tiny alphabet so keys collide across tables.
fn frequency_table() -> impl Strategy<Value = FrequencyTable> {
    proptest::collection::vec((dna_sequence(2, 2), 1u64..50), 0..12)
        .prop_map(|pairs| pairs.into_iter().collect())
}

proptest! {
    /// A sequence of length L yields L - k + 1 windows of length k that
    /// reconstruct the sequence.
    #[test]
    fn windows_cover_sequence(seq in dna_sequence(1, 200), k in 1usize..=32) {
        prop_assume!(k <= seq.len());
        let windows: Vec<&str> = kmers(&seq, k).collect();

        prop_assert_eq!(windows.len(), seq.len() - k + 1);
        prop_assert!(windows.iter().all(|w| w.len() == k));

        let mut rebuilt = windows[0].to_string();
        for w in &windows[1..] {
            prop_assert_eq!(&w[..k - 1], &rebuilt[rebuilt.len() - (k - 1)..]);
            rebuilt.push_str(&w[k - 1..]);
        }
        prop_assert_eq!(rebuilt, seq);
    }

    /// A k longer than the sequence yields no windows.
    #[test]
    fn short_sequences_yield_nothing(seq in dna_sequence(0, 15), extra in 1usize..10) {
        let k = seq.len() + extra;
        prop_assert_eq!(kmers(&seq, k).count(), 0);
    }

    /// Counts add up to the number of windows.
    #[test]
    fn counts_sum_to_window_count(seq in dna_sequence(0, 300), k in kmer_length()) {
        let table = count_kmers(kmers(&seq, k));
        let expected = (seq.len() + 1).saturating_sub(k) as u64;
        prop_assert_eq!(table.total(), expected);
    }

    /// Every global count is the sum of the per-file counts.
    #[test]
    fn global_is_sum_of_files(
        seqs in proptest::collection::vec(dna_sequence(0, 120), 1..6),
        k in kmer_length(),
    ) {
        let records: Vec<_> = seqs
            .iter()
            .enumerate()
            .map(|(i, s)| SequenceRecord::from_lines(format!("f{i}.fa"), [s]))
            .collect();
        let corpus = Corpus::from_records(&records, KmerLength::new(k).unwrap(), true);

        for file in corpus.files() {
            for (kmer, _) in file.table().iter() {
                let sum: u64 = corpus.files().iter().map(|f| f.table().get(kmer)).sum();
                prop_assert_eq!(corpus.global().get(kmer), sum);
            }
        }
        let total: u64 = corpus.files().iter().map(|f| f.table().total()).sum();
        prop_assert_eq!(corpus.global().total(), total);
    }

    /// Aggregation does not depend on table order.
    #[test]
    fn aggregate_is_commutative(a in frequency_table(), b in frequency_table(), c in frequency_table()) {
        prop_assert_eq!(aggregate([&a, &b, &c]), aggregate([&c, &b, &a]));
    }

    /// Ranked entries are in a strict total order: count desc, then k-mer asc.
    #[test]
    fn ranking_is_total_order(table in frequency_table()) {
        let ranked = rank(&table);
        prop_assert_eq!(ranked.len(), table.distinct());
        for pair in ranked.windows(2) {
            let (x, y) = (&pair[0], &pair[1]);
            prop_assert!(x.count > y.count || (x.count == y.count && x.kmer < y.kmer));
        }
    }

    /// Ranking twice gives the same output.
    #[test]
    fn ranking_is_deterministic(table in frequency_table()) {
        prop_assert_eq!(rank(&table), rank(&table.clone()));
    }

    /// Normalizing is idempotent and always yields a clean sequence.
    #[test]
    fn normalize_is_idempotent(raw in "\\PC{0,200}") {
        let once = normalize(&raw);
        prop_assert!(is_normalized(&once));
        prop_assert_eq!(normalize(&once), once.clone());
    }

    /// Repeated lookups give identical answers.
    #[test]
    fn lookup_is_idempotent(seq in dna_sequence(0, 100), query in dna_sequence(8, 8)) {
        let records = [SequenceRecord::from_lines("a.fa", [&seq])];
        let corpus = Corpus::from_records(&records, KmerLength::new(8).unwrap(), false);
        let engine = corpus.query_engine();

        let first = engine.lookup(&query).unwrap();
        let second = engine.lookup(&query.to_lowercase()).unwrap();
        prop_assert_eq!(first.total(), count_kmers(kmers(&seq, 8)).get(&query));
        prop_assert_eq!(first, second);
    }
}
