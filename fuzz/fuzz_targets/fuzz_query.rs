//! Fuzz target for `QueryEngine::lookup`.
//!
//! Any query string must either be rejected for its length or answered
//! with a total that matches the per-file hits.

#![no_main]

use kmercorpus::corpus::Corpus;
use kmercorpus::kmer::KmerLength;
use kmercorpus::query::QueryOutcome;
use kmercorpus::record::SequenceRecord;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(query) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(k) = KmerLength::new(6) else {
        return;
    };

    let records = [
        SequenceRecord::from_lines("a.fa", [">a", "ACGTACGTACGTTTTT"]),
        SequenceRecord::from_lines("b.fa", [">b", "GGGGGGACGTAC"]),
    ];
    let corpus = Corpus::from_records(&records, k, false);

    match corpus.query_engine().lookup(query) {
        Ok(QueryOutcome::Found { total, files, .. }) => {
            assert!(total > 0);
            assert_eq!(files.iter().map(|f| f.count).sum::<u64>(), total);
        }
        Ok(QueryOutcome::NotFound { .. }) => {}
        Err(err) => assert_ne!(err.actual, err.expected),
    }
});
