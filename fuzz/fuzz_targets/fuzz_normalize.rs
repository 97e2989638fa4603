//! Fuzz target for record parsing.
//!
//! Arbitrary text must always parse into a clean sequence whose k-mer
//! counts add up to the number of windows.

#![no_main]

use kmercorpus::kmer::kmers;
use kmercorpus::record::{is_normalized, SequenceRecord};
use kmercorpus::table::count_kmers;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let record = SequenceRecord::from_lines("fuzz.fa", text.lines());
    let seq = record.sequence();
    assert!(is_normalized(seq), "dirty sequence: {seq:?}");
    assert_eq!(
        record.header_count(),
        text.lines().filter(|l| l.starts_with('>')).count()
    );

    for k in [1, 6, 16] {
        let windows = (seq.len() + 1).saturating_sub(k) as u64;
        assert_eq!(count_kmers(kmers(seq, k)).total(), windows);
    }
});
