//! # kmercorpus
//!
//! Counts k-mers across a corpus of FASTA files and answers frequency queries.
//!
//! Each file is reduced to one normalized sequence (uppercase, `A`/`C`/`G`/`T`
//! only), cut into overlapping k-mers and counted. The per-file tables are
//! summed into a global table, printed ranked by frequency, and can then be
//! searched interactively for any k-mer.
//!
//! ## Quick Start
//!
//! ```rust
//! use kmercorpus::builder::KmerAnalyzer;
//! use kmercorpus::rank::rank;
//! use kmercorpus::record::SequenceRecord;
//!
//! let records = [
//!     SequenceRecord::from_lines("a.fa", [">a", "acgtACGTAC"]),
//!     SequenceRecord::from_lines("b.fa", [">b", "GGGGGGGG"]),
//! ];
//! let corpus = KmerAnalyzer::new().k(6)?.analyze_records(&records)?;
//!
//! let top = &rank(corpus.global())[0];
//! assert_eq!((top.kmer.as_str(), top.count), ("GGGGGG", 3));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Features
//!
//! - `tracing`: Structured logging via the `tracing` crate (on by default)
//! - `gzip`: Read gzip-compressed FASTA files (`.gz`)

pub mod builder;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod kmer;
pub mod query;
pub mod rank;
pub mod reader;
pub mod record;
pub mod report;
pub mod run;
pub mod session;
pub mod table;
