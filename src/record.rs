//! Parsing the raw lines of one FASTA file into a [`SequenceRecord`].
//!
//! All sequence lines of a file are joined into a single sequence, whatever
//! the number of headers. A file with more than one header is flagged, which
//! the binary reports as a likely plasmid-bearing sample.

use std::sync::OnceLock;

use bio::alphabets::Alphabet;

/// Prefix marking a FASTA header line.
pub const HEADER_PREFIX: char = '>';

fn nucleotides() -> &'static Alphabet {
    static NUCLEOTIDES: OnceLock<Alphabet> = OnceLock::new();
    NUCLEOTIDES.get_or_init(|| Alphabet::new(b"ACGT"))
}

/// Uppercases `raw` and keeps only `A`, `C`, `G` and `T`.
///
/// Whitespace, digits, IUPAC ambiguity codes and anything else are dropped
/// silently. Normalizing an already normalized sequence returns it unchanged.
///
/// # Example
///
/// ```rust
/// use kmercorpus::record::normalize;
///
/// assert_eq!(normalize("acgt NNac-gt\t12"), "ACGTACGT");
/// assert_eq!(normalize(&normalize("acgu")), "ACG");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    let alphabet = nucleotides();
    raw.bytes()
        .map(|b| b.to_ascii_uppercase())
        .filter(|&b| alphabet.symbols.contains(usize::from(b)))
        .map(char::from)
        .collect()
}

/// Returns `true` if `sequence` holds only uppercase `A`, `C`, `G`, `T`.
#[must_use]
pub fn is_normalized(sequence: &str) -> bool {
    nucleotides().is_word(sequence.as_bytes())
}

/// One input file reduced to its normalized sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    source_id: String,
    sequence: String,
    header_count: usize,
}

impl SequenceRecord {
    /// Builds a record from the lines of one file.
    ///
    /// Lines starting with `>` are headers; every other line is sequence data.
    /// Sequence lines are concatenated in order and normalized.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kmercorpus::record::SequenceRecord;
    ///
    /// let lines = [">chr", "acgt", ">plasmid", "TTxA"];
    /// let record = SequenceRecord::from_lines("sample.fa", lines);
    /// assert_eq!(record.sequence(), "ACGTTTA");
    /// assert!(record.has_multiple_headers());
    /// ```
    pub fn from_lines<I, S>(source_id: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut header_count = 0;
        let mut raw = String::new();

        for line in lines {
            let line = line.as_ref();
            if line.starts_with(HEADER_PREFIX) {
                header_count += 1;
            } else {
                raw.push_str(line);
            }
        }

        Self {
            source_id: source_id.into(),
            sequence: normalize(&raw),
            header_count,
        }
    }

    /// Identifier of the file this record came from.
    #[must_use]
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    /// Normalized sequence over `{A, C, G, T}`.
    #[must_use]
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Number of header lines seen.
    #[must_use]
    pub const fn header_count(&self) -> usize {
        self.header_count
    }

    /// `true` if the file had more than one header line.
    ///
    /// This is a heuristic for plasmid presence, not a biological claim.
    #[must_use]
    pub const fn has_multiple_headers(&self) -> bool {
        self.header_count > 1
    }

    /// Length of the normalized sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}
