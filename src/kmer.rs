//! K-mer length validation and sliding-window k-mer generation.

use std::{fmt, iter::FusedIterator};

use crate::error::KmerLengthError;

/// A validated k-mer length, fixed for a whole analysis run.
///
/// Only lengths in `MIN..=MAX` are accepted.
///
/// # Example
///
/// ```rust
/// use kmercorpus::kmer::KmerLength;
///
/// let k = KmerLength::new(8)?;
/// assert_eq!(k.get(), 8);
/// assert!(KmerLength::new(5).is_err());
/// assert!(KmerLength::new(17).is_err());
/// # Ok::<(), kmercorpus::error::KmerLengthError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KmerLength(usize);

impl KmerLength {
    /// Smallest accepted k.
    pub const MIN: usize = 6;
    /// Largest accepted k.
    pub const MAX: usize = 16;

    /// Validates `k` against the accepted range.
    ///
    /// # Errors
    ///
    /// Returns [`KmerLengthError`] if `k` is outside `MIN..=MAX`.
    pub const fn new(k: usize) -> Result<Self, KmerLengthError> {
        if k < Self::MIN || k > Self::MAX {
            return Err(KmerLengthError {
                k,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(k))
    }

    /// Returns the raw length.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for KmerLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for KmerLength {
    type Error = KmerLengthError;

    fn try_from(k: usize) -> Result<Self, Self::Error> {
        Self::new(k)
    }
}

/// Returns every length-`k` window of `sequence`, left to right.
///
/// Consecutive windows overlap by `k - 1` characters, so a sequence of length
/// `L` yields `max(0, L - k + 1)` k-mers. A sequence shorter than `k` (or
/// `k == 0`) yields nothing.
///
/// Length is counted in characters, so windows never split a multi-byte
/// character.
///
/// # Example
///
/// ```rust
/// use kmercorpus::kmer::kmers;
///
/// let windows: Vec<_> = kmers("ACGTACGT", 4).collect();
/// assert_eq!(windows, ["ACGT", "CGTA", "GTAC", "TACG", "ACGT"]);
/// assert_eq!(kmers("ACG", 4).count(), 0);
/// ```
#[must_use]
pub fn kmers(sequence: &str, k: usize) -> Kmers<'_> {
    let chars = sequence.chars().count();
    let remaining = if k == 0 { 0 } else { (chars + 1).saturating_sub(k) };
    let end = sequence
        .char_indices()
        .nth(k)
        .map_or(sequence.len(), |(i, _)| i);
    Kmers {
        sequence,
        k,
        start: 0,
        end,
        remaining,
    }
}

/// Lazy sliding-window iterator created by [`kmers`].
///
/// A clone continues from the same position. Call [`Kmers::restart`] (or
/// [`kmers`] again) to walk the sequence from the top.
#[derive(Debug, Clone)]
pub struct Kmers<'a> {
    sequence: &'a str,
    k: usize,
    /// Byte range of the next window.
    start: usize,
    end: usize,
    remaining: usize,
}

impl<'a> Kmers<'a> {
    /// Returns a fresh iterator over the same sequence and k.
    #[must_use]
    pub fn restart(&self) -> Kmers<'a> {
        kmers(self.sequence, self.k)
    }
}

/// Byte length of the character starting at `at`, or 0 past the end.
fn char_len_at(s: &str, at: usize) -> usize {
    s.get(at..)
        .and_then(|rest| rest.chars().next())
        .map_or(0, char::len_utf8)
}

impl<'a> Iterator for Kmers<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let kmer = self.sequence.get(self.start..self.end)?;
        self.remaining -= 1;
        self.start += char_len_at(self.sequence, self.start);
        self.end += char_len_at(self.sequence, self.end);
        Some(kmer)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Kmers<'_> {}

impl FusedIterator for Kmers<'_> {}
