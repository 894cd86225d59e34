//! Letter-frequency profiling and anagram grouping
//!
//! A word's frequency vector is its 26-slot letter-count profile. Two words
//! are anagrams iff their vectors are equal, and a word is a sub-anagram of
//! another iff its vector is dominated (see [`FreqVector::dominates`]).
//! Grouping by vector is the shared first stage of every filter strategy.

use ahash::RandomState;
use hashbrown::HashMap;

/// Number of letters in the accepted alphabet (`a`-`z`).
pub const ALPHABET: usize = 26;

/// Letter-count profile of a word.
///
/// Only the lowercase ASCII letters `a`-`z` are counted; every other
/// character (uppercase, digits, punctuation, non-ASCII) is silently
/// ignored. This is the single character policy for the whole crate, so
/// `"pass-word!"` and `"password"` profile identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FreqVector([u32; ALPHABET]);

impl FreqVector {
    /// Profile a word into its frequency vector. O(len), pure.
    pub fn profile(word: &str) -> Self {
        let mut counts = [0u32; ALPHABET];
        for &b in word.as_bytes() {
            if b.is_ascii_lowercase() {
                counts[(b - b'a') as usize] += 1;
            }
        }
        Self(counts)
    }

    /// Count for a single letter slot (0 = 'a' .. 25 = 'z').
    #[inline]
    pub fn count(&self, letter: usize) -> u32 {
        self.0[letter]
    }

    /// Total number of counted letters (the word's size).
    #[inline]
    pub fn size(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Largest per-letter count in this vector.
    #[inline]
    pub fn max_count(&self) -> u32 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Strict dominance: `self` dominates `other` iff the vectors differ,
    /// every slot of `self` is >= the matching slot of `other`, and the
    /// total size is strictly greater. Equal-size distinct vectors never
    /// dominate each other.
    pub fn dominates(&self, other: &FreqVector) -> bool {
        let mut strict = false;
        for i in 0..ALPHABET {
            if self.0[i] < other.0[i] {
                return false;
            }
            if self.0[i] > other.0[i] {
                strict = true;
            }
        }
        strict
    }
}

/// A surviving singleton group: one word, its vector, and the position of
/// that word in the original input (used to restore output order).
#[derive(Debug, Clone)]
pub struct Unique {
    pub vector: FreqVector,
    pub word: String,
    pub position: usize,
}

/// Group words by frequency vector and keep only the singletons.
///
/// Groups with more than one member are mutual anagrams and are discarded
/// entirely (no representative survives). The returned singletons are in
/// first-occurrence order of the original input.
pub fn unique_by_vector(words: &[String]) -> Vec<Unique> {
    // vector -> (input position of first occurrence, member count)
    let mut groups: HashMap<FreqVector, (usize, usize), RandomState> =
        HashMap::with_capacity_and_hasher(words.len(), RandomState::new());

    for (position, word) in words.iter().enumerate() {
        let vector = FreqVector::profile(word);
        groups
            .entry(vector)
            .and_modify(|(_, n)| *n += 1)
            .or_insert((position, 1));
    }

    let mut unique: Vec<Unique> = groups
        .into_iter()
        .filter(|(_, (_, n))| *n == 1)
        .map(|(vector, (position, _))| Unique {
            vector,
            word: words[position].clone(),
            position,
        })
        .collect();

    unique.sort_unstable_by_key(|u| u.position);
    unique
}

/// Restore input order over a set of survivors and extract the words.
pub fn into_input_order(mut survivors: Vec<Unique>) -> Vec<String> {
    survivors.sort_unstable_by_key(|u| u.position);
    survivors.into_iter().map(|u| u.word).collect()
}
