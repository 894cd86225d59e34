//! Bitset-indexed filter strategy
//!
//! Avoids the O(g^2) pairwise scan by processing vectors largest-first and
//! keeping, for every (letter, count) pair, a growable bitset over the
//! already-accepted maximal vectors whose count for that letter is at least
//! `count`. A candidate is dominated iff the intersection of its required
//! bitsets is non-empty; the strictly-greater-size half of the dominance
//! test is guaranteed by the descending processing order, since component-
//! wise >= between distinct vectors always forces a strictly larger sum.
//!
//! Per-candidate cost is O(26 * accepted/64) words of bit arithmetic, and
//! the staircase insertion is O(26 * maxFrequency).

use crate::freq::{self, FreqVector, Unique, ALPHABET};

const BLOCK_BITS: usize = 64;

/// Growable bitset stored as 64-bit blocks. Blocks past the end read as
/// zero, so a bitset only allocates up to its highest set bit.
#[derive(Debug, Default, Clone)]
pub struct BlockBitset {
    blocks: Vec<u64>,
}

impl BlockBitset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a single bit, growing the block array as needed.
    pub fn set(&mut self, index: usize) {
        let block = index / BLOCK_BITS;
        if block >= self.blocks.len() {
            self.blocks.resize(block + 1, 0);
        }
        self.blocks[block] |= 1u64 << (index % BLOCK_BITS);
    }

    /// Read one 64-bit block; out-of-range blocks are zero.
    #[inline]
    pub fn block(&self, index: usize) -> u64 {
        self.blocks.get(index).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|&b| b == 0)
    }

    /// Intersect into `mask` in place; returns false once `mask` is all
    /// zeros so callers can short-circuit.
    pub fn intersect_into(&self, mask: &mut [u64]) -> bool {
        let mut any = 0u64;
        for (j, m) in mask.iter_mut().enumerate() {
            *m &= self.block(j);
            any |= *m;
        }
        any != 0
    }
}

/// Incremental index over accepted maximal vectors, answering "is this
/// vector dominated by any accepted one?" Built fresh per call; nothing
/// survives the filter invocation.
struct DominanceIndex {
    // at_least[letter][c - 1] = accepted indices with count(letter) >= c
    at_least: Vec<Vec<BlockBitset>>,
    accepted: usize,
}

impl DominanceIndex {
    fn new(max_freq: u32) -> Self {
        let at_least = (0..ALPHABET)
            .map(|_| vec![BlockBitset::new(); max_freq as usize])
            .collect();
        Self {
            at_least,
            accepted: 0,
        }
    }

    /// Mask with one bit per accepted vector, the starting point for
    /// intersection queries.
    fn full_mask(&self) -> Vec<u64> {
        let blocks = (self.accepted + BLOCK_BITS - 1) / BLOCK_BITS;
        let mut mask = vec![u64::MAX; blocks];
        let tail = self.accepted % BLOCK_BITS;
        if tail != 0 {
            mask[blocks - 1] = (1u64 << tail) - 1;
        }
        mask
    }

    /// True iff some accepted vector is >= `vector` on every letter. The
    /// accepted set only contains strictly larger vectors (descending
    /// processing order plus the no-equal-vectors guarantee from grouping),
    /// so a non-empty intersection is full strict dominance.
    fn dominates(&self, vector: &FreqVector) -> bool {
        if self.accepted == 0 {
            return false;
        }

        let mut mask = self.full_mask();
        for letter in 0..ALPHABET {
            let need = vector.count(letter);
            if need == 0 {
                continue;
            }
            let bits = &self.at_least[letter][(need - 1) as usize];
            if !bits.intersect_into(&mut mask) {
                return false;
            }
        }
        true
    }

    /// Record a newly accepted vector: set its staircase of bits, one per
    /// (letter, count) pair from 1 up to the vector's actual count.
    fn insert(&mut self, vector: &FreqVector) {
        let index = self.accepted;
        for letter in 0..ALPHABET {
            for c in 1..=vector.count(letter) {
                self.at_least[letter][(c - 1) as usize].set(index);
            }
        }
        self.accepted += 1;
    }
}

/// Remove anagrams and sub-anagrams using the incremental bitset index.
/// Survivors keep their input order.
pub fn filter_dominant(words: &[String]) -> Vec<String> {
    if words.is_empty() {
        return Vec::new();
    }

    let mut unique = freq::unique_by_vector(words);
    if unique.is_empty() {
        return Vec::new();
    }

    // Largest-first, input position as a deterministic tie-break. Only a
    // strictly larger vector can dominate, so every potential dominator of
    // a candidate has already been through the index by the time the
    // candidate is tested.
    unique.sort_unstable_by_key(|u| (std::cmp::Reverse(u.vector.size()), u.position));

    let max_freq = unique
        .iter()
        .map(|u| u.vector.max_count())
        .max()
        .unwrap_or(0);

    let mut index = DominanceIndex::new(max_freq);
    let mut survivors: Vec<Unique> = Vec::new();

    for unique_entry in unique {
        if index.dominates(&unique_entry.vector) {
            continue;
        }
        index.insert(&unique_entry.vector);
        survivors.push(unique_entry);
    }

    freq::into_input_order(survivors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(words: &[&str]) -> Vec<String> {
        let owned: Vec<String> = words.iter().map(|s| s.to_string()).collect();
        filter_dominant(&owned)
    }

    #[test]
    fn test_block_bitset_set_and_read() {
        let mut bs = BlockBitset::new();
        assert!(bs.is_empty());
        bs.set(3);
        bs.set(64);
        bs.set(130);
        assert_eq!(bs.block(0), 1 << 3);
        assert_eq!(bs.block(1), 1);
        assert_eq!(bs.block(2), 1 << 2);
        assert_eq!(bs.block(7), 0);
        assert!(!bs.is_empty());
    }

    #[test]
    fn test_block_bitset_intersect_short_circuit() {
        let mut a = BlockBitset::new();
        a.set(5);
        let mut mask = vec![u64::MAX];
        assert!(a.intersect_into(&mut mask));
        assert_eq!(mask[0], 1 << 5);

        let b = BlockBitset::new();
        assert!(!b.intersect_into(&mut mask));
        assert_eq!(mask[0], 0);
    }

    #[test]
    fn test_chain_of_sub_anagrams() {
        assert_eq!(run(&["a", "ab", "ba", "abc", "abcd"]), vec!["abcd"]);
    }

    #[test]
    fn test_three_letter_words_inside_four() {
        assert_eq!(run(&["abc", "abd", "acd", "bcd", "abcd"]), vec!["abcd"]);
    }

    #[test]
    fn test_unrelated_words_survive_in_order() {
        assert_eq!(run(&["cat", "dog", "bird"]), vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn test_mutual_anagrams_both_removed() {
        assert!(run(&["ab", "ba"]).is_empty());
        assert!(run(&["listen", "silent", "enlist"]).is_empty());
    }

    #[test]
    fn test_equal_size_vectors_never_dominate() {
        // Every word the same size: the size-strict rule means all survive,
        // whatever order the index processes them in.
        assert_eq!(run(&["ab", "cd"]), vec!["ab", "cd"]);
        assert_eq!(run(&["abc", "abd", "acd", "bcd"]), vec!["abc", "abd", "acd", "bcd"]);
    }

    #[test]
    fn test_repeated_letter_staircase() {
        assert_eq!(run(&["a", "aa", "aaa"]), vec!["aaa"]);
        assert_eq!(run(&["aab", "ab"]), vec!["aab"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(run(&[]).is_empty());
    }

    #[test]
    fn test_grows_past_one_bitset_block() {
        // 66 pairwise-independent equal-size words plus one dominated word:
        // the accepted count crosses the 64-bit block boundary, exercising
        // mask growth and out-of-range block reads.
        let mut words = Vec::new();
        for i in 0..12u8 {
            for j in (i + 1)..12u8 {
                let a = (b'a' + i) as char;
                let b = (b'a' + j) as char;
                words.push(format!("{}{}{}", a, a, b));
            }
        }
        assert_eq!(words.len(), 66);
        words.push("ab".to_string()); // dominated by "aab"
        let result = filter_dominant(&words);
        assert_eq!(result.len(), 66);
        assert!(!result.contains(&"ab".to_string()));
    }

    #[test]
    fn test_partial_overlap_is_not_dominance() {
        // "abb" and "abc" intersect on 'a' and 'b' but neither contains the
        // other; the running intersection must empty out on the second letter.
        assert_eq!(run(&["abb", "abc"]), vec!["abb", "abc"]);
    }
}
