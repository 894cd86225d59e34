//! Brute-force filter strategy
//!
//! All-pairs comparison over the raw word list. O(n^2 * 26); fine for a
//! few thousand words, the baseline the other strategies are checked
//! against.
//!
//! Anagram elimination runs as its own pass before the dominance scan: an
//! anagram-eliminated word is gone entirely and cannot knock out the
//! sub-anagrams it would otherwise dominate, which keeps the surviving set
//! identical to the grouped strategies'.

use crate::freq::FreqVector;

/// Remove anagrams and sub-anagrams by comparing every pair of words.
///
/// Anagram pairs knock out both members; a sub-anagram is then removed
/// only when a non-eliminated word dominates it. Survivors keep their
/// input order.
pub fn filter_dominant(words: &[String]) -> Vec<String> {
    if words.is_empty() {
        return Vec::new();
    }

    let profiles: Vec<FreqVector> = words.iter().map(|w| FreqVector::profile(w)).collect();

    // Pass 1: equal profiles are mutual anagrams, both sides go
    let mut anagram = vec![false; words.len()];
    for i in 0..words.len() {
        for j in (i + 1)..words.len() {
            if profiles[i] == profiles[j] {
                anagram[i] = true;
                anagram[j] = true;
            }
        }
    }

    // Pass 2: dominance scan over the anagram survivors only
    let mut dominated = vec![false; words.len()];
    for i in 0..words.len() {
        if anagram[i] {
            continue;
        }
        for j in 0..words.len() {
            if i == j || anagram[j] {
                continue;
            }
            if profiles[j].dominates(&profiles[i]) {
                dominated[i] = true;
                break;
            }
        }
    }

    words
        .iter()
        .enumerate()
        .filter(|(i, _)| !anagram[*i] && !dominated[*i])
        .map(|(_, w)| w.clone())
        .collect()
}
