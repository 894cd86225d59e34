//! Grouped pairwise filter strategy
//!
//! Same O(g^2 * 26) comparison as the brute-force strategy, but run on the
//! deduplicated frequency vectors that survive grouping, so each distinct
//! profile is compared once instead of once per word.

use crate::freq::{self, Unique};

/// Remove anagrams and sub-anagrams via all-pairs dominance over the
/// grouped singleton vectors. Survivors keep their input order.
pub fn filter_dominant(words: &[String]) -> Vec<String> {
    if words.is_empty() {
        return Vec::new();
    }

    let unique = freq::unique_by_vector(words);

    let survivors: Vec<Unique> = unique
        .iter()
        .filter(|candidate| {
            !unique
                .iter()
                .any(|other| other.vector.dominates(&candidate.vector))
        })
        .cloned()
        .collect();

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
    }

    #[test]
    fn test_equal_size_independent_vectors() {
        assert_eq!(run(&["ab", "cd"]), vec!["ab", "cd"]);
    }

    #[test]
    fn test_repeated_letter_chain() {
        assert_eq!(run(&["a", "aa", "aaa"]), vec!["aaa"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(run(&[]).is_empty());
    }

    #[test]
    fn test_dominator_of_removed_anagram_group_survives() {
        // "ab"/"ba" cancel as anagrams; "abc" is untouched by their removal
        assert_eq!(run(&["ab", "ba", "abc"]), vec!["abc"]);
    }
}
