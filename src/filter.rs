//! Strategy selection and the single filtering entry point
//!
//! `filter_dominant` is the one contract all callers use: an ordered word
//! sequence in, the dominance-maximal survivors out, in first-occurrence
//! order. The three strategies agree on the returned set; they differ only
//! in how much work they do to find it.

use crate::{bitset, brute, cli::Strategy, pairwise};
use regex::Regex;

/// Filter a word sequence down to its dominance-maximal survivors using
/// the chosen strategy. Pure; builds and discards all state per call, so
/// concurrent calls on independent inputs need no synchronization.
pub fn filter_dominant(words: &[String], strategy: Strategy) -> Vec<String> {
    match strategy {
        Strategy::BruteForce => brute::filter_dominant(words),
        Strategy::Pairwise => pairwise::filter_dominant(words),
        Strategy::Bitset => bitset::filter_dominant(words),
    }
}

/// Optional regex pre-filter applied to words before the dominance filter.
#[derive(Debug, Clone)]
pub struct PreFilter {
    pattern: Option<Regex>,
}

impl PreFilter {
    pub fn new(pattern: Option<&str>) -> anyhow::Result<Self> {
        let pattern = match pattern {
            Some(p) if !p.is_empty() => {
                let regex = Regex::new(p)
                    .map_err(|e| anyhow::anyhow!("Invalid regex pattern '{}': {}", p, e))?;
                Some(regex)
            }
            _ => None,
        };
        Ok(Self { pattern })
    }

    #[inline]
    pub fn matches(&self, word: &str) -> bool {
        match &self.pattern {
            Some(pattern) => pattern.is_match(word),
            None => true,
        }
    }

    pub fn is_active(&self) -> bool {
        self.pattern.is_some()
    }
}

/// Validate a regex pattern before use.
pub fn validate_pattern(pattern: &str) -> anyhow::Result<()> {
    Regex::new(pattern)
        .map_err(|e| anyhow::anyhow!("Invalid regex pattern '{}': {}", pattern, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRATEGIES: [Strategy; 3] =
        [Strategy::BruteForce, Strategy::Pairwise, Strategy::Bitset];

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    fn as_set(words: &[String]) -> std::collections::BTreeSet<String> {
        words.iter().cloned().collect()
    }

    #[test]
    fn test_strategies_agree_on_handcrafted_inputs() {
        let cases: Vec<Vec<String>> = vec![
            owned(&["a", "ab", "ba", "abc", "abcd"]),
            owned(&["cat", "dog", "bird"]),
            owned(&["ab", "ba"]),
            owned(&["abc", "abd", "acd", "bcd", "abcd"]),
            owned(&[]),
            owned(&["ab", "cd"]),
            owned(&["a", "aa", "aaa"]),
            owned(&["listen", "silent", "enlist", "tinsel"]),
            owned(&["zzz", "z", "zz", "az", "za"]),
            // the only dominator of "abc" sits inside an anagram pair
            owned(&["abc", "abcd", "dcba"]),
        ];

        for words in &cases {
            let baseline = as_set(&pairwise::filter_dominant(words));
            for strategy in STRATEGIES {
                assert_eq!(
                    as_set(&filter_dominant(words, strategy)),
                    baseline,
                    "strategy {:?} disagrees on {:?}",
                    strategy,
                    words
                );
            }
        }
    }

    #[test]
    fn test_strategies_agree_on_generated_input() {
        // Deterministic xorshift word soup over a 4-letter alphabet, dense
        // enough to produce plenty of anagram and dominance pairs.
        let mut state = 0x2545f4914f6cdd1du64;
        let mut words = Vec::new();
        for _ in 0..200 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let len = 1 + (state % 6) as usize;
            let word: String = (0..len)
                .map(|i| {
                    let shift = (i * 7) % 57;
                    (b'a' + ((state >> shift) % 4) as u8) as char
                })
                .collect();
            words.push(word);
        }

        let baseline = as_set(&brute::filter_dominant(&words));
        for strategy in STRATEGIES {
            assert_eq!(as_set(&filter_dominant(&words, strategy)), baseline);
        }
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let words = owned(&["a", "ab", "cd", "dc", "xyz", "wxyz", "qq", "q"]);
        for strategy in STRATEGIES {
            let once = filter_dominant(&words, strategy);
            let twice = filter_dominant(&once, strategy);
            assert_eq!(as_set(&once), as_set(&twice));
        }
    }

    #[test]
    fn test_output_preserves_first_occurrence_order() {
        let words = owned(&["dog", "ab", "cat", "ba", "bird"]);
        for strategy in STRATEGIES {
            assert_eq!(
                filter_dominant(&words, strategy),
                owned(&["dog", "cat", "bird"])
            );
        }
    }

    #[test]
    fn test_dominator_survives_unless_itself_dominated() {
        // "ab" < "abc" < "abcd": only the top of the chain survives
        let words = owned(&["ab", "abc", "abcd"]);
        for strategy in STRATEGIES {
            assert_eq!(filter_dominant(&words, strategy), owned(&["abcd"]));
        }
    }

    #[test]
    fn test_pre_filter() {
        let pf = PreFilter::new(Some(r"^[a-z]{4}$")).unwrap();
        assert!(pf.matches("pass"));
        assert!(!pf.matches("password"));
        assert!(pf.is_active());

        let none = PreFilter::new(None).unwrap();
        assert!(none.matches("anything"));
        assert!(!none.is_active());
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        assert!(validate_pattern(r"[unclosed").is_err());
        assert!(PreFilter::new(Some(r"[unclosed")).is_err());
    }
}
