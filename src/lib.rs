//! # Anagram Filter
//!
//! Wordlist reducer that removes anagrams and sub-anagrams, keeping only
//! the dominance-maximal words.
//!
//! ## Model
//!
//! Every word is profiled into a 26-slot letter-count vector (only `a`-`z`
//! is counted; anything else is ignored). Words sharing a vector are exact
//! anagrams and eliminate each other entirely. Of the remaining words, one
//! is dropped when another word's vector contains it slot-for-slot with a
//! strictly larger total - a sub-anagram. Equal-size distinct vectors are
//! independent and both survive.
//!
//! ## Strategies
//!
//! - **brute-force**: all-pairs comparison over the raw words, O(n²)
//! - **pairwise**: all-pairs comparison over deduplicated vectors, O(g²)
//! - **bitset**: largest-first incremental bitset index; per-candidate
//!   cost proportional to the accepted set in 64-bit blocks
//!
//! All three return the same word set, in first-occurrence input order.
//!
//! ## Example
//!
//! ```rust
//! use anagram_filter::cli::Strategy;
//! use anagram_filter::filter::filter_dominant;
//!
//! let words: Vec<String> = ["a", "ab", "ba", "abc", "abcd"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//!
//! let survivors = filter_dominant(&words, Strategy::Bitset);
//! assert_eq!(survivors, vec!["abcd".to_string()]);
//! ```

pub mod bitset;
pub mod brute;
pub mod cli;
pub mod encoding;
pub mod filter;
pub mod freq;
pub mod output;
pub mod pairwise;
pub mod processor;
pub mod progress;

pub use cli::{Args, Strategy};
pub use filter::filter_dominant;
pub use freq::FreqVector;
pub use processor::{Processor, ProcessorConfig};
