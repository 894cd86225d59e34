//! Command-line interface definition for anagram-filter
//!
//! Provides argument parsing and validation for the anagram/sub-anagram
//! wordlist reducer.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Wordlist reducer that removes anagrams and sub-anagrams
///
/// Keeps only the words whose letter profile is not contained in any other
/// word's profile; anagram pairs eliminate each other entirely.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "anagram-filter",
    author = "m0h1nd4",
    version,
    about = "Wordlist reducer that removes anagrams and sub-anagrams",
    long_about = r#"
╔══════════════════════════════════════════════════════════════════════════════╗
║                           ANAGRAM-FILTER v1.0.0                              ║
║                   Anagram / Sub-Anagram Wordlist Reduction                   ║
╚══════════════════════════════════════════════════════════════════════════════╝

Reduce a wordlist to its dominance-maximal core: a word is dropped when some
other word is its exact anagram (both are dropped), or when its letter counts
fit entirely inside a longer word's counts. Only lowercase a-z is counted;
all other characters are ignored.

EXAMPLES:
    # Reduce a single wordlist with the default bitset strategy
    anagram-filter -i wordlist.txt

    # Use the quadratic baseline instead
    anagram-filter -i wordlist.txt --strategy brute-force

    # Reduce every .txt under a directory into one output
    anagram-filter -i /wordlists/ --recursive

    # Keep only pure four-letter words before reducing
    anagram-filter -i wordlist.txt -p "^[a-z]{4}$"

    # Run all three strategies and verify they agree
    anagram-filter -i wordlist.txt --compare

STRATEGIES:
    brute-force  - all-pairs word comparison, O(n²); baseline
    pairwise     - all-pairs over deduplicated letter profiles, O(g²)
    bitset       - incremental bitset index, largest-first; default
"#,
    after_help = "For more information, visit: https://github.com/m0h1nd4/anagram-filter"
)]
pub struct Args {
    /// Input file or directory path
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Output directory (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Output filename (default: reduced_wordlist.txt)
    #[arg(long, value_name = "NAME", default_value = "reduced_wordlist.txt")]
    pub output_name: String,

    /// Filtering strategy
    #[arg(short, long, value_enum, default_value_t = Strategy::Bitset)]
    pub strategy: Strategy,

    /// Run all three strategies, verify set agreement, and report timings
    #[arg(long, default_value_t = false)]
    pub compare: bool,

    /// Regex pre-filter applied to words before the dominance filter
    #[arg(short, long, value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// Process directories recursively
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// File extensions to process (default: txt)
    #[arg(long, value_name = "EXT", default_value = "txt")]
    pub extensions: String,

    /// Sort output alphabetically instead of input order
    #[arg(long, default_value_t = false)]
    pub sort: bool,

    /// Show detailed statistics
    #[arg(long, default_value_t = false)]
    pub stats: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Dry run - show what would be done without writing files
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Buffer size for file writing (default: 8MB)
    #[arg(long, value_name = "SIZE", default_value = "8MB")]
    pub buffer_size: String,
}

/// Algorithmic strategy for the dominance filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// All-pairs comparison over raw words (quadratic baseline)
    BruteForce,
    /// All-pairs comparison over deduplicated frequency vectors
    Pairwise,
    /// Incremental bitset-indexed dominance test (fastest)
    Bitset,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::BruteForce => "brute-force",
            Strategy::Pairwise => "pairwise",
            Strategy::Bitset => "bitset",
        }
    }
}

impl Args {
    /// Parse buffer size string to bytes
    pub fn parse_buffer_size(&self) -> anyhow::Result<usize> {
        parse_size(&self.buffer_size)
    }

    /// Get output directory, defaulting to current directory
    pub fn get_output_dir(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Parse file extensions to process
    pub fn get_extensions(&self) -> Vec<String> {
        self.extensions
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Parse human-readable size string to bytes
fn parse_size(size_str: &str) -> anyhow::Result<usize> {
    let size_str = size_str.trim().to_uppercase();

    let (num_str, multiplier) = if size_str.ends_with("GB") {
        (&size_str[..size_str.len() - 2], 1024 * 1024 * 1024)
    } else if size_str.ends_with("MB") {
        (&size_str[..size_str.len() - 2], 1024 * 1024)
    } else if size_str.ends_with("KB") {
        (&size_str[..size_str.len() - 2], 1024)
    } else if size_str.ends_with("B") {
        (&size_str[..size_str.len() - 1], 1)
    } else {
        (size_str.as_str(), 1)
    };

    let num: usize = num_str
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid size format: '{}'", size_str))?;

    Ok(num * multiplier)
}
