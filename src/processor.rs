//! Core processing engine
//!
//! Collects input wordlists, feeds them through the selected dominance
//! filter strategy, and writes the surviving words.

use crate::cli::{Args, Strategy};
use crate::encoding::WordReader;
use crate::filter::{self, PreFilter};
use crate::output::{ensure_output_dir, OutputWriter};
use crate::progress::{
    create_bytes_progress_bar, create_spinner, format_duration, format_number, print_bullet,
    print_header, print_info, print_success, print_warning, FilterStats,
};

use bytesize::ByteSize;
use colored::*;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use walkdir::WalkDir;

/// Processor configuration
pub struct ProcessorConfig {
    pub strategy: Strategy,
    pub compare: bool,
    pub pattern: Option<String>,
    pub output_dir: PathBuf,
    pub output_name: String,
    pub recursive: bool,
    pub extensions: Vec<String>,
    pub sort_output: bool,
    pub buffer_size: usize,
    pub dry_run: bool,
    pub quiet: bool,
    pub verbose: bool,
}

impl ProcessorConfig {
    pub fn from_args(args: &Args) -> anyhow::Result<Self> {
        Ok(Self {
            strategy: args.strategy,
            compare: args.compare,
            pattern: args.pattern.clone(),
            output_dir: args.get_output_dir(),
            output_name: args.output_name.clone(),
            recursive: args.recursive,
            extensions: args.get_extensions(),
            sort_output: args.sort,
            buffer_size: args.parse_buffer_size()?,
            dry_run: args.dry_run,
            quiet: args.quiet,
            verbose: args.verbose,
        })
    }
}

/// Main processor
pub struct Processor {
    config: ProcessorConfig,
    stats: Arc<FilterStats>,
}

impl Processor {
    pub fn new(config: ProcessorConfig) -> Self {
        Self {
            config,
            stats: Arc::new(FilterStats::new()),
        }
    }

    /// Process input (file or directory)
    pub fn process(&self, input: &Path) -> anyhow::Result<()> {
        if !self.config.quiet {
            print_header("Scanning input...");
        }

        let files = self.collect_files(input)?;

        if files.is_empty() {
            print_warning("No files found to process!");
            return Ok(());
        }

        let total_size: u64 = files.iter().map(|(_, size)| *size).sum();

        if !self.config.quiet {
            print_info(&format!(
                "Found {} files ({} total)",
                files.len(),
                ByteSize(total_size)
            ));
        }

        ensure_output_dir(&self.config.output_dir)?;

        if self.config.dry_run {
            self.dry_run_report(&files);
            return Ok(());
        }

        let words = self.read_words(&files)?;

        if !self.config.quiet {
            print_info(&format!("Words read: {}", format_number(words.len() as u64)));
        }

        let survivors = if self.config.compare {
            self.run_compare(&words)?
        } else {
            self.run_strategy(&words, self.config.strategy)
        };

        self.stats.set_survivors(survivors.len() as u64);

        self.write_output(survivors)?;

        if !self.config.quiet {
            self.stats.print_summary();
        }

        Ok(())
    }

    /// Collect all files to process
    fn collect_files(&self, input: &Path) -> anyhow::Result<Vec<(PathBuf, u64)>> {
        let mut files = Vec::new();

        if input.is_file() {
            let size = fs::metadata(input)?.len();
            files.push((input.to_path_buf(), size));
            self.stats.add_file(size);
        } else if input.is_dir() {
            let walker = if self.config.recursive {
                WalkDir::new(input)
            } else {
                WalkDir::new(input).max_depth(1)
            };

            for entry in walker.into_iter().filter_map(|e| e.ok()) {
                let path = entry.path();

                if path.is_file() {
                    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
                        if self.config.extensions.contains(&ext.to_lowercase()) {
                            let size = fs::metadata(path)?.len();
                            files.push((path.to_path_buf(), size));
                            self.stats.add_file(size);
                        }
                    }
                }
            }

            // Deterministic input order regardless of directory walk order
            files.sort();
        } else {
            anyhow::bail!("Input path does not exist: {:?}", input);
        }

        Ok(files)
    }

    /// Read all words from the collected files, applying the regex
    /// pre-filter if one is configured.
    fn read_words(&self, files: &[(PathBuf, u64)]) -> anyhow::Result<Vec<String>> {
        let pre_filter = PreFilter::new(self.config.pattern.as_deref())?;

        let total_bytes: u64 = files.iter().map(|(_, s)| *s).sum();
        let pb = if self.config.quiet {
            indicatif::ProgressBar::hidden()
        } else {
            create_bytes_progress_bar(total_bytes, "Reading...")
        };

        let mut words = Vec::new();
        for (path, size) in files {
            if self.config.verbose {
                pb.set_message(format!(
                    "Reading {:?}...",
                    path.file_name().unwrap_or_default()
                ));
            }

            let reader = WordReader::open(path)?;
            for word in reader {
                self.stats.add_words(1);
                if pre_filter.matches(&word) {
                    words.push(word);
                } else {
                    self.stats.add_pre_filtered(1);
                }
            }

            pb.inc(*size);
        }

        pb.finish_and_clear();
        Ok(words)
    }

    /// Run one strategy with a spinner.
    fn run_strategy(&self, words: &[String], strategy: Strategy) -> Vec<String> {
        let pb = if self.config.quiet {
            indicatif::ProgressBar::hidden()
        } else {
            create_spinner(&format!("Filtering ({})...", strategy.name()))
        };

        let start = Instant::now();
        let survivors = filter::filter_dominant(words, strategy);
        let elapsed = start.elapsed();

        pb.finish_and_clear();
        log::debug!(
            "{}: {} -> {} words in {:?}",
            strategy.name(),
            words.len(),
            survivors.len(),
            elapsed
        );

        if !self.config.quiet {
            print_success(&format!(
                "{}: {} survivors in {}",
                strategy.name(),
                format_number(survivors.len() as u64),
                format_duration(elapsed)
            ));
        }

        survivors
    }

    /// Run all three strategies, verify they agree on the surviving set,
    /// and report per-strategy timing.
    fn run_compare(&self, words: &[String]) -> anyhow::Result<Vec<String>> {
        if !self.config.quiet {
            print_header("Comparing strategies...");
        }

        let strategies = [Strategy::BruteForce, Strategy::Pairwise, Strategy::Bitset];
        let mut reference: Option<(Strategy, BTreeSet<String>)> = None;
        let mut result = Vec::new();

        for strategy in strategies {
            let survivors = self.run_strategy(words, strategy);
            let set: BTreeSet<String> = survivors.iter().cloned().collect();

            match &reference {
                None => reference = Some((strategy, set)),
                Some((first, expected)) => {
                    if set != *expected {
                        anyhow::bail!(
                            "Strategy disagreement: {} and {} produced different word sets",
                            first.name(),
                            strategy.name()
                        );
                    }
                }
            }

            result = survivors;
        }

        if !self.config.quiet {
            print_success("All strategies agree");
        }

        Ok(result)
    }

    /// Write survivors to the output file.
    fn write_output(&self, mut survivors: Vec<String>) -> anyhow::Result<()> {
        if self.config.sort_output {
            survivors.sort_unstable();
        }

        let output_path = self.config.output_dir.join(&self.config.output_name);
        let mut writer = OutputWriter::new(output_path.clone(), self.config.buffer_size)?;

        for word in &survivors {
            writer.write_line(word)?;
        }
        writer.flush()?;

        if !self.config.quiet {
            print_success(&format!("Output written to: {:?}", output_path));
            print_info(&format!("Surviving words: {}", writer.lines_written()));
        }

        Ok(())
    }

    /// Dry run report
    fn dry_run_report(&self, files: &[(PathBuf, u64)]) {
        print_header("DRY RUN - No files will be written");

        println!("\n  {} Files to process:", "▶".green());
        for (path, size) in files {
            print_bullet(&format!("{:?} ({})", path, ByteSize(*size)));
        }

        println!("\n  {} Output configuration:", "▶".green());
        print_bullet(&format!("Output directory: {:?}", self.config.output_dir));
        print_bullet(&format!("Output file: {}", self.config.output_name));
        print_bullet(&format!(
            "Strategy: {}",
            if self.config.compare {
                "compare (all three)".to_string()
            } else {
                self.config.strategy.name().to_string()
            }
        ));

        if let Some(ref pattern) = self.config.pattern {
            print_bullet(&format!("Regex pre-filter: {}", pattern));
        }
        print_bullet(&format!(
            "Output order: {}",
            if self.config.sort_output {
                "sorted"
            } else {
                "input order"
            }
        ));
    }

    /// Get processing statistics
    pub fn stats(&self) -> Arc<FilterStats> {
        Arc::clone(&self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn config_for(dir: &TempDir, strategy: Strategy) -> ProcessorConfig {
        ProcessorConfig {
            strategy,
            compare: false,
            pattern: None,
            output_dir: dir.path().to_path_buf(),
            output_name: "reduced.txt".to_string(),
            recursive: false,
            extensions: vec!["txt".to_string()],
            sort_output: false,
            buffer_size: 1024,
            dry_run: false,
            quiet: true,
            verbose: false,
        }
    }

    fn write_wordlist(dir: &TempDir, name: &str, words: &[&str]) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        for word in words {
            writeln!(file, "{}", word).unwrap();
        }
        path
    }

    #[test]
    fn test_end_to_end_single_file() {
        let dir = TempDir::new().unwrap();
        let input = write_wordlist(&dir, "input.txt", &["a", "ab", "ba", "abc", "abcd"]);

        let processor = Processor::new(config_for(&dir, Strategy::Bitset));
        processor.process(&input).unwrap();

        let output = std::fs::read_to_string(dir.path().join("reduced.txt")).unwrap();
        assert_eq!(output, "abcd\n");
        assert_eq!(processor.stats().get_words_read(), 5);
        assert_eq!(processor.stats().get_survivors(), 1);
    }

    #[test]
    fn test_end_to_end_compare_mode() {
        let dir = TempDir::new().unwrap();
        let input = write_wordlist(&dir, "input.txt", &["cat", "dog", "act", "bird"]);

        let mut config = config_for(&dir, Strategy::Bitset);
        config.compare = true;
        let processor = Processor::new(config);
        processor.process(&input).unwrap();

        let output = std::fs::read_to_string(dir.path().join("reduced.txt")).unwrap();
        assert_eq!(output, "dog\nbird\n");
    }

    #[test]
    fn test_directory_input_with_extension_filter() {
        let dir = TempDir::new().unwrap();
        let input_dir = TempDir::new().unwrap();
        write_wordlist(&input_dir, "a.txt", &["cat"]);
        write_wordlist(&input_dir, "b.txt", &["dog"]);
        write_wordlist(&input_dir, "skip.log", &["bird"]);

        let processor = Processor::new(config_for(&dir, Strategy::Pairwise));
        processor.process(input_dir.path()).unwrap();

        let output = std::fs::read_to_string(dir.path().join("reduced.txt")).unwrap();
        assert_eq!(output, "cat\ndog\n");
    }

    #[test]
    fn test_sorted_output() {
        let dir = TempDir::new().unwrap();
        let input = write_wordlist(&dir, "input.txt", &["dog", "cat", "bird"]);

        let mut config = config_for(&dir, Strategy::BruteForce);
        config.sort_output = true;
        let processor = Processor::new(config);
        processor.process(&input).unwrap();

        let output = std::fs::read_to_string(dir.path().join("reduced.txt")).unwrap();
        assert_eq!(output, "bird\ncat\ndog\n");
    }

    #[test]
    fn test_pattern_pre_filter_applies_before_reduction() {
        let dir = TempDir::new().unwrap();
        // Without the pre-filter "abcd" would dominate "abc"
        let input = write_wordlist(&dir, "input.txt", &["abc", "abcd"]);

        let mut config = config_for(&dir, Strategy::Bitset);
        config.pattern = Some(r"^[a-z]{3}$".to_string());
        let processor = Processor::new(config);
        processor.process(&input).unwrap();

        let output = std::fs::read_to_string(dir.path().join("reduced.txt")).unwrap();
        assert_eq!(output, "abc\n");
        assert_eq!(processor.stats().get_pre_filtered(), 1);
    }

    #[test]
    fn test_empty_input_file_yields_empty_output() {
        let dir = TempDir::new().unwrap();
        let input = write_wordlist(&dir, "input.txt", &[]);

        let processor = Processor::new(config_for(&dir, Strategy::Bitset));
        processor.process(&input).unwrap();

        let output = std::fs::read_to_string(dir.path().join("reduced.txt")).unwrap();
        assert!(output.is_empty());
    }
}
