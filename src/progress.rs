//! Progress display module
//!
//! Provides styled progress bars and statistics display for the terminal.

use bytesize::ByteSize;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Print the application banner
pub fn print_banner() {
    let banner = r#"
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║    █████╗ ███╗   ██╗ █████╗  ██████╗ ██████╗  █████╗ ███╗   ███╗             ║
║   ██╔══██╗████╗  ██║██╔══██╗██╔════╝ ██╔══██╗██╔══██╗████╗ ████║             ║
║   ███████║██╔██╗ ██║███████║██║  ███╗██████╔╝███████║██╔████╔██║             ║
║   ██╔══██║██║╚██╗██║██╔══██║██║   ██║██╔══██╗██╔══██║██║╚██╔╝██║             ║
║   ██║  ██║██║ ╚████║██║  ██║╚██████╔╝██║  ██║██║  ██║██║ ╚═╝ ██║             ║
║   ╚═╝  ╚═╝╚═╝  ╚═══╝╚═╝  ╚═╝ ╚═════╝ ╚═╝  ╚═╝╚═╝  ╚═╝╚═╝     ╚═╝             ║
║                                                                              ║
║   ███████╗██╗██╗  ████████╗███████╗██████╗                                  ║
║   ██╔════╝██║██║  ╚══██╔══╝██╔════╝██╔══██╗                                 ║
║   █████╗  ██║██║     ██║   █████╗  ██████╔╝                                 ║
║   ██╔══╝  ██║██║     ██║   ██╔══╝  ██╔══██╗                                 ║
║   ██║     ██║███████╗██║   ███████╗██║  ██║                                 ║
║   ╚═╝     ╚═╝╚══════╝╚═╝   ╚══════╝╚═╝  ╚═╝                                 ║
║                                                                              ║
║                  Anagram / Sub-Anagram Wordlist Reduction                    ║
║                                                              v1.0.0          ║
╚══════════════════════════════════════════════════════════════════════════════╝
"#;

    println!("{}", banner.green());
}

/// Print a section header
pub fn print_header(text: &str) {
    println!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    println!("  {} {}", "ℹ".cyan(), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    println!("  {} {}", "✔".green(), text.green());
}

/// Print a warning message
pub fn print_warning(text: &str) {
    println!("  {} {}", "⚠".yellow(), text.yellow());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Print a bullet point
pub fn print_bullet(text: &str) {
    println!("  {} {}", "•".green(), text);
}

/// Create a styled spinner for indeterminate progress
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();

    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
    );

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Create a bytes-based progress bar for reading input files
pub fn create_bytes_progress_bar(total_bytes: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(total_bytes);

    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.green/dim}] {bytes}/{total_bytes} ({bytes_per_sec}) {msg}")
            .unwrap()
            .progress_chars("█▓░")
    );

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Statistics for one filter run
#[derive(Debug)]
pub struct FilterStats {
    pub total_files: AtomicU64,
    pub total_bytes: AtomicU64,
    pub words_read: AtomicU64,
    pub pre_filtered: AtomicU64,
    pub survivors: AtomicU64,
    pub start_time: Instant,
}

impl FilterStats {
    pub fn new() -> Self {
        Self {
            total_files: AtomicU64::new(0),
            total_bytes: AtomicU64::new(0),
            words_read: AtomicU64::new(0),
            pre_filtered: AtomicU64::new(0),
            survivors: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn add_file(&self, size: u64) {
        self.total_files.fetch_add(1, Ordering::Relaxed);
        self.total_bytes.fetch_add(size, Ordering::Relaxed);
    }

    pub fn add_words(&self, count: u64) {
        self.words_read.fetch_add(count, Ordering::Relaxed);
    }

    pub fn add_pre_filtered(&self, count: u64) {
        self.pre_filtered.fetch_add(count, Ordering::Relaxed);
    }

    pub fn set_survivors(&self, count: u64) {
        self.survivors.store(count, Ordering::Relaxed);
    }

    pub fn get_total_files(&self) -> u64 {
        self.total_files.load(Ordering::Relaxed)
    }

    pub fn get_total_bytes(&self) -> u64 {
        self.total_bytes.load(Ordering::Relaxed)
    }

    pub fn get_words_read(&self) -> u64 {
        self.words_read.load(Ordering::Relaxed)
    }

    pub fn get_pre_filtered(&self) -> u64 {
        self.pre_filtered.load(Ordering::Relaxed)
    }

    pub fn get_survivors(&self) -> u64 {
        self.survivors.load(Ordering::Relaxed)
    }

    /// Words removed by the dominance filter (anagrams plus sub-anagrams).
    pub fn get_removed(&self) -> u64 {
        self.get_words_read()
            .saturating_sub(self.get_pre_filtered())
            .saturating_sub(self.get_survivors())
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn words_per_second(&self) -> f64 {
        let elapsed = self.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.get_words_read() as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Print final statistics
    pub fn print_summary(&self) {
        let elapsed = self.elapsed();

        println!();
        println!("{}", "═".repeat(60).green());
        println!("{}", "                    REDUCTION COMPLETE".green().bold());
        println!("{}", "═".repeat(60).green());
        println!();

        println!(
            "  {} {}",
            "Files read:     ".green(),
            format!(
                "{} ({})",
                self.get_total_files(),
                ByteSize(self.get_total_bytes())
            )
        );
        println!(
            "  {} {}",
            "Words read:     ".green(),
            format_number(self.get_words_read())
        );
        if self.get_pre_filtered() > 0 {
            println!(
                "  {} {}",
                "Pattern-dropped:".yellow(),
                format_number(self.get_pre_filtered())
            );
        }
        println!(
            "  {} {}",
            "Removed:        ".yellow(),
            format_number(self.get_removed())
        );
        println!(
            "  {} {}",
            "Survivors:      ".green().bold(),
            format_number(self.get_survivors()).green().bold()
        );

        println!();
        println!(
            "  {} {}",
            "Duration:       ".green(),
            format_duration(elapsed)
        );
        println!(
            "  {} {:.2} words/sec",
            "Throughput:     ".green(),
            self.words_per_second()
        );
        println!();
        println!("{}", "═".repeat(60).green());
    }
}

impl Default for FilterStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number with thousand separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else if secs < 3600 {
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{}m {}s", mins, secs)
    } else {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        format!("{}h {}m", hours, mins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(123), "123");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(30)), "30.0s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
        assert_eq!(format_duration(Duration::from_secs(3661)), "1h 1m");
    }

    #[test]
    fn test_stats_removed_count() {
        let stats = FilterStats::new();

        stats.add_words(100);
        stats.add_pre_filtered(20);
        stats.set_survivors(30);

        assert_eq!(stats.get_words_read(), 100);
        assert_eq!(stats.get_removed(), 50);
    }
}
