//! Anagram Filter - reduce wordlists to their dominance-maximal core
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::process;

use anagram_filter::cli::Args;
use anagram_filter::processor::{Processor, ProcessorConfig};
use anagram_filter::progress::{print_banner, print_error, print_header, print_info};

fn main() {
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        let mut source = e.source();
        while let Some(err) = source {
            print_error(&format!("  Caused by: {}", err));
            source = err.source();
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if !args.quiet {
        print_banner();
    }

    validate_args(&args)?;

    let config = ProcessorConfig::from_args(&args)?;

    if !args.quiet && args.verbose {
        print_config(&args, &config);
    }

    let processor = Processor::new(config);
    processor.process(&args.input)?;

    Ok(())
}

/// Validate command-line arguments
fn validate_args(args: &Args) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input path does not exist: {:?}", args.input);
    }

    if let Some(ref pattern) = args.pattern {
        anagram_filter::filter::validate_pattern(pattern)?;
    }

    args.parse_buffer_size()?;

    Ok(())
}

/// Print configuration summary
fn print_config(args: &Args, config: &ProcessorConfig) {
    print_header("Configuration");

    print_info(&format!("Input:        {:?}", args.input));
    print_info(&format!("Output dir:   {:?}", config.output_dir));
    print_info(&format!("Output file:  {}", config.output_name));

    if config.compare {
        print_info("Strategy:     compare (all three)");
    } else {
        print_info(&format!("Strategy:     {}", config.strategy.name()));
    }

    if let Some(ref pattern) = config.pattern {
        print_info(&format!("Pre-filter:   {}", pattern));
    }

    print_info(&format!("Recursive:    {}", config.recursive));
    print_info(&format!("Extensions:   {:?}", config.extensions));
    print_info(&format!("Sort output:  {}", config.sort_output));
    print_info(&format!(
        "Buffer size:  {} KB",
        config.buffer_size / 1024
    ));
}
