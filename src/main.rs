//! # line-history CLI
//!
//! Command-line interface for the line-history library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use line_history::HistoryError;
use line_history::cli::Args;
use line_history::config::ParserConfig;
use line_history::core::{History, OutputConfig};
use line_history::format::{OutputFormat, write_to_format};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(args: &Args) -> Result<(), HistoryError> {
    let total_start = Instant::now();
    let filter_config = args.filter_config()?;
    let output_path = args.output_path();
    let format: OutputFormat = args.format.into();

    println!("📦 line-history v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    if !args.random {
        println!("💾 Output:  {}", output_path);
        println!("📄 Format:  {}", format);
    }
    if let Some(ref speaker) = args.speaker {
        println!("👤 Speaker: {}", speaker);
    }
    if let Some(ref after) = args.after {
        println!("📅 After:   {}", after);
    }
    if let Some(ref before) = args.before {
        println!("📅 Before:  {}", before);
    }
    println!();

    println!("⏳ Parsing...");
    let parse_start = Instant::now();
    let config = ParserConfig::new().with_header_layout(args.layout.into());
    let history = History::from_file_with_config(&args.input, config)?.with_filter(&filter_config);
    let total_count = history.len();
    println!(
        "   Found {} entries ({:.2}s)",
        total_count,
        parse_start.elapsed().as_secs_f64()
    );

    if args.random {
        println!();
        match history.random_entry(&mut rand::thread_rng()) {
            Some(entry) => println!(
                "🎲 {} {}: {}",
                entry.timestamp.format("%Y-%m-%d %H:%M"),
                entry.speaker,
                entry.message
            ),
            None => println!("🎲 No matching entries"),
        }
        return Ok(());
    }

    let entries = history.collect();
    if filter_config.is_active() {
        println!("🔍 {} entries match the filters", entries.len());
    }

    println!("💾 Writing {}...", format);
    let write_start = Instant::now();
    write_to_format(&entries, &output_path, format, &OutputConfig::new())?;
    println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());

    println!();
    println!("✅ Done! Output saved to {}", output_path);

    println!();
    println!("📊 Summary:");
    println!("   Parsed:    {} entries", total_count);
    println!("   Written:   {} entries", entries.len());
    println!("   Total time: {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}
