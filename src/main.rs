//! tidyfile - organize directories with declarative batch file operations.
//!
//! Usage:
//!   tidy list [PATH]           List directory entries
//!   tidy organize [PATH]       Plan (or apply) sorting files into subfolders
//!   tidy duplicates [PATH]     Find same-size duplicate candidates
//!   tidy largest [PATH]        Rank the largest files
//!   tidy batch FILE            Run an operation list from a JSON file
//!   tidy --help                Show help

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use tidyfile_classify::{
    DEFAULT_LARGEST_COUNT, DuplicateOptions, find_duplicates_with, group_by_category,
    group_by_extension, group_by_month, largest_files, organize_operations,
};
use tidyfile_core::{BatchReport, Operation, operations_from_json};
use tidyfile_ops::run_batch;
use tidyfile_scan::{ScanOptions, list_directory, scan};

#[derive(Parser)]
#[command(
    name = "tidy",
    version,
    about = "Organize directories with declarative batch file operations",
    long_about = "tidyfile scans a directory, buckets what it finds (by extension, \
                  month, or category), and turns the buckets into a batch of \
                  move/create operations that always runs to completion and \
                  reports per-operation outcomes."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List directory entries
    List {
        /// Path to list
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Recurse into subdirectories
        #[arg(short, long)]
        recursive: bool,

        /// Skip hidden entries (names starting with .)
        #[arg(long)]
        skip_hidden: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Plan (or apply) sorting a directory's files into subfolders
    Organize {
        /// Directory to organize
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Bucketing rule
        #[arg(short, long, default_value = "extension")]
        by: GroupBy,

        /// Execute the plan instead of previewing it
        #[arg(long)]
        apply: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Find files that share an exact byte size
    Duplicates {
        /// Path to scan
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Minimum file size to consider (e.g., "1KB", "1MB")
        #[arg(short, long, default_value = "1B")]
        min_size: String,

        /// Maximum number of duplicate groups to show
        #[arg(short = 'n', long, default_value = "20")]
        top: usize,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Rank the largest files
    Largest {
        /// Path to scan
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Number of files to show
        #[arg(short = 'n', long, default_value_t = DEFAULT_LARGEST_COUNT)]
        top: usize,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Run an operation list from a JSON file ("-" reads stdin)
    Batch {
        /// File containing a JSON array of operations
        file: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum GroupBy {
    #[default]
    Extension,
    Month,
    Category,
}

impl GroupBy {
    fn label(self) -> &'static str {
        match self {
            Self::Extension => "extension",
            Self::Month => "month",
            Self::Category => "category",
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::List {
            path,
            recursive,
            skip_hidden,
            format,
        } => {
            run_list(&path, recursive, skip_hidden, format)?;
        }
        Command::Organize {
            path,
            by,
            apply,
            format,
        } => {
            run_organize(&path, by, apply, format)?;
        }
        Command::Duplicates {
            path,
            min_size,
            top,
            format,
        } => {
            run_duplicates(&path, &min_size, top, format)?;
        }
        Command::Largest { path, top, format } => {
            run_largest(&path, top, format)?;
        }
        Command::Batch { file, format } => {
            run_batch_file(&file, format)?;
        }
    }

    Ok(())
}

/// Route log lines to stderr so structured output on stdout stays clean.
fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).without_time())
        .with(EnvFilter::new(filter))
        .init();
}

/// List a directory.
fn run_list(
    path: &PathBuf,
    recursive: bool,
    skip_hidden: bool,
    format: OutputFormat,
) -> Result<()> {
    let path = path.canonicalize().context("Invalid path")?;

    let options = ScanOptions::builder()
        .include_hidden(!skip_hidden)
        .max_depth(if recursive { None } else { Some(1) })
        .build()
        .unwrap();
    let entries = scan(&path, &options).context("Scan failed")?;

    match format {
        OutputFormat::Text => {
            println!();
            println!("{}", "─".repeat(70));
            println!(" {} - {} entries", path.display(), entries.len());
            println!("{}", "─".repeat(70));
            println!();

            for entry in &entries {
                let relative = entry.path.strip_prefix(&path).unwrap_or(&entry.path);
                let marker = if entry.is_dir { "/" } else { "" };
                let size = if entry.is_dir {
                    "-".to_string()
                } else {
                    format_size(entry.size)
                };
                println!(
                    " {:<44} {:>10}  {}",
                    truncate(&format!("{}{}", relative.display(), marker), 44),
                    size,
                    entry.modified_at.format("%Y-%m-%d %H:%M")
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }

    Ok(())
}

/// Plan, and optionally apply, an organization of a directory's files.
fn run_organize(path: &PathBuf, by: GroupBy, apply: bool, format: OutputFormat) -> Result<()> {
    let path = path.canonicalize().context("Invalid path")?;

    // Organize the direct children only; nested trees stay untouched
    let entries = list_directory(&path).context("Scan failed")?;

    let buckets = match by {
        GroupBy::Extension => group_by_extension(&entries),
        GroupBy::Month => group_by_month(&entries),
        GroupBy::Category => group_by_category(&entries),
    };
    let plan = organize_operations(&path, &buckets);

    if !apply {
        match format {
            OutputFormat::Text => {
                println!();
                println!("{}", "─".repeat(70));
                println!(" Organization Plan (by {})", by.label());
                println!("{}", "─".repeat(70));
                println!();

                if plan.is_empty() {
                    println!(" Nothing to organize.");
                } else {
                    for op in &plan {
                        println!(" {:<14} {}", op.kind().to_string(), describe(op));
                    }
                    println!();
                    println!(" {} operation(s). Re-run with --apply to execute.", plan.len());
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            }
        }
        return Ok(());
    }

    let report = run_batch(plan);
    print_report(&report, format)?;

    if !report.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

/// Find same-size duplicate candidates.
fn run_duplicates(path: &PathBuf, min_size: &str, top: usize, format: OutputFormat) -> Result<()> {
    let path = path.canonicalize().context("Invalid path")?;
    let min_bytes = parse_size(min_size)?;

    eprintln!("Scanning {}...", path.display());
    let entries = scan(&path, &ScanOptions::recursive()).context("Scan failed")?;

    let options = DuplicateOptions::builder()
        .min_size(min_bytes)
        .max_groups(top)
        .build()
        .unwrap();
    let groups = find_duplicates_with(&entries, &options);

    match format {
        OutputFormat::Text => {
            println!();
            println!("{}", "─".repeat(70));
            println!(" Duplicate Candidates (by exact size)");
            println!("{}", "─".repeat(70));
            println!();

            if groups.is_empty() {
                println!(" No duplicate candidates found.");
            } else {
                let wasted: u64 = groups.iter().map(|g| g.wasted_bytes).sum();
                println!(
                    " Found {} group(s), up to {} reclaimable",
                    groups.len(),
                    format_size(wasted)
                );
                println!();

                for (i, group) in groups.iter().enumerate() {
                    println!(
                        " Group {} ({} files, {} each, {} wasted)",
                        i + 1,
                        group.count(),
                        format_size(group.size),
                        format_size(group.wasted_bytes)
                    );
                    for entry in &group.entries {
                        println!("   {}", entry.path.display());
                    }
                    println!();
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&groups)?);
        }
    }

    Ok(())
}

/// Rank the largest files.
fn run_largest(path: &PathBuf, top: usize, format: OutputFormat) -> Result<()> {
    let path = path.canonicalize().context("Invalid path")?;

    eprintln!("Scanning {}...", path.display());
    let entries = scan(&path, &ScanOptions::recursive()).context("Scan failed")?;
    let ranked = largest_files(&entries, top);

    match format {
        OutputFormat::Text => {
            println!();
            println!("{}", "─".repeat(70));
            println!(" Largest Files");
            println!("{}", "─".repeat(70));
            println!();

            if ranked.is_empty() {
                println!(" No files found.");
            } else {
                for entry in &ranked {
                    println!(" {:>10}  {}", format_size(entry.size), entry.path.display());
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&ranked)?);
        }
    }

    Ok(())
}

/// Run an operation list from a JSON file or stdin.
fn run_batch_file(file: &PathBuf, format: OutputFormat) -> Result<()> {
    let input = if file.as_os_str() == "-" {
        std::io::read_to_string(std::io::stdin()).context("Failed to read stdin")?
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?
    };

    let operations = operations_from_json(&input)?;
    let report = run_batch(operations);
    print_report(&report, format)?;

    if !report.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

/// Print a batch report.
fn print_report(report: &BatchReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!();
            println!("{}", "─".repeat(70));
            println!(
                " Batch Report - {} total, {} succeeded, {} failed",
                report.total, report.successful, report.failed
            );
            println!("{}", "─".repeat(70));
            println!();

            for result in &report.results {
                let status = if result.success { "[ok]  " } else { "[fail]" };
                println!(
                    " {} {:<14} {}",
                    status,
                    result.operation.kind().to_string(),
                    describe(&result.operation)
                );
                if let Some(error) = &result.error {
                    println!("        {error}");
                }
            }

            println!();
            println!(" {}", report.summary());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
    }

    Ok(())
}

/// One-line path description of an operation.
fn describe(operation: &Operation) -> String {
    match operation {
        Operation::Move {
            source,
            destination,
        }
        | Operation::Copy {
            source,
            destination,
        } => format!("{} -> {}", source.display(), destination.display()),
        Operation::Rename { old_path, new_path } => {
            format!("{} -> {}", old_path.display(), new_path.display())
        }
        Operation::Delete { path }
        | Operation::CreateFolder { path }
        | Operation::CreateFile { path, .. } => path.display().to_string(),
    }
}

/// Format size in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}

/// Truncate a string to at most `max_len` characters.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 1).collect();
        format!("{kept}…")
    }
}

/// Parse a size string (e.g., "1KB", "10MB", "1GB").
fn parse_size(s: &str) -> Result<u64> {
    let s = s.trim().to_uppercase();

    let (num, multiplier) = if s.ends_with("GB") || s.ends_with("G") {
        let num: f64 = s.trim_end_matches(|c: char| !c.is_ascii_digit() && c != '.').parse()?;
        (num, 1024 * 1024 * 1024)
    } else if s.ends_with("MB") || s.ends_with("M") {
        let num: f64 = s.trim_end_matches(|c: char| !c.is_ascii_digit() && c != '.').parse()?;
        (num, 1024 * 1024)
    } else if s.ends_with("KB") || s.ends_with("K") {
        let num: f64 = s.trim_end_matches(|c: char| !c.is_ascii_digit() && c != '.').parse()?;
        (num, 1024)
    } else if s.ends_with('B') {
        let num: f64 = s.trim_end_matches(|c: char| !c.is_ascii_digit() && c != '.').parse()?;
        (num, 1)
    } else {
        let num: f64 = s.parse()?;
        (num, 1)
    };

    Ok((num * multiplier as f64) as u64)
}
