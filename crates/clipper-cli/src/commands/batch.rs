//! Batch conversion command for multiple statement files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, error, warn};

use clipper_core::models::config::LedgerConfig;
use clipper_core::TransactionHistory;

use super::{convert_bytes, load_config, render, ConversionArgs, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern matching statement PDFs
    #[arg(required = true)]
    input: String,

    /// Output directory (default: next to each input)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,

    #[command(flatten)]
    conversion: ConversionArgs,
}

/// Result of converting a single file.
struct ConvertResult {
    path: PathBuf,
    history: Option<TransactionHistory>,
    error: Option<String>,
    processing_time_ms: u64,
}

/// One line of `summary.csv`.
#[derive(Serialize)]
struct SummaryRow<'a> {
    filename: &'a str,
    status: &'a str,
    transactions: usize,
    pages: u32,
    processing_time_ms: u64,
    error: &'a str,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    args.conversion.apply_to(&mut config)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    eprintln!(
        "{} Found {} files to convert",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let result = fs::read(&path)
            .map_err(anyhow::Error::from)
            .and_then(|data| convert_bytes(&data, &config))
            .and_then(|history| {
                write_output(&path, &history, &args, &config)?;
                Ok(history)
            });
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match result {
            Ok(history) => {
                results.push(ConvertResult {
                    path,
                    history: Some(history),
                    error: None,
                    processing_time_ms,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to convert {}: {}", path.display(), error_msg);
                    results.push(ConvertResult {
                        path,
                        history: None,
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    pb.abandon();
                    error!("Failed to convert {}: {}", path.display(), error_msg);
                    anyhow::bail!("Conversion of {} failed: {}", path.display(), error_msg);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        eprintln!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    eprintln!();
    eprintln!(
        "{} Converted {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    eprintln!(
        "   {} successful, {} failed",
        style(results.len() - failed.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        eprintln!();
        eprintln!("{}", style("Failed files:").red());
        for result in &failed {
            eprintln!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn output_path(input: &Path, output_dir: Option<&Path>, format: OutputFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("statement");
    let file_name = format!("{}.{}", stem, format.extension());

    match output_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}

fn write_output(
    input: &Path,
    history: &TransactionHistory,
    args: &BatchArgs,
    config: &LedgerConfig,
) -> anyhow::Result<()> {
    let path = output_path(input, args.output_dir.as_deref(), args.conversion.format);
    let content = render(history, args.conversion.format, config)?;
    fs::write(&path, content)?;
    debug!("Wrote output to {}", path.display());
    Ok(())
}

fn write_summary(path: &Path, results: &[ConvertResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        let row = match &result.history {
            Some(history) => SummaryRow {
                filename,
                status: "success",
                transactions: history.len(),
                pages: history.pages,
                processing_time_ms: result.processing_time_ms,
                error: "",
            },
            None => SummaryRow {
                filename,
                status: "error",
                transactions: 0,
                pages: 0,
                processing_time_ms: result.processing_time_ms,
                error: result.error.as_deref().unwrap_or(""),
            },
        };
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
