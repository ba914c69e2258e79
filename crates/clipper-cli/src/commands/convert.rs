//! Convert command - turn one statement into a transaction ledger.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::info;

use super::{convert_bytes, load_config, render, ConversionArgs};

/// Arguments for the convert command.
#[derive(Args)]
pub struct ConvertArgs {
    /// Statement PDF (default: stdin)
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    conversion: ConversionArgs,
}

pub fn run(args: ConvertArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    args.conversion.apply_to(&mut config)?;

    let data = match &args.input {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            info!("Converting file: {}", path.display());
            fs::read(path)?
        }
        None => {
            info!("Converting statement from stdin");
            let mut data = Vec::new();
            io::stdin().read_to_end(&mut data)?;
            data
        }
    };

    let history = convert_bytes(&data, &config)
        .map_err(|e| anyhow::anyhow!("error parsing pdf: {}", e))?;
    let output = render(&history, args.conversion.format, &config)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} {} transactions written to {}",
            style("✓").green(),
            history.len(),
            output_path.display()
        );
    } else {
        io::stdout().write_all(output.as_bytes())?;
    }

    info!(
        "Converted {} page(s) in {:?}",
        history.pages,
        start.elapsed()
    );

    Ok(())
}
