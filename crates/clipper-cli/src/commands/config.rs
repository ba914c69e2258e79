//! Config command - inspect and edit the conversion settings file.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;

use clipper_core::models::config::LedgerConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Write a configuration file with default settings
    Init {
        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },

    /// Print one setting
    Get {
        /// Dotted key (e.g., "layout.row_boundary")
        key: String,
    },

    /// Change one setting
    Set {
        /// Dotted key (e.g., "filters.kinds")
        key: String,
        /// New value as JSON; bare words are taken as strings
        value: String,
    },

    /// Print the configuration file location
    Path,
}

pub fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let path = config_path
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);

    match args.command {
        ConfigCommand::Show => {
            let config = load_or_default(&path)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigCommand::Init { force } => init(&path, force)?,
        ConfigCommand::Get { key } => {
            let json = serde_json::to_value(load_or_default(&path)?)?;
            let value = lookup(&json, &key)
                .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))?;
            println!("{}", serde_json::to_string_pretty(value)?);
        }
        ConfigCommand::Set { key, value } => {
            let value = parse_value(&value);
            let mut json = serde_json::to_value(load_or_default(&path)?)?;
            assign(&mut json, &key, value.clone())?;

            let config: LedgerConfig = serde_json::from_value(json)
                .map_err(|e| anyhow::anyhow!("Invalid value for {}: {}", key, e))?;
            save(&config, &path)?;

            println!("{} Set {} = {}", style("✓").green(), key, value);
        }
        ConfigCommand::Path => {
            println!("{}", path.display());
            if !path.exists() {
                eprintln!(
                    "{} Not created yet; run 'clippercsv config init'",
                    style("ℹ").blue()
                );
            }
        }
    }

    Ok(())
}

/// `<config dir>/clippercsv/config.json`.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("clippercsv")
        .join("config.json")
}

fn load_or_default(path: &Path) -> anyhow::Result<LedgerConfig> {
    if path.exists() {
        Ok(LedgerConfig::from_file(path)?)
    } else {
        Ok(LedgerConfig::default())
    }
}

fn save(config: &LedgerConfig, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    config.save(path)?;
    Ok(())
}

fn init(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    save(&LedgerConfig::default(), path)?;
    println!(
        "{} Created configuration file at {}",
        style("✓").green(),
        path.display()
    );
    Ok(())
}

/// JSON when it parses, otherwise the raw string.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn lookup<'a>(json: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(json, |current, part| current.get(part))
}

fn assign(json: &mut Value, key: &str, value: Value) -> anyhow::Result<()> {
    let (parent_key, field) = match key.rsplit_once('.') {
        Some((parent, field)) => (Some(parent), field),
        None => (None, key),
    };

    let mut parent = json;
    if let Some(parent_key) = parent_key {
        for part in parent_key.split('.') {
            parent = parent
                .get_mut(part)
                .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))?;
        }
    }

    match parent.as_object_mut() {
        Some(object) if object.contains_key(field) => {
            object.insert(field.to_string(), value);
            Ok(())
        }
        _ => anyhow::bail!("Configuration key not found: {}", key),
    }
}
