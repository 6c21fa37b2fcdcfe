//! Config command - inspect and edit the jdx settings file.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;
use tracing::debug;

use jdx_core::{ConfigKey, JdxConfig};

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective configuration as JSON
    Show,

    /// Write a configuration file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print one setting, or every setting when no key is given
    Get {
        /// Setting such as "extraction.vnd_per_usd" or "batch.text_columns"
        key: Option<ConfigKey>,
    },

    /// Change one setting and save the file
    Set {
        /// Setting to change
        key: ConfigKey,
        /// New value; lists are comma-separated
        value: String,
    },

    /// Print the configuration file location
    Path,
}

pub async fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let path = config_path.map_or_else(default_config_path, PathBuf::from);

    match args.command {
        ConfigCommand::Show => {
            let config = load_or_default(&path)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigCommand::Init { force } => init_config(&path, force)?,
        ConfigCommand::Get { key: Some(key) } => {
            println!("{}", load_or_default(&path)?.value_of(key));
        }
        ConfigCommand::Get { key: None } => {
            let config = load_or_default(&path)?;
            for key in ConfigKey::ALL {
                println!("{} = {}", key, config.value_of(key));
            }
        }
        ConfigCommand::Set { key, value } => set_config(&path, key, &value)?,
        ConfigCommand::Path => {
            let status = if path.exists() {
                style("exists").green()
            } else {
                style("not created, run 'jdx config init'").yellow()
            };
            println!("{} ({})", path.display(), status);
        }
    }

    Ok(())
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("jdx")
        .join("config.json")
}

/// Load the config named on the command line, else the default file, else defaults.
///
/// A file named with `--config` must exist; the default file is optional.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<JdxConfig> {
    match config_path {
        Some(path) => Ok(JdxConfig::from_file(Path::new(path))?),
        None => load_or_default(&default_config_path()),
    }
}

fn load_or_default(path: &Path) -> anyhow::Result<JdxConfig> {
    if path.exists() {
        debug!("Loading config from {}", path.display());
        Ok(JdxConfig::from_file(path)?)
    } else {
        debug!("No config at {}, using defaults", path.display());
        Ok(JdxConfig::default())
    }
}

fn write_config(path: &Path, config: &JdxConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    config.save(path)?;
    Ok(())
}

fn init_config(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    write_config(path, &JdxConfig::default())?;
    println!("{} Created {}", style("✓").green(), path.display());

    Ok(())
}

fn set_config(path: &Path, key: ConfigKey, value: &str) -> anyhow::Result<()> {
    let mut config = load_or_default(path)?;
    config.set_value(key, value)?;
    config.validate()?;
    write_config(path, &config)?;

    println!(
        "{} {} = {}",
        style("✓").green(),
        key,
        config.value_of(key)
    );

    Ok(())
}
