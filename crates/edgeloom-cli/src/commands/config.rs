//! Config command: inspect and edit the config file

use clap::{Args, Subcommand};

use crate::config::{config_file_path, Config};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print one value
    Get {
        /// Config key name
        key: String,
    },
    /// Change one value and save
    Set {
        /// Config key name
        key: String,
        /// New value (lists are comma-separated)
        value: String,
    },
    /// Reset one value to its default and save
    Unset {
        /// Config key name
        key: String,
    },
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(args: &ConfigArgs) -> anyhow::Result<()> {
    let path = config_file_path();
    tracing::debug!("Using config file {}", path.display());

    match &args.command {
        ConfigCommands::Get { key } => {
            let value = Config::load().get(key).ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown config key: {} (available: {})",
                    key,
                    Config::keys().join(", ")
                )
            })?;
            println!("{}", value);
        }
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load_for_update(&path)?;
            config.set(key, value)?;
            config.save_to(&path)?;
            println!("{} = {}", key, value);
        }
        ConfigCommands::Unset { key } => {
            let mut config = Config::load_for_update(&path)?;
            config.unset(key)?;
            config.save_to(&path)?;
            println!("{} = {}", key, config.get(key).unwrap_or_default());
        }
        ConfigCommands::Show => {
            print!("{}", toml::to_string_pretty(&Config::load())?);
        }
        ConfigCommands::Path => println!("{}", path.display()),
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Config::default().save_to(&path)?;
            println!("Wrote default config to {}", path.display());
        }
    }
    Ok(())
}
