//! CLI for auditing the trustgate policy.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use trustgate_core::config::{self, TrustgateConfig};

use commands::{
    run_check, run_completions, run_extensions_gate, run_extensions_list, run_extensions_show,
    run_man,
};

/// Top-level CLI for trustgate.
#[derive(Debug, Parser)]
#[command(name = "trustgate")]
#[command(about = "Trust policy for BrowserOS downloads and builtin extensions", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/trustgate/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Evaluate a download URL chain (redirect order; the last URL is the effective one).
    Check {
        /// URLs of the download's redirect chain.
        #[arg(required = true, value_name = "URL")]
        urls: Vec<String>,
        /// Override the profile's Safe Browsing preference from config.
        #[arg(long, value_name = "STATE")]
        safe_browsing: Option<Toggle>,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Query the builtin extension registry.
    Extensions {
        #[command(subcommand)]
        command: ExtensionsCommand,
    },

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },

    /// Print the man page to stdout.
    Man,
}

#[derive(Debug, Subcommand)]
pub enum ExtensionsCommand {
    /// List builtin extension IDs with their display names.
    List,

    /// Show how the registry treats one extension ID.
    Show {
        /// Extension identifier.
        id: String,
    },

    /// Filter force-load requests through the builtin allowlist.
    ///
    /// Without IDs, reads force_load_extensions from config. A missing config
    /// file is treated as empty and is not created.
    Gate {
        /// IDs to check (default: force_load_extensions from config).
        ids: Vec<String>,
    },
}

/// On/off switch for boolean overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    pub fn enabled(self) -> bool {
        matches!(self, Toggle::On)
    }
}

/// Config for read-only queries: never writes a default file.
fn load_config_read_only(path: Option<&PathBuf>) -> Result<TrustgateConfig> {
    let cfg = match path {
        Some(p) => config::load_or_default_at(p)?,
        None => config::load_or_default()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

fn load_config(path: Option<&PathBuf>) -> Result<TrustgateConfig> {
    let cfg = match path {
        Some(p) => config::load_from(p)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Check {
                urls,
                safe_browsing,
                json,
            } => {
                let cfg = load_config(cli.config.as_ref())?;
                let mut profile = cfg.profile();
                if let Some(toggle) = safe_browsing {
                    profile.safe_browsing_enabled = toggle.enabled();
                }
                run_check(&urls, profile, json)?;
            }
            CliCommand::Extensions { command } => match command {
                ExtensionsCommand::List => run_extensions_list(),
                ExtensionsCommand::Show { id } => run_extensions_show(&id),
                ExtensionsCommand::Gate { ids } => {
                    let requested = if ids.is_empty() {
                        load_config_read_only(cli.config.as_ref())?.force_load_extensions
                    } else {
                        ids
                    };
                    run_extensions_gate(&requested);
                }
            },
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
