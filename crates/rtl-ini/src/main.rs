//! rtl-ini: read and edit INI files from the command line.
//!
//! # Usage
//!
//! ```text
//! rtl-ini [OPTIONS] <FILE> <COMMAND>
//!
//! Commands:
//!   get <SECTION> <KEY> [--default V]   Print a value
//!   set <SECTION> <KEY> <VALUE>         Set a value
//!   delete <SECTION> <KEY>              Remove a key
//!   erase <SECTION>                     Remove a section
//!   sections | keys <S> | values <S>    List names or raw lines
//!   dump                                Print the whole file
//!
//! Options:
//!   --case-sensitive      Compare section/key names exactly
//!   --case-insensitive    Ignore case even if the config file says otherwise
//!   --config <PATH>       Tool configuration file
//!   --format <FORMAT>     text | json [default: text]
//! ```
//!
//! # Environment variable overrides
//!
//! CLI args take precedence over environment variables, which take
//! precedence over the configuration file.
//!
//! | Variable                 | Description                          |
//! |--------------------------|--------------------------------------|
//! | `RTL_INI_CONFIG`         | Path of the tool configuration file  |
//! | `RTL_INI_CASE_SENSITIVE` | `true` to compare names exactly      |
//! | `RTL_INI_FORMAT`         | Default output format                |
//! | `RUST_LOG`               | `tracing` filter, overrides `[log]`  |
//!
//! Logs go to stderr so `--format json` output on stdout stays parseable.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rtl_core::IniFile;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use rtl_ini::commands::{self, Command, OutputFormat};
use rtl_ini::config::{resolve_config, ToolConfig};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Read and edit INI files.
#[derive(Debug, Parser)]
#[command(name = "rtl-ini", about = "Read and edit INI files", version)]
struct Cli {
    /// Compare section and key names exactly.
    #[arg(long, env = "RTL_INI_CASE_SENSITIVE")]
    case_sensitive: bool,

    /// Ignore case in section and key names, overriding the config file.
    #[arg(long)]
    case_insensitive: bool,

    /// Path of the tool configuration file.
    #[arg(long, env = "RTL_INI_CONFIG")]
    config: Option<PathBuf>,

    /// Output format for listings and values.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "RTL_INI_FORMAT")]
    format: OutputFormat,

    /// INI file to operate on.  A missing file reads as empty and is created
    /// by the first mutating command.
    file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    /// Decides case sensitivity: an explicit flag wins, then the config file.
    fn case_sensitivity(&self, config: &ToolConfig) -> bool {
        if self.case_insensitive {
            false
        } else if self.case_sensitive {
            true
        } else {
            config.store.case_sensitive
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = resolve_config(cli.config.as_deref())
        .context("failed to load rtl-ini configuration")?;

    // ── Logging setup ─────────────────────────────────────────────────────────
    //
    // `RUST_LOG` wins; otherwise the level from the config file applies.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log.level)),
        )
        .init();

    let case_sensitive = cli.case_sensitivity(&config);
    debug!(
        "opening {} (case_sensitive={case_sensitive})",
        cli.file.display()
    );

    let ini = IniFile::try_open(&cli.file, case_sensitive)
        .with_context(|| format!("failed to open {}", cli.file.display()))?;

    let output = commands::run(ini, &cli.command, cli.format)
        .with_context(|| format!("command failed on {}", cli.file.display()))?;

    if cli.command.is_mutating() {
        info!("updated {}", cli.file.display());
    }
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_get_with_default() {
        // Arrange / Act
        let cli = Cli::parse_from([
            "rtl-ini", "app.ini", "get", "server", "port", "--default", "80",
        ]);

        // Assert
        assert_eq!(cli.file, PathBuf::from("app.ini"));
        assert_eq!(
            cli.command,
            Command::Get {
                section: "server".to_string(),
                key: "port".to_string(),
                default: "80".to_string(),
            }
        );
    }

    #[test]
    fn test_cli_get_default_is_empty() {
        let cli = Cli::parse_from(["rtl-ini", "app.ini", "get", "s", "k"]);

        assert!(matches!(cli.command, Command::Get { ref default, .. } if default.is_empty()));
    }

    #[test]
    fn test_cli_parses_set() {
        let cli = Cli::parse_from(["rtl-ini", "app.ini", "set", "db", "timeout", "30"]);

        assert!(cli.command.is_mutating());
    }

    #[test]
    fn test_cli_format_override() {
        let cli = Cli::parse_from(["rtl-ini", "--format", "json", "app.ini", "sections"]);

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.command, Command::Sections);
    }

    #[test]
    fn test_cli_config_override() {
        let cli = Cli::parse_from(["rtl-ini", "--config", "/tmp/x.toml", "app.ini", "dump"]);

        assert_eq!(cli.config, Some(PathBuf::from("/tmp/x.toml")));
    }

    #[test]
    fn test_case_sensitivity_falls_back_to_config() {
        // Arrange
        let cli = Cli::parse_from(["rtl-ini", "app.ini", "dump"]);
        let mut config = ToolConfig::default();
        config.store.case_sensitive = true;

        // Act / Assert
        assert!(cli.case_sensitivity(&config));
    }

    #[test]
    fn test_case_flags_override_config() {
        let mut config = ToolConfig::default();
        config.store.case_sensitive = true;

        let insensitive = Cli::parse_from(["rtl-ini", "--case-insensitive", "app.ini", "dump"]);
        assert!(!insensitive.case_sensitivity(&config));

        let sensitive = Cli::parse_from(["rtl-ini", "--case-sensitive", "app.ini", "dump"]);
        assert!(sensitive.case_sensitivity(&ToolConfig::default()));
    }

    #[test]
    fn test_cli_requires_a_command() {
        let result = Cli::try_parse_from(["rtl-ini", "app.ini"]);

        assert!(result.is_err());
    }
}
