//! `rtl-ini` subcommands.
//!
//! Each [`Command`] runs against an already-opened [`IniFile`] and returns
//! the text to print.  Read-only commands leave the file alone; mutating
//! commands close the store, so the change is on disk (or the flush error is
//! returned) by the time [`run`] returns.

use clap::{Subcommand, ValueEnum};
use rtl_core::inifile::{is_valid_ident, is_valid_section_name, is_valid_value};
use rtl_core::{IniBackend, IniError, IniFile};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Errors produced while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The store could not be written back.
    #[error(transparent)]
    Store(#[from] IniError),

    /// The section name cannot be written as a `[name]` header.
    #[error("invalid section name {0:?}: names must be non-empty and fit on one line")]
    InvalidSection(String),

    /// The key cannot be represented as an `ident=value` line.
    #[error(
        "invalid key {0:?}: keys must be non-empty, must not contain '=' or line breaks \
         and must not start with ';', '[' or whitespace"
    )]
    InvalidKey(String),

    /// The value spans more than one line.
    #[error("invalid value for key {0:?}: values must not contain line breaks")]
    InvalidValue(String),

    /// JSON rendering failed.
    #[error("failed to render JSON output: {0}")]
    Render(#[from] serde_json::Error),
}

/// Output rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one item per line.
    #[default]
    Text,
    /// JSON on a single line.
    Json,
}

/// What to do with the INI file.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the value of a key.
    Get {
        section: String,
        key: String,
        /// Value printed when the key is absent.
        #[arg(long, default_value = "")]
        default: String,
    },
    /// Set a key, creating the section if needed.
    Set {
        section: String,
        key: String,
        value: String,
    },
    /// Remove a key.
    Delete { section: String, key: String },
    /// Remove a section and all of its keys.
    Erase { section: String },
    /// List section names.
    Sections,
    /// List the key names of a section.
    Keys { section: String },
    /// List the raw `key=value` lines of a section.
    Values { section: String },
    /// Print the whole file as it would be written.
    Dump,
}

impl Command {
    /// Returns `true` for commands that change the file.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::Set { .. } | Command::Delete { .. } | Command::Erase { .. }
        )
    }
}

// ── JSON shapes ───────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct SectionDump {
    name: String,
    entries: Vec<EntryDump>,
}

#[derive(Debug, Serialize)]
struct EntryDump {
    key: String,
    value: String,
}

// ── Execution ─────────────────────────────────────────────────────────────────

/// Runs `command` against `ini` and returns the rendered output (empty for
/// mutating commands).
///
/// # Errors
///
/// Returns [`CommandError::Store`] if a mutating command cannot flush the
/// file, and [`CommandError::InvalidSection`], [`CommandError::InvalidKey`]
/// or [`CommandError::InvalidValue`] if `set` is given something that would
/// not read back.
pub fn run<B: IniBackend>(
    mut ini: IniFile<B>,
    command: &Command,
    format: OutputFormat,
) -> Result<String, CommandError> {
    debug!("running {command:?} on {}", ini.path().display());

    let output = match command {
        Command::Get {
            section,
            key,
            default,
        } => render_value(&ini.read_string(section, key, default), format)?,
        Command::Set {
            section,
            key,
            value,
        } => {
            if !is_valid_section_name(section) {
                return Err(CommandError::InvalidSection(section.clone()));
            }
            if !is_valid_ident(key) {
                return Err(CommandError::InvalidKey(key.clone()));
            }
            if !is_valid_value(value) {
                return Err(CommandError::InvalidValue(key.clone()));
            }
            ini.write_string(section, key, value);
            String::new()
        }
        Command::Delete { section, key } => {
            ini.delete_ident(section, key);
            String::new()
        }
        Command::Erase { section } => {
            ini.erase_section(section);
            String::new()
        }
        Command::Sections => render_list(&ini.read_sections(), format)?,
        Command::Keys { section } => render_list(&ini.read_section_idents(section), format)?,
        Command::Values { section } => render_list(&ini.read_section_values(section), format)?,
        Command::Dump => match format {
            OutputFormat::Text => ini.to_ini_string(),
            OutputFormat::Json => serde_json::to_string(&dump(&ini))?,
        },
    };

    ini.close()?;
    Ok(output)
}

fn render_value(value: &str, format: OutputFormat) -> Result<String, CommandError> {
    Ok(match format {
        OutputFormat::Text => value.to_string(),
        OutputFormat::Json => serde_json::to_string(value)?,
    })
}

fn render_list(items: &[String], format: OutputFormat) -> Result<String, CommandError> {
    Ok(match format {
        OutputFormat::Text => items.join("\n"),
        OutputFormat::Json => serde_json::to_string(items)?,
    })
}

fn dump<B: IniBackend>(ini: &IniFile<B>) -> Vec<SectionDump> {
    ini.read_sections()
        .into_iter()
        .map(|name| {
            let entries = ini
                .read_section_values(&name)
                .iter()
                .filter_map(|line| line.split_once('='))
                .map(|(key, value)| EntryDump {
                    key: key.to_string(),
                    value: value.to_string(),
                })
                .collect();
            SectionDump { name, entries }
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
