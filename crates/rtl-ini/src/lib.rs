//! rtl-ini library crate.
//!
//! The `rtl-ini` binary is a thin shell around two modules:
//!
//! ```text
//! rtl-ini <FILE> <COMMAND>
//!    │
//!    ├── config    Optional TOML settings (case sensitivity, log level)
//!    └── commands  Runs one command against an rtl_core::IniFile and
//!                  renders the result as text or JSON
//! ```
//!
//! Keeping the logic here rather than in `main.rs` lets the tests drive the
//! commands against an in-memory [`rtl_core::MemoryBackend`].

/// Subcommand definitions and execution.
pub mod commands;

/// Tool configuration file.
pub mod config;
