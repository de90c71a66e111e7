//! # rtl-core
//!
//! Runtime support library: an in-memory INI file store plus a set of small,
//! stateless helpers for conversions, file paths, network addresses, bit
//! arithmetic, random numbers and date/time formatting.
//!
//! It has no async runtime and no global state.  Everything that needs
//! randomness takes a caller-supplied generator.
//!
//! # Architecture overview
//!
//! - **`inifile`** – The structured text store.  [`IniFile`] loads a
//!   bracketed-section text file into memory, offers typed key/value access
//!   per section, tracks whether anything changed and writes the file back on
//!   [`IniFile::close`].  Storage access goes through the [`IniBackend`]
//!   trait so tests can run without touching the disk.
//!
//! - **`convert`** – bool/int/float ⇄ string conversions, little-endian byte
//!   encoding and serde-driven struct encoding.
//!
//! - **`fs`**, **`net`**, **`bits`**, **`random`**, **`time`** – single-purpose
//!   helpers with no invariants beyond the documented conversion.
//!
//! ```rust
//! use rtl_core::inifile::{IniFile, MemoryBackend};
//!
//! let backend = MemoryBackend::new();
//! backend.insert("app.ini", "[server]\nhost=localhost\nport=8080\n");
//!
//! let ini = IniFile::open_with(backend, "app.ini", false);
//! assert_eq!(ini.read_string("server", "host", ""), "localhost");
//! assert_eq!(ini.read_int("server", "port", 0), 8080);
//! assert!(!ini.section_exists("client"));
//! ```

pub mod bits;
pub mod convert;
pub mod fs;
pub mod inifile;
pub mod net;
pub mod random;
pub mod time;

// Re-export the most-used types at the crate root so callers can write
// `rtl_core::IniFile` instead of `rtl_core::inifile::store::IniFile`.
pub use convert::ConvertError;
pub use inifile::{FileBackend, IniBackend, IniError, IniFile, MemoryBackend};
pub use net::AddrError;

/// Delphi 2007 RTL version, which this helper set follows.
pub const RTL_VERSION: f64 = 18.00;
