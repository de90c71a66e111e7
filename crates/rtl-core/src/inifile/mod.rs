//! In-memory INI file store.
//!
//! [`IniFile`] loads an entire INI file into memory.  Every query and
//! mutation works on that memory image; the image is written back to the
//! backing file on [`IniFile::flush`] or [`IniFile::close`].
//!
//! # On-disk format
//!
//! ```text
//! [sectionName]
//! key1=value1
//! key2=value2
//!
//! [sectionName2]
//! key3=value3
//! ```
//!
//! - A section header is `[name]` on its own line.
//! - A key line is `key=value`; the value is everything after the first `=`
//!   and may itself contain `=`.
//! - Lines starting with `;` are comments.  Blank lines, comments, lines
//!   without `=` and lines before the first header are dropped on load.
//! - Values cannot span lines and are never escaped.  Whole lines are
//!   trimmed on load, so trailing whitespace in a value is lost on reload.
//! - Writes that would not read back are ignored (and logged): an empty
//!   section name, a key that is empty, contains `=`, starts with `;`, `[` or
//!   whitespace, and any name or value containing a line break.  See
//!   [`is_valid_section_name`], [`is_valid_ident`] and [`is_valid_value`].
//! - Files that are not valid UTF-8 are read one byte per character and
//!   written back the same way.
//!
//! # Case sensitivity
//!
//! A store opened with `case_sensitive = false` lower-cases every section and
//! key name it stores or looks up, so `"Server"` and `"server"` address the
//! same section.  Section headers are written back in their lower-cased form.
//! Values always keep their original case.
//!
//! # Lifecycle
//!
//! ```text
//! open ──▶ Loaded (clean) ──write──▶ Loaded (dirty) ──close──▶ gone
//!              ▲                           │
//!              └────────── flush ──────────┘
//! ```
//!
//! [`IniFile::close`] consumes the store, so using it after close does not
//! compile.  Dropping a dirty store without closing it discards the pending
//! changes.
//!
//! # Error tolerance
//!
//! Loading never fails: a missing or unreadable file yields an empty store,
//! malformed lines are skipped and typed reads fall back to the caller's
//! default.  Only writing the file back ([`IniFile::flush`] /
//! [`IniFile::close`]) reports an error.  Use [`IniFile::try_open`] when an
//! unreadable file should be an error instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub mod backend;
pub mod oneshot;
pub(crate) mod parse;
pub mod store;

pub use backend::{FileBackend, IniBackend, MemoryBackend};
pub use parse::{is_valid_ident, is_valid_section_name, is_valid_value};
pub use store::IniFile;

/// Line terminator used when serializing a store.
pub const LINE_ENDING: &str = "\n";

/// Errors reported by the INI store.
#[derive(Debug, Error)]
pub enum IniError {
    /// The backing file exists but could not be read.
    ///
    /// Only returned by [`IniFile::try_open`] / [`IniFile::try_open_with`];
    /// the tolerant constructors fall back to an empty store instead.
    #[error("failed to read INI file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the serialized store to the backing file failed.
    ///
    /// The store stays dirty, so a later flush retries the write.
    #[error("failed to write INI file {path}: {source}")]
    Flush {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
