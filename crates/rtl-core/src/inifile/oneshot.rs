//! Single-call INI helpers.
//!
//! Each function opens the file case-insensitively, performs one operation
//! and closes it again.  Convenient for reading or writing a handful of
//! settings; for anything more, open an [`IniFile`] once and keep it.

use std::path::Path;

use super::{IniError, IniFile};

/// Reads one string value; see [`IniFile::read_string`].
pub fn ini_read_string(path: impl AsRef<Path>, section: &str, ident: &str, default: &str) -> String {
    open(path).read_string(section, ident, default)
}

/// Writes one string value and saves the file.
///
/// # Errors
///
/// Returns [`IniError::Flush`] if the file cannot be written.
pub fn ini_write_string(
    path: impl AsRef<Path>,
    section: &str,
    ident: &str,
    value: &str,
) -> Result<(), IniError> {
    let mut ini = open(path);
    ini.write_string(section, ident, value);
    ini.close()
}

/// Reads one integer value; see [`IniFile::read_int`].
pub fn ini_read_int(path: impl AsRef<Path>, section: &str, ident: &str, default: i64) -> i64 {
    open(path).read_int(section, ident, default)
}

/// Writes one integer value and saves the file.
///
/// # Errors
///
/// Returns [`IniError::Flush`] if the file cannot be written.
pub fn ini_write_int(
    path: impl AsRef<Path>,
    section: &str,
    ident: &str,
    value: i64,
) -> Result<(), IniError> {
    let mut ini = open(path);
    ini.write_int(section, ident, value);
    ini.close()
}

/// Returns `true` if `section` exists in the file.
pub fn ini_section_exists(path: impl AsRef<Path>, section: &str) -> bool {
    open(path).section_exists(section)
}

/// Returns the key names of `section`.
pub fn ini_read_section_idents(path: impl AsRef<Path>, section: &str) -> Vec<String> {
    open(path).read_section_idents(section)
}

/// Returns every section name in the file.
pub fn ini_read_sections(path: impl AsRef<Path>) -> Vec<String> {
    open(path).read_sections()
}

/// Returns the raw `ident=value` lines of `section`.
pub fn ini_read_section_values(path: impl AsRef<Path>, section: &str) -> Vec<String> {
    open(path).read_section_values(section)
}

/// Removes `section` and saves the file.
///
/// # Errors
///
/// Returns [`IniError::Flush`] if the file cannot be written.
pub fn ini_erase_section(path: impl AsRef<Path>, section: &str) -> Result<(), IniError> {
    let mut ini = open(path);
    ini.erase_section(section);
    ini.close()
}

/// Returns `true` if `ident` exists in `section`.
pub fn ini_ident_exists(path: impl AsRef<Path>, section: &str, ident: &str) -> bool {
    open(path).ident_exists(section, ident)
}

/// Removes `ident` from `section` and saves the file.
///
/// # Errors
///
/// Returns [`IniError::Flush`] if the file cannot be written.
pub fn ini_delete_ident(path: impl AsRef<Path>, section: &str, ident: &str) -> Result<(), IniError> {
    let mut ini = open(path);
    ini.delete_ident(section, ident);
    ini.close()
}

fn open(path: impl AsRef<Path>) -> IniFile {
    IniFile::open(path.as_ref(), false)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
