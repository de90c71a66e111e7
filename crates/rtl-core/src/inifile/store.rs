//! The in-memory INI store.
//!
//! See the [module documentation](super) for the file format and lifecycle.

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::backend::{FileBackend, IniBackend};
use super::parse::{self, is_valid_ident, is_valid_section_name, is_valid_value, Line};
use super::{IniError, LINE_ENDING};
use crate::convert;

/// An INI file loaded into memory.
///
/// Sections keep the order in which they were first seen (on load or on
/// write); keys keep their order within a section.  Rewriting an existing key
/// updates its line in place.
///
/// # Closing
///
/// Changes reach the disk only through [`flush`](Self::flush) or
/// [`close`](Self::close).  `close` consumes the store: there is no way to
/// keep using a closed store.  A dirty store that is dropped without being
/// closed loses its changes (a `warn` event is logged).
///
/// # Examples
///
/// ```rust
/// use rtl_core::inifile::{IniFile, MemoryBackend};
///
/// let backend = MemoryBackend::new();
/// let mut ini = IniFile::open_with(backend.clone(), "app.ini", false);
///
/// ini.write_string("Server", "Host", "localhost");
/// assert_eq!(ini.read_string("server", "host", ""), "localhost");
///
/// ini.close().unwrap();
/// assert_eq!(backend.contents("app.ini").unwrap(), "[server]\nhost=localhost");
/// ```
pub struct IniFile<B: IniBackend = FileBackend> {
    backend: B,
    path: PathBuf,
    case_sensitive: bool,
    /// Section names in serialization order.  Each name appears once and has
    /// an entry in `sections`.
    section_order: Vec<String>,
    /// Normalized section name → raw `ident=value` lines.
    sections: HashMap<String, Vec<String>>,
    /// How the backing file was decoded, and so how it is written back.
    encoding: Encoding,
    dirty: bool,
}

/// Text encoding of the backing file.
///
/// A file that is valid UTF-8 is read as UTF-8.  Anything else is read one
/// byte per character (Latin-1), which maps every byte to a distinct `char`
/// and back, so legacy single-byte files survive a load/close cycle
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Encoding {
    Utf8,
    Latin1,
}

impl Encoding {
    fn decode(bytes: Vec<u8>) -> (String, Self) {
        match String::from_utf8(bytes) {
            Ok(text) => (text, Encoding::Utf8),
            Err(e) => {
                let text = e.into_bytes().into_iter().map(char::from).collect();
                (text, Encoding::Latin1)
            }
        }
    }

    /// In Latin-1 mode, characters above `U+00FF` (only possible in newly
    /// written names or values) are emitted as UTF-8, the same bytes a
    /// byte-oriented writer would produce.
    fn encode(self, text: &str) -> Vec<u8> {
        match self {
            Encoding::Utf8 => text.as_bytes().to_vec(),
            Encoding::Latin1 => {
                let mut out = Vec::with_capacity(text.len());
                for c in text.chars() {
                    match u8::try_from(c) {
                        Ok(b) => out.push(b),
                        Err(_) => {
                            let mut buf = [0u8; 4];
                            out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
                        }
                    }
                }
                out
            }
        }
    }
}

impl IniFile<FileBackend> {
    /// Opens `path` on the local filesystem.
    ///
    /// A missing or unreadable file yields an empty store; see
    /// [`try_open`](Self::try_open) for a strict variant.
    pub fn open(path: impl Into<PathBuf>, case_sensitive: bool) -> Self {
        Self::open_with(FileBackend, path, case_sensitive)
    }

    /// Opens `path` on the local filesystem, failing if it exists but cannot
    /// be read.  A missing file still yields an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`IniError::Read`] when reading an existing file fails.
    pub fn try_open(path: impl Into<PathBuf>, case_sensitive: bool) -> Result<Self, IniError> {
        Self::try_open_with(FileBackend, path, case_sensitive)
    }
}

impl<B: IniBackend> IniFile<B> {
    /// Opens `path` through `backend`.
    ///
    /// Never fails: if the file is absent the store starts empty, and if it
    /// cannot be read the failure is logged and the store starts empty.
    pub fn open_with(backend: B, path: impl Into<PathBuf>, case_sensitive: bool) -> Self {
        let mut ini = Self::empty(backend, path.into(), case_sensitive);
        if let Err(e) = ini.load() {
            warn!("{e}; continuing with an empty INI store");
        }
        ini
    }

    /// Opens `path` through `backend`, failing if it exists but cannot be
    /// read.
    ///
    /// # Errors
    ///
    /// Returns [`IniError::Read`] when the backend reports a read failure
    /// other than "not found".
    pub fn try_open_with(
        backend: B,
        path: impl Into<PathBuf>,
        case_sensitive: bool,
    ) -> Result<Self, IniError> {
        let mut ini = Self::empty(backend, path.into(), case_sensitive);
        ini.load()?;
        Ok(ini)
    }

    fn empty(backend: B, path: PathBuf, case_sensitive: bool) -> Self {
        Self {
            backend,
            path,
            case_sensitive,
            section_order: Vec::new(),
            sections: HashMap::new(),
            encoding: Encoding::Utf8,
            dirty: false,
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether section and key names are compared verbatim.
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// `true` when there are changes not yet written to the backing file.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    // ── Load ──────────────────────────────────────────────────────────────────

    fn load(&mut self) -> Result<(), IniError> {
        if !self.backend.exists(&self.path) {
            debug!("{} does not exist; starting empty", self.path.display());
            return Ok(());
        }

        let bytes = match self.backend.read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(source) => {
                return Err(IniError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let (text, encoding) = Encoding::decode(bytes);
        if encoding == Encoding::Latin1 {
            debug!("{} is not UTF-8; reading it byte-per-character", self.path.display());
        }
        self.encoding = encoding;
        self.parse(&text);
        debug!(
            "loaded {} section(s) from {}",
            self.section_order.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Fills the (empty) store from INI text.
    ///
    /// A header that repeats an earlier one reopens that section: its lines
    /// are appended to the existing section rather than starting a second
    /// block.  A `[]` header closes the current section, so the lines after
    /// it are dropped until the next named header.
    fn parse(&mut self, text: &str) {
        let mut current: Option<String> = None;

        for raw in text.lines() {
            match parse::classify(raw) {
                Line::Section("") => current = None,
                Line::Section(name) => {
                    let name = self.normalize(name);
                    self.register_section(&name);
                    current = Some(name);
                }
                Line::Entry { ident, value } => {
                    // Lines before the first header have no section to go to.
                    if let Some(section) = &current {
                        let line = entry_line(&self.normalize(ident), value);
                        self.sections.entry(section.clone()).or_default().push(line);
                    }
                }
                Line::Skip => {}
            }
        }
    }

    // ── Serialization ─────────────────────────────────────────────────────────

    /// Renders the store in its on-disk form.
    ///
    /// Sections appear in order, each followed by a blank line; trailing line
    /// endings at the very end are trimmed.  This is exactly what
    /// [`flush`](Self::flush) writes.
    pub fn to_ini_string(&self) -> String {
        let mut out = String::new();
        for name in &self.section_order {
            let Some(lines) = self.sections.get(name) else {
                continue;
            };
            out.push('[');
            out.push_str(name);
            out.push(']');
            out.push_str(LINE_ENDING);
            for line in lines {
                out.push_str(line);
                out.push_str(LINE_ENDING);
            }
            out.push_str(LINE_ENDING);
        }

        let trimmed = out.trim_end_matches(LINE_ENDING).len();
        out.truncate(trimmed);
        out
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    /// Returns `true` if `section` exists (even with no keys).
    pub fn section_exists(&self, section: &str) -> bool {
        self.sections.contains_key(&self.normalize(section))
    }

    /// Returns every section name.
    ///
    /// Names are normalized.  This implementation yields them in file order,
    /// but callers should not depend on any particular order.
    pub fn read_sections(&self) -> Vec<String> {
        self.section_order
            .iter()
            .filter(|name| self.sections.contains_key(*name))
            .cloned()
            .collect()
    }

    /// Returns the key names of `section` in stored order, or an empty list if
    /// the section is absent.
    pub fn read_section_idents(&self, section: &str) -> Vec<String> {
        self.section_lines(section)
            .iter()
            .filter_map(|line| parse::split_entry(line))
            .map(|(ident, _)| ident.to_string())
            .collect()
    }

    /// Returns the raw `ident=value` lines of `section` in stored order, or an
    /// empty list if the section is absent.
    pub fn read_section_values(&self, section: &str) -> Vec<String> {
        self.section_lines(section).to_vec()
    }

    /// Returns `true` if `ident` exists in `section`.
    pub fn ident_exists(&self, section: &str, ident: &str) -> bool {
        self.lookup(section, ident).is_some()
    }

    /// Returns the value of `ident` in `section`, or `default` when either is
    /// absent.  If a key appears more than once, the first line wins.
    pub fn read_string(&self, section: &str, ident: &str, default: &str) -> String {
        self.lookup(section, ident).unwrap_or(default).to_string()
    }

    /// Reads `ident` as a decimal integer, falling back to `default` when it
    /// is absent or does not parse.
    pub fn read_int(&self, section: &str, ident: &str, default: i64) -> i64 {
        self.lookup(section, ident)
            .map_or(default, |s| convert::str_to_int_def(s, default))
    }

    /// Reads `ident` as a boolean, falling back to `default` when it is absent
    /// or not a recognised boolean spelling (see [`convert::str_to_bool`]).
    pub fn read_bool(&self, section: &str, ident: &str, default: bool) -> bool {
        self.lookup(section, ident)
            .map_or(default, |s| convert::str_to_bool_def(s, default))
    }

    /// Reads `ident` as a floating-point number, falling back to `default`
    /// when it is absent or does not parse.
    pub fn read_float(&self, section: &str, ident: &str, default: f64) -> f64 {
        self.lookup(section, ident)
            .map_or(default, |s| convert::str_to_double_def(s, default))
    }

    // ── Mutations ─────────────────────────────────────────────────────────────

    /// Sets `ident` in `section` to `value`.
    ///
    /// An existing key is updated in place; a new key is appended.  A missing
    /// section is created at the end of the section order.
    ///
    /// A write that would not read back after close and reopen is ignored
    /// and logged: see [`is_valid_section_name`], [`is_valid_ident`] and
    /// [`is_valid_value`].  Trailing whitespace in `value` is kept in memory
    /// but trimmed when the file is next loaded.
    pub fn write_string(&mut self, section: &str, ident: &str, value: &str) {
        if !is_valid_section_name(section) {
            warn!("ignoring write of {ident:?} to invalid section name {section:?}");
            return;
        }
        if !is_valid_ident(ident) {
            warn!("ignoring write of invalid key {ident:?} in section [{section}]");
            return;
        }
        if !is_valid_value(value) {
            warn!("ignoring multi-line value for key {ident:?} in section [{section}]");
            return;
        }

        let section = self.normalize(section);
        let ident = self.normalize(ident);
        let line = entry_line(&ident, value);

        self.register_section(&section);
        let lines = self.sections.entry(section).or_default();
        match position_of(lines, &ident) {
            Some(i) => lines[i] = line,
            None => lines.push(line),
        }
        self.dirty = true;
    }

    /// Writes `value` in decimal.
    pub fn write_int(&mut self, section: &str, ident: &str, value: i64) {
        self.write_string(section, ident, &convert::int_to_str(value));
    }

    /// Writes `value` as `"1"` or `"0"`.
    pub fn write_bool(&mut self, section: &str, ident: &str, value: bool) {
        self.write_string(section, ident, convert::bool_to_str(value));
    }

    /// Writes `value` with 16 fractional digits.
    pub fn write_float(&mut self, section: &str, ident: &str, value: f64) {
        self.write_string(section, ident, &convert::double_to_str(value));
    }

    /// Removes `ident` from `section`.  Does nothing if either is absent.
    pub fn delete_ident(&mut self, section: &str, ident: &str) {
        let section = self.normalize(section);
        let ident = self.normalize(ident);
        let Some(lines) = self.sections.get_mut(&section) else {
            return;
        };
        if let Some(i) = position_of(lines, &ident) {
            lines.remove(i);
            self.dirty = true;
        }
    }

    /// Removes `section` and all of its keys.  Does nothing if it is absent.
    pub fn erase_section(&mut self, section: &str) {
        let section = self.normalize(section);
        if self.sections.remove(&section).is_none() {
            return;
        }
        if let Some(i) = self.section_order.iter().position(|name| *name == section) {
            self.section_order.remove(i);
        }
        self.dirty = true;
    }

    // ── Flush / close ─────────────────────────────────────────────────────────

    /// Writes the store to its backing file if it is dirty.
    ///
    /// The file is overwritten wholesale with [`to_ini_string`](Self::to_ini_string).
    ///
    /// # Errors
    ///
    /// Returns [`IniError::Flush`] if the write fails.  The store stays dirty
    /// in that case.
    pub fn flush(&mut self) -> Result<(), IniError> {
        if !self.dirty {
            return Ok(());
        }

        let contents = self.encoding.encode(&self.to_ini_string());
        self.backend
            .write_all(&self.path, &contents)
            .map_err(|source| IniError::Flush {
                path: self.path.clone(),
                source,
            })?;

        self.dirty = false;
        debug!("flushed {} byte(s) to {}", contents.len(), self.path.display());
        Ok(())
    }

    /// Flushes pending changes and releases the store.
    ///
    /// # Errors
    ///
    /// Returns [`IniError::Flush`] if pending changes could not be written;
    /// those changes are lost.
    pub fn close(mut self) -> Result<(), IniError> {
        let result = self.flush();
        // Written or reported: either way there is nothing left to warn about.
        self.dirty = false;
        result
    }

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn normalize(&self, name: &str) -> String {
        if self.case_sensitive {
            name.to_string()
        } else {
            name.to_lowercase()
        }
    }

    fn register_section(&mut self, name: &str) {
        if !self.sections.contains_key(name) {
            self.section_order.push(name.to_string());
            self.sections.insert(name.to_string(), Vec::new());
        }
    }

    fn section_lines(&self, section: &str) -> &[String] {
        self.sections
            .get(&self.normalize(section))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn lookup(&self, section: &str, ident: &str) -> Option<&str> {
        let ident = self.normalize(ident);
        self.section_lines(section).iter().find_map(|line| {
            parse::split_entry(line)
                .filter(|(id, _)| *id == ident)
                .map(|(_, value)| value)
        })
    }
}

impl<B: IniBackend> fmt::Display for IniFile<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ini_string())
    }
}

impl<B: IniBackend> fmt::Debug for IniFile<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IniFile")
            .field("path", &self.path)
            .field("case_sensitive", &self.case_sensitive)
            .field("sections", &self.section_order)
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl<B: IniBackend> Drop for IniFile<B> {
    fn drop(&mut self) {
        if self.dirty {
            warn!(
                "INI store for {} dropped with unsaved changes; call close() to keep them",
                self.path.display()
            );
        }
    }
}

fn entry_line(ident: &str, value: &str) -> String {
    format!("{ident}={value}")
}

fn position_of(lines: &[String], ident: &str) -> Option<usize> {
    lines
        .iter()
        .position(|line| parse::split_entry(line).is_some_and(|(id, _)| id == ident))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
