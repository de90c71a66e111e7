//! Storage access for the INI store.
//!
//! The store never touches `std::fs` directly.  It asks an [`IniBackend`]
//! whether the file exists, reads it once on open and overwrites it once per
//! flush.  Backends move raw bytes; decoding is the store's business, so a
//! file that is not valid UTF-8 still loads.
//!
//! # Testability
//!
//! [`FileBackend`] is the production implementation.  [`MemoryBackend`]
//! keeps files in a shared map so tests (and callers embedding INI text in
//! memory) can exercise the full open / edit / close cycle without a disk.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// Trait abstracting the file primitives the store needs.
#[cfg_attr(test, mockall::automock)]
pub trait IniBackend {
    /// Returns `true` if something exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Reads the whole file at `path`.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Replaces the file at `path` with `contents`.
    ///
    /// This is a plain overwrite: a crash part-way through can leave a
    /// truncated file behind.
    fn write_all(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

/// [`IniBackend`] over the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileBackend;

impl IniBackend for FileBackend {
    fn exists(&self, path: &Path) -> bool {
        crate::fs::file_exists(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn write_all(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        std::fs::write(path, contents)
    }
}

/// [`IniBackend`] holding files in memory.
///
/// Clones share the same file map, so a test can keep one handle, give a
/// clone to a store, close the store and then inspect what was written.
///
/// # Examples
///
/// ```rust
/// use rtl_core::inifile::{IniFile, MemoryBackend};
///
/// let backend = MemoryBackend::new();
/// let mut ini = IniFile::open_with(backend.clone(), "db.ini", false);
/// ini.write_int("db", "timeout", 30);
/// ini.close().unwrap();
///
/// assert_eq!(backend.contents("db.ini").as_deref(), Some("[db]\ntimeout=30"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
}

impl MemoryBackend {
    /// Creates a backend with no files.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `contents` under `path`, replacing any previous file.
    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        self.files().insert(path.into(), contents.into());
    }

    /// Returns the current contents of `path` as text, if present.  Bytes
    /// that are not valid UTF-8 show up as `U+FFFD`; use
    /// [`bytes`](Self::bytes) for the exact contents.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files()
            .get(path.as_ref())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Returns the exact bytes stored under `path`, if present.
    pub fn bytes(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.files().get(path.as_ref()).cloned()
    }

    /// Removes `path`, returning its contents if it existed.
    pub fn remove(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.files().remove(path.as_ref())
    }

    fn files(&self) -> std::sync::MutexGuard<'_, HashMap<PathBuf, Vec<u8>>> {
        // A panic while holding the lock cannot leave the map half-updated.
        self.files.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl IniBackend for MemoryBackend {
    fn exists(&self, path: &Path) -> bool {
        self.files().contains_key(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.files().get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )
        })
    }

    fn write_all(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        self.files().insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
