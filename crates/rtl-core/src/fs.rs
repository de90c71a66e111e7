//! File and path helpers.
//!
//! Extension helpers work on the final path component only: a dot in a
//! directory name never counts, and neither does a leading dot (`.profile`
//! has no extension).

use std::io;
use std::path::{self, Path, PathBuf};

/// Returns `true` if anything (file or directory) exists at `path`.
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Returns `true` if `path` exists and is a directory.
pub fn directory_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_dir()
}

/// Creates (or truncates) the file at `path`.
///
/// # Errors
///
/// Returns the underlying I/O error if the file cannot be created.
pub fn create_file(path: impl AsRef<Path>) -> io::Result<()> {
    std::fs::File::create(path).map(drop)
}

/// Returns the directory containing the running executable.
///
/// # Errors
///
/// Returns an error if the executable path cannot be determined or has no
/// parent directory.
pub fn application_path() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} has no parent directory", exe.display()),
        )
    })
}

/// Appends the platform path separator to `path` unless it already ends
/// with one.
pub fn include_trailing_path_delimiter(path: &str) -> String {
    if path.ends_with(path::MAIN_SEPARATOR) {
        path.to_string()
    } else {
        format!("{path}{}", path::MAIN_SEPARATOR)
    }
}

/// Replaces the extension of `file_name` with `ext` (which should include
/// its leading dot), or appends `ext` when there is no extension.
///
/// ```rust
/// use rtl_core::fs::change_file_ext;
/// assert_eq!(change_file_ext("app.conf", ".ini"), "app.ini");
/// assert_eq!(change_file_ext("README", ".md"), "README.md");
/// ```
pub fn change_file_ext(file_name: &str, ext: &str) -> String {
    let stem_end = ext_start(file_name).unwrap_or(file_name.len());
    format!("{}{ext}", &file_name[..stem_end])
}

/// Returns the extension of `file_name` including its dot, or `""`.
pub fn file_ext(file_name: &str) -> &str {
    ext_start(file_name).map_or("", |i| &file_name[i..])
}

/// Byte index of the extension's dot within the final path component.
fn ext_start(file_name: &str) -> Option<usize> {
    let base = file_name.rfind(path::is_separator).map_or(0, |i| i + 1);
    match file_name[base..].rfind('.') {
        Some(dot) if dot > 0 => Some(base + dot),
        _ => None,
    }
}
