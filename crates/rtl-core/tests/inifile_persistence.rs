//! Integration tests for the INI store against the real filesystem.
//!
//! These tests go through the public API only: open a file, change it, close
//! it, then reopen it (or read it raw) to check what actually reached disk.

use std::path::PathBuf;

use rtl_core::inifile::oneshot;
use rtl_core::{IniError, IniFile};
use uuid::Uuid;

/// Creates a unique scratch directory for one test.
fn scratch_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("rtl_ini_it_{}", Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("temp dir must be creatable");
    dir
}

#[test]
fn test_close_persists_changes_across_reopen() {
    // Arrange
    let dir = scratch_dir();
    let path = dir.join("app.ini");
    std::fs::write(&path, "; app settings\n[server]\nhost=localhost\nport=8080\n").unwrap();

    // Act
    let mut ini = IniFile::open(&path, false);
    ini.write_int("server", "port", 9090);
    ini.write_bool("server", "tls", true);
    ini.write_string("client", "name", "desk-01");
    ini.close().expect("close must write the file");

    // Assert
    let reopened = IniFile::open(&path, false);
    assert_eq!(reopened.read_string("server", "host", ""), "localhost");
    assert_eq!(reopened.read_int("server", "port", 0), 9090);
    assert!(reopened.read_bool("server", "tls", false));
    assert_eq!(reopened.read_sections(), vec!["server", "client"]);
    drop(reopened);

    let raw = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        raw,
        "[server]\nhost=localhost\nport=9090\ntls=1\n\n[client]\nname=desk-01"
    );

    // Cleanup
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_unchanged_store_leaves_file_untouched() {
    // Arrange
    let dir = scratch_dir();
    let path = dir.join("keep.ini");
    let original = "; comment survives\n[a]\nx=1\n";
    std::fs::write(&path, original).unwrap();

    // Act
    let ini = IniFile::open(&path, false);
    assert_eq!(ini.read_int("a", "x", 0), 1);
    ini.close().unwrap();

    // Assert
    assert_eq!(std::fs::read_to_string(&path).unwrap(), original);

    // Cleanup
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_missing_file_is_created_on_first_write() {
    // Arrange
    let dir = scratch_dir();
    let path = dir.join("fresh.ini");

    // Act
    let mut ini = IniFile::open(&path, true);
    assert!(ini.read_sections().is_empty());
    ini.write_float("Limits", "Ratio", 0.5);
    ini.close().unwrap();

    // Assert
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "[Limits]\nRatio=0.5000000000000000"
    );

    // Cleanup
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_latin1_file_keeps_existing_keys_after_oneshot_write() {
    // Arrange: `caf\xe9` is Latin-1, not valid UTF-8.
    let dir = scratch_dir();
    let path = dir.join("legacy.ini");
    std::fs::write(&path, b"[server]\nhost=localhost\nname=caf\xe9\nport=8080\n").unwrap();

    // Act
    let host = oneshot::ini_read_string(&path, "server", "host", "<absent>");
    oneshot::ini_write_int(&path, "db", "timeout", 30).expect("write succeeds");

    // Assert
    assert_eq!(host, "localhost");
    assert_eq!(
        std::fs::read(&path).unwrap(),
        b"[server]\nhost=localhost\nname=caf\xe9\nport=8080\n\n[db]\ntimeout=30"
    );
    let reopened = IniFile::open(&path, false);
    assert_eq!(reopened.read_int("server", "port", 0), 8080);
    assert_eq!(reopened.read_string("server", "name", ""), "caf\u{e9}");
    assert!(reopened.ident_exists("db", "timeout"));
    drop(reopened);

    // Cleanup
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_try_open_reports_unreadable_path() {
    // Arrange: a directory cannot be read as a text file.
    let dir = scratch_dir();

    // Act
    let result = IniFile::try_open(&dir, false);

    // Assert
    assert!(matches!(result, Err(IniError::Read { .. })));

    // Cleanup
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_close_reports_flush_failure() {
    // Arrange: the parent directory does not exist, so the write fails.
    let dir = scratch_dir();
    let path = dir.join("no_such_dir").join("out.ini");
    let mut ini = IniFile::open(&path, false);
    ini.write_string("s", "k", "v");

    // Act
    let result = ini.close();

    // Assert
    assert!(matches!(result, Err(IniError::Flush { .. })));
    assert!(!path.exists());

    // Cleanup
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_oneshot_helpers_share_one_file() {
    // Arrange
    let dir = scratch_dir();
    let path = dir.join("oneshot.ini");

    // Act
    oneshot::ini_write_string(&path, "Net", "Host", "10.0.0.1").unwrap();
    oneshot::ini_write_int(&path, "net", "port", 24800).unwrap();
    oneshot::ini_write_string(&path, "old", "gone", "soon").unwrap();
    oneshot::ini_erase_section(&path, "OLD").unwrap();

    // Assert
    assert_eq!(oneshot::ini_read_string(&path, "NET", "HOST", ""), "10.0.0.1");
    assert_eq!(oneshot::ini_read_int(&path, "net", "port", 0), 24800);
    assert_eq!(oneshot::ini_read_sections(&path), vec!["net"]);
    assert_eq!(
        oneshot::ini_read_section_values(&path, "net"),
        vec!["host=10.0.0.1", "port=24800"]
    );

    oneshot::ini_delete_ident(&path, "net", "host").unwrap();
    assert!(!oneshot::ini_ident_exists(&path, "net", "host"));
    assert_eq!(oneshot::ini_read_section_idents(&path, "net"), vec!["port"]);

    // Cleanup
    std::fs::remove_dir_all(&dir).ok();
}
