//! Tests for file logging setup.

use super::*;
use serial_test::serial;
use std::fs;

#[test]
fn split_log_path_separates_directory_and_file() {
    let (directory, file) = split_log_path(Path::new("/var/log/edubrowse/app.log")).unwrap();
    assert_eq!(directory, PathBuf::from("/var/log/edubrowse"));
    assert_eq!(file, "app.log");
}

#[test]
fn split_log_path_bare_name_uses_current_directory() {
    let (directory, file) = split_log_path(Path::new("edubrowse.log")).unwrap();
    assert_eq!(directory, PathBuf::from("."));
    assert_eq!(file, "edubrowse.log");
}

#[test]
fn split_log_path_rejects_root() {
    assert!(matches!(
        split_log_path(Path::new("/")),
        Err(LoggingError::InvalidPath(_))
    ));
}

#[test]
#[serial(tracing_init)]
fn init_creates_log_directory_if_missing() {
    let test_dir = std::env::temp_dir().join("edubrowse_test_logs_create");
    let log_file = test_dir.join("test.log");
    let _ = fs::remove_dir_all(&test_dir);

    // Subscriber may already be set by another test; the directory is
    // created before that check.
    let _ = init(&log_file);

    assert!(test_dir.exists(), "Log directory should be created: {:?}", test_dir);
    let _ = fs::remove_dir_all(&test_dir);
}

#[test]
#[serial(tracing_init)]
fn second_init_reports_subscriber_already_set() {
    let test_dir = std::env::temp_dir().join("edubrowse_test_logs_twice");
    let log_file = test_dir.join("twice.log");

    let _ = init(&log_file);
    let second = init(&log_file);

    assert!(matches!(second, Err(LoggingError::SubscriberAlreadySet)));
    let _ = fs::remove_dir_all(&test_dir);
}
