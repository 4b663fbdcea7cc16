use bikeshare::config::Config;
use bikeshare::errors::AppError;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_empty_file_gives_defaults() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("bikeshare.conf");
    fs::write(&path, "").expect("write");

    let cfg = Config::load(Some(path.as_path())).expect("defaults");
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.page_size, 5);
    assert_eq!(cfg.max_attempts, None);
    assert_eq!(cfg.data_dir, ".");
}

#[test]
fn test_explicit_missing_file_rejected() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("nope.conf");

    let err = Config::load(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
    assert!(err.to_string().contains("nope.conf"));
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("bikeshare.conf");
    fs::write(&path, "data_dir: /srv/bikeshare\nmax_attempts: 3\n").expect("write");

    let cfg = Config::load(Some(path.as_path())).expect("load");
    assert_eq!(cfg.data_dir, "/srv/bikeshare");
    assert_eq!(cfg.max_attempts, Some(3));
    assert_eq!(cfg.page_size, 5);
    assert_eq!(cfg.log_level, "warn");
}

#[test]
fn test_empty_file_is_default() {
    assert_eq!(Config::from_yaml("  \n").expect("empty"), Config::default());
}

#[test]
fn test_zero_page_size_rejected() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("bikeshare.conf");
    fs::write(&path, "page_size: 0\n").expect("write");

    let err = Config::load(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn test_malformed_file() {
    let err = Config::from_yaml("page_size: [1, 2").unwrap_err();
    assert!(matches!(err, AppError::ConfigParse(_)));
}
