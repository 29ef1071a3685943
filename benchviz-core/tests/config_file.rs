use benchviz_core::{ReportConfig, Selection};
use std::fs;

#[test]
fn config_roundtrip_file() {
    let cfg = ReportConfig::builder()
        .artifacts_root("bench/data")
        .output_dir("docs")
        .selection(Selection::Modified)
        .log_level("debug")
        .build()
        .unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("benchviz.toml");
    cfg.write_to_file(&path).unwrap();
    let s = fs::read_to_string(&path).unwrap();
    assert!(s.contains("selection = \"modified\""), "{s}");
    let loaded = ReportConfig::load_from_file(&path).unwrap();
    assert_eq!(cfg, loaded);
}

#[test]
fn partial_file_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.toml");
    fs::write(&path, "output_dir = \"charts\"\n").unwrap();
    let cfg = ReportConfig::load_from_file(&path).unwrap();
    assert_eq!(cfg.output_dir, std::path::Path::new("charts"));
    assert_eq!(cfg.artifacts_root, ReportConfig::default().artifacts_root);
}

#[test]
fn invalid_level_in_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "log_level = 'nope'\n").unwrap();
    let msg = ReportConfig::load_from_file(&path).unwrap_err().to_string();
    assert!(msg.contains("invalid log_level"), "{msg}");
}

#[test]
fn unknown_selection_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sel.toml");
    fs::write(&path, "selection = 'newest'\n").unwrap();
    let msg = ReportConfig::load_from_file(&path).unwrap_err().to_string();
    assert!(msg.contains("toml parse error"), "{msg}");
}
