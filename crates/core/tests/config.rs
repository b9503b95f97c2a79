use std::path::PathBuf;

use exefind_core::services::search::{AccumulationMode, MatchMode};
use exefind_core::FinderConfig;
use tempfile::tempdir;

#[test]
fn defaults_use_tools_on_path() {
    let config = FinderConfig::default();
    assert_eq!(config.nm_path, PathBuf::from("nm"));
    assert_eq!(config.objdump_path, PathBuf::from("objdump"));
    assert!(!config.strict);
    assert_eq!(config.accumulation, AccumulationMode::Regular);
}

#[test]
fn loads_json_and_yaml() {
    let temp = tempdir().expect("tempdir");
    let json = temp.path().join("exefind.json");
    std::fs::write(&json, r#"{"nm_path":"/opt/binutils/nm","strict":true}"#)
        .expect("write fixture");
    let yaml = temp.path().join("exefind.yaml");
    std::fs::write(&yaml, "objdump_path: /opt/binutils/objdump\naccumulation: incremental\n")
        .expect("write fixture");

    let from_json = FinderConfig::load(&json).expect("load config");
    assert!(from_json.strict);
    assert_eq!(from_json.accumulation, AccumulationMode::Regular);

    let from_yaml = FinderConfig::load(&yaml).expect("load config");
    assert!(!from_yaml.strict);
    assert_eq!(from_yaml.accumulation, AccumulationMode::Incremental);

    let session = from_yaml.session();
    assert_eq!(session.match_mode, MatchMode::Substring);
    assert_eq!(session.accumulation, AccumulationMode::Incremental);
    assert!(session.corpus().is_empty());
}

#[test]
fn reports_unreadable_and_malformed_files() {
    let temp = tempdir().expect("tempdir");
    let err = FinderConfig::load(&temp.path().join("missing.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config"), "unexpected error: {err}");

    let bad = temp.path().join("bad.json");
    std::fs::write(&bad, "not-json").expect("write fixture");
    let err = FinderConfig::load(&bad).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config JSON"), "unexpected error: {err}");
}
