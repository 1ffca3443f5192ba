//! 設定ファイルのテスト

use proofread_common::DEFAULT_ENDPOINT;
use tamil_proofread::config::Config;
use tamil_proofread::error::ProofreadError;
use tempfile::tempdir;

/// ファイルが無ければ既定値
#[test]
fn test_load_missing_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();

    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.timeout_seconds, 300);
}

/// 保存と読み込み
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.set_endpoint("https://proofread.example.com/proofread-file".into()).unwrap();
    config.set_timeout(60).unwrap();
    config.save_to(&path).expect("設定保存失敗");

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.endpoint, "https://proofread.example.com/proofread-file");
    assert_eq!(loaded.timeout_seconds, 60);
}

/// 一部のキーだけのファイルは残りを既定値で補う
#[test]
fn test_load_partial_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"timeout_seconds": 42}"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.timeout_seconds, 42);
}

/// 不正な値は設定エラー
#[test]
fn test_invalid_values() {
    let mut config = Config::default();
    assert!(matches!(config.set_endpoint("ftp://example.com".into()), Err(ProofreadError::Config(_))));
    assert!(matches!(config.set_timeout(0), Err(ProofreadError::Config(_))));
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
}

/// 壊れたJSONはJSON解析エラー
#[test]
fn test_load_broken_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(Config::load_from(&path), Err(ProofreadError::JsonParse(_))));
}
