//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use std::path::PathBuf;
use tempfile::tempdir;
use watson_rss::credentials::{CredentialLoader, FileCredentialLoader};
use watson_rss::error::WatsonRssError;
use watson_rss::host::{Host, WorkbookHost};
use watson_rss::initialize_bindings;
use watson_rss_common::MenuAction;

/// 存在しないワークブックを開いた場合
#[test]
fn test_open_nonexistent_workbook() {
    let host = WorkbookHost::new("/nonexistent/path/12345.xlsx");
    let loader = FileCredentialLoader::file_only("/nonexistent/creds.json");

    let err = initialize_bindings(&host, &loader).unwrap_err();
    // ドキュメント取得が先に失敗する
    assert!(matches!(err, WatsonRssError::WorkbookNotFound(_)));
}

/// クレデンシャルファイルがない場合は部分的なバインディングを返さない
#[test]
fn test_open_without_credentials() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("rss.xlsx");
    std::fs::write(&path, b"dummy").unwrap();

    let host = WorkbookHost::new(&path);
    assert!(host.active_document().is_ok());

    let loader = FileCredentialLoader::file_only(dir.path().join("creds.json"));
    let result = initialize_bindings(&host, &loader);
    assert!(matches!(result, Err(WatsonRssError::CredentialLoad(_))));
}

/// クレデンシャルを読み込めればバインディングが揃う
#[test]
fn test_open_with_credentials_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("rss.xlsx");
    std::fs::write(&path, b"dummy").unwrap();
    let creds_path = dir.path().join("creds.json");
    std::fs::write(
        &creds_path,
        r#"{"url": "https://example.com/nlc", "username": "u", "password": "p"}"#,
    )
    .unwrap();

    let loader = FileCredentialLoader::file_only(&creds_path);
    assert!(loader.load_creds().is_ok());

    let bindings = initialize_bindings(&WorkbookHost::new(&path), &loader).unwrap();
    assert_eq!(bindings.document.path, Some(PathBuf::from(&path)));
    assert_eq!(bindings.config_set().ss_id, bindings.document_id.as_str());
}

/// WatsonRssErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        WatsonRssError::Config("テスト設定エラー".to_string()),
        WatsonRssError::CredentialLoad("creds.json".to_string()),
        WatsonRssError::WorkbookNotFound("rss.xlsx".to_string()),
        WatsonRssError::Workbook("壊れたファイル".to_string()),
        WatsonRssError::InvalidSetting { row: 3, field: "start_row" },
        WatsonRssError::ExcelGeneration("Excel生成エラー".to_string()),
        WatsonRssError::HandlerNotConfigured("rss-crawl".to_string()),
        WatsonRssError::Host("UIなし".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// MissingCredentialsエラーのメッセージ確認
#[test]
fn test_missing_credentials_message() {
    let display = format!("{}", WatsonRssError::MissingCredentials);
    assert!(display.contains("クレデンシャル"));
    assert!(display.contains("watson-rss config"));
}

/// InvalidSettingは行とフィールドを含む
#[test]
fn test_invalid_setting_message() {
    let err = WatsonRssError::InvalidSetting { row: 5, field: "train_column" };
    let display = format!("{}", err);
    assert!(display.contains("5行目"));
    assert!(display.contains("train_column"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: WatsonRssError = io_err.into();

    assert!(matches!(err, WatsonRssError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: WatsonRssError = json_err.into();

    assert!(matches!(err, WatsonRssError::JsonParse(_)));
}

/// 不明なハンドラ名（common::Error）は透過的に表示
#[test]
fn test_unknown_handler_is_transparent() {
    let common_err = "rss-unknown".parse::<MenuAction>().unwrap_err();
    let err: WatsonRssError = common_err.into();

    assert!(matches!(err, WatsonRssError::Common(_)));
    assert_eq!(format!("{}", err), "Unknown handler: rss-unknown");
}
