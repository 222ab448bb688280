use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatsonRssError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("クレデンシャルの読み込みに失敗: {0}")]
    CredentialLoad(String),

    #[error("クレデンシャルファイルが設定されていません。`watson-rss config --set-credentials PATH` で設定してください")]
    MissingCredentials,

    #[error("ワークブックが見つかりません: {0}")]
    WorkbookNotFound(String),

    #[error("ワークブック読み込みエラー: {0}")]
    Workbook(String),

    #[error("設定シートの値が不正です（{row}行目 {field}）")]
    InvalidSetting { row: u32, field: &'static str },

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("ハンドラが設定されていません: {0}")]
    HandlerNotConfigured(String),

    #[error("ハンドラ実行エラー ({name}): {message}")]
    HandlerFailed { name: String, message: String },

    #[error("ホストエラー: {0}")]
    Host(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] watson_rss_common::Error),
}

impl From<calamine::Error> for WatsonRssError {
    fn from(e: calamine::Error) -> Self {
        WatsonRssError::Workbook(e.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for WatsonRssError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        WatsonRssError::ExcelGeneration(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WatsonRssError>;
