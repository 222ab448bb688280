//! ホスト（スプレッドシート実行環境）との境界
//!
//! ホストはアクティブなドキュメントを返し、登録されたメニューをUIに表示する。

mod workbook;

pub use workbook::WorkbookHost;

use crate::error::Result;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use watson_rss_common::Menu;

/// ドキュメント（スプレッドシート）ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// バインドされているドキュメント
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHandle {
    id: DocumentId,
    /// ローカルファイルの場合のパス
    pub path: Option<PathBuf>,
}

impl DocumentHandle {
    pub fn new(id: DocumentId, path: Option<PathBuf>) -> Self {
        Self { id, path }
    }

    /// ドキュメントID（ハンドルから導出、読み取り専用）
    pub fn id(&self) -> &DocumentId {
        &self.id
    }
}

/// ホスト実行環境
pub trait Host {
    /// アクティブなドキュメントを取得
    fn active_document(&self) -> Result<DocumentHandle>;

    /// メニューをUIに追加
    fn add_menu(&mut self, menu: &Menu) -> Result<()>;
}
