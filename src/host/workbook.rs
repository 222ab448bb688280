//! ローカルのxlsxファイルをドキュメントとして扱うホスト
//!
//! ドキュメントIDは正規化パスのSHA-256（先頭32桁）。
//! 同じファイルに対しては何度呼んでも同じIDになる。

use super::{DocumentHandle, DocumentId, Host};
use crate::error::{Result, WatsonRssError};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use watson_rss_common::Menu;

const DOCUMENT_ID_LEN: usize = 32;
const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

pub struct WorkbookHost {
    path: PathBuf,
    menus: Vec<Menu>,
}

impl WorkbookHost {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            menus: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 追加済みメニュー
    pub fn menus(&self) -> &[Menu] {
        &self.menus
    }
}

/// パスからドキュメントIDを導出
pub(crate) fn document_id_for(path: &Path) -> Result<DocumentId> {
    let canonical = path.canonicalize()?;
    let digest = Sha256::digest(canonical.to_string_lossy().as_bytes());
    let mut id = hex::encode(digest);
    id.truncate(DOCUMENT_ID_LEN);
    Ok(DocumentId::new(id))
}

impl Host for WorkbookHost {
    fn active_document(&self) -> Result<DocumentHandle> {
        if !self.path.is_file() {
            return Err(WatsonRssError::WorkbookNotFound(self.path.display().to_string()));
        }

        let supported = self
            .path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| WORKBOOK_EXTENSIONS.contains(&ext.as_str()));
        if !supported {
            return Err(WatsonRssError::Host(format!(
                "スプレッドシートではありません: {}",
                self.path.display()
            )));
        }

        let id = document_id_for(&self.path)?;
        Ok(DocumentHandle::new(id, Some(self.path.clone())))
    }

    fn add_menu(&mut self, menu: &Menu) -> Result<()> {
        // 同じタイトルのメニューは置き換える
        self.menus.retain(|m| m.title != menu.title);
        self.menus.push(menu.clone());
        tracing::info!(title = %menu.title, entries = menu.entries.len(), "menu added");
        Ok(())
    }
}
