//! 起動時バインディング
//!
//! アクティブなドキュメント・そのID・クレデンシャルを一度だけ取得し、
//! 各ハンドラへ明示的に渡す。

use crate::credentials::{CredentialLoader, Credentials};
use crate::error::Result;
use crate::host::{DocumentHandle, DocumentId, Host};
use watson_rss_common::ConfigSet;

/// 起動時に確定する値（以降変更しない）
#[derive(Debug, Clone)]
pub struct Bindings {
    /// バインドされているドキュメント
    pub document: DocumentHandle,
    /// ドキュメントID
    pub document_id: DocumentId,
    /// クレデンシャル情報
    pub credentials: Credentials,
}

impl Bindings {
    /// ドキュメントIDと結びついた設定メタデータ
    pub fn config_set(&self) -> ConfigSet {
        ConfigSet::new(self.document_id.as_str())
    }
}

/// バインディングを初期化
///
/// クレデンシャルローダーは1回だけ呼ぶ（再試行なし）。
/// どこかで失敗した場合は何も返さずエラーをそのまま返す。
pub fn initialize_bindings<H, L>(host: &H, loader: &L) -> Result<Bindings>
where
    H: Host + ?Sized,
    L: CredentialLoader + ?Sized,
{
    let document = host.active_document()?;
    let document_id = document.id().clone();
    let credentials = loader.load_creds()?;

    tracing::info!(document_id = %document_id, "bindings initialized");

    Ok(Bindings {
        document,
        document_id,
        credentials,
    })
}
