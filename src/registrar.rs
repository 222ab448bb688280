//! オープン時処理とメニューディスパッチ

use crate::context::Bindings;
use crate::error::Result;
use crate::handlers::Handlers;
use crate::host::Host;
use watson_rss_common::{watson_menu, MenuAction};

/// オープン時処理
///
/// Watsonメニューを組み立ててホストに追加し、その後に分類器チェックを1回実行する。
/// 何度呼んでも同じメニューが登録される。
pub fn on_open<H, X>(host: &mut H, bindings: &Bindings, handlers: &mut X) -> Result<()>
where
    H: Host + ?Sized,
    X: Handlers + ?Sized,
{
    let menu = watson_menu();
    host.add_menu(&menu)?;
    tracing::debug!(document_id = %bindings.document_id, "menu registered");

    handlers.check_classifiers(bindings)
}

/// 選択されたメニュー項目を実行
pub fn dispatch<X>(action: MenuAction, bindings: &Bindings, handlers: &mut X) -> Result<()>
where
    X: Handlers + ?Sized,
{
    tracing::info!(action = %action, label = %action.label(), "dispatch");
    handlers.invoke(action, bindings)
}
