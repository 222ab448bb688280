//! メニューから呼ばれる外部処理
//!
//! 取得・分類・学習・削除・分類器チェックの実体はこのクレートの外にある。
//! ここでは呼び出し口だけを定義する。

mod command;

pub use command::CommandHandlers;

use crate::context::Bindings;
use crate::error::Result;
use watson_rss_common::MenuAction;

/// 外部処理の呼び出し口
pub trait Handlers {
    /// メニュー項目に対応する処理を実行
    fn invoke(&mut self, action: MenuAction, bindings: &Bindings) -> Result<()>;

    /// 分類器の存在・状態チェック
    fn check_classifiers(&mut self, bindings: &Bindings) -> Result<()>;
}
