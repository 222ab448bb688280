//! RSS分類ワークブックの設定・メニュー登録
//!
//! レイアウト定義とメニュー定義は `watson_rss_common` にあり、
//! このクレートは起動時バインディング・オープン時処理・外部ハンドラ呼び出しを担う。

pub mod cli;
pub mod config;
pub mod context;
pub mod credentials;
pub mod error;
pub mod handlers;
pub mod host;
pub mod logging;
pub mod registrar;
pub mod settings;
pub mod template;

pub use context::{initialize_bindings, Bindings};
pub use registrar::{dispatch, on_open};
