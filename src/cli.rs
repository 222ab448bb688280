use crate::logging::LogFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "watson-rss")]
#[command(about = "RSS分類ワークブックの設定・メニュー登録ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力（-vv でさらに詳細）
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// ログ形式 (pretty/compact/json)
    #[arg(long, default_value = "pretty", global = true)]
    pub log_format: LogFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Watsonメニューを表示
    Menu {
        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 設定シートのレイアウト（フィールドインデックスと設定値）を表示
    Layout {
        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// ワークブックを開く（メニュー登録と分類器チェック）
    Open {
        /// 対象ワークブック (.xlsx)
        #[arg(required = true)]
        workbook: PathBuf,
    },

    /// メニュー項目を実行
    Run {
        /// ハンドラ名 (rss-crawl/rss-classify-all/rss-train-all/classifier-N-delete)
        #[arg(required = true)]
        action: String,

        /// 対象ワークブック (.xlsx)
        #[arg(required = true)]
        workbook: PathBuf,
    },

    /// 設定シートの内容を表示
    Settings {
        /// 対象ワークブック (.xlsx)
        #[arg(required = true)]
        workbook: PathBuf,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 設定シートのテンプレートを出力
    Template {
        /// 出力ファイル
        #[arg(default_value = "watson-rss-template.xlsx")]
        output: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// クレデンシャルファイル（JSON）を設定
        #[arg(long)]
        set_credentials: Option<PathBuf>,

        /// ハンドラのコマンドを設定 (NAME=COMMAND ARGS...)
        #[arg(long)]
        set_handler: Vec<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
