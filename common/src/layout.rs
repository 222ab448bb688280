//! 設定シートレイアウト
//!
//! 設定シートの1行は「分類対象シート1つ分の定義」であり、
//! 各フィールドは定義開始列からのオフセットで配置される。
//! オフセット表 ([`FieldIndex`]) と各領域の開始位置 ([`SheetLayout`]) は
//! どちらもコンパイル時定数で、起動後に変化しない。

use crate::slot::{ClassifierColumns, ClassifierSlot};
use serde::{Deserialize, Serialize};

/// 設定シートフィールドインデックス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIndex {
    /// シート名
    pub ws_name: usize,
    /// 定義開始列
    pub start_col: usize,
    /// 定義開始行
    pub start_row: usize,
    /// 学習テキスト選択列
    pub train_column: usize,
    /// インテント列1
    pub intent1_col: usize,
    /// 分類結果列1
    pub result1_col: usize,
    /// 確信度列1
    pub resconf1_col: usize,
    /// 分類日時列1
    pub restime1_col: usize,
    /// インテント列2
    pub intent2_col: usize,
    /// 分類結果列2
    pub result2_col: usize,
    /// 確信度列2
    pub resconf2_col: usize,
    /// 分類日時列2
    pub restime2_col: usize,
    /// インテント列3
    pub intent3_col: usize,
    /// 分類結果列3
    pub result3_col: usize,
    /// 確信度列3
    pub resconf3_col: usize,
    /// 分類日時列3
    pub restime3_col: usize,
    /// ログシート名
    pub log_ws: usize,
    /// 通知オプション
    pub notif_opt: usize,
    /// 通知設定シート名
    pub notif_ws: usize,
}

/// フィールド数
pub const FIELD_COUNT: usize = 19;

pub const FIELD_INDEX: FieldIndex = FieldIndex {
    ws_name: 0,
    start_col: 1,
    start_row: 2,
    train_column: 3,
    intent1_col: 4,
    result1_col: 5,
    resconf1_col: 6,
    restime1_col: 7,
    intent2_col: 8,
    result2_col: 9,
    resconf2_col: 10,
    restime2_col: 11,
    intent3_col: 12,
    result3_col: 13,
    resconf3_col: 14,
    restime3_col: 15,
    log_ws: 16,
    notif_opt: 17,
    notif_ws: 18,
};

/// フィールドインデックスを取得
pub fn load_field_index() -> FieldIndex {
    FIELD_INDEX
}

impl FieldIndex {
    /// (フィールド名, オフセット) の一覧（定義順）
    pub fn entries(&self) -> [(&'static str, usize); FIELD_COUNT] {
        [
            ("ws_name", self.ws_name),
            ("start_col", self.start_col),
            ("start_row", self.start_row),
            ("train_column", self.train_column),
            ("intent1_col", self.intent1_col),
            ("result1_col", self.result1_col),
            ("resconf1_col", self.resconf1_col),
            ("restime1_col", self.restime1_col),
            ("intent2_col", self.intent2_col),
            ("result2_col", self.result2_col),
            ("resconf2_col", self.resconf2_col),
            ("restime2_col", self.restime2_col),
            ("intent3_col", self.intent3_col),
            ("result3_col", self.result3_col),
            ("resconf3_col", self.resconf3_col),
            ("restime3_col", self.restime3_col),
            ("log_ws", self.log_ws),
            ("notif_opt", self.notif_opt),
            ("notif_ws", self.notif_ws),
        ]
    }

    /// 指定スロットの インテント/結果/確信度/日時 列
    pub fn classifier_columns(&self, slot: ClassifierSlot) -> ClassifierColumns {
        match slot {
            ClassifierSlot::One => ClassifierColumns {
                intent: self.intent1_col,
                result: self.result1_col,
                confidence: self.resconf1_col,
                timestamp: self.restime1_col,
            },
            ClassifierSlot::Two => ClassifierColumns {
                intent: self.intent2_col,
                result: self.result2_col,
                confidence: self.resconf2_col,
                timestamp: self.restime2_col,
            },
            ClassifierSlot::Three => ClassifierColumns {
                intent: self.intent3_col,
                result: self.result3_col,
                confidence: self.resconf3_col,
                timestamp: self.restime3_col,
            },
        }
    }

    /// 1行に必要な列数
    pub fn width(&self) -> usize {
        self.entries().iter().map(|(_, offset)| offset + 1).max().unwrap_or(0)
    }
}

/// フィールドの見出し（テンプレート出力用）
pub fn field_label(name: &str) -> &'static str {
    match name {
        "ws_name" => "シート名",
        "start_col" => "定義開始列",
        "start_row" => "定義開始行",
        "train_column" => "学習テキスト選択列",
        "intent1_col" => "インテント列1",
        "result1_col" => "分類結果列1",
        "resconf1_col" => "確信度列1",
        "restime1_col" => "分類日時列1",
        "intent2_col" => "インテント列2",
        "result2_col" => "分類結果列2",
        "resconf2_col" => "確信度列2",
        "restime2_col" => "分類日時列2",
        "intent3_col" => "インテント列3",
        "result3_col" => "分類結果列3",
        "resconf3_col" => "確信度列3",
        "restime3_col" => "分類日時列3",
        "log_ws" => "ログシート名",
        "notif_opt" => "通知オプション",
        "notif_ws" => "通知設定シート名",
        _ => "-",
    }
}

/// 設定メタデータ（各領域の開始位置、行・列とも1始まり）
///
/// `rss_start_row` / `rss_start_col` は用途の定義がないまま保持している。
/// `st_start_*` と同じ意味だとはみなさないこと。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SheetLayout {
    /// 設定シート名
    pub ws_name: &'static str,
    /// 設定シート定義開始行
    pub st_start_row: u32,
    /// 設定シート定義開始列
    pub st_start_col: u32,
    pub rss_start_row: u32,
    pub rss_start_col: u32,
    /// 通知設定定義開始行
    pub notif_start_row: u32,
    /// 通知設定定義開始列
    pub notif_start_col: u32,
    /// 分類結果上書きオプション
    pub result_override: bool,
    /// 分類器表示開始列
    pub clfs_start_col: u32,
    /// 分類器表示開始行
    pub clfs_start_row: u32,
    /// ログ開始列
    pub log_start_col: u32,
    /// ログ開始行
    pub log_start_row: u32,
}

pub const SHEET_LAYOUT: SheetLayout = SheetLayout {
    ws_name: "設定",
    st_start_row: 2,
    st_start_col: 2,
    rss_start_row: 3,
    rss_start_col: 5,
    notif_start_row: 2,
    notif_start_col: 1,
    result_override: false,
    clfs_start_col: 9,
    clfs_start_row: 3,
    log_start_col: 1,
    log_start_row: 2,
};

/// 設定メタデータを取得
pub fn load_configuration() -> SheetLayout {
    SHEET_LAYOUT
}

/// スプレッドシートIDと結びついた設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigSet {
    /// スプレッドシートID
    pub ss_id: String,
    #[serde(flatten)]
    pub layout: SheetLayout,
}

impl ConfigSet {
    pub fn new(ss_id: impl Into<String>) -> Self {
        Self {
            ss_id: ss_id.into(),
            layout: load_configuration(),
        }
    }
}
