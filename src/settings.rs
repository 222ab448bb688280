//! 設定シートの読み込み
//!
//! 設定シートの定義開始位置から1行ずつ読み、
//! [`FieldIndex`] のオフセットで各フィールドを取り出す。
//! シート名セルが空の行で表は終わる。

use crate::error::{Result, WatsonRssError};
use calamine::{open_workbook_auto, Data, Range, Reader};
use serde::Serialize;
use std::path::Path;
use watson_rss_common::{ClassifierSlot, FieldIndex, SheetLayout};

/// 分類器1つ分の列設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotSetting {
    pub slot: ClassifierSlot,
    pub intent_col: u32,
    pub result_col: u32,
    pub confidence_col: u32,
    pub timestamp_col: u32,
}

/// 設定シート1行分（分類対象シート1つ分）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifierSetting {
    /// 設定シート上の行番号（1始まり）
    pub row: u32,
    pub ws_name: String,
    pub start_col: u32,
    pub start_row: u32,
    pub train_column: u32,
    /// 使用中の分類器（インテント列が空のスロットは含まない）
    pub slots: Vec<SlotSetting>,
    pub log_ws: Option<String>,
    pub notif_opt: bool,
    pub notif_ws: Option<String>,
}

/// ワークブックから設定シートを読み込む
pub fn read_settings(
    path: &Path,
    layout: &SheetLayout,
    index: &FieldIndex,
) -> Result<Vec<ClassifierSetting>> {
    if !path.is_file() {
        return Err(WatsonRssError::WorkbookNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path)?;
    let range = workbook.worksheet_range(layout.ws_name)?;
    parse_settings(&range, layout, index)
}

/// セル範囲から設定行を取り出す
pub fn parse_settings(
    range: &Range<Data>,
    layout: &SheetLayout,
    index: &FieldIndex,
) -> Result<Vec<ClassifierSetting>> {
    let Some((last_row, _)) = range.end() else {
        return Ok(Vec::new());
    };

    let first_row = layout.st_start_row.saturating_sub(1);
    let first_col = layout.st_start_col.saturating_sub(1);
    let mut settings = Vec::new();

    for row in first_row..=last_row {
        let cell = move |offset: usize| range.get_value((row, first_col + offset as u32));
        let sheet_row = row + 1;

        let Some(ws_name) = text(cell(index.ws_name)) else {
            break;
        };

        let number = move |offset: usize, field: &'static str| {
            column_number(cell(offset)).ok_or(WatsonRssError::InvalidSetting { row: sheet_row, field })
        };
        let row_number = move |offset: usize, field: &'static str| {
            positive_integer(cell(offset)).ok_or(WatsonRssError::InvalidSetting { row: sheet_row, field })
        };

        let mut slots = Vec::new();
        for slot in ClassifierSlot::ALL {
            let cols = index.classifier_columns(slot);
            if is_blank(cell(cols.intent)) {
                continue;
            }
            slots.push(SlotSetting {
                slot,
                intent_col: number(cols.intent, "intent_col")?,
                result_col: number(cols.result, "result_col")?,
                confidence_col: number(cols.confidence, "resconf_col")?,
                timestamp_col: number(cols.timestamp, "restime_col")?,
            });
        }

        let notif_opt = flag(cell(index.notif_opt)).ok_or(WatsonRssError::InvalidSetting {
            row: sheet_row,
            field: "notif_opt",
        })?;

        settings.push(ClassifierSetting {
            row: sheet_row,
            ws_name,
            start_col: number(index.start_col, "start_col")?,
            start_row: row_number(index.start_row, "start_row")?,
            train_column: number(index.train_column, "train_column")?,
            slots,
            log_ws: text(cell(index.log_ws)),
            notif_opt,
            notif_ws: text(cell(index.notif_ws)),
        });
    }

    tracing::debug!(rows = settings.len(), "settings parsed");
    Ok(settings)
}

fn is_blank(cell: Option<&Data>) -> bool {
    match cell {
        None | Some(Data::Empty) => true,
        Some(Data::String(s)) => s.trim().is_empty(),
        _ => false,
    }
}

/// 空でない文字列セル
fn text(cell: Option<&Data>) -> Option<String> {
    match cell? {
        Data::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Data::Int(n) => Some(n.to_string()),
        Data::Float(f) => Some(f.to_string()),
        _ => None,
    }
}

/// 行番号（1以上の整数）
fn positive_integer(cell: Option<&Data>) -> Option<u32> {
    match cell? {
        Data::Int(n) if *n >= 1 => u32::try_from(*n).ok(),
        Data::Float(f) if *f >= 1.0 && f.fract() == 0.0 && *f <= u32::MAX as f64 => Some(*f as u32),
        Data::String(s) => s.trim().parse::<u32>().ok().filter(|n| *n >= 1),
        _ => None,
    }
}

/// 列番号（1以上の整数、または列記号 "A".."ZZ" 等）
fn column_number(cell: Option<&Data>) -> Option<u32> {
    positive_integer(cell).or_else(|| match cell? {
        Data::String(s) => column_letters(s.trim()),
        _ => None,
    })
}

/// "A" → 1, "Z" → 26, "AA" → 27
fn column_letters(s: &str) -> Option<u32> {
    if s.is_empty() || s.len() > 3 {
        return None;
    }
    s.chars().try_fold(0u32, |acc, c| {
        let c = c.to_ascii_uppercase();
        c.is_ascii_uppercase()
            .then(|| acc * 26 + (c as u32 - 'A' as u32 + 1))
    })
}

/// 真偽値セル（空はfalse）
fn flag(cell: Option<&Data>) -> Option<bool> {
    match cell {
        None | Some(Data::Empty) => Some(false),
        Some(Data::Bool(b)) => Some(*b),
        Some(Data::Int(n)) => Some(*n != 0),
        Some(Data::Float(f)) => Some(*f != 0.0),
        Some(Data::String(s)) => match s.trim().to_lowercase().as_str() {
            "" | "false" | "off" | "no" | "0" => Some(false),
            "true" | "on" | "yes" | "1" => Some(true),
            _ => None,
        },
        _ => None,
    }
}
