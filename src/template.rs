//! 設定シートのテンプレート出力
//!
//! 定義開始行の1行上に見出しを書き、列は [`FieldIndex`] のオフセットに揃える。

use crate::error::Result;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook};
use std::path::Path;
use watson_rss_common::{field_label, FieldIndex, SheetLayout};

const HEADER_COL_WIDTH: f64 = 16.0;

/// 見出し行の行番号（0始まり）
pub fn header_row(layout: &SheetLayout) -> u32 {
    layout.st_start_row.saturating_sub(2)
}

/// テンプレートをバッファに生成
pub fn template_buffer(layout: &SheetLayout, index: &FieldIndex) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(layout.ws_name)?;

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xDDEBF7))
        .set_border(FormatBorder::Thin);

    let row = header_row(layout);
    let first_col = layout.st_start_col.saturating_sub(1);

    for (name, offset) in index.entries() {
        let col = (first_col as usize + offset) as u16;
        worksheet.write_string_with_format(row, col, field_label(name), &header_format)?;
        worksheet.set_column_width(col, HEADER_COL_WIDTH)?;
    }

    Ok(workbook.save_to_buffer()?)
}

/// テンプレートをファイルに保存
pub fn write_template(path: &Path, layout: &SheetLayout, index: &FieldIndex) -> Result<()> {
    let buffer = template_buffer(layout, index)?;
    std::fs::write(path, buffer)?;
    tracing::info!(path = %path.display(), "template written");
    Ok(())
}
