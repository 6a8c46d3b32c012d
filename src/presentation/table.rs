// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::data_table::DataTable;

const MAX_CELL_WIDTH: usize = 30;

/// 以固定宽度渲染数据表
///
/// 每列宽度取表头与单元格的最大显示宽度，超过上限的值被截断
pub fn render(table: &DataTable) -> String {
    let widths: Vec<usize> = table
        .headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let cells = table.rows.iter().filter_map(|row| row.get(i));
            cells
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
                .min(MAX_CELL_WIDTH)
        })
        .collect();

    let mut out = String::new();
    out.push_str(&render_row(&table.headers, &widths));
    out.push('\n');
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&separator.join("-+-"));
    out.push('\n');
    for row in &table.rows {
        out.push_str(&render_row(row, &widths));
        out.push('\n');
    }
    out
}

fn render_row(row: &[String], widths: &[usize]) -> String {
    let cells: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, width)| fit(row.get(i).map(String::as_str).unwrap_or(""), *width))
        .collect();
    cells.join(" | ")
}

// Character-based truncation keeps Cyrillic values intact.
fn fit(value: &str, width: usize) -> String {
    let mut out: String = value.chars().take(width).collect();
    let pad = width.saturating_sub(out.chars().count());
    out.push_str(&" ".repeat(pad));
    out
}
