//! Table Module
//!
//! ワークブックから読み込んだ授業一覧シートを表形式で保持するモジュール。
//! 空行の除去と、結合セルを埋めるための前方補完（forward fill）を提供します。

use crate::types::CellValue;

static EMPTY_CELL: CellValue = CellValue::Empty;

/// シート上の1行
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// シート上の行番号（1始まり）
    pub row_number: usize,

    /// 列ごとのセル値（ヘッダーと同じ列数）
    pub cells: Vec<CellValue>,
}

impl TableRow {
    /// 列インデックスのセル値（範囲外は空セル）
    pub fn get(&self, col: usize) -> &CellValue {
        self.cells.get(col).unwrap_or(&EMPTY_CELL)
    }

    fn is_blank(&self) -> bool {
        self.cells.iter().all(CellValue::is_missing)
    }
}

/// ヘッダー付きの表
///
/// # 使用例
///
/// ```rust
/// use syllabus_import::{CellValue, SheetTable};
///
/// let mut table = SheetTable::new(
///     vec!["区分".to_string(), "授業科目".to_string()],
///     vec![
///         vec![CellValue::from("専門科目"), CellValue::from("情報処理演習")],
///         vec![CellValue::Empty, CellValue::Empty],
///         vec![CellValue::Empty, CellValue::from("デザイン論")],
///     ],
/// );
/// table.drop_blank_rows();
/// table.forward_fill();
///
/// assert_eq!(table.rows().len(), 2);
/// assert_eq!(table.rows()[1].get(0), &CellValue::from("専門科目"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    headers: Vec<String>,
    rows: Vec<TableRow>,
}

impl SheetTable {
    /// ヘッダーと本文行から表を生成（行番号は1から振る）
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self::with_first_row_number(headers, rows, 1)
    }

    /// 本文の先頭行のシート上の行番号を指定して表を生成
    ///
    /// 各行はヘッダーと同じ列数になるよう空セルで補われます。
    pub fn with_first_row_number(
        headers: Vec<String>,
        rows: Vec<Vec<CellValue>>,
        first_row_number: usize,
    ) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(idx, mut cells)| {
                if cells.len() < width {
                    cells.resize(width, CellValue::Empty);
                }
                TableRow {
                    row_number: first_row_number + idx,
                    cells,
                }
            })
            .collect();

        Self { headers, rows }
    }

    /// ヘッダー名のリスト
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// 本文行
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// ヘッダー名に完全一致する列のインデックス
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// すべてのセルが欠損している行を除去する
    pub fn drop_blank_rows(&mut self) {
        self.rows.retain(|row| !row.is_blank());
    }

    /// 欠損セルを同じ列の直前の値で埋める
    ///
    /// 結合セルは先頭セルのみに値を持つため、残りのセルへ値を伝播させます。
    /// 上に値のない空セルは空のままです。
    pub fn forward_fill(&mut self) {
        let mut last_values: Vec<Option<CellValue>> = vec![None; self.headers.len()];

        for row in &mut self.rows {
            if row.cells.len() > last_values.len() {
                last_values.resize(row.cells.len(), None);
            }

            for (cell, last) in row.cells.iter_mut().zip(last_values.iter_mut()) {
                if cell.is_missing() {
                    if let Some(value) = last {
                        *cell = value.clone();
                    }
                } else {
                    *last = Some(cell.clone());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::from(s)
    }

    fn sample_table() -> SheetTable {
        SheetTable::new(
            vec!["区分".to_string(), "授業科目".to_string(), "曜時限".to_string()],
            vec![
                vec![text("専門科目"), text("情報処理演習"), text("月3")],
                vec![CellValue::Empty, text("デザイン論"), CellValue::Empty],
                vec![CellValue::Empty, CellValue::Empty, CellValue::Empty],
                vec![text("共通科目"), text("英語"), text("火1")],
            ],
        )
    }

    #[test]
    fn test_new_assigns_row_numbers() {
        let table = SheetTable::with_first_row_number(
            vec!["A".to_string()],
            vec![vec![text("x")], vec![text("y")]],
            7,
        );
        assert_eq!(table.rows()[0].row_number, 7);
        assert_eq!(table.rows()[1].row_number, 8);
    }

    #[test]
    fn test_short_rows_are_padded() {
        let table = SheetTable::new(
            vec!["A".to_string(), "B".to_string()],
            vec![vec![text("x")]],
        );
        assert_eq!(table.rows()[0].cells.len(), 2);
        assert_eq!(table.rows()[0].get(1), &CellValue::Empty);
        assert_eq!(table.rows()[0].get(5), &CellValue::Empty);
    }

    #[test]
    fn test_column_index() {
        let table = sample_table();
        assert_eq!(table.column_index("授業科目"), Some(1));
        assert_eq!(table.column_index("担当教員"), None);
    }

    #[test]
    fn test_drop_blank_rows() {
        let mut table = sample_table();
        table.drop_blank_rows();
        assert_eq!(table.rows().len(), 3);
        assert_eq!(table.rows()[2].row_number, 4);
    }

    #[test]
    fn test_whitespace_only_row_is_kept() {
        let mut table = SheetTable::new(
            vec!["A".to_string(), "B".to_string()],
            vec![
                vec![text(" "), CellValue::Empty],
                vec![CellValue::Number(f64::NAN), CellValue::Empty],
            ],
        );
        table.drop_blank_rows();
        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.rows()[0].get(0), &text(" "));
    }

    #[test]
    fn test_forward_fill() {
        let mut table = sample_table();
        table.drop_blank_rows();
        table.forward_fill();

        let rows = table.rows();
        assert_eq!(rows[1].get(0), &text("専門科目"));
        assert_eq!(rows[1].get(1), &text("デザイン論"));
        assert_eq!(rows[1].get(2), &text("月3"));
        assert_eq!(rows[2].get(0), &text("共通科目"));
    }

    #[test]
    fn test_forward_fill_without_previous_value() {
        let mut table = SheetTable::new(
            vec!["A".to_string(), "B".to_string()],
            vec![vec![CellValue::Empty, text("x")], vec![text("a"), CellValue::Empty]],
        );
        table.forward_fill();
        assert_eq!(table.rows()[0].get(0), &CellValue::Empty);
        assert_eq!(table.rows()[1].get(1), &text("x"));
    }
}
