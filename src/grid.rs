//! Grid Module
//!
//! Markdownテーブルとして出力するための文字列グリッドを提供するモジュール。

use std::io::Write;

use unicode_width::UnicodeWidthStr;

use crate::error::CourseImportError;

/// Markdown特殊文字をエスケープ
///
/// バックスラッシュとパイプをエスケープし、改行は`<br>`に置き換えます。
pub(crate) fn escape_markdown(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('|', "\\|")
        .replace('\n', "<br>")
}

/// ヘッダー行と本文行からなる文字列グリッド
#[derive(Debug, Clone)]
pub(crate) struct TextGrid {
    /// グリッドデータ（先頭行がヘッダー）
    cells: Vec<Vec<String>>,

    /// 列数
    cols: usize,
}

impl TextGrid {
    /// ヘッダーと本文行からグリッドを構築
    ///
    /// セル内容はエスケープ済みの状態で保持します。列数が足りない行は空文字列で補います。
    pub fn new<H, R>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: AsRef<str>,
        R: IntoIterator<Item = Vec<String>>,
    {
        let header: Vec<String> = headers
            .into_iter()
            .map(|h| escape_markdown(h.as_ref()))
            .collect();
        let cols = header.len();

        let mut cells = vec![header];
        for row in rows {
            let mut row: Vec<String> = row.iter().map(|c| escape_markdown(c)).collect();
            row.resize(cols, String::new());
            cells.push(row);
        }

        Self { cells, cols }
    }

    /// Markdownテーブルとして出力
    ///
    /// # 引数
    ///
    /// * `writer` - 出力先のライター
    ///
    /// # 戻り値
    ///
    /// * `Ok(())` - 出力に成功した場合
    /// * `Err(CourseImportError)` - 書き込みに失敗した場合
    pub fn render_markdown<W: Write>(&self, writer: &mut W) -> Result<(), CourseImportError> {
        if self.cols == 0 {
            return Ok(());
        }

        let col_widths = self.calculate_column_widths();
        let separator = self.generate_separator(&col_widths);

        for (row_idx, row) in self.cells.iter().enumerate() {
            write!(writer, "|")?;

            for (col_idx, cell) in row.iter().enumerate() {
                let width = col_widths[col_idx];
                let content = cell.trim();
                // 全角文字は表示幅2
                let content_width = content.width();

                write!(writer, " {}", content)?;
                if content_width < width {
                    write!(writer, "{}", " ".repeat(width - content_width))?;
                }
                write!(writer, " |")?;
            }

            writeln!(writer)?;

            if row_idx == 0 {
                writeln!(writer, "{}", separator)?;
            }
        }

        Ok(())
    }

    /// 列ごとの最大表示幅（最小3）
    fn calculate_column_widths(&self) -> Vec<usize> {
        let mut widths = vec![3; self.cols];

        for row in &self.cells {
            for (col_idx, cell) in row.iter().enumerate() {
                widths[col_idx] = widths[col_idx].max(cell.trim().width());
            }
        }

        widths
    }

    /// ヘッダー区切り行（セル前後の空白を含めた幅のハイフン）
    fn generate_separator(&self, col_widths: &[usize]) -> String {
        let mut separator = String::from("|");

        for &width in col_widths {
            separator.push_str(&"-".repeat(width + 2));
            separator.push('|');
        }

        separator
    }
}
