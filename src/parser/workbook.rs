//! Workbook Parser
//!
//! calamineのラッパーとして、シート選択とセル値の抽出を提供します。

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader, Sheets, Xlsx};
use std::io::{Cursor, Read};
use tracing::debug;

use crate::api::SheetSelector;
use crate::error::CourseImportError;
use crate::security::SecurityConfig;
use crate::table::SheetTable;
use crate::types::CellValue;

/// ワークブックパーサー
///
/// 入力全体をメモリに読み込み、XLSX形式のワークブックとして開きます。
pub(crate) struct WorkbookParser {
    /// calamineのワークブック（XLSX形式のみサポート）
    workbook: Xlsx<Cursor<Vec<u8>>>,
}

impl WorkbookParser {
    /// ワークブックを開く
    ///
    /// # 引数
    ///
    /// * `reader` - Excelファイルを読み込むためのリーダー
    /// * `security` - 入力サイズの上限などのセキュリティ設定
    ///
    /// # 戻り値
    ///
    /// * `Ok(WorkbookParser)` - ワークブックの読み込みに成功した場合
    /// * `Err(CourseImportError::SecurityViolation)` - 入力サイズが上限を超えた場合
    /// * `Err(CourseImportError::Parse)` - ワークブックの解析に失敗した場合
    /// * `Err(CourseImportError::Config)` - XLSX形式でない場合
    pub fn open<R: Read>(
        mut reader: R,
        security: &SecurityConfig,
    ) -> Result<Self, CourseImportError> {
        let mut buffer = Vec::new();
        let bytes_read = reader.read_to_end(&mut buffer)?;
        security.check_input_size(bytes_read as u64)?;

        let sheets = open_workbook_auto_from_rs(Cursor::new(buffer))?;
        match sheets {
            Sheets::Xlsx(workbook) => Ok(Self { workbook }),
            _ => Err(CourseImportError::Config(
                "Only XLSX format is supported".to_string(),
            )),
        }
    }

    /// すべてのシート名を取得
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names().to_vec()
    }

    /// シート選択方式に基づいてシート名を解決
    ///
    /// # 戻り値
    ///
    /// * `Ok(String)` - 選択されたシート名
    /// * `Err(CourseImportError::Config)` - シートが見つからない、またはインデックスが範囲外の場合
    pub fn resolve_sheet(&self, selector: &SheetSelector) -> Result<String, CourseImportError> {
        let all_sheet_names = self.sheet_names();

        match selector {
            SheetSelector::Index(index) => {
                all_sheet_names.get(*index).cloned().ok_or_else(|| {
                    CourseImportError::Config(format!(
                        "Sheet index {} is out of range (total: {})",
                        index,
                        all_sheet_names.len()
                    ))
                })
            }
            SheetSelector::Name(name) => {
                if !all_sheet_names.contains(name) {
                    return Err(CourseImportError::Config(format!(
                        "Sheet '{}' not found",
                        name
                    )));
                }
                Ok(name.clone())
            }
        }
    }

    /// シートを読み込み、ヘッダー行とその下の行を`SheetTable`として返す
    ///
    /// # 引数
    ///
    /// * `sheet_name` - 読み込むシート名
    /// * `header_row` - ヘッダー行のインデックス（0始まり、シート上の絶対位置）
    ///
    /// # 戻り値
    ///
    /// * `Ok(SheetTable)` - ヘッダーと本文行（列数はシートの使用範囲に揃える）
    /// * `Err(CourseImportError::Config)` - ヘッダー行がシートの使用範囲外の場合
    pub fn read_table(
        &mut self,
        sheet_name: &str,
        header_row: u32,
    ) -> Result<SheetTable, CourseImportError> {
        let range = self
            .workbook
            .worksheet_range(sheet_name)
            .map_err(|e| CourseImportError::Parse(e.into()))?;

        let (last_row, last_col) = match range.end() {
            Some(end) if end.0 >= header_row => end,
            _ => {
                return Err(CourseImportError::Config(format!(
                    "Header row {} is outside the used range of sheet '{}'",
                    header_row, sheet_name
                )))
            }
        };

        let headers: Vec<String> = (0..=last_col)
            .map(|col| Self::cell_value(&range, header_row, col).as_raw_string())
            .collect();

        let rows: Vec<Vec<CellValue>> = (header_row + 1..=last_row)
            .map(|row| {
                (0..=last_col)
                    .map(|col| Self::cell_value(&range, row, col))
                    .collect()
            })
            .collect();

        debug!(
            sheet = sheet_name,
            columns = headers.len(),
            rows = rows.len(),
            "read course listing sheet"
        );

        // 本文の先頭行はシート上で header_row + 2 行目（1始まり）
        Ok(SheetTable::with_first_row_number(
            headers,
            rows,
            header_row as usize + 2,
        ))
    }

    /// 絶対座標のセル値を取得（使用範囲外は空セル）
    fn cell_value(range: &Range<Data>, row: u32, col: u32) -> CellValue {
        match range.get_value((row, col)) {
            Some(Data::Int(i)) => CellValue::Number(*i as f64),
            Some(Data::Float(f)) => CellValue::Number(*f),
            Some(Data::String(s)) => CellValue::Text(s.clone()),
            Some(Data::Bool(b)) => CellValue::Bool(*b),
            Some(Data::Error(e)) => CellValue::Error(format!("{:?}", e)),
            Some(Data::DateTime(dt)) => CellValue::Number(dt.as_f64()),
            Some(Data::DateTimeIso(s)) | Some(Data::DurationIso(s)) => CellValue::Text(s.clone()),
            _ => CellValue::Empty,
        }
    }
}

// 実際のXLSXファイルが必要なため、テストは統合テスト（tests/）で実装します。
