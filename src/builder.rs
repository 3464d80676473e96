//! Builder Module
//!
//! Fluent Builder APIを提供し、`Importer`インスタンスを段階的に構築する。

use crate::api::{OutputFormat, SheetSelector};
use crate::catalog::Catalog;
use crate::error::CourseImportError;
use crate::mapper::{ColumnMap, MappedRow, RowMapper};
use crate::output::OutputFormatter;
use crate::parser::WorkbookParser;
use crate::security::SecurityConfig;
use crate::table::SheetTable;
use rayon::prelude::*;
use std::io::{BufWriter, Read, Write};
use tracing::info;

/// 授業概要シートの既定のヘッダー行（0始まり）
const DEFAULT_HEADER_ROW: u32 = 5;

/// 取り込み処理の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct ImportConfig {
    /// シート選択方式
    pub sheet_selector: SheetSelector,

    /// ヘッダー行のインデックス（0始まり）
    pub header_row: u32,

    /// 列名の対応表
    pub column_map: ColumnMap,

    /// 出力フォーマット
    pub output_format: OutputFormat,

    /// 授業科目が空の行をエラーにするか
    pub require_title: bool,

    /// セキュリティ設定
    pub security: SecurityConfig,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            sheet_selector: SheetSelector::Index(0),
            header_row: DEFAULT_HEADER_ROW,
            column_map: ColumnMap::default(),
            output_format: OutputFormat::Sql,
            require_title: false,
            security: SecurityConfig::default(),
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// `Importer`インスタンスを段階的に構築するためのビルダーです。
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみをオーバーライドできます。
///
/// # 使用例
///
/// ```rust
/// use syllabus_import::{ImporterBuilder, OutputFormat, SheetSelector};
///
/// # fn main() -> Result<(), syllabus_import::CourseImportError> {
/// let importer = ImporterBuilder::new()
///     .with_sheet_selector(SheetSelector::Name("授業概要".to_string()))
///     .with_output_format(OutputFormat::Json)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ImporterBuilder {
    /// 内部設定（構築中）
    config: ImportConfig,
}

impl Default for ImporterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ImporterBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - シート選択: 先頭シート
    /// - ヘッダー行: 6行目（インデックス5）
    /// - 列名: `ColumnMap::default()`
    /// - 出力フォーマット: SQL
    /// - 授業科目の必須チェック: なし
    pub fn new() -> Self {
        Self {
            config: ImportConfig::default(),
        }
    }

    /// 取り込み対象のシートを選択する
    ///
    /// # 使用例
    ///
    /// ```rust
    /// use syllabus_import::{ImporterBuilder, SheetSelector};
    ///
    /// // インデックスで指定
    /// let builder = ImporterBuilder::new()
    ///     .with_sheet_selector(SheetSelector::Index(1));
    ///
    /// // シート名で指定
    /// let builder = ImporterBuilder::new()
    ///     .with_sheet_selector(SheetSelector::Name("授業概要".to_string()));
    /// ```
    pub fn with_sheet_selector(mut self, selector: SheetSelector) -> Self {
        self.config.sheet_selector = selector;
        self
    }

    /// ヘッダー行のインデックス（0始まり）を指定する
    ///
    /// ヘッダー行より上の行（表題など）は読み飛ばされます。
    pub fn with_header_row(mut self, header_row: u32) -> Self {
        self.config.header_row = header_row;
        self
    }

    /// 列名の対応表を指定する
    ///
    /// # 使用例
    ///
    /// ```rust
    /// use syllabus_import::{ColumnMap, ImporterBuilder};
    ///
    /// let columns = ColumnMap {
    ///     schedule: "曜時限・教室".to_string(),
    ///     ..ColumnMap::default()
    /// };
    /// let builder = ImporterBuilder::new().with_column_map(columns);
    /// ```
    pub fn with_column_map(mut self, column_map: ColumnMap) -> Self {
        self.config.column_map = column_map;
        self
    }

    /// 出力フォーマットを指定する
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.config.output_format = format;
        self
    }

    /// 授業科目が空の行をエラーにするかを設定する
    pub fn require_title(mut self, require: bool) -> Self {
        self.config.require_title = require;
        self
    }

    /// 入力ファイルの最大サイズ（バイト）を指定する
    pub fn with_max_input_file_size(mut self, bytes: u64) -> Self {
        self.config.security = SecurityConfig::with_max_input_file_size(bytes);
        self
    }

    /// 設定を検証して`Importer`インスタンスを構築する
    ///
    /// # 戻り値
    ///
    /// * `Ok(Importer)` - 設定が有効な場合
    /// * `Err(CourseImportError::Config)` - 以下のいずれかの場合
    ///   * 列名の対応表に空のヘッダー名がある
    ///   * シート名指定が空文字列
    ///   * 入力サイズの上限が0
    pub fn build(self) -> Result<Importer, CourseImportError> {
        // 1. 列名の検証
        for (field, header) in self.config.column_map.entries() {
            if header.trim().is_empty() {
                return Err(CourseImportError::Config(format!(
                    "Column name for '{}' must not be empty",
                    field
                )));
            }
        }

        // 2. シート名の検証
        if let SheetSelector::Name(ref name) = self.config.sheet_selector {
            if name.is_empty() {
                return Err(CourseImportError::Config(
                    "Sheet name must not be empty".to_string(),
                ));
            }
        }

        // 3. 入力サイズ上限の検証
        if self.config.security.max_input_file_size == 0 {
            return Err(CourseImportError::Config(
                "Maximum input file size must be greater than 0".to_string(),
            ));
        }

        Ok(Importer::new(self.config))
    }
}

/// 取り込み処理のファサード
///
/// 授業一覧のExcelファイルを読み込み、正規化したカタログを出力するメインエントリーポイントです。
///
/// # 使用例
///
/// ```rust,no_run
/// use syllabus_import::ImporterBuilder;
/// use std::fs::File;
///
/// # fn main() -> Result<(), syllabus_import::CourseImportError> {
/// let importer = ImporterBuilder::new().build()?;
/// let input = File::open("syllabus.xlsx")?;
/// let output = File::create("syllabus.sql")?;
/// importer.import(input, output)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Importer {
    /// 取り込み設定
    config: ImportConfig,
}

impl Importer {
    pub(crate) fn new(config: ImportConfig) -> Self {
        Self { config }
    }

    /// Excelファイルを読み込んでカタログを構築する
    ///
    /// # 処理フロー
    ///
    /// 1. ワークブックを開く（入力サイズを検証）
    /// 2. シートを選択し、ヘッダー行以降を表として読み込む
    /// 3. 空行の除去と前方補完
    /// 4. 各行を並列に変換し、行順にカタログへ追加
    ///
    /// # 戻り値
    ///
    /// * `Ok(Catalog)` - 取り込みに成功した場合
    /// * `Err(CourseImportError)` - エラーが発生した場合
    pub fn read_catalog<R: Read>(&self, input: R) -> Result<Catalog, CourseImportError> {
        let mut parser = WorkbookParser::open(input, &self.config.security)?;
        let sheet_name = parser.resolve_sheet(&self.config.sheet_selector)?;
        let table = parser.read_table(&sheet_name, self.config.header_row)?;

        let catalog = self.catalog_from_table(&table)?;
        info!(
            sheet = %sheet_name,
            courses = catalog.courses().len(),
            course_times = catalog.course_times().len(),
            course_instructors = catalog.course_instructors().len(),
            "imported course catalog"
        );

        Ok(catalog)
    }

    /// 読み込み済みの表からカタログを構築する
    ///
    /// 表のコピーに対して空行の除去と前方補完を行ってから変換します。
    ///
    /// # 使用例
    ///
    /// ```rust
    /// use syllabus_import::{CellValue, ImporterBuilder, SheetTable, Weekday};
    ///
    /// # fn main() -> Result<(), syllabus_import::CourseImportError> {
    /// let table = SheetTable::new(
    ///     vec!["授業科目".to_string(), "曜時限\n教  室".to_string()],
    ///     vec![
    ///         vec![CellValue::from("情報処理演習"), CellValue::from("木4.5\n316")],
    ///         vec![CellValue::Empty, CellValue::Empty],
    ///     ],
    /// );
    ///
    /// let importer = ImporterBuilder::new().build()?;
    /// let catalog = importer.catalog_from_table(&table)?;
    ///
    /// assert_eq!(catalog.courses().len(), 1);
    /// assert_eq!(catalog.course_times().len(), 2);
    /// assert_eq!(catalog.course_times()[1].time.day, Some(Weekday::Thu));
    /// # Ok(())
    /// # }
    /// ```
    pub fn catalog_from_table(&self, table: &SheetTable) -> Result<Catalog, CourseImportError> {
        let mut table = table.clone();
        table.drop_blank_rows();
        table.forward_fill();

        let mapper = RowMapper::new(&table, &self.config.column_map, self.config.require_title);

        // 各行は独立しているため並列に変換し、collectで行順を保つ
        let mapped: Vec<MappedRow> = table
            .rows()
            .par_iter()
            .map(|row| mapper.map_row(row))
            .collect::<Result<_, CourseImportError>>()?;

        Ok(mapped.into_iter().collect())
    }

    /// Excelファイルを読み込み、設定されたフォーマットで出力する
    ///
    /// # 引数
    ///
    /// * `input` - Excelファイルを読み込むためのリーダー
    /// * `output` - 出力先のライター
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use syllabus_import::ImporterBuilder;
    /// use std::fs::File;
    ///
    /// # fn main() -> Result<(), syllabus_import::CourseImportError> {
    /// let importer = ImporterBuilder::new().build()?;
    /// let input = File::open("syllabus.xlsx")?;
    /// importer.import(input, std::io::stdout())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn import<R: Read, W: Write>(&self, input: R, output: W) -> Result<(), CourseImportError> {
        let catalog = self.read_catalog(input)?;
        self.write_catalog(&catalog, output)
    }

    /// カタログを設定されたフォーマットで出力する
    pub fn write_catalog<W: Write>(
        &self,
        catalog: &Catalog,
        output: W,
    ) -> Result<(), CourseImportError> {
        let mut writer = BufWriter::new(output);
        OutputFormatter::from_format(self.config.output_format).render(catalog, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Excelファイルを読み込み、出力を文字列として返す
    ///
    /// # 戻り値
    ///
    /// * `Ok(String)` - 出力文字列
    /// * `Err(CourseImportError)` - エラーが発生した場合
    pub fn import_to_string<R: Read>(&self, input: R) -> Result<String, CourseImportError> {
        let mut buffer = Vec::new();
        self.import(input, &mut buffer)?;

        let result = String::from_utf8(buffer).map_err(|e| {
            CourseImportError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;

        Ok(result)
    }
}
