//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。
//!
//! 曜時限セルのパーサー自体はエラーを返しません。ここで定義するエラーは、
//! ワークブックの読み込み・行のマッピング・出力処理で発生するものです。

use thiserror::Error;

/// syllabus-importクレート全体で使用するエラー型
///
/// # エラーの種類
///
/// - `Io`: I/O操作中に発生したエラー（ファイル読み込み失敗など）
/// - `Parse`: Excelファイルの解析中に発生したエラー（calamine由来）
/// - `Json`: JSON出力中に発生したエラー
/// - `Config`: 設定の検証に失敗したエラー（シートが見つからないなど）
/// - `MissingField`: 必須項目が空の行が検出されたエラー
/// - `SecurityViolation`: 入力サイズ制限などに違反したエラー
///
/// # 使用例
///
/// ```rust,no_run
/// use syllabus_import::CourseImportError;
/// use std::fs::File;
///
/// fn open_listing(path: &str) -> Result<File, CourseImportError> {
///     let file = File::open(path)?;  // Ioエラーが自動的に変換される
///     Ok(file)
/// }
/// ```
#[derive(Error, Debug)]
pub enum CourseImportError {
    /// I/O操作中に発生したエラー
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Excelファイルの解析中に発生したエラー
    ///
    /// ファイル形式が不正、破損したファイルなどが原因となります。
    #[error("Failed to parse Excel file: {0}")]
    Parse(#[from] calamine::Error),

    /// JSONのシリアライズエラー
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// 設定の検証に失敗したエラー
    ///
    /// `ImporterBuilder::build()`時の検証や、シート選択・ヘッダー行の
    /// 解決に失敗した場合に発生します。
    ///
    /// # 例
    ///
    /// ```rust,no_run
    /// use syllabus_import::{CourseImportError, ImporterBuilder, SheetSelector};
    /// use std::fs::File;
    ///
    /// # fn main() -> Result<(), CourseImportError> {
    /// let importer = ImporterBuilder::new()
    ///     .with_sheet_selector(SheetSelector::Name("存在しないシート".to_string()))
    ///     .build()?;
    ///
    /// match importer.import_to_string(File::open("授業概要.xlsx")?) {
    ///     Err(CourseImportError::Config(msg)) => println!("設定エラー: {}", msg),
    ///     _ => {}
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[error("Configuration error: {0}")]
    Config(String),

    /// 必須項目が空の行
    ///
    /// `ImporterBuilder::require_title(true)`を指定した場合に、
    /// 授業科目が空の行を検出すると発生します。
    #[error("Missing required field '{field}' at row {row}")]
    MissingField {
        /// シート上の行番号（1始まり）
        row: usize,
        /// 空だった項目のヘッダー名
        field: String,
    },

    /// セキュリティ制限に違反したエラー
    ///
    /// 入力ファイルサイズの上限を超えた場合などに発生します。
    #[error("Security violation: {0}")]
    SecurityViolation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: CourseImportError = io_err.into();

        match error {
            CourseImportError::Io(e) => {
                assert_eq!(e.kind(), io::ErrorKind::NotFound);
                assert_eq!(e.to_string(), "File not found");
            }
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_parse_error_display() {
        let parse_err = calamine::Error::Msg("Corrupted file");
        let error: CourseImportError = parse_err.into();

        let error_msg = error.to_string();
        assert!(error_msg.contains("Failed to parse Excel file"));
        assert!(error_msg.contains("Corrupted file"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: CourseImportError = json_err.into();
        assert!(matches!(error, CourseImportError::Json(_)));
        assert!(error.to_string().starts_with("JSON serialization error"));
    }

    #[test]
    fn test_missing_field_display() {
        let error = CourseImportError::MissingField {
            row: 12,
            field: "授業科目".to_string(),
        };

        let error_msg = error.to_string();
        assert!(error_msg.contains("授業科目"));
        assert!(error_msg.contains("row 12"));
    }

    // エラー変換のテスト（?演算子の動作確認）
    #[test]
    fn test_error_conversion_with_question_mark() {
        fn io_operation() -> Result<(), CourseImportError> {
            let _file = std::fs::File::open("nonexistent_listing.xlsx")?;
            Ok(())
        }

        match io_operation() {
            Err(CourseImportError::Io(_)) => {}
            _ => panic!("Expected Io error from ? operator"),
        }
    }

    #[test]
    fn test_all_error_formats() {
        let io_err: CourseImportError = io::Error::other("test io").into();
        assert!(io_err.to_string().starts_with("IO error"));

        let config_err = CourseImportError::Config("test config".to_string());
        assert!(config_err.to_string().starts_with("Configuration error"));

        let security_err = CourseImportError::SecurityViolation("too large".to_string());
        assert!(security_err.to_string().starts_with("Security violation"));
    }
}
