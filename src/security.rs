//! Security Module
//!
//! 入力ファイルの読み込み時に適用するセキュリティ制限を提供します。

use crate::error::CourseImportError;

/// セキュリティ設定
///
/// ファイル処理時のセキュリティ制限を定義します。
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SecurityConfig {
    /// 入力ファイルの最大サイズ（バイト）
    /// デフォルト: 256MB (268_435_456 bytes)
    pub max_input_file_size: u64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_input_file_size: 268_435_456, // 256MB
        }
    }
}

impl SecurityConfig {
    /// 入力サイズの上限を指定して作成
    pub fn with_max_input_file_size(max_input_file_size: u64) -> Self {
        Self {
            max_input_file_size,
        }
    }

    /// 入力サイズを検証
    ///
    /// # 戻り値
    ///
    /// * `Ok(())` - 上限以内の場合
    /// * `Err(CourseImportError::SecurityViolation)` - 上限を超えた場合
    pub fn check_input_size(&self, bytes: u64) -> Result<(), CourseImportError> {
        if bytes > self.max_input_file_size {
            return Err(CourseImportError::SecurityViolation(format!(
                "Input file size exceeds maximum: {} bytes (max: {} bytes)",
                bytes, self.max_input_file_size
            )));
        }
        Ok(())
    }
}
