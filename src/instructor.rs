//! 担当教員セルの分割

use regex::Regex;
use std::sync::LazyLock;

use crate::schedule::normalize_width;
use crate::types::CellValue;

/// 教員名の区切り（読点・カンマ・スラッシュ・中黒・改行）
static INSTRUCTOR_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[,、，/・･\n]+").expect("valid instructor separator regex"));

/// 担当教員セルを教員名のリストに分割する
///
/// 各教員名は前後の空白を除いてNFKC正規化されます。欠損セルは空のリストです。
///
/// # 使用例
///
/// ```rust
/// use syllabus_import::{split_instructors, CellValue};
///
/// let names = split_instructors(&CellValue::from("山田 太郎、佐藤花子／ｽﾐｽ"));
/// assert_eq!(names, vec!["山田 太郎", "佐藤花子/スミス"]);
/// ```
pub fn split_instructors(cell: &CellValue) -> Vec<String> {
    if cell.is_missing() {
        return Vec::new();
    }

    INSTRUCTOR_SEPARATORS
        .split(&cell.as_raw_string())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(normalize_width)
        .collect()
}
