//! 特別ワードの認識

/// 時間割の代わりに記載される特別ワード（判定順）
const SPECIAL_KEYWORDS: [&str; 6] = [
    "集中",
    "隔週",
    "指導教員",
    "1学期",
    "2学期",
    "指導教員の指示による",
];

/// 行に含まれる最初の特別ワードを返す
pub(crate) fn find_special_keyword(line: &str) -> Option<&'static str> {
    SPECIAL_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| line.contains(keyword))
}
