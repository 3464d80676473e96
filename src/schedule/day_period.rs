//! 曜日・時限の認識
//!
//! 先頭一文字が曜日で、その後に時限の指定が続く行を解析します。
//!
//! | 書式 | 例 | 結果 |
//! | ---- | -- | ---- |
//! | 範囲 | `金2-4` | 金2, 金3, 金4 |
//! | 区切り | `木4.5` / `金2・3` | 木4, 木5 / 金2, 金3 |
//! | 連結 | `月34` | 月3, 月4 |
//! | 単一 | `月3` | 月3 |

use crate::types::{DayPeriod, Weekday};

/// 区切り記号として`.`に揃える文字
const SEPARATOR_VARIANTS: [char; 3] = ['・', '･', '．'];

/// 正規化済みの1行から曜日・時限の列を取り出す
///
/// 曜日で始まらない行や書式が不正な行は`None`です。
/// 降順の範囲（`金4-2`）は一致扱いで、空の列を返します。
pub(crate) fn parse_day_period(line: &str) -> Option<Vec<DayPeriod>> {
    let mut chars = line.chars();
    let day = Weekday::from_char(chars.next()?)?;
    let rest: String = chars
        .map(|ch| {
            if SEPARATOR_VARIANTS.contains(&ch) {
                '.'
            } else {
                ch
            }
        })
        .collect();

    if rest.contains('-') {
        return parse_range(day, &rest);
    }

    if rest.contains('.') {
        let periods: Vec<DayPeriod> = rest
            .split('.')
            .filter_map(period_label)
            .map(|period| DayPeriod::new(day, period))
            .collect();
        return if periods.is_empty() {
            None
        } else {
            Some(periods)
        };
    }

    // 時限は一桁とみなし、連結された数字（"34"）は一文字ずつ分解する
    if is_digits(&rest) {
        return Some(
            rest.chars()
                .map(|ch| DayPeriod::new(day, ch.to_string()))
                .collect(),
        );
    }

    None
}

/// `s-e`形式の範囲を展開
fn parse_range(day: Weekday, rest: &str) -> Option<Vec<DayPeriod>> {
    let (start, end) = rest.split_once('-')?;
    if end.contains('-') {
        return None;
    }
    let start = parse_period_number(start)?;
    let end = parse_period_number(end)?;

    Some(
        (start..=end)
            .map(|period| DayPeriod::new(day, period.to_string()))
            .collect(),
    )
}

/// 時限の数値（範囲外の値は不一致として扱う）
fn parse_period_number(token: &str) -> Option<u16> {
    if !is_digits(token) {
        return None;
    }
    token.parse().ok()
}

/// 区切り形式の時限表記（先頭の0を除く、桁数の上限なし）
fn period_label(token: &str) -> Option<String> {
    if !is_digits(token) {
        return None;
    }
    let trimmed = token.trim_start_matches('0');
    Some(if trimmed.is_empty() { "0" } else { trimmed }.to_string())
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|ch| ch.is_ascii_digit())
}
