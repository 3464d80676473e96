//! 曜時限セルのパーサー
//!
//! セルを行に分割し、各行の分類結果を`ParseState`に畳み込んでレコード列を組み立てます。

use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

use super::classify::{classify_line, LineClass};
use super::normalize::normalize_width;
use crate::types::{CellValue, DayPeriod, ScheduleRecord};

/// 曜日の直後に数字（半角・全角）が続くセルのみ行分割の対象にする
static DAY_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[月火水木金土日][0-9０-９]").expect("valid day-digit regex"));

/// 改行・全角スペース・タブの連続
static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[\n\u{3000}\t]+").expect("valid line break regex"));

const REMARKS_SEPARATOR: &str = ", ";

/// 1セルの解析中に行をまたいで保持する状態
#[derive(Debug, Default)]
struct ParseState {
    /// 教室とまだ対応付いていない曜日・時限
    last_day_periods: Vec<DayPeriod>,
    /// セル内で蓄積された備考（追記のみ）
    remarks: Vec<String>,
    /// 出力済みのレコード
    records: Vec<ScheduleRecord>,
}

impl ParseState {
    fn joined_remarks(&self) -> Option<String> {
        if self.remarks.is_empty() {
            None
        } else {
            Some(self.remarks.join(REMARKS_SEPARATOR))
        }
    }

    /// 未確定の曜日・時限をすべて指定した教室でレコード化する
    fn flush_day_periods(&mut self, room: Option<&str>) {
        let remarks = self.joined_remarks();
        let pending = std::mem::take(&mut self.last_day_periods);
        self.records
            .extend(pending.into_iter().map(|dp| ScheduleRecord {
                day: Some(dp.day),
                period: Some(dp.period),
                room: room.map(str::to_string),
                remarks: remarks.clone(),
            }));
    }

    fn apply(mut self, class: LineClass) -> Self {
        match class {
            LineClass::Special(keyword) => {
                self.remarks.push(keyword.to_string());
            }
            // 空の展開（降順の範囲）は未確定の曜日・時限を残す
            LineClass::DayPeriods(day_periods) if day_periods.is_empty() => {}
            LineClass::DayPeriods(day_periods) => {
                // 教室と対応付く前の曜日・時限は上書きされる
                self.last_day_periods = day_periods;
            }
            LineClass::Room(matched) => {
                if self.last_day_periods.is_empty() {
                    let remarks = self.joined_remarks();
                    self.records.push(ScheduleRecord {
                        day: None,
                        period: None,
                        room: Some(matched.room),
                        remarks,
                    });
                } else {
                    self.flush_day_periods(Some(&matched.room));
                }
                // 「他」は次のレコードから備考に反映する
                if let Some(suffix) = matched.suffix {
                    self.remarks.push(suffix.to_string());
                }
            }
        }
        self
    }

    fn finish(mut self) -> Vec<ScheduleRecord> {
        self.flush_day_periods(None);

        if self.records.is_empty() {
            let remarks = self.joined_remarks();
            self.records.push(ScheduleRecord {
                remarks,
                ..ScheduleRecord::default()
            });
        }
        self.records
    }
}

/// セルの文字列を正規化済みの行に分割する
fn split_lines(raw: &str) -> Vec<String> {
    let normalize_line = |line: &str| normalize_width(line.trim()).trim().to_string();

    let lines: Vec<String> = if DAY_DIGIT.is_match(raw) {
        LINE_BREAKS.split(raw).map(normalize_line).collect()
    } else {
        vec![normalize_line(raw)]
    };

    lines.into_iter().filter(|line| !line.is_empty()).collect()
}

/// 「曜時限・教室」セルを解析する
///
/// 文字列と数値以外の値（空セル・`NaN`・論理値など）は空セルとして扱います。
/// 結果は常に1件以上です。
///
/// # 使用例
///
/// ```rust
/// use syllabus_import::{parse_schedule_cell, CellValue, Weekday};
///
/// let records = parse_schedule_cell(&CellValue::from("月3\n316"));
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].day, Some(Weekday::Mon));
/// assert_eq!(records[0].period.as_deref(), Some("3"));
/// assert_eq!(records[0].room.as_deref(), Some("316"));
///
/// let empty = parse_schedule_cell(&CellValue::Empty);
/// assert_eq!(empty.len(), 1);
/// assert_eq!(empty[0].room, None);
/// ```
pub fn parse_schedule_cell(cell: &CellValue) -> Vec<ScheduleRecord> {
    parse_schedule_text(&cell.as_schedule_text())
}

/// 「曜時限・教室」の文字列を解析する
///
/// 詳細は[`parse_schedule_cell`]を参照してください。
pub fn parse_schedule_text(raw: &str) -> Vec<ScheduleRecord> {
    split_lines(raw)
        .iter()
        .filter_map(|line| {
            let class = classify_line(line);
            if class.is_none() {
                trace!(line = %line, "discarding unrecognized schedule line");
            }
            class
        })
        .fold(ParseState::default(), ParseState::apply)
        .finish()
}
