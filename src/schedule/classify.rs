//! 行の分類
//!
//! 各認識器を優先順に並べ、最初に一致した結果を採用します。

use super::day_period::parse_day_period;
use super::room::{parse_room, RoomMatch};
use super::special::find_special_keyword;
use crate::types::DayPeriod;

/// 1行の分類結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LineClass {
    /// 特別ワード（集中・隔週など）
    Special(&'static str),

    /// 曜日・時限の列（空の場合もある）
    DayPeriods(Vec<DayPeriod>),

    /// 教室
    Room(RoomMatch),
}

type Classifier = fn(&str) -> Option<LineClass>;

/// 判定順: 特別ワード → 曜日・時限 → 教室
const CLASSIFIERS: [Classifier; 3] = [classify_special, classify_day_period, classify_room];

fn classify_special(line: &str) -> Option<LineClass> {
    find_special_keyword(line).map(LineClass::Special)
}

fn classify_day_period(line: &str) -> Option<LineClass> {
    parse_day_period(line).map(LineClass::DayPeriods)
}

fn classify_room(line: &str) -> Option<LineClass> {
    parse_room(line).map(LineClass::Room)
}

/// 正規化済みの1行を分類する
pub(crate) fn classify_line(line: &str) -> Option<LineClass> {
    CLASSIFIERS.iter().find_map(|classify| classify(line))
}
