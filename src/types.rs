//! Types Module
//!
//! クレート全体で使用する共通データ型を定義するモジュール。

use serde::Serialize;
use std::fmt;

/// セルの値を表す列挙型
///
/// ワークブックから読み込んだ生の値です。曜時限セルのパーサーへの入力にもなります。
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// 数値（f64）
    Number(f64),

    /// 文字列
    Text(String),

    /// 論理値
    Bool(bool),

    /// エラー値（例: #DIV/0!）
    Error(String),

    /// 空セル
    Empty,
}

impl CellValue {
    /// 値が空かどうかを判定
    ///
    /// 空白文字のみの文字列や`NaN`も空として扱います。
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Number(n) => n.is_nan(),
            CellValue::Bool(_) | CellValue::Error(_) => false,
        }
    }

    /// 値が欠損しているかどうかを判定
    ///
    /// 空セルと`NaN`のみが欠損です。空白文字のみの文字列は値として扱います。
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Number(n) => n.is_nan(),
            _ => false,
        }
    }

    /// 値を文字列として取得
    ///
    /// 整数値の数値は小数点なしで出力されます（`316.0` → `"316"`）。
    pub fn as_raw_string(&self) -> String {
        match self {
            CellValue::Number(n) => n.to_string(),
            CellValue::Text(s) => s.clone(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Error(e) => e.clone(),
            CellValue::Empty => String::new(),
        }
    }

    /// 曜時限セルとして解釈する文字列を取得
    ///
    /// 文字列と有限の数値のみがテキストとして扱われ、それ以外は空文字列になります。
    pub(crate) fn as_schedule_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) if n.is_finite() => n.to_string(),
            _ => String::new(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Empty)
    }
}

/// 曜日
///
/// シリアライズ時は曜日の漢字一文字（例: `"月"`）になります。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Weekday {
    #[serde(rename = "月")]
    Mon,
    #[serde(rename = "火")]
    Tue,
    #[serde(rename = "水")]
    Wed,
    #[serde(rename = "木")]
    Thu,
    #[serde(rename = "金")]
    Fri,
    #[serde(rename = "土")]
    Sat,
    #[serde(rename = "日")]
    Sun,
}

impl Weekday {
    /// 曜日の漢字一文字から変換
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '月' => Some(Weekday::Mon),
            '火' => Some(Weekday::Tue),
            '水' => Some(Weekday::Wed),
            '木' => Some(Weekday::Thu),
            '金' => Some(Weekday::Fri),
            '土' => Some(Weekday::Sat),
            '日' => Some(Weekday::Sun),
            _ => None,
        }
    }

    /// 曜日の漢字一文字
    pub fn symbol(self) -> char {
        match self {
            Weekday::Mon => '月',
            Weekday::Tue => '火',
            Weekday::Wed => '水',
            Weekday::Thu => '木',
            Weekday::Fri => '金',
            Weekday::Sat => '土',
            Weekday::Sun => '日',
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// 曜日と時限の組
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPeriod {
    pub day: Weekday,
    /// 正規化済みの時限（半角数字）
    pub period: String,
}

impl DayPeriod {
    pub fn new(day: Weekday, period: impl Into<String>) -> Self {
        Self {
            day,
            period: period.into(),
        }
    }
}

/// 曜時限セルの解析結果1件
///
/// すべての項目は独立してnullになり得ます。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScheduleRecord {
    pub day: Option<Weekday>,
    pub period: Option<String>,
    pub room: Option<String>,
    /// 特別ワードなどの備考（", "区切り）
    pub remarks: Option<String>,
}

impl ScheduleRecord {
    /// 曜日・時限・教室を持つレコードを生成
    pub fn new(
        day: Option<Weekday>,
        period: Option<&str>,
        room: Option<&str>,
        remarks: Option<&str>,
    ) -> Self {
        Self {
            day,
            period: period.map(str::to_string),
            room: room.map(str::to_string),
            remarks: remarks.map(str::to_string),
        }
    }
}

/// 授業科目のメタデータ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CourseRecord {
    /// 区分
    pub category: Option<String>,
    /// 科目番号
    pub code: Option<String>,
    /// 授業科目
    pub title: Option<String>,
    /// 単位数
    pub credits: Option<String>,
    /// 標準履修年次
    pub grade: Option<String>,
    /// 必修・選択
    pub required_or_choice: Option<String>,
    /// 実施学期
    pub semester: Option<String>,
    /// 授業概要
    pub description: Option<String>,
    /// 備考
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_value_is_empty() {
        assert!(CellValue::Empty.is_empty());
        assert!(CellValue::Text("  \u{3000}".to_string()).is_empty());
        assert!(CellValue::Number(f64::NAN).is_empty());
        assert!(!CellValue::Number(42.0).is_empty());
        assert!(!CellValue::Text("月3".to_string()).is_empty());
        assert!(!CellValue::Bool(false).is_empty());
        assert!(!CellValue::Error("#N/A".to_string()).is_empty());
    }

    #[test]
    fn test_cell_value_is_missing() {
        assert!(CellValue::Empty.is_missing());
        assert!(CellValue::Number(f64::NAN).is_missing());
        assert!(!CellValue::Text(" ".to_string()).is_missing());
        assert!(!CellValue::Number(0.0).is_missing());
    }

    #[test]
    fn test_cell_value_as_raw_string() {
        assert_eq!(CellValue::Empty.as_raw_string(), "");
        assert_eq!(CellValue::Number(2.0).as_raw_string(), "2");
        assert_eq!(CellValue::Number(1.5).as_raw_string(), "1.5");
        assert_eq!(CellValue::Text("工房".to_string()).as_raw_string(), "工房");
        assert_eq!(CellValue::Bool(true).as_raw_string(), "true");
    }

    #[test]
    fn test_cell_value_as_schedule_text() {
        assert_eq!(CellValue::Number(316.0).as_schedule_text(), "316");
        assert_eq!(CellValue::Number(f64::NAN).as_schedule_text(), "");
        assert_eq!(CellValue::Number(f64::INFINITY).as_schedule_text(), "");
        assert_eq!(CellValue::Bool(true).as_schedule_text(), "");
        assert_eq!(CellValue::Error("#REF!".to_string()).as_schedule_text(), "");
        assert_eq!(CellValue::Empty.as_schedule_text(), "");
    }

    #[test]
    fn test_cell_value_from_option() {
        assert_eq!(CellValue::from(None::<&str>), CellValue::Empty);
        assert_eq!(
            CellValue::from(Some("集中")),
            CellValue::Text("集中".to_string())
        );
    }

    #[test]
    fn test_weekday_round_trip() {
        for ch in "月火水木金土日".chars() {
            let day = Weekday::from_char(ch).unwrap();
            assert_eq!(day.symbol(), ch);
            assert_eq!(day.to_string(), ch.to_string());
        }
        assert_eq!(Weekday::from_char('曜'), None);
    }

    #[test]
    fn test_weekday_serializes_as_glyph() {
        let json = serde_json::to_string(&Weekday::Thu).unwrap();
        assert_eq!(json, "\"木\"");
    }

    #[test]
    fn test_schedule_record_serialization() {
        let record = ScheduleRecord::new(Some(Weekday::Mon), Some("3"), Some("316"), None);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["day"], "月");
        assert_eq!(json["period"], "3");
        assert_eq!(json["room"], "316");
        assert!(json["remarks"].is_null());
    }
}
