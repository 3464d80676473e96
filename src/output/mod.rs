//! Output Format Module
//!
//! Strategy Patternによる出力フォーマットの抽象化を提供するモジュール。

mod formatters;

use crate::api::OutputFormat;
use crate::catalog::Catalog;
use crate::error::CourseImportError;
use std::io::Write;

pub(crate) use formatters::*;

/// 出力フォーマッター（Strategy Pattern）
///
/// 各出力フォーマット（SQL, JSON, Markdown）をenumとして表現します。
#[derive(Debug, Clone, Copy)]
pub(crate) enum OutputFormatter {
    Sql,
    Json,
    Markdown,
}

impl OutputFormatter {
    /// 出力フォーマットからフォーマッターを生成
    pub fn from_format(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Sql => OutputFormatter::Sql,
            OutputFormat::Json => OutputFormatter::Json,
            OutputFormat::Markdown => OutputFormatter::Markdown,
        }
    }

    /// カタログを指定されたフォーマットで出力する
    ///
    /// # 引数
    ///
    /// * `catalog` - 出力するカタログ
    /// * `writer` - 出力先のライター
    ///
    /// # 戻り値
    ///
    /// * `Ok(())` - 出力に成功した場合
    /// * `Err(CourseImportError)` - エラーが発生した場合
    pub fn render<W: Write>(
        &self,
        catalog: &Catalog,
        writer: &mut W,
    ) -> Result<(), CourseImportError> {
        match self {
            OutputFormatter::Sql => SqlFormatter.render(catalog, writer),
            OutputFormatter::Json => JsonFormatter.render(catalog, writer),
            OutputFormatter::Markdown => MarkdownFormatter.render(catalog, writer),
        }
    }
}

/// テーブル出力用の値
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Value {
    Integer(u64),
    Text(Option<String>),
}

/// 出力用に列順へ並べたテーブル
#[derive(Debug, Clone)]
pub(crate) struct TableView {
    pub name: &'static str,
    pub columns: &'static [&'static str],
    pub rows: Vec<Vec<Value>>,
}

const COURSE_COLUMNS: &[&str] = &[
    "id",
    "category",
    "code",
    "title",
    "credits",
    "grade",
    "required_or_choice",
    "semester",
    "description",
    "note",
];

const COURSE_TIME_COLUMNS: &[&str] = &["id", "course_id", "day", "period", "room", "remarks"];

const COURSE_INSTRUCTOR_COLUMNS: &[&str] = &["id", "course_id", "instructor"];

/// カタログの3テーブルを列順に展開する
pub(crate) fn table_views(catalog: &Catalog) -> [TableView; 3] {
    let courses = catalog
        .courses()
        .iter()
        .map(|row| {
            let c = &row.course;
            vec![
                Value::Integer(row.id),
                Value::Text(c.category.clone()),
                Value::Text(c.code.clone()),
                Value::Text(c.title.clone()),
                Value::Text(c.credits.clone()),
                Value::Text(c.grade.clone()),
                Value::Text(c.required_or_choice.clone()),
                Value::Text(c.semester.clone()),
                Value::Text(c.description.clone()),
                Value::Text(c.note.clone()),
            ]
        })
        .collect();

    let course_times = catalog
        .course_times()
        .iter()
        .map(|row| {
            let t = &row.time;
            vec![
                Value::Integer(row.id),
                Value::Integer(row.course_id),
                Value::Text(t.day.map(|day| day.to_string())),
                Value::Text(t.period.clone()),
                Value::Text(t.room.clone()),
                Value::Text(t.remarks.clone()),
            ]
        })
        .collect();

    let course_instructors = catalog
        .course_instructors()
        .iter()
        .map(|row| {
            vec![
                Value::Integer(row.id),
                Value::Integer(row.course_id),
                Value::Text(Some(row.instructor.clone())),
            ]
        })
        .collect();

    [
        TableView {
            name: "courses",
            columns: COURSE_COLUMNS,
            rows: courses,
        },
        TableView {
            name: "course_times",
            columns: COURSE_TIME_COLUMNS,
            rows: course_times,
        },
        TableView {
            name: "course_instructors",
            columns: COURSE_INSTRUCTOR_COLUMNS,
            rows: course_instructors,
        },
    ]
}
