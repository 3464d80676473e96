//! Row Mapper Module
//!
//! 授業一覧の1行を、科目メタデータ・時間割レコード・担当教員に変換するモジュール。

use tracing::{debug, warn};

use crate::error::CourseImportError;
use crate::instructor::split_instructors;
use crate::schedule::parse_schedule_cell;
use crate::table::{SheetTable, TableRow};
use crate::types::{CellValue, CourseRecord, ScheduleRecord};

/// 列名の対応表
///
/// 各項目を読み取るヘッダー名を指定します。デフォルトは授業概要シートの見出しです。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub category: String,
    pub code: String,
    pub title: String,
    pub credits: String,
    pub grade: String,
    pub required_or_choice: String,
    pub semester: String,
    pub description: String,
    pub note: String,
    /// 「曜時限・教室」の列
    pub schedule: String,
    /// 担当教員の列
    pub instructors: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            category: "区分".to_string(),
            code: "科目\n番号".to_string(),
            title: "授業科目".to_string(),
            credits: "単位数".to_string(),
            grade: "標準履修年次".to_string(),
            required_or_choice: "必修\n・\n選択".to_string(),
            semester: "実施学期".to_string(),
            description: "授\u{3000}\u{3000}業\u{3000}\u{3000}概\u{3000}\u{3000}要".to_string(),
            note: "\u{3000}\u{3000}備\u{3000}考\n(対象専攻、教職免許\n の教科等)".to_string(),
            schedule: "曜時限\n教  室".to_string(),
            instructors: "担当教員".to_string(),
        }
    }
}

impl ColumnMap {
    /// (項目名, ヘッダー名) の一覧
    pub(crate) fn entries(&self) -> [(&'static str, &str); 11] {
        [
            ("category", self.category.as_str()),
            ("code", self.code.as_str()),
            ("title", self.title.as_str()),
            ("credits", self.credits.as_str()),
            ("grade", self.grade.as_str()),
            ("required_or_choice", self.required_or_choice.as_str()),
            ("semester", self.semester.as_str()),
            ("description", self.description.as_str()),
            ("note", self.note.as_str()),
            ("schedule", self.schedule.as_str()),
            ("instructors", self.instructors.as_str()),
        ]
    }
}

/// 1行分の変換結果
#[derive(Debug, Clone, PartialEq)]
pub struct MappedRow {
    /// シート上の行番号（1始まり）
    pub row_number: usize,
    pub course: CourseRecord,
    /// 1件以上の時間割レコード
    pub times: Vec<ScheduleRecord>,
    pub instructors: Vec<String>,
}

/// ヘッダー名を列インデックスに解決した行マッパー
#[derive(Debug, Clone)]
pub(crate) struct RowMapper {
    category: Option<usize>,
    code: Option<usize>,
    title: Option<usize>,
    credits: Option<usize>,
    grade: Option<usize>,
    required_or_choice: Option<usize>,
    semester: Option<usize>,
    description: Option<usize>,
    note: Option<usize>,
    schedule: Option<usize>,
    instructors: Option<usize>,
    /// 空の授業科目をエラーにする場合のヘッダー名
    required_title: Option<String>,
}

impl RowMapper {
    /// 表のヘッダーから列インデックスを解決する
    ///
    /// 見つからない列は警告を出したうえで、常に欠損として扱います。
    pub fn new(table: &SheetTable, columns: &ColumnMap, require_title: bool) -> Self {
        for (field, header) in columns.entries() {
            if table.column_index(header).is_none() {
                warn!(field, header, "column not found in sheet header");
            }
        }

        let index = |header: &str| table.column_index(header);

        Self {
            category: index(&columns.category),
            code: index(&columns.code),
            title: index(&columns.title),
            credits: index(&columns.credits),
            grade: index(&columns.grade),
            required_or_choice: index(&columns.required_or_choice),
            semester: index(&columns.semester),
            description: index(&columns.description),
            note: index(&columns.note),
            schedule: index(&columns.schedule),
            instructors: index(&columns.instructors),
            required_title: require_title.then(|| columns.title.clone()),
        }
    }

    fn cell<'a>(row: &'a TableRow, col: Option<usize>) -> &'a CellValue {
        static MISSING: CellValue = CellValue::Empty;
        col.map(|c| row.get(c)).unwrap_or(&MISSING)
    }

    fn field(row: &TableRow, col: Option<usize>) -> Option<String> {
        let cell = Self::cell(row, col);
        if cell.is_missing() {
            None
        } else {
            Some(cell.as_raw_string())
        }
    }

    /// 1行を変換する
    ///
    /// # 戻り値
    ///
    /// * `Ok(MappedRow)` - 変換結果（時間割レコードは常に1件以上）
    /// * `Err(CourseImportError::MissingField)` - 授業科目が必須で、空だった場合
    pub fn map_row(&self, row: &TableRow) -> Result<MappedRow, CourseImportError> {
        if let Some(ref header) = self.required_title {
            if Self::cell(row, self.title).is_empty() {
                return Err(CourseImportError::MissingField {
                    row: row.row_number,
                    field: header.clone(),
                });
            }
        }

        let course = CourseRecord {
            category: Self::field(row, self.category),
            code: Self::field(row, self.code),
            title: Self::field(row, self.title),
            credits: Self::field(row, self.credits),
            grade: Self::field(row, self.grade),
            required_or_choice: Self::field(row, self.required_or_choice),
            semester: Self::field(row, self.semester),
            description: Self::field(row, self.description),
            note: Self::field(row, self.note),
        };

        let schedule_cell = Self::cell(row, self.schedule);
        let times = parse_schedule_cell(schedule_cell);
        debug!(
            row = row.row_number,
            cell = ?schedule_cell,
            records = times.len(),
            "parsed schedule cell"
        );

        let instructors = split_instructors(Self::cell(row, self.instructors));

        Ok(MappedRow {
            row_number: row.row_number,
            course,
            times,
            instructors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Weekday;

    fn text(s: &str) -> CellValue {
        CellValue::from(s)
    }

    fn default_headers() -> Vec<String> {
        let columns = ColumnMap::default();
        columns
            .entries()
            .iter()
            .map(|(_, header)| header.to_string())
            .collect()
    }

    fn row(cells: Vec<CellValue>) -> SheetTable {
        SheetTable::new(default_headers(), vec![cells])
    }

    #[test]
    fn test_default_column_map_headers() {
        let columns = ColumnMap::default();
        assert_eq!(columns.code, "科目\n番号");
        assert_eq!(columns.schedule, "曜時限\n教  室");
        assert!(columns.description.starts_with("授\u{3000}"));
    }

    #[test]
    fn test_map_full_row() {
        let table = row(vec![
            text("専門科目"),
            text("A101"),
            text("情報処理演習"),
            CellValue::Number(2.0),
            CellValue::Number(1.0),
            text("必修"),
            text("前期"),
            text("プログラミングの基礎"),
            CellValue::Empty,
            text("月3\n316"),
            text("山田太郎、佐藤花子"),
        ]);
        let mapper = RowMapper::new(&table, &ColumnMap::default(), false);
        let mapped = mapper.map_row(&table.rows()[0]).unwrap();

        assert_eq!(mapped.course.category.as_deref(), Some("専門科目"));
        assert_eq!(mapped.course.title.as_deref(), Some("情報処理演習"));
        assert_eq!(mapped.course.credits.as_deref(), Some("2"));
        assert_eq!(mapped.course.grade.as_deref(), Some("1"));
        assert_eq!(mapped.course.note, None);
        assert_eq!(
            mapped.times,
            vec![ScheduleRecord::new(
                Some(Weekday::Mon),
                Some("3"),
                Some("316"),
                None
            )]
        );
        assert_eq!(mapped.instructors, vec!["山田太郎", "佐藤花子"]);
    }

    #[test]
    fn test_missing_columns_are_null() {
        let table = SheetTable::new(vec!["授業科目".to_string()], vec![vec![text("英語")]]);
        let mapper = RowMapper::new(&table, &ColumnMap::default(), false);
        let mapped = mapper.map_row(&table.rows()[0]).unwrap();

        assert_eq!(mapped.course.title.as_deref(), Some("英語"));
        assert_eq!(mapped.course.category, None);
        assert_eq!(mapped.times, vec![ScheduleRecord::default()]);
        assert!(mapped.instructors.is_empty());
    }

    #[test]
    fn test_custom_column_map() {
        let columns = ColumnMap {
            title: "科目名".to_string(),
            schedule: "時間割".to_string(),
            ..ColumnMap::default()
        };
        let table = SheetTable::new(
            vec!["科目名".to_string(), "時間割".to_string()],
            vec![vec![text("デザイン論"), text("集中")]],
        );
        let mapper = RowMapper::new(&table, &columns, false);
        let mapped = mapper.map_row(&table.rows()[0]).unwrap();

        assert_eq!(mapped.course.title.as_deref(), Some("デザイン論"));
        assert_eq!(mapped.times[0].remarks.as_deref(), Some("集中"));
    }

    #[test]
    fn test_title_not_required_by_default() {
        let table = SheetTable::new(vec!["授業科目".to_string()], vec![vec![text(" ")]]);
        let mapper = RowMapper::new(&table, &ColumnMap::default(), false);
        assert!(mapper.map_row(&table.rows()[0]).is_ok());
    }

    #[test]
    fn test_required_title() {
        let table = SheetTable::with_first_row_number(
            vec!["授業科目".to_string(), "区分".to_string()],
            vec![vec![text(" "), text("専門科目")]],
            8,
        );
        let mapper = RowMapper::new(&table, &ColumnMap::default(), true);

        match mapper.map_row(&table.rows()[0]) {
            Err(CourseImportError::MissingField { row, field }) => {
                assert_eq!(row, 8);
                assert_eq!(field, "授業科目");
            }
            other => panic!("Expected MissingField error, got {:?}", other),
        }
    }
}
