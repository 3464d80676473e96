//! Catalog Module
//!
//! 変換した行を courses / course_times / course_instructors の3テーブルに
//! 正規化して保持するモジュール。

use serde::Serialize;

use crate::mapper::MappedRow;
use crate::types::{CourseRecord, ScheduleRecord};

/// coursesテーブルの1行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseRow {
    pub id: u64,
    #[serde(flatten)]
    pub course: CourseRecord,
}

/// course_timesテーブルの1行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseTimeRow {
    pub id: u64,
    pub course_id: u64,
    #[serde(flatten)]
    pub time: ScheduleRecord,
}

/// course_instructorsテーブルの1行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseInstructorRow {
    pub id: u64,
    pub course_id: u64,
    pub instructor: String,
}

/// 正規化済みの授業カタログ
///
/// 各テーブルのIDは1始まりの連番で、行の追加順に採番されます。
///
/// # 使用例
///
/// ```rust
/// use syllabus_import::{Catalog, CourseRecord, ScheduleRecord};
///
/// let mut catalog = Catalog::new();
/// let course_id = catalog.push_course(
///     CourseRecord { title: Some("情報処理演習".to_string()), ..Default::default() },
///     vec![ScheduleRecord::default()],
///     vec!["山田太郎".to_string()],
/// );
///
/// assert_eq!(course_id, 1);
/// assert_eq!(catalog.course_times()[0].course_id, 1);
/// assert_eq!(catalog.course_instructors()[0].instructor, "山田太郎");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    courses: Vec<CourseRow>,
    course_times: Vec<CourseTimeRow>,
    course_instructors: Vec<CourseInstructorRow>,
}

impl Catalog {
    /// 空のカタログを生成
    pub fn new() -> Self {
        Self::default()
    }

    /// 科目を1件追加し、採番したIDを返す
    ///
    /// 時間割レコードが空の場合は、すべてnullのレコードを1件追加します。
    pub fn push_course(
        &mut self,
        course: CourseRecord,
        times: Vec<ScheduleRecord>,
        instructors: Vec<String>,
    ) -> u64 {
        let course_id = self.courses.len() as u64 + 1;
        self.courses.push(CourseRow {
            id: course_id,
            course,
        });

        let times = if times.is_empty() {
            vec![ScheduleRecord::default()]
        } else {
            times
        };
        for time in times {
            let id = self.course_times.len() as u64 + 1;
            self.course_times.push(CourseTimeRow {
                id,
                course_id,
                time,
            });
        }

        for instructor in instructors {
            let id = self.course_instructors.len() as u64 + 1;
            self.course_instructors.push(CourseInstructorRow {
                id,
                course_id,
                instructor,
            });
        }

        course_id
    }

    /// 変換済みの行を追加
    pub fn push_mapped_row(&mut self, row: MappedRow) -> u64 {
        self.push_course(row.course, row.times, row.instructors)
    }

    pub fn courses(&self) -> &[CourseRow] {
        &self.courses
    }

    pub fn course_times(&self) -> &[CourseTimeRow] {
        &self.course_times
    }

    pub fn course_instructors(&self) -> &[CourseInstructorRow] {
        &self.course_instructors
    }

    /// 科目が1件もないかどうか
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl FromIterator<MappedRow> for Catalog {
    fn from_iter<I: IntoIterator<Item = MappedRow>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for row in iter {
            catalog.push_mapped_row(row);
        }
        catalog
    }
}
