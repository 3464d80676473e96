//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

/// シート選択方式
///
/// 授業一覧が記載されたシートを選択する方法を指定します。
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SheetSelector {
    /// インデックス指定（0始まり、デフォルトは先頭シート）
    ///
    /// 例: `SheetSelector::Index(0)` は最初のシートを選択
    Index(usize),

    /// シート名指定
    ///
    /// 例: `SheetSelector::Name("授業概要".to_string())`
    Name(String),
}

/// 出力フォーマット
///
/// 正規化したカタログ（courses / course_times / course_instructors）の出力形式を指定します。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum OutputFormat {
    /// SQLiteのSQLスクリプト（デフォルト）
    ///
    /// テーブルの作り直しと全行のINSERT文を出力します。
    ///
    /// # 出力例
    ///
    /// ```sql
    /// BEGIN TRANSACTION;
    /// DROP TABLE IF EXISTS courses;
    /// ...
    /// INSERT INTO course_times (id, course_id, day, period, room, remarks) VALUES (1, 1, '月', '3', '316', NULL);
    /// COMMIT;
    /// ```
    Sql,

    /// JSON形式
    ///
    /// 3つのテーブルをそれぞれ配列として出力します。
    ///
    /// # 出力例
    ///
    /// ```json
    /// {
    ///   "courses": [{"id": 1, "title": "情報処理演習", ...}],
    ///   "course_times": [{"id": 1, "course_id": 1, "day": "月", "period": "3", ...}],
    ///   "course_instructors": [{"id": 1, "course_id": 1, "instructor": "山田太郎"}]
    /// }
    /// ```
    Json,

    /// Markdown形式
    ///
    /// 目視確認用に、テーブルごとにMarkdownテーブルとして出力します。
    Markdown,
}
