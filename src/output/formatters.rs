//! Output Formatters Implementation
//!
//! 各出力フォーマットの実装を提供するモジュール。

use super::{table_views, TableView, Value};
use crate::catalog::Catalog;
use crate::error::CourseImportError;
use crate::grid::TextGrid;
use std::io::Write;

/// SQLiteスクリプト形式のフォーマッター
pub(crate) struct SqlFormatter;

impl SqlFormatter {
    pub fn render<W: Write>(
        &self,
        catalog: &Catalog,
        writer: &mut W,
    ) -> Result<(), CourseImportError> {
        let tables = table_views(catalog);

        writeln!(writer, "BEGIN TRANSACTION;")?;
        for table in &tables {
            writeln!(writer, "DROP TABLE IF EXISTS {};", table.name)?;
        }

        for table in &tables {
            writeln!(writer)?;
            write_create_table(writer, table)?;
        }

        for table in &tables {
            if table.rows.is_empty() {
                continue;
            }
            writeln!(writer)?;
            let columns = table.columns.join(", ");
            for row in &table.rows {
                let values: Vec<String> = row.iter().map(sql_literal).collect();
                writeln!(
                    writer,
                    "INSERT INTO {} ({}) VALUES ({});",
                    table.name,
                    columns,
                    values.join(", ")
                )?;
            }
        }

        writeln!(writer, "COMMIT;")?;
        writer.flush()?;
        Ok(())
    }
}

fn write_create_table<W: Write>(writer: &mut W, table: &TableView) -> Result<(), CourseImportError> {
    writeln!(writer, "CREATE TABLE {} (", table.name)?;
    let definitions: Vec<String> = table
        .columns
        .iter()
        .map(|column| format!("    {} {}", column, column_type(column)))
        .collect();
    writeln!(writer, "{}", definitions.join(",\n"))?;
    writeln!(writer, ");")?;
    Ok(())
}

fn column_type(column: &str) -> &'static str {
    match column {
        "id" => "INTEGER PRIMARY KEY AUTOINCREMENT",
        "course_id" => "INTEGER NOT NULL",
        _ => "TEXT",
    }
}

/// SQLリテラルに変換（文字列はシングルクォートを二重化、欠損はNULL）
fn sql_literal(value: &Value) -> String {
    match value {
        Value::Integer(n) => n.to_string(),
        Value::Text(Some(s)) => format!("'{}'", s.replace('\'', "''")),
        Value::Text(None) => "NULL".to_string(),
    }
}

/// JSON形式のフォーマッター
pub(crate) struct JsonFormatter;

impl JsonFormatter {
    pub fn render<W: Write>(
        &self,
        catalog: &Catalog,
        writer: &mut W,
    ) -> Result<(), CourseImportError> {
        serde_json::to_writer_pretty(&mut *writer, catalog)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Markdown形式のフォーマッター
pub(crate) struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn render<W: Write>(
        &self,
        catalog: &Catalog,
        writer: &mut W,
    ) -> Result<(), CourseImportError> {
        for (idx, table) in table_views(catalog).into_iter().enumerate() {
            if idx > 0 {
                writeln!(writer)?;
            }
            writeln!(writer, "## {}\n", table.name)?;

            let rows = table
                .rows
                .iter()
                .map(|row| row.iter().map(markdown_text).collect::<Vec<String>>());
            TextGrid::new(table.columns.iter(), rows).render_markdown(writer)?;
        }

        writer.flush()?;
        Ok(())
    }
}

fn markdown_text(value: &Value) -> String {
    match value {
        Value::Integer(n) => n.to_string(),
        Value::Text(s) => s.clone().unwrap_or_default(),
    }
}
