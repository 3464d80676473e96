//! syllabus-import - Course listing importer for university syllabus spreadsheets
//!
//! This crate reads a course listing sheet (XLSX), parses the free-form
//! "day/period/room" cells into structured schedule records, and emits a
//! normalized catalog (`courses`, `course_times`, `course_instructors`) as a
//! SQLite script, JSON, or Markdown.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::fs::File;
//! use syllabus_import::ImporterBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create an importer with default settings (first sheet, header on row 6, SQL output)
//!     let importer = ImporterBuilder::new().build()?;
//!
//!     let input = File::open("syllabus.xlsx")?;
//!     let output = File::create("syllabus.sql")?;
//!
//!     importer.import(input, output)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Parsing a single schedule cell
//!
//! The cell parser never fails; every cell yields at least one record.
//!
//! ```rust
//! use syllabus_import::{parse_schedule_text, ScheduleRecord, Weekday};
//!
//! let records = parse_schedule_text("木４・５\n工房");
//! assert_eq!(
//!     records,
//!     vec![
//!         ScheduleRecord::new(Some(Weekday::Thu), Some("4"), Some("工房"), None),
//!         ScheduleRecord::new(Some(Weekday::Thu), Some("5"), Some("工房"), None),
//!     ]
//! );
//!
//! assert_eq!(parse_schedule_text(""), vec![ScheduleRecord::default()]);
//! ```
//!
//! # Custom Configuration
//!
//! ```rust,no_run
//! use std::fs::File;
//! use syllabus_import::{ImporterBuilder, OutputFormat, SheetSelector};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let importer = ImporterBuilder::new()
//!         .with_sheet_selector(SheetSelector::Name("授業概要".to_string()))
//!         .with_header_row(3)
//!         .with_output_format(OutputFormat::Json)
//!         .require_title(true)
//!         .build()?;
//!
//!     let json = importer.import_to_string(File::open("syllabus.xlsx")?)?;
//!     println!("{}", json);
//!
//!     Ok(())
//! }
//! ```

mod api;
mod builder;
mod catalog;
mod error;
mod grid;
mod instructor;
mod mapper;
mod output;
mod parser;
mod schedule;
mod security;
mod table;
mod types;

// 公開API
pub use api::{OutputFormat, SheetSelector};
pub use builder::{Importer, ImporterBuilder};
pub use catalog::{Catalog, CourseInstructorRow, CourseRow, CourseTimeRow};
pub use error::CourseImportError;
pub use instructor::split_instructors;
pub use mapper::{ColumnMap, MappedRow};
pub use schedule::{normalize_width, parse_schedule_cell, parse_schedule_text};
pub use table::{SheetTable, TableRow};
pub use types::{CellValue, CourseRecord, DayPeriod, ScheduleRecord, Weekday};
