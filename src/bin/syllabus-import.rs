//! syllabus-import CLI
//!
//! Reads a course listing workbook and writes the normalized catalog
//! as a SQLite script, JSON, or Markdown.

use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use syllabus_import::{CourseImportError, ImporterBuilder, OutputFormat, SheetSelector};
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Sql,
    Json,
    Markdown,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Sql => OutputFormat::Sql,
            Format::Json => OutputFormat::Json,
            Format::Markdown => OutputFormat::Markdown,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Course listing workbook (.xlsx)
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Sql)]
    format: Format,

    /// Select sheet by index (0-based)
    #[arg(long, conflicts_with = "sheet_name")]
    sheet_index: Option<usize>,

    /// Select sheet by name
    #[arg(long)]
    sheet_name: Option<String>,

    /// Header row index (0-based)
    #[arg(long, default_value_t = 5)]
    header_row: u32,

    /// Fail on rows with an empty course title
    #[arg(long)]
    require_title: bool,
}

impl Cli {
    fn sheet_selector(&self) -> SheetSelector {
        match (&self.sheet_name, self.sheet_index) {
            (Some(name), _) => SheetSelector::Name(name.clone()),
            (None, Some(index)) => SheetSelector::Index(index),
            (None, None) => SheetSelector::Index(0),
        }
    }
}

fn run(cli: &Cli) -> Result<(), CourseImportError> {
    let importer = ImporterBuilder::new()
        .with_sheet_selector(cli.sheet_selector())
        .with_header_row(cli.header_row)
        .with_output_format(cli.format.into())
        .require_title(cli.require_title)
        .build()?;

    debug!(input = ?cli.input, "opening workbook");
    let input = File::open(&cli.input)?;

    match &cli.output {
        Some(path) => {
            // 取り込みに成功してから出力先を作成する
            let catalog = importer.read_catalog(input)?;
            let output = File::create(path)?;
            importer.write_catalog(&catalog, output)?;
            eprintln!(
                "Import completed: {} -> {}",
                cli.input.display(),
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            importer.import(input, &mut handle)?;
            handle.flush()?;
        }
    }

    Ok(())
}

fn handle_error(error: CourseImportError) {
    match error {
        CourseImportError::Io(io_err) => {
            eprintln!("I/O Error: {}", io_err);
            eprintln!("Please check that the file exists and you have permission to access it.");
        }
        CourseImportError::Parse(parse_err) => {
            eprintln!("Parse Error: {}", parse_err);
            eprintln!("The file may not be a valid Excel file or may be corrupted.");
        }
        CourseImportError::Json(json_err) => {
            eprintln!("JSON Error: {}", json_err);
        }
        CourseImportError::Config(msg) => {
            eprintln!("Configuration Error: {}", msg);
            eprintln!("Please check your sheet selection, header row, and column names.");
        }
        CourseImportError::MissingField { row, field } => {
            eprintln!("Missing Field:");
            eprintln!("  Row: {}", row);
            eprintln!("  Column: {:?}", field);
        }
        CourseImportError::SecurityViolation(msg) => {
            eprintln!("Security Violation: {}", msg);
        }
    }
}

fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        handle_error(e);
        process::exit(1);
    }
}
