//! Raw row extraction from CSV exports and Excel workbooks.
//!
//! Only the four required columns are kept; every other column of the
//! upstream file is ignored. Cell text is trimmed.

use crate::utils::config::{
    CATEGORY_COLUMN, INJURY_TYPE_COLUMN, MEASURE_COLUMN, REQUIRED_COLUMNS, TABLE_REFERENCE_COLUMN,
};
use crate::utils::error::DataLoadError;
use calamine::{open_workbook_auto, Data, Reader};
use log::debug;
use std::fs::File;
use std::path::Path;

/// Source formats we know how to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Workbook,
}

impl SourceFormat {
    /// Detect the format from the file extension
    pub fn detect(path: &Path) -> Result<Self, DataLoadError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Ok(SourceFormat::Csv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(SourceFormat::Workbook),
            _ => Err(DataLoadError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// The required columns of one source row, as text
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    /// 1-based line in the source, header included
    pub row: usize,
    pub table_reference: String,
    pub measure: String,
    pub injury_type: String,
    pub category: String,
}

/// Positions of the required columns in the header
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    table_reference: usize,
    measure: usize,
    injury_type: usize,
    category: usize,
}

impl ColumnIndex {
    fn resolve(headers: &[String]) -> Result<Self, DataLoadError> {
        let position = |name: &str| headers.iter().position(|h| h == name);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| position(name).is_none())
            .map(|name| name.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(DataLoadError::MissingColumns(missing));
        }

        // All four are present at this point
        let column = |name: &str| position(name).unwrap_or_default();

        Ok(Self {
            table_reference: column(TABLE_REFERENCE_COLUMN),
            measure: column(MEASURE_COLUMN),
            injury_type: column(INJURY_TYPE_COLUMN),
            category: column(CATEGORY_COLUMN),
        })
    }

    fn extract<'a>(&self, row: usize, cell: impl Fn(usize) -> Option<&'a str>) -> RawRow {
        let text = |i: usize| cell(i).unwrap_or("").trim().to_string();

        RawRow {
            row,
            table_reference: text(self.table_reference),
            measure: text(self.measure),
            injury_type: text(self.injury_type),
            category: text(self.category),
        }
    }
}

/// Read the required columns of every row in `path`
///
/// # Errors
/// * `DataLoadError::Io` - file missing or unreadable
/// * `DataLoadError::UnsupportedFormat` - unknown extension
/// * `DataLoadError::MissingColumns` - header lacks a required column
/// * `DataLoadError::Csv` / `DataLoadError::Spreadsheet` - malformed content
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>, DataLoadError> {
    std::fs::metadata(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let rows = match SourceFormat::detect(path)? {
        SourceFormat::Csv => read_csv_rows(path)?,
        SourceFormat::Workbook => read_workbook_rows(path)?,
    };

    debug!("Read {} rows from {}", rows.len(), path.display());

    Ok(rows)
}

fn read_csv_rows(path: &Path) -> Result<Vec<RawRow>, DataLoadError> {
    let file = File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{FEFF}').trim().to_string())
        .collect();

    let columns = ColumnIndex::resolve(&headers)?;

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result?;
        rows.push(columns.extract(index + 2, |i| record.get(i)));
    }

    Ok(rows)
}

fn read_workbook_rows(path: &Path) -> Result<Vec<RawRow>, DataLoadError> {
    let mut workbook = open_workbook_auto(path)?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| DataLoadError::EmptyWorkbook(path.to_path_buf()))??;

    let mut sheet_rows = range.rows();

    let headers: Vec<String> = sheet_rows
        .next()
        .map(|header| header.iter().map(cell_text).collect())
        .unwrap_or_default();

    let columns = ColumnIndex::resolve(&headers)?;

    let rows = sheet_rows
        .enumerate()
        .map(|(index, cells)| {
            let text: Vec<String> = cells.iter().map(cell_text).collect();
            columns.extract(index + 2, |i| text.get(i).map(String::as_str))
        })
        .collect();

    Ok(rows)
}

/// Render a worksheet cell the way it would appear in a CSV export
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        other => other.to_string(),
    }
}
