//! Saving and loading job tables.
//!
//! Tables are written as UTF-8 CSV with a byte-order-mark so common
//! spreadsheet readers pick up the encoding, and read back from CSV or
//! Excel files. Loading dispatches on the file extension; anything outside
//! `.csv` / `.xlsx` / `.xls` is rejected without a partial load.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use chrono::{DateTime, Local};
use tracing::{debug, info};

use scout_core::error::{Result, ScoutError};
use scout_core::models::{Column, JobListing, JobTable};

/// UTF-8 byte-order-mark written ahead of the CSV payload.
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

// ── Filenames ─────────────────────────────────────────────────────────────────

/// Default CSV export filename for the given timestamp:
/// `job_data_<YYYYMMDD>.csv`.
pub fn default_csv_filename(now: DateTime<Local>) -> String {
    format!("job_data_{}.csv", now.format("%Y%m%d"))
}

// ── Saving ────────────────────────────────────────────────────────────────────

/// Write `table` to `path` as CSV.
///
/// Output is UTF-8 with a BOM, one header row naming the present columns,
/// no index column. Cells with no value are written as empty strings.
pub fn save_csv(table: &JobTable, path: &Path) -> Result<()> {
    let mut file = File::create(path).map_err(|e| write_err(path, e))?;
    file.write_all(UTF8_BOM).map_err(|e| write_err(path, e))?;

    let mut writer = csv::Writer::from_writer(file);

    let header: Vec<&str> = table.columns().iter().map(|c| c.as_str()).collect();
    writer
        .write_record(&header)
        .map_err(|e| csv_write_err(path, e))?;

    for row in table.rows() {
        let record: Vec<&str> = table
            .columns()
            .iter()
            .map(|c| row.get(*c).unwrap_or(""))
            .collect();
        writer
            .write_record(&record)
            .map_err(|e| csv_write_err(path, e))?;
    }

    writer
        .flush()
        .map_err(|e| write_err(path, e))?;

    info!("Saved {} rows to {}", table.len(), path.display());
    Ok(())
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Load a job table from `path`, dispatching on the file extension.
///
/// Fails with [`ScoutError::FileNotFound`] when the path does not exist and
/// [`ScoutError::UnsupportedFormat`] for extensions outside the loadable
/// set. Parse failures surface as [`ScoutError::FileParse`]; no partially
/// loaded table is ever returned.
pub fn load(path: &Path) -> Result<JobTable> {
    if !path.exists() {
        return Err(ScoutError::FileNotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let table = match extension.as_deref() {
        Some("csv") => load_csv(path)?,
        Some("xlsx") | Some("xls") => load_spreadsheet(path)?,
        _ => return Err(ScoutError::UnsupportedFormat(path.to_path_buf())),
    };

    debug!(
        "Loaded {} rows across {} columns from {}",
        table.len(),
        table.columns().len(),
        path.display()
    );
    Ok(table)
}

/// Read a CSV file into a table.
///
/// Headers define the column set: recognised headers become columns (even
/// when every cell beneath them is empty), unrecognised headers are ignored.
/// Empty cells load as absent values.
fn load_csv(path: &Path) -> Result<JobTable> {
    let file = File::open(path).map_err(|e| ScoutError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| parse_err(path, e))?
        .clone();
    let slots: Vec<Option<Column>> = headers.iter().map(Column::from_header).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| parse_err(path, e))?;
        rows.push(row_from_cells(&slots, |i| record.get(i).map(str::to_string)));
    }

    Ok(JobTable::new(slots.into_iter().flatten().collect(), rows))
}

/// Read the first sheet of an Excel workbook into a table.
///
/// The first row is taken as the header row; the mapping rules match
/// [`load_csv`].
fn load_spreadsheet(path: &Path) -> Result<JobTable> {
    let mut workbook = open_workbook_auto(path).map_err(|e| parse_err(path, e))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ScoutError::FileParse {
            path: path.to_path_buf(),
            message: "workbook contains no sheets".to_string(),
        })?
        .map_err(|e| parse_err(path, e))?;

    let mut sheet_rows = range.rows();
    let Some(header_row) = sheet_rows.next() else {
        return Ok(JobTable::default());
    };

    let slots: Vec<Option<Column>> = header_row
        .iter()
        .map(|cell| Column::from_header(&cell_to_string(cell)))
        .collect();

    let mut rows = Vec::new();
    for sheet_row in sheet_rows {
        rows.push(row_from_cells(&slots, |i| {
            sheet_row.get(i).map(cell_to_string)
        }));
    }

    Ok(JobTable::new(slots.into_iter().flatten().collect(), rows))
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Build one listing from positional cells, keeping only recognised columns
/// and dropping empty values.
fn row_from_cells(
    slots: &[Option<Column>],
    cell_at: impl Fn(usize) -> Option<String>,
) -> JobListing {
    let mut row = JobListing::default();
    for (i, slot) in slots.iter().enumerate() {
        let Some(column) = slot else { continue };
        if let Some(value) = cell_at(i) {
            if !value.is_empty() {
                row.set(*column, value);
            }
        }
    }
    row
}

/// Render a spreadsheet cell as text. Whole-number floats lose their
/// trailing `.0` so numeric-typed cells match their CSV spelling.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        other => other.to_string(),
    }
}

fn write_err(path: &Path, source: std::io::Error) -> ScoutError {
    ScoutError::FileWrite {
        path: path.to_path_buf(),
        source,
    }
}

fn csv_write_err(path: &Path, source: csv::Error) -> ScoutError {
    ScoutError::FileWrite {
        path: path.to_path_buf(),
        source: std::io::Error::other(source),
    }
}

fn parse_err(path: &Path, source: impl std::fmt::Display) -> ScoutError {
    ScoutError::FileParse {
        path: path.to_path_buf(),
        message: source.to_string(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
