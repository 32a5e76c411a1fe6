//! CSV-to-table loading.
//!
//! One CSV file maps to one table. Each file is loaded in a single
//! transaction: a constraint violation anywhere in the batch rolls back that
//! file and only that file. Across files the run keeps going, so one bad
//! export never blocks the other nine.

pub mod coerce;
pub mod record;

use std::path::Path;

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::{error, info, warn};

use crate::catalog::TableSpec;
use crate::db::model::{
    CompanyRow, EmployeeHistoryRow, EntityTypeRow, IndustryRow, InvestorRow, MarketAnalysisRow,
    MorningstarCodeRow, NaicsCodeRow, SicCodeRow, VerticalRow,
};
use crate::db::{configure_sqlite_connection, table_exists, DbPool};
use crate::error::LoadError;
use crate::loader::record::{CsvTable, HeaderBindings, RowView};

/// SQLite's conservative bind-variable ceiling; insert chunks stay under it.
const SQLITE_BIND_LIMIT: usize = 999;

/// How one file's load ended, short of a hard error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Rows committed.
    Loaded { rows: usize },
    /// Source file absent from the export folder.
    SkippedMissingFile,
    /// Empty file, unusable header, or header-only file.
    SkippedEmpty,
    /// Target table absent from the store.
    SkippedNoTable,
}

/// Per-file result within a run.
#[derive(Debug)]
pub struct FileReport {
    pub file: &'static str,
    pub table: &'static str,
    pub result: Result<LoadOutcome, LoadError>,
}

/// Outcome of a full ten-file run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub files: Vec<FileReport>,
}

impl RunReport {
    /// Total rows committed across all files.
    pub fn rows_loaded(&self) -> usize {
        self.files
            .iter()
            .filter_map(|f| match &f.result {
                Ok(LoadOutcome::Loaded { rows }) => Some(*rows),
                _ => None,
            })
            .sum()
    }

    /// Files that hard-failed (their transaction rolled back).
    pub fn failures(&self) -> usize {
        self.files.iter().filter(|f| f.result.is_err()).count()
    }

    /// Files skipped without an insert attempt.
    pub fn skipped(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(&f.result, Ok(outcome) if !matches!(outcome, LoadOutcome::Loaded { .. })))
            .count()
    }
}

/// Load one CSV file into its table.
///
/// Missing file, unusable header, and missing table are skip outcomes, not
/// errors; the batch is attempted only when there is something to insert.
///
/// # Errors
/// CSV read failures and constraint violations fail this file's whole batch;
/// nothing from it is committed.
pub fn load_csv_to_table<T: CsvTable>(
    conn: &mut SqliteConnection,
    csv_dir: &Path,
) -> Result<LoadOutcome, LoadError> {
    let spec: &TableSpec = T::spec();
    let path = csv_dir.join(spec.file);

    if !path.exists() {
        return Ok(LoadOutcome::SkippedMissingFile);
    }
    if !table_exists(conn, spec.table).map_err(|e| LoadError::Connection(e.to_string()))? {
        return Ok(LoadOutcome::SkippedNoTable);
    }

    let mut reader = csv::Reader::from_path(&path).map_err(|source| LoadError::Csv {
        file: spec.file,
        source,
    })?;
    let headers = reader
        .headers()
        .map_err(|source| LoadError::Csv {
            file: spec.file,
            source,
        })?
        .clone();
    if headers.is_empty() {
        return Ok(LoadOutcome::SkippedEmpty);
    }

    let bindings = HeaderBindings::resolve(spec, &headers);
    if bindings.bound() == 0 {
        // No declared column matched; this is not the table's export.
        return Ok(LoadOutcome::SkippedEmpty);
    }

    let mut rows: Vec<T> = Vec::new();
    for result in reader.records() {
        let csv_record = result.map_err(|source| LoadError::Csv {
            file: spec.file,
            source,
        })?;
        let view = RowView::new(&bindings, &csv_record);
        rows.push(T::from_row(&view));
    }
    if rows.is_empty() {
        return Ok(LoadOutcome::SkippedEmpty);
    }

    // One transaction per file; chunking only bounds statement size.
    let chunk_size = (SQLITE_BIND_LIMIT / spec.columns.len()).max(1);
    conn.transaction::<_, diesel::result::Error, _>(|conn| {
        for chunk in rows.chunks(chunk_size) {
            T::insert(conn, chunk)?;
        }
        Ok(())
    })
    .map_err(|e| LoadError::from_insert(spec.table, e))?;

    Ok(LoadOutcome::Loaded { rows: rows.len() })
}

fn step<T: CsvTable>(conn: &mut SqliteConnection, csv_dir: &Path, report: &mut RunReport) {
    let spec = T::spec();
    info!(file = spec.file, table = spec.table, "loading");

    let result = load_csv_to_table::<T>(conn, csv_dir);
    match &result {
        Ok(LoadOutcome::Loaded { rows }) => {
            info!(rows, table = spec.table, "loaded");
        }
        Ok(LoadOutcome::SkippedMissingFile) => {
            error!(file = spec.file, "file not found; skipping");
        }
        Ok(LoadOutcome::SkippedEmpty) => {
            warn!(file = spec.file, "no usable data rows; skipping");
        }
        Ok(LoadOutcome::SkippedNoTable) => {
            warn!(table = spec.table, "table missing from store; skipping");
        }
        Err(e) => {
            error!(error = %e, file = spec.file, "load failed; batch rolled back");
        }
    }

    report.files.push(FileReport {
        file: spec.file,
        table: spec.table,
        result,
    });
}

/// Load all ten CSV exports in declared order, `Company.csv` first since
/// every constrained relation references it.
///
/// # Errors
/// Only the run preconditions abort: the store file or the CSV folder being
/// absent. Per-file failures are recorded in the report and the run
/// continues.
pub fn run_all(pool: &DbPool, db_path: &Path, csv_dir: &Path) -> Result<RunReport, LoadError> {
    if !db_path.exists() {
        return Err(LoadError::StoreMissing(db_path.to_path_buf()));
    }
    if !csv_dir.exists() {
        return Err(LoadError::CsvDirMissing(csv_dir.to_path_buf()));
    }

    let mut conn = pool
        .get()
        .map_err(|e| LoadError::Connection(e.to_string()))?;
    configure_sqlite_connection(&mut conn).map_err(|e| LoadError::Connection(e.to_string()))?;

    let mut report = RunReport::default();
    step::<CompanyRow>(&mut conn, csv_dir, &mut report);
    step::<EmployeeHistoryRow>(&mut conn, csv_dir, &mut report);
    step::<EntityTypeRow>(&mut conn, csv_dir, &mut report);
    step::<IndustryRow>(&mut conn, csv_dir, &mut report);
    step::<InvestorRow>(&mut conn, csv_dir, &mut report);
    step::<MarketAnalysisRow>(&mut conn, csv_dir, &mut report);
    step::<MorningstarCodeRow>(&mut conn, csv_dir, &mut report);
    step::<NaicsCodeRow>(&mut conn, csv_dir, &mut report);
    step::<SicCodeRow>(&mut conn, csv_dir, &mut report);
    step::<VerticalRow>(&mut conn, csv_dir, &mut report);

    if report.failures() > 0 {
        warn!(
            rows = report.rows_loaded(),
            failed = report.failures(),
            "load run finished with failures"
        );
    } else {
        info!(rows = report.rows_loaded(), "load run complete");
    }
    Ok(report)
}
