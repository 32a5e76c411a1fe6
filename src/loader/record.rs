//! Header-mapped row projection.
//!
//! CSV columns are matched by header name, never by position. A
//! [`HeaderBindings`] is built once per file from the table's catalog
//! descriptors; each [`RowView`] then resolves store column names to field
//! indexes through it. Source columns absent from the header simply yield
//! null, mirroring the schema's nullable columns.

use std::collections::HashMap;

use chrono::NaiveDate;
use diesel::SqliteConnection;

use crate::catalog::TableSpec;
use crate::loader::coerce;

/// Resolved (store column -> CSV field index) bindings for one file.
pub struct HeaderBindings {
    indexes: HashMap<&'static str, usize>,
}

impl HeaderBindings {
    /// Match each declared source column against the header row. Unmatched
    /// columns are left unbound and read as null.
    pub fn resolve(spec: &'static TableSpec, headers: &csv::StringRecord) -> Self {
        let mut indexes = HashMap::with_capacity(spec.columns.len());
        for col in spec.columns {
            let found = headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').trim() == col.source);
            if let Some(idx) = found {
                indexes.insert(col.target, idx);
            }
        }
        Self { indexes }
    }

    /// Number of source columns that matched the header.
    pub fn bound(&self) -> usize {
        self.indexes.len()
    }
}

/// One CSV record seen through a table's column bindings.
pub struct RowView<'a> {
    bindings: &'a HeaderBindings,
    record: &'a csv::StringRecord,
}

impl<'a> RowView<'a> {
    pub fn new(bindings: &'a HeaderBindings, record: &'a csv::StringRecord) -> Self {
        Self { bindings, record }
    }

    fn raw(&self, target: &str) -> Option<&str> {
        let idx = *self.bindings.indexes.get(target)?;
        self.record.get(idx)
    }

    /// Free-text field; empty cells are absent.
    pub fn text(&self, target: &str) -> Option<String> {
        self.raw(target)
            .and_then(coerce::non_empty)
            .map(str::to_string)
    }

    /// Key field. A feed row without its key produces an empty key, which
    /// the store's uniqueness constraint rejects on the second occurrence.
    pub fn key(&self, target: &str) -> String {
        self.text(target).unwrap_or_default()
    }

    pub fn integer(&self, target: &str) -> Option<i32> {
        self.raw(target).and_then(coerce::parse_integer)
    }

    pub fn decimal(&self, target: &str) -> Option<f64> {
        self.raw(target).and_then(coerce::parse_decimal)
    }

    pub fn date(&self, target: &str) -> Option<NaiveDate> {
        self.raw(target).and_then(coerce::parse_date)
    }
}

/// A row model that can be projected from a CSV record and bulk-inserted
/// into its table.
pub trait CsvTable: Sized {
    /// Catalog descriptor this model is projected through.
    fn spec() -> &'static TableSpec;

    /// Project one CSV record. Infallible: unparseable typed fields null out.
    fn from_row(row: &RowView<'_>) -> Self;

    /// Insert a chunk of rows; the caller owns transaction boundaries.
    fn insert(conn: &mut SqliteConnection, rows: &[Self]) -> diesel::QueryResult<usize>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::INDUSTRY;

    fn record(fields: &[&str]) -> csv::StringRecord {
        csv::StringRecord::from(fields.to_vec())
    }

    #[test]
    fn binds_by_name_not_position() {
        let headers = record(&["IsPrimary", "CompanyID", "RowID"]);
        let bindings = HeaderBindings::resolve(&INDUSTRY, &headers);
        let data = record(&["Yes", "55780-93", "r1"]);
        let row = RowView::new(&bindings, &data);

        assert_eq!(row.key("RowID"), "r1");
        assert_eq!(row.text("CompanyID").as_deref(), Some("55780-93"));
        assert_eq!(row.text("IsPrimary").as_deref(), Some("Yes"));
    }

    #[test]
    fn unbound_columns_read_null() {
        let headers = record(&["RowID"]);
        let bindings = HeaderBindings::resolve(&INDUSTRY, &headers);
        assert_eq!(bindings.bound(), 1);

        let data = record(&["r1"]);
        let row = RowView::new(&bindings, &data);
        assert_eq!(row.text("IndustrySector"), None);
        assert_eq!(row.date("LastUpdated"), None);
    }

    #[test]
    fn bom_on_first_header_is_ignored() {
        let headers = record(&["\u{feff}RowID", "CompanyID"]);
        let bindings = HeaderBindings::resolve(&INDUSTRY, &headers);
        assert_eq!(bindings.bound(), 2);
    }
}
