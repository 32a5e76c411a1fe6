//! DDL generation and schema materialization.
//!
//! Statements are generated from the catalog descriptors, so the catalog is
//! the single source of truth for table shape. Creation uses `IF NOT EXISTS`
//! throughout: running against an already-correct schema is a no-op.

use diesel::prelude::*;
use tracing::info;

use crate::catalog::{ColumnKind, Constraint, IndexSpec, TableSpec, COMPOSITE_INDEXES, LOAD_ORDER};
use crate::db::{configure_sqlite_connection, DbPool};
use crate::error::{Result, SchemaError};

fn sql_type(kind: ColumnKind) -> String {
    match kind {
        ColumnKind::Text => "TEXT".to_string(),
        ColumnKind::VarChar(width) => format!("VARCHAR({width})"),
        ColumnKind::Integer => "INTEGER".to_string(),
        ColumnKind::Numeric => "NUMERIC(10, 2)".to_string(),
        ColumnKind::Date => "DATE".to_string(),
    }
}

/// CREATE TABLE statement for one catalog table.
pub fn create_table_sql(spec: &TableSpec) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(spec.columns.len() + 2);

    for col in spec.columns {
        let mut part = format!("\"{}\" {}", col.target, sql_type(col.kind));
        match col.constraint {
            // SQLite allows NULLs in non-INTEGER primary keys unless told otherwise.
            Constraint::PrimaryKey => part.push_str(" NOT NULL PRIMARY KEY"),
            Constraint::Unique => part.push_str(" UNIQUE"),
            Constraint::None => {}
        }
        parts.push(part);
    }

    // FK clauses go last so they can reference any column above.
    for col in spec.columns {
        if col.company_fk {
            parts.push(format!(
                "FOREIGN KEY (\"{}\") REFERENCES \"company\" (\"CompanyID\") \
                 ON UPDATE CASCADE ON DELETE CASCADE",
                col.target
            ));
        } else if col.parent_fk {
            parts.push(format!(
                "FOREIGN KEY (\"{}\") REFERENCES \"company\" (\"CompanyID\")",
                col.target
            ));
        }
    }

    format!(
        "CREATE TABLE IF NOT EXISTS \"{}\" ({})",
        spec.table,
        parts.join(", ")
    )
}

/// DROP TABLE statement; indexes fall away with their table.
pub fn drop_table_sql(spec: &TableSpec) -> String {
    format!("DROP TABLE IF EXISTS \"{}\"", spec.table)
}

/// CREATE INDEX statements for the single-column indexes of one table.
pub fn column_index_sql(spec: &TableSpec) -> Vec<String> {
    spec.columns
        .iter()
        .filter(|c| c.indexed)
        .map(|c| {
            format!(
                "CREATE INDEX IF NOT EXISTS \"ix_{}_{}\" ON \"{}\" (\"{}\")",
                spec.table, c.target, spec.table, c.target
            )
        })
        .collect()
}

/// CREATE INDEX statement for one composite index.
pub fn composite_index_sql(ix: &IndexSpec) -> String {
    let cols: Vec<String> = ix.columns.iter().map(|c| format!("\"{c}\"")).collect();
    format!(
        "CREATE INDEX IF NOT EXISTS \"{}\" ON \"{}\" ({})",
        ix.name,
        ix.table,
        cols.join(", ")
    )
}

/// Materialize the full schema in the backing store.
///
/// With `drop_existing`, all known tables are dropped first in reverse
/// dependency order (children before the `company` parent). Creation then
/// proceeds parent-first, followed by the single-column and composite
/// indexes.
///
/// # Errors
/// Any DDL failure is fatal; there is no partial-schema recovery. The caller
/// retries after resolving the external condition (disk, permissions, an
/// open reader holding the file).
pub fn create_schema(pool: &DbPool, drop_existing: bool) -> Result<()> {
    let mut conn = pool
        .get()
        .map_err(|e| SchemaError::Connection(e.to_string()))?;
    configure_sqlite_connection(&mut conn).map_err(|e| SchemaError::Connection(e.to_string()))?;

    if drop_existing {
        info!("dropping existing tables");
        for spec in LOAD_ORDER.iter().rev() {
            diesel::sql_query(drop_table_sql(spec))
                .execute(&mut *conn)
                .map_err(|source| SchemaError::Ddl {
                    table: spec.table,
                    source,
                })?;
        }
    }

    for spec in &LOAD_ORDER {
        diesel::sql_query(create_table_sql(spec))
            .execute(&mut *conn)
            .map_err(|source| SchemaError::Ddl {
                table: spec.table,
                source,
            })?;
        for stmt in column_index_sql(spec) {
            diesel::sql_query(stmt)
                .execute(&mut *conn)
                .map_err(|source| SchemaError::Ddl {
                    table: spec.table,
                    source,
                })?;
        }
    }

    for ix in &COMPOSITE_INDEXES {
        diesel::sql_query(composite_index_sql(ix))
            .execute(&mut *conn)
            .map_err(|source| SchemaError::Index {
                index: ix.name,
                source,
            })?;
    }

    info!(tables = LOAD_ORDER.len(), "schema created");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{COMPANY, INDUSTRY, INVESTOR};

    #[test]
    fn company_ddl_declares_keys() {
        let sql = create_table_sql(&COMPANY);
        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS \"company\""));
        assert!(sql.contains("\"CompanyID\" VARCHAR(20) NOT NULL PRIMARY KEY"));
        assert!(sql.contains("\"RowID\" VARCHAR(255) UNIQUE"));
        assert!(sql.contains("\"TotalRaised\" NUMERIC(10, 2)"));
        // Self-referential parent link, no cascade.
        assert!(sql.contains(
            "FOREIGN KEY (\"ParentCompanyID\") REFERENCES \"company\" (\"CompanyID\")"
        ));
        assert!(!sql.contains("\"ParentCompanyID\" VARCHAR(20) PRIMARY KEY"));
    }

    #[test]
    fn relation_ddl_cascades() {
        let sql = create_table_sql(&INDUSTRY);
        assert!(sql.contains("\"RowID\" VARCHAR(255) NOT NULL PRIMARY KEY"));
        assert!(sql.contains("ON UPDATE CASCADE ON DELETE CASCADE"));
    }

    #[test]
    fn investor_ddl_has_no_foreign_key() {
        let sql = create_table_sql(&INVESTOR);
        assert!(!sql.contains("FOREIGN KEY"));
    }

    #[test]
    fn composite_index_ddl_is_order_preserving() {
        let sql = composite_index_sql(&COMPOSITE_INDEXES[0]);
        assert_eq!(
            sql,
            "CREATE INDEX IF NOT EXISTS \"idx_company_search\" ON \"company\" \
             (\"CompanyName\", \"CompanyAlsoKnownAs\")"
        );
    }
}
