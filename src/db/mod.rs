//! SQLite access layer: connection pool, per-connection pragmas, and the
//! Diesel table definitions and row models for the ten feed tables.

pub mod model;
pub mod schema;

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;

use crate::error::{Result, SchemaError};

/// Database connection pool type alias.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Create a connection pool for the given database URL.
///
/// Capped at a single connection: the store is written by one sequential
/// loader and read by at most one consumer at a time.
///
/// # Errors
/// Returns an error if the pool cannot be created.
pub fn create_pool(database_url: &str) -> Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .max_size(1)
        .build(manager)
        .map_err(|e| SchemaError::Connection(e.to_string()).into())
}

/// Configure SQLite connection pragmas.
///
/// `foreign_keys` is off by default in SQLite and is per-connection; without
/// it neither the relation FK checks nor the cascades fire.
///
/// # Errors
/// Returns an error if a pragma fails to apply.
pub fn configure_sqlite_connection(conn: &mut SqliteConnection) -> QueryResult<()> {
    diesel::sql_query("PRAGMA busy_timeout=5000").execute(conn)?;
    diesel::sql_query("PRAGMA foreign_keys=ON").execute(conn)?;
    Ok(())
}

#[derive(QueryableByName)]
struct CountRow {
    #[diesel(sql_type = diesel::sql_types::Integer)]
    #[diesel(column_name = "n")]
    n: i32,
}

/// Whether a table of this name exists in the store.
///
/// # Errors
/// Returns an error if the `sqlite_master` probe fails.
pub fn table_exists(conn: &mut SqliteConnection, table: &str) -> QueryResult<bool> {
    let row: CountRow =
        diesel::sql_query("SELECT COUNT(*) AS n FROM sqlite_master WHERE type = 'table' AND name = ?")
            .bind::<diesel::sql_types::Text, _>(table)
            .get_result(conn)?;
    Ok(row.n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_pool_with_memory_db() {
        let pool = create_pool(":memory:");
        assert!(pool.is_ok());
    }

    #[test]
    fn table_exists_is_false_on_empty_store() {
        let pool = create_pool(":memory:").expect("pool");
        let mut conn = pool.get().expect("conn");
        assert!(!table_exists(&mut conn, "company").expect("probe"));
    }
}
