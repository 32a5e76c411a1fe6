#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::SqliteConnection;
use tempfile::TempDir;

use pitchbase::catalog::ddl::create_schema;
use pitchbase::db::{configure_sqlite_connection, create_pool, DbPool};

/// A temp store with the full schema created and an empty export folder.
pub struct Fixture {
    pub dir: TempDir,
    pub db_path: PathBuf,
    pub csv_dir: PathBuf,
    pub pool: DbPool,
}

pub fn fixture() -> Fixture {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_path = dir.path().join("pitchbook.db");
    let csv_dir = dir.path().join("exports");
    fs::create_dir(&csv_dir).expect("create csv dir");

    let pool = create_pool(&db_path.to_string_lossy()).expect("pool");
    create_schema(&pool, true).expect("schema");

    Fixture {
        dir,
        db_path,
        csv_dir,
        pool,
    }
}

impl Fixture {
    pub fn conn(&self) -> PooledConnection<ConnectionManager<SqliteConnection>> {
        let mut conn = self.pool.get().expect("connection");
        configure_sqlite_connection(&mut conn).expect("pragmas");
        conn
    }

    pub fn write_csv(&self, name: &str, contents: &str) {
        fs::write(self.csv_dir.join(name), contents).expect("write csv");
    }
}

#[derive(QueryableByName)]
struct NameRow {
    #[diesel(sql_type = diesel::sql_types::Text)]
    name: String,
}

#[derive(QueryableByName)]
struct CountRow {
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    n: i64,
}

pub fn table_names(conn: &mut SqliteConnection) -> Vec<String> {
    let rows: Vec<NameRow> = diesel::sql_query(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
    )
    .load(conn)
    .expect("list tables");
    rows.into_iter().map(|r| r.name).collect()
}

pub fn index_names(conn: &mut SqliteConnection) -> Vec<String> {
    let rows: Vec<NameRow> = diesel::sql_query(
        "SELECT name FROM sqlite_master WHERE type = 'index' AND name NOT LIKE 'sqlite_%' ORDER BY name",
    )
    .load(conn)
    .expect("list indexes");
    rows.into_iter().map(|r| r.name).collect()
}

pub fn count_rows(conn: &mut SqliteConnection, table: &str) -> i64 {
    let row: CountRow = diesel::sql_query(format!("SELECT COUNT(*) AS n FROM \"{table}\""))
        .get_result(conn)
        .expect("count rows");
    row.n
}

/// Minimal Company.csv with one row, in the feed's header style.
pub fn company_csv_one_row() -> &'static str {
    "CompanyID,CompanyName,Employees,TotalRaised,RowID,LastUpdated\n\
     55780-93,Urban Inc.,50,713,c-row-1,2019-01-01\n"
}

pub fn write_config(dir: &Path, db_path: &Path, csv_dir: &Path) -> PathBuf {
    let config_path = dir.join("config.toml");
    let contents = format!(
        "[database]\npath = \"{}\"\n\n[ingest]\ncsv_dir = \"{}\"\n\n[logging]\nlevel = \"info\"\nformat = \"pretty\"\n",
        db_path.display(),
        csv_dir.display()
    );
    fs::write(&config_path, contents).expect("write config");
    config_path
}
