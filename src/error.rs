use std::path::PathBuf;

use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors raised while materializing the relational schema.
///
/// Schema creation has no partial-recovery path: any of these is fatal to
/// the operation and the caller retries after fixing the external condition.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("failed to open store connection: {0}")]
    Connection(String),

    #[error("DDL failed for table '{table}': {source}")]
    Ddl {
        table: &'static str,
        #[source]
        source: diesel::result::Error,
    },

    #[error("failed to create index '{index}': {source}")]
    Index {
        index: &'static str,
        #[source]
        source: diesel::result::Error,
    },
}

/// Errors raised while loading CSV files into the store.
///
/// `StoreMissing` and `CsvDirMissing` are run preconditions and abort the
/// whole run before any file is attempted. Everything else is scoped to a
/// single file's batch; the run continues with the next file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("store '{0}' not found; create the schema first")]
    StoreMissing(PathBuf),

    #[error("CSV folder '{0}' not found")]
    CsvDirMissing(PathBuf),

    #[error("failed to open store connection: {0}")]
    Connection(String),

    #[error("failed to read '{file}': {source}")]
    Csv {
        file: &'static str,
        #[source]
        source: csv::Error,
    },

    #[error("uniqueness violation in '{table}': {message}")]
    DuplicateRow { table: &'static str, message: String },

    #[error("foreign key violation in '{table}': {message}")]
    ForeignKey { table: &'static str, message: String },

    #[error("insert into '{table}' failed: {source}")]
    Insert {
        table: &'static str,
        #[source]
        source: diesel::result::Error,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl LoadError {
    /// Classify a Diesel insert error for one file's batch.
    pub(crate) fn from_insert(table: &'static str, err: diesel::result::Error) -> Self {
        use diesel::result::{DatabaseErrorKind, Error as DieselError};

        match err {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                LoadError::DuplicateRow {
                    table,
                    message: info.message().to_string(),
                }
            }
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                LoadError::ForeignKey {
                    table,
                    message: info.message().to_string(),
                }
            }
            source => LoadError::Insert { table, source },
        }
    }
}
