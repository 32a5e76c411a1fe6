//! Pitchbase - CSV-to-SQLite ETL for PitchBook-style company exports.
//!
//! Ingests the ten fixed-name CSV files of a company-intelligence feed into
//! a single-file SQLite store with typed columns, foreign keys, and the
//! composite indexes the downstream natural-language query layer relies on.
//!
//! Two components, consumed leaf-first:
//!
//! - **Schema manager** ([`catalog`]) - static per-table descriptors and the
//!   DDL generated from them; `create_schema` materializes all ten tables
//!   and six composite indexes, optionally dropping existing tables first.
//! - **CSV loader** ([`loader`]) - header-name column mapping, type coercion
//!   (unparseable numerics and dates become null), and one transaction per
//!   file with failure isolation across files.
//!
//! # Modules
//!
//! - [`catalog`] - schema descriptors, load order, DDL generation
//! - [`config`] - TOML configuration and logging setup
//! - [`db`] - connection pool, pragmas, Diesel tables and row models
//! - [`error`] - error types for the crate
//! - [`loader`] - CSV reading, coercion, batch insertion
//!
//! # Example
//!
//! ```no_run
//! use pitchbase::catalog::ddl::create_schema;
//! use pitchbase::db::create_pool;
//! use pitchbase::loader::run_all;
//! use std::path::Path;
//!
//! # fn main() -> pitchbase::error::Result<()> {
//! let pool = create_pool("pitchbook.db")?;
//! create_schema(&pool, true)?;
//! let report = run_all(&pool, Path::new("pitchbook.db"), Path::new("exports"))?;
//! println!("{} rows loaded", report.rows_loaded());
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod loader;
