//! Database layer for persistent storage of reservations.
//!
//! This module provides a SQLite-based store for the staff dashboard,
//! including connection management, schema versioning, and CRUD
//! operations.
//!
//! # Examples
//!
//! ```no_run
//! use hoiku::database::{Database, DatabaseConfig};
//! use hoiku::sample::sample_reservations;
//!
//! let config = DatabaseConfig::new("/tmp/hoiku.db");
//! let mut db = Database::open(config).unwrap();
//!
//! db.insert_many(&sample_reservations()).unwrap();
//!
//! for reservation in Database::list_all_reservations(db.connection()).unwrap() {
//!     println!("{} {}", reservation.id(), reservation.child().name);
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;
mod transaction;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{
    default_data_dir, resolve_database_path, DatabaseConfig, DATABASE_FILE_NAME,
    DEFAULT_BUSY_TIMEOUT,
};
pub(crate) use config::DATA_DIR_ENV;
pub use connection::Database;

pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
