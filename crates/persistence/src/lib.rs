// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Durable preference storage for the School Admin dashboard.
//!
//! Preferences live in a single `SQLite` table keyed by name. Values are
//! stored as JSON text; only JSON booleans are read back.
//!
//! ## Testing
//!
//! - Tests run against in-memory databases, one per test
//! - File-backed databases are exercised through temporary paths

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod sqlite;

#[cfg(test)]
mod tests;

use rusqlite::Connection;
use school_admin::{PreferenceError, PreferenceStore};
use std::path::Path;
use tracing::info;

pub use error::PersistenceError;
pub use sqlite::{delete_preference, initialize_schema, load_preference, save_preference};

/// A `PreferenceStore` backed by an `SQLite` database.
#[derive(Debug)]
pub struct SqlitePreferenceStore {
    conn: Connection,
}

impl SqlitePreferenceStore {
    /// Creates a store on a fresh in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        info!("Opening in-memory preference database");
        let conn: Connection = Connection::open_in_memory()
            .map_err(|e| PersistenceError::DatabaseConnectionFailed(e.to_string()))?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Opens or creates a file-backed store.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path: &Path = path.as_ref();
        info!(path = %path.display(), "Opening preference database");
        let conn: Connection = Connection::open(path)
            .map_err(|e| PersistenceError::DatabaseConnectionFailed(e.to_string()))?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Returns the underlying connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Removes a stored preference so the next load reports none.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn clear(&mut self, key: &str) -> Result<bool, PersistenceError> {
        delete_preference(&self.conn, key)
    }
}

impl PreferenceStore for SqlitePreferenceStore {
    fn load(&self, key: &str) -> Result<Option<bool>, PreferenceError> {
        load_preference(&self.conn, key).map_err(|e| match e {
            PersistenceError::MalformedValue { key, value } => {
                PreferenceError::Malformed { key, value }
            }
            other => PreferenceError::Read {
                key: key.to_string(),
                message: other.to_string(),
            },
        })
    }

    fn save(&mut self, key: &str, value: bool) -> Result<(), PreferenceError> {
        save_preference(&self.conn, key, value).map_err(|e| PreferenceError::Write {
            key: key.to_string(),
            message: e.to_string(),
        })
    }
}
