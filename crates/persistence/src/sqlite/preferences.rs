// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Preference persistence functions.

use rusqlite::{Connection, OptionalExtension, params};
use tracing::debug;

use crate::error::PersistenceError;

/// Reads a boolean preference.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `key` - The preference key
///
/// # Returns
///
/// `Ok(None)` if the key has never been written.
///
/// # Errors
///
/// Returns an error if the query fails or the stored value is not a JSON
/// boolean.
pub fn load_preference(conn: &Connection, key: &str) -> Result<Option<bool>, PersistenceError> {
    debug!(key, "Loading preference");

    let raw: Option<String> = conn
        .query_row(
            "SELECT value FROM preferences WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()?;

    raw.map(|value| {
        serde_json::from_str::<bool>(&value).map_err(|_| PersistenceError::MalformedValue {
            key: key.to_string(),
            value,
        })
    })
    .transpose()
}

/// Writes a boolean preference, replacing any previous value.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `key` - The preference key
/// * `value` - The value to store
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn save_preference(conn: &Connection, key: &str, value: bool) -> Result<(), PersistenceError> {
    let encoded: String = serde_json::to_string(&value)?;

    conn.execute(
        "INSERT INTO preferences (key, value, updated_at)
         VALUES (?1, ?2, CURRENT_TIMESTAMP)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP",
        params![key, encoded],
    )?;

    debug!(key, value, "Saved preference");
    Ok(())
}

/// Deletes a preference.
///
/// # Returns
///
/// `true` if a row was removed.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_preference(conn: &Connection, key: &str) -> Result<bool, PersistenceError> {
    let removed: usize = conn.execute("DELETE FROM preferences WHERE key = ?1", params![key])?;
    debug!(key, removed, "Deleted preference");
    Ok(removed > 0)
}
