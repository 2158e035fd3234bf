// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Presidio scheduling system.
//!
//! The database is a write-through snapshot cache of the in-memory
//! [`StoreSnapshot`], not the system of record: one row per entity
//! collection, each holding the collection's full JSON payload, replaced
//! wholesale on every flush. Built on Diesel over `SQLite`.
//!
//! A flush failure leaves the previous payload intact; the in-memory state
//! stays authoritative and the caller decides whether to retry.

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

use diesel::prelude::*;
use diesel::SqliteConnection;
use presidio::StoreSnapshot;
use presidio_domain::{Brand, Client, Event, Operator, Shift, Task};
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;
use time::format_description::well_known::Iso8601;

mod diesel_schema;
mod error;
mod sqlite;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

use diesel_schema::collections;

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based collisions.
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

const CLIENTS: &str = "clients";
const BRANDS: &str = "brands";
const OPERATORS: &str = "operators";
const EVENTS: &str = "events";
const SHIFTS: &str = "shifts";
const TASKS: &str = "tasks";

#[derive(Insertable)]
#[diesel(table_name = collections)]
struct CollectionRow<'a> {
    name: &'a str,
    payload: String,
    updated_at: &'a str,
}

/// Persistence adapter for entity-collection snapshots.
pub struct Persistence {
    conn: SqliteConnection,
}

impl std::fmt::Debug for Persistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persistence").finish_non_exhaustive()
    }
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name: String = format!("memdb_test_{db_id}");
        let shared_memory_url: String = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;

        // Enable WAL mode for better read concurrency
        sqlite::enable_wal_mode(&mut conn)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Writes every collection's JSON payload, replacing the previous rows
    /// in a single transaction.
    ///
    /// # Arguments
    ///
    /// * `snapshot` - The snapshot to persist
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_snapshot(&mut self, snapshot: &StoreSnapshot) -> Result<(), PersistenceError> {
        let updated_at: String = OffsetDateTime::now_utc()
            .format(&Iso8601::DEFAULT)
            .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;

        let rows: Vec<CollectionRow<'_>> = vec![
            CollectionRow {
                name: CLIENTS,
                payload: serde_json::to_string(&snapshot.clients)?,
                updated_at: &updated_at,
            },
            CollectionRow {
                name: BRANDS,
                payload: serde_json::to_string(&snapshot.brands)?,
                updated_at: &updated_at,
            },
            CollectionRow {
                name: OPERATORS,
                payload: serde_json::to_string(&snapshot.operators)?,
                updated_at: &updated_at,
            },
            CollectionRow {
                name: EVENTS,
                payload: serde_json::to_string(&snapshot.events)?,
                updated_at: &updated_at,
            },
            CollectionRow {
                name: SHIFTS,
                payload: serde_json::to_string(&snapshot.shifts)?,
                updated_at: &updated_at,
            },
            CollectionRow {
                name: TASKS,
                payload: serde_json::to_string(&snapshot.tasks)?,
                updated_at: &updated_at,
            },
        ];

        self.conn
            .transaction::<_, diesel::result::Error, _>(|conn| {
                for row in &rows {
                    diesel::replace_into(collections::table)
                        .values(row)
                        .execute(conn)?;
                }
                Ok(())
            })?;
        Ok(())
    }

    /// Reads every stored collection back into a snapshot. Collections
    /// never written yet come back empty, so a fresh database loads as an
    /// empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if a read or deserialization fails.
    pub fn load_snapshot(&mut self) -> Result<StoreSnapshot, PersistenceError> {
        Ok(StoreSnapshot {
            clients: self.load_collection::<Client>(CLIENTS)?,
            brands: self.load_collection::<Brand>(BRANDS)?,
            operators: self.load_collection::<Operator>(OPERATORS)?,
            events: self.load_collection::<Event>(EVENTS)?,
            shifts: self.load_collection::<Shift>(SHIFTS)?,
            tasks: self.load_collection::<Task>(TASKS)?,
        })
    }

    fn load_collection<T: DeserializeOwned>(
        &mut self,
        name: &str,
    ) -> Result<Vec<T>, PersistenceError> {
        let payload: Option<String> = collections::table
            .filter(collections::name.eq(name))
            .select(collections::payload)
            .first::<String>(&mut self.conn)
            .optional()?;
        match payload {
            Some(payload) => Ok(serde_json::from_str(&payload)?),
            None => Ok(Vec::new()),
        }
    }
}
