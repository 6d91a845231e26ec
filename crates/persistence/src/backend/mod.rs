// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-backend connection setup and escape hatches.
//!
//! Almost everything in this crate is plain Diesel DSL and runs unchanged
//! on either backend. What cannot be written that way lands here, split by
//! dialect:
//!
//! - `sqlite` — default backend; in-memory for tests, file-backed (WAL)
//!   for deployments
//! - `mysql` — MySQL/MariaDB; exercised by the opt-in validation tests
//!
//! Concretely that means connection establishment, running the embedded
//! migrations, fetching the row ID after an insert, and proving at startup
//! that the backend actually enforces foreign keys. The restrict/cascade
//! delete behavior and every crew/flight reference in the schema depend on
//! that enforcement, so a backend that silently skips it is refused rather
//! than tolerated.

pub mod mysql;
pub mod sqlite;

use diesel::{Connection, MysqlConnection, SqliteConnection};

use crate::error::PersistenceError;

/// The per-backend operations the rest of the crate needs.
///
/// Implemented for `SqliteConnection` and `MysqlConnection` so the
/// generated query and mutation functions can stay generic over the
/// connection type.
pub trait PersistenceBackend: Connection {
    /// Returns the row ID assigned by the most recent insert on this
    /// connection.
    ///
    /// Create operations return the new record's ID to callers, and
    /// `RETURNING` support differs between the dialects, so the lookup
    /// goes through the backend instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup query fails.
    fn get_last_insert_rowid(&mut self) -> Result<i64, PersistenceError>;

    /// Confirms the backend is enforcing foreign key constraints.
    ///
    /// Called once at startup. Referential integrity between crew
    /// members, flights, and their dependent rows is delegated entirely
    /// to the database, so an unenforced backend is a hard error.
    ///
    /// # Errors
    ///
    /// Returns an error if enforcement is off or the check fails.
    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError>;
}

impl PersistenceBackend for SqliteConnection {
    fn get_last_insert_rowid(&mut self) -> Result<i64, PersistenceError> {
        sqlite::get_last_insert_rowid(self)
    }

    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        sqlite::verify_foreign_key_enforcement(self)
    }
}

impl PersistenceBackend for MysqlConnection {
    fn get_last_insert_rowid(&mut self) -> Result<i64, PersistenceError> {
        mysql::get_last_insert_rowid(self)
    }

    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        mysql::verify_foreign_key_enforcement(self)
    }
}
