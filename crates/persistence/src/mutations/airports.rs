// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Airport mutations.
//!
//! Airports are referenced by no other table, so deletes are always
//! unconditional.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::airports;
use crate::error::PersistenceError;

backend_fn! {
/// Creates a new airport.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `airport_code` - The airport code
/// * `airport_name` - The airport name
/// * `location` - The airport location
///
/// # Errors
///
/// Returns an error if the airport cannot be created.
pub fn create_airport(
    conn: &mut _,
    airport_code: &str,
    airport_name: &str,
    location: &str,
) -> Result<i64, PersistenceError> {
    info!("Creating airport: {}", airport_code);

    diesel::insert_into(airports::table)
        .values((
            airports::airport_code.eq(airport_code),
            airports::airport_name.eq(airport_name),
            airports::location.eq(location),
        ))
        .execute(conn)?;

    let airport_id: i64 = conn.get_last_insert_rowid()?;

    info!(airport_id, "Airport created successfully");
    Ok(airport_id)
}
}

backend_fn! {
/// Updates an airport.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `airport_id` - The airport ID
/// * `airport_code` - The new airport code
/// * `airport_name` - The new airport name
/// * `location` - The new location
///
/// # Errors
///
/// Returns an error if the airport does not exist or the update fails.
pub fn update_airport(
    conn: &mut _,
    airport_id: i64,
    airport_code: &str,
    airport_name: &str,
    location: &str,
) -> Result<(), PersistenceError> {
    debug!("Updating airport ID: {}", airport_id);

    let rows_affected: usize = diesel::update(airports::table)
        .filter(airports::airport_id.eq(airport_id))
        .set((
            airports::airport_code.eq(airport_code),
            airports::airport_name.eq(airport_name),
            airports::location.eq(location),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Airport with ID {airport_id} not found"
        )));
    }

    Ok(())
}
}

backend_fn! {
/// Deletes an airport.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `airport_id` - The airport ID
///
/// # Errors
///
/// Returns an error if the airport does not exist or the delete fails.
pub fn delete_airport(conn: &mut _, airport_id: i64) -> Result<(), PersistenceError> {
    info!("Deleting airport ID: {}", airport_id);

    let rows_affected: usize = diesel::delete(airports::table)
        .filter(airports::airport_id.eq(airport_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Airport with ID {airport_id} not found"
        )));
    }

    Ok(())
}
}
