// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Regulation mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::regulations;
use crate::error::PersistenceError;

backend_fn! {
/// Creates a new regulation.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `name` - The regulation name
/// * `description` - The regulation description
///
/// # Errors
///
/// Returns an error if the regulation cannot be created.
pub fn create_regulation(
    conn: &mut _,
    name: &str,
    description: &str,
) -> Result<i64, PersistenceError> {
    info!("Creating regulation: {}", name);

    diesel::insert_into(regulations::table)
        .values((
            regulations::name.eq(name),
            regulations::description.eq(description),
        ))
        .execute(conn)?;

    let regulation_id: i64 = conn.get_last_insert_rowid()?;

    info!(regulation_id, "Regulation created successfully");
    Ok(regulation_id)
}
}

backend_fn! {
/// Updates a regulation.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `regulation_id` - The regulation ID
/// * `name` - The new name
/// * `description` - The new description
///
/// # Errors
///
/// Returns an error if the regulation does not exist or the update fails.
pub fn update_regulation(
    conn: &mut _,
    regulation_id: i64,
    name: &str,
    description: &str,
) -> Result<(), PersistenceError> {
    debug!("Updating regulation ID: {}", regulation_id);

    let rows_affected: usize = diesel::update(regulations::table)
        .filter(regulations::regulation_id.eq(regulation_id))
        .set((
            regulations::name.eq(name),
            regulations::description.eq(description),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Regulation with ID {regulation_id} not found"
        )));
    }

    Ok(())
}
}

backend_fn! {
/// Deletes a regulation.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `regulation_id` - The regulation ID
///
/// # Errors
///
/// Returns an error if the regulation does not exist or the delete fails.
pub fn delete_regulation(conn: &mut _, regulation_id: i64) -> Result<(), PersistenceError> {
    info!("Deleting regulation ID: {}", regulation_id);

    let rows_affected: usize = diesel::delete(regulations::table)
        .filter(regulations::regulation_id.eq(regulation_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Regulation with ID {regulation_id} not found"
        )));
    }

    Ok(())
}
}
