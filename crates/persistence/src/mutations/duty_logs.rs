// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Duty log mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::duty_logs;
use crate::error::PersistenceError;

backend_fn! {
/// Creates a new duty log entry.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `crew_id` - The crew member on duty
/// * `flight_id` - The flight worked
/// * `duty_date` - The duty date (ISO 8601)
/// * `duty_status` - The duty status label
///
/// # Errors
///
/// Returns an error if the referenced crew member or flight does not
/// exist, or if the insert fails.
pub fn create_duty_log(
    conn: &mut _,
    crew_id: i64,
    flight_id: i64,
    duty_date: &str,
    duty_status: &str,
) -> Result<i64, PersistenceError> {
    info!(
        "Creating duty log: crew {} on flight {} at {}",
        crew_id, flight_id, duty_date
    );

    diesel::insert_into(duty_logs::table)
        .values((
            duty_logs::crew_id.eq(crew_id),
            duty_logs::flight_id.eq(flight_id),
            duty_logs::duty_date.eq(duty_date),
            duty_logs::duty_status.eq(duty_status),
        ))
        .execute(conn)?;

    let duty_log_id: i64 = conn.get_last_insert_rowid()?;

    info!(duty_log_id, "Duty log created successfully");
    Ok(duty_log_id)
}
}

backend_fn! {
/// Updates a duty log entry.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `duty_log_id` - The duty log ID
/// * `crew_id` - The new crew member reference
/// * `flight_id` - The new flight reference
/// * `duty_date` - The new duty date (ISO 8601)
/// * `duty_status` - The new duty status label
///
/// # Errors
///
/// Returns an error if the duty log entry does not exist, a new
/// reference is invalid, or the update fails.
pub fn update_duty_log(
    conn: &mut _,
    duty_log_id: i64,
    crew_id: i64,
    flight_id: i64,
    duty_date: &str,
    duty_status: &str,
) -> Result<(), PersistenceError> {
    debug!("Updating duty log ID: {}", duty_log_id);

    let rows_affected: usize = diesel::update(duty_logs::table)
        .filter(duty_logs::duty_log_id.eq(duty_log_id))
        .set((
            duty_logs::crew_id.eq(crew_id),
            duty_logs::flight_id.eq(flight_id),
            duty_logs::duty_date.eq(duty_date),
            duty_logs::duty_status.eq(duty_status),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Duty log with ID {duty_log_id} not found"
        )));
    }

    Ok(())
}
}

backend_fn! {
/// Deletes a duty log entry.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `duty_log_id` - The duty log ID
///
/// # Errors
///
/// Returns an error if the duty log entry does not exist or the delete fails.
pub fn delete_duty_log(conn: &mut _, duty_log_id: i64) -> Result<(), PersistenceError> {
    info!("Deleting duty log ID: {}", duty_log_id);

    let rows_affected: usize = diesel::delete(duty_logs::table)
        .filter(duty_logs::duty_log_id.eq(duty_log_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Duty log with ID {duty_log_id} not found"
        )));
    }

    Ok(())
}
}
