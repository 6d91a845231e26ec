// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Crew leave mutations.
//!
//! Leave date ordering is not enforced. A range whose end precedes its
//! start is recorded as-is and logged at warn level so operators can
//! spot likely data-entry mistakes.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info, warn};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::crew_leaves;
use crate::error::PersistenceError;

backend_fn! {
/// Creates a new leave record.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `crew_id` - The crew member on leave
/// * `start_date` - The leave start date (ISO 8601)
/// * `end_date` - The leave end date (ISO 8601)
///
/// # Errors
///
/// Returns an error if the referenced crew member does not exist or
/// the insert fails.
pub fn create_leave(
    conn: &mut _,
    crew_id: i64,
    start_date: &str,
    end_date: &str,
) -> Result<i64, PersistenceError> {
    info!(
        "Creating leave for crew {}: {} to {}",
        crew_id, start_date, end_date
    );

    if end_date < start_date {
        warn!(
            "Leave for crew {} has end_date {} before start_date {}; recording as-is",
            crew_id, end_date, start_date
        );
    }

    diesel::insert_into(crew_leaves::table)
        .values((
            crew_leaves::crew_id.eq(crew_id),
            crew_leaves::start_date.eq(start_date),
            crew_leaves::end_date.eq(end_date),
        ))
        .execute(conn)?;

    let leave_id: i64 = conn.get_last_insert_rowid()?;

    info!(leave_id, "Leave created successfully");
    Ok(leave_id)
}
}

backend_fn! {
/// Updates a leave record.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `leave_id` - The leave ID
/// * `crew_id` - The new crew member reference
/// * `start_date` - The new start date (ISO 8601)
/// * `end_date` - The new end date (ISO 8601)
///
/// # Errors
///
/// Returns an error if the leave record does not exist, a new reference
/// is invalid, or the update fails.
pub fn update_leave(
    conn: &mut _,
    leave_id: i64,
    crew_id: i64,
    start_date: &str,
    end_date: &str,
) -> Result<(), PersistenceError> {
    debug!("Updating leave ID: {}", leave_id);

    if end_date < start_date {
        warn!(
            "Leave {} has end_date {} before start_date {}; recording as-is",
            leave_id, end_date, start_date
        );
    }

    let rows_affected: usize = diesel::update(crew_leaves::table)
        .filter(crew_leaves::leave_id.eq(leave_id))
        .set((
            crew_leaves::crew_id.eq(crew_id),
            crew_leaves::start_date.eq(start_date),
            crew_leaves::end_date.eq(end_date),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Leave with ID {leave_id} not found"
        )));
    }

    Ok(())
}
}

backend_fn! {
/// Deletes a leave record.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `leave_id` - The leave ID
///
/// # Errors
///
/// Returns an error if the leave record does not exist or the delete fails.
pub fn delete_leave(conn: &mut _, leave_id: i64) -> Result<(), PersistenceError> {
    info!("Deleting leave ID: {}", leave_id);

    let rows_affected: usize = diesel::delete(crew_leaves::table)
        .filter(crew_leaves::leave_id.eq(leave_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Leave with ID {leave_id} not found"
        )));
    }

    Ok(())
}
}
