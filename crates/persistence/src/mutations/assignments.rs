// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Crew assignment mutations.
//!
//! Referential integrity for `crew_id` and `flight_id` is enforced by
//! the store's foreign keys; inserts referencing missing rows fail with
//! a foreign key violation.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::crew_assignments;
use crate::error::PersistenceError;

backend_fn! {
/// Creates a new crew assignment.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `crew_id` - The assigned crew member
/// * `flight_id` - The flight the crew member is assigned to
/// * `assignment_date` - The assignment date (ISO 8601)
///
/// # Errors
///
/// Returns an error if the referenced crew member or flight does not
/// exist, or if the insert fails.
pub fn create_assignment(
    conn: &mut _,
    crew_id: i64,
    flight_id: i64,
    assignment_date: &str,
) -> Result<i64, PersistenceError> {
    info!(
        "Creating assignment: crew {} to flight {} on {}",
        crew_id, flight_id, assignment_date
    );

    diesel::insert_into(crew_assignments::table)
        .values((
            crew_assignments::crew_id.eq(crew_id),
            crew_assignments::flight_id.eq(flight_id),
            crew_assignments::assignment_date.eq(assignment_date),
        ))
        .execute(conn)?;

    let assignment_id: i64 = conn.get_last_insert_rowid()?;

    info!(assignment_id, "Assignment created successfully");
    Ok(assignment_id)
}
}

backend_fn! {
/// Updates a crew assignment.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `assignment_id` - The assignment ID
/// * `crew_id` - The new crew member reference
/// * `flight_id` - The new flight reference
/// * `assignment_date` - The new assignment date (ISO 8601)
///
/// # Errors
///
/// Returns an error if the assignment does not exist, a new reference
/// is invalid, or the update fails.
pub fn update_assignment(
    conn: &mut _,
    assignment_id: i64,
    crew_id: i64,
    flight_id: i64,
    assignment_date: &str,
) -> Result<(), PersistenceError> {
    debug!("Updating assignment ID: {}", assignment_id);

    let rows_affected: usize = diesel::update(crew_assignments::table)
        .filter(crew_assignments::assignment_id.eq(assignment_id))
        .set((
            crew_assignments::crew_id.eq(crew_id),
            crew_assignments::flight_id.eq(flight_id),
            crew_assignments::assignment_date.eq(assignment_date),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Assignment with ID {assignment_id} not found"
        )));
    }

    Ok(())
}
}

backend_fn! {
/// Deletes a crew assignment.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `assignment_id` - The assignment ID
///
/// # Errors
///
/// Returns an error if the assignment does not exist or the delete fails.
pub fn delete_assignment(conn: &mut _, assignment_id: i64) -> Result<(), PersistenceError> {
    info!("Deleting assignment ID: {}", assignment_id);

    let rows_affected: usize = diesel::delete(crew_assignments::table)
        .filter(crew_assignments::assignment_id.eq(assignment_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Assignment with ID {assignment_id} not found"
        )));
    }

    Ok(())
}
}
