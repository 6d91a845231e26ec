// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Crew assignment queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crewops_domain::CrewAssignment;

use crate::diesel_schema::crew_assignments;
use crate::error::PersistenceError;

/// Diesel Queryable struct for assignment rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = crew_assignments)]
struct AssignmentRow {
    assignment_id: i64,
    crew_id: i64,
    flight_id: i64,
    assignment_date: String,
}

impl AssignmentRow {
    fn into_assignment(self) -> CrewAssignment {
        CrewAssignment {
            assignment_id: self.assignment_id,
            crew_id: self.crew_id,
            flight_id: self.flight_id,
            assignment_date: self.assignment_date,
        }
    }
}

backend_fn! {
/// Retrieves an assignment by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `assignment_id` - The assignment ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the assignment is not found.
pub fn get_assignment_by_id(
    conn: &mut _,
    assignment_id: i64,
) -> Result<Option<CrewAssignment>, PersistenceError> {
    debug!("Looking up assignment by ID: {}", assignment_id);

    let result: Result<AssignmentRow, diesel::result::Error> = crew_assignments::table
        .filter(crew_assignments::assignment_id.eq(assignment_id))
        .select(AssignmentRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_assignment())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists assignments, optionally scoped to one crew member.
///
/// Results are ordered by assignment date, then by ID for a stable
/// order within a date.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `crew_id` - When `Some`, only assignments for this crew member
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_assignments(
    conn: &mut _,
    crew_id: Option<i64>,
) -> Result<Vec<CrewAssignment>, PersistenceError> {
    debug!("Listing assignments (crew_id filter: {:?})", crew_id);

    let mut query = crew_assignments::table
        .select(AssignmentRow::as_select())
        .into_boxed();

    if let Some(crew_id) = crew_id {
        query = query.filter(crew_assignments::crew_id.eq(crew_id));
    }

    let rows: Vec<AssignmentRow> = query
        .order_by(crew_assignments::assignment_date.asc())
        .then_order_by(crew_assignments::assignment_id.asc())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(AssignmentRow::into_assignment)
        .collect())
}
}
