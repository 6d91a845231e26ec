// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Crew leave queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crewops_domain::CrewLeave;

use crate::diesel_schema::crew_leaves;
use crate::error::PersistenceError;

/// Diesel Queryable struct for leave rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = crew_leaves)]
struct LeaveRow {
    leave_id: i64,
    crew_id: i64,
    start_date: String,
    end_date: String,
}

impl LeaveRow {
    fn into_leave(self) -> CrewLeave {
        CrewLeave {
            leave_id: self.leave_id,
            crew_id: self.crew_id,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

backend_fn! {
/// Retrieves a leave record by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `leave_id` - The leave ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the leave record is not found.
pub fn get_leave_by_id(conn: &mut _, leave_id: i64) -> Result<Option<CrewLeave>, PersistenceError> {
    debug!("Looking up leave by ID: {}", leave_id);

    let result: Result<LeaveRow, diesel::result::Error> = crew_leaves::table
        .filter(crew_leaves::leave_id.eq(leave_id))
        .select(LeaveRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_leave())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists leave records, optionally scoped to one crew member.
///
/// Results are ordered by start date, then by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `crew_id` - When `Some`, only leaves for this crew member
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_leaves(
    conn: &mut _,
    crew_id: Option<i64>,
) -> Result<Vec<CrewLeave>, PersistenceError> {
    debug!("Listing leaves (crew_id filter: {:?})", crew_id);

    let mut query = crew_leaves::table.select(LeaveRow::as_select()).into_boxed();

    if let Some(crew_id) = crew_id {
        query = query.filter(crew_leaves::crew_id.eq(crew_id));
    }

    let rows: Vec<LeaveRow> = query
        .order_by(crew_leaves::start_date.asc())
        .then_order_by(crew_leaves::leave_id.asc())
        .load(conn)?;

    Ok(rows.into_iter().map(LeaveRow::into_leave).collect())
}
}
