// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Duty log queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crewops_domain::DutyLog;

use crate::diesel_schema::duty_logs;
use crate::error::PersistenceError;

/// Diesel Queryable struct for duty log rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = duty_logs)]
struct DutyLogRow {
    duty_log_id: i64,
    crew_id: i64,
    flight_id: i64,
    duty_date: String,
    duty_status: String,
}

impl DutyLogRow {
    fn into_duty_log(self) -> DutyLog {
        DutyLog {
            duty_log_id: self.duty_log_id,
            crew_id: self.crew_id,
            flight_id: self.flight_id,
            duty_date: self.duty_date,
            duty_status: self.duty_status,
        }
    }
}

backend_fn! {
/// Retrieves a duty log entry by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `duty_log_id` - The duty log ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the duty log entry is not found.
pub fn get_duty_log_by_id(
    conn: &mut _,
    duty_log_id: i64,
) -> Result<Option<DutyLog>, PersistenceError> {
    debug!("Looking up duty log by ID: {}", duty_log_id);

    let result: Result<DutyLogRow, diesel::result::Error> = duty_logs::table
        .filter(duty_logs::duty_log_id.eq(duty_log_id))
        .select(DutyLogRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_duty_log())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists duty log entries, optionally scoped to one crew member.
///
/// Results are ordered by duty date, then by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `crew_id` - When `Some`, only entries for this crew member
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_duty_logs(
    conn: &mut _,
    crew_id: Option<i64>,
) -> Result<Vec<DutyLog>, PersistenceError> {
    debug!("Listing duty logs (crew_id filter: {:?})", crew_id);

    let mut query = duty_logs::table.select(DutyLogRow::as_select()).into_boxed();

    if let Some(crew_id) = crew_id {
        query = query.filter(duty_logs::crew_id.eq(crew_id));
    }

    let rows: Vec<DutyLogRow> = query
        .order_by(duty_logs::duty_date.asc())
        .then_order_by(duty_logs::duty_log_id.asc())
        .load(conn)?;

    Ok(rows.into_iter().map(DutyLogRow::into_duty_log).collect())
}
}
