// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Airport queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crewops_domain::Airport;

use crate::diesel_schema::airports;
use crate::error::PersistenceError;

/// Diesel Queryable struct for airport rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = airports)]
struct AirportRow {
    airport_id: i64,
    airport_code: String,
    airport_name: String,
    location: String,
}

impl AirportRow {
    fn into_airport(self) -> Airport {
        Airport {
            airport_id: self.airport_id,
            airport_code: self.airport_code,
            airport_name: self.airport_name,
            location: self.location,
        }
    }
}

backend_fn! {
/// Retrieves an airport by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `airport_id` - The airport ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the airport is not found.
pub fn get_airport_by_id(
    conn: &mut _,
    airport_id: i64,
) -> Result<Option<Airport>, PersistenceError> {
    debug!("Looking up airport by ID: {}", airport_id);

    let result: Result<AirportRow, diesel::result::Error> = airports::table
        .filter(airports::airport_id.eq(airport_id))
        .select(AirportRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_airport())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists all airports, ordered by airport code.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_airports(conn: &mut _) -> Result<Vec<Airport>, PersistenceError> {
    debug!("Listing all airports");

    let rows: Vec<AirportRow> = airports::table
        .select(AirportRow::as_select())
        .order_by(airports::airport_code.asc())
        .load(conn)?;

    Ok(rows.into_iter().map(AirportRow::into_airport).collect())
}
}
