// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Regulation queries.
//!
//! Regulations are visible to every authenticated principal, so there
//! are no scoped variants here.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crewops_domain::Regulation;

use crate::diesel_schema::regulations;
use crate::error::PersistenceError;

/// Diesel Queryable struct for regulation rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = regulations)]
struct RegulationRow {
    regulation_id: i64,
    name: String,
    description: String,
}

impl RegulationRow {
    fn into_regulation(self) -> Regulation {
        Regulation {
            regulation_id: self.regulation_id,
            name: self.name,
            description: self.description,
        }
    }
}

backend_fn! {
/// Retrieves a regulation by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `regulation_id` - The regulation ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the regulation is not found.
pub fn get_regulation_by_id(
    conn: &mut _,
    regulation_id: i64,
) -> Result<Option<Regulation>, PersistenceError> {
    debug!("Looking up regulation by ID: {}", regulation_id);

    let result: Result<RegulationRow, diesel::result::Error> = regulations::table
        .filter(regulations::regulation_id.eq(regulation_id))
        .select(RegulationRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_regulation())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists all regulations, ordered by name.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_regulations(conn: &mut _) -> Result<Vec<Regulation>, PersistenceError> {
    debug!("Listing all regulations");

    let rows: Vec<RegulationRow> = regulations::table
        .select(RegulationRow::as_select())
        .order_by(regulations::name.asc())
        .then_order_by(regulations::regulation_id.asc())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(RegulationRow::into_regulation)
        .collect())
}
}
