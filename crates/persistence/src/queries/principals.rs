// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Admin and crew member queries.
//!
//! This module contains backend-agnostic queries for the two principal
//! tables. Lookups by email return the full row including the password
//! digest, because the authentication path needs the stored hash to
//! verify a candidate password. Every other lookup returns the
//! digest-free domain representation.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crewops_domain::{Admin, CrewMember};

use crate::data_models::{AdminData, CrewMemberData};
use crate::diesel_schema::{admins, crew_assignments, crew_leaves, crew_members, duty_logs};
use crate::error::PersistenceError;

/// Diesel Queryable struct for admin rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = admins)]
struct AdminRow {
    admin_id: i64,
    name: String,
    email: String,
    phone: String,
    password_hash: String,
    created_at: String,
}

impl AdminRow {
    fn into_data(self) -> AdminData {
        AdminData {
            admin_id: self.admin_id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            password_hash: self.password_hash,
            created_at: self.created_at,
        }
    }

    fn into_admin(self) -> Admin {
        Admin {
            admin_id: self.admin_id,
            name: self.name,
            email: self.email,
            phone: self.phone,
        }
    }
}

/// Diesel Queryable struct for crew member rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = crew_members)]
struct CrewMemberRow {
    crew_id: i64,
    first_name: String,
    last_name: String,
    date_of_birth: String,
    crew_role: String,
    hire_date: String,
    email: String,
    phone_number: String,
    status: String,
    password_hash: String,
    created_at: String,
}

impl CrewMemberRow {
    fn into_data(self) -> CrewMemberData {
        CrewMemberData {
            crew_id: self.crew_id,
            first_name: self.first_name,
            last_name: self.last_name,
            date_of_birth: self.date_of_birth,
            crew_role: self.crew_role,
            hire_date: self.hire_date,
            email: self.email,
            phone_number: self.phone_number,
            status: self.status,
            password_hash: self.password_hash,
            created_at: self.created_at,
        }
    }

    fn into_member(self) -> Result<CrewMember, PersistenceError> {
        self.into_data()
            .to_crew_member()
            .map_err(|e| PersistenceError::Other(e.to_string()))
    }
}

backend_fn! {
/// Retrieves an admin by email, including the password digest.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `email` - The email address to search for
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no admin has the given email.
pub fn get_admin_by_email(
    conn: &mut _,
    email: &str,
) -> Result<Option<AdminData>, PersistenceError> {
    debug!("Looking up admin by email: {}", email);

    let result: Result<AdminRow, diesel::result::Error> = admins::table
        .filter(admins::email.eq(email))
        .select(AdminRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_data())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Retrieves an admin by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `admin_id` - The admin ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the admin is not found.
pub fn get_admin_by_id(conn: &mut _, admin_id: i64) -> Result<Option<Admin>, PersistenceError> {
    debug!("Looking up admin by ID: {}", admin_id);

    let result: Result<AdminRow, diesel::result::Error> = admins::table
        .filter(admins::admin_id.eq(admin_id))
        .select(AdminRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_admin())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists all admins, ordered by name.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_admins(conn: &mut _) -> Result<Vec<Admin>, PersistenceError> {
    debug!("Listing all admins");

    let rows: Vec<AdminRow> = admins::table
        .select(AdminRow::as_select())
        .order_by(admins::name.asc())
        .load(conn)?;

    Ok(rows.into_iter().map(AdminRow::into_admin).collect())
}
}

backend_fn! {
/// Retrieves a crew member by email, including the password digest.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `email` - The email address to search for
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no crew member has the given email.
pub fn get_crew_member_by_email(
    conn: &mut _,
    email: &str,
) -> Result<Option<CrewMemberData>, PersistenceError> {
    debug!("Looking up crew member by email: {}", email);

    let result: Result<CrewMemberRow, diesel::result::Error> = crew_members::table
        .filter(crew_members::email.eq(email))
        .select(CrewMemberRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_data())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Retrieves a crew member by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `crew_id` - The crew member ID
///
/// # Errors
///
/// Returns an error if the database query fails or the stored status
/// string is unrecognized.
/// Returns `Ok(None)` if the crew member is not found.
pub fn get_crew_member_by_id(
    conn: &mut _,
    crew_id: i64,
) -> Result<Option<CrewMember>, PersistenceError> {
    debug!("Looking up crew member by ID: {}", crew_id);

    let result: Result<CrewMemberRow, diesel::result::Error> = crew_members::table
        .filter(crew_members::crew_id.eq(crew_id))
        .select(CrewMemberRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_member()?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists all crew members, ordered by last name then first name.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails or a stored status
/// string is unrecognized.
pub fn list_crew_members(conn: &mut _) -> Result<Vec<CrewMember>, PersistenceError> {
    debug!("Listing all crew members");

    let rows: Vec<CrewMemberRow> = crew_members::table
        .select(CrewMemberRow::as_select())
        .order_by(crew_members::last_name.asc())
        .then_order_by(crew_members::first_name.asc())
        .load(conn)?;

    rows.into_iter().map(CrewMemberRow::into_member).collect()
}
}

backend_fn! {
/// Checks whether any assignment, leave, or duty log references a crew member.
///
/// Used by the restrict delete policy before removing a crew member.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `crew_id` - The crew member ID to check
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn is_crew_member_referenced(conn: &mut _, crew_id: i64) -> Result<bool, PersistenceError> {
    use diesel::dsl::count;

    debug!("Checking references to crew member ID: {}", crew_id);

    let assignment_count: i64 = crew_assignments::table
        .filter(crew_assignments::crew_id.eq(crew_id))
        .select(count(crew_assignments::assignment_id))
        .first(conn)?;

    let leave_count: i64 = crew_leaves::table
        .filter(crew_leaves::crew_id.eq(crew_id))
        .select(count(crew_leaves::leave_id))
        .first(conn)?;

    let duty_log_count: i64 = duty_logs::table
        .filter(duty_logs::crew_id.eq(crew_id))
        .select(count(duty_logs::duty_log_id))
        .first(conn)?;

    Ok(assignment_count > 0 || leave_count > 0 || duty_log_count > 0)
}
}

/// Verifies a password against a stored hash.
///
/// This is a backend-agnostic utility function that uses bcrypt.
///
/// # Arguments
///
/// * `password` - The plain text password to verify
/// * `password_hash` - The stored bcrypt hash
///
/// # Errors
///
/// Returns an error if password verification fails.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, PersistenceError> {
    bcrypt::verify(password, password_hash)
        .map_err(|e| PersistenceError::Other(format!("Failed to verify password: {e}")))
}
