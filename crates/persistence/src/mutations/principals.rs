// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Admin and crew member mutations.
//!
//! Passwords arrive here in plain text and are hashed with bcrypt
//! before they touch the database. No mutation ever stores or returns
//! a plain-text password.

use diesel::prelude::*;
use diesel::{Connection, MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use crate::DeletePolicy;
use crate::backend::PersistenceBackend;
use crate::diesel_schema::{admins, crew_assignments, crew_leaves, crew_members, duty_logs};
use crate::error::PersistenceError;
use crate::queries::principals::{
    is_crew_member_referenced_mysql, is_crew_member_referenced_sqlite,
};

backend_fn! {
/// Creates a new admin.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `name` - The display name
/// * `email` - The email address (must be unique)
/// * `phone` - The contact phone number
/// * `password` - The plain-text password (will be hashed)
///
/// # Errors
///
/// Returns an error if the admin cannot be created or if the email
/// already exists.
pub fn create_admin(
    conn: &mut _,
    name: &str,
    email: &str,
    phone: &str,
    password: &str,
) -> Result<i64, PersistenceError> {
    info!("Creating admin with email: {}", email);

    // Hash the password using bcrypt
    let password_hash: String = bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| PersistenceError::Other(format!("Failed to hash password: {e}")))?;

    diesel::insert_into(admins::table)
        .values((
            admins::name.eq(name),
            admins::email.eq(email),
            admins::phone.eq(phone),
            admins::password_hash.eq(&password_hash),
        ))
        .execute(conn)?;

    let admin_id: i64 = conn.get_last_insert_rowid()?;

    info!(admin_id, "Admin created successfully");
    Ok(admin_id)
}
}

backend_fn! {
/// Updates an admin's profile fields.
///
/// The password is not touched here; use `update_admin_password`.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `admin_id` - The admin ID
/// * `name` - The new display name
/// * `email` - The new email address
/// * `phone` - The new phone number
///
/// # Errors
///
/// Returns an error if the admin does not exist or the update fails.
pub fn update_admin(
    conn: &mut _,
    admin_id: i64,
    name: &str,
    email: &str,
    phone: &str,
) -> Result<(), PersistenceError> {
    debug!("Updating admin ID: {}", admin_id);

    let rows_affected: usize = diesel::update(admins::table)
        .filter(admins::admin_id.eq(admin_id))
        .set((
            admins::name.eq(name),
            admins::email.eq(email),
            admins::phone.eq(phone),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Admin with ID {admin_id} not found"
        )));
    }

    Ok(())
}
}

backend_fn! {
/// Deletes an admin.
///
/// Admins are referenced by no other table, so deletion is always
/// unconditional.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `admin_id` - The admin ID
///
/// # Errors
///
/// Returns an error if the admin does not exist or the delete fails.
pub fn delete_admin(conn: &mut _, admin_id: i64) -> Result<(), PersistenceError> {
    info!("Deleting admin ID: {}", admin_id);

    let rows_affected: usize = diesel::delete(admins::table)
        .filter(admins::admin_id.eq(admin_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Admin with ID {admin_id} not found"
        )));
    }

    Ok(())
}
}

backend_fn! {
/// Creates a new crew member.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `first_name` - First name
/// * `last_name` - Last name
/// * `date_of_birth` - Date of birth (ISO 8601)
/// * `crew_role` - Free-text role label
/// * `hire_date` - Hire date (ISO 8601)
/// * `email` - The email address (must be unique)
/// * `phone_number` - The contact phone number
/// * `status` - The initial employment status
/// * `password` - The plain-text password (will be hashed)
///
/// # Errors
///
/// Returns an error if the crew member cannot be created or if the
/// email already exists.
#[allow(clippy::too_many_arguments)]
pub fn create_crew_member(
    conn: &mut _,
    first_name: &str,
    last_name: &str,
    date_of_birth: &str,
    crew_role: &str,
    hire_date: &str,
    email: &str,
    phone_number: &str,
    status: &str,
    password: &str,
) -> Result<i64, PersistenceError> {
    info!(
        "Creating crew member with email: {}, status: {}",
        email, status
    );

    // Hash the password using bcrypt
    let password_hash: String = bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| PersistenceError::Other(format!("Failed to hash password: {e}")))?;

    diesel::insert_into(crew_members::table)
        .values((
            crew_members::first_name.eq(first_name),
            crew_members::last_name.eq(last_name),
            crew_members::date_of_birth.eq(date_of_birth),
            crew_members::crew_role.eq(crew_role),
            crew_members::hire_date.eq(hire_date),
            crew_members::email.eq(email),
            crew_members::phone_number.eq(phone_number),
            crew_members::status.eq(status),
            crew_members::password_hash.eq(&password_hash),
        ))
        .execute(conn)?;

    let crew_id: i64 = conn.get_last_insert_rowid()?;

    info!(crew_id, "Crew member created successfully");
    Ok(crew_id)
}
}

backend_fn! {
/// Updates a crew member's profile fields.
///
/// Status and password have dedicated mutations and are not touched
/// here.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `crew_id` - The crew member ID
/// * `first_name` - The new first name
/// * `last_name` - The new last name
/// * `date_of_birth` - The new date of birth (ISO 8601)
/// * `crew_role` - The new role label
/// * `hire_date` - The new hire date (ISO 8601)
/// * `email` - The new email address
/// * `phone_number` - The new phone number
///
/// # Errors
///
/// Returns an error if the crew member does not exist or the update fails.
#[allow(clippy::too_many_arguments)]
pub fn update_crew_member(
    conn: &mut _,
    crew_id: i64,
    first_name: &str,
    last_name: &str,
    date_of_birth: &str,
    crew_role: &str,
    hire_date: &str,
    email: &str,
    phone_number: &str,
) -> Result<(), PersistenceError> {
    debug!("Updating crew member ID: {}", crew_id);

    let rows_affected: usize = diesel::update(crew_members::table)
        .filter(crew_members::crew_id.eq(crew_id))
        .set((
            crew_members::first_name.eq(first_name),
            crew_members::last_name.eq(last_name),
            crew_members::date_of_birth.eq(date_of_birth),
            crew_members::crew_role.eq(crew_role),
            crew_members::hire_date.eq(hire_date),
            crew_members::email.eq(email),
            crew_members::phone_number.eq(phone_number),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Crew member with ID {crew_id} not found"
        )));
    }

    Ok(())
}
}

backend_fn! {
/// Updates a crew member's employment status.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `crew_id` - The crew member ID
/// * `status` - The new status
///
/// # Errors
///
/// Returns an error if the crew member does not exist or the update fails.
pub fn update_crew_member_status(
    conn: &mut _,
    crew_id: i64,
    status: &str,
) -> Result<(), PersistenceError> {
    info!("Updating status for crew member ID: {} to {}", crew_id, status);

    let rows_affected: usize = diesel::update(crew_members::table)
        .filter(crew_members::crew_id.eq(crew_id))
        .set(crew_members::status.eq(status))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Crew member with ID {crew_id} not found"
        )));
    }

    Ok(())
}
}

backend_fn! {
/// Updates a crew member's password.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `crew_id` - The crew member ID
/// * `new_password` - The new password (will be hashed)
///
/// # Errors
///
/// Returns an error if the password cannot be hashed, the crew member
/// does not exist, or the update fails.
pub fn update_crew_password(
    conn: &mut _,
    crew_id: i64,
    new_password: &str,
) -> Result<(), PersistenceError> {
    info!("Updating password for crew member ID: {}", crew_id);

    // Hash the new password using bcrypt
    let password_hash: String = bcrypt::hash(new_password, bcrypt::DEFAULT_COST)
        .map_err(|e| PersistenceError::Other(format!("Failed to hash password: {e}")))?;

    let rows_affected: usize = diesel::update(crew_members::table)
        .filter(crew_members::crew_id.eq(crew_id))
        .set(crew_members::password_hash.eq(&password_hash))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Crew member with ID {crew_id} not found"
        )));
    }

    info!("Password updated for crew member ID: {}", crew_id);
    Ok(())
}
}

/// Deletes a crew member under the given delete policy (`SQLite` version).
///
/// With `Restrict`, the delete fails if any assignment, leave, or duty
/// log still references the crew member. With `Cascade`, dependent rows
/// are removed in the same transaction as the crew member.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `crew_id` - The crew member ID
/// * `policy` - The delete policy to apply
///
/// # Errors
///
/// Returns an error if:
/// - The policy is `Restrict` and dependent rows exist
/// - The crew member does not exist
/// - The database operation fails
pub fn delete_crew_member_sqlite(
    conn: &mut SqliteConnection,
    crew_id: i64,
    policy: DeletePolicy,
) -> Result<(), PersistenceError> {
    info!(
        "Attempting to delete crew member ID: {} with policy {:?}",
        crew_id, policy
    );

    match policy {
        DeletePolicy::Restrict => {
            if is_crew_member_referenced_sqlite(conn, crew_id)? {
                return Err(PersistenceError::ReferencedRowExists {
                    entity: "crew member",
                    id: crew_id,
                });
            }

            let rows_affected: usize = diesel::delete(crew_members::table)
                .filter(crew_members::crew_id.eq(crew_id))
                .execute(conn)?;

            if rows_affected == 0 {
                return Err(PersistenceError::NotFound(format!(
                    "Crew member with ID {crew_id} not found"
                )));
            }
        }
        DeletePolicy::Cascade => {
            conn.transaction::<_, PersistenceError, _>(|conn| {
                diesel::delete(crew_assignments::table)
                    .filter(crew_assignments::crew_id.eq(crew_id))
                    .execute(conn)?;
                diesel::delete(crew_leaves::table)
                    .filter(crew_leaves::crew_id.eq(crew_id))
                    .execute(conn)?;
                diesel::delete(duty_logs::table)
                    .filter(duty_logs::crew_id.eq(crew_id))
                    .execute(conn)?;

                let rows_affected: usize = diesel::delete(crew_members::table)
                    .filter(crew_members::crew_id.eq(crew_id))
                    .execute(conn)?;

                if rows_affected == 0 {
                    return Err(PersistenceError::NotFound(format!(
                        "Crew member with ID {crew_id} not found"
                    )));
                }

                Ok(())
            })?;
        }
    }

    info!("Deleted crew member ID: {}", crew_id);
    Ok(())
}

/// Deletes a crew member under the given delete policy (`MySQL` version).
///
/// See `delete_crew_member_sqlite` for policy semantics.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `crew_id` - The crew member ID
/// * `policy` - The delete policy to apply
///
/// # Errors
///
/// Returns an error if:
/// - The policy is `Restrict` and dependent rows exist
/// - The crew member does not exist
/// - The database operation fails
pub fn delete_crew_member_mysql(
    conn: &mut MysqlConnection,
    crew_id: i64,
    policy: DeletePolicy,
) -> Result<(), PersistenceError> {
    info!(
        "Attempting to delete crew member ID: {} with policy {:?}",
        crew_id, policy
    );

    match policy {
        DeletePolicy::Restrict => {
            if is_crew_member_referenced_mysql(conn, crew_id)? {
                return Err(PersistenceError::ReferencedRowExists {
                    entity: "crew member",
                    id: crew_id,
                });
            }

            let rows_affected: usize = diesel::delete(crew_members::table)
                .filter(crew_members::crew_id.eq(crew_id))
                .execute(conn)?;

            if rows_affected == 0 {
                return Err(PersistenceError::NotFound(format!(
                    "Crew member with ID {crew_id} not found"
                )));
            }
        }
        DeletePolicy::Cascade => {
            conn.transaction::<_, PersistenceError, _>(|conn| {
                diesel::delete(crew_assignments::table)
                    .filter(crew_assignments::crew_id.eq(crew_id))
                    .execute(conn)?;
                diesel::delete(crew_leaves::table)
                    .filter(crew_leaves::crew_id.eq(crew_id))
                    .execute(conn)?;
                diesel::delete(duty_logs::table)
                    .filter(duty_logs::crew_id.eq(crew_id))
                    .execute(conn)?;

                let rows_affected: usize = diesel::delete(crew_members::table)
                    .filter(crew_members::crew_id.eq(crew_id))
                    .execute(conn)?;

                if rows_affected == 0 {
                    return Err(PersistenceError::NotFound(format!(
                        "Crew member with ID {crew_id} not found"
                    )));
                }

                Ok(())
            })?;
        }
    }

    info!("Deleted crew member ID: {}", crew_id);
    Ok(())
}
