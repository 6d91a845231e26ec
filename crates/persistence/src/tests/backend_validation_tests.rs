// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend validation tests for multi-database support.
//!
//! These tests validate that the persistence layer works correctly
//! across different database backends (`SQLite`, MariaDB/MySQL).
//!
//! ## Purpose
//!
//! The purpose of these tests is to ensure:
//! 1. Migrations apply cleanly on all supported backends
//! 2. Foreign key constraints are enforced correctly
//! 3. Unique constraints work as expected
//! 4. Backend-specific behavior is documented and tested
//!
//! ## Test Execution
//!
//! - `SQLite` tests run normally via `cargo test`
//! - MariaDB/MySQL tests are marked `#[ignore]` and run only against a
//!   provisioned instance
//!
//! ## Infrastructure Requirements
//!
//! `MariaDB` tests require:
//! - `DATABASE_URL` environment variable pointing at a scratch database
//! - `CREWOPS_TEST_BACKEND=mariadb` environment variable
//! - Running `MariaDB` instance
//!
//! Tests fail fast if required infrastructure is missing.
//!
//! ## What These Tests Validate
//!
//! These tests focus on **infrastructure and schema compatibility**, not
//! business logic. Business logic and domain rules are validated by the
//! standard test suite running against `SQLite`.

use diesel::MysqlConnection;
use diesel::prelude::*;
use std::env;

use crate::backend::mysql;
use crate::{Persistence, PersistenceError};

/// Helper to get the `MariaDB` connection URL from environment.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is not set, indicating missing infrastructure.
fn get_mariadb_url() -> String {
    env::var("DATABASE_URL")
        .expect("DATABASE_URL not set - MariaDB tests require a provisioned instance")
}

/// Helper to verify we're running in the `MariaDB` test environment.
///
/// # Panics
///
/// Panics if `CREWOPS_TEST_BACKEND` is not set to `mariadb`.
fn verify_mariadb_test_environment() {
    let backend = env::var("CREWOPS_TEST_BACKEND")
        .expect("CREWOPS_TEST_BACKEND not set - MariaDB tests require a provisioned instance");
    assert_eq!(backend, "mariadb", "CREWOPS_TEST_BACKEND must be 'mariadb'");
}

#[test]
#[ignore = "requires a provisioned MariaDB instance"]
fn test_mariadb_connection() {
    verify_mariadb_test_environment();
    let url = get_mariadb_url();

    let result = MysqlConnection::establish(&url);
    assert!(
        result.is_ok(),
        "Failed to connect to MariaDB: {:?}",
        result.err()
    );
}

#[test]
#[ignore = "requires a provisioned MariaDB instance"]
fn test_mariadb_migrations_apply_cleanly() {
    verify_mariadb_test_environment();
    let url = get_mariadb_url();

    let result = mysql::initialize_database(&url);
    assert!(
        result.is_ok(),
        "Failed to initialize MariaDB and run migrations: {:?}",
        result.err()
    );
}

#[test]
#[ignore = "requires a provisioned MariaDB instance"]
fn test_mariadb_foreign_key_enforcement() {
    verify_mariadb_test_environment();
    let url = get_mariadb_url();

    let mut conn = mysql::initialize_database(&url).expect("Failed to initialize MariaDB database");

    let result = mysql::verify_foreign_key_enforcement(&mut conn);
    assert!(
        result.is_ok(),
        "Foreign key enforcement verification failed: {:?}",
        result.err()
    );
}

#[test]
#[ignore = "requires a provisioned MariaDB instance"]
fn test_mariadb_assignment_foreign_keys_are_enforced() {
    verify_mariadb_test_environment();
    let url = get_mariadb_url();

    let mut persistence =
        Persistence::new_with_mysql(&url).expect("Failed to initialize MariaDB database");

    let result = persistence.create_assignment(999_999, 999_999, "2026-09-01");
    assert!(matches!(
        result,
        Err(PersistenceError::ForeignKeyViolation(_))
    ));
}

#[test]
#[ignore = "requires a provisioned MariaDB instance"]
fn test_mariadb_admin_email_unique_constraint() {
    verify_mariadb_test_environment();
    let url = get_mariadb_url();

    let mut persistence =
        Persistence::new_with_mysql(&url).expect("Failed to initialize MariaDB database");

    persistence
        .create_admin("Unique Admin", "unique-admin@crewops.test", "555-0100", "pw")
        .expect("First insert should succeed");

    let result =
        persistence.create_admin("Duplicate Admin", "unique-admin@crewops.test", "555-0101", "pw");
    assert!(matches!(result, Err(PersistenceError::DatabaseError(_))));
}
