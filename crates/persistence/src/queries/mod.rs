// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for the persistence layer.
//!
//! This module contains all read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `principals` — Admin and crew member queries (including credential lookups)
//! - `flights` — Flight queries
//! - `airports` — Airport queries
//! - `assignments` — Crew assignment queries
//! - `leaves` — Crew leave queries
//! - `duty_logs` — Duty log queries
//! - `regulations` — Regulation queries
//!
//! ## Backend-Specific Functions
//!
//! All query functions are generated in backend-specific monomorphic versions:
//! - Functions suffixed with `_sqlite` for `SQLite`
//! - Functions suffixed with `_mysql` for `MySQL`/`MariaDB`
//!
//! The `Persistence` adapter in `lib.rs` dispatches to the appropriate version
//! based on the active backend connection.

pub mod airports;
pub mod assignments;
pub mod duty_logs;
pub mod flights;
pub mod leaves;
pub mod principals;
pub mod regulations;
