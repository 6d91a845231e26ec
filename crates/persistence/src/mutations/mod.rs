// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutation modules for the persistence layer.
//!
//! This module contains all write operations for the persistence layer.
//!
//! ## Module Organization
//!
//! - `principals` — Admin and crew member mutations (including credential hashing)
//! - `flights` — Flight mutations
//! - `airports` — Airport mutations
//! - `assignments` — Crew assignment mutations
//! - `leaves` — Crew leave mutations
//! - `duty_logs` — Duty log mutations
//! - `regulations` — Regulation mutations
//!
//! ## Backend-Specific Functions
//!
//! All mutation functions are generated in backend-specific monomorphic versions:
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
