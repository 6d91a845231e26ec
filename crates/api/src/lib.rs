// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the CrewOps crew operations system.
//!
//! This crate sits between the HTTP surface and the persistence layer.
//! It owns authentication (credential verification and registration),
//! session state, role-gated authorization, and the operation handlers
//! that the server dispatches to. The persistence layer is never exposed
//! to callers directly; every operation passes through an authorization
//! check first.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
pub mod handlers;
mod password_policy;
mod request_response;
mod session;

#[cfg(test)]
mod tests;

pub use auth::AuthenticationService;
pub use error::{ApiError, AuthError, translate_domain_error, translate_persistence_error};
pub use password_policy::{PasswordPolicy, PasswordPolicyError};
pub use request_response::{
    AirportRequest, AssignmentRequest, CreatedResponse, DutyLogRequest, FlightRequest,
    LeaveRequest, RegisterAdminRequest, RegisterCrewMemberRequest, RegulationRequest,
    UpdateAdminRequest, UpdateCrewMemberRequest,
};
pub use session::{Operation, Session, SessionManager, authorize};
