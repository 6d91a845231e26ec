// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and account registration.
//!
//! Login verifies the presented password against the stored bcrypt digest
//! for the requested role's account table. Failures are reported with a
//! single uniform reason so callers cannot distinguish an unknown email
//! from a wrong password.

use tracing::{info, warn};

use crewops_domain::{CrewStatus, Role, validate_email};
use crewops_persistence::{AdminData, CrewMemberData, NewCrewMember, Persistence};

use crate::error::{ApiError, AuthError};
use crate::password_policy::PasswordPolicy;
use crate::request_response::{RegisterAdminRequest, RegisterCrewMemberRequest};
use crate::session::Session;

/// The uniform login failure reason.
const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Authentication service for credential verification and registration.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Authenticates a principal and returns an authenticated session.
    ///
    /// The role selects which account table is consulted; an admin email
    /// cannot log in as a crew member or vice versa.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `role` - The role to authenticate as
    /// * `email` - The account email
    /// * `password` - The plain text password
    ///
    /// # Errors
    ///
    /// Returns a uniform `AuthenticationFailed` error when the email is
    /// unknown or the password does not match.
    pub fn login(
        persistence: &mut Persistence,
        role: Role,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        match role {
            Role::Admin => {
                let admin: AdminData = persistence
                    .get_admin_by_email(email)
                    .map_err(|e| AuthError::AuthenticationFailed {
                        reason: format!("Database error: {e}"),
                    })?
                    .ok_or_else(|| {
                        warn!("Login failed for unknown admin email");
                        AuthError::AuthenticationFailed {
                            reason: String::from(INVALID_CREDENTIALS),
                        }
                    })?;

                let verified: bool = persistence
                    .verify_password(password, &admin.password_hash)
                    .map_err(|e| AuthError::AuthenticationFailed {
                        reason: format!("Verification error: {e}"),
                    })?;
                if !verified {
                    warn!(admin_id = admin.admin_id, "Login failed: wrong password");
                    return Err(AuthError::AuthenticationFailed {
                        reason: String::from(INVALID_CREDENTIALS),
                    });
                }

                info!(admin_id = admin.admin_id, "Admin logged in");
                Ok(Session::Authenticated {
                    role: Role::Admin,
                    principal_id: admin.admin_id,
                    display_name: admin.name,
                })
            }
            Role::CrewMember => {
                let member: CrewMemberData = persistence
                    .get_crew_member_by_email(email)
                    .map_err(|e| AuthError::AuthenticationFailed {
                        reason: format!("Database error: {e}"),
                    })?
                    .ok_or_else(|| {
                        warn!("Login failed for unknown crew member email");
                        AuthError::AuthenticationFailed {
                            reason: String::from(INVALID_CREDENTIALS),
                        }
                    })?;

                let verified: bool = persistence
                    .verify_password(password, &member.password_hash)
                    .map_err(|e| AuthError::AuthenticationFailed {
                        reason: format!("Verification error: {e}"),
                    })?;
                if !verified {
                    warn!(crew_id = member.crew_id, "Login failed: wrong password");
                    return Err(AuthError::AuthenticationFailed {
                        reason: String::from(INVALID_CREDENTIALS),
                    });
                }

                let display_name: String = format!("{} {}", member.first_name, member.last_name);
                info!(crew_id = member.crew_id, "Crew member logged in");
                Ok(Session::Authenticated {
                    role: Role::CrewMember,
                    principal_id: member.crew_id,
                    display_name,
                })
            }
        }
    }

    /// Registers a new admin account.
    ///
    /// # Errors
    ///
    /// Returns an error if the email is malformed, the password violates
    /// policy, or the store rejects the insert.
    pub fn register_admin(
        persistence: &mut Persistence,
        request: &RegisterAdminRequest,
    ) -> Result<i64, ApiError> {
        validate_email(&request.email)?;
        PasswordPolicy::default().validate(&request.password, &request.email)?;

        let admin_id: i64 = persistence.create_admin(
            &request.name,
            &request.email,
            &request.phone,
            &request.password,
        )?;

        info!(admin_id, "Registered admin account");
        Ok(admin_id)
    }

    /// Registers a new crew member account.
    ///
    /// When no status is supplied, the crew member starts as `Active`.
    ///
    /// # Errors
    ///
    /// Returns an error if the email or status is malformed, the password
    /// violates policy, or the store rejects the insert.
    pub fn register_crew_member(
        persistence: &mut Persistence,
        request: &RegisterCrewMemberRequest,
    ) -> Result<i64, ApiError> {
        validate_email(&request.email)?;
        PasswordPolicy::default().validate(&request.password, &request.email)?;

        let status: Option<CrewStatus> = match &request.status {
            Some(raw) => Some(raw.parse::<CrewStatus>()?),
            None => None,
        };

        let profile: NewCrewMember = NewCrewMember {
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            date_of_birth: request.date_of_birth.clone(),
            crew_role: request.crew_role.clone(),
            hire_date: request.hire_date.clone(),
            email: request.email.clone(),
            phone_number: request.phone_number.clone(),
        };

        let crew_id: i64 = persistence.create_crew_member(&profile, &request.password, status)?;

        info!(crew_id, "Registered crew member account");
        Ok(crew_id)
    }
}
