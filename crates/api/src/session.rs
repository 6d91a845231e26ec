// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session state and role-gated authorization.
//!
//! Every request carries a `Session`: either `Anonymous` or
//! `Authenticated` with a role and the principal's row ID. Authorization
//! is an exhaustive match over a closed set of operations, so adding an
//! operation without deciding who may perform it is a compile error.

use std::collections::HashMap;

use crewops_domain::Role;

use crate::error::AuthError;

/// An authenticated (or anonymous) request context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    /// No credentials presented, or the presented token is unknown.
    Anonymous,
    /// A logged-in principal.
    Authenticated {
        /// The principal's role.
        role: Role,
        /// The row ID of the admin or crew member.
        principal_id: i64,
        /// Display name captured at login for logging and responses.
        display_name: String,
    },
}

impl Session {
    /// Returns the principal's role, if authenticated.
    #[must_use]
    pub const fn role(&self) -> Option<Role> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { role, .. } => Some(*role),
        }
    }

    /// Returns the principal's row ID, if authenticated.
    #[must_use]
    pub const fn principal_id(&self) -> Option<i64> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { principal_id, .. } => Some(*principal_id),
        }
    }
}

/// The closed set of operations a session can be asked to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Create, update, or delete admin accounts.
    ManageAdmins,
    /// Create, update, or delete crew member records.
    ManageCrewMembers,
    /// Create, update, or delete flights.
    ManageFlights,
    /// Create, update, or delete airports.
    ManageAirports,
    /// Create, update, or delete crew assignments.
    ManageAssignments,
    /// Create, update, or delete leave records.
    ManageLeaves,
    /// Create, update, or delete duty log entries.
    ManageDutyLogs,
    /// Create, update, or delete regulations.
    ManageRegulations,
    /// View one's own crew assignments.
    ViewOwnAssignments,
    /// View one's own leave records.
    ViewOwnLeaves,
    /// View one's own duty log entries.
    ViewOwnDutyLogs,
    /// View the regulation catalog.
    ViewRegulations,
}

impl Operation {
    /// Returns the operation name used in error messages and logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ManageAdmins => "manage_admins",
            Self::ManageCrewMembers => "manage_crew_members",
            Self::ManageFlights => "manage_flights",
            Self::ManageAirports => "manage_airports",
            Self::ManageAssignments => "manage_assignments",
            Self::ManageLeaves => "manage_leaves",
            Self::ManageDutyLogs => "manage_duty_logs",
            Self::ManageRegulations => "manage_regulations",
            Self::ViewOwnAssignments => "view_own_assignments",
            Self::ViewOwnLeaves => "view_own_leaves",
            Self::ViewOwnDutyLogs => "view_own_duty_logs",
            Self::ViewRegulations => "view_regulations",
        }
    }
}

/// Checks whether a session may perform an operation.
///
/// Admins hold every `Manage*` operation plus the regulation catalog.
/// Crew members hold only self-scoped views and the regulation catalog.
/// Anonymous sessions hold nothing.
///
/// # Errors
///
/// Returns an error if the session lacks the operation.
pub fn authorize(session: &Session, operation: Operation) -> Result<(), AuthError> {
    let Some(role) = session.role() else {
        return Err(AuthError::AuthenticationFailed {
            reason: String::from("Not logged in"),
        });
    };

    let allowed: bool = match role {
        Role::Admin => match operation {
            Operation::ManageAdmins
            | Operation::ManageCrewMembers
            | Operation::ManageFlights
            | Operation::ManageAirports
            | Operation::ManageAssignments
            | Operation::ManageLeaves
            | Operation::ManageDutyLogs
            | Operation::ManageRegulations
            | Operation::ViewRegulations => true,
            // Admins use the Manage* operations with explicit filters
            Operation::ViewOwnAssignments
            | Operation::ViewOwnLeaves
            | Operation::ViewOwnDutyLogs => false,
        },
        Role::CrewMember => match operation {
            Operation::ViewOwnAssignments
            | Operation::ViewOwnLeaves
            | Operation::ViewOwnDutyLogs
            | Operation::ViewRegulations => true,
            Operation::ManageAdmins
            | Operation::ManageCrewMembers
            | Operation::ManageFlights
            | Operation::ManageAirports
            | Operation::ManageAssignments
            | Operation::ManageLeaves
            | Operation::ManageDutyLogs
            | Operation::ManageRegulations => false,
        },
    };

    if allowed {
        Ok(())
    } else {
        Err(AuthError::Unauthorized {
            action: String::from(operation.name()),
            required_role: required_role_for(operation),
        })
    }
}

/// Names the role an operation requires, for error messages.
fn required_role_for(operation: Operation) -> String {
    match operation {
        Operation::ManageAdmins
        | Operation::ManageCrewMembers
        | Operation::ManageFlights
        | Operation::ManageAirports
        | Operation::ManageAssignments
        | Operation::ManageLeaves
        | Operation::ManageDutyLogs
        | Operation::ManageRegulations => String::from("Admin"),
        Operation::ViewOwnAssignments
        | Operation::ViewOwnLeaves
        | Operation::ViewOwnDutyLogs => String::from("CrewMember"),
        Operation::ViewRegulations => String::from("Admin or CrewMember"),
    }
}

/// In-process session manager mapping opaque tokens to sessions.
///
/// Sessions live for the lifetime of the process; there is no expiry.
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: HashMap<String, Session>,
}

impl SessionManager {
    /// Creates an empty session manager.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    /// Stores a session and returns its freshly generated token.
    pub fn insert(&mut self, session: Session) -> String {
        let token: String = generate_session_token();
        self.sessions.insert(token.clone(), session);
        token
    }

    /// Resolves a token to its session.
    ///
    /// Unknown tokens resolve to `Session::Anonymous` so request handling
    /// takes a single path.
    #[must_use]
    pub fn resolve(&self, token: &str) -> Session {
        self.sessions
            .get(token)
            .cloned()
            .unwrap_or(Session::Anonymous)
    }

    /// Removes a session. Returns true if the token was known.
    pub fn remove(&mut self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }

    /// Returns the number of live sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns true if no sessions are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// Generates a session token.
///
/// In a production system, this would use a cryptographically secure
/// random number generator. For simplicity, we use a timestamp-based
/// approach here.
fn generate_session_token() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let timestamp: u128 = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_nanos();
    format!("session_{timestamp}_{}", rand::random::<u64>())
}
