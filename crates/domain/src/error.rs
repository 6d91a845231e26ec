// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Role string does not name a known principal role.
    InvalidRole(String),
    /// Crew status string does not name a known status.
    InvalidStatus(String),
    /// Email address is empty or structurally invalid.
    InvalidEmail(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRole(s) => {
                write!(f, "Invalid role: '{s}'. Must be 'Admin' or 'CrewMember'")
            }
            Self::InvalidStatus(s) => write!(f, "Invalid crew status: '{s}'"),
            Self::InvalidEmail(s) => write!(f, "Invalid email address: '{s}'"),
        }
    }
}

impl std::error::Error for DomainError {}
