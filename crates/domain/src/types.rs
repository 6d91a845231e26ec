// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Principal roles for authentication and authorization.
///
/// The system recognizes exactly two roles. Roles gate which repository
/// operations a session may reach; they carry no further privileges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Administrator: full CRUD over every entity type.
    Admin,
    /// Crew member: self-scoped reads of assignments and duty logs,
    /// plus unscoped reads of regulations.
    CrewMember,
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Self::Admin),
            "CrewMember" => Ok(Self::CrewMember),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Role {
    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::CrewMember => "CrewMember",
        }
    }
}

/// Employment status of a crew member.
///
/// New crew members default to `Active` when no status is supplied at
/// registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CrewStatus {
    /// Actively flying and schedulable.
    #[default]
    Active,
    /// Not currently employed or schedulable.
    Inactive,
    /// Temporarily off the roster for approved leave.
    OnLeave,
    /// Removed from scheduling pending review.
    Suspended,
}

impl FromStr for CrewStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Inactive" => Ok(Self::Inactive),
            "OnLeave" => Ok(Self::OnLeave),
            "Suspended" => Ok(Self::Suspended),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for CrewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl CrewStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::OnLeave => "OnLeave",
            Self::Suspended => "Suspended",
        }
    }
}

/// An administrator record.
///
/// The password digest never appears here; it lives only in the
/// persistence layer's data models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    /// The canonical numeric identifier assigned by the database.
    pub admin_id: i64,
    /// Display name.
    pub name: String,
    /// Email address (unique; the natural key for authentication).
    pub email: String,
    /// Contact phone number.
    pub phone: String,
}

/// A crew member record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    /// The canonical numeric identifier assigned by the database.
    pub crew_id: i64,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Date of birth (ISO 8601).
    pub date_of_birth: String,
    /// Free-text role label (e.g., "Pilot", "Flight Attendant").
    pub crew_role: String,
    /// Hire date (ISO 8601).
    pub hire_date: String,
    /// Email address (unique; the natural key for authentication).
    pub email: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Employment status.
    pub status: CrewStatus,
}

impl CrewMember {
    /// Returns the display name used for session attribution.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A flight record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    /// The canonical numeric identifier assigned by the database.
    pub flight_id: i64,
    /// Flight number (e.g., "CO451").
    pub flight_number: String,
    /// Departure location.
    pub departure: String,
    /// Arrival location.
    pub arrival: String,
    /// Free-text status (e.g., "Scheduled", "Delayed").
    pub status: String,
}

/// An airport record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airport {
    /// The canonical numeric identifier assigned by the database.
    pub airport_id: i64,
    /// Airport code (e.g., "DEN").
    pub airport_code: String,
    /// Airport name.
    pub airport_name: String,
    /// Location (city/region).
    pub location: String,
}

/// An assignment of a crew member to a flight on a date.
///
/// References are raw identifiers; existence of the referenced crew
/// member and flight is guaranteed by the store's foreign keys, not by
/// this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewAssignment {
    /// The canonical numeric identifier assigned by the database.
    pub assignment_id: i64,
    /// The assigned crew member.
    pub crew_id: i64,
    /// The flight the crew member is assigned to.
    pub flight_id: i64,
    /// Assignment date (ISO 8601).
    pub assignment_date: String,
}

/// A leave period for a crew member.
///
/// `end_date >= start_date` is expected but deliberately not enforced;
/// see the persistence layer, which records reversed ranges as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewLeave {
    /// The canonical numeric identifier assigned by the database.
    pub leave_id: i64,
    /// The crew member on leave.
    pub crew_id: i64,
    /// Leave start date (ISO 8601).
    pub start_date: String,
    /// Leave end date (ISO 8601).
    pub end_date: String,
}

/// A duty log entry tying a crew member to a flight on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyLog {
    /// The canonical numeric identifier assigned by the database.
    pub duty_log_id: i64,
    /// The crew member on duty.
    pub crew_id: i64,
    /// The flight worked.
    pub flight_id: i64,
    /// Duty date (ISO 8601).
    pub duty_date: String,
    /// Free-text duty status (e.g., "Completed", "Missed").
    pub duty_status: String,
}

/// A regulation visible to all authenticated principals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Regulation {
    /// The canonical numeric identifier assigned by the database.
    pub regulation_id: i64,
    /// Regulation name.
    pub name: String,
    /// Regulation description.
    pub description: String,
}
