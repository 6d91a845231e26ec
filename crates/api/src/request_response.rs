// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response types for the API boundary.

use serde::{Deserialize, Serialize};

/// Request to register a new admin account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterAdminRequest {
    /// The display name.
    pub name: String,
    /// The email address (must be unique).
    pub email: String,
    /// The contact phone number.
    pub phone: String,
    /// The plain text password.
    pub password: String,
}

/// Request to register a new crew member account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterCrewMemberRequest {
    /// The crew member's first name.
    pub first_name: String,
    /// The crew member's last name.
    pub last_name: String,
    /// Date of birth (ISO 8601).
    pub date_of_birth: String,
    /// Operational role label (e.g. "Pilot", "Flight Attendant").
    pub crew_role: String,
    /// Hire date (ISO 8601).
    pub hire_date: String,
    /// The email address (must be unique).
    pub email: String,
    /// The contact phone number.
    pub phone_number: String,
    /// Optional initial employment status; defaults to Active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// The plain text password.
    pub password: String,
}

/// Request to update an admin's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAdminRequest {
    /// The new display name.
    pub name: String,
    /// The new email address.
    pub email: String,
    /// The new phone number.
    pub phone: String,
}

/// Request to update a crew member's profile.
///
/// Status and password have dedicated operations and are not part of
/// profile updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCrewMemberRequest {
    /// The new first name.
    pub first_name: String,
    /// The new last name.
    pub last_name: String,
    /// The new date of birth (ISO 8601).
    pub date_of_birth: String,
    /// The new operational role label.
    pub crew_role: String,
    /// The new hire date (ISO 8601).
    pub hire_date: String,
    /// The new email address.
    pub email: String,
    /// The new phone number.
    pub phone_number: String,
}

/// Request body for creating or updating a flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightRequest {
    /// The flight number (e.g. "CO101").
    pub flight_number: String,
    /// The departure airport or city.
    pub departure: String,
    /// The arrival airport or city.
    pub arrival: String,
    /// The flight status label.
    pub status: String,
}

/// Request body for creating or updating an airport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirportRequest {
    /// The airport code (e.g. "SEA").
    pub airport_code: String,
    /// The airport name.
    pub airport_name: String,
    /// The airport location.
    pub location: String,
}

/// Request body for creating or updating a crew assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentRequest {
    /// The assigned crew member.
    pub crew_id: i64,
    /// The flight assigned.
    pub flight_id: i64,
    /// The assignment date (ISO 8601).
    pub assignment_date: String,
}

/// Request body for creating or updating a leave record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// The crew member on leave.
    pub crew_id: i64,
    /// The leave start date (ISO 8601).
    pub start_date: String,
    /// The leave end date (ISO 8601).
    pub end_date: String,
}

/// Request body for creating or updating a duty log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DutyLogRequest {
    /// The crew member on duty.
    pub crew_id: i64,
    /// The flight worked.
    pub flight_id: i64,
    /// The duty date (ISO 8601).
    pub duty_date: String,
    /// The duty status label.
    pub duty_status: String,
}

/// Request body for creating or updating a regulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegulationRequest {
    /// The regulation name.
    pub name: String,
    /// The regulation description.
    pub description: String,
}

/// Response for create operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    /// The row ID of the created record.
    pub id: i64,
}
