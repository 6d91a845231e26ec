// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Role-gated operation handlers.
//!
//! Every handler authorizes the session against its operation before
//! touching the store. Self-scoped views resolve the crew filter from
//! the session's principal ID, never from caller input.

use tracing::info;

use crewops_domain::{
    Admin, Airport, CrewAssignment, CrewLeave, CrewMember, CrewStatus, DutyLog, Flight, Regulation,
    validate_email,
};
use crewops_persistence::{DeletePolicy, NewCrewMember, Persistence};

use crate::error::ApiError;
use crate::password_policy::PasswordPolicy;
use crate::request_response::{
    AirportRequest, AssignmentRequest, DutyLogRequest, FlightRequest, LeaveRequest,
    RegulationRequest, UpdateAdminRequest, UpdateCrewMemberRequest,
};
use crate::session::{Operation, Session, authorize};

fn delete_policy(cascade: bool) -> DeletePolicy {
    if cascade {
        DeletePolicy::Cascade
    } else {
        DeletePolicy::Restrict
    }
}

// ============================================================================
// Admins
// ============================================================================

/// Lists all admin accounts.
///
/// # Errors
///
/// Returns an error if the session is not an admin or the query fails.
pub fn list_admins(
    persistence: &mut Persistence,
    session: &Session,
) -> Result<Vec<Admin>, ApiError> {
    authorize(session, Operation::ManageAdmins)?;
    Ok(persistence.list_admins()?)
}

/// Retrieves an admin by ID.
///
/// # Errors
///
/// Returns an error if the session is not an admin or the admin does not exist.
pub fn get_admin(
    persistence: &mut Persistence,
    session: &Session,
    admin_id: i64,
) -> Result<Admin, ApiError> {
    authorize(session, Operation::ManageAdmins)?;
    persistence
        .get_admin_by_id(admin_id)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Admin"),
            message: format!("Admin with ID {admin_id} does not exist"),
        })
}

/// Updates an admin's profile.
///
/// # Errors
///
/// Returns an error if the session is not an admin, the email is
/// malformed, or the admin does not exist.
pub fn update_admin(
    persistence: &mut Persistence,
    session: &Session,
    admin_id: i64,
    request: &UpdateAdminRequest,
) -> Result<(), ApiError> {
    authorize(session, Operation::ManageAdmins)?;
    validate_email(&request.email)?;
    persistence.update_admin(admin_id, &request.name, &request.email, &request.phone)?;
    Ok(())
}

/// Deletes an admin account.
///
/// # Errors
///
/// Returns an error if the session is not an admin or the admin does not exist.
pub fn delete_admin(
    persistence: &mut Persistence,
    session: &Session,
    admin_id: i64,
) -> Result<(), ApiError> {
    authorize(session, Operation::ManageAdmins)?;
    persistence.delete_admin(admin_id)?;
    info!(admin_id, "Deleted admin");
    Ok(())
}

// ============================================================================
// Crew Members
// ============================================================================

/// Lists all crew members.
///
/// # Errors
///
/// Returns an error if the session is not an admin or the query fails.
pub fn list_crew_members(
    persistence: &mut Persistence,
    session: &Session,
) -> Result<Vec<CrewMember>, ApiError> {
    authorize(session, Operation::ManageCrewMembers)?;
    Ok(persistence.list_crew_members()?)
}

/// Retrieves a crew member by ID.
///
/// # Errors
///
/// Returns an error if the session is not an admin or the crew member
/// does not exist.
pub fn get_crew_member(
    persistence: &mut Persistence,
    session: &Session,
    crew_id: i64,
) -> Result<CrewMember, ApiError> {
    authorize(session, Operation::ManageCrewMembers)?;
    persistence
        .get_crew_member_by_id(crew_id)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Crew member"),
            message: format!("Crew member with ID {crew_id} does not exist"),
        })
}

/// Updates a crew member's profile fields.
///
/// # Errors
///
/// Returns an error if the session is not an admin, the email is
/// malformed, or the crew member does not exist.
pub fn update_crew_member(
    persistence: &mut Persistence,
    session: &Session,
    crew_id: i64,
    request: &UpdateCrewMemberRequest,
) -> Result<(), ApiError> {
    authorize(session, Operation::ManageCrewMembers)?;
    validate_email(&request.email)?;

    let profile: NewCrewMember = NewCrewMember {
        first_name: request.first_name.clone(),
        last_name: request.last_name.clone(),
        date_of_birth: request.date_of_birth.clone(),
        crew_role: request.crew_role.clone(),
        hire_date: request.hire_date.clone(),
        email: request.email.clone(),
        phone_number: request.phone_number.clone(),
    };
    persistence.update_crew_member(crew_id, &profile)?;
    Ok(())
}

/// Updates a crew member's employment status.
///
/// # Errors
///
/// Returns an error if the session is not an admin, the status label is
/// unknown, or the crew member does not exist.
pub fn update_crew_member_status(
    persistence: &mut Persistence,
    session: &Session,
    crew_id: i64,
    status: &str,
) -> Result<(), ApiError> {
    authorize(session, Operation::ManageCrewMembers)?;
    let status: CrewStatus = status.parse::<CrewStatus>()?;
    persistence.update_crew_member_status(crew_id, status)?;
    info!(crew_id, status = status.as_str(), "Updated crew status");
    Ok(())
}

/// Updates a crew member's password.
///
/// The new password is checked against the password policy using the
/// crew member's stored email.
///
/// # Errors
///
/// Returns an error if the session is not an admin, the crew member does
/// not exist, or the password violates policy.
pub fn update_crew_password(
    persistence: &mut Persistence,
    session: &Session,
    crew_id: i64,
    new_password: &str,
) -> Result<(), ApiError> {
    authorize(session, Operation::ManageCrewMembers)?;

    let member: CrewMember = persistence.get_crew_member_by_id(crew_id)?.ok_or_else(|| {
        ApiError::ResourceNotFound {
            resource_type: String::from("Crew member"),
            message: format!("Crew member with ID {crew_id} does not exist"),
        }
    })?;
    PasswordPolicy::default().validate(new_password, &member.email)?;

    persistence.update_crew_password(crew_id, new_password)?;
    info!(crew_id, "Updated crew member password");
    Ok(())
}

/// Deletes a crew member.
///
/// # Errors
///
/// Returns an error if the session is not an admin, the crew member does
/// not exist, or dependent rows block a restrict delete.
pub fn delete_crew_member(
    persistence: &mut Persistence,
    session: &Session,
    crew_id: i64,
    cascade: bool,
) -> Result<(), ApiError> {
    authorize(session, Operation::ManageCrewMembers)?;
    persistence.delete_crew_member(crew_id, delete_policy(cascade))?;
    info!(crew_id, cascade, "Deleted crew member");
    Ok(())
}

// ============================================================================
// Flights
// ============================================================================

/// Creates a new flight.
///
/// # Errors
///
/// Returns an error if the session is not an admin or the insert fails.
pub fn create_flight(
    persistence: &mut Persistence,
    session: &Session,
    request: &FlightRequest,
) -> Result<i64, ApiError> {
    authorize(session, Operation::ManageFlights)?;
    Ok(persistence.create_flight(
        &request.flight_number,
        &request.departure,
        &request.arrival,
        &request.status,
    )?)
}

/// Retrieves a flight by ID.
///
/// # Errors
///
/// Returns an error if the session is not an admin or the flight does not exist.
pub fn get_flight(
    persistence: &mut Persistence,
    session: &Session,
    flight_id: i64,
) -> Result<Flight, ApiError> {
    authorize(session, Operation::ManageFlights)?;
    persistence
        .get_flight_by_id(flight_id)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Flight"),
            message: format!("Flight with ID {flight_id} does not exist"),
        })
}

/// Lists all flights.
///
/// # Errors
///
/// Returns an error if the session is not an admin or the query fails.
pub fn list_flights(
    persistence: &mut Persistence,
    session: &Session,
) -> Result<Vec<Flight>, ApiError> {
    authorize(session, Operation::ManageFlights)?;
    Ok(persistence.list_flights()?)
}

/// Updates a flight.
///
/// # Errors
///
/// Returns an error if the session is not an admin or the flight does not exist.
pub fn update_flight(
    persistence: &mut Persistence,
    session: &Session,
    flight_id: i64,
    request: &FlightRequest,
) -> Result<(), ApiError> {
    authorize(session, Operation::ManageFlights)?;
    persistence.update_flight(
        flight_id,
        &request.flight_number,
        &request.departure,
        &request.arrival,
        &request.status,
    )?;
    Ok(())
}

/// Deletes a flight.
///
/// # Errors
///
/// Returns an error if the session is not an admin, the flight does not
/// exist, or dependent rows block a restrict delete.
pub fn delete_flight(
    persistence: &mut Persistence,
    session: &Session,
    flight_id: i64,
    cascade: bool,
) -> Result<(), ApiError> {
    authorize(session, Operation::ManageFlights)?;
    persistence.delete_flight(flight_id, delete_policy(cascade))?;
    info!(flight_id, cascade, "Deleted flight");
    Ok(())
}

// ============================================================================
// Airports
// ============================================================================

/// Creates a new airport.
///
/// # Errors
///
/// Returns an error if the session is not an admin or the insert fails.
pub fn create_airport(
    persistence: &mut Persistence,
    session: &Session,
    request: &AirportRequest,
) -> Result<i64, ApiError> {
    authorize(session, Operation::ManageAirports)?;
    Ok(persistence.create_airport(
        &request.airport_code,
        &request.airport_name,
        &request.location,
    )?)
}

/// Retrieves an airport by ID.
///
/// # Errors
///
/// Returns an error if the session is not an admin or the airport does not exist.
pub fn get_airport(
    persistence: &mut Persistence,
    session: &Session,
    airport_id: i64,
) -> Result<Airport, ApiError> {
    authorize(session, Operation::ManageAirports)?;
    persistence
        .get_airport_by_id(airport_id)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Airport"),
            message: format!("Airport with ID {airport_id} does not exist"),
        })
}

/// Lists all airports.
///
/// # Errors
///
/// Returns an error if the session is not an admin or the query fails.
pub fn list_airports(
    persistence: &mut Persistence,
    session: &Session,
) -> Result<Vec<Airport>, ApiError> {
    authorize(session, Operation::ManageAirports)?;
    Ok(persistence.list_airports()?)
}

/// Updates an airport.
///
/// # Errors
///
/// Returns an error if the session is not an admin or the airport does not exist.
pub fn update_airport(
    persistence: &mut Persistence,
    session: &Session,
    airport_id: i64,
    request: &AirportRequest,
) -> Result<(), ApiError> {
    authorize(session, Operation::ManageAirports)?;
    persistence.update_airport(
        airport_id,
        &request.airport_code,
        &request.airport_name,
        &request.location,
    )?;
    Ok(())
}

/// Deletes an airport.
///
/// # Errors
///
/// Returns an error if the session is not an admin or the airport does not exist.
pub fn delete_airport(
    persistence: &mut Persistence,
    session: &Session,
    airport_id: i64,
) -> Result<(), ApiError> {
    authorize(session, Operation::ManageAirports)?;
    persistence.delete_airport(airport_id)?;
    Ok(())
}

// ============================================================================
// Crew Assignments
// ============================================================================

/// Creates a new crew assignment.
///
/// # Errors
///
/// Returns an error if the session is not an admin or a referenced row
/// does not exist.
pub fn create_assignment(
    persistence: &mut Persistence,
    session: &Session,
    request: &AssignmentRequest,
) -> Result<i64, ApiError> {
    authorize(session, Operation::ManageAssignments)?;
    Ok(persistence.create_assignment(
        request.crew_id,
        request.flight_id,
        &request.assignment_date,
    )?)
}

/// Retrieves an assignment by ID.
///
/// # Errors
///
/// Returns an error if the session is not an admin or the assignment
/// does not exist.
pub fn get_assignment(
    persistence: &mut Persistence,
    session: &Session,
    assignment_id: i64,
) -> Result<CrewAssignment, ApiError> {
    authorize(session, Operation::ManageAssignments)?;
    persistence
        .get_assignment_by_id(assignment_id)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Assignment"),
            message: format!("Assignment with ID {assignment_id} does not exist"),
        })
}

/// Lists assignments, optionally filtered to one crew member.
///
/// # Errors
///
/// Returns an error if the session is not an admin or the query fails.
pub fn list_assignments(
    persistence: &mut Persistence,
    session: &Session,
    crew_id: Option<i64>,
) -> Result<Vec<CrewAssignment>, ApiError> {
    authorize(session, Operation::ManageAssignments)?;
    Ok(persistence.list_assignments(crew_id)?)
}

/// Updates a crew assignment.
///
/// # Errors
///
/// Returns an error if the session is not an admin, the assignment does
/// not exist, or a new reference is invalid.
pub fn update_assignment(
    persistence: &mut Persistence,
    session: &Session,
    assignment_id: i64,
    request: &AssignmentRequest,
) -> Result<(), ApiError> {
    authorize(session, Operation::ManageAssignments)?;
    persistence.update_assignment(
        assignment_id,
        request.crew_id,
        request.flight_id,
        &request.assignment_date,
    )?;
    Ok(())
}

/// Deletes a crew assignment.
///
/// # Errors
///
/// Returns an error if the session is not an admin or the assignment
/// does not exist.
pub fn delete_assignment(
    persistence: &mut Persistence,
    session: &Session,
    assignment_id: i64,
) -> Result<(), ApiError> {
    authorize(session, Operation::ManageAssignments)?;
    persistence.delete_assignment(assignment_id)?;
    Ok(())
}

// ============================================================================
// Crew Leaves
// ============================================================================

/// Creates a new leave record.
///
/// # Errors
///
/// Returns an error if the session is not an admin or the referenced
/// crew member does not exist.
pub fn create_leave(
    persistence: &mut Persistence,
    session: &Session,
    request: &LeaveRequest,
) -> Result<i64, ApiError> {
    authorize(session, Operation::ManageLeaves)?;
    Ok(persistence.create_leave(request.crew_id, &request.start_date, &request.end_date)?)
}

/// Retrieves a leave record by ID.
///
/// # Errors
///
/// Returns an error if the session is not an admin or the leave record
/// does not exist.
pub fn get_leave(
    persistence: &mut Persistence,
    session: &Session,
    leave_id: i64,
) -> Result<CrewLeave, ApiError> {
    authorize(session, Operation::ManageLeaves)?;
    persistence
        .get_leave_by_id(leave_id)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Leave"),
            message: format!("Leave with ID {leave_id} does not exist"),
        })
}

/// Lists leave records, optionally filtered to one crew member.
///
/// # Errors
///
/// Returns an error if the session is not an admin or the query fails.
pub fn list_leaves(
    persistence: &mut Persistence,
    session: &Session,
    crew_id: Option<i64>,
) -> Result<Vec<CrewLeave>, ApiError> {
    authorize(session, Operation::ManageLeaves)?;
    Ok(persistence.list_leaves(crew_id)?)
}

/// Updates a leave record.
///
/// # Errors
///
/// Returns an error if the session is not an admin or the leave record
/// does not exist.
pub fn update_leave(
    persistence: &mut Persistence,
    session: &Session,
    leave_id: i64,
    request: &LeaveRequest,
) -> Result<(), ApiError> {
    authorize(session, Operation::ManageLeaves)?;
    persistence.update_leave(
        leave_id,
        request.crew_id,
        &request.start_date,
        &request.end_date,
    )?;
    Ok(())
}

/// Deletes a leave record.
///
/// # Errors
///
/// Returns an error if the session is not an admin or the leave record
/// does not exist.
pub fn delete_leave(
    persistence: &mut Persistence,
    session: &Session,
    leave_id: i64,
) -> Result<(), ApiError> {
    authorize(session, Operation::ManageLeaves)?;
    persistence.delete_leave(leave_id)?;
    Ok(())
}

// ============================================================================
// Duty Logs
// ============================================================================

/// Creates a new duty log entry.
///
/// # Errors
///
/// Returns an error if the session is not an admin or a referenced row
/// does not exist.
pub fn create_duty_log(
    persistence: &mut Persistence,
    session: &Session,
    request: &DutyLogRequest,
) -> Result<i64, ApiError> {
    authorize(session, Operation::ManageDutyLogs)?;
    Ok(persistence.create_duty_log(
        request.crew_id,
        request.flight_id,
        &request.duty_date,
        &request.duty_status,
    )?)
}

/// Retrieves a duty log entry by ID.
///
/// # Errors
///
/// Returns an error if the session is not an admin or the entry does not exist.
pub fn get_duty_log(
    persistence: &mut Persistence,
    session: &Session,
    duty_log_id: i64,
) -> Result<DutyLog, ApiError> {
    authorize(session, Operation::ManageDutyLogs)?;
    persistence
        .get_duty_log_by_id(duty_log_id)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Duty log"),
            message: format!("Duty log with ID {duty_log_id} does not exist"),
        })
}

/// Lists duty log entries, optionally filtered to one crew member.
///
/// # Errors
///
/// Returns an error if the session is not an admin or the query fails.
pub fn list_duty_logs(
    persistence: &mut Persistence,
    session: &Session,
    crew_id: Option<i64>,
) -> Result<Vec<DutyLog>, ApiError> {
    authorize(session, Operation::ManageDutyLogs)?;
    Ok(persistence.list_duty_logs(crew_id)?)
}

/// Updates a duty log entry.
///
/// # Errors
///
/// Returns an error if the session is not an admin, the entry does not
/// exist, or a new reference is invalid.
pub fn update_duty_log(
    persistence: &mut Persistence,
    session: &Session,
    duty_log_id: i64,
    request: &DutyLogRequest,
) -> Result<(), ApiError> {
    authorize(session, Operation::ManageDutyLogs)?;
    persistence.update_duty_log(
        duty_log_id,
        request.crew_id,
        request.flight_id,
        &request.duty_date,
        &request.duty_status,
    )?;
    Ok(())
}

/// Deletes a duty log entry.
///
/// # Errors
///
/// Returns an error if the session is not an admin or the entry does not exist.
pub fn delete_duty_log(
    persistence: &mut Persistence,
    session: &Session,
    duty_log_id: i64,
) -> Result<(), ApiError> {
    authorize(session, Operation::ManageDutyLogs)?;
    persistence.delete_duty_log(duty_log_id)?;
    Ok(())
}

// ============================================================================
// Regulations
// ============================================================================

/// Creates a new regulation.
///
/// # Errors
///
/// Returns an error if the session is not an admin or the insert fails.
pub fn create_regulation(
    persistence: &mut Persistence,
    session: &Session,
    request: &RegulationRequest,
) -> Result<i64, ApiError> {
    authorize(session, Operation::ManageRegulations)?;
    Ok(persistence.create_regulation(&request.name, &request.description)?)
}

/// Retrieves a regulation by ID.
///
/// Available to any authenticated principal.
///
/// # Errors
///
/// Returns an error if the session is anonymous or the regulation does
/// not exist.
pub fn get_regulation(
    persistence: &mut Persistence,
    session: &Session,
    regulation_id: i64,
) -> Result<Regulation, ApiError> {
    authorize(session, Operation::ViewRegulations)?;
    persistence
        .get_regulation_by_id(regulation_id)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Regulation"),
            message: format!("Regulation with ID {regulation_id} does not exist"),
        })
}

/// Lists the regulation catalog.
///
/// Available to any authenticated principal.
///
/// # Errors
///
/// Returns an error if the session is anonymous or the query fails.
pub fn list_regulations(
    persistence: &mut Persistence,
    session: &Session,
) -> Result<Vec<Regulation>, ApiError> {
    authorize(session, Operation::ViewRegulations)?;
    Ok(persistence.list_regulations()?)
}

/// Updates a regulation.
///
/// # Errors
///
/// Returns an error if the session is not an admin or the regulation
/// does not exist.
pub fn update_regulation(
    persistence: &mut Persistence,
    session: &Session,
    regulation_id: i64,
    request: &RegulationRequest,
) -> Result<(), ApiError> {
    authorize(session, Operation::ManageRegulations)?;
    persistence.update_regulation(regulation_id, &request.name, &request.description)?;
    Ok(())
}

/// Deletes a regulation.
///
/// # Errors
///
/// Returns an error if the session is not an admin or the regulation
/// does not exist.
pub fn delete_regulation(
    persistence: &mut Persistence,
    session: &Session,
    regulation_id: i64,
) -> Result<(), ApiError> {
    authorize(session, Operation::ManageRegulations)?;
    persistence.delete_regulation(regulation_id)?;
    Ok(())
}

// ============================================================================
// Self-scoped views
// ============================================================================

/// Lists the calling crew member's own assignments.
///
/// The crew filter always comes from the session, never from the caller.
///
/// # Errors
///
/// Returns an error if the session is not a crew member or the query fails.
pub fn list_my_assignments(
    persistence: &mut Persistence,
    session: &Session,
) -> Result<Vec<CrewAssignment>, ApiError> {
    authorize(session, Operation::ViewOwnAssignments)?;
    let crew_id: i64 = session.principal_id().ok_or_else(|| ApiError::Internal {
        message: String::from("Authenticated session without principal ID"),
    })?;
    Ok(persistence.list_assignments(Some(crew_id))?)
}

/// Lists the calling crew member's own leave records.
///
/// # Errors
///
/// Returns an error if the session is not a crew member or the query fails.
pub fn list_my_leaves(
    persistence: &mut Persistence,
    session: &Session,
) -> Result<Vec<CrewLeave>, ApiError> {
    authorize(session, Operation::ViewOwnLeaves)?;
    let crew_id: i64 = session.principal_id().ok_or_else(|| ApiError::Internal {
        message: String::from("Authenticated session without principal ID"),
    })?;
    Ok(persistence.list_leaves(Some(crew_id))?)
}

/// Lists the calling crew member's own duty log entries.
///
/// # Errors
///
/// Returns an error if the session is not a crew member or the query fails.
pub fn list_my_duty_logs(
    persistence: &mut Persistence,
    session: &Session,
) -> Result<Vec<DutyLog>, ApiError> {
    authorize(session, Operation::ViewOwnDutyLogs)?;
    let crew_id: i64 = session.principal_id().ok_or_else(|| ApiError::Internal {
        message: String::from("Authenticated session without principal ID"),
    })?;
    Ok(persistence.list_duty_logs(Some(crew_id))?)
}
