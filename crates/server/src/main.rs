// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use crewops_api::{
    AirportRequest, ApiError, AssignmentRequest, AuthError, AuthenticationService,
    CreatedResponse, DutyLogRequest, FlightRequest, LeaveRequest, RegisterAdminRequest,
    RegisterCrewMemberRequest, RegulationRequest, Session, SessionManager, UpdateAdminRequest,
    UpdateCrewMemberRequest, handlers,
};
use crewops_domain::{
    Admin, Airport, CrewAssignment, CrewLeave, CrewMember, DutyLog, Flight, Regulation, Role,
};
use crewops_persistence::Persistence;

mod session;

use session::CurrentSession;

/// CrewOps Server - HTTP server for the CrewOps crew operations system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// `MySQL`/`MariaDB` connection URL. Takes precedence over --database.
    #[arg(long, env = "DATABASE_URL")]
    mysql_url: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The persistence layer and session manager are each wrapped in a Mutex
/// to allow safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for all entity storage.
    persistence: Arc<Mutex<Persistence>>,
    /// The in-process session manager.
    sessions: Arc<Mutex<SessionManager>>,
}

/// API request for logging in.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct LoginApiRequest {
    /// The role to authenticate as ("admin" or "crew_member").
    role: String,
    /// The account email.
    email: String,
    /// The plain text password.
    password: String,
}

/// API response for a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoginApiResponse {
    /// The opaque session token for subsequent requests.
    token: String,
    /// The authenticated role.
    role: String,
    /// The principal's row ID.
    principal_id: i64,
    /// The principal's display name.
    display_name: String,
}

/// API response describing the caller's session.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WhoAmIResponse {
    /// Whether the session is authenticated.
    authenticated: bool,
    /// The authenticated role, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    /// The principal's row ID, if authenticated.
    #[serde(skip_serializing_if = "Option::is_none")]
    principal_id: Option<i64>,
    /// The principal's display name, if authenticated.
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
}

/// API request for updating a crew member's status.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct StatusUpdateRequest {
    /// The new status label.
    status: String,
}

/// API request for updating a crew member's password.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct PasswordUpdateRequest {
    /// The new plain text password.
    password: String,
}

/// Query parameters for delete endpoints with a policy choice.
#[derive(Debug, Deserialize)]
struct DeleteQuery {
    /// When true, dependent rows are deleted in the same transaction.
    #[serde(default)]
    cascade: bool,
}

/// Query parameters for list endpoints with an optional crew filter.
#[derive(Debug, Deserialize)]
struct CrewFilterQuery {
    /// When present, only rows for this crew member.
    crew_id: Option<i64>,
}

/// API response for write operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WriteResponse {
    /// Success indicator.
    success: bool,
    /// Optional message.
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::InvalidInput { .. } | ApiError::PasswordPolicyViolation { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::IntegrityViolation { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<AuthError> for HttpError {
    fn from(err: AuthError) -> Self {
        let status: StatusCode = match &err {
            AuthError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            AuthError::Unauthorized { .. } => StatusCode::FORBIDDEN,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Parses a role string into a Role enum.
fn parse_role(role_str: &str) -> Result<Role, HttpError> {
    match role_str.to_lowercase().as_str() {
        "admin" => Ok(Role::Admin),
        "crew_member" | "crewmember" | "crew" => Ok(Role::CrewMember),
        _ => Err(HttpError {
            status: StatusCode::BAD_REQUEST,
            message: format!("Invalid role: '{role_str}'. Must be 'admin' or 'crew_member'"),
        }),
    }
}

/// Handler for POST /login endpoint.
///
/// Verifies credentials and issues a session token.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<LoginApiRequest>,
) -> Result<Json<LoginApiResponse>, HttpError> {
    info!(role = %req.role, "Handling login request");

    let role: Role = parse_role(&req.role)?;

    let mut persistence = app_state.persistence.lock().await;
    let session: Session =
        AuthenticationService::login(&mut persistence, role, &req.email, &req.password)?;
    drop(persistence);

    let Session::Authenticated {
        role,
        principal_id,
        display_name,
    } = session.clone()
    else {
        return Err(HttpError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: String::from("Login produced an anonymous session"),
        });
    };

    let mut sessions = app_state.sessions.lock().await;
    let token: String = sessions.insert(session);
    drop(sessions);

    Ok(Json(LoginApiResponse {
        token,
        role: role.to_string(),
        principal_id,
        display_name,
    }))
}

/// Handler for POST /logout endpoint.
///
/// Removes the caller's session. Logging out an unknown token is not an
/// error.
async fn handle_logout(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<WriteResponse>, HttpError> {
    let token: Option<&str> = headers
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    if let Some(token) = token {
        let mut sessions = app_state.sessions.lock().await;
        let removed: bool = sessions.remove(token);
        drop(sessions);
        info!(removed, "Handled logout request");
    }

    Ok(Json(WriteResponse {
        success: true,
        message: Some(String::from("Logged out")),
    }))
}

/// Handler for POST /register/admin endpoint.
async fn handle_register_admin(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RegisterAdminRequest>,
) -> Result<Json<CreatedResponse>, HttpError> {
    info!("Handling register_admin request");

    let mut persistence = app_state.persistence.lock().await;
    let admin_id: i64 = AuthenticationService::register_admin(&mut persistence, &req)?;
    drop(persistence);

    Ok(Json(CreatedResponse { id: admin_id }))
}

/// Handler for POST /register/crew_member endpoint.
async fn handle_register_crew_member(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RegisterCrewMemberRequest>,
) -> Result<Json<CreatedResponse>, HttpError> {
    info!("Handling register_crew_member request");

    let mut persistence = app_state.persistence.lock().await;
    let crew_id: i64 = AuthenticationService::register_crew_member(&mut persistence, &req)?;
    drop(persistence);

    Ok(Json(CreatedResponse { id: crew_id }))
}

/// Handler for GET /whoami endpoint.
async fn handle_whoami(CurrentSession(session): CurrentSession) -> Json<WhoAmIResponse> {
    match session {
        Session::Anonymous => Json(WhoAmIResponse {
            authenticated: false,
            role: None,
            principal_id: None,
            display_name: None,
        }),
        Session::Authenticated {
            role,
            principal_id,
            display_name,
        } => Json(WhoAmIResponse {
            authenticated: true,
            role: Some(role.to_string()),
            principal_id: Some(principal_id),
            display_name: Some(display_name),
        }),
    }
}

// ============================================================================
// Admins
// ============================================================================

/// Handler for GET /admins endpoint.
async fn handle_list_admins(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
) -> Result<Json<Vec<Admin>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let admins: Vec<Admin> = handlers::list_admins(&mut persistence, &session)?;
    drop(persistence);
    Ok(Json(admins))
}

/// Handler for GET `/admins/{id}` endpoint.
async fn handle_get_admin(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
    Path(admin_id): Path<i64>,
) -> Result<Json<Admin>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let admin: Admin = handlers::get_admin(&mut persistence, &session, admin_id)?;
    drop(persistence);
    Ok(Json(admin))
}

/// Handler for PUT `/admins/{id}` endpoint.
async fn handle_update_admin(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
    Path(admin_id): Path<i64>,
    Json(req): Json<UpdateAdminRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    handlers::update_admin(&mut persistence, &session, admin_id, &req)?;
    drop(persistence);
    Ok(Json(WriteResponse {
        success: true,
        message: None,
    }))
}

/// Handler for DELETE `/admins/{id}` endpoint.
async fn handle_delete_admin(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
    Path(admin_id): Path<i64>,
) -> Result<Json<WriteResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    handlers::delete_admin(&mut persistence, &session, admin_id)?;
    drop(persistence);
    Ok(Json(WriteResponse {
        success: true,
        message: None,
    }))
}

// ============================================================================
// Crew Members
// ============================================================================

/// Handler for GET /crew_members endpoint.
async fn handle_list_crew_members(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
) -> Result<Json<Vec<CrewMember>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let members: Vec<CrewMember> = handlers::list_crew_members(&mut persistence, &session)?;
    drop(persistence);
    Ok(Json(members))
}

/// Handler for GET `/crew_members/{id}` endpoint.
async fn handle_get_crew_member(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
    Path(crew_id): Path<i64>,
) -> Result<Json<CrewMember>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let member: CrewMember = handlers::get_crew_member(&mut persistence, &session, crew_id)?;
    drop(persistence);
    Ok(Json(member))
}

/// Handler for PUT `/crew_members/{id}` endpoint.
async fn handle_update_crew_member(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
    Path(crew_id): Path<i64>,
    Json(req): Json<UpdateCrewMemberRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    handlers::update_crew_member(&mut persistence, &session, crew_id, &req)?;
    drop(persistence);
    Ok(Json(WriteResponse {
        success: true,
        message: None,
    }))
}

/// Handler for PUT `/crew_members/{id}/status` endpoint.
async fn handle_update_crew_status(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
    Path(crew_id): Path<i64>,
    Json(req): Json<StatusUpdateRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    handlers::update_crew_member_status(&mut persistence, &session, crew_id, &req.status)?;
    drop(persistence);
    Ok(Json(WriteResponse {
        success: true,
        message: None,
    }))
}

/// Handler for PUT `/crew_members/{id}/password` endpoint.
async fn handle_update_crew_password(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
    Path(crew_id): Path<i64>,
    Json(req): Json<PasswordUpdateRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    handlers::update_crew_password(&mut persistence, &session, crew_id, &req.password)?;
    drop(persistence);
    Ok(Json(WriteResponse {
        success: true,
        message: None,
    }))
}

/// Handler for DELETE `/crew_members/{id}` endpoint.
async fn handle_delete_crew_member(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
    Path(crew_id): Path<i64>,
    Query(query): Query<DeleteQuery>,
) -> Result<Json<WriteResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    handlers::delete_crew_member(&mut persistence, &session, crew_id, query.cascade)?;
    drop(persistence);
    Ok(Json(WriteResponse {
        success: true,
        message: None,
    }))
}

// ============================================================================
// Flights
// ============================================================================

/// Handler for POST /flights endpoint.
async fn handle_create_flight(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
    Json(req): Json<FlightRequest>,
) -> Result<Json<CreatedResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let flight_id: i64 = handlers::create_flight(&mut persistence, &session, &req)?;
    drop(persistence);
    Ok(Json(CreatedResponse { id: flight_id }))
}

/// Handler for GET /flights endpoint.
async fn handle_list_flights(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
) -> Result<Json<Vec<Flight>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let flights: Vec<Flight> = handlers::list_flights(&mut persistence, &session)?;
    drop(persistence);
    Ok(Json(flights))
}

/// Handler for GET `/flights/{id}` endpoint.
async fn handle_get_flight(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
    Path(flight_id): Path<i64>,
) -> Result<Json<Flight>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let flight: Flight = handlers::get_flight(&mut persistence, &session, flight_id)?;
    drop(persistence);
    Ok(Json(flight))
}

/// Handler for PUT `/flights/{id}` endpoint.
async fn handle_update_flight(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
    Path(flight_id): Path<i64>,
    Json(req): Json<FlightRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    handlers::update_flight(&mut persistence, &session, flight_id, &req)?;
    drop(persistence);
    Ok(Json(WriteResponse {
        success: true,
        message: None,
    }))
}

/// Handler for DELETE `/flights/{id}` endpoint.
async fn handle_delete_flight(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
    Path(flight_id): Path<i64>,
    Query(query): Query<DeleteQuery>,
) -> Result<Json<WriteResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    handlers::delete_flight(&mut persistence, &session, flight_id, query.cascade)?;
    drop(persistence);
    Ok(Json(WriteResponse {
        success: true,
        message: None,
    }))
}

// ============================================================================
// Airports
// ============================================================================

/// Handler for POST /airports endpoint.
async fn handle_create_airport(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
    Json(req): Json<AirportRequest>,
) -> Result<Json<CreatedResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let airport_id: i64 = handlers::create_airport(&mut persistence, &session, &req)?;
    drop(persistence);
    Ok(Json(CreatedResponse { id: airport_id }))
}

/// Handler for GET /airports endpoint.
async fn handle_list_airports(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
) -> Result<Json<Vec<Airport>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let airports: Vec<Airport> = handlers::list_airports(&mut persistence, &session)?;
    drop(persistence);
    Ok(Json(airports))
}

/// Handler for GET `/airports/{id}` endpoint.
async fn handle_get_airport(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
    Path(airport_id): Path<i64>,
) -> Result<Json<Airport>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let airport: Airport = handlers::get_airport(&mut persistence, &session, airport_id)?;
    drop(persistence);
    Ok(Json(airport))
}

/// Handler for PUT `/airports/{id}` endpoint.
async fn handle_update_airport(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
    Path(airport_id): Path<i64>,
    Json(req): Json<AirportRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    handlers::update_airport(&mut persistence, &session, airport_id, &req)?;
    drop(persistence);
    Ok(Json(WriteResponse {
        success: true,
        message: None,
    }))
}

/// Handler for DELETE `/airports/{id}` endpoint.
async fn handle_delete_airport(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
    Path(airport_id): Path<i64>,
) -> Result<Json<WriteResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    handlers::delete_airport(&mut persistence, &session, airport_id)?;
    drop(persistence);
    Ok(Json(WriteResponse {
        success: true,
        message: None,
    }))
}

// ============================================================================
// Crew Assignments
// ============================================================================

/// Handler for POST /assignments endpoint.
async fn handle_create_assignment(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
    Json(req): Json<AssignmentRequest>,
) -> Result<Json<CreatedResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let assignment_id: i64 = handlers::create_assignment(&mut persistence, &session, &req)?;
    drop(persistence);
    Ok(Json(CreatedResponse { id: assignment_id }))
}

/// Handler for GET /assignments endpoint.
async fn handle_list_assignments(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
    Query(query): Query<CrewFilterQuery>,
) -> Result<Json<Vec<CrewAssignment>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let assignments: Vec<CrewAssignment> =
        handlers::list_assignments(&mut persistence, &session, query.crew_id)?;
    drop(persistence);
    Ok(Json(assignments))
}

/// Handler for GET `/assignments/{id}` endpoint.
async fn handle_get_assignment(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
    Path(assignment_id): Path<i64>,
) -> Result<Json<CrewAssignment>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let assignment: CrewAssignment =
        handlers::get_assignment(&mut persistence, &session, assignment_id)?;
    drop(persistence);
    Ok(Json(assignment))
}

/// Handler for PUT `/assignments/{id}` endpoint.
async fn handle_update_assignment(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
    Path(assignment_id): Path<i64>,
    Json(req): Json<AssignmentRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    handlers::update_assignment(&mut persistence, &session, assignment_id, &req)?;
    drop(persistence);
    Ok(Json(WriteResponse {
        success: true,
        message: None,
    }))
}

/// Handler for DELETE `/assignments/{id}` endpoint.
async fn handle_delete_assignment(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
    Path(assignment_id): Path<i64>,
) -> Result<Json<WriteResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    handlers::delete_assignment(&mut persistence, &session, assignment_id)?;
    drop(persistence);
    Ok(Json(WriteResponse {
        success: true,
        message: None,
    }))
}

// ============================================================================
// Crew Leaves
// ============================================================================

/// Handler for POST /leaves endpoint.
async fn handle_create_leave(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
    Json(req): Json<LeaveRequest>,
) -> Result<Json<CreatedResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let leave_id: i64 = handlers::create_leave(&mut persistence, &session, &req)?;
    drop(persistence);
    Ok(Json(CreatedResponse { id: leave_id }))
}

/// Handler for GET /leaves endpoint.
async fn handle_list_leaves(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
    Query(query): Query<CrewFilterQuery>,
) -> Result<Json<Vec<CrewLeave>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let leaves: Vec<CrewLeave> = handlers::list_leaves(&mut persistence, &session, query.crew_id)?;
    drop(persistence);
    Ok(Json(leaves))
}

/// Handler for GET `/leaves/{id}` endpoint.
async fn handle_get_leave(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
    Path(leave_id): Path<i64>,
) -> Result<Json<CrewLeave>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let leave: CrewLeave = handlers::get_leave(&mut persistence, &session, leave_id)?;
    drop(persistence);
    Ok(Json(leave))
}

/// Handler for PUT `/leaves/{id}` endpoint.
async fn handle_update_leave(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
    Path(leave_id): Path<i64>,
    Json(req): Json<LeaveRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    handlers::update_leave(&mut persistence, &session, leave_id, &req)?;
    drop(persistence);
    Ok(Json(WriteResponse {
        success: true,
        message: None,
    }))
}

/// Handler for DELETE `/leaves/{id}` endpoint.
async fn handle_delete_leave(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
    Path(leave_id): Path<i64>,
) -> Result<Json<WriteResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    handlers::delete_leave(&mut persistence, &session, leave_id)?;
    drop(persistence);
    Ok(Json(WriteResponse {
        success: true,
        message: None,
    }))
}

// ============================================================================
// Duty Logs
// ============================================================================

/// Handler for POST /duty_logs endpoint.
async fn handle_create_duty_log(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
    Json(req): Json<DutyLogRequest>,
) -> Result<Json<CreatedResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let duty_log_id: i64 = handlers::create_duty_log(&mut persistence, &session, &req)?;
    drop(persistence);
    Ok(Json(CreatedResponse { id: duty_log_id }))
}

/// Handler for GET /duty_logs endpoint.
async fn handle_list_duty_logs(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
    Query(query): Query<CrewFilterQuery>,
) -> Result<Json<Vec<DutyLog>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let entries: Vec<DutyLog> =
        handlers::list_duty_logs(&mut persistence, &session, query.crew_id)?;
    drop(persistence);
    Ok(Json(entries))
}

/// Handler for GET `/duty_logs/{id}` endpoint.
async fn handle_get_duty_log(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
    Path(duty_log_id): Path<i64>,
) -> Result<Json<DutyLog>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let entry: DutyLog = handlers::get_duty_log(&mut persistence, &session, duty_log_id)?;
    drop(persistence);
    Ok(Json(entry))
}

/// Handler for PUT `/duty_logs/{id}` endpoint.
async fn handle_update_duty_log(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
    Path(duty_log_id): Path<i64>,
    Json(req): Json<DutyLogRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    handlers::update_duty_log(&mut persistence, &session, duty_log_id, &req)?;
    drop(persistence);
    Ok(Json(WriteResponse {
        success: true,
        message: None,
    }))
}

/// Handler for DELETE `/duty_logs/{id}` endpoint.
async fn handle_delete_duty_log(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
    Path(duty_log_id): Path<i64>,
) -> Result<Json<WriteResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    handlers::delete_duty_log(&mut persistence, &session, duty_log_id)?;
    drop(persistence);
    Ok(Json(WriteResponse {
        success: true,
        message: None,
    }))
}

// ============================================================================
// Regulations
// ============================================================================

/// Handler for POST /regulations endpoint.
async fn handle_create_regulation(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
    Json(req): Json<RegulationRequest>,
) -> Result<Json<CreatedResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let regulation_id: i64 = handlers::create_regulation(&mut persistence, &session, &req)?;
    drop(persistence);
    Ok(Json(CreatedResponse { id: regulation_id }))
}

/// Handler for GET /regulations endpoint.
///
/// Readable by any authenticated principal.
async fn handle_list_regulations(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
) -> Result<Json<Vec<Regulation>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let regulations: Vec<Regulation> = handlers::list_regulations(&mut persistence, &session)?;
    drop(persistence);
    Ok(Json(regulations))
}

/// Handler for GET `/regulations/{id}` endpoint.
async fn handle_get_regulation(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
    Path(regulation_id): Path<i64>,
) -> Result<Json<Regulation>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let regulation: Regulation =
        handlers::get_regulation(&mut persistence, &session, regulation_id)?;
    drop(persistence);
    Ok(Json(regulation))
}

/// Handler for PUT `/regulations/{id}` endpoint.
async fn handle_update_regulation(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
    Path(regulation_id): Path<i64>,
    Json(req): Json<RegulationRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    handlers::update_regulation(&mut persistence, &session, regulation_id, &req)?;
    drop(persistence);
    Ok(Json(WriteResponse {
        success: true,
        message: None,
    }))
}

/// Handler for DELETE `/regulations/{id}` endpoint.
async fn handle_delete_regulation(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
    Path(regulation_id): Path<i64>,
) -> Result<Json<WriteResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    handlers::delete_regulation(&mut persistence, &session, regulation_id)?;
    drop(persistence);
    Ok(Json(WriteResponse {
        success: true,
        message: None,
    }))
}

// ============================================================================
// Self-scoped views
// ============================================================================

/// Handler for GET /my/assignments endpoint.
async fn handle_my_assignments(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
) -> Result<Json<Vec<CrewAssignment>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let assignments: Vec<CrewAssignment> =
        handlers::list_my_assignments(&mut persistence, &session)?;
    drop(persistence);
    Ok(Json(assignments))
}

/// Handler for GET /my/leaves endpoint.
async fn handle_my_leaves(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
) -> Result<Json<Vec<CrewLeave>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let leaves: Vec<CrewLeave> = handlers::list_my_leaves(&mut persistence, &session)?;
    drop(persistence);
    Ok(Json(leaves))
}

/// Handler for GET /my/duty_logs endpoint.
async fn handle_my_duty_logs(
    AxumState(app_state): AxumState<AppState>,
    CurrentSession(session): CurrentSession,
) -> Result<Json<Vec<DutyLog>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let entries: Vec<DutyLog> = handlers::list_my_duty_logs(&mut persistence, &session)?;
    drop(persistence);
    Ok(Json(entries))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/login", post(handle_login))
        .route("/logout", post(handle_logout))
        .route("/register/admin", post(handle_register_admin))
        .route("/register/crew_member", post(handle_register_crew_member))
        .route("/whoami", get(handle_whoami))
        .route("/admins", get(handle_list_admins))
        .route("/admins/{id}", get(handle_get_admin))
        .route("/admins/{id}", put(handle_update_admin))
        .route("/admins/{id}", delete(handle_delete_admin))
        .route("/crew_members", get(handle_list_crew_members))
        .route("/crew_members/{id}", get(handle_get_crew_member))
        .route("/crew_members/{id}", put(handle_update_crew_member))
        .route("/crew_members/{id}", delete(handle_delete_crew_member))
        .route("/crew_members/{id}/status", put(handle_update_crew_status))
        .route(
            "/crew_members/{id}/password",
            put(handle_update_crew_password),
        )
        .route("/flights", post(handle_create_flight))
        .route("/flights", get(handle_list_flights))
        .route("/flights/{id}", get(handle_get_flight))
        .route("/flights/{id}", put(handle_update_flight))
        .route("/flights/{id}", delete(handle_delete_flight))
        .route("/airports", post(handle_create_airport))
        .route("/airports", get(handle_list_airports))
        .route("/airports/{id}", get(handle_get_airport))
        .route("/airports/{id}", put(handle_update_airport))
        .route("/airports/{id}", delete(handle_delete_airport))
        .route("/assignments", post(handle_create_assignment))
        .route("/assignments", get(handle_list_assignments))
        .route("/assignments/{id}", get(handle_get_assignment))
        .route("/assignments/{id}", put(handle_update_assignment))
        .route("/assignments/{id}", delete(handle_delete_assignment))
        .route("/leaves", post(handle_create_leave))
        .route("/leaves", get(handle_list_leaves))
        .route("/leaves/{id}", get(handle_get_leave))
        .route("/leaves/{id}", put(handle_update_leave))
        .route("/leaves/{id}", delete(handle_delete_leave))
        .route("/duty_logs", post(handle_create_duty_log))
        .route("/duty_logs", get(handle_list_duty_logs))
        .route("/duty_logs/{id}", get(handle_get_duty_log))
        .route("/duty_logs/{id}", put(handle_update_duty_log))
        .route("/duty_logs/{id}", delete(handle_delete_duty_log))
        .route("/regulations", post(handle_create_regulation))
        .route("/regulations", get(handle_list_regulations))
        .route("/regulations/{id}", get(handle_get_regulation))
        .route("/regulations/{id}", put(handle_update_regulation))
        .route("/regulations/{id}", delete(handle_delete_regulation))
        .route("/my/assignments", get(handle_my_assignments))
        .route("/my/leaves", get(handle_my_leaves))
        .route("/my/duty_logs", get(handle_my_duty_logs))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing CrewOps Server");

    // Initialize persistence (MySQL, file-based, or in-memory based on CLI arguments)
    let persistence: Persistence = if let Some(mysql_url) = &args.mysql_url {
        info!("Using MySQL database");
        Persistence::new_with_mysql(mysql_url)?
    } else if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        sessions: Arc::new(Mutex::new(SessionManager::new())),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
