// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session extraction for the server.
//!
//! This module provides an Axum extractor that resolves the bearer token
//! from the Authorization header to a `Session`. Requests without an
//! Authorization header (and requests whose token is unknown) resolve to
//! `Session::Anonymous`; authorization decisions happen in the API layer,
//! not here.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use crewops_api::Session;
use tracing::{debug, warn};

use crate::AppState;

/// Extractor for the request's session.
///
/// # Usage
///
/// ```ignore
/// async fn my_handler(
///     CurrentSession(session): CurrentSession,
/// ) -> Result<Json<Response>, HttpError> {
///     // session: Session (Anonymous or Authenticated)
///     Ok(Json(Response { ... }))
/// }
/// ```
///
/// # Errors
///
/// Returns HTTP 401 Unauthorized only when an Authorization header is
/// present but malformed. A missing header is not an error; it yields
/// `Session::Anonymous`.
pub struct CurrentSession(pub Session);

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(auth_header) = parts.headers.get("Authorization") else {
            debug!("No Authorization header; treating request as anonymous");
            return Ok(Self(Session::Anonymous));
        };

        let auth_header = auth_header.to_str().map_err(|_| {
            warn!("Invalid Authorization header encoding");
            SessionError::InvalidAuthorizationHeader
        })?;

        // Parse Bearer token
        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            warn!("Authorization header does not start with 'Bearer '");
            SessionError::InvalidAuthorizationHeader
        })?;

        let sessions = state.sessions.lock().await;
        let session: Session = sessions.resolve(token);
        drop(sessions);

        Ok(Self(session))
    }
}

/// Session extraction errors.
///
/// These errors are returned when the Authorization header is malformed
/// and are automatically converted to HTTP responses.
#[derive(Debug)]
pub enum SessionError {
    /// Authorization header format is invalid.
    InvalidAuthorizationHeader,
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::InvalidAuthorizationHeader => (
                StatusCode::UNAUTHORIZED,
                "Invalid Authorization header format. Expected: 'Bearer <token>'",
            ),
        };

        (status, message).into_response()
    }
}
