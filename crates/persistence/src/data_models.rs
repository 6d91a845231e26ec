// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crewops_domain::{Admin, CrewMember, CrewStatus, DomainError};
use std::str::FromStr;

/// Full admin row including the password digest.
///
/// This type exists for authentication: the login path needs the stored
/// hash to verify a candidate password. It must never cross the API
/// boundary; convert to [`Admin`] before handing the record out.
#[derive(Debug, Clone)]
pub struct AdminData {
    pub admin_id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub created_at: String,
}

impl AdminData {
    /// Converts to the digest-free domain representation.
    #[must_use]
    pub fn to_admin(&self) -> Admin {
        Admin {
            admin_id: self.admin_id,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// Full crew member row including the password digest.
///
/// Like [`AdminData`], this exists for authentication only.
#[derive(Debug, Clone)]
pub struct CrewMemberData {
    pub crew_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub crew_role: String,
    pub hire_date: String,
    pub email: String,
    pub phone_number: String,
    pub status: String,
    pub password_hash: String,
    pub created_at: String,
}

impl CrewMemberData {
    /// Converts to the digest-free domain representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored status string is not a recognized
    /// [`CrewStatus`].
    pub fn to_crew_member(&self) -> Result<CrewMember, DomainError> {
        Ok(CrewMember {
            crew_id: self.crew_id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            date_of_birth: self.date_of_birth.clone(),
            crew_role: self.crew_role.clone(),
            hire_date: self.hire_date.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            status: CrewStatus::from_str(&self.status)?,
        })
    }
}

/// Profile fields for creating or updating a crew member.
///
/// Status and password are supplied separately: status defaults to
/// `Active` at registration, and the password is hashed before storage.
#[derive(Debug, Clone)]
pub struct NewCrewMember {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub crew_role: String,
    pub hire_date: String,
    pub email: String,
    pub phone_number: String,
}
