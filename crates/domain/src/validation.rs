// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Validates an email address at the column-type level.
///
/// The check is intentionally shallow: non-empty, exactly one `@` with
/// text on both sides, and no surrounding whitespace. Anything stricter
/// is out of scope for this layer.
///
/// # Errors
///
/// Returns `DomainError::InvalidEmail` if the address fails the check.
pub fn validate_email(email: &str) -> Result<(), DomainError> {
    if email.is_empty() || email.trim() != email {
        return Err(DomainError::InvalidEmail(email.to_string()));
    }

    let mut parts = email.split('@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();

    if local.is_empty() || domain.is_empty() || parts.next().is_some() {
        return Err(DomainError::InvalidEmail(email.to_string()));
    }

    Ok(())
}
