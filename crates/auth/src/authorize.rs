use std::collections::HashSet;

use thiserror::Error;

use crate::{Permission, PrincipalId, Role};

/// A fully resolved principal for authorization decisions.
///
/// Construction of this object is intentionally decoupled from storage and
/// transport: the API layer derives it from claims and a policy source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub principal_id: PrincipalId,
    pub roles: Vec<Role>,
    pub permissions: Vec<Permission>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: missing permission '{0}'")]
    Forbidden(String),
}

/// Authorize a principal against a required permission.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
pub fn authorize(principal: &Principal, required: &Permission) -> Result<(), AuthzError> {
    let perms: HashSet<&str> = principal.permissions.iter().map(|p| p.as_str()).collect();

    if perms.contains("*") || perms.contains(required.as_str()) {
        Ok(())
    } else {
        Err(AuthzError::Forbidden(required.as_str().to_string()))
    }
}
