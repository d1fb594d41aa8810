//! API-side authorization guard for mutating routes.
//!
//! This enforces permissions at the handler boundary (before any store
//! mutation), while keeping the domain and infra auth-agnostic.

use stocktrack_auth::{authorize, AuthzError, Permission, Principal, Role};

use crate::context::PrincipalContext;

/// Check that the current request's principal holds `required`.
pub fn require_permission(
    principal: &PrincipalContext,
    required: &Permission,
) -> Result<(), AuthzError> {
    let principal = Principal {
        principal_id: principal.principal_id(),
        roles: principal.roles().to_vec(),
        permissions: permissions_from_roles(principal.roles()),
    };

    authorize(&principal, required)
}

/// Minimal role→permission mapping.
///
/// Convention: "admin" grants all permissions, "staff" grants inventory
/// writes. This is intentionally simple until a real policy source exists
/// (e.g. DB-backed).
fn permissions_from_roles(roles: &[Role]) -> Vec<Permission> {
    let mut permissions = Vec::new();
    for role in roles {
        match role.as_str() {
            "admin" => permissions.push(Permission::new("*")),
            "staff" => permissions.push(Permission::new("inventory.records.write")),
            _ => {}
        }
    }
    permissions
}
