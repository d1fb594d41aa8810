use stocktrack_auth::{PrincipalId, Role};

/// Principal context for a request (authenticated identity + roles).
///
/// Inserted by the auth middleware and passed explicitly to handlers; there
/// is no framework-global session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    principal_id: PrincipalId,
    roles: Vec<Role>,
}

impl PrincipalContext {
    pub fn new(principal_id: PrincipalId, roles: Vec<Role>) -> Self {
        Self {
            principal_id,
            roles,
        }
    }

    pub fn principal_id(&self) -> PrincipalId {
        self.principal_id
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }
}
