use innoclinic_auth::{Principal, PrincipalId, Role};

/// Principal context for a request (authenticated identity + roles).
///
/// Inserted into request extensions by the authentication middleware; absent
/// for anonymous requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    principal_id: PrincipalId,
    roles: Vec<Role>,
}

impl PrincipalContext {
    pub fn new(principal_id: PrincipalId, roles: Vec<Role>) -> Self {
        Self { principal_id, roles }
    }

    pub fn to_principal(&self) -> Principal {
        Principal {
            principal_id: self.principal_id,
            roles: self.roles.clone(),
        }
    }
}
