use thiserror::Error;

use crate::{PrincipalId, Role, RoleRequirement};

/// An authenticated caller, as far as authorization is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub principal_id: PrincipalId,
    pub roles: Vec<Role>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("authentication required")]
    Unauthenticated,

    #[error("forbidden: requires one of roles [{0}]")]
    Forbidden(String),
}

/// Check a (possibly anonymous) caller against a role requirement.
///
/// - No IO
/// - No panics
/// - Pure policy check
pub fn authorize(principal: Option<&Principal>, required: &RoleRequirement) -> Result<(), AuthzError> {
    let principal = principal.ok_or(AuthzError::Unauthenticated)?;

    if required.is_satisfied_by(&principal.roles) {
        Ok(())
    } else {
        Err(AuthzError::Forbidden(required.to_string()))
    }
}
