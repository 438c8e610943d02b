use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role identifier used for RBAC.
///
/// Roles are opaque strings carried in the token; the well-known clinic roles
/// are provided as constants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub const RECEPTIONIST: Role = Role::from_static("Receptionist");
    pub const DOCTOR: Role = Role::from_static("Doctor");
    pub const PATIENT: Role = Role::from_static("Patient");

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Set of roles allowed to call an endpoint. Holding *any* of them is enough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRequirement {
    allowed: Vec<Role>,
}

impl RoleRequirement {
    pub fn any_of(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            allowed: roles.into_iter().collect(),
        }
    }

    /// Parse a comma separated list such as `"Receptionist, Doctor"`.
    ///
    /// Blank entries are skipped.
    pub fn parse(list: &str) -> Self {
        Self::any_of(
            list.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| Role::new(s.to_string())),
        )
    }

    pub fn allowed(&self) -> &[Role] {
        &self.allowed
    }

    /// Roles are compared exactly (case-sensitive).
    pub fn is_satisfied_by(&self, roles: &[Role]) -> bool {
        self.allowed.iter().any(|required| roles.contains(required))
    }
}

impl core::fmt::Display for RoleRequirement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let names: Vec<&str> = self.allowed.iter().map(Role::as_str).collect();
        f.write_str(&names.join(", "))
    }
}
