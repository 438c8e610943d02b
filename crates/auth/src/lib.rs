//! `innoclinic-auth`: authentication/authorization boundary.
//!
//! Token claims, HS256 validation and role checks. No HTTP types here;
//! the host crate adapts these to axum middleware.

pub mod authorize;
pub mod claims;
pub mod jwt;
pub mod principal;
pub mod roles;

pub use authorize::{authorize, AuthzError, Principal};
pub use claims::{JwtClaims, TokenValidationError, validate_claims};
pub use jwt::{Hs256JwtValidator, JwtValidator};
pub use principal::PrincipalId;
pub use roles::{Role, RoleRequirement};
