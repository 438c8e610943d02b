//! Bearer token authentication.
//!
//! Runs for every request. A valid token attaches a [`PrincipalContext`];
//! a missing or invalid one leaves the request anonymous so that public
//! routes keep working. Guarded routes reject anonymous callers.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use innoclinic_auth::JwtValidator;

use crate::context::PrincipalContext;

#[derive(Clone)]
pub struct AuthState {
    pub jwt: Arc<dyn JwtValidator>,
}

pub async fn authenticate(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Response {
    if let Some(token) = extract_bearer(req.headers()) {
        match state.jwt.validate(token, Utc::now()) {
            Ok(claims) => {
                tracing::debug!(principal_id = %claims.sub, "authenticated request");
                req.extensions_mut()
                    .insert(PrincipalContext::new(claims.sub, claims.roles));
            }
            Err(e) => tracing::debug!("bearer token rejected: {e}"),
        }
    }

    next.run(req).await
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(axum::http::header::AUTHORIZATION)?;
    let header = header.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();

    if token.is_empty() { None } else { Some(token) }
}
