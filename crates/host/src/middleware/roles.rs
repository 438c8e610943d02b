//! Per-route role guard.
//!
//! The guard runs after routing and before the handler, so a rejected caller
//! never reaches the mediator.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::{from_fn_with_state, Next},
    response::Response,
    routing::MethodRouter,
};

use innoclinic_auth::{authorize, AuthzError, RoleRequirement};

use crate::context::PrincipalContext;
use crate::response::json_error;

/// Wrap `route` so only callers holding one of the required roles reach it.
pub fn require_roles<S>(route: MethodRouter<S>, required: RoleRequirement) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    route.route_layer(from_fn_with_state(required, enforce_roles))
}

async fn enforce_roles(
    State(required): State<RoleRequirement>,
    req: Request,
    next: Next,
) -> Response {
    let principal = req
        .extensions()
        .get::<PrincipalContext>()
        .map(PrincipalContext::to_principal);

    match authorize(principal.as_ref(), &required) {
        Ok(()) => next.run(req).await,
        Err(AuthzError::Unauthenticated) => json_error(
            StatusCode::UNAUTHORIZED,
            "unauthorized",
            "missing or invalid bearer token",
        ),
        Err(e @ AuthzError::Forbidden(_)) => {
            tracing::info!(
                path = %req.uri().path(),
                required = %required,
                "caller lacks required role"
            );
            json_error(StatusCode::FORBIDDEN, "forbidden", e.to_string())
        }
    }
}
