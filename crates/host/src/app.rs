//! HTTP pipeline assembly.
//!
//! Layers, outermost first:
//!
//! ```text
//! SetRequestId → PropagateRequestId → Trace → HttpsRedirect (optional)
//!   → Authenticate → routing → per-route role guard → controller
//! ```

use std::sync::Arc;

use axum::{
    http::{Request, StatusCode},
    middleware::from_fn_with_state,
    routing::get,
    Router,
};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::Level;
use utoipa::openapi::OpenApi as OpenApiDoc;

use innoclinic_auth::{Hs256JwtValidator, JwtValidator};

use crate::config::HostConfig;
use crate::docs;
use crate::middleware::{
    auth::{authenticate, AuthState},
    https::{redirect_to_https, HttpsRedirect},
    request_id::{self, MakeRequestUuidV7},
};

/// Wrap a service's controllers in the shared pipeline.
///
/// `api` documents the controllers. In the Development environment it is
/// served at `/api-docs/openapi.json` and browsable under `/swagger-ui`.
pub fn build_host(config: &HostConfig, controllers: Router, api: OpenApiDoc) -> Router {
    let jwt: Arc<dyn JwtValidator> = Arc::new(Hs256JwtValidator::new(config.jwt_secret.as_bytes()));

    let mut router = Router::new()
        .route("/health", get(health))
        .merge(controllers);

    if config.environment.is_development() {
        router = router.merge(docs::router(api));
    }

    router = router.layer(from_fn_with_state(AuthState { jwt }, authenticate));

    match config.https_port {
        Some(port) => {
            router = router.layer(from_fn_with_state(HttpsRedirect { port }, redirect_to_https));
        }
        None => tracing::warn!("failed to determine the https port for redirect"),
    }

    let trace = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<_>| {
            let request_id = req
                .headers()
                .get(request_id::header())
                .and_then(|v| v.to_str().ok())
                .unwrap_or("-");
            tracing::info_span!(
                "http_request",
                method = %req.method(),
                path = %req.uri().path(),
                request_id
            )
        })
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        );

    router
        .layer(trace)
        .layer(PropagateRequestIdLayer::new(request_id::header()))
        .layer(SetRequestIdLayer::new(request_id::header(), MakeRequestUuidV7))
}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up")),
    tag = "health"
)]
pub(crate) async fn health() -> StatusCode {
    StatusCode::OK
}
