use axum::Router;
use utoipa::OpenApi;

use innoclinic_host::{build_host, BearerAuth, HostConfig};

pub const SERVICE_NAME: &str = "offices-api";

/// The service exposes no controllers yet; the document only carries the
/// host's own operations.
#[derive(OpenApi)]
#[openapi(info(title = "Offices API"), modifiers(&BearerAuth))]
pub struct ApiDoc;

pub fn build_app(config: &HostConfig) -> Router {
    build_host(config, Router::new(), ApiDoc::openapi())
}
