use std::sync::Arc;

use axum::Router;
use utoipa::OpenApi;

use innoclinic_host::{build_host, HostConfig};
use innoclinic_mediator::Mediator;
use innoclinic_profiles::{register_in_memory_handlers, InMemoryDoctorRepository};

use crate::controllers::doctors;
use crate::openapi::ApiDoc;

pub const SERVICE_NAME: &str = "profiles-api";

/// Full router for the service: host pipeline around the doctors controller.
pub fn build_app(config: &HostConfig, mediator: Arc<Mediator>) -> Router {
    build_host(config, doctors::router(mediator), ApiDoc::openapi())
}

/// Mediator wired to the in-memory doctor handlers (dev/test).
pub fn in_memory_mediator() -> Arc<Mediator> {
    let mut builder = Mediator::builder();
    register_in_memory_handlers(&mut builder, Arc::new(InMemoryDoctorRepository::new()));
    let mediator = builder.build();

    tracing::info!(handlers = mediator.len(), "using in-memory doctor handlers");
    Arc::new(mediator)
}
