//! Endpoint metadata and the OpenAPI document served by Swagger UI in
//! Development.

use axum::Router;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::openapi::OpenApi as OpenApiDoc;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use innoclinic_auth::RoleRequirement;

pub const SWAGGER_UI_PATH: &str = "/swagger-ui";
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Security scheme name referenced by guarded operations.
pub const BEARER_AUTH: &str = "bearerAuth";

/// One guarded endpoint.
///
/// Controllers declare their endpoints as `RouteDoc` constants and build the
/// role guards from the same constants. `roles` is a comma separated list
/// such as `"Receptionist, Doctor"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDoc {
    pub method: &'static str,
    pub path: &'static str,
    pub roles: &'static str,
}

impl RouteDoc {
    pub const fn new(method: &'static str, path: &'static str, roles: &'static str) -> Self {
        Self {
            method,
            path,
            roles,
        }
    }

    pub fn requirement(&self) -> RoleRequirement {
        RoleRequirement::parse(self.roles)
    }
}

/// Registers the JWT bearer scheme on a service's document.
pub struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut OpenApiDoc) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            BEARER_AUTH,
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Operations the host itself serves.
#[derive(OpenApi)]
#[openapi(paths(crate::app::health), modifiers(&BearerAuth))]
pub struct HostApiDoc;

/// Swagger UI plus the JSON document, with the host's own operations merged
/// into `service`.
pub fn router(mut service: OpenApiDoc) -> Router {
    service.merge(HostApiDoc::openapi());
    Router::new().merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, service))
}
