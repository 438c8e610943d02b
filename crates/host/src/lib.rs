//! Shared service host: configuration, HTTP pipeline and server loop.
//!
//! Each service binary hands its controller router and OpenAPI document to
//! [`app::build_host`] and then runs it with [`server::serve`]; binaries
//! usually go through [`server::run`].

pub mod app;
pub mod config;
pub mod context;
pub mod docs;
pub mod middleware;
pub mod response;
pub mod server;

pub use app::build_host;
pub use config::{ConfigError, Environment, HostConfig};
pub use context::PrincipalContext;
pub use docs::{BearerAuth, RouteDoc, BEARER_AUTH};
pub use middleware::roles::require_roles;
