//! In-process command/query bus.
//!
//! Controllers build a [`Request`] and hand it to the [`Mediator`], which
//! routes it to the single [`RequestHandler`] registered for that type.

pub mod handler;
pub mod mediator;
pub mod request;

pub use handler::{handler_fn, FnHandler, RequestHandler};
pub use mediator::{Mediator, MediatorBuilder};
pub use request::Request;
