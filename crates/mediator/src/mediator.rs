//! Request dispatch (application-level orchestration).
//!
//! ```text
//! Request
//!   ↓
//! 1. Look up the handler registered for the request's type
//!   ↓
//! 2. Await the handler inside a `mediator.send` span
//!   ↓
//! 3. Log failures (first error code/kind) and return the outcome unchanged
//! ```
//!
//! The mediator is immutable once built and is shared behind an `Arc`.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use tracing::Instrument;

use innoclinic_core::{Error, Outcome};

use crate::{Request, RequestHandler};

type ErasedHandler = Box<dyn Any + Send + Sync>;

/// Routes each request to the handler registered for its type.
pub struct Mediator {
    handlers: HashMap<TypeId, ErasedHandler>,
}

impl Mediator {
    pub fn builder() -> MediatorBuilder {
        MediatorBuilder::default()
    }

    /// Send a request to its handler and return the handler's outcome.
    ///
    /// A request type without a registered handler yields an `Unexpected`
    /// error rather than a panic.
    pub async fn send<R: Request>(&self, request: R) -> Outcome<R::Response> {
        let name = R::name();

        let Some(handler) = self.handler::<R>() else {
            tracing::error!(request = name, "no handler registered");
            return Err(Error::unexpected(
                "mediator.no_handler",
                format!("no handler registered for {name}"),
            )
            .into());
        };

        let span = tracing::debug_span!("mediator.send", request = name);
        let outcome = handler.handle(request).instrument(span).await;

        match &outcome {
            Ok(_) => tracing::debug!(request = name, "request handled"),
            Err(errors) => tracing::warn!(
                request = name,
                code = %errors.first().code,
                kind = ?errors.first().kind,
                "request failed"
            ),
        }

        outcome
    }

    pub fn has_handler<R: Request>(&self) -> bool {
        self.handler::<R>().is_some()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    fn handler<R: Request>(&self) -> Option<Arc<dyn RequestHandler<R>>> {
        self.handlers
            .get(&TypeId::of::<R>())
            .and_then(|h| h.downcast_ref::<Arc<dyn RequestHandler<R>>>())
            .cloned()
    }
}

impl core::fmt::Debug for Mediator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Mediator")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

/// Collects handlers before the mediator is frozen.
#[derive(Default)]
pub struct MediatorBuilder {
    handlers: HashMap<TypeId, ErasedHandler>,
}

impl MediatorBuilder {
    /// Register the handler for `R`. Registering twice replaces the earlier handler.
    pub fn register<R, H>(&mut self, handler: H) -> &mut Self
    where
        R: Request,
        H: RequestHandler<R>,
    {
        let handler: Arc<dyn RequestHandler<R>> = Arc::new(handler);
        if self
            .handlers
            .insert(TypeId::of::<R>(), Box::new(handler))
            .is_some()
        {
            tracing::warn!(request = R::name(), "handler replaced");
        }
        self
    }

    pub fn build(self) -> Mediator {
        Mediator {
            handlers: self.handlers,
        }
    }
}
