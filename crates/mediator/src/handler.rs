use core::future::Future;
use core::marker::PhantomData;

use async_trait::async_trait;

use innoclinic_core::Outcome;

use crate::Request;

/// Handles one request type and produces its outcome.
///
/// Handlers are shared across concurrent requests, hence `Send + Sync`.
/// Errors are reported through [`Outcome`]; handlers do not panic on bad input.
#[async_trait]
pub trait RequestHandler<R: Request>: Send + Sync + 'static {
    async fn handle(&self, request: R) -> Outcome<R::Response>;
}

/// Adapter turning an async closure into a [`RequestHandler`].
pub struct FnHandler<F, R> {
    f: F,
    _request: PhantomData<fn(R)>,
}

/// Wrap an async closure as a handler (handy for stubs and small queries).
pub fn handler_fn<R, F, Fut>(f: F) -> FnHandler<F, R>
where
    R: Request,
    F: Fn(R) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Outcome<R::Response>> + Send + 'static,
{
    FnHandler {
        f,
        _request: PhantomData,
    }
}

#[async_trait]
impl<R, F, Fut> RequestHandler<R> for FnHandler<F, R>
where
    R: Request,
    F: Fn(R) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Outcome<R::Response>> + Send + 'static,
{
    async fn handle(&self, request: R) -> Outcome<R::Response> {
        (self.f)(request).await
    }
}
