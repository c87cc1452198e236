use crate::http::{Request, Response};
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;

/// The error type handlers may fail with. It is passed through the router
/// untouched.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Something that turns a request into a response.
#[async_trait]
pub trait Handler: Send + Sync {
  async fn call(&self, req: Request) -> Result<Response, BoxError>;
}

/// A handler owned by a single route.
pub(crate) type BoxedHandler = Box<dyn Handler>;

/// A handler that may be shared between several routers.
pub type SharedHandler = Arc<dyn Handler>;

#[async_trait]
impl<H: Handler + ?Sized> Handler for Arc<H> {
  async fn call(&self, req: Request) -> Result<Response, BoxError> {
    (**self).call(req).await
  }
}

/// A [`Handler`] backed by an async function. See [`handler_fn`].
#[derive(Clone, Copy)]
pub struct HandlerFn<F>(F);

/// Wraps an async function or closure as a [`Handler`].
/// ```rust
/// use remux::{handler_fn, BoxError, Request, Response};
///
/// async fn hello(_: Request) -> Result<Response, BoxError> {
///   Ok(Response::new("Hello".into()))
/// }
///
/// let handler = handler_fn(hello);
/// ```
pub fn handler_fn<F, Fut>(f: F) -> HandlerFn<F>
where
  F: Fn(Request) -> Fut + Send + Sync + 'static,
  Fut: Future<Output = Result<Response, BoxError>> + Send + 'static,
{
  HandlerFn(f)
}

#[async_trait]
impl<F, Fut> Handler for HandlerFn<F>
where
  F: Fn(Request) -> Fut + Send + Sync + 'static,
  Fut: Future<Output = Result<Response, BoxError>> + Send + 'static,
{
  async fn call(&self, req: Request) -> Result<Response, BoxError> {
    (self.0)(req).await
  }
}
