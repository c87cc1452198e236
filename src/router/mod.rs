pub mod params;
pub mod regex;
pub mod route;

use self::regex::Pattern;
use self::route::Route;
use crate::handler::{handler_fn, BoxError, Handler, SharedHandler};
use crate::http::{self, request_target, Request, Response};
use crate::service::MakeRemuxService;
use crate::Error;
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;

/// Registers routes to be matched and dispatches a handler.
///
/// Routes are regular expressions matched against the raw request target,
/// the path and query exactly as the client sent them. Nothing is decoded or
/// cleaned before matching, so a route can capture a URL embedded in the
/// path:
/// ```rust
/// use remux::{handler_fn, BoxError, Remux, Request, RequestExt, Response};
///
/// async fn fetch(req: Request) -> Result<Response, BoxError> {
///   let url = req.param("url").unwrap_or_default();
///   Ok(Response::new(url.into()))
/// }
///
/// let mut mux = Remux::new();
/// mux.handle("^/fetch/(?P<url>.+)$", handler_fn(fetch)).get();
/// ```
///
/// Routes are checked in the order they were registered and the first match
/// wins. All routes must be registered before the router starts serving;
/// [`into_service`](Remux::into_service) consumes the router to enforce that.
#[derive(Default)]
pub struct Remux {
  /// Configurable handler to be used when no route matches.
  pub not_found: Option<SharedHandler>,

  /// Routes to be matched, in order.
  routes: Vec<Route>,
}

impl Remux {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds a new route for requests matching `pattern`.
  ///
  /// # Panics
  ///
  /// Panics if `pattern` is not a valid regular expression. Use
  /// [`try_handle`](Remux::try_handle) for patterns that are not known
  /// ahead of time.
  pub fn handle(&mut self, pattern: &str, handler: impl Handler + 'static) -> &mut Route {
    match self.try_handle(pattern, handler) {
      Ok(route) => route,
      Err(err) => panic!("remux: {}", err),
    }
  }

  /// Like [`handle`](Remux::handle), but returns an error for an invalid
  /// pattern instead of panicking.
  pub fn try_handle(
    &mut self,
    pattern: &str,
    handler: impl Handler + 'static,
  ) -> Result<&mut Route, Error> {
    let pattern = Pattern::new(pattern)?;
    self.routes.push(Route::new(pattern, Box::new(handler)));
    let index = self.routes.len() - 1;
    Ok(&mut self.routes[index])
  }

  /// Adds a new route backed by an async function.
  pub fn handle_fn<F, Fut>(&mut self, pattern: &str, f: F) -> &mut Route
  where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Response, BoxError>> + Send + 'static,
  {
    self.handle(pattern, handler_fn(f))
  }

  /// Sets the handler used when no route matches.
  pub fn not_found(mut self, handler: impl Into<SharedHandler>) -> Self {
    self.not_found = Some(handler.into());
    self
  }

  /// The registered routes, in matching order.
  pub fn routes(&self) -> &[Route] {
    &self.routes
  }

  /// Dispatches the request to the first route whose pattern matches the
  /// raw request target.
  ///
  /// The named groups of the match are prepended to the request's query
  /// string as `:name=value` pairs before the handler runs. A route that
  /// matches but is restricted to other methods ends routing with an empty
  /// `405 Method Not Allowed`; later routes are not tried. When no route
  /// matches, the `not_found` handler runs, or a default 404 is returned.
  pub async fn serve(&self, mut req: Request) -> Result<Response, BoxError> {
    let matched = {
      let target = request_target(&req);
      self.routes.iter().find_map(|route| {
        route
          .pattern
          .submatches(&target)
          .map(|vars| (route, vars))
      })
    };

    let (route, vars) = match matched {
      Some(matched) => matched,
      None => {
        tracing::debug!(
          request_target = %request_target(&req),
          method = %req.method(),
          "no route matched"
        );
        return match &self.not_found {
          Some(handler) => handler.call(req).await,
          None => Ok(http::not_found()),
        };
      }
    };

    if !route.allows(req.method()) {
      tracing::debug!(
        pattern = %route.pattern,
        method = %req.method(),
        "method not allowed"
      );
      return Ok(http::method_not_allowed());
    }

    tracing::debug!(
      pattern = %route.pattern,
      method = %req.method(),
      params = vars.len(),
      "route matched"
    );

    params::inject(&mut req, &vars)?;
    route.handler.call(req).await
  }

  /// Freezes the route table and returns a hyper make-service for it.
  pub fn into_service(self) -> MakeRemuxService {
    MakeRemuxService::new(self)
  }
}

#[async_trait]
impl Handler for Remux {
  async fn call(&self, req: Request) -> Result<Response, BoxError> {
    self.serve(req).await
  }
}

impl From<Remux> for SharedHandler {
  fn from(mux: Remux) -> Self {
    Arc::new(mux)
  }
}
