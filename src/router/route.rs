use crate::handler::BoxedHandler;
use crate::router::regex::Pattern;
use crate::Method;
use std::collections::HashSet;
use std::fmt;

/// A registered route, returned by [`Remux::handle`](crate::Remux::handle).
///
/// A route accepts every method until it is restricted to one or more of
/// them. Restrictions chain:
/// ```rust
/// use remux::{handler_fn, Remux, Request, Response, BoxError};
///
/// async fn index(_: Request) -> Result<Response, BoxError> {
///   Ok(Response::default())
/// }
///
/// let mut mux = Remux::new();
/// mux.handle("^/$", handler_fn(index)).get().head();
/// ```
pub struct Route {
  pub(crate) pattern: Pattern,

  /// Empty means every method is allowed.
  allowed_methods: HashSet<Method>,

  pub(crate) handler: BoxedHandler,
}

impl Route {
  pub(crate) fn new(pattern: Pattern, handler: BoxedHandler) -> Self {
    Self {
      pattern,
      allowed_methods: HashSet::new(),
      handler,
    }
  }

  /// Restricts the route to run only on `method`, in addition to any
  /// methods it was already restricted to.
  pub fn method(&mut self, method: Method) -> &mut Self {
    self.allowed_methods.insert(method);
    self
  }

  pub fn get(&mut self) -> &mut Self {
    self.method(Method::GET)
  }

  pub fn head(&mut self) -> &mut Self {
    self.method(Method::HEAD)
  }

  pub fn post(&mut self) -> &mut Self {
    self.method(Method::POST)
  }

  pub fn put(&mut self) -> &mut Self {
    self.method(Method::PUT)
  }

  pub fn delete(&mut self) -> &mut Self {
    self.method(Method::DELETE)
  }

  pub fn options(&mut self) -> &mut Self {
    self.method(Method::OPTIONS)
  }

  /// The pattern this route was registered with.
  pub fn pattern(&self) -> &str {
    self.pattern.as_str()
  }

  pub fn allows(&self, method: &Method) -> bool {
    self.allowed_methods.is_empty() || self.allowed_methods.contains(method)
  }
}

impl fmt::Debug for Route {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Route")
      .field("pattern", &self.pattern)
      .field("allowed_methods", &self.allowed_methods)
      .finish()
  }
}
