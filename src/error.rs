use std::net::SocketAddr;
use thiserror::Error;

/// Errors produced by the router and the server around it.
#[derive(Debug, Error)]
pub enum Error {
  /// A route pattern is not a valid regular expression.
  #[error("invalid route pattern {pattern:?}: {source}")]
  Pattern {
    pattern: String,
    #[source]
    source: regex::Error,
  },

  /// The request URI could not be rebuilt after injecting route parameters.
  #[error("failed to inject route parameters: {0}")]
  Query(#[from] http::Error),

  /// The listener could not be bound.
  #[error("failed to bind {addr}: {source}")]
  Bind {
    addr: SocketAddr,
    #[source]
    source: hyper::Error,
  },

  #[error("server error: {0}")]
  Serve(#[from] hyper::Error),
}
