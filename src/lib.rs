#![deny(rust_2018_idioms)]

//! # Remux
//!
//! Remux is an HTTP request router for [hyper](https://hyper.rs) that routes
//! on regular expressions.
//!
//! Unlike path routers, Remux matches against the raw request target: the
//! path and query exactly as they appear in the request line. Nothing is
//! percent-decoded or cleaned first, which makes it possible to route
//! requests that carry a URL inside their path, like
//! `/fetch/http://example.com/a%2Fb`.
//!
//! ```rust,no_run
//! use remux::{BoxError, Remux, Request, RequestExt, Response, Server};
//!
//! async fn hello(req: Request) -> Result<Response, BoxError> {
//!   let name = req.param("name").unwrap_or_default();
//!   Ok(Response::new(format!("Hello {}", name).into()))
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), remux::Error> {
//!   let mut mux = Remux::new();
//!   mux.handle_fn("^/hello/(?P<name>.+)$", hello).get().head();
//!
//!   Server::new(mux).run().await
//! }
//! ```
//!
//! ## Routing
//!
//! Routes are tried in the order they were registered and the first pattern
//! that matches wins. A route restricted to certain methods that matches a
//! request with another method answers `405 Method Not Allowed` without
//! trying later routes. When nothing matches, the router's `not_found`
//! handler runs, or a plain `404 page not found` is sent.
//!
//! ## Parameters
//!
//! The groups of the matched pattern are prepended to the request's query
//! string, keyed by the group name with a `:` prefix: the group
//! `(?P<name>.+)` becomes the parameter `:name`, readable with
//! [`RequestExt::param`]. Unnamed groups, including the whole match, are all
//! keyed `:`.

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod router;
pub mod server;
pub mod service;

#[doc(inline)]
pub use config::Config;
#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use handler::{handler_fn, BoxError, Handler, HandlerFn, SharedHandler};
#[doc(inline)]
pub use crate::http::{request_target, Method, Request, RequestTarget, Response, StatusCode, Uri};
#[doc(inline)]
pub use router::params::RequestExt;
#[doc(inline)]
pub use router::route::Route;
#[doc(inline)]
pub use router::Remux;
#[doc(inline)]
pub use server::Server;
