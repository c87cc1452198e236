use crate::config::Config;
use crate::router::Remux;
use crate::Error;
use std::future::Future;

/// Serves a [`Remux`] over HTTP.
/// ```rust,no_run
/// use remux::{Config, Remux, Server};
///
/// # async fn run() -> Result<(), remux::Error> {
/// let mux = Remux::new();
/// Server::new(mux)
///   .config(Config::builder().port(3000))
///   .run()
///   .await
/// # }
/// ```
pub struct Server {
  config: Config,
  router: Remux,
}

impl Server {
  pub fn new(router: Remux) -> Self {
    Self {
      config: Config::default(),
      router,
    }
  }

  pub fn config(mut self, config: Config) -> Self {
    self.config = config;
    self
  }

  /// Serves until the listener fails.
  pub async fn run(self) -> Result<(), Error> {
    self.run_until(futures::future::pending()).await
  }

  /// Serves until `signal` completes, then finishes in-flight requests and
  /// returns.
  pub async fn run_until(self, signal: impl Future<Output = ()>) -> Result<(), Error> {
    let addr = self.config.socket_addr();
    let server = hyper::Server::try_bind(&addr)
      .map_err(|source| Error::Bind { addr, source })?
      .http1_keepalive(self.config.keep_alive_interval().is_some())
      .http2_keep_alive_interval(self.config.keep_alive_interval())
      .serve(self.router.into_service());

    tracing::info!(address = %server.local_addr(), "remux listening");
    server.with_graceful_shutdown(signal).await?;
    tracing::info!("remux stopped");
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::net::TcpListener;

  #[tokio::test]
  async fn stops_on_signal() {
    let server = Server::new(Remux::new()).config(Config::builder().port(0));
    server.run_until(async {}).await.unwrap();
  }

  #[tokio::test]
  async fn reports_bind_failure() {
    let taken = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = taken.local_addr().unwrap().port();

    let server = Server::new(Remux::new()).config(Config::builder().port(port));
    let err = server.run().await.unwrap_err();
    assert!(matches!(err, Error::Bind { .. }));
  }
}
