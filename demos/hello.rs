//! Run with `cargo run --example hello`, then
//! `curl localhost:5000/hello/Cenk`.

use remux::{BoxError, Config, Remux, Request, RequestExt, Response, Server};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

async fn hello(req: Request) -> Result<Response, BoxError> {
  let name = req.param("name").unwrap_or_default();
  Ok(Response::new(format!("Hello {}\n", name).into()))
}

#[tokio::main]
async fn main() -> Result<(), remux::Error> {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "remux=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let mut mux = Remux::new();
  mux.handle_fn("^/hello/(?P<name>[^?]+)", hello).get().head();

  Server::new(mux)
    .config(Config::builder().port(5000))
    .run_until(async {
      let _ = tokio::signal::ctrl_c().await;
    })
    .await
}
