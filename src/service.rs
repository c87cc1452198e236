use crate::handler::BoxError;
use crate::http::{Request, Response};
use crate::router::Remux;
use futures::future::{self, BoxFuture, Ready};
use hyper::service::Service;
use std::convert::Infallible;
use std::sync::Arc;
use std::task::{Context, Poll};

/// Hands out a [`RemuxService`] for every connection. Created by
/// [`Remux::into_service`].
pub struct MakeRemuxService(RemuxService);

impl MakeRemuxService {
  pub fn new(mux: Remux) -> Self {
    Self(RemuxService(Arc::new(mux)))
  }
}

impl<T> Service<T> for MakeRemuxService {
  type Response = RemuxService;
  type Error = Infallible;
  type Future = Ready<Result<Self::Response, Self::Error>>;

  fn poll_ready(&mut self, _: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
    Poll::Ready(Ok(()))
  }

  fn call(&mut self, _: T) -> Self::Future {
    future::ok(self.0.clone())
  }
}

/// A frozen router serving requests of one connection.
#[derive(Clone)]
pub struct RemuxService(Arc<Remux>);

impl Service<Request> for RemuxService {
  type Response = Response;
  type Error = BoxError;
  type Future = BoxFuture<'static, Result<Response, BoxError>>;

  fn poll_ready(&mut self, _: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
    Poll::Ready(Ok(()))
  }

  fn call(&mut self, req: Request) -> Self::Future {
    let mux = self.0.clone();
    Box::pin(async move { mux.serve(req).await })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{handler_fn, StatusCode};
  use hyper::Body;

  #[tokio::test]
  async fn services_share_one_router() {
    let mut mux = Remux::new();
    mux.handle("^/ping$", handler_fn(|_| async {
      Ok::<_, BoxError>(Response::new("pong".into()))
    }));

    let mut make = mux.into_service();
    let mut first = make.call(()).await.unwrap();
    let mut second = make.call(()).await.unwrap();
    assert!(Arc::ptr_eq(&first.0, &second.0));

    let req = hyper::Request::get("/ping").body(Body::empty()).unwrap();
    let res = first.call(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let req = hyper::Request::get("/nope").body(Body::empty()).unwrap();
    let res = second.call(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
  }
}
