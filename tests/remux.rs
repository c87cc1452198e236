use hyper::{Body, Client};
use remux::{handler_fn, BoxError, Remux, Request, RequestExt, Response, StatusCode};
use std::net::SocketAddr;

async fn hello(req: Request) -> Result<Response, BoxError> {
  let name = req.param("name").unwrap_or_default();
  Ok(Response::new(format!("Hello {}", name).into()))
}

async fn spawn(mux: Remux) -> SocketAddr {
  let server = hyper::Server::bind(&([127, 0, 0, 1], 0).into()).serve(mux.into_service());
  let addr = server.local_addr();
  tokio::spawn(server);
  addr
}

async fn get(addr: SocketAddr, target: &str) -> (StatusCode, String) {
  let uri = format!("http://{}{}", addr, target).parse().unwrap();
  let res = Client::new().get(uri).await.unwrap();
  let status = res.status();
  let body = hyper::body::to_bytes(res.into_body()).await.unwrap();
  (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn hello_over_http() {
  let mut mux = Remux::new();
  mux.handle_fn("/hello/(?P<name>.+)", hello);
  let addr = spawn(mux).await;

  let (status, body) = get(addr, "/hello/Cenk").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, "Hello Cenk");
}

#[tokio::test]
async fn embedded_url_is_matched_verbatim() {
  let mut mux = Remux::new();
  mux.handle_fn("^/fetch/(?P<url>.+)$", |req: Request| async move {
    Ok::<_, BoxError>(Response::new(req.param("url").unwrap_or_default().into()))
  });
  let addr = spawn(mux).await;

  let (_, body) = get(addr, "/fetch/http://example.com//a%2Fb/../c").await;
  assert_eq!(body, "http://example.com//a%2Fb/../c");
}

#[tokio::test]
async fn method_restriction_over_http() {
  let mut mux = Remux::new();
  mux.handle("^/asdf$", handler_fn(hello)).post();
  let addr = spawn(mux).await;

  let (status, body) = get(addr, "/asdf").await;
  assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
  assert!(body.is_empty());
}

#[tokio::test]
async fn not_found_over_http() {
  let addr = spawn(Remux::new()).await;

  let (status, body) = get(addr, "/anything").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body, "404 page not found\n");
}

#[tokio::test]
async fn handler_sees_the_original_query_after_params() {
  let mut mux = Remux::new();
  mux.handle_fn("^/q", |req: Request| async move {
    let q = req.query_values("q").join(",");
    let whole = req.query_values(":").join(",");
    Ok::<_, BoxError>(Response::new(format!("{}|{}", whole, q).into()))
  });

  let req = hyper::Request::get("/q?q=1&q=2").body(Body::empty()).unwrap();
  let res = mux.serve(req).await.unwrap();
  let body = hyper::body::to_bytes(res.into_body()).await.unwrap();
  assert_eq!(&body[..], b"/q|1,2");
}
