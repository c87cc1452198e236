use bytes::Bytes;
use hyper::header::{HeaderValue, CONTENT_TYPE, X_CONTENT_TYPE_OPTIONS};
use hyper::Body;
use std::borrow::Cow;

#[doc(inline)]
pub use hyper::{Method, StatusCode, Uri};

/// The type of an incoming web request.
pub type Request = hyper::Request<Body>;

/// An HTTP Response.
pub type Response = hyper::Response<Body>;

/// The request target exactly as the client sent it.
///
/// The router stores this in the request extensions before it rewrites the
/// query string, so handlers and nested routers still see the original target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestTarget(pub(crate) String);

impl RequestTarget {
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

/// Returns the raw, undecoded request target.
///
/// For origin-form requests this is the path and query verbatim
/// (`/fetch/http://example.com/a%2Fb?x=1`). Absolute-form requests, as sent
/// to proxies, yield the whole URI.
pub fn request_target(req: &Request) -> Cow<'_, str> {
  if let Some(target) = req.extensions().get::<RequestTarget>() {
    return Cow::Borrowed(target.as_str());
  }

  let uri = req.uri();
  if uri.scheme().is_some() || uri.authority().is_some() {
    return Cow::Owned(uri.to_string());
  }

  match uri.path_and_query() {
    Some(pq) => Cow::Borrowed(pq.as_str()),
    None => Cow::Borrowed(uri.path()),
  }
}

/// The default response for requests no route matched.
pub fn not_found() -> Response {
  let mut res = Response::new(Body::from(Bytes::from_static(b"404 page not found\n")));
  *res.status_mut() = StatusCode::NOT_FOUND;
  let headers = res.headers_mut();
  headers.insert(
    CONTENT_TYPE,
    HeaderValue::from_static("text/plain; charset=utf-8"),
  );
  headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
  res
}

/// An empty 405 response.
pub fn method_not_allowed() -> Response {
  let mut res = Response::new(Body::empty());
  *res.status_mut() = StatusCode::METHOD_NOT_ALLOWED;
  res
}

#[cfg(test)]
mod tests {
  use super::*;

  fn request(uri: &str) -> Request {
    hyper::Request::builder()
      .uri(uri)
      .body(Body::empty())
      .unwrap()
  }

  #[test]
  fn origin_form_target_is_verbatim() {
    let req = request("/fetch/http://example.com/a%2Fb?x=%20y");
    assert_eq!(request_target(&req), "/fetch/http://example.com/a%2Fb?x=%20y");
  }

  #[test]
  fn absolute_form_target_keeps_scheme_and_authority() {
    let req = request("http://example.com/a%2Fb?q=1");
    assert_eq!(request_target(&req), "http://example.com/a%2Fb?q=1");
  }

  #[test]
  fn recorded_target_wins_over_uri() {
    let mut req = request("/rewritten?%3A=x&");
    req
      .extensions_mut()
      .insert(RequestTarget("/original".to_string()));
    assert_eq!(request_target(&req), "/original");
  }

  #[tokio::test]
  async fn default_not_found_body() {
    let res = not_found();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.headers()[CONTENT_TYPE], "text/plain; charset=utf-8");
    let body = hyper::body::to_bytes(res.into_body()).await.unwrap();
    assert_eq!(&body[..], b"404 page not found\n");
  }

  #[tokio::test]
  async fn method_not_allowed_has_no_body() {
    let res = method_not_allowed();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body = hyper::body::to_bytes(res.into_body()).await.unwrap();
    assert!(body.is_empty());
  }
}
