//! Route parameters travel in the request's query string.
//!
//! A matched route's groups are encoded as `:name=value` pairs and put in
//! front of the original query, which is left untouched after a single `&`:
//!
//! ```text
//! pattern  /hello/(?P<name>.+)
//! request  /hello/Cenk?a=1
//! query    %3A=%2Fhello%2FCenk&%3Aname=Cenk&a=1
//! ```
//!
//! Keys are sorted and values of a repeated key keep their group order, so
//! the whole match always comes first.

use crate::http::{request_target, RequestTarget};
use crate::{Error, Request};
use http::uri::{PathAndQuery, Uri};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::collections::BTreeMap;
use url::form_urlencoded;

/// Bytes left as-is in query keys and values: alphanumerics and `-_.~`.
const QUERY: &AsciiSet = &NON_ALPHANUMERIC
  .remove(b'-')
  .remove(b'_')
  .remove(b'.')
  .remove(b'~');

/// The query of a request whose URI has no room for one, such as the
/// authority-form target of a `CONNECT`.
#[derive(Clone, Debug)]
struct RouteQuery(String);

fn escape(s: &str) -> String {
  // `%` is always escaped, so `%20` can only come from a space
  utf8_percent_encode(s, QUERY).to_string().replace("%20", "+")
}

/// Encodes route parameters as a query string.
pub(crate) fn encode(params: &[(String, String)]) -> String {
  let mut sorted: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
  for (key, value) in params {
    sorted.entry(key.as_str()).or_default().push(value.as_str());
  }

  let mut pairs = Vec::with_capacity(params.len());
  for (key, values) in sorted {
    let key = escape(key);
    for value in values {
      pairs.push(format!("{}={}", key, escape(value)));
    }
  }
  pairs.join("&")
}

fn raw_query(req: &Request) -> &str {
  match req.extensions().get::<RouteQuery>() {
    Some(RouteQuery(query)) => query.as_str(),
    None => req.uri().query().unwrap_or(""),
  }
}

/// Prepends `params` to the request's query string.
///
/// The original request target is recorded in the request extensions first,
/// unless an outer router already did so. Authority-form targets cannot carry
/// a query, so theirs is kept in the extensions too.
pub(crate) fn inject(req: &mut Request, params: &[(String, String)]) -> Result<(), Error> {
  if req.extensions().get::<RequestTarget>().is_none() {
    let target = RequestTarget(request_target(req).into_owned());
    req.extensions_mut().insert(target);
  }

  let query = format!("{}&{}", encode(params), raw_query(req));

  let uri = req.uri();
  if uri.scheme().is_none() && uri.authority().is_some() {
    req.extensions_mut().insert(RouteQuery(query));
    return Ok(());
  }

  let uri = with_query(uri, &query)?;
  *req.uri_mut() = uri;
  Ok(())
}

fn with_query(uri: &Uri, query: &str) -> Result<Uri, Error> {
  let path_and_query = format!("{}?{}", uri.path(), query)
    .parse::<PathAndQuery>()
    .map_err(http::Error::from)?;

  let mut parts = uri.clone().into_parts();
  parts.path_and_query = Some(path_and_query);
  Uri::from_parts(parts).map_err(|err| http::Error::from(err).into())
}

/// Read access to the parameters injected by the router.
pub trait RequestExt {
  /// Returns the first value of the route parameter `name`, the group
  /// `(?P<name>...)` of the matched pattern.
  fn param(&self, name: &str) -> Option<String>;

  /// Returns every value of the query key `key`, in order.
  fn query_values(&self, key: &str) -> Vec<String>;
}

impl RequestExt for Request {
  fn param(&self, name: &str) -> Option<String> {
    let key = format!(":{}", name);
    self.query_values(&key).into_iter().next()
  }

  fn query_values(&self, key: &str) -> Vec<String> {
    form_urlencoded::parse(raw_query(self).as_bytes())
      .filter(|(k, _)| k == key)
      .map(|(_, v)| v.into_owned())
      .collect()
  }
}
