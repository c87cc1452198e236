use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Listener settings for [`Server`](crate::Server).
#[derive(Clone, Debug)]
pub struct Config {
  pub(crate) address: IpAddr,
  pub(crate) port: u16,
  pub(crate) keep_alive: Option<u64>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      address: Ipv4Addr::new(127, 0, 0, 1).into(),
      port: 8000,
      keep_alive: Some(5),
    }
  }
}

impl Config {
  /// Starts from the defaults: `127.0.0.1:8000`, keepalive of 5 seconds.
  pub fn builder() -> Self {
    Self::default()
  }

  /// Sets the keepalive timeout (default is 5). `None` disables keepalive.
  pub fn keep_alive(mut self, seconds: impl Into<Option<u64>>) -> Self {
    self.keep_alive = seconds.into();
    self
  }

  /// Sets the port to serve on
  pub fn port(mut self, port: u16) -> Self {
    self.port = port;
    self
  }

  /// Sets the IP address to serve on
  pub fn address(mut self, addr: impl Into<IpAddr>) -> Self {
    self.address = addr.into();
    self
  }

  /// The address the server binds to.
  pub fn socket_addr(&self) -> SocketAddr {
    SocketAddr::new(self.address, self.port)
  }

  /// HTTP/2 ping interval; also whether HTTP/1 keepalive is on.
  pub(crate) fn keep_alive_interval(&self) -> Option<Duration> {
    self.keep_alive.map(Duration::from_secs)
  }
}
