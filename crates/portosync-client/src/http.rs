//! HTTP seam between the client and the network.
//!
//! The client never talks to reqwest directly: it hands an [`HttpRequest`]
//! to an [`HttpClient`] and gets back the raw status and body. Timeouts,
//! TLS and connection reuse are the concern of the implementation.

use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// HTTP methods the client can issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
  /// `GET`
  Get,
}

/// Outgoing request envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
  /// Request method
  pub method: HttpMethod,
  /// Fully assembled request URI
  pub url: Url,
  /// Header name to value
  pub headers: BTreeMap<String, String>,
  /// Request body, if any
  pub body: Option<String>,
}

impl HttpRequest {
  /// Build a body-less `GET` request
  pub fn get(url: Url) -> Self {
    Self { method: HttpMethod::Get, url, headers: BTreeMap::new(), body: None }
  }

  /// Add or replace a header
  pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
    self.headers.insert(name.into(), value.into());
    self
  }

  /// Look a header up, ignoring case
  pub fn header(&self, name: &str) -> Option<&str> {
    self
      .headers
      .iter()
      .find(|(key, _)| key.eq_ignore_ascii_case(name))
      .map(|(_, value)| value.as_str())
  }
}

/// Raw response: status code and body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
  /// HTTP status code
  pub status: u16,
  /// Body decoded as text
  pub body: String,
}

impl HttpResponse {
  /// Build a response
  pub fn new(status: u16, body: impl Into<String>) -> Self {
    Self { status, body: body.into() }
  }

  /// `200 OK` with a JSON body
  pub fn ok_json(body: impl Into<String>) -> Self {
    Self::new(200, body)
  }
}

/// Failure raised before a response could be read
#[derive(Debug, Error)]
pub enum HttpError {
  /// The request timed out
  #[error("request timeout: {0}")]
  Timeout(#[source] reqwest::Error),

  /// The connection could not be established
  #[error("connection failed: {0}")]
  Connect(#[source] reqwest::Error),

  /// Any other reqwest failure while sending
  #[error("request failed: {0}")]
  Request(#[source] reqwest::Error),

  /// The body could not be read
  #[error("failed to read response body: {0}")]
  Body(#[source] reqwest::Error),

  /// IO failure from a non-reqwest implementation
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for HttpError {
  fn from(e: reqwest::Error) -> Self {
    if e.is_timeout() {
      HttpError::Timeout(e)
    } else if e.is_connect() {
      HttpError::Connect(e)
    } else if e.is_body() || e.is_decode() {
      HttpError::Body(e)
    } else {
      HttpError::Request(e)
    }
  }
}

/// Synchronous transport contract.
///
/// Implementations must be safe to share between threads: one client
/// instance may be used concurrently.
pub trait HttpClient: Send + Sync {
  /// Send the request once and return the raw response
  fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

/// Production HTTP client backed by `reqwest::blocking`
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
  client: reqwest::blocking::Client,
}

impl ReqwestHttpClient {
  /// Build a client with the given request timeout
  pub fn new(timeout: Duration) -> Result<Self, HttpError> {
    let client = reqwest::blocking::Client::builder()
      .timeout(timeout)
      .user_agent(concat!("portosync-client/", env!("CARGO_PKG_VERSION")))
      .build()?;
    Ok(Self { client })
  }

  /// Wrap an already configured reqwest client
  pub fn with_client(client: reqwest::blocking::Client) -> Self {
    Self { client }
  }
}

impl HttpClient for ReqwestHttpClient {
  fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
    let mut builder = match request.method {
      HttpMethod::Get => self.client.get(request.url),
    };

    for (name, value) in &request.headers {
      builder = builder.header(name.as_str(), value.as_str());
    }

    if let Some(body) = request.body {
      builder = builder.body(body);
    }

    let response = builder.send()?;
    let status = response.status().as_u16();
    let body = response.text().map_err(HttpError::Body)?;

    Ok(HttpResponse { status, body })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_header_lookup_ignores_case() {
    let url = Url::parse("https://portosync.ovh/api/rebalancing-dates/next").unwrap();
    let request = HttpRequest::get(url).with_header("X-API-KEY", "api-key");

    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(request.header("x-api-key"), Some("api-key"));
    assert_eq!(request.header("authorization"), None);
    assert!(request.body.is_none());
  }

  #[test]
  fn test_io_error_converts() {
    let err: HttpError =
      std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused").into();
    assert!(err.to_string().contains("connection refused"));
  }

  #[test]
  fn test_reqwest_client_builds() {
    assert!(ReqwestHttpClient::new(Duration::from_secs(5)).is_ok());
  }
}
