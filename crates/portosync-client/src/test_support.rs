//! In-memory HTTP clients for unit tests

use crate::http::{HttpClient, HttpError, HttpRequest, HttpResponse};
use std::sync::{Arc, Mutex};

/// Replays one canned response and records every request it receives
pub struct RecordingHttpClient {
  response: HttpResponse,
  requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingHttpClient {
  pub fn replying(status: u16, body: &str) -> Arc<Self> {
    Arc::new(Self { response: HttpResponse::new(status, body), requests: Mutex::new(Vec::new()) })
  }

  pub fn last_request(&self) -> HttpRequest {
    self.requests.lock().unwrap().last().cloned().expect("no request was sent")
  }

  pub fn request_count(&self) -> usize {
    self.requests.lock().unwrap().len()
  }
}

impl HttpClient for RecordingHttpClient {
  fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
    self.requests.lock().unwrap().push(request);
    Ok(self.response.clone())
  }
}

/// Fails every request as if the server refused the connection
pub struct FailingHttpClient;

impl HttpClient for FailingHttpClient {
  fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, HttpError> {
    Err(HttpError::Io(std::io::Error::new(
      std::io::ErrorKind::ConnectionRefused,
      "connection refused",
    )))
  }
}
