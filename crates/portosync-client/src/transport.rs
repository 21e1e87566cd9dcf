//! Request dispatch for Portosync API calls

use crate::http::{HttpClient, HttpRequest, HttpResponse};
use crate::response::{check_response_status, decode};
use crate::uri::build_uri;
use portosync_core::config::with_trailing_slash;
use portosync_core::{Config, Error, Result, HEADER_API_KEY};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, instrument};
use url::Url;

/// Authenticated transport shared by every endpoint group
pub struct Transport {
  http: Arc<dyn HttpClient>,
  base_url: String,
  api_key: String,
}

impl Transport {
  /// Create a new transport over the given HTTP client
  pub fn new(config: &Config, http: Arc<dyn HttpClient>) -> Result<Self> {
    config.validate()?;
    Ok(Self {
      http,
      base_url: with_trailing_slash(config.base_url.clone()),
      api_key: config.api_key.clone(),
    })
  }

  /// Run the full pipeline for one call: build the URI from `path` and
  /// `params`, dispatch, check the status, decode the body as `T`.
  #[instrument(skip(self, params))]
  pub fn get<T, I, K, V>(&self, path: &str, params: I) -> Result<T>
  where
    T: DeserializeOwned,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
  {
    let url = build_uri(&format!("{}{}", self.base_url, path), params)?;
    let response = self.dispatch(url)?;
    check_response_status(&response)?;
    decode(&response.body)
  }

  /// Send one authenticated `GET` and return the raw response.
  ///
  /// Exactly one call reaches the HTTP client; failures are not retried.
  pub fn dispatch(&self, url: Url) -> Result<HttpResponse> {
    debug!("Making request to: {}", url);

    let request = HttpRequest::get(url).with_header(HEADER_API_KEY, self.api_key.as_str());
    let response =
      self.http.execute(request).map_err(|e| Error::TransportFailure(Box::new(e)))?;

    debug!(status = response.status, "Response body length: {} bytes", response.body.len());
    Ok(response)
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    &self.base_url
  }
}

impl std::fmt::Debug for Transport {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Transport")
      .field("base_url", &self.base_url)
      .field("api_key", &"***")
      .finish()
  }
}
