//! Response validation and decoding

use crate::http::HttpResponse;
use portosync_core::{Error, Result};
use serde::de::DeserializeOwned;
use tracing::{error, warn};

const EXCERPT_CHARS: usize = 200;

/// Succeed on `200`, otherwise surface status and body verbatim
pub fn check_response_status(response: &HttpResponse) -> Result<()> {
  if response.status == 200 {
    return Ok(());
  }

  warn!(status = response.status, "Portosync API returned an error status");
  Err(Error::Api { status: response.status, body: response.body.clone() })
}

/// Deserialize a validated body into one of the response models
pub fn decode<T>(body: &str) -> Result<T>
where
  T: DeserializeOwned,
{
  serde_json::from_str::<T>(body).map_err(|e| {
    error!("Failed to parse JSON response: {}", e);
    Error::Decode { message: e.to_string(), excerpt: excerpt(body) }
  })
}

fn excerpt(body: &str) -> String {
  body.chars().take(EXCERPT_CHARS).collect()
}
