use thiserror::Error;

/// The main error type for portosync-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// A required argument was missing or not representable on the wire
  #[error("Invalid argument: {0}")]
  InvalidArgument(String),

  /// The request URI could not be assembled
  #[error("Invalid URI: {uri}")]
  MalformedRequest {
    uri: String,
    #[source]
    source: url::ParseError,
  },

  /// The HTTP client failed before a response was received
  #[error("Transport failure: {0}")]
  TransportFailure(#[source] Box<dyn std::error::Error + Send + Sync>),

  /// The service answered with a non-200 status
  #[error("Error calling Portosync API\nStatus: {status}\nBody: {body}")]
  Api { status: u16, body: String },

  /// The response body did not match the expected shape
  #[error("Failed to decode response: {message}. Response: {excerpt}")]
  Decode { message: String, excerpt: String },

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),
}

impl Error {
  /// HTTP status of an [`Error::Api`] failure
  pub fn status(&self) -> Option<u16> {
    match self {
      Error::Api { status, .. } => Some(*status),
      _ => None,
    }
  }

  /// True for 4xx answers from the service
  pub fn is_client_error(&self) -> bool {
    matches!(self.status(), Some(400..=499))
  }

  /// True for 5xx answers from the service
  pub fn is_server_error(&self) -> bool {
    matches!(self.status(), Some(500..=599))
  }
}

/// Result type alias for portosync-* crates
pub type Result<T> = std::result::Result<T, Error>;
