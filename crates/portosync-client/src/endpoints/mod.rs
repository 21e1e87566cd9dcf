//! Endpoint groups, one per resource family of the Portosync API

pub mod market_calendar;
pub mod rebalancing;

use crate::transport::Transport;
use std::sync::Arc;

/// Query string of the endpoints that take none
pub(crate) const NO_PARAMS: [(&str, &str); 0] = [];

/// Base trait for endpoint implementations
///
/// Provides common functionality needed by all endpoint modules
pub trait EndpointBase {
  /// Get a reference to the transport layer
  fn transport(&self) -> &Arc<Transport>;
}

/// Macro to implement the EndpointBase trait for endpoint structs
macro_rules! impl_endpoint_base {
  ($struct_name:ident) => {
    impl EndpointBase for $struct_name {
      fn transport(&self) -> &Arc<Transport> {
        &self.transport
      }
    }
  };
}

pub(crate) use impl_endpoint_base;
