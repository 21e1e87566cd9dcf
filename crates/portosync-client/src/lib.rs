//! # portosync-client
//!
//! A typed client for the Portosync financial calendar API.
//!
//! ## Features
//!
//! - **Market calendars**: stock market holidays for the current or a given year
//! - **Rebalancing dates**: next rebalancing date and full rebalancing calendar
//! - **Type Safe**: dates are `chrono::NaiveDate`, collections are sets
//! - **Pluggable transport**: any [`HttpClient`] can carry the requests
//! - **Configurable**: environment-based configuration via portosync-core
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use portosync_client::{Config, PortosyncClient, RebalancingFrequency, StockMarket};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = PortosyncClient::new(config)?;
//!
//!     let holidays = client.holidays_by_year(StockMarket::NYSE, 2025)?;
//!     println!("NYSE holidays: {:?}", holidays);
//!
//!     let last = NaiveDate::from_ymd_opt(2025, 11, 26).unwrap();
//!     let next = client.next_rebalancing_date(last, RebalancingFrequency::Monthly)?;
//!     println!("Next rebalancing: {}", next);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, portosync_core::Error>`. The variants tell
//! a bad argument, a transport failure, a non-200 answer and an unexpected
//! body apart; nothing is retried.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod http;
pub mod response;
pub mod transport;
pub mod uri;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export the main client and common types
pub use client::PortosyncClient;
pub use http::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, ReqwestHttpClient};
pub use portosync_core::{Config, Error, RebalancingFrequency, Result, StockMarket};
pub use portosync_models::*;

// Re-export endpoint modules for direct access if needed
pub use endpoints::{market_calendar::MarketCalendarEndpoints, rebalancing::RebalancingEndpoints};
