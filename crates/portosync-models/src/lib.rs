//! # portosync-models
//!
//! Data models for Portosync API responses.
//!
//! Every response carries dates in strict `yyyy-MM-dd` form; collections
//! of dates are exposed as sets, so duplicates returned by the service
//! collapse silently.
//!
//! ## Usage
//!
//! ```ignore
//! use portosync_models::HolidaysResponse;
//!
//! let holidays: HolidaysResponse = serde_json::from_str(&response_json)?;
//! ```

#![warn(clippy::all)]

pub mod calendar;
pub mod date;
pub mod rebalancing;

pub use calendar::*;
pub use date::{format_date, parse_date};
pub use rebalancing::*;
