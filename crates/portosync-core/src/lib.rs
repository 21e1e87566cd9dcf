/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Core types, configuration and errors shared by the portosync-* crates.

pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use types::{RebalancingFrequency, StockMarket};

/// Base URL for the Portosync API. Always ends with `/`.
pub const PORTOSYNC_BASE_URL: &str = "https://portosync.ovh/api/";

/// Path prefix of the market calendar resources, relative to the base URL
pub const MARKET_CALENDAR_PATH: &str = "market-calendar/";

/// Path prefix of the rebalancing date resources, relative to the base URL
pub const REBALANCING_DATES_PATH: &str = "rebalancing-dates/";

/// Header carrying the API key on every request
pub const HEADER_API_KEY: &str = "X-API-KEY";

/// Query parameter names used by the rebalancing endpoints
pub const PARAM_PREVIOUS_REBALANCING_DATE: &str = "previousRebalancingDate";
pub const PARAM_START_REBALANCING_DATE: &str = "startRebalancingDate";
pub const PARAM_FREQUENCY: &str = "frequency";

/// Wire format of every date exchanged with the service (`yyyy-MM-dd`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default request timeout handed to the HTTP client
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
