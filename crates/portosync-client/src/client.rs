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

//! The `PortosyncClient` facade

use crate::endpoints::{market_calendar::MarketCalendarEndpoints, rebalancing::RebalancingEndpoints};
use crate::http::{HttpClient, ReqwestHttpClient};
use crate::transport::Transport;
use chrono::NaiveDate;
use portosync_core::{Config, Error, RebalancingFrequency, Result, StockMarket};
use portosync_models::{HolidaySet, RebalancingCalendar};
use std::sync::Arc;
use std::time::Duration;

/// Main Portosync API client
///
/// Gives access to the market calendar and rebalancing endpoints. Every
/// call is one blocking `GET` authenticated with the configured API key;
/// nothing is cached or retried.
///
/// The client is immutable and cheap to clone, so a single instance can be
/// shared between threads.
///
/// # Examples
///
/// ```rust,no_run
/// use portosync_client::{Config, PortosyncClient, StockMarket};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = PortosyncClient::new(Config::from_env()?)?;
///
///     let holidays = client.holidays_by_year(StockMarket::NYSE, 2025)?;
///     println!("NYSE is closed {} days in 2025", holidays.len());
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct PortosyncClient {
  transport: Arc<Transport>,
}

impl PortosyncClient {
  /// Create a client backed by a reqwest HTTP client
  ///
  /// The request timeout comes from `config.timeout_secs`.
  ///
  /// # Errors
  ///
  /// Returns an error if the API key is blank or the HTTP client cannot be
  /// created.
  pub fn new(config: Config) -> Result<Self> {
    let http = ReqwestHttpClient::new(Duration::from_secs(config.timeout_secs))
      .map_err(|e| Error::TransportFailure(Box::new(e)))?;
    Self::with_http_client(config, Arc::new(http))
  }

  /// Create a client over a caller-supplied HTTP client
  ///
  /// Use this to share a connection pool, add proxies, or inject a fake in
  /// tests. The HTTP client must be safe for concurrent use.
  pub fn with_http_client(config: Config, http: Arc<dyn HttpClient>) -> Result<Self> {
    Ok(Self { transport: Arc::new(Transport::new(&config, http)?) })
  }

  /// Create a client from `PORTOSYNC_*` environment variables
  pub fn from_env() -> Result<Self> {
    Self::new(Config::from_env()?)
  }

  /// Get access to market calendar endpoints
  pub fn market_calendar(&self) -> MarketCalendarEndpoints {
    MarketCalendarEndpoints::new(self.transport.clone())
  }

  /// Get access to rebalancing date endpoints
  pub fn rebalancing(&self) -> RebalancingEndpoints {
    RebalancingEndpoints::new(self.transport.clone())
  }

  /// Holidays of `market` for the current year
  pub fn holidays_for_current_year(&self, market: StockMarket) -> Result<HolidaySet> {
    self.market_calendar().holidays(market)
  }

  /// Holidays of `market` for `year`
  pub fn holidays_by_year(&self, market: StockMarket, year: i32) -> Result<HolidaySet> {
    self.market_calendar().holidays_by_year(market, year)
  }

  /// Rebalancing date following `previous` at `frequency`
  pub fn next_rebalancing_date(
    &self,
    previous: NaiveDate,
    frequency: RebalancingFrequency,
  ) -> Result<NaiveDate> {
    self.rebalancing().next_date(previous, frequency)
  }

  /// Rebalancing dates following `start` at `frequency`
  pub fn rebalancing_calendar(
    &self,
    start: NaiveDate,
    frequency: RebalancingFrequency,
  ) -> Result<RebalancingCalendar> {
    self.rebalancing().calendar(start, frequency)
  }
}

impl std::fmt::Debug for PortosyncClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("PortosyncClient").field("transport", &self.transport).finish()
  }
}
