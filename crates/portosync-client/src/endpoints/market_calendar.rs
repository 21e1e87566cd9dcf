//! Market calendar endpoints

use super::{EndpointBase, NO_PARAMS};
use crate::endpoints::impl_endpoint_base;

use crate::transport::Transport;
use portosync_core::{Error, Result, StockMarket, MARKET_CALENDAR_PATH};
use portosync_models::{HolidaySet, HolidaysResponse};
use std::sync::Arc;
use tracing::instrument;

/// Stock market holiday calendars
pub struct MarketCalendarEndpoints {
  transport: Arc<Transport>,
}

impl MarketCalendarEndpoints {
  /// Create a new market calendar endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Get the holidays of `market` for the current year
  ///
  /// The service decides what "current" means.
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use portosync_client::{Config, PortosyncClient, StockMarket};
  /// # let client = PortosyncClient::new(Config::from_env()?)?;
  /// let holidays = client.market_calendar().holidays(StockMarket::NYSE)?;
  /// for day in &holidays {
  ///     println!("NYSE closed on {}", day);
  /// }
  /// # Ok::<(), portosync_core::Error>(())
  /// ```
  #[instrument(skip(self))]
  pub fn holidays(&self, market: StockMarket) -> Result<HolidaySet> {
    let path = format!("{}{}/holidays", MARKET_CALENDAR_PATH, market.wire_value());
    let response: HolidaysResponse = self.transport().get(&path, NO_PARAMS)?;
    Ok(response.into())
  }

  /// Get the holidays of `market` for `year`
  ///
  /// # Errors
  ///
  /// [`Error::InvalidArgument`] if `year` is outside `0..=9999`. The year
  /// is sent unpadded; whether the service knows it is its own decision.
  #[instrument(skip(self))]
  pub fn holidays_by_year(&self, market: StockMarket, year: i32) -> Result<HolidaySet> {
    check_year(year)?;
    let path = format!("{}{}/holidays/{}", MARKET_CALENDAR_PATH, market.wire_value(), year);
    let response: HolidaysResponse = self.transport().get(&path, NO_PARAMS)?;
    Ok(response.into())
  }
}

impl_endpoint_base!(MarketCalendarEndpoints);

fn check_year(year: i32) -> Result<()> {
  if (0..=9999).contains(&year) {
    Ok(())
  } else {
    Err(Error::InvalidArgument(format!("year must be within 0..=9999, got {}", year)))
  }
}
