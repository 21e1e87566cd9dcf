//! Rebalancing date endpoints

use super::EndpointBase;
use crate::endpoints::impl_endpoint_base;

use crate::transport::Transport;
use chrono::NaiveDate;
use portosync_core::{
  RebalancingFrequency, Result, PARAM_FREQUENCY, PARAM_PREVIOUS_REBALANCING_DATE,
  PARAM_START_REBALANCING_DATE, REBALANCING_DATES_PATH,
};
use portosync_models::{
  format_date, NextRebalancingDateResponse, RebalancingCalendar, RebalancingCalendarResponse,
};
use std::sync::Arc;
use tracing::instrument;

/// Portfolio rebalancing dates
pub struct RebalancingEndpoints {
  transport: Arc<Transport>,
}

impl RebalancingEndpoints {
  /// Create a new rebalancing endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Get the rebalancing date that follows `previous` at `frequency`
  ///
  /// # Arguments
  ///
  /// * `previous` - The last rebalancing date
  /// * `frequency` - Rebalancing frequency, sent as its wire value (`MENSUEL`, ...)
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use chrono::NaiveDate;
  /// # use portosync_client::{Config, PortosyncClient, RebalancingFrequency};
  /// # let client = PortosyncClient::new(Config::from_env()?)?;
  /// let last = NaiveDate::from_ymd_opt(2025, 11, 26).unwrap();
  /// let next = client.rebalancing().next_date(last, RebalancingFrequency::Monthly)?;
  /// println!("Next rebalancing on {}", next);
  /// # Ok::<(), portosync_core::Error>(())
  /// ```
  #[instrument(skip(self))]
  pub fn next_date(
    &self,
    previous: NaiveDate,
    frequency: RebalancingFrequency,
  ) -> Result<NaiveDate> {
    let path = format!("{}next", REBALANCING_DATES_PATH);
    let params = [
      (PARAM_PREVIOUS_REBALANCING_DATE, format_date(previous)),
      (PARAM_FREQUENCY, frequency.wire_value().to_string()),
    ];

    let response: NextRebalancingDateResponse = self.transport().get(&path, params)?;
    Ok(response.into())
  }

  /// Get every rebalancing date following `start` at `frequency`
  ///
  /// # Arguments
  ///
  /// * `start` - First rebalancing date of the calendar
  /// * `frequency` - Rebalancing frequency
  #[instrument(skip(self))]
  pub fn calendar(
    &self,
    start: NaiveDate,
    frequency: RebalancingFrequency,
  ) -> Result<RebalancingCalendar> {
    let path = format!("{}calendar", REBALANCING_DATES_PATH);
    let params = [
      (PARAM_START_REBALANCING_DATE, format_date(start)),
      (PARAM_FREQUENCY, frequency.wire_value().to_string()),
    ];

    let response: RebalancingCalendarResponse = self.transport().get(&path, params)?;
    Ok(response.into())
  }
}

impl_endpoint_base!(RebalancingEndpoints);

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_support::RecordingHttpClient;
  use portosync_core::{Config, Error, HEADER_API_KEY};
  use std::collections::HashMap;

  fn endpoints(http: Arc<RecordingHttpClient>) -> RebalancingEndpoints {
    let config = Config::default_with_key("api-key".to_string());
    RebalancingEndpoints::new(Arc::new(Transport::new(&config, http).unwrap()))
  }

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  fn query(http: &RecordingHttpClient) -> HashMap<String, String> {
    http.last_request().url.query_pairs().into_owned().collect()
  }

  #[test]
  fn test_next_date() {
    let http = RecordingHttpClient::replying(200, r#"{ "nextRebalancingDate": "2025-12-26" }"#);

    let next = endpoints(http.clone())
      .next_date(date(2025, 11, 26), RebalancingFrequency::Monthly)
      .unwrap();

    assert_eq!(next, date(2025, 12, 26));
    let request = http.last_request();
    assert!(request.url.as_str().starts_with("https://portosync.ovh/api/rebalancing-dates/next?"));
    assert_eq!(request.header(HEADER_API_KEY), Some("api-key"));
    let query = query(&http);
    assert_eq!(query.get("previousRebalancingDate").map(String::as_str), Some("2025-11-26"));
    assert_eq!(query.get("frequency").map(String::as_str), Some("MENSUEL"));
  }

  #[test]
  fn test_next_date_sends_wire_value_for_every_frequency() {
    let expected = [
      (RebalancingFrequency::Monthly, "MENSUEL"),
      (RebalancingFrequency::Quarterly, "TRIMESTRIEL"),
      (RebalancingFrequency::SemiAnnual, "SEMESTRIEL"),
      (RebalancingFrequency::Annual, "ANNUEL"),
    ];

    for (frequency, wire) in expected {
      let http = RecordingHttpClient::replying(200, r#"{"nextRebalancingDate":"2026-01-02"}"#);
      endpoints(http.clone()).next_date(date(2024, 2, 29), frequency).unwrap();

      let query = query(&http);
      assert_eq!(query.get("frequency").map(String::as_str), Some(wire));
      assert_eq!(query.get("previousRebalancingDate").map(String::as_str), Some("2024-02-29"));
    }
  }

  #[test]
  fn test_calendar() {
    let http = RecordingHttpClient::replying(
      200,
      r#"{
        "rebalancingDates": [
          "2025-01-26",
          "2025-04-26",
          "2025-07-26",
          "2025-10-26"
        ]
      }"#,
    );

    let calendar =
      endpoints(http.clone()).calendar(date(2025, 1, 26), RebalancingFrequency::Quarterly).unwrap();

    let expected: RebalancingCalendar =
      [date(2025, 1, 26), date(2025, 4, 26), date(2025, 7, 26), date(2025, 10, 26)].into();
    assert_eq!(calendar, expected);

    let request = http.last_request();
    assert_eq!(request.url.path(), "/api/rebalancing-dates/calendar");
    assert_eq!(request.header(HEADER_API_KEY), Some("api-key"));
    let query = query(&http);
    assert_eq!(query.get("startRebalancingDate").map(String::as_str), Some("2025-01-26"));
    assert_eq!(query.get("frequency").map(String::as_str), Some("TRIMESTRIEL"));
  }

  #[test]
  fn test_error_status_is_reported() {
    let http = RecordingHttpClient::replying(400, "Invalid frequency");
    let endpoints = endpoints(http);

    let next = endpoints.next_date(date(2025, 1, 1), RebalancingFrequency::Annual).unwrap_err();
    let calendar = endpoints.calendar(date(2025, 1, 1), RebalancingFrequency::Annual).unwrap_err();

    for err in [next, calendar] {
      assert!(matches!(err, Error::Api { status: 400, .. }));
      assert!(err.to_string().contains("400"));
    }
  }

  #[test]
  fn test_unexpected_body_is_decode_error() {
    let http = RecordingHttpClient::replying(200, r#"{"closingDates":["2025-01-01"]}"#);

    let result = endpoints(http).next_date(date(2025, 1, 1), RebalancingFrequency::Monthly);

    assert!(matches!(result, Err(Error::Decode { .. })));
  }
}
