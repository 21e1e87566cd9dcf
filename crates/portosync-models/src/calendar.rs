//! Market calendar responses

use crate::date::iso_date_set;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Non-trading days of a stock market
pub type HolidaySet = BTreeSet<NaiveDate>;

/// Body of `market-calendar/{market}/holidays[/{year}]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidaysResponse {
  /// Days the market is closed. Duplicates sent by the service collapse.
  #[serde(with = "iso_date_set")]
  pub closing_dates: HolidaySet,
}

impl HolidaysResponse {
  /// Check whether the market is closed on `date`
  pub fn is_closed(&self, date: NaiveDate) -> bool {
    self.closing_dates.contains(&date)
  }
}

impl From<HolidaysResponse> for HolidaySet {
  fn from(response: HolidaysResponse) -> Self {
    response.closing_dates
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  #[test]
  fn test_holidays_deserialization() {
    let json = r#"{
      "closingDates": [
        "2025-12-26",
        "2025-12-25",
        "2025-01-01"
      ]
    }"#;

    let response: HolidaysResponse = serde_json::from_str(json).unwrap();
    let holidays = HolidaySet::from(response);

    assert_eq!(holidays.len(), 3);
    assert_eq!(
      holidays.into_iter().collect::<Vec<_>>(),
      vec![date(2025, 1, 1), date(2025, 12, 25), date(2025, 12, 26)]
    );
  }

  #[test]
  fn test_duplicate_closing_dates_collapse() {
    let json = r#"{"closingDates": ["2025-12-25", "2025-12-25", "2025-01-01"]}"#;
    let response: HolidaysResponse = serde_json::from_str(json).unwrap();

    assert_eq!(response.closing_dates.len(), 2);
    assert!(response.is_closed(date(2025, 12, 25)));
    assert!(!response.is_closed(date(2025, 12, 24)));
  }

  #[test]
  fn test_empty_closing_dates() {
    let response: HolidaysResponse = serde_json::from_str(r#"{"closingDates": []}"#).unwrap();
    assert!(response.closing_dates.is_empty());
  }

  #[test]
  fn test_invalid_closing_date_is_rejected() {
    let json = r#"{"closingDates": ["25/12/2025"]}"#;
    let err = serde_json::from_str::<HolidaysResponse>(json).unwrap_err();
    assert!(err.to_string().contains("yyyy-MM-dd"));
  }

  #[test]
  fn test_missing_field_is_rejected() {
    assert!(serde_json::from_str::<HolidaysResponse>(r#"{"holidays": []}"#).is_err());
  }

  #[test]
  fn test_serializes_wire_shape() {
    let response = HolidaysResponse { closing_dates: [date(2025, 7, 4)].into_iter().collect() };
    let json = serde_json::to_string(&response).unwrap();
    assert_eq!(json, r#"{"closingDates":["2025-07-04"]}"#);
  }
}
