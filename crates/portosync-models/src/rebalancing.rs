//! Rebalancing date responses

use crate::date::{iso_date, iso_date_set};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Every rebalancing event following a start date
pub type RebalancingCalendar = BTreeSet<NaiveDate>;

/// Body of `rebalancing-dates/next`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextRebalancingDateResponse {
  #[serde(with = "iso_date")]
  pub next_rebalancing_date: NaiveDate,
}

/// Body of `rebalancing-dates/calendar`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RebalancingCalendarResponse {
  #[serde(with = "iso_date_set")]
  pub rebalancing_dates: RebalancingCalendar,
}

impl RebalancingCalendarResponse {
  /// First rebalancing event of the calendar
  pub fn first(&self) -> Option<NaiveDate> {
    self.rebalancing_dates.first().copied()
  }

  /// Last rebalancing event of the calendar
  pub fn last(&self) -> Option<NaiveDate> {
    self.rebalancing_dates.last().copied()
  }
}

impl From<NextRebalancingDateResponse> for NaiveDate {
  fn from(response: NextRebalancingDateResponse) -> Self {
    response.next_rebalancing_date
  }
}

impl From<RebalancingCalendarResponse> for RebalancingCalendar {
  fn from(response: RebalancingCalendarResponse) -> Self {
    response.rebalancing_dates
  }
}
