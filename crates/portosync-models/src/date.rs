/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
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

//! Strict `yyyy-MM-dd` date codec used by every Portosync response

use chrono::NaiveDate;
use portosync_core::{Error, Result, DATE_FORMAT};

/// Format a date the way the service expects it in query parameters
pub fn format_date(date: NaiveDate) -> String {
  date.format(DATE_FORMAT).to_string()
}

/// Parse a `yyyy-MM-dd` date.
///
/// chrono alone accepts unpadded fields such as `2025-1-1`; the service
/// always pads, so anything that is not exactly ten characters of
/// `dddd-dd-dd` is rejected before chrono sees it.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
  let bytes = value.as_bytes();
  let well_formed = bytes.len() == 10
    && bytes.iter().enumerate().all(|(i, b)| match i {
      4 | 7 => *b == b'-',
      _ => b.is_ascii_digit(),
    });

  if !well_formed {
    return Err(invalid_date(value));
  }

  NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid_date(value))
}

fn invalid_date(value: &str) -> Error {
  Error::Decode {
    message: "invalid date, expected yyyy-MM-dd".to_string(),
    excerpt: value.to_string(),
  }
}

/// serde adapter for a single date field
pub mod iso_date {
  use super::{format_date, parse_date};
  use chrono::NaiveDate;
  use serde::de::Error as _;
  use serde::{Deserialize, Deserializer, Serializer};

  pub fn serialize<S>(date: &NaiveDate, serializer: S) -> std::result::Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(&format_date(*date))
  }

  pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<NaiveDate, D::Error>
  where
    D: Deserializer<'de>,
  {
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(D::Error::custom)
  }
}

/// serde adapter for a list of dates collapsed into a set
pub mod iso_date_set {
  use super::{format_date, parse_date};
  use chrono::NaiveDate;
  use serde::de::Error as _;
  use serde::{Deserialize, Deserializer, Serializer};
  use std::collections::BTreeSet;

  pub fn serialize<S>(
    dates: &BTreeSet<NaiveDate>,
    serializer: S,
  ) -> std::result::Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.collect_seq(dates.iter().map(|date| format_date(*date)))
  }

  pub fn deserialize<'de, D>(
    deserializer: D,
  ) -> std::result::Result<BTreeSet<NaiveDate>, D::Error>
  where
    D: Deserializer<'de>,
  {
    let raw = Vec::<String>::deserialize(deserializer)?;
    raw.iter().map(|value| parse_date(value).map_err(D::Error::custom)).collect()
  }
}
