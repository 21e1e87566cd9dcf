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

//! Stock market identifiers served by the market calendar endpoints.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Stock market identifiers. The variant name is the URI path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StockMarket {
  /// New York Stock Exchange
  NYSE,
  /// NASDAQ
  NASDAQ,
  /// Euronext
  EURONEXT,
  /// London Stock Exchange
  LSE,
}

impl StockMarket {
  /// Every market known to the client
  pub const ALL: [StockMarket; 4] =
    [StockMarket::NYSE, StockMarket::NASDAQ, StockMarket::EURONEXT, StockMarket::LSE];

  /// Path segment expected by the service
  pub const fn wire_value(&self) -> &'static str {
    match self {
      StockMarket::NYSE => "NYSE",
      StockMarket::NASDAQ => "NASDAQ",
      StockMarket::EURONEXT => "EURONEXT",
      StockMarket::LSE => "LSE",
    }
  }
}

impl std::fmt::Display for StockMarket {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.wire_value())
  }
}

impl FromStr for StockMarket {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let wanted = s.trim();
    StockMarket::ALL
      .into_iter()
      .find(|market| market.wire_value().eq_ignore_ascii_case(wanted))
      .ok_or_else(|| Error::InvalidArgument(format!("Unknown stock market: {}", s)))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_market_display_is_wire_value() {
    for market in StockMarket::ALL {
      assert_eq!(market.to_string(), market.wire_value());
    }
    assert_eq!(StockMarket::NYSE.to_string(), "NYSE");
  }

  #[test]
  fn test_market_parsing() {
    assert_eq!("NYSE".parse::<StockMarket>().unwrap(), StockMarket::NYSE);
    assert_eq!("nasdaq".parse::<StockMarket>().unwrap(), StockMarket::NASDAQ);
    assert!(matches!("XETRA".parse::<StockMarket>(), Err(Error::InvalidArgument(_))));
  }

  #[test]
  fn test_market_serde() {
    let json = serde_json::to_string(&StockMarket::EURONEXT).unwrap();
    assert_eq!(json, "\"EURONEXT\"");
    let market: StockMarket = serde_json::from_str("\"LSE\"").unwrap();
    assert_eq!(market, StockMarket::LSE);
  }
}
