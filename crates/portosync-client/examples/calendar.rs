//! Calendar Example
//!
//! This example demonstrates how to use portosync-client to:
//! - Load configuration from the environment (`PORTOSYNC_API_KEY`)
//! - List the holidays of every supported stock market
//! - Plan the next rebalancing dates of a portfolio
//! - Branch on the kind of failure instead of parsing messages

use chrono::NaiveDate;
use portosync_client::{Error, PortosyncClient, RebalancingFrequency, StockMarket};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
  // Initialize logging
  tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

  let client = PortosyncClient::from_env().map_err(|e| {
    eprintln!("Failed to create client: {}", e);
    eprintln!("Please set PORTOSYNC_API_KEY environment variable");
    e
  })?;

  for market in StockMarket::ALL {
    match client.holidays_for_current_year(market) {
      Ok(holidays) => {
        println!("{} is closed on {} days this year:", market, holidays.len());
        for day in &holidays {
          println!("  {}", day.format("%A %d %B %Y"));
        }
      }
      Err(Error::Api { status: 404, .. }) => println!("{} has no calendar yet", market),
      Err(e) => return Err(e.into()),
    }
  }

  let last = NaiveDate::from_ymd_opt(2025, 11, 26).ok_or("invalid date")?;
  for frequency in RebalancingFrequency::ALL {
    let next = client.next_rebalancing_date(last, frequency)?;
    println!("{:<12} next rebalancing after {}: {}", frequency.to_string(), last, next);
  }

  let calendar = client.rebalancing_calendar(last, RebalancingFrequency::Quarterly)?;
  println!("Quarterly calendar from {}:", last);
  for date in calendar {
    println!("  {}", date);
  }

  Ok(())
}
