//! Rebalancing frequencies and their wire strings.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How often a portfolio is rebalanced.
///
/// The service speaks French: each variant maps to a fixed wire string
/// (`MONTHLY` is sent as `MENSUEL`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RebalancingFrequency {
  /// Every month (`MENSUEL`)
  #[serde(rename = "MENSUEL")]
  Monthly,
  /// Every three months (`TRIMESTRIEL`)
  #[serde(rename = "TRIMESTRIEL")]
  Quarterly,
  /// Every six months (`SEMESTRIEL`)
  #[serde(rename = "SEMESTRIEL")]
  SemiAnnual,
  /// Once a year (`ANNUEL`)
  #[serde(rename = "ANNUEL")]
  Annual,
}

impl RebalancingFrequency {
  /// Every frequency known to the client
  pub const ALL: [RebalancingFrequency; 4] = [
    RebalancingFrequency::Monthly,
    RebalancingFrequency::Quarterly,
    RebalancingFrequency::SemiAnnual,
    RebalancingFrequency::Annual,
  ];

  /// Query parameter value expected by the service
  pub const fn wire_value(&self) -> &'static str {
    match self {
      RebalancingFrequency::Monthly => "MENSUEL",
      RebalancingFrequency::Quarterly => "TRIMESTRIEL",
      RebalancingFrequency::SemiAnnual => "SEMESTRIEL",
      RebalancingFrequency::Annual => "ANNUEL",
    }
  }

  /// Upper snake case name, e.g. `SEMI_ANNUAL`
  pub const fn name(&self) -> &'static str {
    match self {
      RebalancingFrequency::Monthly => "MONTHLY",
      RebalancingFrequency::Quarterly => "QUARTERLY",
      RebalancingFrequency::SemiAnnual => "SEMI_ANNUAL",
      RebalancingFrequency::Annual => "ANNUAL",
    }
  }
}

impl std::fmt::Display for RebalancingFrequency {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.name())
  }
}

/// Accepts either the English name or the wire string, in any case.
impl FromStr for RebalancingFrequency {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let wanted = s.trim().replace('-', "_");
    RebalancingFrequency::ALL
      .into_iter()
      .find(|freq| {
        freq.name().eq_ignore_ascii_case(&wanted) || freq.wire_value().eq_ignore_ascii_case(&wanted)
      })
      .ok_or_else(|| Error::InvalidArgument(format!("Unknown rebalancing frequency: {}", s)))
  }
}
