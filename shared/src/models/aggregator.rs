//! Delivery Aggregator Model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::LocalizedText;

/// Food-delivery aggregator apps the shop is listed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregatorId {
    Jahez,
    Hungerstation,
    Keeta,
    Ninja,
}

impl AggregatorId {
    /// All known aggregators, in display order
    pub const ALL: [AggregatorId; 4] = [
        AggregatorId::Hungerstation,
        AggregatorId::Jahez,
        AggregatorId::Keeta,
        AggregatorId::Ninja,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AggregatorId::Jahez => "jahez",
            AggregatorId::Hungerstation => "hungerstation",
            AggregatorId::Keeta => "keeta",
            AggregatorId::Ninja => "ninja",
        }
    }
}

impl fmt::Display for AggregatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown aggregator identifier
#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown aggregator: {0}")]
pub struct ParseAggregatorError(pub String);

impl FromStr for AggregatorId {
    type Err = ParseAggregatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jahez" => Ok(AggregatorId::Jahez),
            "hungerstation" => Ok(AggregatorId::Hungerstation),
            "keeta" => Ok(AggregatorId::Keeta),
            "ninja" => Ok(AggregatorId::Ninja),
            other => Err(ParseAggregatorError(other.to_string())),
        }
    }
}

/// One entry of the link-in-bio landing page
///
/// Aggregator entries carry their [`AggregatorId`] so the server can apply
/// the visibility toggles; plain links (web store, maps) leave it empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingLink {
    pub id: String,
    pub label: LocalizedText,
    pub url: String,
    /// App deep link, preferred on mobile when the aggregator app is installed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deep_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregator: Option<AggregatorId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregator_roundtrips_through_str() {
        for id in AggregatorId::ALL {
            assert_eq!(id.as_str().parse::<AggregatorId>().unwrap(), id);
        }
        assert!("talabat".parse::<AggregatorId>().is_err());
    }

    #[test]
    fn aggregator_serializes_lowercase() {
        let json = serde_json::to_string(&AggregatorId::Hungerstation).unwrap();
        assert_eq!(json, "\"hungerstation\"");
    }
}
