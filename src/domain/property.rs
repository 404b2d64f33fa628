// src/domain/property.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sale status of a listed property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyStatus {
    Available,
    UnderOffer,
}

impl PropertyStatus {
    /// The wire value used in fixtures and query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Available => "available",
            PropertyStatus::UnderOffer => "under-offer",
        }
    }

    /// Human label shown on badges.
    pub fn label(&self) -> &'static str {
        match self {
            PropertyStatus::Available => "Available",
            PropertyStatus::UnderOffer => "Under Offer",
        }
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(PropertyStatus::Available),
            "under-offer" => Ok(PropertyStatus::UnderOffer),
            other => Err(format!("unknown property status '{other}'")),
        }
    }
}

/// An industrial property as listed on the site.
///
/// Records come from fixture data and are never mutated after the catalog is
/// built; everything downstream works on shared references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub id: u32,

    // Descriptive
    pub name: String,
    pub city: String,
    pub submarket: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,

    // Numbers (sq ft and rupees)
    pub square_footage: u64,
    pub price_per_sq_ft: u64,
    pub total_price: u64,
    #[serde(default)]
    pub lot_size: Option<u64>,
    #[serde(default)]
    pub year_built: Option<u16>,

    pub status: PropertyStatus,

    pub contact_email: String,
    pub contact_phone: String,

    #[serde(default)]
    pub zoning: Option<String>,
    /// Key into the catalog's image lookup, not a URL.
    #[serde(default)]
    pub thumbnail: Option<String>,
}
