use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LuisError;

/// Regional deployment serving the authoring API.
///
/// The lowercase label is used both as the host prefix and as the `region`
/// field of a publish request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    WestUs,
    WestUs2,
    EastUs,
    EastUs2,
    WestCentralUs,
    SouthCentralUs,
    WestEurope,
    NorthEurope,
    SoutheastAsia,
    EastAsia,
    AustraliaEast,
    BrazilSouth,
}

impl Region {
    pub const ALL: [Region; 12] = [
        Region::WestUs,
        Region::WestUs2,
        Region::EastUs,
        Region::EastUs2,
        Region::WestCentralUs,
        Region::SouthCentralUs,
        Region::WestEurope,
        Region::NorthEurope,
        Region::SoutheastAsia,
        Region::EastAsia,
        Region::AustraliaEast,
        Region::BrazilSouth,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Region::WestUs => "westus",
            Region::WestUs2 => "westus2",
            Region::EastUs => "eastus",
            Region::EastUs2 => "eastus2",
            Region::WestCentralUs => "westcentralus",
            Region::SouthCentralUs => "southcentralus",
            Region::WestEurope => "westeurope",
            Region::NorthEurope => "northeurope",
            Region::SoutheastAsia => "southeastasia",
            Region::EastAsia => "eastasia",
            Region::AustraliaEast => "australiaeast",
            Region::BrazilSouth => "brazilsouth",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for Region {
    type Err = LuisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_ascii_lowercase();
        Region::ALL
            .into_iter()
            .find(|r| r.as_str() == label)
            .ok_or_else(|| LuisError::BuildError(format!("Unknown region: {s}")))
    }
}
