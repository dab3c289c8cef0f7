use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The five studios of the club. Fixed, not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Bridgewater,
    Edison,
    Franklin,
    Piscataway,
    Somerville,
}

impl Location {
    pub const ALL: [Location; 5] = [
        Location::Bridgewater,
        Location::Edison,
        Location::Franklin,
        Location::Piscataway,
        Location::Somerville,
    ];

    pub fn city(&self) -> &'static str {
        match self {
            Location::Bridgewater => "Bridgewater",
            Location::Edison => "Edison",
            Location::Franklin => "Franklin",
            Location::Piscataway => "Piscataway",
            Location::Somerville => "Somerville",
        }
    }

    pub fn zipcode(&self) -> &'static str {
        match self {
            Location::Bridgewater => "08807",
            Location::Edison => "08837",
            Location::Franklin => "08873",
            Location::Piscataway => "08854",
            Location::Somerville => "08876",
        }
    }

    pub fn county(&self) -> &'static str {
        match self {
            Location::Bridgewater | Location::Franklin | Location::Somerville => "Somerset",
            Location::Edison | Location::Piscataway => "Middlesex",
        }
    }
}

impl FromStr for Location {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Location::ALL
            .into_iter()
            .find(|location| location.city().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::UnknownLocation(s.to_owned()))
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {}",
            self.city().to_uppercase(),
            self.zipcode(),
            self.county().to_uppercase()
        )
    }
}
