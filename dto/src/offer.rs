use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Kind of class offered by the studios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Offer {
    Pilates,
    Spinning,
    Cardio,
}

impl Offer {
    pub const ALL: [Offer; 3] = [Offer::Pilates, Offer::Spinning, Offer::Cardio];

    pub fn name(&self) -> &'static str {
        match self {
            Offer::Pilates => "Pilates",
            Offer::Spinning => "Spinning",
            Offer::Cardio => "Cardio",
        }
    }
}

impl FromStr for Offer {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Offer::ALL
            .into_iter()
            .find(|offer| offer.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::UnknownOffer(s.to_owned()))
    }
}

impl Display for Offer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name().to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_offer_ignoring_case() {
        assert_eq!(Ok(Offer::Pilates), "pilates".parse());
        assert_eq!(Ok(Offer::Spinning), "SPINNING".parse());
        assert_eq!(Ok(Offer::Cardio), "Cardio".parse());
    }

    #[test]
    fn should_not_parse_unknown_offer() {
        assert_eq!(
            Err(ParseError::UnknownOffer("Yoga".to_owned())),
            "Yoga".parse::<Offer>()
        );
    }
}
