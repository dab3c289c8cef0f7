use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instructor {
    Jennifer,
    Kim,
    Denise,
    Davis,
    Emma,
}

impl Instructor {
    pub const ALL: [Instructor; 5] = [
        Instructor::Jennifer,
        Instructor::Kim,
        Instructor::Denise,
        Instructor::Davis,
        Instructor::Emma,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Instructor::Jennifer => "Jennifer",
            Instructor::Kim => "Kim",
            Instructor::Denise => "Denise",
            Instructor::Davis => "Davis",
            Instructor::Emma => "Emma",
        }
    }
}

impl FromStr for Instructor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Instructor::ALL
            .into_iter()
            .find(|instructor| instructor.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::UnknownInstructor(s.to_owned()))
    }
}

impl Display for Instructor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name().to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        text = {"jennifer", "KIM", "Denise", "davis", "eMMA"},
        expected_result = {Instructor::Jennifer, Instructor::Kim, Instructor::Denise, Instructor::Davis, Instructor::Emma}
    )]
    fn should_parse_instructor(text: &str, expected_result: Instructor) {
        assert_eq!(Ok(expected_result), text.parse());
    }

    #[test]
    fn should_not_parse_unknown_instructor() {
        assert_eq!(
            Err(ParseError::UnknownInstructor("Bob".to_owned())),
            "Bob".parse::<Instructor>()
        );
    }
}
