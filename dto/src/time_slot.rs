use crate::error::ParseError;
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Daily slot a class is held at.
/// A member can't attend two classes sharing the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 3] = [TimeSlot::Morning, TimeSlot::Afternoon, TimeSlot::Evening];

    pub fn name(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "Morning",
            TimeSlot::Afternoon => "Afternoon",
            TimeSlot::Evening => "Evening",
        }
    }

    pub fn start_time(&self) -> NaiveTime {
        let (hour, minute) = match self {
            TimeSlot::Morning => (9, 30),
            TimeSlot::Afternoon => (14, 0),
            TimeSlot::Evening => (18, 30),
        };
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
    }
}

impl FromStr for TimeSlot {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeSlot::ALL
            .into_iter()
            .find(|time_slot| time_slot.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::UnknownTimeSlot(s.to_owned()))
    }
}

impl Display for TimeSlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let start_time = self.start_time();
        write!(f, "{}:{:02}", start_time.hour(), start_time.minute())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        time_slot = {TimeSlot::Morning, TimeSlot::Afternoon, TimeSlot::Evening},
        expected_result = {"9:30", "14:00", "18:30"}
    )]
    fn should_display_time_slot(time_slot: TimeSlot, expected_result: &str) {
        assert_eq!(expected_result, time_slot.to_string());
    }

    #[test]
    fn should_parse_time_slot_ignoring_case() {
        assert_eq!(Ok(TimeSlot::Morning), "MORNING".parse());
        assert_eq!(Ok(TimeSlot::Afternoon), "afternoon".parse());
        assert_eq!(Ok(TimeSlot::Evening), "Evening".parse());
    }

    #[test]
    fn should_not_parse_unknown_time_slot() {
        assert_eq!(
            Err(ParseError::UnknownTimeSlot("Night".to_owned())),
            "Night".parse::<TimeSlot>()
        );
    }
}
