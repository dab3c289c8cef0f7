use crate::date::CalendarDate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// Identity of a member.
///
/// Two profiles are equal when names match exactly and dates of birth are the same.
/// Profiles are sorted by last name, then first name (ignoring case), then date of birth.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Profile {
    first_name: String,
    last_name: String,
    date_of_birth: CalendarDate,
}

impl Profile {
    pub fn new(first_name: String, last_name: String, date_of_birth: CalendarDate) -> Self {
        Self {
            first_name,
            last_name,
            date_of_birth,
        }
    }
}

fn cmp_ignore_case(left: &str, right: &str) -> Ordering {
    left.to_lowercase().cmp(&right.to_lowercase())
}

impl PartialOrd for Profile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Profile {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_ignore_case(&self.last_name, &other.last_name)
            .then_with(|| cmp_ignore_case(&self.first_name, &other.first_name))
            .then(self.date_of_birth.cmp(&other.date_of_birth))
            // Keeps ordering consistent with equality when names only differ by case.
            .then_with(|| self.last_name.cmp(&other.last_name))
            .then_with(|| self.first_name.cmp(&other.first_name))
    }
}

impl Display for Profile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.first_name, self.last_name, self.date_of_birth
        )
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    pub const FIRST_NAME: &str = "John";
    pub const LAST_NAME: &str = "Doe";

    pub fn get_profile() -> Profile {
        Profile::new(
            FIRST_NAME.to_owned(),
            LAST_NAME.to_owned(),
            CalendarDate::new(1989, 2, 9),
        )
    }

    fn profile(first_name: &str, last_name: &str, date_of_birth: (i32, u32, u32)) -> Profile {
        let (year, month, day) = date_of_birth;
        Profile::new(
            first_name.to_owned(),
            last_name.to_owned(),
            CalendarDate::new(year, month, day),
        )
    }

    #[parameterized(
        profiles = {
        (("John", "Doe", (1989, 2, 9)), ("John", "Doe", (1989, 2, 9))),
        (("John", "Doe", (1989, 2, 9)), ("john", "Doe", (1989, 2, 9))),
        (("John", "Doe", (1989, 2, 9)), ("John", "Doe", (1989, 2, 10))),
        (("John", "Doe", (1989, 2, 9)), ("Jane", "Doe", (1989, 2, 9))),
        },
        expected_result = {true, false, false, false}
    )]
    fn should_compare_profiles_for_equality(
        profiles: ((&str, &str, (i32, u32, u32)), (&str, &str, (i32, u32, u32))),
        expected_result: bool,
    ) {
        let ((f1, l1, d1), (f2, l2, d2)) = profiles;
        assert_eq!(expected_result, profile(f1, l1, d1) == profile(f2, l2, d2));
    }

    #[parameterized(
        profiles = {
        (("John", "Doe", (1989, 2, 9)), ("Jane", "Smith", (1970, 1, 1))),
        (("John", "doe", (1989, 2, 9)), ("Adam", "Doe", (1970, 1, 1))),
        (("adam", "Doe", (1989, 2, 9)), ("John", "Doe", (1970, 1, 1))),
        (("John", "Doe", (1989, 2, 9)), ("John", "Doe", (1989, 2, 10))),
        (("John", "Doe", (1989, 2, 9)), ("John", "Doe", (1989, 2, 9))),
        },
        expected_result = {
        Ordering::Less,
        Ordering::Greater,
        Ordering::Less,
        Ordering::Less,
        Ordering::Equal,
        }
    )]
    fn should_sort_profiles(
        profiles: ((&str, &str, (i32, u32, u32)), (&str, &str, (i32, u32, u32))),
        expected_result: Ordering,
    ) {
        let ((f1, l1, d1), (f2, l2, d2)) = profiles;
        assert_eq!(expected_result, profile(f1, l1, d1).cmp(&profile(f2, l2, d2)));
    }

    #[test]
    fn ordering_should_be_consistent_with_equality() {
        let lower = profile("john", "doe", (1989, 2, 9));
        let upper = profile("John", "Doe", (1989, 2, 9));
        assert_ne!(lower, upper);
        assert_ne!(Ordering::Equal, lower.cmp(&upper));
    }

    #[test]
    fn should_display_profile() {
        assert_eq!("John:Doe:2/9/1989", get_profile().to_string());
    }
}
