use crate::date::CalendarDate;
use crate::location::Location;
use crate::membership_plan::{MembershipPlan, PlanCode};
use crate::profile::Profile;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// A studio member.
///
/// A member is identified by its [Profile] only:
/// equality, ordering and hashing ignore every other field.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct Member {
    profile: Profile,
    expiration_date: CalendarDate,
    home_studio: Location,
    plan: MembershipPlan,
}

impl Member {
    pub fn new(
        profile: Profile,
        expiration_date: CalendarDate,
        home_studio: Location,
        plan: MembershipPlan,
    ) -> Self {
        Self {
            profile,
            expiration_date,
            home_studio,
            plan,
        }
    }

    /// A member subscribing today: default plan state, expiration computed from the plan.
    pub fn enroll(profile: Profile, home_studio: Location, plan_code: PlanCode) -> Self {
        Self::new(
            profile,
            CalendarDate::compute_expiration(plan_code),
            home_studio,
            MembershipPlan::new(plan_code),
        )
    }

    pub fn plan_mut(&mut self) -> &mut MembershipPlan {
        &mut self.plan
    }

    pub fn is_expired(&self) -> bool {
        self.expiration_date.is_expired()
    }

    pub fn bill(&self) -> f64 {
        self.plan.bill()
    }

    pub fn bill_cents(&self) -> u32 {
        self.plan.bill_cents()
    }

    /// Plan summary: attended classes for Basic, remaining guest passes otherwise.
    pub fn describe_status(&self) -> String {
        match &self.plan {
            MembershipPlan::Basic { classes_attended } => {
                format!("(Basic) number of classes attended: {classes_attended}")
            }
            MembershipPlan::Family { .. } | MembershipPlan::Premium { .. } => {
                let remaining = match self.plan.guest_passes() {
                    Some(passes) if !self.is_expired() => passes.to_string(),
                    _ => "not eligible".to_owned(),
                };
                format!("({}) guest-pass remaining: {remaining}", self.plan.code())
            }
        }
    }
}

impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        self.profile == other.profile
    }
}

impl Eq for Member {}

impl Hash for Member {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.profile.hash(state);
    }
}

impl PartialOrd for Member {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Member {
    fn cmp(&self, other: &Self) -> Ordering {
        self.profile.cmp(&other.profile)
    }
}

impl Display for Member {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let expiration_status = if self.is_expired() {
            "Membership expired"
        } else {
            "Membership expires"
        };
        write!(
            f,
            "{}, {expiration_status} {}, Home Studio: {}, {}",
            self.profile,
            self.expiration_date,
            self.home_studio,
            self.describe_status()
        )
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;
    use crate::profile::tests::get_profile;

    pub fn future_date() -> CalendarDate {
        CalendarDate::new(2099, 12, 31)
    }

    pub fn past_date() -> CalendarDate {
        CalendarDate::new(2000, 1, 1)
    }

    pub fn get_member(
        first_name: &str,
        last_name: &str,
        plan_code: PlanCode,
        home_studio: Location,
    ) -> Member {
        Member::new(
            Profile::new(
                first_name.to_owned(),
                last_name.to_owned(),
                CalendarDate::new(1990, 1, 1),
            ),
            future_date(),
            home_studio,
            MembershipPlan::new(plan_code),
        )
    }

    pub fn get_expired_member(
        first_name: &str,
        last_name: &str,
        plan_code: PlanCode,
        home_studio: Location,
    ) -> Member {
        let member = get_member(first_name, last_name, plan_code, home_studio);
        Member::new(
            member.profile,
            past_date(),
            member.home_studio,
            member.plan,
        )
    }

    #[test]
    fn members_should_be_identified_by_profile_only() {
        let basic = Member::new(
            get_profile(),
            future_date(),
            Location::Edison,
            MembershipPlan::new(PlanCode::Basic),
        );
        let premium = Member::new(
            get_profile(),
            past_date(),
            Location::Franklin,
            MembershipPlan::new(PlanCode::Premium),
        );

        assert_eq!(basic, premium);
        assert_eq!(Ordering::Equal, basic.cmp(&premium));
    }

    #[test]
    fn enrolled_member_should_have_plan_defaults() {
        let member = Member::enroll(get_profile(), Location::Somerville, PlanCode::Premium);

        assert_eq!(&MembershipPlan::new(PlanCode::Premium), member.plan());
        assert_eq!(
            &CalendarDate::compute_expiration(PlanCode::Premium),
            member.expiration_date()
        );
        assert!(!member.is_expired());
    }

    // region describe_status
    #[test]
    fn basic_status_should_show_attended_classes() {
        let mut member = get_expired_member("John", "Doe", PlanCode::Basic, Location::Edison);
        member.plan_mut().record_attendance();
        member.plan_mut().record_attendance();
        assert_eq!(
            "(Basic) number of classes attended: 2",
            member.describe_status()
        );
    }

    #[test]
    fn family_status_should_show_guest_pass() {
        let mut member = get_member("John", "Doe", PlanCode::Family, Location::Edison);
        assert_eq!("(Family) guest-pass remaining: 1", member.describe_status());
        member.plan_mut().consume_guest_pass();
        assert_eq!("(Family) guest-pass remaining: 0", member.describe_status());
    }

    #[test]
    fn premium_status_should_show_guest_passes() {
        let member = get_member("John", "Doe", PlanCode::Premium, Location::Edison);
        assert_eq!("(Premium) guest-pass remaining: 3", member.describe_status());
    }

    #[test]
    fn expired_status_should_not_be_eligible() {
        let family = get_expired_member("John", "Doe", PlanCode::Family, Location::Edison);
        let premium = get_expired_member("Jane", "Doe", PlanCode::Premium, Location::Edison);
        assert_eq!(
            "(Family) guest-pass remaining: not eligible",
            family.describe_status()
        );
        assert_eq!(
            "(Premium) guest-pass remaining: not eligible",
            premium.describe_status()
        );
    }
    // endregion

    #[test]
    fn should_display_member() {
        let member = Member::new(
            get_profile(),
            past_date(),
            Location::Bridgewater,
            MembershipPlan::new(PlanCode::Basic),
        );
        assert_eq!(
            "John:Doe:2/9/1989, Membership expired 1/1/2000, Home Studio: BRIDGEWATER, 08807, SOMERSET, (Basic) number of classes attended: 0",
            member.to_string()
        );
    }
}
