use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Classes a Basic member can attend before being charged extra.
pub const BASIC_FREE_CLASSES: u32 = 4;
const EXTRA_CLASS_FEE_CENTS: u32 = 1_000;
const PREMIUM_GUEST_PASSES: u32 = 3;

/// Tag of a [MembershipPlan], as found in member records (`B`, `F` or `P`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanCode {
    Basic,
    Family,
    Premium,
}

impl PlanCode {
    pub fn name(&self) -> &'static str {
        match self {
            PlanCode::Basic => "Basic",
            PlanCode::Family => "Family",
            PlanCode::Premium => "Premium",
        }
    }

    pub fn monthly_fee_cents(&self) -> u32 {
        match self {
            PlanCode::Basic => 3_999,
            PlanCode::Family => 4_999,
            PlanCode::Premium => 5_999,
        }
    }

    /// Number of months covered by one payment.
    pub fn billing_interval(&self) -> u32 {
        match self {
            PlanCode::Basic => 1,
            PlanCode::Family => 3,
            PlanCode::Premium => 12,
        }
    }
}

impl FromStr for PlanCode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "B" => Ok(PlanCode::Basic),
            "F" => Ok(PlanCode::Family),
            "P" => Ok(PlanCode::Premium),
            _ => Err(ParseError::UnknownPlanCode(s.to_owned())),
        }
    }
}

impl Display for PlanCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A membership plan along with its plan-specific state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MembershipPlan {
    Basic { classes_attended: u32 },
    Family { guest_pass_available: bool },
    Premium { guest_pass_count: u32 },
}

impl MembershipPlan {
    /// A freshly subscribed plan.
    pub fn new(code: PlanCode) -> Self {
        match code {
            PlanCode::Basic => MembershipPlan::Basic {
                classes_attended: 0,
            },
            PlanCode::Family => MembershipPlan::Family {
                guest_pass_available: true,
            },
            PlanCode::Premium => MembershipPlan::Premium {
                guest_pass_count: PREMIUM_GUEST_PASSES,
            },
        }
    }

    pub fn code(&self) -> PlanCode {
        match self {
            MembershipPlan::Basic { .. } => PlanCode::Basic,
            MembershipPlan::Family { .. } => PlanCode::Family,
            MembershipPlan::Premium { .. } => PlanCode::Premium,
        }
    }

    /// Next due amount, in cents.
    pub fn bill_cents(&self) -> u32 {
        let fee = self.code().monthly_fee_cents();
        match self {
            MembershipPlan::Basic { classes_attended } => {
                fee + EXTRA_CLASS_FEE_CENTS * classes_attended.saturating_sub(BASIC_FREE_CLASSES)
            }
            MembershipPlan::Family { .. } => fee * self.code().billing_interval(),
            // One month is offered.
            MembershipPlan::Premium { .. } => fee * (self.code().billing_interval() - 1),
        }
    }

    /// Next due amount, in dollars.
    pub fn bill(&self) -> f64 {
        f64::from(self.bill_cents()) / 100.0
    }

    /// Remaining guest passes, [None] if the plan has no guest privilege.
    pub fn guest_passes(&self) -> Option<u32> {
        match self {
            MembershipPlan::Basic { .. } => None,
            MembershipPlan::Family {
                guest_pass_available,
            } => Some(u32::from(*guest_pass_available)),
            MembershipPlan::Premium { guest_pass_count } => Some(*guest_pass_count),
        }
    }

    pub fn has_guest_pass(&self) -> bool {
        self.guest_passes().is_some_and(|passes| passes > 0)
    }

    /// Counts one more attended class. Only Basic plans keep track of it.
    pub fn record_attendance(&mut self) {
        if let MembershipPlan::Basic { classes_attended } = self {
            *classes_attended += 1;
        }
    }

    pub fn consume_guest_pass(&mut self) {
        match self {
            MembershipPlan::Basic { .. } => {}
            MembershipPlan::Family {
                guest_pass_available,
            } => *guest_pass_available = false,
            MembershipPlan::Premium { guest_pass_count } => {
                *guest_pass_count = guest_pass_count.saturating_sub(1)
            }
        }
    }

    /// Gives a guest pass back. Premium passes are not capped.
    pub fn restore_guest_pass(&mut self) {
        match self {
            MembershipPlan::Basic { .. } => {}
            MembershipPlan::Family {
                guest_pass_available,
            } => *guest_pass_available = true,
            MembershipPlan::Premium { guest_pass_count } => *guest_pass_count += 1,
        }
    }

    /// Removes every guest pass, e.g. for a membership which is already expired.
    pub fn revoke_guest_passes(&mut self) {
        match self {
            MembershipPlan::Basic { .. } => {}
            MembershipPlan::Family {
                guest_pass_available,
            } => *guest_pass_available = false,
            MembershipPlan::Premium { guest_pass_count } => *guest_pass_count = 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    // region bill
    #[parameterized(
        classes_attended = {0, 4, 5, 6, 10},
        expected_result = {3_999, 3_999, 4_999, 5_999, 9_999}
    )]
    fn should_bill_basic_plan(classes_attended: u32, expected_result: u32) {
        let plan = MembershipPlan::Basic { classes_attended };
        assert_eq!(expected_result, plan.bill_cents());
    }

    #[test]
    fn should_bill_basic_plan_in_dollars() {
        let plan = MembershipPlan::Basic {
            classes_attended: 6,
        };
        assert_eq!(59.99, plan.bill());
    }

    #[parameterized(guest_pass_available = {true, false})]
    fn should_bill_family_plan(guest_pass_available: bool) {
        let plan = MembershipPlan::Family {
            guest_pass_available,
        };
        assert_eq!(14_997, plan.bill_cents());
        assert_eq!(149.97, plan.bill());
    }

    #[parameterized(guest_pass_count = {0, 3, 7})]
    fn should_bill_premium_plan(guest_pass_count: u32) {
        let plan = MembershipPlan::Premium { guest_pass_count };
        assert_eq!(65_989, plan.bill_cents());
        assert_eq!(659.89, plan.bill());
    }
    // endregion

    // region new
    #[test]
    fn should_create_plans_with_defaults() {
        assert_eq!(
            MembershipPlan::Basic {
                classes_attended: 0
            },
            MembershipPlan::new(PlanCode::Basic)
        );
        assert_eq!(
            MembershipPlan::Family {
                guest_pass_available: true
            },
            MembershipPlan::new(PlanCode::Family)
        );
        assert_eq!(
            MembershipPlan::Premium {
                guest_pass_count: 3
            },
            MembershipPlan::new(PlanCode::Premium)
        );
    }

    #[parameterized(code = {PlanCode::Basic, PlanCode::Family, PlanCode::Premium})]
    fn plan_code_should_be_kept(code: PlanCode) {
        assert_eq!(code, MembershipPlan::new(code).code());
    }
    // endregion

    // region guest passes
    #[test]
    fn basic_plan_should_have_no_guest_pass() {
        let mut plan = MembershipPlan::new(PlanCode::Basic);
        plan.restore_guest_pass();
        assert_eq!(None, plan.guest_passes());
        assert!(!plan.has_guest_pass());
    }

    #[test]
    fn family_guest_pass_should_be_consumed_then_restored() {
        let mut plan = MembershipPlan::new(PlanCode::Family);
        plan.consume_guest_pass();
        assert_eq!(Some(0), plan.guest_passes());
        assert!(!plan.has_guest_pass());

        plan.restore_guest_pass();
        assert_eq!(Some(1), plan.guest_passes());
    }

    #[test]
    fn premium_guest_passes_should_not_be_capped_on_restore() {
        let mut plan = MembershipPlan::new(PlanCode::Premium);
        plan.restore_guest_pass();
        assert_eq!(Some(4), plan.guest_passes());
    }

    #[test]
    fn premium_guest_passes_should_not_go_below_zero() {
        let mut plan = MembershipPlan::Premium {
            guest_pass_count: 0,
        };
        plan.consume_guest_pass();
        assert_eq!(Some(0), plan.guest_passes());
    }

    #[parameterized(code = {PlanCode::Family, PlanCode::Premium})]
    fn guest_passes_should_be_revoked(code: PlanCode) {
        let mut plan = MembershipPlan::new(code);
        plan.revoke_guest_passes();
        assert_eq!(Some(0), plan.guest_passes());
    }
    // endregion

    #[test]
    fn only_basic_plan_should_count_attendance() {
        let mut basic = MembershipPlan::new(PlanCode::Basic);
        let mut family = MembershipPlan::new(PlanCode::Family);
        basic.record_attendance();
        family.record_attendance();
        assert_eq!(
            MembershipPlan::Basic {
                classes_attended: 1
            },
            basic
        );
        assert_eq!(MembershipPlan::new(PlanCode::Family), family);
    }

    #[parameterized(
        text = {"B", "b", "F", "f", "P", "p"},
        expected_result = {PlanCode::Basic, PlanCode::Basic, PlanCode::Family, PlanCode::Family, PlanCode::Premium, PlanCode::Premium}
    )]
    fn should_parse_plan_code(text: &str, expected_result: PlanCode) {
        assert_eq!(Ok(expected_result), text.parse());
    }

    #[test]
    fn should_not_parse_unknown_plan_code() {
        assert_eq!(
            Err(ParseError::UnknownPlanCode("X".to_owned())),
            "X".parse::<PlanCode>()
        );
    }
}
