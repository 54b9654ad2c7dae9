use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::Result;
use crate::types::{PrepaymentRule, ReduceKind};

/// validated set of prepayment rules for one schedule run
///
/// Holds any number of one-time contributions and at most one recurring
/// contribution. Adding a second monthly rule replaces the first instead of
/// stacking, which is how the surrounding application manages the recurring
/// slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrepaymentPlan {
    one_time: Vec<OneTimeRule>,
    monthly: Option<MonthlyRule>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct OneTimeRule {
    amount: Money,
    trigger_month: u32,
    reduce: ReduceKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct MonthlyRule {
    amount: Money,
    start_month: u32,
    reduce: ReduceKind,
}

impl PrepaymentPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// build a plan from caller-supplied rules
    pub fn from_rules(rules: &[PrepaymentRule]) -> Result<Self> {
        let mut plan = Self::new();
        for rule in rules {
            plan.add(*rule)?;
        }
        Ok(plan)
    }

    /// add one rule, validating it first
    ///
    /// A `Monthly` rule replaces any monthly rule already present.
    pub fn add(&mut self, rule: PrepaymentRule) -> Result<()> {
        rule.validate()?;
        match rule {
            PrepaymentRule::OneTime {
                amount,
                trigger_month,
                reduce,
            } => self.one_time.push(OneTimeRule {
                amount,
                trigger_month,
                reduce,
            }),
            PrepaymentRule::Monthly {
                amount,
                start_month,
                reduce,
            } => {
                self.monthly = Some(MonthlyRule {
                    amount,
                    start_month: start_month.unwrap_or(1),
                    reduce,
                });
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.one_time.is_empty() && self.monthly.is_none()
    }

    /// whether any rule in the plan asks for installment recomputation
    ///
    /// The reference policy is plan-wide: one payment-reducing rule makes every
    /// prepayment period recompute the installment, no matter which rule
    /// contributed the extra amount.
    pub fn reduces_payment(&self) -> bool {
        self.one_time
            .iter()
            .any(|r| r.reduce == ReduceKind::ReducePayment)
            || self
                .monthly
                .map(|r| r.reduce == ReduceKind::ReducePayment)
                .unwrap_or(false)
    }

    /// extra principal to apply in `period`, clamped to `headroom`
    ///
    /// `headroom` is what is still owed after the period's ordinary principal
    /// portion. The clamp is what lets an oversized prepayment close the loan
    /// exactly instead of overdrawing it.
    pub fn extra_for_period(&self, period: u32, headroom: Money) -> Money {
        let mut extra = Money::ZERO;

        if let Some(monthly) = &self.monthly {
            if period >= monthly.start_month {
                extra += monthly.amount;
            }
        }

        for rule in &self.one_time {
            if rule.trigger_month == period {
                extra += rule.amount;
            }
        }

        extra.min(headroom).max(Money::ZERO)
    }
}
