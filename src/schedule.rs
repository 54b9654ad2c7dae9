use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::Result;
use crate::payment::{annuity_payment, monthly_payment};
use crate::prepayment::PrepaymentPlan;
use crate::types::{LoanTerms, PrepaymentRule};

/// one month of the repayment ledger
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// 1-based month index
    pub period: u32,
    /// ordinary principal portion plus any prepayment
    pub principal_paid: Money,
    pub interest_paid: Money,
    /// balance after this period, floored to zero for reporting
    pub remaining_principal: Money,
    /// extra principal applied this period, zero if none
    pub prepayment: Money,
    /// scheduled installment plus prepayment
    pub total_payment: Money,
}

/// full repayment schedule with totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub terms: LoanTerms,
    pub entries: Vec<ScheduleEntry>,
    pub total_interest: Money,
    pub total_paid: Money,
}

/// balance and installment carried from one period to the next
#[derive(Debug, Clone, Copy, PartialEq)]
struct PeriodState {
    remaining: Money,
    installment: Money,
}

impl PeriodState {
    /// one period of the amortization recurrence
    ///
    /// Interest accrues on the opening balance, the installment's principal
    /// portion and any prepayment come off, and a payment-reducing plan
    /// recomputes the installment against the remaining horizon before the
    /// entry is emitted.
    fn step(self, period: u32, terms: &LoanTerms, plan: &PrepaymentPlan) -> (Self, ScheduleEntry) {
        let monthly_rate = terms.monthly_rate();

        let interest = self.remaining * monthly_rate;
        let ordinary = (self.installment - interest).max(Money::ZERO);

        let headroom = (self.remaining - ordinary).max(Money::ZERO);
        let extra = plan.extra_for_period(period, headroom);

        // final-period installments can exceed what is owed
        let principal_paid = (ordinary + extra).min(self.remaining);
        let remaining = self.remaining - principal_paid;

        let mut installment = self.installment;
        if extra > Money::ZERO && plan.reduces_payment() {
            let months_left = terms.term_months() - period;
            if months_left > 0 && remaining > Money::ZERO {
                installment = annuity_payment(remaining, monthly_rate, months_left);
            }
        }

        let entry = ScheduleEntry {
            period,
            principal_paid,
            interest_paid: interest,
            remaining_principal: remaining.max(Money::ZERO),
            prepayment: extra,
            total_payment: installment + extra,
        };

        (
            Self {
                remaining,
                installment,
            },
            entry,
        )
    }
}

impl Schedule {
    /// generate the period-by-period ledger for `terms` under `rules`
    pub fn generate(terms: &LoanTerms, rules: &[PrepaymentRule]) -> Result<Self> {
        let plan = PrepaymentPlan::from_rules(rules)?;
        Ok(Self::with_plan(terms, &plan))
    }

    /// generate against an already-built plan
    pub fn with_plan(terms: &LoanTerms, plan: &PrepaymentPlan) -> Self {
        let mut entries = Vec::with_capacity(terms.term_months() as usize);
        let mut state = PeriodState {
            remaining: terms.principal(),
            installment: monthly_payment(terms),
        };

        for period in 1..=terms.term_months() {
            let (next, entry) = state.step(period, terms, plan);
            state = next;
            entries.push(entry);

            // prepayments may close the loan before the nominal term
            if !state.remaining.is_positive() {
                break;
            }
        }

        let total_interest = entries
            .iter()
            .map(|e| e.interest_paid)
            .fold(Money::ZERO, |acc, x| acc + x);

        let total_paid = entries
            .iter()
            .map(|e| e.total_payment)
            .fold(Money::ZERO, |acc, x| acc + x);

        Self {
            terms: *terms,
            entries,
            total_interest,
            total_paid,
        }
    }

    /// entry for a specific 1-based month
    pub fn entry(&self, period: u32) -> Option<&ScheduleEntry> {
        self.entries.get(period.checked_sub(1)? as usize)
    }

    /// month in which the loan closes
    pub fn payoff_month(&self) -> u32 {
        self.entries.len() as u32
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// total interest under a prepayment plan
///
/// Prepayments change the trajectory non-linearly, so this runs the full
/// generator and sums the ledger instead of using the closed form.
pub fn total_interest_with_prepayments(
    terms: &LoanTerms,
    rules: &[PrepaymentRule],
) -> Result<Money> {
    Ok(Schedule::generate(terms, rules)?.total_interest)
}
