use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::Result;
use crate::payment::{monthly_payment, total_interest};
use crate::schedule::Schedule;
use crate::types::{LoanTerms, PrepaymentRule};

/// headline figures for one loan scenario
///
/// Compares the nominal loan against the prepayment trajectory: what the
/// installment is, what interest costs with and without the rules, and how
/// many months the rules shave off.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanSummary {
    /// base annuity installment
    pub monthly_payment: Money,
    /// interest over the nominal term, no prepayments
    pub total_interest: Money,
    /// principal plus nominal interest
    pub total_amount: Money,
    /// interest actually paid under the prepayment rules
    pub interest_with_prepayments: Money,
    /// nominal interest minus actual, floored at zero
    pub interest_saved: Money,
    /// month in which the loan closes under the rules
    pub payoff_month: u32,
    /// nominal term minus payoff month
    pub months_saved: u32,
}

impl LoanSummary {
    /// compute the summary for `terms` under `rules`
    pub fn compute(terms: &LoanTerms, rules: &[PrepaymentRule]) -> Result<Self> {
        let schedule = Schedule::generate(terms, rules)?;
        Ok(Self::from_schedule(&schedule))
    }

    /// derive the summary from an already-generated schedule
    pub fn from_schedule(schedule: &Schedule) -> Self {
        let terms = &schedule.terms;
        let base_payment = monthly_payment(terms);
        let base_interest = total_interest(terms);
        let payoff_month = schedule.payoff_month();

        Self {
            monthly_payment: base_payment,
            total_interest: base_interest,
            total_amount: terms.principal() + base_interest,
            interest_with_prepayments: schedule.total_interest,
            // rounding dust can push the schedule sum a hair past the closed form
            interest_saved: (base_interest - schedule.total_interest).max(Money::ZERO),
            payoff_month,
            months_saved: terms.term_months().saturating_sub(payoff_month),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Rate;
    use crate::types::ReduceKind;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn base_terms() -> LoanTerms {
        LoanTerms::from_years(
            Money::from_major(5_000_000),
            Rate::from_percentage(dec!(12)),
            15,
        )
        .unwrap()
    }

    fn assert_close(actual: Money, expected: Decimal, tolerance: Decimal) {
        let diff = (actual.as_decimal() - expected).abs();
        assert!(
            diff <= tolerance,
            "expected {} within {} of {}",
            actual,
            tolerance,
            expected
        );
    }

    #[test]
    fn test_base_loan_summary() {
        let summary = LoanSummary::compute(&base_terms(), &[]).unwrap();

        assert_close(summary.monthly_payment, dec!(60008), dec!(1));
        assert_close(summary.total_interest, dec!(5801513), dec!(1));
        assert_close(
            summary.total_amount,
            dec!(10801513),
            dec!(1),
        );
        assert_eq!(summary.payoff_month, 180);
        assert_eq!(summary.months_saved, 0);
        // without rules the two interest figures only differ by rounding dust
        assert_close(
            summary.interest_saved,
            dec!(0),
            dec!(1),
        );
    }

    #[test]
    fn test_summary_with_monthly_prepayment() {
        let rules = [PrepaymentRule::Monthly {
            amount: Money::from_major(10_000),
            start_month: None,
            reduce: ReduceKind::ShortenTerm,
        }];

        let summary = LoanSummary::compute(&base_terms(), &rules).unwrap();

        assert!(summary.payoff_month < 180);
        assert!(summary.months_saved > 0);
        assert!(summary.interest_with_prepayments < summary.total_interest);
        assert!(summary.interest_saved > Money::from_major(1_000_000));
    }

    #[test]
    fn test_summary_matches_schedule() {
        let rules = [PrepaymentRule::OneTime {
            amount: Money::from_major(500_000),
            trigger_month: 12,
            reduce: ReduceKind::ShortenTerm,
        }];

        let schedule = Schedule::generate(&base_terms(), &rules).unwrap();
        let summary = LoanSummary::from_schedule(&schedule);

        assert_eq!(summary.payoff_month, schedule.payoff_month());
        assert_eq!(summary.interest_with_prepayments, schedule.total_interest);
    }
}
