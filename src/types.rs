use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};

/// what a prepayment buys the borrower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReduceKind {
    /// keep the installment fixed, pay the loan off sooner
    ShortenTerm,
    /// keep the horizon fixed, lower the future installment
    ReducePayment,
}

/// extra principal contribution beyond the scheduled installment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrepaymentRule {
    /// single contribution applied in one specific month
    OneTime {
        amount: Money,
        trigger_month: u32,
        reduce: ReduceKind,
    },
    /// recurring contribution from `start_month` (default: month 1) onward
    Monthly {
        amount: Money,
        start_month: Option<u32>,
        reduce: ReduceKind,
    },
}

impl PrepaymentRule {
    pub fn amount(&self) -> Money {
        match self {
            PrepaymentRule::OneTime { amount, .. } => *amount,
            PrepaymentRule::Monthly { amount, .. } => *amount,
        }
    }

    pub fn reduce(&self) -> ReduceKind {
        match self {
            PrepaymentRule::OneTime { reduce, .. } => *reduce,
            PrepaymentRule::Monthly { reduce, .. } => *reduce,
        }
    }

    /// validate rule fields
    pub fn validate(&self) -> Result<()> {
        if !self.amount().is_positive() {
            return Err(LoanError::invalid("amount", "must be positive"));
        }
        match self {
            PrepaymentRule::OneTime { trigger_month, .. } => {
                if *trigger_month == 0 {
                    return Err(LoanError::invalid("trigger_month", "months are 1-based"));
                }
            }
            PrepaymentRule::Monthly {
                start_month: Some(0),
                ..
            } => {
                return Err(LoanError::invalid("start_month", "months are 1-based"));
            }
            PrepaymentRule::Monthly { .. } => {}
        }
        Ok(())
    }
}

/// immutable inputs to one loan calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTerms {
    principal: Money,
    annual_rate: Rate,
    term_months: u32,
}

impl LoanTerms {
    /// create validated terms
    pub fn new(principal: Money, annual_rate: Rate, term_months: u32) -> Result<Self> {
        if !principal.is_positive() {
            return Err(LoanError::invalid("principal", "must be positive"));
        }
        if annual_rate.is_negative() {
            return Err(LoanError::invalid("annual_rate", "must not be negative"));
        }
        if term_months == 0 {
            return Err(LoanError::invalid("term_months", "must be at least 1"));
        }
        Ok(Self {
            principal,
            annual_rate,
            term_months,
        })
    }

    /// create terms from a whole-years horizon
    pub fn from_years(principal: Money, annual_rate: Rate, years: u32) -> Result<Self> {
        Self::new(principal, annual_rate, years.saturating_mul(12))
    }

    pub fn principal(&self) -> Money {
        self.principal
    }

    pub fn annual_rate(&self) -> Rate {
        self.annual_rate
    }

    pub fn term_months(&self) -> u32 {
        self.term_months
    }

    /// periodic rate used by every per-month computation
    pub fn monthly_rate(&self) -> Decimal {
        self.annual_rate.monthly().as_decimal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_terms_from_years() {
        let terms = LoanTerms::from_years(
            Money::from_major(1_000_000),
            Rate::from_percentage(dec!(12)),
            5,
        )
        .unwrap();
        assert_eq!(terms.term_months(), 60);
        assert_eq!(terms.monthly_rate(), dec!(0.01));
    }

    #[test]
    fn test_terms_reject_zero_principal() {
        let err = LoanTerms::new(Money::ZERO, Rate::from_percentage(dec!(10)), 12).unwrap_err();
        assert!(matches!(
            err,
            LoanError::InvalidParameter {
                field: "principal",
                ..
            }
        ));
    }

    #[test]
    fn test_terms_reject_zero_term() {
        let err =
            LoanTerms::new(Money::from_major(1_000), Rate::ZERO, 0).unwrap_err();
        assert!(matches!(
            err,
            LoanError::InvalidParameter {
                field: "term_months",
                ..
            }
        ));
    }

    #[test]
    fn test_terms_reject_negative_rate() {
        let err = LoanTerms::new(
            Money::from_major(1_000),
            Rate::from_percentage(dec!(-1)),
            12,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            LoanError::InvalidParameter {
                field: "annual_rate",
                ..
            }
        ));
    }

    #[test]
    fn test_rule_validation() {
        let ok = PrepaymentRule::OneTime {
            amount: Money::from_major(500_000),
            trigger_month: 12,
            reduce: ReduceKind::ShortenTerm,
        };
        assert!(ok.validate().is_ok());

        let bad_amount = PrepaymentRule::Monthly {
            amount: Money::ZERO,
            start_month: None,
            reduce: ReduceKind::ShortenTerm,
        };
        assert!(matches!(
            bad_amount.validate().unwrap_err(),
            LoanError::InvalidParameter { field: "amount", .. }
        ));

        let bad_month = PrepaymentRule::OneTime {
            amount: Money::from_major(1),
            trigger_month: 0,
            reduce: ReduceKind::ReducePayment,
        };
        assert!(matches!(
            bad_month.validate().unwrap_err(),
            LoanError::InvalidParameter {
                field: "trigger_month",
                ..
            }
        ));
    }

    #[test]
    fn test_rule_serde_round_trip() {
        let rule = PrepaymentRule::Monthly {
            amount: Money::from_major(10_000),
            start_month: Some(6),
            reduce: ReduceKind::ReducePayment,
        };
        let json = serde_json::to_string(&rule).unwrap();
        let back: PrepaymentRule = serde_json::from_str(&json).unwrap();
        assert_eq!(rule, back);
    }
}
