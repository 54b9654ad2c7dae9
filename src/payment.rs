use rust_decimal::Decimal;

use crate::decimal::Money;
use crate::types::LoanTerms;

/// fixed annuity installment that amortizes the loan over its full term
pub fn monthly_payment(terms: &LoanTerms) -> Money {
    annuity_payment(terms.principal(), terms.monthly_rate(), terms.term_months())
}

/// total interest over the nominal term, no prepayments
///
/// Closed form: installment * n - principal. Prepayment trajectories need the
/// full schedule instead, see [`crate::schedule::total_interest_with_prepayments`].
pub fn total_interest(terms: &LoanTerms) -> Money {
    monthly_payment(terms) * Decimal::from(terms.term_months()) - terms.principal()
}

/// annuity installment for an arbitrary balance and horizon
///
/// Used both for the base installment and for mid-stream recomputation after a
/// payment-reducing prepayment.
pub(crate) fn annuity_payment(principal: Money, monthly_rate: Decimal, months: u32) -> Money {
    if months == 0 {
        return principal;
    }

    if monthly_rate.is_zero() {
        // zero-rate degenerate case, the annuity formula would divide by zero
        return principal / Decimal::from(months);
    }

    // EMI = P * r * (1 + r)^n / ((1 + r)^n - 1)
    let mut compound = Decimal::ONE;
    let base = Decimal::ONE + monthly_rate;
    for _ in 0..months {
        compound *= base;
    }

    let numerator = principal.as_decimal() * monthly_rate * compound;
    let denominator = compound - Decimal::ONE;

    Money::from_decimal(numerator / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Rate;
    use rust_decimal_macros::dec;

    fn terms(principal: i64, rate_pct: Decimal, years: u32) -> LoanTerms {
        LoanTerms::from_years(
            Money::from_major(principal),
            Rate::from_percentage(rate_pct),
            years,
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
    fn test_standard_loan_payment() {
        let payment = monthly_payment(&terms(1_000_000, dec!(12), 5));
        assert_close(payment, dec!(22244.45), dec!(0.01));
    }

    #[test]
    fn test_zero_rate_payment_is_exact() {
        let payment = monthly_payment(&terms(1_200_000, dec!(0), 10));
        assert_eq!(payment, Money::from_major(10_000));
    }

    #[test]
    fn test_small_loan_payment() {
        let payment = monthly_payment(&terms(100_000, dec!(10), 1));
        assert_close(payment, dec!(8791.59), dec!(0.01));
    }

    #[test]
    fn test_large_loan_payment() {
        let payment = monthly_payment(&terms(30_000_000, dec!(15), 20));
        assert_close(payment, dec!(395036.87), dec!(0.01));
    }

    #[test]
    fn test_total_interest() {
        let interest = total_interest(&terms(1_000_000, dec!(12), 5));
        assert_close(interest, dec!(334667), dec!(1));
    }

    #[test]
    fn test_total_interest_zero_rate() {
        // 1,000,000 / 60 is not representable exactly, only rounding dust remains
        let interest = total_interest(&terms(1_000_000, dec!(0), 5));
        assert_close(interest, dec!(0), dec!(0.0001));
    }

    #[test]
    fn test_total_interest_high_rate() {
        let interest = total_interest(&terms(500_000, dec!(25), 3));
        assert_close(interest, dec!(215676.87), dec!(0.01));
    }
}
