/// payment-reducing prepayments - horizon fixed, installment drifts down
use loan_amortizer_rs::{monthly_payment, LoanTerms, Money, PrepaymentRule, Rate, ReduceKind, Schedule};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let terms = LoanTerms::from_years(
        Money::from_major(5_000_000),
        Rate::from_percentage(dec!(12)),
        15,
    )?;

    let rules = [PrepaymentRule::Monthly {
        amount: Money::from_major(10_000),
        start_month: None,
        reduce: ReduceKind::ReducePayment,
    }];

    let schedule = Schedule::generate(&terms, &rules)?;

    println!("base installment: {}", monthly_payment(&terms).round_dp(2));
    for period in [1u32, 12, 60, 120] {
        if let Some(entry) = schedule.entry(period) {
            let ordinary = entry.total_payment - entry.prepayment;
            println!("month {:>3} installment: {}", period, ordinary.round_dp(2));
        }
    }
    println!("payoff month: {}", schedule.payoff_month());

    Ok(())
}
