/// prepayments that shorten the term - one-time plus recurring contributions
use loan_amortizer_rs::{
    LoanSummary, LoanTerms, Money, PrepaymentRule, Rate, ReduceKind, Schedule,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let terms = LoanTerms::from_years(
        Money::from_major(5_000_000),
        Rate::from_percentage(dec!(12)),
        15,
    )?;

    // 300,000 in month 6 plus 5,000 every month, installment held fixed
    let rules = [
        PrepaymentRule::OneTime {
            amount: Money::from_major(300_000),
            trigger_month: 6,
            reduce: ReduceKind::ShortenTerm,
        },
        PrepaymentRule::Monthly {
            amount: Money::from_major(5_000),
            start_month: None,
            reduce: ReduceKind::ShortenTerm,
        },
    ];

    let schedule = Schedule::generate(&terms, &rules)?;
    let summary = LoanSummary::from_schedule(&schedule);

    println!("nominal term:   {} months", terms.term_months());
    println!("actual payoff:  {} months", summary.payoff_month);
    println!("months saved:   {}", summary.months_saved);
    println!("interest saved: {}", summary.interest_saved.round_dp(2));

    let month6 = schedule.entry(6).expect("schedule covers month 6");
    println!("month 6 extra:  {}", month6.prepayment);

    Ok(())
}
