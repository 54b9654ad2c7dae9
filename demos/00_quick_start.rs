/// quick start - price a loan and print the first months of its schedule
use loan_amortizer_rs::{monthly_payment, total_interest, LoanTerms, Money, Rate, Schedule};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1,000,000 at 12% over 5 years
    let terms = LoanTerms::from_years(
        Money::from_major(1_000_000),
        Rate::from_percentage(dec!(12)),
        5,
    )?;

    println!("installment:    {}", monthly_payment(&terms).round_dp(2));
    println!("total interest: {}", total_interest(&terms).round_dp(2));

    let schedule = Schedule::generate(&terms, &[])?;
    for entry in schedule.entries.iter().take(3) {
        println!(
            "month {:>2}: principal {} interest {} remaining {}",
            entry.period,
            entry.principal_paid.round_dp(2),
            entry.interest_paid.round_dp(2),
            entry.remaining_principal.round_dp(2),
        );
    }

    Ok(())
}
