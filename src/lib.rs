pub mod decimal;
pub mod errors;
pub mod payment;
pub mod prepayment;
pub mod schedule;
pub mod summary;
pub mod types;

// re-export key types
pub use decimal::{Money, Rate};
pub use errors::{LoanError, Result};
pub use payment::{monthly_payment, total_interest};
pub use prepayment::PrepaymentPlan;
pub use schedule::{total_interest_with_prepayments, Schedule, ScheduleEntry};
pub use summary::LoanSummary;
pub use types::{LoanTerms, PrepaymentRule, ReduceKind};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
