use crate::types::{Amount, Percent, Years};

/// Deflate `nominal_amount` by cumulative inflation over `years`:
/// `nominal / (1 + inflation/100)^years`.
///
/// Negative inflation (deflation) is accepted and raises the real value.
pub fn compute_real_value(
    nominal_amount: Amount,
    inflation_rate_percent: Percent,
    years: Years,
) -> Amount {
    nominal_amount / (1.0 + inflation_rate_percent / 100.0).powf(years)
}
