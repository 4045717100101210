use serde::{Deserialize, Serialize};

use super::future_value::growth_factor;
use super::inflation::compute_real_value;
use crate::types::{Amount, Frequency, Percent, Years};

/// Snapshot of the projection at the end of a whole year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyRow {
    pub year: u32,
    pub balance: Amount,
    pub cumulative_contributions: Amount,
    pub cumulative_interest: Amount,
    pub real_value: Amount,
}

/// The per-year inputs that turn one row into the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearlyStep {
    pub yearly_contribution: Amount,
    /// `(1 + r/n)^n`: one full year of compounding.
    pub annual_growth: f64,
    pub inflation_rate_percent: Percent,
}

impl YearlyStep {
    pub fn new(
        contribution: Amount,
        contribution_frequency: Frequency,
        annual_rate_percent: Percent,
        compound_frequency: Frequency,
        inflation_rate_percent: Percent,
    ) -> Self {
        YearlyStep {
            yearly_contribution: contribution * f64::from(contribution_frequency),
            annual_growth: growth_factor(annual_rate_percent, compound_frequency, 1.0),
            inflation_rate_percent,
        }
    }
}

impl YearlyRow {
    /// Row for year 0: nothing has grown yet.
    pub fn opening(principal: Amount) -> Self {
        YearlyRow {
            year: 0,
            balance: principal,
            cumulative_contributions: principal,
            cumulative_interest: 0.0,
            real_value: principal,
        }
    }

    /// The following year's row. The year's contributions are added as one
    /// lump before that year's compounding is applied.
    pub fn next(&self, step: &YearlyStep) -> Self {
        let year = self.year + 1;
        let cumulative_contributions = self.cumulative_contributions + step.yearly_contribution;
        let balance = (self.balance + step.yearly_contribution) * step.annual_growth;
        YearlyRow {
            year,
            balance,
            cumulative_contributions,
            cumulative_interest: balance - cumulative_contributions,
            real_value: compute_real_value(balance, step.inflation_rate_percent, f64::from(year)),
        }
    }
}

/// Year-by-year projection for years `0..=years`, one row per whole year in
/// chronological order. A fractional horizon is truncated to whole years.
pub fn compute_yearly_breakdown(
    principal: Amount,
    contribution: Amount,
    contribution_frequency: Frequency,
    years: Years,
    annual_rate_percent: Percent,
    compound_frequency: Frequency,
    inflation_rate_percent: Percent,
) -> Vec<YearlyRow> {
    let step = YearlyStep::new(
        contribution,
        contribution_frequency,
        annual_rate_percent,
        compound_frequency,
        inflation_rate_percent,
    );

    std::iter::successors(Some(YearlyRow::opening(principal)), |row| {
        Some(row.next(&step))
    })
    .take(whole_years(years) as usize + 1)
    .collect()
}

fn whole_years(years: Years) -> u32 {
    if years.is_finite() && years > 0.0 {
        years.floor() as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_opening_row() {
        let rows = compute_yearly_breakdown(5_000.0, 100.0, 12, 0.0, 6.0, 12, 2.0);
        assert_eq!(rows, vec![YearlyRow::opening(5_000.0)]);
    }

    #[test]
    fn test_row_count_and_order() {
        let rows = compute_yearly_breakdown(1_000.0, 50.0, 12, 10.0, 5.0, 12, 2.5);
        assert_eq!(rows.len(), 11);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.year as usize, i);
        }
    }

    #[test]
    fn test_fractional_years_are_truncated() {
        let rows = compute_yearly_breakdown(1_000.0, 0.0, 12, 3.9, 5.0, 12, 0.0);
        assert_eq!(rows.len(), 4);
    }

    #[test]
    fn test_contributions_added_before_compounding() {
        let step = YearlyStep::new(100.0, 12, 12.0, 1, 0.0);
        let row = YearlyRow::opening(1_000.0).next(&step);
        // (1000 + 1200) * 1.12
        assert!((row.balance - 2_464.0).abs() < 1e-9);
        assert_eq!(row.cumulative_contributions, 2_200.0);
        assert!((row.cumulative_interest - 264.0).abs() < 1e-9);
        assert!((row.real_value - row.balance).abs() < 1e-9);
    }

    #[test]
    fn test_interest_is_balance_minus_contributions_on_every_row() {
        let rows = compute_yearly_breakdown(12_000.0, 250.0, 26, 30.0, 6.5, 365, 3.0);
        for row in &rows {
            assert_eq!(
                row.cumulative_interest,
                row.balance - row.cumulative_contributions
            );
        }
    }

    #[test]
    fn test_real_value_uses_row_year() {
        let rows = compute_yearly_breakdown(1_000.0, 0.0, 12, 5.0, 0.0, 12, 3.0);
        let last = rows.last().unwrap();
        assert!((last.real_value - 1_000.0 / 1.03_f64.powi(5)).abs() < 1e-9);
    }

    #[test]
    fn test_matching_annual_frequencies_agree_with_closed_form_lump_sum() {
        let rows = compute_yearly_breakdown(10_000.0, 0.0, 12, 10.0, 5.0, 12, 0.0);
        let closed = crate::projection::compute_future_value(10_000.0, 0.0, 12, 5.0, 12, 10.0);
        assert!((rows[10].balance - closed.final_amount).abs() < 1e-6);
    }

    #[test]
    fn test_zero_frequencies_do_not_panic() {
        let rows = compute_yearly_breakdown(1_000.0, 100.0, 12, 5.0, 5.0, 0, 2.0);
        assert_eq!(rows.len(), 6);

        let rows = compute_yearly_breakdown(1_000.0, 100.0, 0, 5.0, 0.0, 0, 0.0);
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[5].cumulative_contributions, 1_000.0);
    }

    #[test]
    fn test_any_row_follows_from_its_predecessor() {
        let step = YearlyStep::new(75.0, 12, 4.0, 4, 2.0);
        let rows = compute_yearly_breakdown(3_000.0, 75.0, 12, 8.0, 4.0, 4, 2.0);
        for pair in rows.windows(2) {
            assert_eq!(pair[0].next(&step), pair[1]);
        }
    }
}
