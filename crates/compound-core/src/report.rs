//! Export and chart views of a projection.
//!
//! Export rows carry [`Money`] values rounded half away from zero to cents
//! with a fixed scale of two, so `1000` is written as `"1000.00"`. Chart
//! series stay in raw `f64`; the charting layer does its own formatting.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::CompoundError;
use crate::plan::ProjectionOutput;
use crate::projection::YearlyRow;
use crate::types::{Amount, Money};
use crate::CompoundResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Headline numbers, rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub final_amount: Money,
    pub total_contributions: Money,
    pub interest_earned: Money,
    pub principal_growth: Money,
    pub contribution_growth: Money,
    pub real_final_amount: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_to_goal: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_reached: Option<bool>,
}

/// One breakdown row, rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub year: u32,
    pub balance: Money,
    pub cumulative_contributions: Money,
    pub cumulative_interest: Money,
    pub real_value: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionReport {
    pub summary: ReportSummary,
    pub rows: Vec<ReportRow>,
}

/// Final-year split of the balance, for the contributions-vs-interest chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceSplit {
    pub contributions: Amount,
    pub interest: Amount,
}

/// Parallel numeric series for the growth chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub years: Vec<u32>,
    pub balance: Vec<Amount>,
    pub contributions: Vec<Amount>,
    pub real_value: Vec<Amount>,
    pub final_split: Option<BalanceSplit>,
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

/// Round `value` to cents. Fails on NaN, infinities and magnitudes outside
/// the `Decimal` range.
pub fn to_money(field: &str, value: Amount) -> CompoundResult<Money> {
    if !value.is_finite() {
        return Err(CompoundError::NonFiniteValue {
            field: field.into(),
        });
    }
    let mut money = Decimal::from_f64(value)
        .ok_or_else(|| CompoundError::InvalidInput {
            field: field.into(),
            reason: format!("{value:e} is outside the representable money range"),
        })?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    money.rescale(2);
    Ok(money)
}

pub fn report_rows(rows: &[YearlyRow]) -> CompoundResult<Vec<ReportRow>> {
    rows.iter()
        .map(|row| {
            Ok(ReportRow {
                year: row.year,
                balance: to_money("balance", row.balance)?,
                cumulative_contributions: to_money(
                    "cumulative_contributions",
                    row.cumulative_contributions,
                )?,
                cumulative_interest: to_money("cumulative_interest", row.cumulative_interest)?,
                real_value: to_money("real_value", row.real_value)?,
            })
        })
        .collect()
}

/// Cents-rounded summary and rows for CSV/PDF export.
pub fn build_report(output: &ProjectionOutput) -> CompoundResult<ProjectionReport> {
    let fv = &output.future_value;
    let summary = ReportSummary {
        final_amount: to_money("final_amount", fv.final_amount)?,
        total_contributions: to_money("total_contributions", fv.total_contributions)?,
        interest_earned: to_money("interest_earned", fv.interest_earned)?,
        principal_growth: to_money("principal_growth", fv.principal_growth)?,
        contribution_growth: to_money("contribution_growth", fv.contribution_growth)?,
        real_final_amount: to_money("real_final_amount", output.real_final_amount)?,
        years_to_goal: output.goal.and_then(|g| g.years_to_goal),
        goal_reached: output.goal.map(|g| g.reached),
    };

    Ok(ProjectionReport {
        summary,
        rows: report_rows(&output.yearly_breakdown)?,
    })
}

pub fn chart_series(rows: &[YearlyRow]) -> ChartSeries {
    ChartSeries {
        years: rows.iter().map(|r| r.year).collect(),
        balance: rows.iter().map(|r| r.balance).collect(),
        contributions: rows.iter().map(|r| r.cumulative_contributions).collect(),
        real_value: rows.iter().map(|r| r.real_value).collect(),
        final_split: rows.last().map(|r| BalanceSplit {
            contributions: r.cumulative_contributions,
            interest: r.cumulative_interest,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ProjectionInput;
    use crate::plan::run_projection;
    use crate::projection::compute_yearly_breakdown;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_to_money_rounds_half_away_from_zero() {
        assert_eq!(to_money("x", 16_470.094_976).unwrap(), dec!(16470.09));
        assert_eq!(to_money("x", 0.125).unwrap(), dec!(0.13));
        assert_eq!(to_money("x", -0.125).unwrap(), dec!(-0.13));
    }

    #[test]
    fn test_to_money_keeps_two_places() {
        assert_eq!(to_money("x", 1_000.0).unwrap().to_string(), "1000.00");
        assert_eq!(to_money("x", 0.5).unwrap().to_string(), "0.50");
    }

    #[test]
    fn test_to_money_rejects_nan() {
        assert!(matches!(
            to_money("balance", f64::NAN),
            Err(CompoundError::NonFiniteValue { .. })
        ));
    }

    #[test]
    fn test_to_money_reports_out_of_range_magnitude() {
        // 100% a year for 1000 years passes validation but overflows Decimal
        let rows = compute_yearly_breakdown(1_000.0, 0.0, 1, 1_000.0, 100.0, 1, 0.0);
        let huge = rows.last().unwrap().balance;
        assert!(huge.is_finite());
        match to_money("balance", huge) {
            Err(CompoundError::InvalidInput { field, reason }) => {
                assert_eq!(field, "balance");
                assert!(reason.contains("outside the representable money range"));
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_report_serializes_money_as_text() {
        let rows = compute_yearly_breakdown(1_000.0, 0.0, 12, 1.0, 0.0, 12, 0.0);
        let report = report_rows(&rows).unwrap();
        let json = serde_json::to_value(&report[1]).unwrap();
        assert_eq!(json["balance"], "1000.00");
        assert_eq!(json["year"], 1);
    }

    #[test]
    fn test_build_report_summary() {
        let mut input = ProjectionInput::new(10_000.0, 10.0, 5.0);
        input.target_amount = Some(15_000.0);
        let output = run_projection(&input).unwrap();
        let report = build_report(&output.result).unwrap();

        assert_eq!(report.summary.final_amount, dec!(16470.09));
        assert_eq!(report.summary.total_contributions, dec!(10000.00));
        assert_eq!(report.summary.years_to_goal, Some(9));
        assert_eq!(report.summary.goal_reached, Some(true));
        assert_eq!(report.rows.len(), 11);
    }

    #[test]
    fn test_chart_series_lengths_and_split() {
        let rows = compute_yearly_breakdown(1_000.0, 100.0, 12, 5.0, 5.0, 12, 2.0);
        let series = chart_series(&rows);
        assert_eq!(series.years, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(series.balance.len(), 6);
        assert_eq!(series.real_value.len(), 6);

        let split = series.final_split.unwrap();
        assert_eq!(split.contributions, 7_000.0);
        assert_eq!(split.interest, rows[5].cumulative_interest);
    }

    #[test]
    fn test_chart_series_empty() {
        assert_eq!(chart_series(&[]).final_split, None);
    }
}
