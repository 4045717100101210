use compound_core::plan::run_projection;
use compound_core::projection::{
    compute_future_value, compute_real_value, compute_yearly_breakdown, solve_goal_timeline,
    GoalTimeline,
};
use compound_core::ProjectionInput;

const RATES: [f64; 5] = [0.0, 1.5, 5.0, 7.25, 12.0];
const FREQUENCIES: [u32; 5] = [1, 4, 12, 26, 365];

fn relative_diff(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        a.abs()
    } else {
        ((a - b) / b).abs()
    }
}

// ===========================================================================
// Known answers
// ===========================================================================

#[test]
fn test_scenario_lump_sum_ten_years() {
    let result = compute_future_value(10_000.0, 0.0, 12, 5.0, 12, 10.0);
    assert!(
        (result.final_amount - 16_470.09).abs() < 0.01,
        "Expected ~16470.09, got {}",
        result.final_amount
    );
}

#[test]
fn test_scenario_monthly_savings_twenty_years() {
    let result = compute_future_value(0.0, 100.0, 12, 6.0, 12, 20.0);
    assert!(
        (result.final_amount - 46_204.09).abs() < 0.01,
        "Expected ~46204.09, got {}",
        result.final_amount
    );
}

#[test]
fn test_scenario_inflation_ten_years() {
    let real = compute_real_value(1_000.0, 3.0, 10.0);
    assert!((real - 744.09).abs() < 0.01, "Expected ~744.09, got {real}");
}

#[test]
fn test_scenario_doubling_goal() {
    let goal = solve_goal_timeline(1_000.0, 0.0, 12, 2_000.0, 5.0, 12);
    assert_eq!(goal.years_to_goal, Some(14));
    assert!(goal.reached);
}

// ===========================================================================
// Properties
// ===========================================================================

#[test]
fn test_lump_sum_equals_closed_form_for_all_rates_and_frequencies() {
    for rate in RATES {
        for n in FREQUENCIES {
            for years in [0.0, 1.0, 7.5, 30.0] {
                let result = compute_future_value(8_000.0, 0.0, 12, rate, n, years);
                let nf = f64::from(n);
                let expected = 8_000.0 * (1.0 + rate / 100.0 / nf).powf(nf * years);
                assert!(
                    relative_diff(result.final_amount, expected) < 1e-9,
                    "rate={rate} n={n} years={years}"
                );
            }
        }
    }
}

#[test]
fn test_zero_rate_is_principal_plus_contributions() {
    for cf in FREQUENCIES {
        for n in FREQUENCIES {
            let result = compute_future_value(2_000.0, 75.0, cf, 0.0, n, 15.0);
            let expected = 2_000.0 + 75.0 * f64::from(cf) * 15.0;
            assert!((result.final_amount - expected).abs() < 1e-6);
        }
    }
}

#[test]
fn test_zero_years_returns_principal_everywhere() {
    for rate in RATES {
        let result = compute_future_value(4_321.0, 100.0, 12, rate, 12, 0.0);
        assert_eq!(result.final_amount, 4_321.0);
        assert_eq!(compute_real_value(4_321.0, rate, 0.0), 4_321.0);
    }
}

#[test]
fn test_breakdown_rows_are_internally_consistent() {
    for rate in RATES {
        for n in FREQUENCIES {
            let rows = compute_yearly_breakdown(5_000.0, 200.0, 12, 25.0, rate, n, 2.5);
            assert_eq!(rows.len(), 26);
            for row in &rows {
                assert_eq!(
                    row.cumulative_interest,
                    row.balance - row.cumulative_contributions
                );
            }
        }
    }
}

#[test]
fn test_breakdown_overshoots_closed_form_with_monthly_contributions() {
    // Annual lumps compound for a full year, so the breakdown overshoots the
    // closed form even when contribution and compounding are both monthly.
    let closed = compute_future_value(0.0, 100.0, 12, 6.0, 12, 10.0);
    let rows = compute_yearly_breakdown(0.0, 100.0, 12, 10.0, 6.0, 12, 0.0);
    assert!(rows[10].balance > closed.final_amount);
}

#[test]
fn test_goal_is_immediate_when_principal_suffices() {
    for rate in [-5.0, 0.0, 5.0] {
        assert_eq!(
            solve_goal_timeline(10_000.0, 0.0, 12, 9_999.99, rate, 12),
            GoalTimeline::reached_in(0)
        );
    }
}

#[test]
fn test_goal_years_non_decreasing_in_target() {
    let targets = [1_100.0, 2_500.0, 7_500.0, 20_000.0, 60_000.0, 150_000.0];
    for rate in [2.0, 5.0, 9.0] {
        let years: Vec<u32> = targets
            .iter()
            .map(|t| solve_goal_timeline(1_000.0, 100.0, 12, *t, rate, 12))
            .filter_map(|g| g.years_to_goal)
            .collect();
        assert!(years.windows(2).all(|w| w[0] <= w[1]), "{rate}: {years:?}");
    }
}

#[test]
fn test_goal_year_brackets_the_crossing() {
    let goal = solve_goal_timeline(5_000.0, 250.0, 12, 100_000.0, 6.0, 12);
    let years = goal.years_to_goal.expect("reachable") as f64;
    let before = compute_future_value(5_000.0, 250.0, 12, 6.0, 12, years - 1.0);
    let after = compute_future_value(5_000.0, 250.0, 12, 6.0, 12, years);
    assert!(before.final_amount < 100_000.0);
    assert!(after.final_amount >= 100_000.0 - 0.01);
}

#[test]
fn test_projection_is_idempotent() {
    let mut input = ProjectionInput::new(7_500.0, 18.0, 6.75);
    input.contribution = 320.0;
    input.contribution_frequency = 26;
    input.compound_frequency = 365;
    input.inflation_rate_percent = 2.75;
    input.target_amount = Some(150_000.0);

    let first = run_projection(&input).unwrap().result;
    let second = run_projection(&input).unwrap().result;

    assert_eq!(
        first.future_value.final_amount.to_bits(),
        second.future_value.final_amount.to_bits()
    );
    assert_eq!(first.future_value, second.future_value);
    assert_eq!(first.goal, second.goal);
    assert_eq!(first.yearly_breakdown, second.yearly_breakdown);
}

#[test]
fn test_envelope_serializes() {
    let output = run_projection(&ProjectionInput::new(1_000.0, 2.0, 5.0)).unwrap();
    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["assumptions"]["principal"], 1000.0);
    assert_eq!(json["result"]["yearly_breakdown"].as_array().unwrap().len(), 3);
    assert!(json["result"].get("goal").is_none());
}
