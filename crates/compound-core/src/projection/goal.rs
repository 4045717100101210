//! Goal timeline: the number of whole years until a projection reaches a
//! target amount, found by bisection on the horizon.

use log::debug;
use serde::{Deserialize, Serialize};

use super::future_value::{annuity_value, growth_factor};
use crate::types::{Amount, Frequency, Percent, Years};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Upper end of the search bracket, in years.
const SEARCH_HORIZON_YEARS: Years = 100.0;

/// Maximum bisection iterations.
const MAX_BISECTION_ITERATIONS: u32 = 1000;

/// Convergence tolerance on the projected amount, in currency units.
const AMOUNT_TOLERANCE: Amount = 0.01;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Outcome of a goal search. An unreachable goal is a normal result, not an
/// error: `years_to_goal` is `None` and `reached` is `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalTimeline {
    pub years_to_goal: Option<u32>,
    pub reached: bool,
}

impl GoalTimeline {
    pub fn reached_in(years: u32) -> Self {
        GoalTimeline {
            years_to_goal: Some(years),
            reached: true,
        }
    }

    pub fn unreachable() -> Self {
        GoalTimeline {
            years_to_goal: None,
            reached: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Solver
// ---------------------------------------------------------------------------

/// Projected balance after `years`, with contributions already expressed per
/// compounding period.
fn balance_at(
    principal: Amount,
    per_period: Amount,
    annual_rate_percent: Percent,
    compound_frequency: Frequency,
    years: Years,
) -> Amount {
    let principal_fv = principal * growth_factor(annual_rate_percent, compound_frequency, years);
    if per_period > 0.0 {
        principal_fv + annuity_value(per_period, annual_rate_percent, compound_frequency, years)
    } else {
        principal_fv
    }
}

/// Find the smallest whole number of years after which the projection of
/// `principal` plus contributions reaches `target_amount`.
///
/// Bisects `[0, 100]` years for up to 1000 iterations and stops as soon as the
/// projected amount is within one cent of the target; the crossing point is
/// then rounded up to a whole year. The search assumes the projection grows
/// monotonically with time, i.e. a non-negative rate and contribution. That
/// precondition is not checked here: with a shrinking balance the result is
/// meaningless.
pub fn solve_goal_timeline(
    principal: Amount,
    contribution: Amount,
    contribution_frequency: Frequency,
    target_amount: Amount,
    annual_rate_percent: Percent,
    compound_frequency: Frequency,
) -> GoalTimeline {
    if target_amount <= principal {
        return GoalTimeline::reached_in(0);
    }

    let per_period =
        contribution * f64::from(contribution_frequency) / f64::from(compound_frequency);

    let mut low: Years = 0.0;
    let mut high: Years = SEARCH_HORIZON_YEARS;

    for iteration in 0..MAX_BISECTION_ITERATIONS {
        let mid = (low + high) / 2.0;
        let value = balance_at(
            principal,
            per_period,
            annual_rate_percent,
            compound_frequency,
            mid,
        );

        if (value - target_amount).abs() < AMOUNT_TOLERANCE {
            debug!(
                "goal {target_amount} reached at {mid:.6} years after {} iterations",
                iteration + 1
            );
            return GoalTimeline::reached_in(mid.ceil() as u32);
        }

        if value < target_amount {
            low = mid;
        } else {
            high = mid;
        }
    }

    debug!(
        "goal {target_amount} not reached within {SEARCH_HORIZON_YEARS} years \
         ({MAX_BISECTION_ITERATIONS} iterations)"
    );
    GoalTimeline::unreachable()
}
