//! Orchestration: validate the form input, run every engine operation and
//! wrap the results in the standard computation envelope.

use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::input::ProjectionInput;
use crate::projection::{
    compute_future_value, compute_real_value, compute_yearly_breakdown, solve_goal_timeline,
    GoalTimeline, ProjectionResult, YearlyRow,
};
use crate::types::{with_metadata, Amount, ComputationOutput};
use crate::CompoundResult;

/// Everything the display, chart and export layers consume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionOutput {
    pub future_value: ProjectionResult,
    /// Closed-form final amount in today's money.
    pub real_final_amount: Amount,
    /// Present only when a positive target amount was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<GoalTimeline>,
    pub yearly_breakdown: Vec<YearlyRow>,
}

/// Validate `input` and run the full projection.
pub fn run_projection(
    input: &ProjectionInput,
) -> CompoundResult<ComputationOutput<ProjectionOutput>> {
    let start = Instant::now();
    input.validate()?;
    let mut warnings: Vec<String> = Vec::new();

    debug!(
        "projecting principal={} contribution={}x{} rate={}% n={} years={}",
        input.principal,
        input.contribution,
        input.contribution_frequency,
        input.annual_rate_percent,
        input.compound_frequency,
        input.years
    );

    let future_value = compute_future_value(
        input.principal,
        input.contribution,
        input.contribution_frequency,
        input.annual_rate_percent,
        input.compound_frequency,
        input.years,
    );

    let real_final_amount = compute_real_value(
        future_value.final_amount,
        input.inflation_rate_percent,
        input.years,
    );

    if input.annual_rate_percent < 0.0 {
        warnings.push(format!(
            "Negative rate ({}%): the balance shrinks over time",
            input.annual_rate_percent
        ));
    }

    let goal = input.goal_target().map(|target| {
        if input.annual_rate_percent < 0.0 {
            warnings.push(
                "Goal timeline assumes a non-decreasing balance; \
                 with a negative rate the result is unreliable"
                    .to_string(),
            );
        }
        let goal = solve_goal_timeline(
            input.principal,
            input.contribution,
            input.contribution_frequency,
            target,
            input.annual_rate_percent,
            input.compound_frequency,
        );
        if !goal.reached {
            warnings.push(format!("Target {target:.2} is not reached within 100 years"));
        }
        goal
    });

    let yearly_breakdown = compute_yearly_breakdown(
        input.principal,
        input.contribution,
        input.contribution_frequency,
        input.years,
        input.annual_rate_percent,
        input.compound_frequency,
        input.inflation_rate_percent,
    );

    if input.contribution > 0.0 && input.years >= 1.0 {
        warnings.push(
            "The yearly breakdown adds each year's contributions as one lump before \
             compounding and will not match the closed-form final amount exactly"
                .to_string(),
        );
    }

    if input.years.fract() != 0.0 {
        warnings.push(format!(
            "Yearly breakdown covers whole years only ({} of {})",
            input.years.floor(),
            input.years
        ));
    }

    let output = ProjectionOutput {
        future_value,
        real_final_amount,
        goal,
        yearly_breakdown,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Discrete compounding with ordinary-annuity contributions; \
         bisection goal timeline; annual-lump yearly breakdown",
        input,
        warnings,
        elapsed,
        output,
    ))
}
