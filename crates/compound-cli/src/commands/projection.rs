use clap::Args;
use log::debug;
use serde_json::{json, Value};

use compound_core::plan;
use compound_core::projection::{
    compute_future_value, compute_real_value, compute_yearly_breakdown, solve_goal_timeline,
};
use compound_core::report;
use compound_core::ProjectionInput;

use crate::input;

/// Projection parameters, given as flags or loaded from a file or stdin
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Initial balance
    #[arg(long)]
    pub principal: Option<f64>,

    /// Amount added each contribution period
    #[arg(long, default_value = "0")]
    pub contribution: f64,

    /// Contribution periods per year (12 = monthly)
    #[arg(long, default_value = "12")]
    pub contribution_frequency: u32,

    /// Projection horizon in years
    #[arg(long)]
    pub years: Option<f64>,

    /// Nominal annual rate in percent (e.g. 5 for 5%)
    #[arg(long, allow_negative_numbers = true)]
    pub rate: Option<f64>,

    /// Compounding periods per year
    #[arg(long, alias = "compound", default_value = "12")]
    pub compound_frequency: u32,

    /// Annual inflation rate in percent
    #[arg(long, alias = "inflation", default_value = "0", allow_negative_numbers = true)]
    pub inflation_rate: f64,

    /// Target amount for the goal timeline
    #[arg(long)]
    pub target: Option<f64>,

    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the full projection
#[derive(Args)]
pub struct ProjectArgs {
    #[command(flatten)]
    pub params: InputArgs,
}

/// Arguments for the closed-form future value
#[derive(Args)]
pub struct FutureValueArgs {
    #[command(flatten)]
    pub params: InputArgs,
}

/// Arguments for the export-ready breakdown
#[derive(Args)]
pub struct BreakdownArgs {
    #[command(flatten)]
    pub params: InputArgs,
}

/// Arguments for chart series
#[derive(Args)]
pub struct ChartArgs {
    #[command(flatten)]
    pub params: InputArgs,
}

/// Arguments for the inflation adjustment
#[derive(Args)]
pub struct RealValueArgs {
    /// Nominal amount
    #[arg(long)]
    pub amount: f64,

    /// Annual inflation rate in percent
    #[arg(long, alias = "inflation", allow_negative_numbers = true)]
    pub inflation_rate: f64,

    /// Years of inflation
    #[arg(long)]
    pub years: f64,
}

/// Arguments for the goal timeline
#[derive(Args)]
pub struct GoalArgs {
    /// Initial balance
    #[arg(long)]
    pub principal: f64,

    /// Amount added each contribution period
    #[arg(long, default_value = "0")]
    pub contribution: f64,

    /// Contribution periods per year
    #[arg(long, default_value = "12")]
    pub contribution_frequency: u32,

    /// Amount to reach
    #[arg(long)]
    pub target: f64,

    /// Nominal annual rate in percent
    #[arg(long, allow_negative_numbers = true)]
    pub rate: f64,

    /// Compounding periods per year
    #[arg(long, alias = "compound", default_value = "12")]
    pub compound_frequency: u32,
}

/// Build a [`ProjectionInput`] from `--input`, piped stdin or flags, in that
/// order of precedence.
pub fn resolve_input(args: &InputArgs) -> Result<ProjectionInput, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        debug!("reading projection input from {path}");
        return input::file::read_input(path);
    }
    if let Some(piped) = input::stdin::read_stdin()? {
        debug!("reading projection input from stdin");
        return Ok(piped);
    }
    debug!("building projection input from flags");
    from_flags(args)
}

fn from_flags(args: &InputArgs) -> Result<ProjectionInput, Box<dyn std::error::Error>> {
    Ok(ProjectionInput {
        principal: args
            .principal
            .ok_or("--principal is required (or provide --input)")?,
        contribution: args.contribution,
        contribution_frequency: args.contribution_frequency,
        years: args.years.ok_or("--years is required (or provide --input)")?,
        annual_rate_percent: args.rate.ok_or("--rate is required (or provide --input)")?,
        compound_frequency: args.compound_frequency,
        inflation_rate_percent: args.inflation_rate,
        target_amount: args.target,
    })
}

fn validated(args: &InputArgs) -> Result<ProjectionInput, Box<dyn std::error::Error>> {
    let projection_input = resolve_input(args)?;
    projection_input.validate()?;
    Ok(projection_input)
}

pub fn run_project(args: ProjectArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let projection_input = resolve_input(&args.params)?;
    let result = plan::run_projection(&projection_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_future_value(args: FutureValueArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let p = validated(&args.params)?;
    let result = compute_future_value(
        p.principal,
        p.contribution,
        p.contribution_frequency,
        p.annual_rate_percent,
        p.compound_frequency,
        p.years,
    );
    Ok(serde_json::to_value(result)?)
}

pub fn run_real_value(args: RealValueArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let real_value = compute_real_value(args.amount, args.inflation_rate, args.years);
    Ok(json!({
        "nominal_amount": args.amount,
        "real_value": real_value,
    }))
}

pub fn run_goal(args: GoalArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mut p = ProjectionInput::new(args.principal, 0.0, args.rate);
    p.contribution = args.contribution;
    p.contribution_frequency = args.contribution_frequency;
    p.compound_frequency = args.compound_frequency;
    p.target_amount = Some(args.target);
    p.validate()?;

    let goal = solve_goal_timeline(
        p.principal,
        p.contribution,
        p.contribution_frequency,
        args.target,
        p.annual_rate_percent,
        p.compound_frequency,
    );
    Ok(serde_json::to_value(goal)?)
}

pub fn run_breakdown(args: BreakdownArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let p = validated(&args.params)?;
    let rows = compute_yearly_breakdown(
        p.principal,
        p.contribution,
        p.contribution_frequency,
        p.years,
        p.annual_rate_percent,
        p.compound_frequency,
        p.inflation_rate_percent,
    );
    Ok(serde_json::to_value(report::report_rows(&rows)?)?)
}

pub fn run_chart(args: ChartArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let p = validated(&args.params)?;
    let rows = compute_yearly_breakdown(
        p.principal,
        p.contribution,
        p.contribution_frequency,
        p.years,
        p.annual_rate_percent,
        p.compound_frequency,
        p.inflation_rate_percent,
    );
    Ok(serde_json::to_value(report::chart_series(&rows))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags() -> InputArgs {
        InputArgs {
            principal: Some(10_000.0),
            contribution: 0.0,
            contribution_frequency: 12,
            years: Some(10.0),
            rate: Some(5.0),
            compound_frequency: 12,
            inflation_rate: 0.0,
            target: None,
            input: None,
        }
    }

    #[test]
    fn test_input_from_flags() {
        let input = from_flags(&flags()).unwrap();
        assert_eq!(input, ProjectionInput::new(10_000.0, 10.0, 5.0));
    }

    #[test]
    fn test_input_file_takes_precedence_over_flags() {
        let path = std::env::temp_dir().join(format!("compound-input-{}.yaml", std::process::id()));
        std::fs::write(&path, "principal: 2500\nyears: 4\nannual_rate_percent: 3.5\n").unwrap();

        let mut args = flags();
        args.input = Some(path.to_string_lossy().into_owned());
        let input = resolve_input(&args).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(input, ProjectionInput::new(2_500.0, 4.0, 3.5));
    }

    #[test]
    fn test_missing_rate_flag() {
        let mut args = flags();
        args.rate = None;
        let err = from_flags(&args).unwrap_err();
        assert!(err.to_string().contains("--rate"));
    }

    #[test]
    fn test_real_value_command() {
        let value = run_real_value(RealValueArgs {
            amount: 1_000.0,
            inflation_rate: 3.0,
            years: 10.0,
        })
        .unwrap();
        let real = value["real_value"].as_f64().unwrap();
        assert!((real - 744.09).abs() < 0.01);
    }

    #[test]
    fn test_goal_command() {
        let value = run_goal(GoalArgs {
            principal: 1_000.0,
            contribution: 0.0,
            contribution_frequency: 12,
            target: 2_000.0,
            rate: 5.0,
            compound_frequency: 12,
        })
        .unwrap();
        assert_eq!(value["years_to_goal"], 14);
        assert_eq!(value["reached"], true);
    }

    #[test]
    fn test_goal_command_rejects_zero_frequency() {
        let result = run_goal(GoalArgs {
            principal: 1_000.0,
            contribution: 0.0,
            contribution_frequency: 12,
            target: 2_000.0,
            rate: 5.0,
            compound_frequency: 0,
        });
        assert!(result.is_err());
    }
}
