use napi::Result as NapiResult;
use napi_derive::napi;
use serde::Deserialize;

use compound_core::locale::{self, Currency};
use compound_core::projection::{self, YearlyRow};
use compound_core::{plan, report, share, ProjectionInput};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_input(input_json: &str) -> NapiResult<ProjectionInput> {
    let input: ProjectionInput = serde_json::from_str(input_json).map_err(to_napi_error)?;
    input.validate().map_err(to_napi_error)?;
    Ok(input)
}

fn breakdown_rows(input: &ProjectionInput) -> Vec<YearlyRow> {
    projection::compute_yearly_breakdown(
        input.principal,
        input.contribution,
        input.contribution_frequency,
        input.years,
        input.annual_rate_percent,
        input.compound_frequency,
        input.inflation_rate_percent,
    )
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

#[napi]
pub fn run_projection(input_json: String) -> NapiResult<String> {
    let input: ProjectionInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = plan::run_projection(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn future_value(input_json: String) -> NapiResult<String> {
    let input = parse_input(&input_json)?;
    let output = projection::compute_future_value(
        input.principal,
        input.contribution,
        input.contribution_frequency,
        input.annual_rate_percent,
        input.compound_frequency,
        input.years,
    );
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn real_value(nominal_amount: f64, inflation_rate_percent: f64, years: f64) -> f64 {
    projection::compute_real_value(nominal_amount, inflation_rate_percent, years)
}

#[derive(Deserialize)]
struct GoalBindingInput {
    principal: f64,
    #[serde(default)]
    contribution: f64,
    #[serde(default = "monthly")]
    contribution_frequency: u32,
    target_amount: f64,
    annual_rate_percent: f64,
    #[serde(default = "monthly")]
    compound_frequency: u32,
}

fn monthly() -> u32 {
    12
}

#[napi]
pub fn goal_timeline(input_json: String) -> NapiResult<String> {
    let input: GoalBindingInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    if input.contribution_frequency == 0 || input.compound_frequency == 0 {
        return Err(to_napi_error("frequencies must be > 0"));
    }
    let output = projection::solve_goal_timeline(
        input.principal,
        input.contribution,
        input.contribution_frequency,
        input.target_amount,
        input.annual_rate_percent,
        input.compound_frequency,
    );
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn yearly_breakdown(input_json: String) -> NapiResult<String> {
    let input = parse_input(&input_json)?;
    serde_json::to_string(&breakdown_rows(&input)).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Export and chart
// ---------------------------------------------------------------------------

#[napi]
pub fn build_report(input_json: String) -> NapiResult<String> {
    let input: ProjectionInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = plan::run_projection(&input).map_err(to_napi_error)?;
    let report = report::build_report(&output.result).map_err(to_napi_error)?;
    serde_json::to_string(&report).map_err(to_napi_error)
}

#[napi]
pub fn chart_series(input_json: String) -> NapiResult<String> {
    let input = parse_input(&input_json)?;
    let series = report::chart_series(&breakdown_rows(&input));
    serde_json::to_string(&series).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Shareable links
// ---------------------------------------------------------------------------

#[napi]
pub fn encode_query(input_json: String) -> NapiResult<String> {
    let input: ProjectionInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    Ok(share::to_query_string(&input))
}

#[napi]
pub fn decode_query(query: String) -> NapiResult<String> {
    let input = share::from_query_string(&query).map_err(to_napi_error)?;
    serde_json::to_string(&input).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Locale
// ---------------------------------------------------------------------------

#[napi]
pub fn parse_amount(raw: String, currency_code: String) -> NapiResult<f64> {
    let currency: Currency = currency_code.parse().map_err(to_napi_error)?;
    locale::parse_amount(&raw, &currency).map_err(to_napi_error)
}

#[napi]
pub fn format_amount(amount: f64, currency_code: String) -> NapiResult<String> {
    let currency: Currency = currency_code.parse().map_err(to_napi_error)?;
    Ok(locale::format_amount(amount, &currency))
}
