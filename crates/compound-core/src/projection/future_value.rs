use serde::{Deserialize, Serialize};

use crate::types::{Amount, Frequency, Percent, Years};

/// Closed-form projection of a balance at the end of the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub final_amount: Amount,
    /// Principal plus every contribution made, before growth.
    pub total_contributions: Amount,
    pub interest_earned: Amount,
    /// Growth attributable to the initial principal compounding.
    pub principal_growth: Amount,
    /// Growth attributable to the contribution stream compounding.
    pub contribution_growth: Amount,
}

/// `(1 + r/n)^(n*t)` with `r` given in percent.
pub(crate) fn growth_factor(
    annual_rate_percent: Percent,
    compound_frequency: Frequency,
    years: Years,
) -> f64 {
    let n = f64::from(compound_frequency);
    (1.0 + annual_rate_percent / 100.0 / n).powf(n * years)
}

/// Future value of an ordinary annuity paying `per_period` at the end of each
/// compounding period for `years`. A zero rate degenerates to plain
/// accumulation.
pub(crate) fn annuity_value(
    per_period: Amount,
    annual_rate_percent: Percent,
    compound_frequency: Frequency,
    years: Years,
) -> Amount {
    let n = f64::from(compound_frequency);
    let periodic_rate = annual_rate_percent / 100.0 / n;
    if periodic_rate == 0.0 {
        return per_period * n * years;
    }
    let growth = growth_factor(annual_rate_percent, compound_frequency, years);
    per_period * ((growth - 1.0) / periodic_rate)
}

/// Future value of `principal` plus `contribution` paid `contribution_frequency`
/// times a year, compounded `compound_frequency` times a year for `years`.
///
/// The contribution stream is converted into an equivalent amount per
/// compounding period before the annuity formula is applied. No rounding is
/// performed, and zero frequencies produce NaN/infinite values rather than a
/// panic.
pub fn compute_future_value(
    principal: Amount,
    contribution: Amount,
    contribution_frequency: Frequency,
    annual_rate_percent: Percent,
    compound_frequency: Frequency,
    years: Years,
) -> ProjectionResult {
    let yearly_contribution = contribution * f64::from(contribution_frequency);
    let contributed = yearly_contribution * years;

    let principal_fv =
        principal * growth_factor(annual_rate_percent, compound_frequency, years);

    let contribution_fv = if contribution == 0.0 {
        0.0
    } else if annual_rate_percent == 0.0 {
        contributed
    } else {
        let per_period = yearly_contribution / f64::from(compound_frequency);
        annuity_value(per_period, annual_rate_percent, compound_frequency, years)
    };

    let final_amount = principal_fv + contribution_fv;
    let total_contributions = principal + contributed;

    ProjectionResult {
        final_amount,
        total_contributions,
        interest_earned: final_amount - total_contributions,
        principal_growth: principal_fv - principal,
        contribution_growth: contribution_fv - contributed,
    }
}
