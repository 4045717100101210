use serde::{Deserialize, Serialize};

use crate::error::CompoundError;
use crate::types::{Amount, Frequency, Percent, Years};
use crate::CompoundResult;

/// Longest horizon accepted by [`ProjectionInput::validate`].
pub const MAX_PROJECTION_YEARS: Years = 1000.0;

/// Parameters collected from the calculator form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Initial balance.
    pub principal: Amount,
    /// Amount added each contribution period.
    #[serde(default)]
    pub contribution: Amount,
    /// Contribution periods per year (12 = monthly).
    #[serde(default = "default_frequency")]
    pub contribution_frequency: Frequency,
    /// Projection horizon in years.
    pub years: Years,
    /// Nominal annual rate in percent (5.0 = 5%).
    pub annual_rate_percent: Percent,
    /// Compounding periods per year.
    #[serde(default = "default_frequency")]
    pub compound_frequency: Frequency,
    #[serde(default)]
    pub inflation_rate_percent: Percent,
    /// Goal amount; `None` or zero disables the goal timeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_amount: Option<Amount>,
}

fn default_frequency() -> Frequency {
    12
}

impl ProjectionInput {
    /// Lump sum only, monthly compounding, no inflation and no goal.
    pub fn new(principal: Amount, years: Years, annual_rate_percent: Percent) -> Self {
        ProjectionInput {
            principal,
            contribution: 0.0,
            contribution_frequency: default_frequency(),
            years,
            annual_rate_percent,
            compound_frequency: default_frequency(),
            inflation_rate_percent: 0.0,
            target_amount: None,
        }
    }

    /// The goal to solve for, if one was requested.
    pub fn goal_target(&self) -> Option<Amount> {
        self.target_amount.filter(|target| *target > 0.0)
    }

    /// Reject inputs the engine cannot give a meaningful answer for.
    ///
    /// The engine itself never validates; callers run this first. Negative
    /// rates are accepted since they describe a shrinking balance.
    pub fn validate(&self) -> CompoundResult<()> {
        for (field, value) in [
            ("principal", self.principal),
            ("contribution", self.contribution),
            ("years", self.years),
        ] {
            ensure_finite(field, value)?;
            if value < 0.0 {
                return Err(invalid(field, "must be >= 0"));
            }
        }

        if let Some(target) = self.target_amount {
            ensure_finite("target_amount", target)?;
            if target < 0.0 {
                return Err(invalid("target_amount", "must be >= 0"));
            }
        }

        ensure_finite("annual_rate_percent", self.annual_rate_percent)?;
        if self.annual_rate_percent <= -100.0 {
            return Err(invalid(
                "annual_rate_percent",
                "rate must be greater than -100%",
            ));
        }

        ensure_finite("inflation_rate_percent", self.inflation_rate_percent)?;
        if self.inflation_rate_percent <= -100.0 {
            return Err(invalid(
                "inflation_rate_percent",
                "inflation must be greater than -100%",
            ));
        }

        if self.contribution_frequency == 0 {
            return Err(invalid("contribution_frequency", "must be > 0"));
        }
        if self.compound_frequency == 0 {
            return Err(invalid("compound_frequency", "must be > 0"));
        }

        if self.years > MAX_PROJECTION_YEARS {
            return Err(invalid(
                "years",
                &format!("must be <= {MAX_PROJECTION_YEARS}"),
            ));
        }

        Ok(())
    }
}

fn ensure_finite(field: &str, value: f64) -> CompoundResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, "must be a finite number"))
    }
}

fn invalid(field: &str, reason: &str) -> CompoundError {
    CompoundError::InvalidInput {
        field: field.into(),
        reason: reason.into(),
    }
}
