//! Query-string persistence of a [`ProjectionInput`], for shareable links.
//!
//! Numbers are written with Rust's shortest round-trip formatting, so values
//! survive the trip unchanged. Only plain numeric values are produced, which
//! never need percent-encoding; decoding still accepts browser-encoded values
//! (`%2D1`, `+`).

use std::collections::HashMap;
use std::str::FromStr;

use crate::error::CompoundError;
use crate::input::ProjectionInput;
use crate::CompoundResult;

const PRINCIPAL: &str = "principal";
const CONTRIBUTION: &str = "contribution";
const CONTRIBUTION_FREQUENCY: &str = "contributionFrequency";
const YEARS: &str = "years";
const RATE: &str = "rate";
const COMPOUND: &str = "compound";
const INFLATION: &str = "inflation";
const TARGET: &str = "target";

pub fn to_query_string(input: &ProjectionInput) -> String {
    let mut pairs: Vec<(&str, String)> = vec![
        (PRINCIPAL, input.principal.to_string()),
        (CONTRIBUTION, input.contribution.to_string()),
        (CONTRIBUTION_FREQUENCY, input.contribution_frequency.to_string()),
        (YEARS, input.years.to_string()),
        (RATE, input.annual_rate_percent.to_string()),
        (COMPOUND, input.compound_frequency.to_string()),
        (INFLATION, input.inflation_rate_percent.to_string()),
    ];
    if let Some(target) = input.target_amount {
        pairs.push((TARGET, target.to_string()));
    }

    pairs
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Parse a query string produced by [`to_query_string`]. A leading `?` is
/// ignored, as are unknown keys. `principal`, `years` and `rate` are required;
/// everything else falls back to the [`ProjectionInput::new`] defaults.
pub fn from_query_string(query: &str) -> CompoundResult<ProjectionInput> {
    let query = query.trim();
    let query = query.strip_prefix('?').unwrap_or(query);

    let fields: HashMap<String, String> = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            Ok((decode_component(key)?, decode_component(value)?))
        })
        .collect::<CompoundResult<_>>()?;

    let mut input = ProjectionInput::new(
        required(&fields, PRINCIPAL)?,
        required(&fields, YEARS)?,
        required(&fields, RATE)?,
    );

    if let Some(contribution) = optional(&fields, CONTRIBUTION)? {
        input.contribution = contribution;
    }
    if let Some(frequency) = optional(&fields, CONTRIBUTION_FREQUENCY)? {
        input.contribution_frequency = frequency;
    }
    if let Some(frequency) = optional(&fields, COMPOUND)? {
        input.compound_frequency = frequency;
    }
    if let Some(inflation) = optional(&fields, INFLATION)? {
        input.inflation_rate_percent = inflation;
    }
    input.target_amount = optional(&fields, TARGET)?;

    Ok(input)
}

/// Undo form encoding: `+` becomes a space and `%XX` the byte it names.
fn decode_component(raw: &str) -> CompoundResult<String> {
    let bytes = raw.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => decoded.push(b' '),
            b'%' => {
                let byte = raw
                    .get(i + 1..i + 3)
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                    .ok_or_else(|| {
                        CompoundError::QueryError(format!("malformed escape in '{raw}'"))
                    })?;
                decoded.push(byte);
                i += 2;
            }
            b => decoded.push(b),
        }
        i += 1;
    }
    String::from_utf8(decoded)
        .map_err(|_| CompoundError::QueryError(format!("'{raw}' is not valid UTF-8")))
}

fn required<T: FromStr>(fields: &HashMap<String, String>, key: &str) -> CompoundResult<T> {
    optional(fields, key)?
        .ok_or_else(|| CompoundError::QueryError(format!("missing required key '{key}'")))
}

fn optional<T: FromStr>(
    fields: &HashMap<String, String>,
    key: &str,
) -> CompoundResult<Option<T>> {
    match fields.get(key) {
        None => Ok(None),
        Some(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| {
            CompoundError::QueryError(format!("'{key}' is not a valid number: '{raw}'"))
        }),
    }
}
