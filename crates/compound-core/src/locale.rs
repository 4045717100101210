//! Localized amount parsing and display formatting.
//!
//! Kept apart from the engine: form fields arrive as strings such as
//! `"$12,500.00"` or `"12.500,00 €"` and must become plain numbers before a
//! projection runs. Formatting is the reverse trip for display only.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CompoundError;
use crate::CompoundResult;

/// Currency code
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    GBP,
    #[default]
    USD,
    EUR,
    CHF,
    JPY,
    CAD,
    AUD,
    HKD,
    SGD,
    INR,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::GBP => "GBP",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::CHF => "CHF",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
            Currency::HKD => "HKD",
            Currency::SGD => "SGD",
            Currency::INR => "INR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::GBP => "£",
            Currency::USD | Currency::CAD | Currency::AUD => "$",
            Currency::EUR => "€",
            Currency::CHF => "Fr.",
            Currency::JPY => "¥",
            Currency::HKD => "HK$",
            Currency::SGD => "S$",
            Currency::INR => "₹",
        }
    }

    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// `(group, decimal)` separators.
    pub fn separators(&self) -> (char, char) {
        match self {
            Currency::EUR => ('.', ','),
            Currency::CHF => ('\'', '.'),
            _ => (',', '.'),
        }
    }

    fn symbol_after_amount(&self) -> bool {
        matches!(self, Currency::EUR)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = CompoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let currency = match s.trim().to_ascii_uppercase().as_str() {
            "GBP" => Currency::GBP,
            "USD" => Currency::USD,
            "EUR" => Currency::EUR,
            "CHF" => Currency::CHF,
            "JPY" => Currency::JPY,
            "CAD" => Currency::CAD,
            "AUD" => Currency::AUD,
            "HKD" => Currency::HKD,
            "SGD" => Currency::SGD,
            "INR" => Currency::INR,
            _ => {
                return Err(CompoundError::InvalidInput {
                    field: "currency".into(),
                    reason: format!("unsupported currency code '{s}'"),
                })
            }
        };
        Ok(currency)
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a localized amount such as `"$1,234.56"`, `"1.234,56 €"`,
/// `"CHF 1'234.50"` or `"(250.00)"` into a plain number.
///
/// The currency symbol and ISO code, whitespace and group separators are
/// dropped and the currency's decimal separator becomes `.`. A leading minus
/// or accounting parentheses mark a negative amount.
pub fn parse_amount(raw: &str, currency: &Currency) -> CompoundResult<f64> {
    let fail = |reason: &str| CompoundError::ParseError {
        input: raw.to_string(),
        reason: reason.to_string(),
    };

    let mut text = raw.trim();
    let mut negative = false;
    if let Some(inner) = text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
        negative = true;
        text = inner;
    }

    let without_code = text
        .replace(currency.code(), "")
        .replace(&currency.code().to_ascii_lowercase(), "");
    let stripped = without_code.replace(currency.symbol(), "");

    let (group, decimal) = currency.separators();
    let mut cleaned = String::with_capacity(stripped.len());
    let mut seen_sign = false;

    for ch in stripped.chars() {
        match ch {
            '0'..='9' => cleaned.push(ch),
            c if c == decimal => cleaned.push('.'),
            c if c == group || c.is_whitespace() => {}
            '-' | '+' if cleaned.is_empty() && !seen_sign => {
                seen_sign = true;
                if ch == '-' {
                    negative = !negative;
                }
            }
            other => return Err(fail(&format!("unexpected character '{other}'"))),
        }
    }

    if !cleaned.bytes().any(|b| b.is_ascii_digit()) {
        return Err(fail("no digits"));
    }

    let value: f64 = cleaned
        .parse()
        .map_err(|_| fail("more than one decimal separator"))?;
    Ok(if negative { -value } else { value })
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Render `value` with the currency's symbol, separators and decimal places.
/// Non-finite values are rendered as-is.
pub fn format_amount(value: f64, currency: &Currency) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let places = currency.decimal_places() as usize;
    let fixed = format!("{:.*}", places, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let (group, decimal) = currency.separators();

    let mut number = group_digits(int_part, group, matches!(currency, Currency::INR));
    if !frac_part.is_empty() {
        number.push(decimal);
        number.push_str(frac_part);
    }

    let sign = if value < 0.0 && fixed.bytes().any(|b| b != b'0' && b != b'.') {
        "-"
    } else {
        ""
    };

    if currency.symbol_after_amount() {
        format!("{sign}{number}\u{a0}{}", currency.symbol())
    } else if matches!(currency, Currency::CHF) {
        format!("{sign}{}\u{a0}{number}", currency.code())
    } else {
        format!("{sign}{}{number}", currency.symbol())
    }
}

/// Insert `group` every three digits from the right; Indian grouping keeps
/// the last three digits together and then groups by two.
fn group_digits(digits: &str, group: char, indian: bool) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 2);
    for (i, ch) in digits.chars().enumerate() {
        let remaining = len - i;
        let boundary = if indian {
            remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0)
        } else {
            remaining % 3 == 0
        };
        if i > 0 && boundary {
            out.push(group);
        }
        out.push(ch);
    }
    out
}
