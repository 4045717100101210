use clap::Args;
use serde_json::{json, Value};

use compound_core::locale::{self, Currency};

/// Arguments for amount parsing
#[derive(Args)]
pub struct ParseAmountArgs {
    /// Localized amount, e.g. "$12,500.00" or "12.500,00 €"
    #[arg(long, allow_hyphen_values = true)]
    pub value: String,

    /// ISO currency code
    #[arg(long, default_value = "USD")]
    pub currency: Currency,
}

/// Arguments for amount formatting
#[derive(Args)]
pub struct FormatAmountArgs {
    /// Amount to format
    #[arg(long, allow_negative_numbers = true)]
    pub amount: f64,

    /// ISO currency code
    #[arg(long, default_value = "USD")]
    pub currency: Currency,
}

pub fn run_parse_amount(args: ParseAmountArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let amount = locale::parse_amount(&args.value, &args.currency)?;
    Ok(json!({
        "amount": amount,
        "currency": args.currency,
    }))
}

pub fn run_format_amount(args: FormatAmountArgs) -> Result<Value, Box<dyn std::error::Error>> {
    Ok(json!({
        "formatted": locale::format_amount(args.amount, &args.currency),
        "currency": args.currency,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_command() {
        let value = run_parse_amount(ParseAmountArgs {
            value: "12.500,75 €".into(),
            currency: Currency::EUR,
        })
        .unwrap();
        assert_eq!(value["amount"], 12_500.75);
        assert_eq!(value["currency"], "EUR");
    }

    #[test]
    fn test_format_amount_command() {
        let value = run_format_amount(FormatAmountArgs {
            amount: 1_234.5,
            currency: Currency::USD,
        })
        .unwrap();
        assert_eq!(value["formatted"], "$1,234.50");
    }
}
