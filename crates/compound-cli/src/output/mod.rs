pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::{Map, Value};

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Format a scalar for human-facing output: floats to two decimals,
/// integers and strings unchanged.
pub(crate) fn format_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) if n.is_f64() => n
            .as_f64()
            .map(|f| format!("{f:.2}"))
            .unwrap_or_else(|| n.to_string()),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// Flatten nested objects into `parent.child` keys. Arrays are left as
/// values for the caller to handle.
pub(crate) fn flatten_object(map: &Map<String, Value>) -> Vec<(String, Value)> {
    let mut out = Vec::new();
    flatten_into("", map, &mut out);
    out
}

fn flatten_into(prefix: &str, map: &Map<String, Value>, out: &mut Vec<(String, Value)>) {
    for (key, val) in map {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match val {
            Value::Object(inner) => flatten_into(&full_key, inner, out),
            other => out.push((full_key, other.clone())),
        }
    }
}

/// True for a non-empty array whose elements are all objects (breakdown rows).
pub(crate) fn is_row_array(value: &Value) -> bool {
    matches!(value, Value::Array(arr) if !arr.is_empty() && arr.iter().all(Value::is_object))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_scalar() {
        assert_eq!(format_scalar(&json!(16470.094976)), "16470.09");
        assert_eq!(format_scalar(&json!(14)), "14");
        assert_eq!(format_scalar(&json!("1000.00")), "1000.00");
        assert_eq!(format_scalar(&json!(null)), "");
    }

    #[test]
    fn test_flatten_nested_result() {
        let value = json!({"future_value": {"final_amount": 1.5}, "goal": {"reached": true}});
        let flat = flatten_object(value.as_object().unwrap());
        assert_eq!(
            flat,
            vec![
                ("future_value.final_amount".to_string(), json!(1.5)),
                ("goal.reached".to_string(), json!(true)),
            ]
        );
    }

    #[test]
    fn test_row_array_detection() {
        assert!(is_row_array(&json!([{"year": 0}])));
        assert!(!is_row_array(&json!([1, 2])));
        assert!(!is_row_array(&json!([])));
    }
}
