use serde_json::Value;

use super::format_scalar;

/// Fields that answer each command, most important first.
const PRIORITY_KEYS: [&str; 8] = [
    "final_amount",
    "years_to_goal",
    "real_value",
    "real_final_amount",
    "amount",
    "formatted",
    "query",
    "principal",
];

/// Print just the key answer value from the output.
///
/// Looks for a priority field in the result object, then in its
/// `future_value` section, then falls back to the first field.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Some(answer) = find_answer(result_obj) {
        println!("{}", answer);
        return;
    }

    if let Value::Object(map) = result_obj {
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_scalar(val));
            return;
        }
    }

    println!("{}", format_scalar(result_obj));
}

fn find_answer(result: &Value) -> Option<String> {
    let map = result.as_object()?;
    let sections = [Some(map), map.get("future_value").and_then(Value::as_object)];

    for key in PRIORITY_KEYS {
        for section in sections.iter().flatten() {
            match section.get(key) {
                Some(Value::Null) | None => continue,
                Some(val) => return Some(format_scalar(val)),
            }
        }
    }

    // An unreachable goal has a null year count
    match map.get("reached") {
        Some(Value::Bool(false)) => Some("unreachable".to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_projection_envelope_answer() {
        let value = json!({"result": {"future_value": {"final_amount": 16470.0949}}});
        let result = value.get("result").unwrap();
        assert_eq!(find_answer(result).as_deref(), Some("16470.09"));
    }

    #[test]
    fn test_unreachable_goal_answer() {
        let value = json!({"years_to_goal": null, "reached": false});
        assert_eq!(find_answer(&value).as_deref(), Some("unreachable"));
    }
}
