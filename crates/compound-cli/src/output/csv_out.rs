use serde_json::{Map, Value};
use std::io::{self, Write};

use super::{flatten_object, format_scalar, is_row_array};

/// Write output as CSV to stdout.
///
/// A result holding breakdown rows is exported as those rows; an object of
/// equal-length numeric series becomes one column per series; anything else
/// is written as `field,value` pairs.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let body = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let _ = match body {
        Value::Object(map) => write_object_csv(&mut wtr, map),
        Value::Array(arr) => write_rows_csv(&mut wtr, arr),
        other => wtr.write_record([format_scalar(other)]),
    };

    let _ = wtr.flush();
}

fn write_object_csv<W: Write>(wtr: &mut csv::Writer<W>, map: &Map<String, Value>) -> csv::Result<()> {
    if let Some((_, Value::Array(rows))) = map.iter().find(|(_, v)| is_row_array(v)) {
        return write_rows_csv(wtr, rows);
    }

    let series: Vec<(&String, &Vec<Value>)> = map
        .iter()
        .filter_map(|(k, v)| v.as_array().map(|arr| (k, arr)))
        .collect();
    if let Some((_, first)) = series.first() {
        let len = first.len();
        if series.iter().all(|(_, arr)| arr.len() == len) {
            return write_series_csv(wtr, &series, len);
        }
    }

    wtr.write_record(["field", "value"])?;
    for (key, val) in flatten_object(map) {
        wtr.write_record([key, format_scalar(&val)])?;
    }
    Ok(())
}

fn write_rows_csv<W: Write>(wtr: &mut csv::Writer<W>, arr: &[Value]) -> csv::Result<()> {
    let Some(Value::Object(first)) = arr.first() else {
        for item in arr {
            wtr.write_record([format_scalar(item)])?;
        }
        return Ok(());
    };

    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    wtr.write_record(&headers)?;

    for item in arr {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(*h).map(format_scalar).unwrap_or_default())
                .collect();
            wtr.write_record(&row)?;
        }
    }
    Ok(())
}

fn write_series_csv<W: Write>(
    wtr: &mut csv::Writer<W>,
    series: &[(&String, &Vec<Value>)],
    len: usize,
) -> csv::Result<()> {
    wtr.write_record(series.iter().map(|(k, _)| k.as_str()))?;
    for i in 0..len {
        wtr.write_record(series.iter().map(|(_, arr)| format_scalar(&arr[i])))?;
    }
    Ok(())
}
