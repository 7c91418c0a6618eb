use devpulse_shared_models::MetricTable;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Flattens one response section into a (metric, value) table.
///
/// A field is kept when it is non-null and has length 1: any number or
/// boolean, a one-character string, or a container with exactly one element.
/// Multi-element lists and objects are dropped. A kept field that does not
/// cast to a number is skipped, which includes every list or object.
pub fn flatten(fields: &Map<String, Value>) -> MetricTable {
    let mut table = MetricTable::new();

    for (metric, value) in fields {
        if value.is_null() || value_len(value) != 1 {
            continue;
        }

        match cast_to_f64(value) {
            Some(number) => table.push(metric.as_str(), number),
            None => debug!(metric = %metric, %value, "skipping value that is not numeric"),
        }
    }

    table
}

/// Flattens the nested object `section` of a coin detail payload. A missing
/// or non-object section yields an empty table.
pub fn flatten_section(section: Option<&Value>, name: &str) -> MetricTable {
    match section {
        Some(Value::Object(fields)) => flatten(fields),
        Some(other) => {
            warn!(section = name, value = %other, "section is not an object");
            MetricTable::new()
        }
        None => {
            warn!(section = name, "section missing from response");
            MetricTable::new()
        }
    }
}

fn value_len(value: &Value) -> usize {
    match value {
        Value::Null => 0,
        Value::Bool(_) | Value::Number(_) => 1,
        Value::String(text) => text.chars().count(),
        Value::Array(items) => items.len(),
        Value::Object(fields) => fields.len(),
    }
}

fn cast_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.parse().ok(),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
