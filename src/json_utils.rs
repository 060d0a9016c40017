use serde_json::Value;

/// Loose numeric coercion: integers pass through, floats truncate toward
/// zero, anything else (including numeric strings) yields `fallback`.
pub fn to_int(value: &Value, fallback: i64) -> i64 {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i
            } else if let Some(f) = n.as_f64() {
                f as i64
            } else {
                fallback
            }
        }
        _ => fallback,
    }
}

/// String elements of a JSON array, non-string elements skipped. Any
/// non-array value yields an empty vec.
pub fn to_string_vec(value: &Value) -> Vec<String> {
    match value.as_array() {
        Some(items) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        None => Vec::new(),
    }
}
