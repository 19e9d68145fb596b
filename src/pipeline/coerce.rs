use serde_json::Value;

/// Read a numeric field. JSON numbers pass through, strings are parsed;
/// everything else, and any non-finite result, is missing.
pub fn number(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

/// Read a label field. Numbers and booleans keep their text form.
pub fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Read the confirmations map. Anything but an object yields `None`. Inside
/// an object every key is kept; a value that is not a boolean reads as `false`.
pub fn flags(value: Option<&Value>) -> Option<Vec<(&str, bool)>> {
    let map = value?.as_object()?;
    Some(
        map.iter()
            .map(|(name, set)| (name.as_str(), set.as_bool().unwrap_or(false)))
            .collect(),
    )
}
