use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Number;

// Anything from `<` to the next `>`. Not an HTML parser: nested or broken
// markup is removed by pattern only.
static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Remove markup tags and trim surrounding whitespace.
///
/// Text from adjacent blocks is joined without a separator, so
/// `"<p>A</p><p>B</p>"` becomes `"AB"`.
pub fn strip_markup(text: &str) -> String {
    MARKUP_TAG.replace_all(text, "").trim().to_string()
}

/// Render a JSON number as a plain decimal string.
///
/// Integral values never carry a fractional part (`29800.0` renders as
/// `"29800"`); everything else uses the shortest representation that
/// round-trips.
pub fn decimal_string(number: &Number) -> String {
    if let Some(n) = number.as_u64() {
        return n.to_string();
    }
    if let Some(n) = number.as_i64() {
        return n.to_string();
    }
    match number.as_f64() {
        // Negative zero reads as plain zero
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        Some(f) => f.to_string(),
        None => number.to_string(),
    }
}
