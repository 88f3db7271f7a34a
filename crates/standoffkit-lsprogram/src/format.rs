//! Numeric field formatting for LS program output.

/// Format a coordinate or angle for an LS point record.
///
/// Values are rounded to 3 decimals (IEEE round-half-to-even, the behavior
/// of Rust's `{:.3}`); when the rounded magnitude lies strictly between 0
/// and 1 the leading `0` is dropped, matching the vendor's field layout:
/// `0.5` prints as `.500` and `-0.25` as `-.250`. Exact zero prints as
/// `0.000`.
pub fn format_coord(value: f64) -> String {
    let formatted = format!("{:.3}", value);
    if formatted != "0.000" {
        if let Some(fraction) = formatted.strip_prefix("0.") {
            return format!(".{}", fraction);
        }
    }
    if formatted != "-0.000" {
        if let Some(fraction) = formatted.strip_prefix("-0.") {
            return format!("-.{}", fraction);
        }
    }
    formatted
}
