/// Formats a real literal so that it always lexes back as a float.
///
/// Rust's `Display` for `f64` never uses exponent notation but drops the
/// fractional part of whole numbers (`2.0` prints as `2`). A trailing `.0` is
/// appended in that case so the literal keeps its decimal point.
///
/// Non-finite values are returned unchanged; they cannot be written as
/// literals.
///
/// ## Example
/// ```
/// use arithma_front::util::num::format_real;
///
/// assert_eq!(format_real(2.0), "2.0");
/// assert_eq!(format_real(3.25), "3.25");
/// assert_eq!(format_real(f64::INFINITY), "inf");
/// ```
#[must_use]
pub fn format_real(value: f64) -> String {
    let text = value.to_string();

    if value.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}
