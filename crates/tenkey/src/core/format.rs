//! Display formatting for computed values.

/// Fractional digits tolerated before rounding kicks in.
const MAX_FRACTION_DIGITS: usize = 8;

/// Decimal places applied when a value needs rounding.
const ROUND_PLACES: i32 = 10;

/// Normalizes a computed value into its display string.
///
/// Values whose magnitude is at least `1e10`, strictly between `0` and
/// `1e-6`, or whose shortest rendering carries a fractional tail longer
/// than eight digits are rounded to ten decimal places first, which keeps
/// the output in plain decimal form. Integral values render without a
/// decimal point; negative zero renders as `0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    let magnitude = value.abs();
    let needs_rounding = magnitude >= 1e10
        || (magnitude > 0.0 && magnitude < 1e-6)
        || fraction_digits(value) > MAX_FRACTION_DIGITS;
    let value = if needs_rounding {
        round_to_places(value, ROUND_PLACES)
    } else {
        value
    };

    if value == 0.0 {
        return "0".to_string();
    }
    if value % 1.0 == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

fn round_to_places(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    let scaled = value * scale;
    if scaled.is_finite() {
        scaled.round() / scale
    } else {
        // Scaling overflowed; values this large are already integral.
        value
    }
}

/// Length of the text after the last `.` in the value's shortest rendering.
///
/// A rendering without a decimal point reports the length of the whole
/// text, matching the behavior the rounding guard inherited.
fn fraction_digits(value: f64) -> usize {
    let text = value.to_string();
    text.rsplit('.').next().map_or(0, str::len)
}
