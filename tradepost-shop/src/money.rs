//! Money helpers centralizing cents conversions and display formatting.

/// Format an amount of cents as a dollar string, e.g. `1599` -> `"$15.99"`.
#[must_use]
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}${}.{:02}", abs / 100, abs % 100)
}

/// Convert cents to a floating dollar amount for wire payloads.
///
/// Internal arithmetic stays in integer cents; this conversion happens once,
/// at the serialization boundary.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn cents_to_dollars(cents: i64) -> f64 {
    cents as f64 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_cents_with_two_places() {
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(5), "$0.05");
        assert_eq!(format_cents(1599), "$15.99");
        assert_eq!(format_cents(123_400), "$1234.00");
        assert_eq!(format_cents(-250), "-$2.50");
    }

    #[test]
    fn dollars_conversion_matches_display() {
        assert!((cents_to_dollars(11_599) - 115.99).abs() < 1e-9);
        assert!((cents_to_dollars(0) - 0.0).abs() < f64::EPSILON);
    }
}
