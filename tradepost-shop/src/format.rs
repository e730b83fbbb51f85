//! Input formatters applied while checkout fields are typed.
//!
//! Each formatter is pure: it takes the raw input (which may already be in
//! formatted form) and returns the canonical display form. Re-applying a
//! formatter to its own output is a no-op.

/// Strip everything except ASCII digits.
#[must_use]
pub fn digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Group a card number into 4-digit chunks, capped at 16 digits.
#[must_use]
pub fn format_card_number(raw: &str) -> String {
    let ds: String = digits(raw).chars().take(16).collect();
    let mut out = String::with_capacity(19);
    for (i, c) in ds.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Insert the `/` separator after the month, capped at four digits (MMYY).
#[must_use]
pub fn format_expiry(raw: &str) -> String {
    let ds: String = digits(raw).chars().take(4).collect();
    if ds.len() > 2 {
        format!("{}/{}", &ds[..2], &ds[2..])
    } else {
        ds
    }
}

/// CVV is digits only, capped at three.
#[must_use]
pub fn format_cvv(raw: &str) -> String {
    digits(raw).chars().take(3).collect()
}

/// Progressive `XXX-XXX-XXXX` phone grouping as digits accumulate.
#[must_use]
pub fn format_phone(raw: &str) -> String {
    let ds: String = digits(raw).chars().take(10).collect();
    match ds.len() {
        0..=3 => ds,
        4..=6 => format!("{}-{}", &ds[..3], &ds[3..]),
        _ => format!("{}-{}-{}", &ds[..3], &ds[3..6], &ds[6..]),
    }
}

/// Last four digits of a card number in any formatting state.
#[must_use]
pub fn card_last4(card_number: &str) -> String {
    let ds = digits(card_number);
    ds[ds.len().saturating_sub(4)..].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_number_groups_and_caps() {
        assert_eq!(format_card_number("4111"), "4111");
        assert_eq!(format_card_number("41111"), "4111 1");
        assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
        // Excess digits are dropped at the cap.
        assert_eq!(
            format_card_number("41111111111111119999"),
            "4111 1111 1111 1111"
        );
        assert_eq!(format_card_number("4a1b1c1"), "4111");
    }

    #[test]
    fn card_number_formatting_is_idempotent() {
        let once = format_card_number("4111111111111111");
        assert_eq!(format_card_number(&once), once);
    }

    #[test]
    fn expiry_inserts_separator_after_month() {
        assert_eq!(format_expiry("1"), "1");
        assert_eq!(format_expiry("12"), "12");
        assert_eq!(format_expiry("123"), "12/3");
        assert_eq!(format_expiry("1226"), "12/26");
        assert_eq!(format_expiry("12/26"), "12/26");
        assert_eq!(format_expiry("12269"), "12/26");
    }

    #[test]
    fn cvv_caps_at_three_digits() {
        assert_eq!(format_cvv("12"), "12");
        assert_eq!(format_cvv("1234"), "123");
        assert_eq!(format_cvv("x9y8z7"), "987");
    }

    #[test]
    fn phone_groups_progressively() {
        assert_eq!(format_phone("555"), "555");
        assert_eq!(format_phone("5551"), "555-1");
        assert_eq!(format_phone("5551234"), "555-123-4");
        assert_eq!(format_phone("5551234567"), "555-123-4567");
        assert_eq!(format_phone("(555) 123-4567"), "555-123-4567");
        assert_eq!(format_phone("555-123-4567"), "555-123-4567");
    }

    #[test]
    fn last4_ignores_grouping() {
        assert_eq!(card_last4("4111 1111 1111 1111"), "1111");
        assert_eq!(card_last4("4242424242424242"), "4242");
        assert_eq!(card_last4("42"), "42");
        assert_eq!(card_last4(""), "");
    }
}
