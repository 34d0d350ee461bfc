//! Money helpers for display.
//!
//! Amounts are stored exactly as `f64` products of quantity and unit price. Rounding to
//! two decimals happens only when a value is shown.

/// Round to two decimal places.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format with exactly two decimal places, e.g. `25.00`.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", round_to_cents(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(2.0 / 3.0), 0.67);
        assert_eq!(round_to_cents(25.0), 25.0);
        assert_eq!(round_to_cents(0.1 + 0.2), 0.3);
    }

    #[test]
    fn test_format_amount_pads_to_two_decimals() {
        assert_eq!(format_amount(25.0), "25.00");
        assert_eq!(format_amount(1.5), "1.50");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(3.14159), "3.14");
    }
}
