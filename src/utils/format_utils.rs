//! Number formatting utilities
//!
//! Helpers for the rounded and human-readable numbers written to reports.

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Format a number with no decimals and comma thousands separators
///
/// `12345.6` becomes `"12,346"`.
pub fn format_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if value < 0.0 && digits != "0" {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1234.5678, 2), 1234.57);
        assert_eq!(round_to(4.0, 2), 4.0);
        assert_eq!(round_to(-0.004, 2), 0.0);
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(999.4), "999");
        assert_eq!(format_thousands(1000.0), "1,000");
        assert_eq!(format_thousands(12345.6), "12,346");
        assert_eq!(format_thousands(1234567.0), "1,234,567");
        assert_eq!(format_thousands(-50000.0), "-50,000");
        assert_eq!(format_thousands(-0.2), "0");
    }
}
