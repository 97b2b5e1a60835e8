// ABOUTME: Number formatting helpers for the plain-text reports.
// ABOUTME: Thousands separators for counts and shortest-form floats that keep one decimal.

/// Format an integer with comma thousands separators.
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a float in its shortest round-trip form, keeping `.0` on integral values.
pub fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(2_000_000), "2,000,000");
        assert_eq!(group_thousands(12_345_678), "12,345,678");
    }

    #[test]
    fn floats_keep_one_decimal_when_integral() {
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(50.0), "50.0");
        assert_eq!(format_float(33.333), "33.333");
        assert_eq!(format_float(1.907), "1.907");
        assert_eq!(format_float(0.05), "0.05");
    }
}
