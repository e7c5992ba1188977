//! Number formatting for cards and tables

/// Groups thousands with `,` and keeps `decimals` fraction digits.
///
/// `format_grouped(1234567.891, 2)` gives `"1,234,567.89"`.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (integer_part, fraction) = match formatted.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (formatted.as_str(), None),
    };

    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Amount in yuan without fraction: `¥7,050,000`
pub fn format_yuan(amount: f64) -> String {
    if amount < 0.0 {
        return format!("-¥{}", format_grouped(-amount, 0));
    }
    format!("¥{}", format_grouped(amount, 0))
}

/// Amount in units of 10 000 yuan: `¥705万`
pub fn format_wan(amount: f64) -> String {
    let wan = amount / 10_000.0;
    if wan.fract().abs() < f64::EPSILON {
        format!("¥{}万", format_grouped(wan, 0))
    } else {
        format!("¥{}万", format_grouped(wan, 1))
    }
}

/// `58.75` -> `58.75%`, trailing zeros trimmed
pub fn format_percent(value: f64) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    format!("{}%", s)
}

/// Share of `part` in `total` as percent; 0 when total is 0
pub fn percent_of(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    part / total * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_grouped(999.0, 0), "999");
        assert_eq!(format_grouped(1000.0, 0), "1,000");
        assert_eq!(format_grouped(-1234.5, 1), "-1,234.5");
        assert_eq!(format_grouped(0.0, 2), "0.00");
    }

    #[test]
    fn test_format_yuan() {
        assert_eq!(format_yuan(12_000_000.0), "¥12,000,000");
        assert_eq!(format_yuan(7_050_000.0), "¥7,050,000");
        assert_eq!(format_yuan(-500.0), "-¥500");
    }

    #[test]
    fn test_format_wan() {
        assert_eq!(format_wan(2_500_000.0), "¥250万");
        assert_eq!(format_wan(1_250_000.0), "¥125万");
        assert_eq!(format_wan(85_000.0), "¥8.5万");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(58.75), "58.75%");
        assert_eq!(format_percent(85.0), "85%");
        assert_eq!(format_percent(85.9), "85.9%");
    }

    #[test]
    fn test_percent_of() {
        assert!((percent_of(7_050_000.0, 12_000_000.0) - 58.75).abs() < 1e-9);
        assert_eq!(percent_of(3.0, 0.0), 0.0);
    }
}
