//! Display formatting for prices and percentages

/// Format a USD amount with thousands separators, e.g. `$43,250.12`
pub fn usd(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("${}", amount);
    }

    let formatted = format!("{:.2}", amount.abs());
    let (whole, cents) = match formatted.split_once('.') {
        Some(parts) => parts,
        None => (formatted.as_str(), "00"),
    };

    let mut grouped = String::new();
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

/// Format a percentage change with an explicit sign, e.g. `+10.00%`
pub fn percent(value: f64) -> String {
    format!("{:+.2}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd_groups_thousands() {
        assert_eq!(usd(43250.123), "$43,250.12");
        assert_eq!(usd(1234567.891), "$1,234,567.89");
    }

    #[test]
    fn test_usd_small_amounts() {
        assert_eq!(usd(0.5), "$0.50");
        assert_eq!(usd(999.999), "$1,000.00");
    }

    #[test]
    fn test_usd_negative() {
        assert_eq!(usd(-1500.0), "-$1,500.00");
    }

    #[test]
    fn test_percent_signs() {
        assert_eq!(percent(10.0), "+10.00%");
        assert_eq!(percent(-10.0), "-10.00%");
        assert_eq!(percent(0.0), "+0.00%");
    }
}
