//! Display formatting for currency amounts.

/// Format an amount with the home locale's separators: thousands `.`,
/// decimal `,`, always 2 decimals. `1234.5` becomes `"1.234,56"`-style
/// output; the currency symbol is the caller's concern.
pub fn format_amount(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let negative = rounded < 0.0;
    let cents = (rounded.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative && cents > 0 { "-" } else { "" };
    format!("{sign}{grouped},{fraction:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_and_uses_comma_decimals() {
        assert_eq!(format_amount(1234.56), "1.234,56");
        assert_eq!(format_amount(1_000_000.0), "1.000.000,00");
        assert_eq!(format_amount(999.0), "999,00");
    }

    #[test]
    fn small_amounts() {
        assert_eq!(format_amount(0.0), "0,00");
        assert_eq!(format_amount(7.5), "7,50");
        assert_eq!(format_amount(0.05), "0,05");
    }

    #[test]
    fn negatives_keep_the_sign_in_front() {
        assert_eq!(format_amount(-22.5), "-22,50");
        assert_eq!(format_amount(-1234.5), "-1.234,50");
    }

    #[test]
    fn rounds_to_cents() {
        assert_eq!(format_amount(30.909), "30,91");
        assert_eq!(format_amount(-0.001), "0,00");
    }
}
