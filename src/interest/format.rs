//! Swiss (de-CH) number and currency formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// Thousands separator used by the de-CH convention (typographic apostrophe).
pub const GROUP_SEPARATOR: char = '\u{2019}';

/// Formats `amount` with Swiss grouping and exactly `decimals` fraction digits.
///
/// ```
/// use rust_decimal::Decimal;
/// use zinsrechner_offline::interest::format_number;
///
/// assert_eq!(format_number(Decimal::new(123456789, 2), 2), "1’234’567.89");
/// ```
pub fn format_number(amount: Decimal, decimals: u32) -> String {
    let rounded = amount.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    let digits = format!("{:.*}", decimals as usize, rounded.abs());
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + int_part.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Formats `amount` as Swiss francs, e.g. `CHF 10’508.33`.
pub fn format_currency(amount: Decimal) -> String {
    format!("CHF {}", format_number(amount, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number(dec("0"), 2), "0.00");
        assert_eq!(format_number(dec("999.5"), 2), "999.50");
        assert_eq!(format_number(dec("1000"), 2), "1’000.00");
        assert_eq!(format_number(dec("10000.5"), 2), "10’000.50");
        assert_eq!(format_number(dec("1234567.891"), 2), "1’234’567.89");
    }

    #[test]
    fn respects_decimal_count() {
        assert_eq!(format_number(dec("1234.5"), 0), "1’235");
        assert_eq!(format_number(dec("0.125"), 1), "0.1");
        assert_eq!(format_number(dec("2.345"), 3), "2.345");
    }

    #[test]
    fn negative_amounts() {
        assert_eq!(format_number(dec("-1234.5"), 2), "-1’234.50");
        assert_eq!(format_number(dec("-0.001"), 2), "0.00");
    }

    #[test]
    fn currency_prefix() {
        assert_eq!(format_currency(dec("508.333")), "CHF 508.33");
        assert_eq!(format_currency(dec("10508.33")), "CHF 10’508.33");
        assert_eq!(format_currency(dec("0.005")), "CHF 0.01");
    }
}
