//! Parsing of amounts typed in the Swiss convention.

use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

/// Amount text could not be read as a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a number: {input:?}")]
pub struct ParseNumberError {
    pub input: String,
}

/// Characters users type as thousands separators.
fn is_group_separator(c: char) -> bool {
    matches!(
        c,
        '\''
            | '\u{2019}'
            | '\u{2018}'
            | '\u{02BC}'
            | '`'
            | '\u{00B4}'
            | ' '
            | '\u{00A0}'
            | '\u{202F}'
    )
}

/// Parses `1'234.56`, `1’234,56`, `CHF 10 000` and similar into a [`Decimal`].
///
/// A comma is read as the decimal separator unless a dot follows it, in
/// which case commas are treated as grouping (`1,234.56`). With the comma
/// last, dots are grouping instead (`1.234,56`).
///
/// ```
/// use rust_decimal::Decimal;
/// use zinsrechner_offline::interest::parse_swiss_number;
///
/// assert_eq!(parse_swiss_number("10'000.50"), Ok(Decimal::new(100005, 1)));
/// assert_eq!(parse_swiss_number("1'234,56"), Ok(Decimal::new(123456, 2)));
/// assert!(parse_swiss_number("abc").is_err());
/// ```
pub fn parse_swiss_number(text: &str) -> Result<Decimal, ParseNumberError> {
    let err = || ParseNumberError {
        input: text.to_string(),
    };

    let trimmed = text.trim();
    let unprefixed = ["CHF", "Fr.", "SFr."]
        .iter()
        .find_map(|prefix| trimmed.strip_prefix(prefix))
        .unwrap_or(trimmed)
        .trim_start();

    let mut cleaned: String = unprefixed.chars().filter(|c| !is_group_separator(*c)).collect();
    match (cleaned.rfind('.'), cleaned.rfind(',')) {
        // 1.234,56: dots group, the trailing comma is the decimal separator
        (Some(dot), Some(comma)) if comma > dot => {
            cleaned.retain(|c| c != '.');
            cleaned = cleaned.replace(',', ".");
        }
        (Some(_), _) => cleaned.retain(|c| c != ','),
        (None, _) => cleaned = cleaned.replace(',', "."),
    }

    let unsigned = cleaned.strip_prefix(['-', '+']).unwrap_or(&cleaned);
    let well_formed = unsigned.chars().any(|c| c.is_ascii_digit())
        && unsigned.chars().all(|c| c.is_ascii_digit() || c == '.')
        && unsigned.matches('.').count() <= 1;
    if !well_formed {
        return Err(err());
    }

    Decimal::from_str(&cleaned).map_err(|_| err())
}
