//! Swiss default-interest (Verzugszins) engine.
//!
//! Pure functions for computing interest on an overdue principal between two
//! dates, plus the Swiss number formatting and parsing used to present and
//! read amounts.
//!
//! Two methods are supported:
//!
//! - [`simple_interest`] uses the banking actual/360 convention: real elapsed
//!   days over a fixed 360-day year.
//! - [`compound_interest`] compounds annually over `days / 365` years.
//!
//! The two divisors differ on purpose. Simple interest follows the banking
//! convention, compounding follows the calendar year. Do not unify them.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal::Decimal;
//! use zinsrechner_offline::interest::{format_currency, simple_interest};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
//! let calc = simple_interest(Decimal::from(10_000), start, end, Decimal::from(5)).unwrap();
//!
//! assert_eq!(calc.days, 30);
//! assert_eq!(format_currency(calc.interest), "CHF 41.67");
//! ```

mod calculation;
mod format;
mod parse;

pub use calculation::{
    Calculation, CalculationError, CalculationMethod, STATUTORY_RATE, compound_interest,
    day_count, simple_interest,
};
pub use format::{GROUP_SEPARATOR, format_currency, format_number};
pub use parse::{ParseNumberError, parse_swiss_number};
