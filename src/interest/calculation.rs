//! Simple (actual/360) and compound (annual) interest between two dates.

use chrono::NaiveDate;
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use serde::Serialize;
use thiserror::Error;

/// Swiss statutory default-interest rate in percent (Art. 104 OR).
pub const STATUTORY_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Days per year for the actual/360 simple-interest convention.
const SIMPLE_DAY_BASIS: i64 = 360;

/// Days per year used to turn a day count into compounding periods.
const COMPOUND_DAY_BASIS: i64 = 365;

/// Interest computation method, serialized as its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CalculationMethod {
    /// Actual elapsed days over a fixed 360-day year.
    #[serde(rename = "360-day year")]
    Actual360,
    /// Annual compounding over `days / 365` years.
    #[serde(rename = "compound (annual)")]
    CompoundAnnual,
}

impl CalculationMethod {
    pub fn label(&self) -> &'static str {
        match self {
            CalculationMethod::Actual360 => "360-day year",
            CalculationMethod::CompoundAnnual => "compound (annual)",
        }
    }
}

impl std::fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a successful interest calculation.
///
/// `interest` and `total` are rounded to Rappen (2 decimal places, half away
/// from zero). `years` is only set for compound calculations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calculation {
    pub principal: Decimal,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days: i64,
    /// Annual rate in percent.
    pub rate: Decimal,
    pub interest: Decimal,
    pub total: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years: Option<Decimal>,
    pub method: CalculationMethod,
}

/// Input validation and arithmetic failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    #[error("principal must be greater than zero (got {0})")]
    NonPositivePrincipal(Decimal),

    #[error("end date {end} must be after start date {start}")]
    EndNotAfterStart { start: NaiveDate, end: NaiveDate },

    #[error("interest calculation overflowed for principal {0}")]
    Overflow(Decimal),

    /// Compounding needs a positive growth factor, i.e. a rate above -100 %.
    #[error("annual rate must be greater than -100 % for compounding (got {0})")]
    InvalidRate(Decimal),
}

/// Whole calendar days from `start` to `end` (negative if `end` is earlier).
pub fn day_count(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Computes simple interest with the actual/360 convention.
///
/// `interest = round(principal * rate / 100 / 360 * days, 2)` and
/// `total = round(principal + interest, 2)`.
///
/// # Errors
///
/// - [`CalculationError::NonPositivePrincipal`] if `principal <= 0`
/// - [`CalculationError::EndNotAfterStart`] if `end <= start`
pub fn simple_interest(
    principal: Decimal,
    start: NaiveDate,
    end: NaiveDate,
    annual_rate: Decimal,
) -> Result<Calculation, CalculationError> {
    let days = validate(principal, start, end)?;

    // Multiply before dividing so the 1/360 factor is not truncated first.
    let raw = principal
        .checked_mul(annual_rate)
        .and_then(|v| v.checked_mul(Decimal::from(days)))
        .and_then(|v| v.checked_div(Decimal::from(100 * SIMPLE_DAY_BASIS)))
        .ok_or(CalculationError::Overflow(principal))?;

    let interest = round_currency(raw);
    let total = round_currency(
        principal
            .checked_add(interest)
            .ok_or(CalculationError::Overflow(principal))?,
    );

    Ok(Calculation {
        principal,
        start,
        end,
        days,
        rate: annual_rate,
        interest,
        total,
        years: None,
        method: CalculationMethod::Actual360,
    })
}

/// Computes annually compounded interest over `days / 365` years.
///
/// `total = principal * (1 + rate / 100) ^ years`, `interest = total - principal`.
///
/// # Errors
///
/// Same validation as [`simple_interest`], plus
/// [`CalculationError::InvalidRate`] for rates at or below -100 % and
/// [`CalculationError::Overflow`] when the growth factor cannot be represented.
pub fn compound_interest(
    principal: Decimal,
    start: NaiveDate,
    end: NaiveDate,
    annual_rate: Decimal,
) -> Result<Calculation, CalculationError> {
    let days = validate(principal, start, end)?;

    let years = Decimal::from(days) / Decimal::from(COMPOUND_DAY_BASIS);
    let growth = Decimal::ONE + annual_rate / Decimal::ONE_HUNDRED;
    if growth <= Decimal::ZERO {
        return Err(CalculationError::InvalidRate(annual_rate));
    }
    let raw_total = growth
        .checked_powd(years)
        .and_then(|factor| principal.checked_mul(factor))
        .ok_or(CalculationError::Overflow(principal))?;

    Ok(Calculation {
        principal,
        start,
        end,
        days,
        rate: annual_rate,
        interest: round_currency(raw_total - principal),
        total: round_currency(raw_total),
        years: Some(round_currency(years)),
        method: CalculationMethod::CompoundAnnual,
    })
}

fn validate(principal: Decimal, start: NaiveDate, end: NaiveDate) -> Result<i64, CalculationError> {
    if principal <= Decimal::ZERO {
        return Err(CalculationError::NonPositivePrincipal(principal));
    }
    if end <= start {
        return Err(CalculationError::EndNotAfterStart { start, end });
    }
    Ok(day_count(start, end))
}

/// Rounds half away from zero and always keeps two fraction digits.
fn round_currency(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}
