//! Error types for the calculation engine.

use thiserror::Error;

/// Result type returned by every calculator function.
pub type CalcResult<T> = Result<T, CalcError>;

/// Tolerance, in percentage points, when checking that an allocation sums to 100.
pub const ALLOCATION_TOLERANCE: f64 = 0.01;

/// Longest loan term or projection horizon accepted, in years.
pub const MAX_YEARS: u32 = 1_000;

/// Most monthly payments a loan may be split into.
pub const MAX_PAYMENTS: u32 = MAX_YEARS * 12;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// An input was out of its domain (negative amount, zero term, ...).
    #[error("Invalid argument `{name}` = {value}: {reason}")]
    InvalidArgument {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// An allocation profile is not a valid 100% split.
    #[error("Invalid allocation: {reason}")]
    InvalidAllocation { reason: String },

    #[error("Unknown risk profile: {0}")]
    UnknownRiskProfile(String),

    /// A refinance offer names a debt that is not configured.
    #[error("No debt labelled '{0}'")]
    UnknownDebt(String),
}

/// Rejects negative and non-finite values.
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::InvalidArgument {
            name,
            value,
            reason: "must be a finite number",
        });
    }
    if value < 0.0 {
        return Err(CalcError::InvalidArgument {
            name,
            value,
            reason: "must not be negative",
        });
    }
    Ok(())
}

pub(crate) fn ensure_years_in_range(name: &'static str, years: u32) -> CalcResult<()> {
    ensure_count_in_range(name, years, MAX_YEARS, "must be at most 1000 years")
}

pub(crate) fn ensure_payments_in_range(name: &'static str, payments: u32) -> CalcResult<()> {
    ensure_count_in_range(name, payments, MAX_PAYMENTS, "must be at most 12000 payments")
}

fn ensure_count_in_range(
    name: &'static str,
    count: u32,
    max: u32,
    too_large: &'static str,
) -> CalcResult<()> {
    if count == 0 {
        return Err(CalcError::InvalidArgument {
            name,
            value: 0.0,
            reason: "must be greater than zero",
        });
    }
    if count > max {
        return Err(CalcError::InvalidArgument {
            name,
            value: f64::from(count),
            reason: too_large,
        });
    }
    Ok(())
}

pub(crate) fn ensure_percent(name: &'static str, value: f64) -> CalcResult<()> {
    ensure_non_negative(name, value)?;
    if value > 100.0 {
        return Err(CalcError::InvalidArgument {
            name,
            value,
            reason: "must be between 0 and 100",
        });
    }
    Ok(())
}

/// Rounds to cents.
pub(crate) fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
