//! Fixed-rate loan amortization.
use crate::core::error::{
    CalcError, CalcResult, ensure_non_negative, ensure_payments_in_range, ensure_years_in_range,
};
use serde::Serialize;
use tracing::debug;

/// Payment figures for a fully amortized fixed-rate loan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AmortizationResult {
    pub payments: u32,
    pub monthly_payment: f64,
    pub total_payoff: f64,
    pub total_interest: f64,
}

/// Number of monthly payments in a term of whole years.
pub fn number_of_payments(term_years: u32) -> CalcResult<u32> {
    term_years
        .checked_mul(12)
        .ok_or(CalcError::InvalidArgument {
            name: "term_years",
            value: f64::from(term_years),
            reason: "payment count overflows",
        })
}

/// Calculates the fixed monthly payment that retires `principal` over `term_years`.
///
/// The annual rate is converted to a monthly periodic rate `r = rate / 100 / 12`
/// and the payment follows `P * r * (1+r)^n / ((1+r)^n - 1)`. A zero principal
/// pays nothing and a zero rate splits the principal evenly across the `n`
/// payments.
pub fn compute_amortized_payment(
    principal: f64,
    annual_rate_percent: f64,
    term_years: u32,
) -> CalcResult<f64> {
    ensure_years_in_range("term_years", term_years)?;
    compute_payment_over_months(principal, annual_rate_percent, number_of_payments(term_years)?)
}

/// Monthly payment for a loan of `payments` months, e.g. an 18 month balance transfer.
pub fn compute_payment_over_months(
    principal: f64,
    annual_rate_percent: f64,
    payments: u32,
) -> CalcResult<f64> {
    ensure_non_negative("principal", principal)?;
    ensure_non_negative("annual_rate_percent", annual_rate_percent)?;
    ensure_payments_in_range("payments", payments)?;

    if principal == 0.0 {
        debug!("Zero principal, no payment required");
        return Ok(0.0);
    }

    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    if monthly_rate == 0.0 {
        debug!("Zero-interest loan of {principal} over {payments} payments");
        return Ok(principal / f64::from(payments));
    }

    let exponent = i32::try_from(payments).map_err(|_| CalcError::InvalidArgument {
        name: "payments",
        value: f64::from(payments),
        reason: "payment count overflows",
    })?;
    // Discount form of the annuity: the factor underflows to 0 instead of
    // (1+r)^n overflowing to infinity for extreme rates.
    let discount = (1.0 + monthly_rate).powi(-exponent);
    let payment = principal * monthly_rate / (1.0 - discount);
    if !payment.is_finite() {
        return Err(CalcError::InvalidArgument {
            name: "principal",
            value: principal,
            reason: "payment is not representable",
        });
    }
    debug!("Amortized {principal} at {annual_rate_percent}% over {payments} payments: {payment}");
    Ok(payment)
}

/// Total amount paid over the life of the loan.
pub fn compute_total_payoff(
    principal: f64,
    annual_rate_percent: f64,
    term_years: u32,
) -> CalcResult<f64> {
    Ok(compute_amortization(principal, annual_rate_percent, term_years)?.total_payoff)
}

pub fn compute_amortization(
    principal: f64,
    annual_rate_percent: f64,
    term_years: u32,
) -> CalcResult<AmortizationResult> {
    ensure_years_in_range("term_years", term_years)?;
    compute_amortization_over_months(principal, annual_rate_percent, number_of_payments(term_years)?)
}

pub fn compute_amortization_over_months(
    principal: f64,
    annual_rate_percent: f64,
    payments: u32,
) -> CalcResult<AmortizationResult> {
    let monthly_payment = compute_payment_over_months(principal, annual_rate_percent, payments)?;
    let total_payoff = monthly_payment * f64::from(payments);
    // Zero-rate payoff can land a hair off the principal.
    let total_interest = (total_payoff - principal).max(0.0);
    Ok(AmortizationResult {
        payments,
        monthly_payment,
        total_payoff,
        total_interest,
    })
}
