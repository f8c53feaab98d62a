//! Simple and compound interest growth projections.
use crate::core::error::{
    CalcError, CalcResult, ensure_non_negative, ensure_years_in_range, round_to_cents,
};
use rust_decimal::{Decimal, prelude::*};
use rust_finprim::rate::cagr;
use serde::Serialize;
use tracing::debug;

/// Largest end/start ratio handed to the decimal growth-rate calculation.
const MAX_GROWTH_RATIO: f64 = 1e12;

/// Balance at the end of `period` years, rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionPoint {
    pub period: u32,
    pub amount: f64,
}

/// Side-by-side view of both growth models over the same horizon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionComparison {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub compound: Vec<ProjectionPoint>,
    pub simple: Vec<ProjectionPoint>,
    pub final_compound: f64,
    pub final_simple: f64,
    pub compound_interest_earned: f64,
    pub compound_advantage: f64,
    /// Annualized growth of each series, `None` when it cannot be derived.
    pub compound_effective_rate_percent: Option<f64>,
    pub simple_effective_rate_percent: Option<f64>,
}

fn validate(principal: f64, annual_rate_percent: f64, years: u32) -> CalcResult<()> {
    ensure_non_negative("principal", principal)?;
    ensure_non_negative("annual_rate_percent", annual_rate_percent)?;
    ensure_years_in_range("years", years)
}

fn project(years: u32, amount_at: impl Fn(u32) -> f64) -> Vec<ProjectionPoint> {
    (0..=years)
        .map(|period| ProjectionPoint {
            period,
            amount: round_to_cents(amount_at(period)),
        })
        .collect()
}

/// Yearly compounding: `principal * (1 + rate/100)^t` for `t` in `0..=years`.
pub fn project_compound_interest(
    principal: f64,
    annual_rate_percent: f64,
    years: u32,
) -> CalcResult<Vec<ProjectionPoint>> {
    validate(principal, annual_rate_percent, years)?;
    let growth = 1.0 + annual_rate_percent / 100.0;
    let final_amount = principal * growth.powf(f64::from(years));
    if !final_amount.is_finite() {
        return Err(CalcError::InvalidArgument {
            name: "annual_rate_percent",
            value: annual_rate_percent,
            reason: "balance grows past the representable range",
        });
    }
    Ok(project(years, |t| principal * growth.powf(f64::from(t))))
}

/// Interest on the principal only: `principal * (1 + rate/100 * t)`.
pub fn project_simple_interest(
    principal: f64,
    annual_rate_percent: f64,
    years: u32,
) -> CalcResult<Vec<ProjectionPoint>> {
    validate(principal, annual_rate_percent, years)?;
    let rate = annual_rate_percent / 100.0;
    Ok(project(years, |t| principal * (1.0 + rate * f64::from(t))))
}

/// Annualized growth between two balances, in percent.
///
/// Returns `None` for a zero starting balance or when the figures do not fit
/// a decimal.
pub fn effective_annual_growth_percent(begin: f64, end: f64, years: u32) -> Option<f64> {
    if begin <= 0.0 || end < 0.0 || years == 0 {
        return None;
    }
    let ratio = end / begin;
    if !ratio.is_finite() || ratio > MAX_GROWTH_RATIO {
        return None;
    }
    let begin_bal = Decimal::from_f64(begin)?;
    let end_bal = Decimal::from_f64(end)?;
    let n_years = Decimal::from(years);
    let rate = cagr(begin_bal, end_bal, n_years);
    (rate * Decimal::from(100)).to_f64()
}

pub fn compare_interest(
    principal: f64,
    annual_rate_percent: f64,
    years: u32,
) -> CalcResult<ProjectionComparison> {
    let compound = project_compound_interest(principal, annual_rate_percent, years)?;
    let simple = project_simple_interest(principal, annual_rate_percent, years)?;

    // Both series always hold years + 1 points.
    let final_compound = compound.last().map_or(principal, |p| p.amount);
    let final_simple = simple.last().map_or(principal, |p| p.amount);
    debug!(
        "Projected {principal} at {annual_rate_percent}% for {years} years: compound {final_compound}, simple {final_simple}",
    );

    Ok(ProjectionComparison {
        principal,
        annual_rate_percent,
        compound_interest_earned: round_to_cents(final_compound - principal),
        compound_advantage: round_to_cents(final_compound - final_simple),
        compound_effective_rate_percent: effective_annual_growth_percent(
            principal,
            final_compound,
            years,
        ),
        simple_effective_rate_percent: effective_annual_growth_percent(
            principal,
            final_simple,
            years,
        ),
        final_compound,
        final_simple,
        compound,
        simple,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_projection() {
        let points = project_compound_interest(10000.0, 5.0, 10).unwrap();
        assert_eq!(points.len(), 11);
        assert_eq!(points[0], ProjectionPoint { period: 0, amount: 10000.0 });
        assert_eq!(points[1].amount, 10500.0);
        assert_eq!(points[2].amount, 11025.0);
        assert_eq!(points[10].period, 10);
        assert_eq!(points[10].amount, 16288.95);
    }

    #[test]
    fn test_simple_projection() {
        let points = project_simple_interest(10000.0, 5.0, 10).unwrap();
        assert_eq!(points.len(), 11);
        assert_eq!(points[5].amount, 12500.0);
        assert_eq!(points[10].amount, 15000.0);
    }

    #[test]
    fn test_zero_rate_is_flat() {
        let points = project_compound_interest(2500.0, 0.0, 3).unwrap();
        assert!(points.iter().all(|p| p.amount == 2500.0));
    }

    #[test]
    fn test_projection_is_recallable() {
        let first = project_compound_interest(1234.56, 7.25, 30).unwrap();
        let second = project_compound_interest(1234.56, 7.25, 30).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_compare_interest() {
        let comparison = compare_interest(10000.0, 5.0, 10).unwrap();
        assert_eq!(comparison.final_compound, 16288.95);
        assert_eq!(comparison.final_simple, 15000.0);
        assert_eq!(comparison.compound_interest_earned, 6288.95);
        assert_eq!(comparison.compound_advantage, 1288.95);
    }

    #[test]
    fn test_effective_rates() {
        let comparison = compare_interest(10000.0, 5.0, 10).unwrap();
        let compound = comparison.compound_effective_rate_percent.unwrap();
        assert!((compound - 5.0).abs() < 1e-4, "compound rate was {compound}");

        // 50% simple growth over 10 years annualizes below the nominal rate.
        let simple = comparison.simple_effective_rate_percent.unwrap();
        assert!((simple - 4.1380).abs() < 1e-3, "simple rate was {simple}");

        let flat = compare_interest(0.0, 5.0, 10).unwrap();
        assert_eq!(flat.compound_effective_rate_percent, None);
        assert_eq!(flat.final_compound, 0.0);
    }

    #[test]
    fn test_long_horizons() {
        let points = project_compound_interest(100.0, 1.0, 1000).unwrap();
        assert_eq!(points.len(), 1001);
        assert!(points.iter().all(|p| p.amount.is_finite()));

        assert!(matches!(
            project_compound_interest(100.0, 5.0, 400_000_000),
            Err(CalcError::InvalidArgument { name: "years", .. })
        ));
        assert!(project_simple_interest(100.0, 5.0, u32::MAX).is_err());
        assert!(matches!(
            project_compound_interest(1e300, 1000.0, 1000),
            Err(CalcError::InvalidArgument {
                name: "annual_rate_percent",
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_projection_inputs() {
        assert!(matches!(
            project_compound_interest(10000.0, 5.0, 0),
            Err(CalcError::InvalidArgument { name: "years", .. })
        ));
        assert!(project_simple_interest(-10.0, 5.0, 1).is_err());
        assert!(project_simple_interest(10.0, -5.0, 1).is_err());
    }
}
