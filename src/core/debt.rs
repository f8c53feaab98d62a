//! Debt portfolio metrics and repayment ordering.
use crate::core::amortization::{AmortizationResult, compute_amortization};
use crate::core::error::{CalcResult, ensure_non_negative, ensure_years_in_range};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single liability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtEntry {
    pub label: String,
    pub principal: f64,
    pub annual_rate_percent: f64,
}

impl DebtEntry {
    pub fn new(label: impl Into<String>, principal: f64, annual_rate_percent: f64) -> Self {
        Self {
            label: label.into(),
            principal,
            annual_rate_percent,
        }
    }

    pub fn validate(&self) -> CalcResult<()> {
        ensure_non_negative("principal", self.principal)?;
        ensure_non_negative("annual_rate_percent", self.annual_rate_percent)
    }
}

/// One row of a [`DebtSummary`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebtBreakdown {
    pub debt: DebtEntry,
    pub share_of_total_percent: f64,
    pub amortization: AmortizationResult,
}

/// Totals across all debts, each repaid over the same term.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebtSummary {
    pub term_years: u32,
    pub total_principal: f64,
    pub total_monthly_payment: f64,
    pub total_payoff: f64,
    pub total_interest: f64,
    pub weighted_average_rate: f64,
    pub highest_rate: Option<DebtEntry>,
    pub debts: Vec<DebtBreakdown>,
}

fn validate_all(debts: &[DebtEntry]) -> CalcResult<()> {
    debts.iter().try_for_each(DebtEntry::validate)
}

/// Principal-weighted average annual rate. Returns 0 when there is no principal.
pub fn compute_weighted_average_rate(debts: &[DebtEntry]) -> CalcResult<f64> {
    validate_all(debts)?;

    let total_principal: f64 = debts.iter().map(|d| d.principal).sum();
    if total_principal == 0.0 {
        debug!("No outstanding principal, weighted rate is 0");
        return Ok(0.0);
    }

    let weighted: f64 = debts
        .iter()
        .map(|d| d.principal * d.annual_rate_percent)
        .sum();
    Ok(weighted / total_principal)
}

/// Highest rate first. Equal rates keep their input order.
pub fn rank_by_avalanche(debts: &[DebtEntry]) -> CalcResult<Vec<DebtEntry>> {
    validate_all(debts)?;
    let mut ranked = debts.to_vec();
    ranked.sort_by(|a, b| b.annual_rate_percent.total_cmp(&a.annual_rate_percent));
    Ok(ranked)
}

/// Smallest balance first. Equal balances keep their input order.
pub fn rank_by_snowball(debts: &[DebtEntry]) -> CalcResult<Vec<DebtEntry>> {
    validate_all(debts)?;
    let mut ranked = debts.to_vec();
    ranked.sort_by(|a, b| a.principal.total_cmp(&b.principal));
    Ok(ranked)
}

pub fn highest_rate_debt(debts: &[DebtEntry]) -> CalcResult<Option<DebtEntry>> {
    Ok(rank_by_avalanche(debts)?.into_iter().next())
}

/// Builds the debt overview figures for repaying every debt over `term_years`.
pub fn summarize_debts(debts: &[DebtEntry], term_years: u32) -> CalcResult<DebtSummary> {
    validate_all(debts)?;
    ensure_years_in_range("term_years", term_years)?;

    let total_principal: f64 = debts.iter().map(|d| d.principal).sum();
    let mut breakdown = Vec::with_capacity(debts.len());
    for debt in debts {
        let amortization = compute_amortization(debt.principal, debt.annual_rate_percent, term_years)?;
        let share_of_total_percent = if total_principal > 0.0 {
            debt.principal / total_principal * 100.0
        } else {
            0.0
        };
        breakdown.push(DebtBreakdown {
            debt: debt.clone(),
            share_of_total_percent,
            amortization,
        });
    }

    let total_monthly_payment: f64 = breakdown.iter().map(|b| b.amortization.monthly_payment).sum();
    let total_payoff: f64 = breakdown.iter().map(|b| b.amortization.total_payoff).sum();
    let summary = DebtSummary {
        term_years,
        total_principal,
        total_monthly_payment,
        total_payoff,
        total_interest: breakdown.iter().map(|b| b.amortization.total_interest).sum(),
        weighted_average_rate: compute_weighted_average_rate(debts)?,
        highest_rate: highest_rate_debt(debts)?,
        debts: breakdown,
    };
    debug!(
        "Summarized {} debts: principal {total_principal}, payoff {total_payoff}",
        debts.len()
    );
    Ok(summary)
}
