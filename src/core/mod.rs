//! Finance calculation engine. Pure functions, no I/O.

pub mod allocation;
pub mod amortization;
pub mod budget;
pub mod config;
pub mod debt;
pub mod error;
pub mod log;
pub mod projection;
pub mod refinance;

// Re-export main types for cleaner imports
pub use allocation::{
    AllocationProfile, AllocationTarget, DollarAllocation, RiskProfile, allocate_dollar_amounts,
    allocate_dollar_amounts_reconciled, validate_allocation,
};
pub use amortization::{
    AmortizationResult, compute_amortization, compute_amortized_payment,
    compute_payment_over_months, compute_total_payoff,
};
pub use budget::{
    ExpenseEntry, ExpenseSummary, NetWorthPoint, NetWorthSnapshot, net_worth_growth,
    net_worth_history, summarize_expenses,
};
pub use debt::{
    DebtEntry, DebtSummary, compute_weighted_average_rate, highest_rate_debt, rank_by_avalanche,
    rank_by_snowball, summarize_debts,
};
pub use error::{CalcError, CalcResult};
pub use projection::{
    ProjectionComparison, ProjectionPoint, compare_interest, effective_annual_growth_percent,
    project_compound_interest, project_simple_interest,
};
pub use refinance::{
    RefinanceOffer, RefinanceOption, RefinanceReport, compare_refinance, refinance_debts,
};
