use super::ui;
use crate::core::{AmortizationResult, compute_amortization};
use anyhow::Result;
use comfy_table::Cell;
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub struct LoanArgs {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub term_years: u32,
}

pub fn display_payment_table(loan: &LoanArgs, result: &AmortizationResult, currency: &str) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Loan"), ui::header_cell("")]);
    table.add_row(vec![
        Cell::new("Principal"),
        ui::money_cell(loan.principal, currency),
    ]);
    table.add_row(vec![
        Cell::new("Interest Rate"),
        ui::percent_cell(loan.annual_rate_percent),
    ]);
    table.add_row(vec![
        Cell::new("Payments"),
        Cell::new(format!(
            "{} over {} years",
            result.payments, loan.term_years
        )),
    ]);
    table.add_row(vec![
        Cell::new("Monthly Payment"),
        ui::total_cell(ui::format_money(result.monthly_payment, currency)),
    ]);
    table.add_row(vec![
        Cell::new("Total Interest"),
        ui::money_cell(result.total_interest, currency),
    ]);
    table.add_row(vec![
        Cell::new("Total Payoff"),
        ui::money_cell(result.total_payoff, currency),
    ]);
    table.to_string()
}

pub fn run(loan: &LoanArgs, currency: &str) -> Result<()> {
    info!(?loan, "Calculating loan payment");
    let result = compute_amortization(loan.principal, loan.annual_rate_percent, loan.term_years)?;
    println!("\n{}", display_payment_table(loan, &result, currency));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_table() {
        let loan = LoanArgs {
            principal: 1200.0,
            annual_rate_percent: 0.0,
            term_years: 1,
        };
        let result = compute_amortization(1200.0, 0.0, 1).unwrap();
        let output = display_payment_table(&loan, &result, "USD");
        assert!(output.contains("100.00 USD"));
        assert!(output.contains("12 over 1 years"));
        assert!(output.contains("0.00 USD"));
    }

    #[test]
    fn test_run_payment() {
        let loan = LoanArgs {
            principal: 26000.0,
            annual_rate_percent: 12.0,
            term_years: 10,
        };
        assert!(run(&loan, "USD").is_ok());

        let bad = LoanArgs {
            term_years: 0,
            ..loan
        };
        assert!(run(&bad, "USD").is_err());

        let endless = LoanArgs {
            term_years: 400_000_000,
            ..loan
        };
        let err = run(&endless, "USD").unwrap_err();
        assert!(err.to_string().contains("must be at most 1000 years"));
    }
}
