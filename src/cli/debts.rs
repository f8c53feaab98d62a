use super::ui;
use crate::core::config::AppConfig;
use crate::core::{DebtEntry, DebtSummary, rank_by_avalanche, rank_by_snowball, summarize_debts};
use anyhow::{Context, Result};
use comfy_table::Cell;
use tracing::info;

/// Rates at or above this are flagged in the table.
const HIGH_RATE_PERCENT: f64 = 10.0;

impl DebtSummary {
    pub fn display_as_table(&self, currency: &str) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Debt"),
            ui::header_cell("Principal"),
            ui::header_cell("APR"),
            ui::header_cell("Share"),
            ui::header_cell("Monthly Payment"),
            ui::header_cell("Total Interest"),
        ]);

        for row in &self.debts {
            table.add_row(vec![
                Cell::new(&row.debt.label),
                ui::money_cell(row.debt.principal, currency),
                ui::rate_cell(row.debt.annual_rate_percent, HIGH_RATE_PERCENT),
                ui::percent_cell(row.share_of_total_percent),
                ui::money_cell(row.amortization.monthly_payment, currency),
                ui::money_cell(row.amortization.total_interest, currency),
            ]);
        }

        table.add_row(vec![
            Cell::new(ui::style_text("Total", ui::StyleType::TotalLabel)),
            ui::total_cell(ui::format_money(self.total_principal, currency)),
            ui::percent_cell(self.weighted_average_rate),
            Cell::new(""),
            ui::total_cell(ui::format_money(self.total_monthly_payment, currency)),
            ui::total_cell(ui::format_money(self.total_interest, currency)),
        ]);

        let mut output = format!(
            "{} (repaid over {} years)\n\n",
            ui::style_text("Debt Overview", ui::StyleType::Title),
            self.term_years
        );
        output.push_str(&table.to_string());
        output.push_str(&format!(
            "\n\n{}: {}",
            ui::style_text("Total Payoff Amount", ui::StyleType::TotalLabel),
            ui::style_text(
                &ui::format_money(self.total_payoff, currency),
                ui::StyleType::TotalValue
            )
        ));
        output.push_str(&format!(
            "\n{}: {:.2}%",
            ui::style_text("Weighted Average Interest Rate", ui::StyleType::TotalLabel),
            self.weighted_average_rate
        ));

        if let Some(debt) = &self.highest_rate {
            output.push_str(&format!(
                "\n\nFocus on paying off your {} first: it has the highest interest rate at {:.2}%",
                ui::style_text(&debt.label, ui::StyleType::Highlight),
                debt.annual_rate_percent
            ));
        }
        output
    }
}

/// Renders a repayment ordering as a numbered table.
pub fn display_strategy_table(title: &str, hint: &str, ranked: &[DebtEntry], currency: &str) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("#"),
        ui::header_cell("Debt"),
        ui::header_cell("Balance"),
        ui::header_cell("APR"),
    ]);
    for (position, debt) in ranked.iter().enumerate() {
        table.add_row(vec![
            Cell::new(position + 1),
            Cell::new(&debt.label),
            ui::money_cell(debt.principal, currency),
            ui::rate_cell(debt.annual_rate_percent, HIGH_RATE_PERCENT),
        ]);
    }

    format!(
        "{}\n{}\n\n{table}",
        ui::style_text(title, ui::StyleType::Title),
        ui::style_text(hint, ui::StyleType::Subtle)
    )
}

pub fn run(config: &AppConfig, term_years: Option<u32>) -> Result<()> {
    let term_years = term_years.unwrap_or(config.loan_term_years);
    info!("Summarizing {} debts over {term_years} years", config.debts.len());

    if config.debts.is_empty() {
        println!("No debts configured.");
        return Ok(());
    }

    let summary = summarize_debts(&config.debts, term_years).context("Invalid debt entry")?;
    let avalanche = rank_by_avalanche(&config.debts)?;
    let snowball = rank_by_snowball(&config.debts)?;

    println!("\n{}", summary.display_as_table(&config.currency));
    ui::print_separator();
    println!(
        "\n{}",
        display_strategy_table(
            "Debt Avalanche",
            "Pay minimums on everything, then put extra money toward the highest interest rate.",
            &avalanche,
            &config.currency,
        )
    );
    println!(
        "\n{}",
        display_strategy_table(
            "Debt Snowball",
            "Pay minimums on everything, then put extra money toward the smallest balance.",
            &snowball,
            &config.currency,
        )
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(debts: Vec<DebtEntry>) -> AppConfig {
        let mut config: AppConfig = serde_yaml::from_str("currency: \"USD\"").unwrap();
        config.debts = debts;
        config
    }

    #[test]
    fn test_debt_summary_table() {
        let debts = vec![
            DebtEntry::new("Student Loans", 26000.0, 12.0),
            DebtEntry::new("Car Loan", 0.0, 4.5),
        ];
        let summary = summarize_debts(&debts, 10).unwrap();
        let output = summary.display_as_table("USD");

        assert!(output.contains("Student Loans"));
        assert!(output.contains("26000.00 USD"));
        assert!(output.contains("373.02 USD"));
        assert!(output.contains("repaid over 10 years"));
        assert!(output.contains("Focus on paying off your"));
    }

    #[test]
    fn test_strategy_table_order() {
        let debts = vec![
            DebtEntry::new("Card", 2800.0, 22.49),
            DebtEntry::new("Car", 12000.0, 5.25),
        ];
        let ranked = rank_by_snowball(&debts).unwrap();
        let output = display_strategy_table("Debt Snowball", "smallest first", &ranked, "USD");

        let card = output.find("Card").unwrap();
        let car = output.find("Car ").unwrap();
        assert!(card < car);
    }

    #[test]
    fn test_run_with_debts() {
        let config = config_with(vec![
            DebtEntry::new("Credit Card", 4500.0, 18.99),
            DebtEntry::new("Car Loan", 12000.0, 5.25),
        ]);
        assert!(run(&config, None).is_ok());
        assert!(run(&config, Some(3)).is_ok());
    }

    #[test]
    fn test_run_without_debts() {
        assert!(run(&config_with(Vec::new()), None).is_ok());
    }

    #[test]
    fn test_run_rejects_invalid_input() {
        let config = config_with(vec![DebtEntry::new("Bad", -100.0, 5.0)]);
        assert!(run(&config, None).is_err());
        let config = config_with(vec![DebtEntry::new("Fine", 100.0, 5.0)]);
        assert!(run(&config, Some(0)).is_err());
    }
}
