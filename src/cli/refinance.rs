use super::ui;
use crate::core::config::AppConfig;
use crate::core::{RefinanceReport, refinance_debts};
use anyhow::{Context, Result};
use comfy_table::{Cell, Color};
use tracing::info;

/// Signed amount, green when it saves money and red when it costs more.
fn savings_cell(value: f64, currency: &str) -> Cell {
    let cell = ui::money_cell(value, currency);
    if value > 0.0 {
        cell.fg(Color::Green)
    } else if value < 0.0 {
        cell.fg(Color::Red)
    } else {
        cell
    }
}

fn format_term(months: u32) -> String {
    if months % 12 == 0 {
        format!("{} years", months / 12)
    } else {
        format!("{months} months")
    }
}

impl RefinanceReport {
    pub fn display_as_table(&self, currency: &str) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Lender"),
            ui::header_cell("APR"),
            ui::header_cell("Term"),
            ui::header_cell("Monthly Payment"),
            ui::header_cell("Monthly Savings"),
            ui::header_cell("Interest Savings"),
        ]);

        table.add_row(vec![
            Cell::new(ui::style_text("Current", ui::StyleType::Subtle)),
            ui::percent_cell(self.debt.annual_rate_percent),
            Cell::new(format!("{} years", self.current_term_years)),
            ui::money_cell(self.current.monthly_payment, currency),
            Cell::new(""),
            Cell::new(""),
        ]);
        for option in &self.options {
            table.add_row(vec![
                Cell::new(&option.offer.lender),
                ui::percent_cell(option.offer.annual_rate_percent),
                Cell::new(format_term(option.offer.term_months)),
                ui::money_cell(option.amortization.monthly_payment, currency),
                savings_cell(option.monthly_savings, currency),
                savings_cell(option.interest_savings, currency),
            ]);
        }

        let mut output = format!(
            "{}\n{}\n\n",
            ui::style_text(&self.debt.label, ui::StyleType::Title),
            ui::style_text(
                &format!(
                    "{} at {:.2}%",
                    ui::format_money(self.debt.principal, currency),
                    self.debt.annual_rate_percent
                ),
                ui::StyleType::Subtle
            )
        );
        output.push_str(&table.to_string());

        match self.best_option() {
            Some(best) => output.push_str(&format!(
                "\n\n{}: {} saves {} per month",
                ui::style_text("Lowest Payment", ui::StyleType::TotalLabel),
                ui::style_text(&best.offer.lender, ui::StyleType::Highlight),
                ui::style_text(
                    &ui::format_money(best.monthly_savings, currency),
                    ui::StyleType::TotalValue
                )
            )),
            None => output.push_str("\n\nNo offer lowers the monthly payment."),
        }
        output
    }
}

pub fn run(config: &AppConfig, term_years: Option<u32>) -> Result<()> {
    let term_years = term_years.unwrap_or(config.loan_term_years);
    info!(
        "Comparing {} refinance offers against a {term_years} year term",
        config.refinance_offers.len()
    );

    let reports = refinance_debts(&config.debts, term_years, &config.refinance_offers)
        .context("Invalid refinance offer")?;
    if reports.is_empty() {
        println!("No refinance offers configured.");
        return Ok(());
    }

    for (index, report) in reports.iter().enumerate() {
        if index > 0 {
            ui::print_separator();
        }
        println!("\n{}", report.display_as_table(&config.currency));
    }
    Ok(())
}
