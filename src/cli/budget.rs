use super::ui;
use crate::core::config::AppConfig;
use crate::core::{
    ExpenseSummary, NetWorthPoint, net_worth_growth, net_worth_history, summarize_expenses,
};
use anyhow::{Context, Result};
use comfy_table::{Cell, Color};
use tracing::info;

impl ExpenseSummary {
    pub fn display_as_table(&self, currency: &str) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Category"),
            ui::header_cell("Amount"),
            ui::header_cell("Share"),
        ]);
        for row in &self.expenses {
            table.add_row(vec![
                Cell::new(&row.expense.category),
                ui::money_cell(row.expense.amount, currency),
                ui::percent_cell(row.share_percent),
            ]);
        }
        table.add_row(vec![
            Cell::new(ui::style_text("Total", ui::StyleType::TotalLabel)),
            ui::total_cell(ui::format_money(self.total, currency)),
            Cell::new(""),
        ]);

        format!(
            "{}\n\n{table}",
            ui::style_text("Monthly Expenses", ui::StyleType::Title)
        )
    }
}

pub fn display_net_worth_table(history: &[NetWorthPoint], currency: &str) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Period"),
        ui::header_cell("Assets"),
        ui::header_cell("Debts"),
        ui::header_cell("Net Worth"),
        ui::header_cell("Change"),
    ]);
    for point in history {
        let change = match point.change {
            Some(change) if change < 0.0 => ui::money_cell(change, currency).fg(Color::Red),
            Some(change) => ui::money_cell(change, currency).fg(Color::Green),
            None => Cell::new(""),
        };
        table.add_row(vec![
            Cell::new(&point.label),
            ui::money_cell(point.assets, currency),
            ui::money_cell(point.debts, currency),
            ui::money_cell(point.net_worth, currency),
            change,
        ]);
    }

    format!(
        "{}\n\n{table}\n\n{}: {}",
        ui::style_text("Net Worth", ui::StyleType::Title),
        ui::style_text("Growth", ui::StyleType::TotalLabel),
        ui::style_text(
            &ui::format_money(net_worth_growth(history), currency),
            ui::StyleType::TotalValue
        )
    )
}

pub fn run(config: &AppConfig) -> Result<()> {
    info!(
        "Summarizing {} expenses and {} net worth snapshots",
        config.expenses.len(),
        config.net_worth_history.len()
    );

    if config.expenses.is_empty() && config.net_worth_history.is_empty() {
        println!("No expenses or net worth history configured.");
        return Ok(());
    }

    if !config.expenses.is_empty() {
        let summary = summarize_expenses(&config.expenses).context("Invalid expense entry")?;
        println!("\n{}", summary.display_as_table(&config.currency));
    }
    if !config.net_worth_history.is_empty() {
        let history =
            net_worth_history(&config.net_worth_history).context("Invalid net worth entry")?;
        if !config.expenses.is_empty() {
            ui::print_separator();
        }
        println!("\n{}", display_net_worth_table(&history, &config.currency));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ExpenseEntry, NetWorthSnapshot};

    fn config() -> AppConfig {
        serde_yaml::from_str("currency: \"USD\"").unwrap()
    }

    #[test]
    fn test_expense_table() {
        let summary = summarize_expenses(&[
            ExpenseEntry::new("Housing", 1500.0),
            ExpenseEntry::new("Food", 500.0),
        ])
        .unwrap();
        let output = summary.display_as_table("USD");
        assert!(output.contains("Housing"));
        assert!(output.contains("75.00%"));
        assert!(output.contains("2000.00 USD"));
    }

    #[test]
    fn test_net_worth_table() {
        let history = net_worth_history(&[
            NetWorthSnapshot::new("Jan", 65000.0, 59300.0),
            NetWorthSnapshot::new("Feb", 66000.0, 59000.0),
        ])
        .unwrap();
        let output = display_net_worth_table(&history, "USD");
        assert!(output.contains("5700.00 USD"));
        assert!(output.contains("7000.00 USD"));
        assert!(output.contains("1300.00 USD"));
    }

    #[test]
    fn test_run() {
        let mut config = config();
        assert!(run(&config).is_ok());

        config.expenses = vec![ExpenseEntry::new("Housing", 1500.0)];
        config.net_worth_history = vec![NetWorthSnapshot::new("Jan", 100.0, 50.0)];
        assert!(run(&config).is_ok());

        config.expenses = vec![ExpenseEntry::new("Housing", -1.0)];
        let err = run(&config).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid expense entry"));
    }
}
