use super::ui;
use crate::core::config::{AppConfig, ProjectionConfig};
use crate::core::{ProjectionComparison, compare_interest};
use anyhow::Result;
use comfy_table::Cell;
use tracing::info;

/// Overrides for the configured projection; unset fields fall back to the config.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectionArgs {
    pub principal: Option<f64>,
    pub annual_rate_percent: Option<f64>,
    pub years: Option<u32>,
}

impl ProjectionArgs {
    pub fn resolve(&self, config: &ProjectionConfig) -> ProjectionConfig {
        ProjectionConfig {
            principal: self.principal.unwrap_or(config.principal),
            annual_rate_percent: self
                .annual_rate_percent
                .unwrap_or(config.annual_rate_percent),
            years: self.years.unwrap_or(config.years),
        }
    }
}

impl ProjectionComparison {
    pub fn display_as_table(&self, currency: &str) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Year"),
            ui::header_cell("Simple Interest"),
            ui::header_cell("Compound Interest"),
            ui::header_cell("Difference"),
        ]);

        for (simple, compound) in self.simple.iter().zip(&self.compound) {
            table.add_row(vec![
                Cell::new(simple.period),
                ui::money_cell(simple.amount, currency),
                ui::money_cell(compound.amount, currency),
                ui::money_cell(compound.amount - simple.amount, currency),
            ]);
        }

        let mut output = format!(
            "{}\n{}\n\n",
            ui::style_text("Interest Calculator", ui::StyleType::Title),
            ui::style_text(
                &format!(
                    "{} at {:.2}% per year",
                    ui::format_money(self.principal, currency),
                    self.annual_rate_percent
                ),
                ui::StyleType::Subtle
            )
        );
        output.push_str(&table.to_string());
        output.push_str(&format!(
            "\n\n{}: {}",
            ui::style_text("Final Amount", ui::StyleType::TotalLabel),
            ui::style_text(
                &ui::format_money(self.final_compound, currency),
                ui::StyleType::TotalValue
            )
        ));
        output.push_str(&format!(
            "\n{}: {}",
            ui::style_text("Total Interest", ui::StyleType::TotalLabel),
            ui::format_money(self.compound_interest_earned, currency)
        ));
        output.push_str(&format!(
            "\n{}: {}",
            ui::style_text("Gained by Compounding", ui::StyleType::TotalLabel),
            ui::format_money(self.compound_advantage, currency)
        ));
        if let (Some(compound), Some(simple)) = (
            self.compound_effective_rate_percent,
            self.simple_effective_rate_percent,
        ) {
            output.push_str(&format!(
                "\n{}: {compound:.2}% compound vs {simple:.2}% simple",
                ui::style_text("Annualized Growth", ui::StyleType::TotalLabel),
            ));
        }
        output
    }
}

pub fn run(config: &AppConfig, args: &ProjectionArgs) -> Result<()> {
    let projection = args.resolve(&config.projection);
    info!(?projection, "Projecting interest growth");

    let comparison = compare_interest(
        projection.principal,
        projection.annual_rate_percent,
        projection.years,
    )?;
    println!("\n{}", comparison.display_as_table(&config.currency));
    Ok(())
}
