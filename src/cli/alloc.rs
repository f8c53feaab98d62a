use super::ui;
use crate::core::config::AppConfig;
use crate::core::{
    AllocationProfile, DollarAllocation, RiskProfile, allocate_dollar_amounts,
    allocate_dollar_amounts_reconciled,
};
use anyhow::Result;
use comfy_table::Cell;
use tracing::{debug, info};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AllocArgs {
    pub amount: Option<f64>,
    pub profile: Option<String>,
    pub reconcile: bool,
}

pub fn calculate_allocation(
    profile: &AllocationProfile,
    amount: f64,
    reconcile: bool,
) -> Result<Vec<DollarAllocation>> {
    let allocations = if reconcile {
        allocate_dollar_amounts_reconciled(amount, &profile.targets)?
    } else {
        allocate_dollar_amounts(amount, &profile.targets)?
    };
    debug!(?allocations, "Allocated {amount} across '{}'", profile.name);
    Ok(allocations)
}

fn display_allocation_table(
    profile: &AllocationProfile,
    allocations: &[DollarAllocation],
    amount: f64,
    currency: &str,
) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Category"),
        ui::header_cell("Allocation"),
        ui::header_cell("Amount"),
        ui::header_cell("Example ETFs"),
    ]);

    for allocation in allocations {
        let etfs = RiskProfile::recommended_etfs(&allocation.category).join(", ");
        table.add_row(vec![
            Cell::new(&allocation.category),
            ui::percent_cell(allocation.percent),
            ui::money_cell(allocation.dollars, currency),
            Cell::new(ui::style_text(&etfs, ui::StyleType::Subtle)),
        ]);
    }

    let allocated: f64 = allocations.iter().map(|a| a.dollars).sum();
    let mut output = format!(
        "\nRisk Profile: {}\n",
        ui::style_text(&profile.name, ui::StyleType::Title)
    );
    if let Ok(builtin) = profile.name.parse::<RiskProfile>() {
        if builtin.profile() == *profile {
            output.push_str(&ui::style_text(builtin.description(), ui::StyleType::Subtle));
            output.push('\n');
        }
    }
    output.push('\n');
    output.push_str(&table.to_string());
    output.push_str(&format!(
        "\n\n{}: {}",
        ui::style_text("Investment Amount", ui::StyleType::TotalLabel),
        ui::style_text(&ui::format_money(amount, currency), ui::StyleType::TotalValue)
    ));
    if allocated != amount.round() {
        output.push_str(&format!(
            "\n{}",
            ui::style_text(
                &format!(
                    "Allocated {} due to per-category rounding",
                    ui::format_money(allocated, currency)
                ),
                ui::StyleType::Subtle
            )
        ));
    }
    output
}

pub fn run(config: &AppConfig, args: &AllocArgs) -> Result<()> {
    let profile_name = args
        .profile
        .as_deref()
        .unwrap_or(config.investment.risk_profile.as_str());
    let amount = args.amount.unwrap_or(config.investment.amount);
    let reconcile = args.reconcile || config.investment.reconcile_rounding;
    info!("Allocating {amount} with profile '{profile_name}'");

    let profile = config.resolve_profile(profile_name)?;
    let allocations = calculate_allocation(&profile, amount, reconcile)?;
    println!(
        "{}",
        display_allocation_table(&profile, &allocations, amount, &config.currency)
    );
    ui::print_separator();
    Ok(())
}
