pub mod cli;
pub mod core;

use crate::cli::{alloc::AllocArgs, interest::ProjectionArgs, payment::LoanArgs};
use crate::core::config::AppConfig;
use anyhow::Result;
use tracing::{debug, info};

/// Currency label used when no configuration is loaded.
pub const DEFAULT_CURRENCY: &str = "USD";

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    Debts { term_years: Option<u32> },
    Refinance { term_years: Option<u32> },
    Budget,
    Interest(ProjectionArgs),
    Alloc(AllocArgs),
    Payment(LoanArgs),
}

fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");
    Ok(config)
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("fincalc starting...");

    match command {
        AppCommand::Debts { term_years } => {
            let config = load_config(config_path)?;
            cli::debts::run(&config, term_years)
        }
        AppCommand::Refinance { term_years } => {
            let config = load_config(config_path)?;
            cli::refinance::run(&config, term_years)
        }
        AppCommand::Budget => {
            let config = load_config(config_path)?;
            cli::budget::run(&config)
        }
        AppCommand::Interest(args) => {
            let config = load_config(config_path)?;
            cli::interest::run(&config, &args)
        }
        AppCommand::Alloc(args) => {
            let config = load_config(config_path)?;
            cli::alloc::run(&config, &args)
        }
        AppCommand::Payment(loan) => {
            // Works without a config file; only the currency label is read from it.
            let currency = match config_path {
                Some(path) => AppConfig::load_from_path(path)?.currency,
                None => AppConfig::load()
                    .map(|c| c.currency)
                    .unwrap_or_else(|_| DEFAULT_CURRENCY.to_string()),
            };
            cli::payment::run(&loan, &currency)
        }
    }
}
