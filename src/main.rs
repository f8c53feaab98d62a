use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fincalc::cli::{alloc::AllocArgs, interest::ProjectionArgs, payment::LoanArgs};
use fincalc::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for fincalc::AppCommand {
    fn from(cmd: Commands) -> fincalc::AppCommand {
        match cmd {
            Commands::Debts { term_years } => fincalc::AppCommand::Debts { term_years },
            Commands::Refinance { term_years } => fincalc::AppCommand::Refinance { term_years },
            Commands::Budget => fincalc::AppCommand::Budget,
            Commands::Interest {
                principal,
                rate,
                years,
            } => fincalc::AppCommand::Interest(ProjectionArgs {
                principal,
                annual_rate_percent: rate,
                years,
            }),
            Commands::Alloc {
                amount,
                profile,
                reconcile,
            } => fincalc::AppCommand::Alloc(AllocArgs {
                amount,
                profile,
                reconcile,
            }),
            Commands::Payment {
                principal,
                rate,
                years,
            } => fincalc::AppCommand::Payment(LoanArgs {
                principal,
                annual_rate_percent: rate,
                term_years: years,
            }),
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display debt totals and avalanche/snowball repayment order
    Debts {
        /// Repayment term in years, overriding the configured one
        #[arg(short, long)]
        term_years: Option<u32>,
    },
    /// Compare configured refinance offers against each debt's current payment
    Refinance {
        /// Current repayment term in years, overriding the configured one
        #[arg(short, long)]
        term_years: Option<u32>,
    },
    /// Display monthly expenses and net worth history
    Budget,
    /// Compare simple and compound interest growth
    Interest {
        #[arg(short, long)]
        principal: Option<f64>,
        /// Annual interest rate in percent
        #[arg(short, long)]
        rate: Option<f64>,
        #[arg(short, long)]
        years: Option<u32>,
    },
    /// Split an investment amount across a risk profile
    Alloc {
        #[arg(short, long)]
        amount: Option<f64>,
        /// Built-in (conservative, moderate, aggressive) or configured profile
        #[arg(short, long)]
        profile: Option<String>,
        /// Assign the rounding remainder so amounts add up to the total
        #[arg(long)]
        reconcile: bool,
    },
    /// Calculate the monthly payment for a fixed-rate loan
    Payment {
        #[arg(short, long)]
        principal: f64,
        /// Annual interest rate in percent
        #[arg(short, long)]
        rate: f64,
        /// Loan term in years
        #[arg(short, long)]
        years: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fincalc::cli::setup::setup(),
        Some(cmd) => fincalc::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
