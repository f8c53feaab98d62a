use crate::core::allocation::{AllocationProfile, RiskProfile};
use crate::core::budget::{ExpenseEntry, NetWorthSnapshot};
use crate::core::debt::DebtEntry;
use crate::core::refinance::RefinanceOffer;
use crate::core::error::CalcError;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProjectionConfig {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub years: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        ProjectionConfig {
            principal: 10000.0,
            annual_rate_percent: 5.0,
            years: 10,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct InvestmentConfig {
    pub amount: f64,
    #[serde(default = "default_risk_profile")]
    pub risk_profile: String,
    #[serde(default)]
    pub reconcile_rounding: bool,
}

fn default_risk_profile() -> String {
    RiskProfile::Moderate.to_string()
}

impl Default for InvestmentConfig {
    fn default() -> Self {
        InvestmentConfig {
            amount: 10000.0,
            risk_profile: default_risk_profile(),
            reconcile_rounding: false,
        }
    }
}

fn default_loan_term_years() -> u32 {
    10
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub currency: String,
    #[serde(default = "default_loan_term_years")]
    pub loan_term_years: u32,
    #[serde(default)]
    pub debts: Vec<DebtEntry>,
    #[serde(default)]
    pub refinance_offers: Vec<RefinanceOffer>,
    #[serde(default)]
    pub expenses: Vec<ExpenseEntry>,
    #[serde(default)]
    pub net_worth_history: Vec<NetWorthSnapshot>,
    #[serde(default)]
    pub projection: ProjectionConfig,
    #[serde(default)]
    pub investment: InvestmentConfig,
    #[serde(default)]
    pub allocation_profiles: Vec<AllocationProfile>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "fincalc", "fincalc")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// Looks up a profile by name. Configured profiles shadow the built-in ones.
    pub fn resolve_profile(&self, name: &str) -> Result<AllocationProfile, CalcError> {
        if let Some(custom) = self
            .allocation_profiles
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
        {
            debug!("Using configured allocation profile '{}'", custom.name);
            return Ok(custom.clone());
        }
        Ok(name.parse::<RiskProfile>()?.profile())
    }
}
