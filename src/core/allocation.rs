//! Risk-profile allocations and their conversion into dollar amounts.
use crate::core::error::{
    ALLOCATION_TOLERANCE, CalcError, CalcResult, ensure_non_negative, ensure_percent,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Display;
use std::str::FromStr;
use tracing::debug;

pub const BOND_ETFS: &str = "Bond ETFs";
pub const LARGE_CAP_ETFS: &str = "Large Cap ETFs";
pub const INTERNATIONAL_ETFS: &str = "International ETFs";
pub const SMALL_CAP_ETFS: &str = "Small Cap ETFs";

/// A named share of a 100% allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationTarget {
    pub category: String,
    pub percent: f64,
}

impl AllocationTarget {
    pub fn new(category: impl Into<String>, percent: f64) -> Self {
        Self {
            category: category.into(),
            percent,
        }
    }
}

/// Dollar amount assigned to one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DollarAllocation {
    pub category: String,
    pub percent: f64,
    pub dollars: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskProfile {
    Conservative,
    Moderate,
    Aggressive,
}

impl Display for RiskProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                RiskProfile::Conservative => "conservative",
                RiskProfile::Moderate => "moderate",
                RiskProfile::Aggressive => "aggressive",
            }
        )
    }
}

impl FromStr for RiskProfile {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "conservative" => Ok(RiskProfile::Conservative),
            "moderate" | "balanced" => Ok(RiskProfile::Moderate),
            "aggressive" | "growth" => Ok(RiskProfile::Aggressive),
            _ => Err(CalcError::UnknownRiskProfile(s.to_string())),
        }
    }
}

impl RiskProfile {
    pub const ALL: [RiskProfile; 3] = [
        RiskProfile::Conservative,
        RiskProfile::Moderate,
        RiskProfile::Aggressive,
    ];

    /// Built-in ETF split for this profile.
    pub fn targets(&self) -> Vec<AllocationTarget> {
        let (bonds, large_cap, international, small_cap) = match self {
            RiskProfile::Conservative => (60.0, 25.0, 10.0, 5.0),
            RiskProfile::Moderate => (40.0, 30.0, 20.0, 10.0),
            RiskProfile::Aggressive => (15.0, 40.0, 25.0, 20.0),
        };
        vec![
            AllocationTarget::new(BOND_ETFS, bonds),
            AllocationTarget::new(LARGE_CAP_ETFS, large_cap),
            AllocationTarget::new(INTERNATIONAL_ETFS, international),
            AllocationTarget::new(SMALL_CAP_ETFS, small_cap),
        ]
    }

    pub fn profile(&self) -> AllocationProfile {
        AllocationProfile {
            name: self.to_string(),
            targets: self.targets(),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RiskProfile::Conservative => {
                "Focuses on stability with a higher share of bonds, for shorter horizons or lower risk tolerance."
            }
            RiskProfile::Moderate => {
                "Balances growth and stability, for medium-term goals and moderate risk tolerance."
            }
            RiskProfile::Aggressive => {
                "Favours stock exposure for higher potential returns, for long horizons and high risk tolerance."
            }
        }
    }

    /// Example funds for a built-in category. Unknown categories have none.
    pub fn recommended_etfs(category: &str) -> &'static [&'static str] {
        match category {
            BOND_ETFS => &["BND", "AGG", "SCHZ"],
            LARGE_CAP_ETFS => &["VOO", "SPY", "IVV"],
            INTERNATIONAL_ETFS => &["VXUS", "IXUS", "SPDW"],
            SMALL_CAP_ETFS => &["VB", "IJR", "SCHA"],
            _ => &[],
        }
    }
}

/// A validated allocation: unique categories whose percentages sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAllocationProfile")]
pub struct AllocationProfile {
    pub name: String,
    pub targets: Vec<AllocationTarget>,
}

#[derive(Deserialize)]
struct RawAllocationProfile {
    name: String,
    targets: Vec<AllocationTarget>,
}

impl TryFrom<RawAllocationProfile> for AllocationProfile {
    type Error = CalcError;

    fn try_from(raw: RawAllocationProfile) -> Result<Self, Self::Error> {
        AllocationProfile::new(raw.name, raw.targets)
    }
}

impl AllocationProfile {
    pub fn new(name: impl Into<String>, targets: Vec<AllocationTarget>) -> CalcResult<Self> {
        let name = name.into();
        validate_allocation(&targets).map_err(|e| match e {
            CalcError::InvalidAllocation { reason } => CalcError::InvalidAllocation {
                reason: format!("profile '{name}': {reason}"),
            },
            other => other,
        })?;
        Ok(Self { name, targets })
    }

    pub fn total_percent(&self) -> f64 {
        self.targets.iter().map(|t| t.percent).sum()
    }
}

/// Checks that `targets` form a complete 100% split.
pub fn validate_allocation(targets: &[AllocationTarget]) -> CalcResult<()> {
    let mut seen = HashSet::new();
    for target in targets {
        ensure_percent("percent", target.percent)?;
        if target.category.trim().is_empty() {
            return Err(CalcError::InvalidAllocation {
                reason: "category names must not be empty".to_string(),
            });
        }
        if !seen.insert(target.category.as_str()) {
            return Err(CalcError::InvalidAllocation {
                reason: format!("duplicate category '{}'", target.category),
            });
        }
    }

    let total: f64 = targets.iter().map(|t| t.percent).sum();
    if (total - 100.0).abs() > ALLOCATION_TOLERANCE {
        return Err(CalcError::InvalidAllocation {
            reason: format!("percentages sum to {total}, expected 100"),
        });
    }
    Ok(())
}

fn validate_inputs(total_amount: f64, targets: &[AllocationTarget]) -> CalcResult<()> {
    ensure_non_negative("total_amount", total_amount)?;
    targets
        .iter()
        .try_for_each(|t| ensure_percent("percent", t.percent))
}

/// Splits `total_amount` by percentage, rounding each category to whole dollars.
///
/// Each category is rounded on its own, so the outputs may not add up to
/// `total_amount` exactly. Use [`allocate_dollar_amounts_reconciled`] when the
/// parts must sum to the whole.
pub fn allocate_dollar_amounts(
    total_amount: f64,
    targets: &[AllocationTarget],
) -> CalcResult<Vec<DollarAllocation>> {
    validate_inputs(total_amount, targets)?;
    Ok(targets
        .iter()
        .map(|t| DollarAllocation {
            category: t.category.clone(),
            percent: t.percent,
            dollars: (total_amount * t.percent / 100.0).round(),
        })
        .collect())
}

/// Like [`allocate_dollar_amounts`], but the rounding remainder goes to the
/// largest-percent category so the parts add up to `round(total_amount)`.
pub fn allocate_dollar_amounts_reconciled(
    total_amount: f64,
    targets: &[AllocationTarget],
) -> CalcResult<Vec<DollarAllocation>> {
    validate_allocation(targets)?;
    let mut allocations = allocate_dollar_amounts(total_amount, targets)?;

    let allocated: f64 = allocations.iter().map(|a| a.dollars).sum();
    let remainder = total_amount.round() - allocated;
    if remainder != 0.0 {
        // First of the largest on ties.
        let largest = allocations
            .iter()
            .enumerate()
            .fold(None::<(usize, f64)>, |best, (i, a)| match best {
                Some((_, percent)) if percent >= a.percent => best,
                _ => Some((i, a.percent)),
            });
        if let Some((index, _)) = largest {
            debug!(
                "Assigning rounding remainder {remainder} to {}",
                allocations[index].category
            );
            allocations[index].dollars += remainder;
        }
    }
    Ok(allocations)
}
