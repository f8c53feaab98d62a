//! Monthly spending breakdown and net worth over time.
use crate::core::error::{CalcResult, ensure_non_negative};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub category: String,
    pub amount: f64,
}

impl ExpenseEntry {
    pub fn new(category: impl Into<String>, amount: f64) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseShare {
    pub expense: ExpenseEntry,
    pub share_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseSummary {
    pub total: f64,
    pub expenses: Vec<ExpenseShare>,
    /// Category with the highest amount, first one on ties.
    pub largest: Option<ExpenseEntry>,
}

/// Totals monthly expenses and each category's share of the total.
///
/// Shares are 0 when nothing is spent.
pub fn summarize_expenses(expenses: &[ExpenseEntry]) -> CalcResult<ExpenseSummary> {
    expenses
        .iter()
        .try_for_each(|e| ensure_non_negative("amount", e.amount))?;

    let total: f64 = expenses.iter().map(|e| e.amount).sum();
    let shares = expenses
        .iter()
        .map(|expense| ExpenseShare {
            expense: expense.clone(),
            share_percent: if total > 0.0 {
                expense.amount / total * 100.0
            } else {
                0.0
            },
        })
        .collect();

    let largest = expenses
        .iter()
        .fold(None, |best: Option<&ExpenseEntry>, e| match best {
            Some(b) if b.amount >= e.amount => Some(b),
            _ => Some(e),
        })
        .cloned();
    debug!("Summarized {} expenses, total {total}", expenses.len());

    Ok(ExpenseSummary {
        total,
        expenses: shares,
        largest,
    })
}

/// Assets and debts recorded at one point in time, e.g. a month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetWorthSnapshot {
    pub label: String,
    pub assets: f64,
    pub debts: f64,
}

impl NetWorthSnapshot {
    pub fn new(label: impl Into<String>, assets: f64, debts: f64) -> Self {
        Self {
            label: label.into(),
            assets,
            debts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetWorthPoint {
    pub label: String,
    pub assets: f64,
    pub debts: f64,
    pub net_worth: f64,
    /// Change from the previous snapshot; `None` for the first one.
    pub change: Option<f64>,
}

/// Net worth (`assets - debts`) for each snapshot, in the given order.
pub fn net_worth_history(snapshots: &[NetWorthSnapshot]) -> CalcResult<Vec<NetWorthPoint>> {
    let mut history: Vec<NetWorthPoint> = Vec::with_capacity(snapshots.len());
    for snapshot in snapshots {
        ensure_non_negative("assets", snapshot.assets)?;
        ensure_non_negative("debts", snapshot.debts)?;

        let net_worth = snapshot.assets - snapshot.debts;
        let change = history.last().map(|previous| net_worth - previous.net_worth);
        history.push(NetWorthPoint {
            label: snapshot.label.clone(),
            assets: snapshot.assets,
            debts: snapshot.debts,
            net_worth,
            change,
        });
    }
    Ok(history)
}

/// Net worth gained from the first snapshot to the last, 0 with fewer than two.
pub fn net_worth_growth(history: &[NetWorthPoint]) -> f64 {
    match (history.first(), history.last()) {
        (Some(first), Some(last)) => last.net_worth - first.net_worth,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::CalcError;

    fn monthly_expenses() -> Vec<ExpenseEntry> {
        vec![
            ExpenseEntry::new("Housing", 1500.0),
            ExpenseEntry::new("Transportation", 400.0),
            ExpenseEntry::new("Food", 600.0),
            ExpenseEntry::new("Utilities", 300.0),
            ExpenseEntry::new("Debt Payments", 800.0),
            ExpenseEntry::new("Entertainment", 200.0),
            ExpenseEntry::new("Other", 300.0),
        ]
    }

    #[test]
    fn test_summarize_expenses() {
        let summary = summarize_expenses(&monthly_expenses()).unwrap();
        assert_eq!(summary.total, 4100.0);
        assert_eq!(summary.expenses.len(), 7);
        assert_eq!(summary.expenses[0].expense.category, "Housing");
        assert!((summary.expenses[0].share_percent - 36.585).abs() < 1e-3);

        let shares: f64 = summary.expenses.iter().map(|e| e.share_percent).sum();
        assert!((shares - 100.0).abs() < 1e-9);
        assert_eq!(summary.largest.unwrap().category, "Housing");
    }

    #[test]
    fn test_empty_and_zero_expenses() {
        let summary = summarize_expenses(&[]).unwrap();
        assert_eq!(summary.total, 0.0);
        assert!(summary.expenses.is_empty());
        assert!(summary.largest.is_none());

        let zeros = vec![ExpenseEntry::new("A", 0.0), ExpenseEntry::new("B", 0.0)];
        let summary = summarize_expenses(&zeros).unwrap();
        assert!(summary.expenses.iter().all(|e| e.share_percent == 0.0));
        assert_eq!(summary.largest.unwrap().category, "A");
    }

    #[test]
    fn test_negative_expense_is_rejected() {
        let expenses = vec![ExpenseEntry::new("Refund", -20.0)];
        assert!(matches!(
            summarize_expenses(&expenses),
            Err(CalcError::InvalidArgument { name: "amount", .. })
        ));
    }

    #[test]
    fn test_net_worth_history() {
        let snapshots = vec![
            NetWorthSnapshot::new("Jan", 65000.0, 59300.0),
            NetWorthSnapshot::new("Feb", 66000.0, 59000.0),
            NetWorthSnapshot::new("Mar", 66500.0, 58700.0),
            NetWorthSnapshot::new("Jun", 69500.0, 57500.0),
        ];
        let history = net_worth_history(&snapshots).unwrap();

        let net: Vec<f64> = history.iter().map(|p| p.net_worth).collect();
        assert_eq!(net, vec![5700.0, 7000.0, 7800.0, 12000.0]);
        assert_eq!(history[0].change, None);
        assert_eq!(history[1].change, Some(1300.0));
        assert_eq!(history[3].change, Some(4200.0));
        assert_eq!(net_worth_growth(&history), 6300.0);
    }

    #[test]
    fn test_negative_net_worth() {
        let history = net_worth_history(&[
            NetWorthSnapshot::new("Start", 1000.0, 5000.0),
            NetWorthSnapshot::new("End", 1000.0, 6000.0),
        ])
        .unwrap();
        assert_eq!(history[0].net_worth, -4000.0);
        assert_eq!(history[1].change, Some(-1000.0));
        assert_eq!(net_worth_growth(&history), -1000.0);

        assert!(net_worth_history(&[]).unwrap().is_empty());
        assert_eq!(net_worth_growth(&[]), 0.0);
        assert!(net_worth_history(&[NetWorthSnapshot::new("Bad", -1.0, 0.0)]).is_err());
    }
}
