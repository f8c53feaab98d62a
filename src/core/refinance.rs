//! Comparing a debt's current repayment against refinance offers.
use crate::core::amortization::{
    AmortizationResult, compute_amortization, compute_amortization_over_months,
};
use crate::core::debt::DebtEntry;
use crate::core::error::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A lender's offer to take over one configured debt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefinanceOffer {
    /// Label of the debt this offer replaces.
    pub debt: String,
    pub lender: String,
    pub annual_rate_percent: f64,
    pub term_months: u32,
}

impl RefinanceOffer {
    pub fn new(
        debt: impl Into<String>,
        lender: impl Into<String>,
        annual_rate_percent: f64,
        term_months: u32,
    ) -> Self {
        Self {
            debt: debt.into(),
            lender: lender.into(),
            annual_rate_percent,
            term_months,
        }
    }

    fn applies_to(&self, debt: &DebtEntry) -> bool {
        self.debt.trim().eq_ignore_ascii_case(debt.label.trim())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefinanceOption {
    pub offer: RefinanceOffer,
    pub amortization: AmortizationResult,
    /// Current payment minus the offered one. Negative when the offer costs more per month.
    pub monthly_savings: f64,
    /// Interest avoided over the life of the loan compared with keeping the current terms.
    pub interest_savings: f64,
}

/// All offers for one debt, next to what the debt costs today.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefinanceReport {
    pub debt: DebtEntry,
    pub current_term_years: u32,
    pub current: AmortizationResult,
    pub options: Vec<RefinanceOption>,
}

impl RefinanceReport {
    /// Offer with the largest positive monthly savings, first one on ties.
    pub fn best_option(&self) -> Option<&RefinanceOption> {
        self.options
            .iter()
            .filter(|o| o.monthly_savings > 0.0)
            .fold(None, |best: Option<&RefinanceOption>, option| match best {
                Some(b) if b.monthly_savings >= option.monthly_savings => Some(b),
                _ => Some(option),
            })
    }
}

/// Prices every offer against repaying `debt` at its own rate over `current_term_years`.
pub fn compare_refinance(
    debt: &DebtEntry,
    current_term_years: u32,
    offers: &[RefinanceOffer],
) -> CalcResult<RefinanceReport> {
    debt.validate()?;
    let current = compute_amortization(debt.principal, debt.annual_rate_percent, current_term_years)?;

    let mut options = Vec::with_capacity(offers.len());
    for offer in offers {
        let amortization = compute_amortization_over_months(
            debt.principal,
            offer.annual_rate_percent,
            offer.term_months,
        )?;
        debug!(
            "{} via {}: {} -> {} per month",
            debt.label, offer.lender, current.monthly_payment, amortization.monthly_payment
        );
        options.push(RefinanceOption {
            offer: offer.clone(),
            monthly_savings: current.monthly_payment - amortization.monthly_payment,
            interest_savings: current.total_interest - amortization.total_interest,
            amortization,
        });
    }

    Ok(RefinanceReport {
        debt: debt.clone(),
        current_term_years,
        current,
        options,
    })
}

/// Groups `offers` by the debt they name and compares each group.
///
/// Reports follow the order of `debts`; debts without offers are skipped. An
/// offer whose label matches no debt is an error.
pub fn refinance_debts(
    debts: &[DebtEntry],
    current_term_years: u32,
    offers: &[RefinanceOffer],
) -> CalcResult<Vec<RefinanceReport>> {
    if let Some(orphan) = offers
        .iter()
        .find(|offer| !debts.iter().any(|debt| offer.applies_to(debt)))
    {
        return Err(CalcError::UnknownDebt(orphan.debt.clone()));
    }

    let mut reports = Vec::new();
    for debt in debts {
        let matching: Vec<RefinanceOffer> = offers
            .iter()
            .filter(|offer| offer.applies_to(debt))
            .cloned()
            .collect();
        if matching.is_empty() {
            continue;
        }
        reports.push(compare_refinance(debt, current_term_years, &matching)?);
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::amortization::compute_amortized_payment;

    fn private_loan() -> DebtEntry {
        DebtEntry::new("Private Student Loans", 15000.0, 6.8)
    }

    #[test]
    fn test_lower_rate_saves_money() {
        let offers = vec![RefinanceOffer::new("Private Student Loans", "SoFi", 4.99, 120)];
        let report = compare_refinance(&private_loan(), 10, &offers).unwrap();

        let current = compute_amortized_payment(15000.0, 6.8, 10).unwrap();
        let offered = compute_amortized_payment(15000.0, 4.99, 10).unwrap();
        assert_eq!(report.current.monthly_payment, current);

        let option = &report.options[0];
        assert_eq!(option.amortization.payments, 120);
        assert!((option.monthly_savings - (current - offered)).abs() < 1e-9);
        // About 172.62 vs 159.02 per month.
        assert!((option.monthly_savings - 13.59).abs() < 0.01, "{}", option.monthly_savings);
        assert!(option.interest_savings > 0.0);
    }

    #[test]
    fn test_short_intro_term_raises_payment() {
        let card = DebtEntry::new("Credit Card 1", 4500.0, 18.99);
        let offers = vec![RefinanceOffer::new("Credit Card 1", "Slate Edge", 0.0, 18)];
        let report = compare_refinance(&card, 10, &offers).unwrap();

        let option = &report.options[0];
        assert_eq!(option.amortization.monthly_payment, 250.0);
        assert_eq!(option.amortization.total_interest, 0.0);
        assert!(option.monthly_savings < 0.0);
        assert!((option.interest_savings - report.current.total_interest).abs() < 1e-9);
        assert!(report.best_option().is_none());
    }

    #[test]
    fn test_best_option() {
        let offers = vec![
            RefinanceOffer::new("Private Student Loans", "Earnest", 5.25, 180),
            RefinanceOffer::new("Private Student Loans", "SoFi", 4.99, 120),
            RefinanceOffer::new("Private Student Loans", "Laurel Road", 5.15, 120),
        ];
        let report = compare_refinance(&private_loan(), 10, &offers).unwrap();
        // The 15 year term has the lowest payment even at a higher rate.
        assert_eq!(report.best_option().unwrap().offer.lender, "Earnest");

        let tied = vec![
            RefinanceOffer::new("Private Student Loans", "First", 4.99, 120),
            RefinanceOffer::new("Private Student Loans", "Second", 4.99, 120),
        ];
        let report = compare_refinance(&private_loan(), 10, &tied).unwrap();
        assert_eq!(report.best_option().unwrap().offer.lender, "First");
    }

    #[test]
    fn test_refinance_debts_groups_offers() {
        let debts = vec![
            DebtEntry::new("Federal Student Loans", 25000.0, 4.5),
            private_loan(),
            DebtEntry::new("Car Loan", 12000.0, 5.25),
        ];
        let offers = vec![
            RefinanceOffer::new("car loan", "Capital One", 3.99, 60),
            RefinanceOffer::new("Private Student Loans", "SoFi", 4.99, 120),
            RefinanceOffer::new("Car Loan", "LightStream", 4.25, 48),
        ];
        let reports = refinance_debts(&debts, 10, &offers).unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].debt.label, "Private Student Loans");
        assert_eq!(reports[1].debt.label, "Car Loan");
        let lenders: Vec<&str> = reports[1]
            .options
            .iter()
            .map(|o| o.offer.lender.as_str())
            .collect();
        assert_eq!(lenders, vec!["Capital One", "LightStream"]);

        assert!(refinance_debts(&debts, 10, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_offers_are_rejected() {
        let debts = vec![private_loan()];
        assert!(matches!(
            refinance_debts(&debts, 10, &[RefinanceOffer::new("Mortgage", "Bank", 3.0, 360)]),
            Err(CalcError::UnknownDebt(label)) if label == "Mortgage"
        ));
        assert!(matches!(
            compare_refinance(&private_loan(), 10, &[RefinanceOffer::new("x", "Bank", 3.0, 0)]),
            Err(CalcError::InvalidArgument {
                name: "payments",
                ..
            })
        ));
        let negative_rate = RefinanceOffer::new("x", "Bank", -1.0, 12);
        assert!(compare_refinance(&private_loan(), 10, &[negative_rate]).is_err());
        assert!(compare_refinance(&private_loan(), 0, &[]).is_err());
    }
}
