//! Tax-credit eligibility with simplified amount estimates.

pub mod catalog;
pub mod filing;
mod rules;

pub use catalog::{
    ChildTaxParameters, CreditId, CreditParameters, EarnedIncomeParameters, EarnedIncomeTier,
    EducationParameters, SaversParameters, SaversTier, TaxCredit, TaxCreditCatalog,
};
pub use filing::{free_filing_resources, FilingResource};

use super::answers::FilerAnswers;
use super::verdict::{sort_by_status, EligibilityVerdict};
use rules::evaluate_credit;
use tracing::debug;

pub type TaxCreditVerdict = EligibilityVerdict<CreditId>;

/// Evaluator bound to a validated credit catalog.
#[derive(Debug, Clone, Copy)]
pub struct TaxCreditEvaluator<'c> {
    catalog: &'c TaxCreditCatalog,
}

impl<'c> TaxCreditEvaluator<'c> {
    pub fn new(catalog: &'c TaxCreditCatalog) -> Self {
        Self { catalog }
    }

    /// One verdict per catalog credit with estimated amounts, eligible first.
    pub fn evaluate(&self, answers: &FilerAnswers) -> Vec<TaxCreditVerdict> {
        let mut verdicts: Vec<TaxCreditVerdict> = self
            .catalog
            .credits()
            .iter()
            .map(|credit| {
                let outcome = evaluate_credit(&credit.parameters, answers);
                EligibilityVerdict::new(credit.id, outcome.status, outcome.reason)
                    .with_amount(outcome.amount)
            })
            .collect();
        sort_by_status(&mut verdicts);

        debug!(
            filing_status = answers.filing_status.label(),
            credits = verdicts.len(),
            "evaluated tax credits"
        );

        verdicts
    }
}

/// Evaluates `answers` against the built-in credit catalog.
pub fn evaluate_tax_credits(answers: &FilerAnswers) -> Vec<TaxCreditVerdict> {
    TaxCreditEvaluator::new(TaxCreditCatalog::standard()).evaluate(answers)
}
