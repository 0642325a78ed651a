//! Benefit-program eligibility: catalog data plus one decision rule per program.

pub mod catalog;
mod rules;

pub use catalog::{
    BenefitEstimate, BenefitPeriod, CoverageScope, Program, ProgramCatalog, ProgramCategory,
    ProgramId,
};

use super::answers::HouseholdAnswers;
use super::poverty::percent_of_fpl;
use super::verdict::{sort_by_status, EligibilityVerdict};
use rules::{evaluate_program, HouseholdSignals};
use tracing::debug;

pub type BenefitVerdict = EligibilityVerdict<ProgramId>;

/// Stateless evaluator applying the program rules to a household snapshot.
#[derive(Debug, Clone, Copy)]
pub struct BenefitsEvaluator<'c> {
    catalog: &'c ProgramCatalog,
}

impl<'c> BenefitsEvaluator<'c> {
    pub fn new(catalog: &'c ProgramCatalog) -> Self {
        Self { catalog }
    }

    /// One verdict per catalog program, eligible first.
    pub fn evaluate(&self, answers: &HouseholdAnswers) -> Vec<BenefitVerdict> {
        let signals = HouseholdSignals {
            answers,
            percent_fpl: percent_of_fpl(
                answers.annual_income,
                answers.household_size,
                &answers.state,
            ),
        };

        let mut verdicts: Vec<BenefitVerdict> = self
            .catalog
            .programs()
            .iter()
            .map(|program| {
                let (status, reason) = evaluate_program(program.id, &signals);
                EligibilityVerdict::new(program.id, status, reason)
            })
            .collect();
        sort_by_status(&mut verdicts);

        debug!(
            state = %answers.state,
            household_size = answers.household_size,
            percent_fpl = signals.percent_fpl,
            programs = verdicts.len(),
            "evaluated benefit programs"
        );

        verdicts
    }
}

/// Evaluates `answers` against the built-in program catalog.
pub fn evaluate_benefits(answers: &HouseholdAnswers) -> Vec<BenefitVerdict> {
    BenefitsEvaluator::new(ProgramCatalog::standard()).evaluate(answers)
}
