use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::answers::{AnswerError, FilerAnswers, HouseholdAnswers};
use super::benefits::{BenefitsEvaluator, ProgramCatalog};
use super::catalog::{CatalogError, Locale};
use super::import::ImportedHousehold;
use super::report::{BenefitsReport, StatusCounts, TaxCreditReport};
use super::tax::{TaxCreditCatalog, TaxCreditEvaluator};
use crate::config::ScreeningConfig;

/// Whether answers are validated before evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    Strict,
    Permissive,
}

/// Facade combining the catalogs, evaluators and report builders.
#[derive(Debug, Clone)]
pub struct ScreeningService {
    programs: Arc<ProgramCatalog>,
    credits: Arc<TaxCreditCatalog>,
    validation: ValidationMode,
}

impl ScreeningService {
    pub fn new(
        programs: ProgramCatalog,
        credits: TaxCreditCatalog,
        validation: ValidationMode,
    ) -> Self {
        Self {
            programs: Arc::new(programs),
            credits: Arc::new(credits),
            validation,
        }
    }

    /// Built-in catalogs with strict validation.
    pub fn standard() -> Self {
        Self::new(
            ProgramCatalog::standard().clone(),
            TaxCreditCatalog::standard().clone(),
            ValidationMode::Strict,
        )
    }

    pub fn from_config(config: &ScreeningConfig) -> Result<Self, CatalogError> {
        let credits = match &config.tax_credit_catalog {
            Some(path) => {
                let catalog = TaxCreditCatalog::from_json_path(path)?;
                info!(path = %path.display(), "loaded tax credit catalog override");
                catalog
            }
            None => TaxCreditCatalog::standard().clone(),
        };

        let validation = if config.strict_answers {
            ValidationMode::Strict
        } else {
            ValidationMode::Permissive
        };

        Ok(Self::new(
            ProgramCatalog::standard().clone(),
            credits,
            validation,
        ))
    }

    pub fn programs(&self) -> &ProgramCatalog {
        &self.programs
    }

    pub fn credits(&self) -> &TaxCreditCatalog {
        &self.credits
    }

    pub fn validation(&self) -> ValidationMode {
        self.validation
    }

    pub fn screen_benefits(
        &self,
        answers: &HouseholdAnswers,
        locale: Locale,
        today: NaiveDate,
    ) -> Result<BenefitsReport, AnswerError> {
        if self.validation == ValidationMode::Strict {
            answers.validate()?;
        }

        let verdicts = BenefitsEvaluator::new(&self.programs).evaluate(answers);
        let report = BenefitsReport::build(answers, &verdicts, &self.programs, locale, today);
        debug!(
            eligible = report.counts.eligible,
            likely = report.counts.likely,
            "benefits report ready"
        );
        Ok(report)
    }

    pub fn screen_tax_credits(
        &self,
        answers: &FilerAnswers,
        locale: Locale,
        today: NaiveDate,
    ) -> Result<TaxCreditReport, AnswerError> {
        if self.validation == ValidationMode::Strict {
            answers.validate()?;
        }

        let verdicts = TaxCreditEvaluator::new(&self.credits).evaluate(answers);
        let report = TaxCreditReport::build(answers, &verdicts, &self.credits, locale, today);
        debug!(
            total_estimated = report.total_estimated,
            "tax credit report ready"
        );
        Ok(report)
    }

    /// Screens each imported household independently; invalid rows are reported, not fatal.
    pub fn screen_batch(&self, households: &[ImportedHousehold]) -> Vec<BatchOutcome> {
        households
            .iter()
            .map(|household| {
                let result = match self.validation {
                    ValidationMode::Strict => household.answers.validate(),
                    ValidationMode::Permissive => Ok(()),
                }
                .map(|()| {
                    let verdicts = BenefitsEvaluator::new(&self.programs).evaluate(&household.answers);
                    StatusCounts::tally(&verdicts)
                });

                if let Err(err) = &result {
                    warn!(line = household.line, error = %err, "skipping invalid household row");
                }

                BatchOutcome {
                    line: household.line,
                    label: household.label.clone(),
                    result,
                }
            })
            .collect()
    }
}

/// Per-row result of a batch screening run.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    pub line: u64,
    pub label: Option<String>,
    pub result: Result<StatusCounts, AnswerError>,
}
