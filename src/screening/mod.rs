//! Eligibility screening for public-benefit programs and tax credits.
//!
//! The evaluators are pure: they take an answer snapshot and the read-only catalogs and return a
//! fresh, status-ordered list of verdicts. Reports, batch import and the HTTP router build on
//! top of them.

pub mod answers;
pub mod benefits;
pub mod catalog;
pub mod import;
pub mod poverty;
pub mod report;
pub mod router;
pub mod service;
pub mod states;
pub mod tax;
pub mod verdict;

#[cfg(test)]
mod tests;

pub use answers::{AnswerError, FilerAnswers, FilingStatus, HouseholdAnswers};
pub use benefits::{evaluate_benefits, BenefitVerdict, BenefitsEvaluator, ProgramCatalog, ProgramId};
pub use catalog::{CatalogError, Locale, LocalizedText};
pub use import::{BatchImportError, HouseholdCsvImporter, ImportedHousehold};
pub use poverty::{federal_poverty_level, income_at_percent, percent_of_fpl};
pub use report::{BenefitsReport, StatusCounts, TaxCreditReport};
pub use router::screening_router;
pub use service::{BatchOutcome, ScreeningService, ValidationMode};
pub use states::{is_medicaid_expansion_state, state_by_code, UsState};
pub use tax::{
    evaluate_tax_credits, CreditId, TaxCreditCatalog, TaxCreditEvaluator, TaxCreditVerdict,
};
pub use verdict::{total_eligible_amount, EligibilityStatus, EligibilityVerdict, ReasonCode};
