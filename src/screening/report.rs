//! Report views joining verdicts with catalog display data.

use chrono::NaiveDate;
use serde::Serialize;

use super::answers::{FilerAnswers, FilingStatus, HouseholdAnswers};
use super::benefits::{BenefitEstimate, BenefitVerdict, ProgramCatalog, ProgramCategory, ProgramId};
use super::catalog::Locale;
use super::poverty::{federal_poverty_level, percent_of_fpl};
use super::tax::{
    free_filing_resources, CreditId, FilingResource, TaxCreditCatalog, TaxCreditVerdict,
};
use super::verdict::{total_eligible_amount, EligibilityStatus, EligibilityVerdict, ReasonCode};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub eligible: usize,
    pub likely: usize,
    pub unlikely: usize,
}

impl StatusCounts {
    pub fn tally<S>(verdicts: &[EligibilityVerdict<S>]) -> Self {
        verdicts
            .iter()
            .fold(Self::default(), |mut counts, verdict| {
                match verdict.status {
                    EligibilityStatus::Eligible => counts.eligible += 1,
                    EligibilityStatus::Likely => counts.likely += 1,
                    EligibilityStatus::Unlikely => counts.unlikely += 1,
                }
                counts
            })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgramResultView {
    pub id: ProgramId,
    pub name: String,
    pub description: String,
    pub category: ProgramCategory,
    pub category_label: &'static str,
    pub status: EligibilityStatus,
    pub reason: ReasonCode,
    pub reason_message: String,
    pub estimated_benefit: BenefitEstimate,
    pub estimated_benefit_label: String,
    pub apply_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BenefitsReport {
    pub generated_on: NaiveDate,
    pub state: String,
    pub household_size: u32,
    pub poverty_level: u32,
    pub percent_fpl: f64,
    pub counts: StatusCounts,
    pub programs: Vec<ProgramResultView>,
}

impl BenefitsReport {
    pub fn build(
        answers: &HouseholdAnswers,
        verdicts: &[BenefitVerdict],
        catalog: &ProgramCatalog,
        locale: Locale,
        generated_on: NaiveDate,
    ) -> Self {
        let programs = verdicts
            .iter()
            .filter_map(|verdict| {
                let program = catalog.get(verdict.subject)?;
                let estimate = program.estimate_benefit(answers.household_size);
                Some(ProgramResultView {
                    id: program.id,
                    name: program.name.get(locale).to_string(),
                    description: program.description.get(locale).to_string(),
                    category: program.category,
                    category_label: program.category.label(locale),
                    status: verdict.status,
                    reason: verdict.reason.clone(),
                    reason_message: verdict.reason.message(),
                    estimated_benefit_label: estimate.label(),
                    estimated_benefit: estimate,
                    apply_url: program.apply_url.clone(),
                })
            })
            .collect();

        Self {
            generated_on,
            state: answers.state.trim().to_ascii_uppercase(),
            household_size: answers.household_size,
            poverty_level: federal_poverty_level(answers.household_size, &answers.state),
            percent_fpl: percent_of_fpl(
                answers.annual_income,
                answers.household_size,
                &answers.state,
            ),
            counts: StatusCounts::tally(verdicts),
            programs,
        }
    }

    pub fn with_status(
        &self,
        status: EligibilityStatus,
    ) -> impl Iterator<Item = &ProgramResultView> + '_ {
        self.programs
            .iter()
            .filter(move |view| view.status == status)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreditResultView {
    pub id: CreditId,
    pub name: String,
    pub description: String,
    pub requirements: String,
    pub status: EligibilityStatus,
    pub reason: ReasonCode,
    pub reason_message: String,
    pub estimated_amount: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilingResourceView {
    pub name: String,
    pub description: String,
    pub url: String,
}

impl FilingResourceView {
    fn from_resource(resource: &FilingResource, locale: Locale) -> Self {
        Self {
            name: resource.name.get(locale).to_string(),
            description: resource.description.get(locale).to_string(),
            url: resource.url.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TaxCreditReport {
    pub generated_on: NaiveDate,
    pub filing_status: FilingStatus,
    pub total_estimated: u32,
    pub counts: StatusCounts,
    pub credits: Vec<CreditResultView>,
    pub filing_resources: Vec<FilingResourceView>,
}

impl TaxCreditReport {
    pub fn build(
        answers: &FilerAnswers,
        verdicts: &[TaxCreditVerdict],
        catalog: &TaxCreditCatalog,
        locale: Locale,
        generated_on: NaiveDate,
    ) -> Self {
        let credits = verdicts
            .iter()
            .filter_map(|verdict| {
                let credit = catalog.get(verdict.subject)?;
                Some(CreditResultView {
                    id: credit.id,
                    name: credit.name.get(locale).to_string(),
                    description: credit.description.get(locale).to_string(),
                    requirements: credit.requirements.get(locale).to_string(),
                    status: verdict.status,
                    reason: verdict.reason.clone(),
                    reason_message: verdict.reason.message(),
                    estimated_amount: verdict.estimated_amount,
                })
            })
            .collect();

        let filing_resources = free_filing_resources(answers.annual_income)
            .into_iter()
            .map(|resource| FilingResourceView::from_resource(resource, locale))
            .collect();

        Self {
            generated_on,
            filing_status: answers.filing_status,
            total_estimated: total_eligible_amount(verdicts),
            counts: StatusCounts::tally(verdicts),
            credits,
            filing_resources,
        }
    }
}
