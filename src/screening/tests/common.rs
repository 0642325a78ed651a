use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::screening::answers::{FilerAnswers, FilingStatus, HouseholdAnswers};
use crate::screening::benefits::{evaluate_benefits, BenefitVerdict, ProgramId};
use crate::screening::tax::{evaluate_tax_credits, CreditId, TaxCreditVerdict};
use crate::screening::verdict::{EligibilityStatus, EligibilityVerdict};

pub(super) fn household(state: &str, household_size: u32, annual_income: f64) -> HouseholdAnswers {
    HouseholdAnswers {
        state: state.to_string(),
        household_size,
        annual_income,
        age: 34,
        is_pregnant: false,
        has_children_under_5: false,
        has_children_under_18: false,
        has_disability: false,
        is_employed: true,
        is_student: false,
    }
}

pub(super) fn parent(state: &str, household_size: u32, annual_income: f64) -> HouseholdAnswers {
    HouseholdAnswers {
        has_children_under_18: true,
        ..household(state, household_size, annual_income)
    }
}

pub(super) fn filer(filing_status: FilingStatus, annual_income: f64) -> FilerAnswers {
    FilerAnswers {
        annual_income,
        filing_status,
        num_children: 0,
        children_under_17: 0,
        age: 30,
        is_student: false,
        contributes_to_retirement: false,
        is_enrolled_in_college: false,
        is_employed: true,
    }
}

pub(super) fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid date")
}

pub(super) fn program_verdict(answers: &HouseholdAnswers, id: ProgramId) -> BenefitVerdict {
    evaluate_benefits(answers)
        .into_iter()
        .find(|verdict| verdict.subject == id)
        .expect("program evaluated")
}

pub(super) fn credit_verdict(answers: &FilerAnswers, id: CreditId) -> TaxCreditVerdict {
    evaluate_tax_credits(answers)
        .into_iter()
        .find(|verdict| verdict.subject == id)
        .expect("credit evaluated")
}

pub(super) fn assert_status_ordered<S: std::fmt::Debug>(verdicts: &[EligibilityVerdict<S>]) {
    let statuses: Vec<EligibilityStatus> = verdicts.iter().map(|verdict| verdict.status).collect();
    assert!(
        statuses.windows(2).all(|pair| pair[0] <= pair[1]),
        "verdicts out of order: {verdicts:?}"
    );
}

pub(super) async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}
