use serde::{Deserialize, Serialize};

use super::states::state_by_code;

/// Largest household the questionnaire accepts.
pub const MAX_HOUSEHOLD_SIZE: u32 = 50;
/// Largest child count accepted on the tax questionnaire.
pub const MAX_CHILDREN: u32 = 30;

/// Household snapshot collected by the benefits questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseholdAnswers {
    pub state: String,
    pub household_size: u32,
    pub annual_income: f64,
    pub age: u32,
    pub is_pregnant: bool,
    pub has_children_under_5: bool,
    pub has_children_under_18: bool,
    pub has_disability: bool,
    pub is_employed: bool,
    #[serde(default)]
    pub is_student: bool,
}

impl HouseholdAnswers {
    /// Rejects answers the evaluators would otherwise process arithmetically.
    pub fn validate(&self) -> Result<(), AnswerError> {
        if state_by_code(&self.state).is_none() {
            return Err(AnswerError::UnknownState(self.state.clone()));
        }
        if self.household_size == 0 {
            return Err(AnswerError::EmptyHousehold);
        }
        if self.household_size > MAX_HOUSEHOLD_SIZE {
            return Err(AnswerError::HouseholdTooLarge(self.household_size));
        }
        check_income(self.annual_income)?;
        if self.age == 0 {
            return Err(AnswerError::InvalidAge);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingStatus {
    Single,
    Married,
    #[serde(alias = "hoh")]
    HeadOfHousehold,
}

impl FilingStatus {
    pub const fn is_married(self) -> bool {
        matches!(self, FilingStatus::Married)
    }

    pub const fn label(self) -> &'static str {
        match self {
            FilingStatus::Single => "single",
            FilingStatus::Married => "married filing jointly",
            FilingStatus::HeadOfHousehold => "head of household",
        }
    }
}

/// Filer snapshot collected by the tax-credit questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilerAnswers {
    pub annual_income: f64,
    pub filing_status: FilingStatus,
    pub num_children: u32,
    pub children_under_17: u32,
    pub age: u32,
    pub is_student: bool,
    pub contributes_to_retirement: bool,
    pub is_enrolled_in_college: bool,
    pub is_employed: bool,
}

impl FilerAnswers {
    pub fn validate(&self) -> Result<(), AnswerError> {
        check_income(self.annual_income)?;
        if self.age == 0 {
            return Err(AnswerError::InvalidAge);
        }
        let most_children = self.num_children.max(self.children_under_17);
        if most_children > MAX_CHILDREN {
            return Err(AnswerError::TooManyChildren(most_children));
        }
        Ok(())
    }
}

fn check_income(annual_income: f64) -> Result<(), AnswerError> {
    if !annual_income.is_finite() || annual_income < 0.0 {
        return Err(AnswerError::InvalidIncome(annual_income));
    }
    Ok(())
}

/// Raised when answers fail validation ahead of evaluation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnswerError {
    #[error("unknown state code '{0}'")]
    UnknownState(String),
    #[error("household size must be at least 1")]
    EmptyHousehold,
    #[error("household size {0} exceeds the maximum of {max}", max = MAX_HOUSEHOLD_SIZE)]
    HouseholdTooLarge(u32),
    #[error("annual income must be a non-negative amount (got {0})")]
    InvalidIncome(f64),
    #[error("age must be a positive number of years")]
    InvalidAge,
    #[error("child count {0} exceeds the maximum of {max}", max = MAX_CHILDREN)]
    TooManyChildren(u32),
}
