use super::super::answers::{FilerAnswers, FilingStatus};
use super::super::verdict::{EligibilityStatus, ReasonCode};
use super::catalog::{
    ChildTaxParameters, CreditParameters, EarnedIncomeParameters, EducationParameters,
    SaversParameters,
};

use EligibilityStatus::{Eligible, Unlikely};

const CTC_PHASE_OUT_STEP: f64 = 1000.0;
const CTC_PHASE_OUT_REDUCTION: f64 = 50.0;
const SAVERS_MINIMUM_AGE: u32 = 18;

pub(crate) struct CreditOutcome {
    pub status: EligibilityStatus,
    pub reason: ReasonCode,
    pub amount: u32,
}

impl CreditOutcome {
    fn eligible(reason: ReasonCode, amount: u32) -> Self {
        Self {
            status: Eligible,
            reason,
            amount,
        }
    }

    fn unlikely(reason: ReasonCode) -> Self {
        Self {
            status: Unlikely,
            reason,
            amount: 0,
        }
    }
}

pub(crate) fn evaluate_credit(
    parameters: &CreditParameters,
    answers: &FilerAnswers,
) -> CreditOutcome {
    match parameters {
        CreditParameters::EarnedIncome(params) => earned_income(params, answers),
        CreditParameters::ChildTax(params) => child_tax(params, answers),
        CreditParameters::Savers(params) => savers(params, answers),
        CreditParameters::Education(params) => education(params, answers),
    }
}

/// Linear approximation of the EITC table: full credit for the lower half of the eligible
/// range, tapering to zero at the limit. The real schedule has phase-in and plateau segments.
fn earned_income(params: &EarnedIncomeParameters, answers: &FilerAnswers) -> CreditOutcome {
    if !answers.is_employed {
        return CreditOutcome::unlikely(ReasonCode::EitcNoEarnedIncome);
    }

    let tier = params.tier(answers.num_children);
    let limit = if answers.filing_status.is_married() {
        tier.income_limit_married
    } else {
        tier.income_limit_single
    };
    let limit = f64::from(limit);

    if answers.annual_income > limit {
        return CreditOutcome::unlikely(ReasonCode::EitcOverIncome);
    }

    let ratio = 1.0 - answers.annual_income / limit;
    let estimated = (f64::from(tier.max_credit) * (ratio * 2.0).min(1.0)).round();
    CreditOutcome::eligible(
        ReasonCode::EitcWithinLimit {
            qualifying_children: answers.num_children,
        },
        estimated as u32,
    )
}

fn child_tax(params: &ChildTaxParameters, answers: &FilerAnswers) -> CreditOutcome {
    if answers.children_under_17 == 0 {
        return CreditOutcome::unlikely(ReasonCode::CtcNoQualifyingChildren);
    }

    let phase_out = if answers.filing_status.is_married() {
        params.phase_out_married
    } else {
        params.phase_out_single
    };
    let full = answers.children_under_17.saturating_mul(params.per_child);

    if answers.annual_income <= f64::from(phase_out) {
        return CreditOutcome::eligible(
            ReasonCode::CtcFullCredit {
                per_child: params.per_child,
            },
            full,
        );
    }

    let steps = ((answers.annual_income - f64::from(phase_out)) / CTC_PHASE_OUT_STEP).floor();
    let remaining = f64::from(full) - steps * CTC_PHASE_OUT_REDUCTION;
    if remaining > 0.0 {
        // bounded by `full`, so the cast is exact
        CreditOutcome::eligible(ReasonCode::CtcPhaseOutReduced, remaining as u32)
    } else {
        CreditOutcome::unlikely(ReasonCode::CtcPhasedOut)
    }
}

fn savers(params: &SaversParameters, answers: &FilerAnswers) -> CreditOutcome {
    if answers.age < SAVERS_MINIMUM_AGE || answers.is_student {
        return CreditOutcome::unlikely(ReasonCode::SaversAgeOrStudent);
    }
    if !answers.contributes_to_retirement {
        return CreditOutcome::unlikely(ReasonCode::SaversNoContributions);
    }

    let (tiers, max_contribution) = match answers.filing_status {
        FilingStatus::Single => (&params.single, params.max_contribution_single),
        FilingStatus::Married => (&params.married, params.max_contribution_married),
        FilingStatus::HeadOfHousehold => {
            (&params.head_of_household, params.max_contribution_single)
        }
    };

    let rate = tiers
        .iter()
        .find(|tier| answers.annual_income <= f64::from(tier.income_limit))
        .map(|tier| tier.rate_percent)
        .unwrap_or(0);

    if rate == 0 {
        return CreditOutcome::unlikely(ReasonCode::SaversOverIncome);
    }

    let estimated = (f64::from(max_contribution) * f64::from(rate) / 100.0).round();
    CreditOutcome::eligible(
        ReasonCode::SaversRate {
            rate_percent: rate,
            max_contribution,
        },
        estimated as u32,
    )
}

fn education(params: &EducationParameters, answers: &FilerAnswers) -> CreditOutcome {
    if !answers.is_enrolled_in_college {
        return CreditOutcome::unlikely(ReasonCode::AocNotEnrolled);
    }

    let limit = if answers.filing_status.is_married() {
        params.income_limit_married
    } else {
        params.income_limit_single
    };

    if answers.annual_income <= f64::from(limit) {
        CreditOutcome::eligible(
            ReasonCode::AocWithinLimit {
                max_credit: params.max_credit,
            },
            params.max_credit,
        )
    } else {
        CreditOutcome::unlikely(ReasonCode::AocOverIncome)
    }
}
