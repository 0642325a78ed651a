use super::super::answers::HouseholdAnswers;
use super::super::states::is_medicaid_expansion_state;
use super::super::verdict::{EligibilityStatus, ReasonCode};
use super::catalog::ProgramId;

use EligibilityStatus::{Eligible, Likely, Unlikely};

const SNAP_GROSS_LIMIT: f64 = 130.0;
const SNAP_BBCE_LIMIT: f64 = 200.0;
const MEDICAID_EXPANSION_LIMIT: f64 = 138.0;
const MEDICAID_PARENT_LIMIT: f64 = 50.0;
const MEDICAID_STATE_PROGRAM_LIMIT: f64 = 200.0;
const CHIP_LIMIT: f64 = 200.0;
const CHIP_EXTENDED_LIMIT: f64 = 300.0;
const WIC_LIMIT: u32 = 185;
const LIHEAP_LIMIT: f64 = 150.0;
const LIHEAP_EXTENDED_LIMIT: f64 = 200.0;
const SSI_AGE: u32 = 65;
const SSI_MONTHLY_LIMIT: f64 = 1971.0;
const SSI_MONTHLY_EXTENDED_LIMIT: f64 = 3000.0;
const TANF_LIMIT: f64 = 100.0;
const TANF_EXTENDED_LIMIT: f64 = 150.0;
const LIFELINE_LIMIT: f64 = 135.0;
const PELL_FULL_LIMIT: f64 = 175.0;
const PELL_PARTIAL_LIMIT: f64 = 350.0;

/// Signals shared by every program rule for one evaluation.
pub(crate) struct HouseholdSignals<'a> {
    pub answers: &'a HouseholdAnswers,
    pub percent_fpl: f64,
}

pub(crate) fn evaluate_program(
    id: ProgramId,
    signals: &HouseholdSignals<'_>,
) -> (EligibilityStatus, ReasonCode) {
    match id {
        ProgramId::Snap => snap(signals),
        ProgramId::Medicaid => medicaid(signals),
        ProgramId::Chip => chip(signals),
        ProgramId::Wic => wic(signals),
        ProgramId::Liheap => liheap(signals),
        ProgramId::Ssi => ssi(signals),
        ProgramId::Tanf => tanf(signals),
        ProgramId::Lifeline => lifeline(signals),
        ProgramId::Pell => pell(signals),
    }
}

fn snap(signals: &HouseholdSignals<'_>) -> (EligibilityStatus, ReasonCode) {
    if signals.percent_fpl <= SNAP_GROSS_LIMIT {
        (Eligible, ReasonCode::SnapWithinGrossLimit)
    } else if signals.percent_fpl <= SNAP_BBCE_LIMIT {
        (Likely, ReasonCode::SnapBroadBasedEligibility)
    } else {
        (Unlikely, ReasonCode::SnapOverIncome)
    }
}

fn medicaid(signals: &HouseholdSignals<'_>) -> (EligibilityStatus, ReasonCode) {
    let answers = signals.answers;
    let expansion = is_medicaid_expansion_state(&answers.state);
    let percent = signals.percent_fpl;

    if expansion && percent <= MEDICAID_EXPANSION_LIMIT {
        return (Eligible, ReasonCode::MedicaidExpansionWithinLimit);
    }
    if !expansion && percent <= MEDICAID_PARENT_LIMIT && answers.has_children_under_18 {
        return (Eligible, ReasonCode::MedicaidLowIncomeParent);
    }
    if !expansion && (answers.is_pregnant || answers.has_children_under_18) {
        return (Likely, ReasonCode::MedicaidNonExpansionCategorical);
    }
    if expansion && percent <= MEDICAID_STATE_PROGRAM_LIMIT {
        return (Likely, ReasonCode::MedicaidStateProgram);
    }
    (Unlikely, ReasonCode::MedicaidOverIncome)
}

fn chip(signals: &HouseholdSignals<'_>) -> (EligibilityStatus, ReasonCode) {
    if !signals.answers.has_children_under_18 {
        return (Unlikely, ReasonCode::ChipNoChildren);
    }
    if signals.percent_fpl <= CHIP_LIMIT {
        (Eligible, ReasonCode::ChipWithinLimit)
    } else if signals.percent_fpl <= CHIP_EXTENDED_LIMIT {
        (Likely, ReasonCode::ChipHigherStateLimit)
    } else {
        (Unlikely, ReasonCode::ChipOverIncome)
    }
}

fn wic(signals: &HouseholdSignals<'_>) -> (EligibilityStatus, ReasonCode) {
    let answers = signals.answers;
    if !(answers.is_pregnant || answers.has_children_under_5) {
        return (Unlikely, ReasonCode::WicNoEligibleMember);
    }
    if signals.percent_fpl <= f64::from(WIC_LIMIT) {
        (
            Eligible,
            ReasonCode::WicWithinLimit {
                fpl_limit: WIC_LIMIT,
            },
        )
    } else {
        (
            Unlikely,
            ReasonCode::WicOverIncome {
                fpl_limit: WIC_LIMIT,
            },
        )
    }
}

fn liheap(signals: &HouseholdSignals<'_>) -> (EligibilityStatus, ReasonCode) {
    if signals.percent_fpl <= LIHEAP_LIMIT {
        (Eligible, ReasonCode::LiheapWithinLimit)
    } else if signals.percent_fpl <= LIHEAP_EXTENDED_LIMIT {
        (Likely, ReasonCode::LiheapHigherStateLimit)
    } else {
        (Unlikely, ReasonCode::LiheapOverIncome)
    }
}

// Monthly dollar bands, not %FPL. Literal values carried over without policy verification.
fn ssi(signals: &HouseholdSignals<'_>) -> (EligibilityStatus, ReasonCode) {
    let answers = signals.answers;
    let monthly_income = answers.annual_income / 12.0;
    let aged_or_disabled = answers.age >= SSI_AGE || answers.has_disability;

    if !aged_or_disabled {
        return (Unlikely, ReasonCode::SsiNotAgedOrDisabled);
    }
    if monthly_income <= SSI_MONTHLY_LIMIT {
        (Eligible, ReasonCode::SsiWithinLimit)
    } else if monthly_income <= SSI_MONTHLY_EXTENDED_LIMIT {
        (Likely, ReasonCode::SsiComplexIncomeRules)
    } else {
        (Unlikely, ReasonCode::SsiOverIncome)
    }
}

fn tanf(signals: &HouseholdSignals<'_>) -> (EligibilityStatus, ReasonCode) {
    if !signals.answers.has_children_under_18 {
        return (Unlikely, ReasonCode::TanfNoChildren);
    }
    if signals.percent_fpl <= TANF_LIMIT {
        (Eligible, ReasonCode::TanfWithinLimit)
    } else if signals.percent_fpl <= TANF_EXTENDED_LIMIT {
        (Likely, ReasonCode::TanfStateRulesVary)
    } else {
        (Unlikely, ReasonCode::TanfOverIncome)
    }
}

// Never unlikely: enrollment in SNAP, Medicaid or SSI qualifies regardless of income.
fn lifeline(signals: &HouseholdSignals<'_>) -> (EligibilityStatus, ReasonCode) {
    if signals.percent_fpl <= LIFELINE_LIMIT {
        (Eligible, ReasonCode::LifelineWithinLimit)
    } else {
        (Likely, ReasonCode::LifelineQualifyingProgram)
    }
}

fn pell(signals: &HouseholdSignals<'_>) -> (EligibilityStatus, ReasonCode) {
    if signals.percent_fpl <= PELL_FULL_LIMIT {
        (Eligible, ReasonCode::PellSignificantAward)
    } else if signals.percent_fpl <= PELL_PARTIAL_LIMIT {
        (Likely, ReasonCode::PellPartialAward)
    } else {
        (Unlikely, ReasonCode::PellOverIncome)
    }
}
