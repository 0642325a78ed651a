use serde::{Deserialize, Serialize};

/// Screening outcome for a single program or credit.
///
/// Variants are declared in report order so the derived `Ord` ranks eligible first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityStatus {
    Eligible,
    Likely,
    Unlikely,
}

impl EligibilityStatus {
    pub const fn label(self) -> &'static str {
        match self {
            EligibilityStatus::Eligible => "eligible",
            EligibilityStatus::Likely => "likely",
            EligibilityStatus::Unlikely => "unlikely",
        }
    }
}

/// Stable justification codes. Presentation layers localize these; `message` is the English
/// rendering used by the CLI and API payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum ReasonCode {
    SnapWithinGrossLimit,
    SnapBroadBasedEligibility,
    SnapOverIncome,
    MedicaidExpansionWithinLimit,
    MedicaidLowIncomeParent,
    MedicaidNonExpansionCategorical,
    MedicaidStateProgram,
    MedicaidOverIncome,
    ChipNoChildren,
    ChipWithinLimit,
    ChipHigherStateLimit,
    ChipOverIncome,
    WicNoEligibleMember,
    WicWithinLimit { fpl_limit: u32 },
    WicOverIncome { fpl_limit: u32 },
    LiheapWithinLimit,
    LiheapHigherStateLimit,
    LiheapOverIncome,
    SsiWithinLimit,
    SsiComplexIncomeRules,
    SsiNotAgedOrDisabled,
    SsiOverIncome,
    TanfNoChildren,
    TanfWithinLimit,
    TanfStateRulesVary,
    TanfOverIncome,
    LifelineWithinLimit,
    LifelineQualifyingProgram,
    PellSignificantAward,
    PellPartialAward,
    PellOverIncome,
    EitcNoEarnedIncome,
    EitcWithinLimit { qualifying_children: u32 },
    EitcOverIncome,
    CtcNoQualifyingChildren,
    CtcFullCredit { per_child: u32 },
    CtcPhaseOutReduced,
    CtcPhasedOut,
    SaversAgeOrStudent,
    SaversNoContributions,
    SaversRate { rate_percent: u32, max_contribution: u32 },
    SaversOverIncome,
    AocNotEnrolled,
    AocWithinLimit { max_credit: u32 },
    AocOverIncome,
}

impl ReasonCode {
    /// Snake-case identifier matching the serialized `code` tag.
    pub const fn key(&self) -> &'static str {
        match self {
            ReasonCode::SnapWithinGrossLimit => "snap_within_gross_limit",
            ReasonCode::SnapBroadBasedEligibility => "snap_broad_based_eligibility",
            ReasonCode::SnapOverIncome => "snap_over_income",
            ReasonCode::MedicaidExpansionWithinLimit => "medicaid_expansion_within_limit",
            ReasonCode::MedicaidLowIncomeParent => "medicaid_low_income_parent",
            ReasonCode::MedicaidNonExpansionCategorical => "medicaid_non_expansion_categorical",
            ReasonCode::MedicaidStateProgram => "medicaid_state_program",
            ReasonCode::MedicaidOverIncome => "medicaid_over_income",
            ReasonCode::ChipNoChildren => "chip_no_children",
            ReasonCode::ChipWithinLimit => "chip_within_limit",
            ReasonCode::ChipHigherStateLimit => "chip_higher_state_limit",
            ReasonCode::ChipOverIncome => "chip_over_income",
            ReasonCode::WicNoEligibleMember => "wic_no_eligible_member",
            ReasonCode::WicWithinLimit { .. } => "wic_within_limit",
            ReasonCode::WicOverIncome { .. } => "wic_over_income",
            ReasonCode::LiheapWithinLimit => "liheap_within_limit",
            ReasonCode::LiheapHigherStateLimit => "liheap_higher_state_limit",
            ReasonCode::LiheapOverIncome => "liheap_over_income",
            ReasonCode::SsiWithinLimit => "ssi_within_limit",
            ReasonCode::SsiComplexIncomeRules => "ssi_complex_income_rules",
            ReasonCode::SsiNotAgedOrDisabled => "ssi_not_aged_or_disabled",
            ReasonCode::SsiOverIncome => "ssi_over_income",
            ReasonCode::TanfNoChildren => "tanf_no_children",
            ReasonCode::TanfWithinLimit => "tanf_within_limit",
            ReasonCode::TanfStateRulesVary => "tanf_state_rules_vary",
            ReasonCode::TanfOverIncome => "tanf_over_income",
            ReasonCode::LifelineWithinLimit => "lifeline_within_limit",
            ReasonCode::LifelineQualifyingProgram => "lifeline_qualifying_program",
            ReasonCode::PellSignificantAward => "pell_significant_award",
            ReasonCode::PellPartialAward => "pell_partial_award",
            ReasonCode::PellOverIncome => "pell_over_income",
            ReasonCode::EitcNoEarnedIncome => "eitc_no_earned_income",
            ReasonCode::EitcWithinLimit { .. } => "eitc_within_limit",
            ReasonCode::EitcOverIncome => "eitc_over_income",
            ReasonCode::CtcNoQualifyingChildren => "ctc_no_qualifying_children",
            ReasonCode::CtcFullCredit { .. } => "ctc_full_credit",
            ReasonCode::CtcPhaseOutReduced => "ctc_phase_out_reduced",
            ReasonCode::CtcPhasedOut => "ctc_phased_out",
            ReasonCode::SaversAgeOrStudent => "savers_age_or_student",
            ReasonCode::SaversNoContributions => "savers_no_contributions",
            ReasonCode::SaversRate { .. } => "savers_rate",
            ReasonCode::SaversOverIncome => "savers_over_income",
            ReasonCode::AocNotEnrolled => "aoc_not_enrolled",
            ReasonCode::AocWithinLimit { .. } => "aoc_within_limit",
            ReasonCode::AocOverIncome => "aoc_over_income",
        }
    }

    pub fn message(&self) -> String {
        match self {
            ReasonCode::SnapWithinGrossLimit => {
                "Your income is within the SNAP gross income limit.".to_string()
            }
            ReasonCode::SnapBroadBasedEligibility => "Some states have expanded SNAP eligibility (Broad-Based Categorical Eligibility). You may qualify in your state.".to_string(),
            ReasonCode::SnapOverIncome => "Your income appears to exceed SNAP limits, but you may still qualify if you have high housing or childcare costs.".to_string(),
            ReasonCode::MedicaidExpansionWithinLimit => {
                "Your state expanded Medicaid and your income is within the limit.".to_string()
            }
            ReasonCode::MedicaidLowIncomeParent => "As a parent with very low income, you likely qualify even without Medicaid expansion.".to_string(),
            ReasonCode::MedicaidNonExpansionCategorical => "Your state has not expanded Medicaid, but pregnant women and children often have higher income limits.".to_string(),
            ReasonCode::MedicaidStateProgram => {
                "You may qualify through state-specific programs or if your income decreases."
                    .to_string()
            }
            ReasonCode::MedicaidOverIncome => {
                "Your income may exceed Medicaid limits in your state.".to_string()
            }
            ReasonCode::ChipNoChildren => "CHIP is for children under 19.".to_string(),
            ReasonCode::ChipWithinLimit => {
                "Your income is within typical CHIP limits and you have children.".to_string()
            }
            ReasonCode::ChipHigherStateLimit => {
                "Many states cover children at higher income levels through CHIP.".to_string()
            }
            ReasonCode::ChipOverIncome => {
                "Your income may exceed CHIP limits in your state.".to_string()
            }
            ReasonCode::WicNoEligibleMember => {
                "WIC is for pregnant/postpartum women, infants, and children under 5.".to_string()
            }
            ReasonCode::WicWithinLimit { .. } => "Your income is within WIC limits and your household includes an eligible person.".to_string(),
            ReasonCode::WicOverIncome { fpl_limit } => {
                format!("Your income appears to exceed WIC limits ({fpl_limit}% FPL).")
            }
            ReasonCode::LiheapWithinLimit => "Your income is within LIHEAP limits.".to_string(),
            ReasonCode::LiheapHigherStateLimit => {
                "Some states have higher LIHEAP income limits. You may qualify.".to_string()
            }
            ReasonCode::LiheapOverIncome => {
                "Your income appears to exceed LIHEAP limits.".to_string()
            }
            ReasonCode::SsiWithinLimit => "You meet the age/disability requirement and your income is within SSI limits.".to_string(),
            ReasonCode::SsiComplexIncomeRules => "You meet the age/disability requirement. SSI has complex income rules and not all income is counted.".to_string(),
            ReasonCode::SsiNotAgedOrDisabled => {
                "SSI requires age 65+ or a qualifying disability.".to_string()
            }
            ReasonCode::SsiOverIncome => "Your income may exceed SSI limits.".to_string(),
            ReasonCode::TanfNoChildren => {
                "TANF is primarily for families with children.".to_string()
            }
            ReasonCode::TanfWithinLimit => {
                "Your income is within typical TANF limits and you have children.".to_string()
            }
            ReasonCode::TanfStateRulesVary => "TANF limits vary by state. You may qualify depending on your state's rules.".to_string(),
            ReasonCode::TanfOverIncome => {
                "Your income may exceed TANF limits in your state.".to_string()
            }
            ReasonCode::LifelineWithinLimit => "Your income is within Lifeline limits.".to_string(),
            ReasonCode::LifelineQualifyingProgram => "You may qualify for Lifeline if you participate in SNAP, Medicaid, SSI, or other qualifying programs.".to_string(),
            ReasonCode::PellSignificantAward => "Based on your income, you would likely receive a significant Pell Grant if enrolled in college.".to_string(),
            ReasonCode::PellPartialAward => {
                "You may qualify for a partial Pell Grant if enrolled in college.".to_string()
            }
            ReasonCode::PellOverIncome => "Your income may be too high for a Pell Grant.".to_string(),
            ReasonCode::EitcNoEarnedIncome => {
                "EITC requires earned income from employment or self-employment.".to_string()
            }
            ReasonCode::EitcWithinLimit {
                qualifying_children,
            } => {
                let noun = if *qualifying_children == 1 {
                    "child"
                } else {
                    "children"
                };
                format!(
                    "Your income is within EITC limits for {qualifying_children} qualifying {noun}."
                )
            }
            ReasonCode::EitcOverIncome => "Your income exceeds EITC limits for your filing status and number of children.".to_string(),
            ReasonCode::CtcNoQualifyingChildren => {
                "The Child Tax Credit requires qualifying children under 17.".to_string()
            }
            ReasonCode::CtcFullCredit { per_child } => {
                format!("${} per qualifying child under 17.", dollars(*per_child))
            }
            ReasonCode::CtcPhaseOutReduced => {
                "Your credit is reduced due to income phase-out.".to_string()
            }
            ReasonCode::CtcPhasedOut => {
                "Your income exceeds the Child Tax Credit phase-out range.".to_string()
            }
            ReasonCode::SaversAgeOrStudent => {
                "Must be 18+ and not a full-time student.".to_string()
            }
            ReasonCode::SaversNoContributions => "Requires contributions to a retirement account (401k, IRA, etc.). If you start contributing, you could qualify.".to_string(),
            ReasonCode::SaversRate {
                rate_percent,
                max_contribution,
            } => format!(
                "You could get a {rate_percent}% credit on retirement contributions up to ${}.",
                dollars(*max_contribution)
            ),
            ReasonCode::SaversOverIncome => {
                "Your income exceeds Saver's Credit limits for your filing status.".to_string()
            }
            ReasonCode::AocNotEnrolled => "This credit is for students enrolled at least half-time in college. If you plan to enroll, you could qualify.".to_string(),
            ReasonCode::AocWithinLimit { max_credit } => format!(
                "Up to ${}/year for tuition, fees, and course materials.",
                dollars(*max_credit)
            ),
            ReasonCode::AocOverIncome => {
                "Your income exceeds the American Opportunity Credit limits.".to_string()
            }
        }
    }
}

/// Per-entry screening result. `S` identifies the program or credit that was evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityVerdict<S> {
    pub subject: S,
    pub status: EligibilityStatus,
    pub reason: ReasonCode,
    pub estimated_amount: u32,
}

impl<S> EligibilityVerdict<S> {
    pub fn new(subject: S, status: EligibilityStatus, reason: ReasonCode) -> Self {
        Self {
            subject,
            status,
            reason,
            estimated_amount: 0,
        }
    }

    pub fn with_amount(mut self, estimated_amount: u32) -> Self {
        self.estimated_amount = estimated_amount;
        self
    }
}

/// Orders verdicts eligible, likely, unlikely. Catalog order is kept within a status.
pub fn sort_by_status<S>(verdicts: &mut [EligibilityVerdict<S>]) {
    verdicts.sort_by_key(|verdict| verdict.status);
}

/// Sum of estimated amounts across eligible verdicts, saturating at `u32::MAX`.
pub fn total_eligible_amount<S>(results: &[EligibilityVerdict<S>]) -> u32 {
    results
        .iter()
        .filter(|verdict| verdict.status == EligibilityStatus::Eligible)
        .fold(0u32, |total, verdict| {
            total.saturating_add(verdict.estimated_amount)
        })
}

/// Formats whole dollars with thousands separators.
pub(crate) fn dollars(amount: u32) -> String {
    let digits = amount.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(ch);
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_only_count_eligible_verdicts() {
        let results = vec![
            EligibilityVerdict::new("a", EligibilityStatus::Unlikely, ReasonCode::EitcOverIncome),
            EligibilityVerdict::new("b", EligibilityStatus::Eligible, ReasonCode::CtcPhaseOutReduced)
                .with_amount(1200),
            EligibilityVerdict::new(
                "c",
                EligibilityStatus::Eligible,
                ReasonCode::AocWithinLimit { max_credit: 800 },
            )
            .with_amount(800),
        ];

        assert_eq!(total_eligible_amount(&results), 2000);
    }

    #[test]
    fn totals_ignore_amounts_on_non_eligible_verdicts() {
        let results = vec![EligibilityVerdict::new(
            "a",
            EligibilityStatus::Likely,
            ReasonCode::LifelineQualifyingProgram,
        )
        .with_amount(500)];
        assert_eq!(total_eligible_amount(&results), 0);
        assert_eq!(total_eligible_amount::<&str>(&[]), 0);
    }

    #[test]
    fn totals_saturate_instead_of_overflowing() {
        let results = vec![
            EligibilityVerdict::new("a", EligibilityStatus::Eligible, ReasonCode::CtcPhaseOutReduced)
                .with_amount(u32::MAX - 10),
            EligibilityVerdict::new(
                "b",
                EligibilityStatus::Eligible,
                ReasonCode::AocWithinLimit { max_credit: 2500 },
            )
            .with_amount(2500),
        ];
        assert_eq!(total_eligible_amount(&results), u32::MAX);
    }

    #[test]
    fn sorting_is_stable_within_status_groups() {
        let mut results = vec![
            EligibilityVerdict::new(1, EligibilityStatus::Unlikely, ReasonCode::SnapOverIncome),
            EligibilityVerdict::new(2, EligibilityStatus::Likely, ReasonCode::ChipHigherStateLimit),
            EligibilityVerdict::new(3, EligibilityStatus::Eligible, ReasonCode::LiheapWithinLimit),
            EligibilityVerdict::new(4, EligibilityStatus::Likely, ReasonCode::PellPartialAward),
            EligibilityVerdict::new(5, EligibilityStatus::Eligible, ReasonCode::TanfWithinLimit),
        ];

        sort_by_status(&mut results);

        let order: Vec<_> = results.iter().map(|verdict| verdict.subject).collect();
        assert_eq!(order, vec![3, 5, 2, 4, 1]);
    }

    #[test]
    fn reason_codes_serialize_with_tag_and_params() {
        let value = serde_json::to_value(ReasonCode::SaversRate {
            rate_percent: 20,
            max_contribution: 2000,
        })
        .expect("serializes");
        assert_eq!(value["code"], "savers_rate");
        assert_eq!(value["rate_percent"], 20);

        let unit = serde_json::to_value(ReasonCode::SnapOverIncome).expect("serializes");
        assert_eq!(unit["code"], ReasonCode::SnapOverIncome.key());
    }

    #[test]
    fn messages_interpolate_parameters() {
        assert_eq!(
            ReasonCode::CtcFullCredit { per_child: 2000 }.message(),
            "$2,000 per qualifying child under 17."
        );
        assert!(ReasonCode::EitcWithinLimit {
            qualifying_children: 1
        }
        .message()
        .ends_with("1 qualifying child."));
        assert_eq!(dollars(1_234_567), "1,234,567");
        assert_eq!(dollars(999), "999");
    }
}
