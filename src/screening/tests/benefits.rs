use super::common::*;
use std::collections::HashSet;

use crate::screening::benefits::{evaluate_benefits, BenefitsEvaluator, ProgramCatalog, ProgramId};
use crate::screening::verdict::{EligibilityStatus, ReasonCode};

#[test]
fn snap_eligible_for_texas_family_under_gross_limit() {
    let answers = household("TX", 3, 30_000.0);

    let verdict = program_verdict(&answers, ProgramId::Snap);

    assert_eq!(verdict.status, EligibilityStatus::Eligible);
    assert_eq!(verdict.reason, ReasonCode::SnapWithinGrossLimit);
    assert_eq!(verdict.estimated_amount, 0);
}

#[test]
fn snap_bands_step_down_with_income() {
    let likely = program_verdict(&household("OH", 1, 28_000.0), ProgramId::Snap);
    assert_eq!(likely.status, EligibilityStatus::Likely);
    assert_eq!(likely.reason, ReasonCode::SnapBroadBasedEligibility);

    let unlikely = program_verdict(&household("OH", 1, 40_000.0), ProgramId::Snap);
    assert_eq!(unlikely.status, EligibilityStatus::Unlikely);
}

#[test]
fn medicaid_non_expansion_parent_above_fifty_percent_is_likely() {
    let answers = parent("TX", 4, 20_000.0);

    let verdict = program_verdict(&answers, ProgramId::Medicaid);

    assert_eq!(verdict.status, EligibilityStatus::Likely);
    assert_eq!(verdict.reason, ReasonCode::MedicaidNonExpansionCategorical);
}

#[test]
fn medicaid_non_expansion_parent_at_very_low_income_is_eligible() {
    let verdict = program_verdict(&parent("TX", 4, 15_000.0), ProgramId::Medicaid);
    assert_eq!(verdict.status, EligibilityStatus::Eligible);
    assert_eq!(verdict.reason, ReasonCode::MedicaidLowIncomeParent);
}

#[test]
fn medicaid_non_expansion_adult_without_children_is_unlikely_even_at_low_income() {
    let verdict = program_verdict(&household("TX", 1, 10_000.0), ProgramId::Medicaid);
    assert_eq!(verdict.status, EligibilityStatus::Unlikely);
    assert_eq!(verdict.reason, ReasonCode::MedicaidOverIncome);

    let mut pregnant = household("FL", 2, 60_000.0);
    pregnant.is_pregnant = true;
    let verdict = program_verdict(&pregnant, ProgramId::Medicaid);
    assert_eq!(verdict.status, EligibilityStatus::Likely);
}

#[test]
fn medicaid_expansion_states_use_138_and_200_percent_bands() {
    let eligible = program_verdict(&household("CA", 1, 21_000.0), ProgramId::Medicaid);
    assert_eq!(eligible.reason, ReasonCode::MedicaidExpansionWithinLimit);

    let likely = program_verdict(&household("CA", 1, 30_000.0), ProgramId::Medicaid);
    assert_eq!(likely.status, EligibilityStatus::Likely);
    assert_eq!(likely.reason, ReasonCode::MedicaidStateProgram);

    let unlikely = program_verdict(&household("CA", 1, 40_000.0), ProgramId::Medicaid);
    assert_eq!(unlikely.status, EligibilityStatus::Unlikely);
}

#[test]
fn chip_requires_children_regardless_of_income() {
    let verdict = program_verdict(&household("NY", 2, 0.0), ProgramId::Chip);
    assert_eq!(verdict.status, EligibilityStatus::Unlikely);
    assert_eq!(verdict.reason, ReasonCode::ChipNoChildren);

    let likely = program_verdict(&parent("NY", 3, 60_000.0), ProgramId::Chip);
    assert_eq!(likely.status, EligibilityStatus::Likely);

    let unlikely = program_verdict(&parent("NY", 3, 90_000.0), ProgramId::Chip);
    assert_eq!(unlikely.reason, ReasonCode::ChipOverIncome);
}

#[test]
fn wic_gates_on_pregnancy_or_young_children() {
    let verdict = program_verdict(&parent("IL", 2, 10_000.0), ProgramId::Wic);
    assert_eq!(verdict.reason, ReasonCode::WicNoEligibleMember);

    let mut expecting = household("IL", 2, 38_000.0);
    expecting.is_pregnant = true;
    let eligible = program_verdict(&expecting, ProgramId::Wic);
    assert_eq!(eligible.status, EligibilityStatus::Eligible);

    expecting.annual_income = 40_000.0;
    let unlikely = program_verdict(&expecting, ProgramId::Wic);
    assert_eq!(unlikely.status, EligibilityStatus::Unlikely);
    assert_eq!(unlikely.reason, ReasonCode::WicOverIncome { fpl_limit: 185 });
}

#[test]
fn liheap_threshold_is_inclusive() {
    let verdict = program_verdict(&household("MN", 2, 31_800.0), ProgramId::Liheap);
    assert_eq!(verdict.status, EligibilityStatus::Eligible);

    let likely = program_verdict(&household("MN", 2, 31_801.0), ProgramId::Liheap);
    assert_eq!(likely.status, EligibilityStatus::Likely);
}

#[test]
fn ssi_uses_monthly_income_after_age_or_disability_gate() {
    let mut senior = household("AZ", 1, 20_000.0);
    senior.age = 70;
    assert_eq!(
        program_verdict(&senior, ProgramId::Ssi).status,
        EligibilityStatus::Eligible
    );

    let mut disabled = household("AZ", 1, 30_000.0);
    disabled.has_disability = true;
    let likely = program_verdict(&disabled, ProgramId::Ssi);
    assert_eq!(likely.reason, ReasonCode::SsiComplexIncomeRules);

    let gate_failure = program_verdict(&household("AZ", 1, 0.0), ProgramId::Ssi);
    assert_eq!(gate_failure.status, EligibilityStatus::Unlikely);
    assert_eq!(gate_failure.reason, ReasonCode::SsiNotAgedOrDisabled);

    senior.age = 66;
    senior.annual_income = 48_000.0;
    let over_income = program_verdict(&senior, ProgramId::Ssi);
    assert_eq!(over_income.reason, ReasonCode::SsiOverIncome);
}

#[test]
fn tanf_bands_apply_only_to_families_with_children() {
    assert_eq!(
        program_verdict(&parent("GA", 3, 26_750.0), ProgramId::Tanf).status,
        EligibilityStatus::Eligible
    );
    assert_eq!(
        program_verdict(&parent("GA", 3, 35_000.0), ProgramId::Tanf).reason,
        ReasonCode::TanfStateRulesVary
    );
    assert_eq!(
        program_verdict(&household("GA", 3, 1_000.0), ProgramId::Tanf).reason,
        ReasonCode::TanfNoChildren
    );
}

#[test]
fn lifeline_is_never_unlikely() {
    for income in [0.0, 21_000.0, 250_000.0, 1_000_000.0] {
        let verdict = program_verdict(&household("WA", 1, income), ProgramId::Lifeline);
        assert_ne!(verdict.status, EligibilityStatus::Unlikely, "income {income}");
    }
}

#[test]
fn pell_bands_follow_percent_of_poverty() {
    assert_eq!(
        program_verdict(&household("VA", 1, 27_000.0), ProgramId::Pell).status,
        EligibilityStatus::Eligible
    );
    assert_eq!(
        program_verdict(&household("VA", 1, 50_000.0), ProgramId::Pell).status,
        EligibilityStatus::Likely
    );
    assert_eq!(
        program_verdict(&household("VA", 1, 60_000.0), ProgramId::Pell).status,
        EligibilityStatus::Unlikely
    );
}

#[test]
fn every_program_receives_exactly_one_verdict_in_status_order() {
    let catalog = ProgramCatalog::standard();
    for state in ["TX", "CA", "AK", "HI"] {
        for income in [0.0, 18_000.0, 45_000.0, 120_000.0] {
            let mut answers = parent(state, 3, income);
            answers.has_children_under_5 = true;
            let verdicts = evaluate_benefits(&answers);

            assert_eq!(verdicts.len(), catalog.len());
            let ids: HashSet<_> = verdicts.iter().map(|verdict| verdict.subject).collect();
            assert_eq!(ids.len(), catalog.len());
            assert_status_ordered(&verdicts);
        }
    }
}

#[test]
fn evaluation_is_idempotent() {
    let answers = parent("NM", 5, 41_250.0);
    let first = serde_json::to_vec(&evaluate_benefits(&answers)).expect("serializes");
    let second = serde_json::to_vec(&evaluate_benefits(&answers)).expect("serializes");
    assert_eq!(first, second);
}

#[test]
fn unvalidated_input_flows_through_the_arithmetic() {
    let mut answers = household("TX", 0, -5_000.0);
    answers.state = "ZZ".to_string();

    let verdicts = evaluate_benefits(&answers);

    assert_eq!(verdicts.len(), ProgramCatalog::standard().len());
    assert!(verdicts
        .iter()
        .any(|verdict| verdict.subject == ProgramId::Snap
            && verdict.status == EligibilityStatus::Eligible));
}

#[test]
fn evaluator_covers_only_the_catalog_it_was_given() {
    let programs = ProgramCatalog::standard()
        .programs()
        .iter()
        .filter(|program| matches!(program.id, ProgramId::Pell | ProgramId::Snap))
        .cloned()
        .collect();
    let catalog = ProgramCatalog::from_programs(programs).expect("valid catalog");

    let verdicts = BenefitsEvaluator::new(&catalog).evaluate(&household("OR", 1, 50_000.0));

    let ids: Vec<_> = verdicts.iter().map(|verdict| verdict.subject).collect();
    assert_eq!(ids, vec![ProgramId::Pell, ProgramId::Snap]);
}
