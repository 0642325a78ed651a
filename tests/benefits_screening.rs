use benefit_screener::screening::{
    evaluate_benefits, federal_poverty_level, percent_of_fpl, BenefitsReport, EligibilityStatus,
    HouseholdAnswers, HouseholdCsvImporter, Locale, ProgramCatalog, ProgramId, ReasonCode,
    ScreeningService,
};
use chrono::NaiveDate;

fn answers(state: &str, household_size: u32, annual_income: f64) -> HouseholdAnswers {
    HouseholdAnswers {
        state: state.to_string(),
        household_size,
        annual_income,
        age: 38,
        is_pregnant: false,
        has_children_under_5: false,
        has_children_under_18: false,
        has_disability: false,
        is_employed: true,
        is_student: false,
    }
}

#[test]
fn texas_family_of_three_qualifies_for_food_assistance() {
    let household = HouseholdAnswers {
        has_children_under_18: true,
        has_children_under_5: true,
        ..answers("TX", 3, 30_000.0)
    };

    let verdicts = evaluate_benefits(&household);

    assert_eq!(verdicts.len(), ProgramCatalog::standard().len());
    let snap = verdicts
        .iter()
        .find(|verdict| verdict.subject == ProgramId::Snap)
        .expect("snap evaluated");
    assert_eq!(snap.status, EligibilityStatus::Eligible);
    assert!(snap.reason.message().contains("gross income limit"));

    let wic = verdicts
        .iter()
        .find(|verdict| verdict.subject == ProgramId::Wic)
        .expect("wic evaluated");
    assert_eq!(wic.reason, ReasonCode::WicWithinLimit { fpl_limit: 185 });
}

#[test]
fn non_expansion_parent_is_likely_for_medicaid() {
    let household = HouseholdAnswers {
        has_children_under_18: true,
        ..answers("TX", 4, 20_000.0)
    };

    let medicaid = evaluate_benefits(&household)
        .into_iter()
        .find(|verdict| verdict.subject == ProgramId::Medicaid)
        .expect("medicaid evaluated");

    assert_eq!(medicaid.status, EligibilityStatus::Likely);
    assert_eq!(medicaid.reason, ReasonCode::MedicaidNonExpansionCategorical);
}

#[test]
fn poverty_guidelines_vary_by_region() {
    assert_eq!(federal_poverty_level(1, "TX"), 15_650);
    assert_eq!(federal_poverty_level(3, "TX"), 26_750);
    assert_eq!(federal_poverty_level(1, "AK"), 19_560);
    assert_eq!(federal_poverty_level(2, "hi"), 24_390);
    assert!((percent_of_fpl(15_650.0, 1, "OH") - 100.0).abs() < f64::EPSILON);
}

#[test]
fn report_is_dated_and_counts_every_program() {
    let household = answers("WA", 2, 25_000.0);
    let verdicts = evaluate_benefits(&household);
    let date = NaiveDate::from_ymd_opt(2025, 12, 31).expect("valid date");

    let report = BenefitsReport::build(
        &household,
        &verdicts,
        ProgramCatalog::standard(),
        Locale::En,
        date,
    );

    assert_eq!(report.generated_on, date);
    assert_eq!(report.programs.len(), 9);
    assert_eq!(
        report.counts.eligible + report.counts.likely + report.counts.unlikely,
        report.programs.len()
    );
    let json = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(json["generated_on"], "2025-12-31");
}

#[test]
fn blank_income_in_csv_export_is_rejected() {
    let path = std::env::temp_dir().join(format!(
        "benefit-screener-households-{}.csv",
        std::process::id()
    ));
    std::fs::write(
        &path,
        "label,state,household_size,annual_income,age,is_pregnant,has_children_under_5,has_children_under_18,has_disability,is_employed,is_student\n\
         Rivera,NM,4,28000,31,false,true,true,false,true,false\n\
         Chen,WA,1,,45,false,false,false,false,true,false\n",
    )
    .expect("write csv");

    let result = HouseholdCsvImporter::from_path(&path);
    let _ = std::fs::remove_file(&path);

    assert!(result.is_err(), "blank income is not a number");
}

#[test]
fn service_screens_imported_rows_independently() {
    let csv = "label,state,household_size,annual_income,age,is_pregnant,has_children_under_5,has_children_under_18,has_disability,is_employed\n\
               Rivera,NM,4,28000,31,N,Y,Y,N,Y\n\
               Chen,WA,0,12000,45,N,N,N,N,Y\n";
    let households = HouseholdCsvImporter::from_reader(csv.as_bytes()).expect("parses");

    let outcomes = ScreeningService::standard().screen_batch(&households);

    assert!(outcomes[0].result.is_ok());
    assert!(outcomes[1].result.is_err());
    assert_eq!(outcomes[1].label.as_deref(), Some("Chen"));
}
