use benefit_screener::screening::{
    BatchOutcome, BenefitsReport, EligibilityStatus, StatusCounts, TaxCreditReport,
};
use serde::Serialize;
use std::path::Path;

const STATUS_SECTIONS: [(EligibilityStatus, &str); 3] = [
    (EligibilityStatus::Eligible, "Likely eligible"),
    (EligibilityStatus::Likely, "May be eligible"),
    (EligibilityStatus::Unlikely, "Probably not eligible"),
];

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<(), std::io::Error> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

pub(crate) fn print_benefits_report(report: &BenefitsReport) {
    println!(
        "Benefits screening for {} | household of {} | generated {}",
        report.state, report.household_size, report.generated_on
    );
    println!(
        "Income is {:.1}% of the federal poverty guideline (${} for this household)",
        report.percent_fpl, report.poverty_level
    );
    println!("{}", counts_line(&report.counts));

    for (status, heading) in STATUS_SECTIONS {
        let mut programs = report.with_status(status).peekable();
        if programs.peek().is_none() {
            continue;
        }
        println!("\n{heading}:");
        for program in programs {
            println!(
                "- {} [{}] {}",
                program.name, program.category_label, program.estimated_benefit_label
            );
            println!("    {}", program.reason_message);
            if status != EligibilityStatus::Unlikely {
                println!("    Apply: {}", program.apply_url);
            }
        }
    }
}

pub(crate) fn print_tax_credit_report(report: &TaxCreditReport) {
    println!(
        "Tax credit screening | filing as {} | generated {}",
        report.filing_status.label(),
        report.generated_on
    );
    println!("Estimated credits: ${}", report.total_estimated);
    println!("{}", counts_line(&report.counts));

    println!();
    for credit in &report.credits {
        let amount = if credit.status == EligibilityStatus::Eligible {
            format!(" ~${}", credit.estimated_amount)
        } else {
            String::new()
        };
        println!("- {} ({}){}", credit.name, credit.status.label(), amount);
        println!("    {}", credit.reason_message);
    }

    if !report.filing_resources.is_empty() {
        println!("\nFile for free:");
        for resource in &report.filing_resources {
            println!("- {}: {}", resource.name, resource.url);
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchRow {
    line: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    counts: Option<StatusCounts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub(crate) fn batch_rows(outcomes: &[BatchOutcome]) -> Vec<BatchRow> {
    outcomes
        .iter()
        .map(|outcome| {
            let (counts, error) = match &outcome.result {
                Ok(counts) => (Some(*counts), None),
                Err(err) => (None, Some(err.to_string())),
            };
            BatchRow {
                line: outcome.line,
                label: outcome.label.clone(),
                counts,
                error,
            }
        })
        .collect()
}

pub(crate) fn print_batch_outcomes(source: &Path, outcomes: &[BatchOutcome]) {
    let screened = outcomes.iter().filter(|outcome| outcome.result.is_ok()).count();
    println!(
        "Screened {} of {} households from {}",
        screened,
        outcomes.len(),
        source.display()
    );

    for outcome in outcomes {
        let name = outcome
            .label
            .clone()
            .unwrap_or_else(|| format!("line {}", outcome.line));
        match &outcome.result {
            Ok(counts) => println!("- {name}: {}", counts_line(counts)),
            Err(err) => println!("- {name}: skipped ({err})"),
        }
    }
}

fn counts_line(counts: &StatusCounts) -> String {
    format!(
        "{} eligible | {} likely | {} unlikely",
        counts.eligible, counts.likely, counts.unlikely
    )
}
