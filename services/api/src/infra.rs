use benefit_screener::screening::{FilingStatus, Locale};
use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_filing_status(raw: &str) -> Result<FilingStatus, String> {
    match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
        "single" => Ok(FilingStatus::Single),
        "married" | "married_filing_jointly" => Ok(FilingStatus::Married),
        "hoh" | "head_of_household" => Ok(FilingStatus::HeadOfHousehold),
        other => Err(format!(
            "unknown filing status '{other}' (expected single, married or hoh)"
        )),
    }
}

pub(crate) fn parse_locale(raw: &str) -> Result<Locale, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "en" => Ok(Locale::En),
        "es" => Ok(Locale::Es),
        other => Err(format!("unsupported language '{other}' (expected en or es)")),
    }
}
