use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use serde::{Deserialize, Serialize};

use super::answers::{AnswerError, FilerAnswers, HouseholdAnswers, MAX_HOUSEHOLD_SIZE};
use super::catalog::Locale;
use super::poverty::{
    federal_poverty_level, income_at_percent, PovertyRegion, GUIDELINE_YEAR,
};
use super::report::{BenefitsReport, TaxCreditReport};
use super::service::ScreeningService;
use super::states::{state_by_code, STATES};
use crate::error::AppError;

/// Percent-of-FPL lines the benefit rules most often compare against.
const REFERENCE_PERCENTS: [u32; 5] = [100, 130, 138, 185, 200];

/// Router builder exposing the screening endpoints.
pub fn screening_router(service: Arc<ScreeningService>) -> Router {
    Router::new()
        .route("/api/v1/screening/benefits", post(benefits_handler))
        .route("/api/v1/screening/tax-credits", post(tax_credits_handler))
        .route("/api/v1/catalog/programs", get(programs_handler))
        .route("/api/v1/catalog/tax-credits", get(credits_handler))
        .route("/api/v1/states", get(states_handler))
        .route("/api/v1/poverty-level", get(poverty_level_handler))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LocaleQuery {
    #[serde(default)]
    lang: Option<String>,
}

impl LocaleQuery {
    fn locale(&self) -> Locale {
        self.lang
            .as_deref()
            .map(Locale::from_tag)
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct PovertyLevelQuery {
    household_size: u32,
    state: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct IncomeLine {
    percent: u32,
    annual_income: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct PovertyLevelResponse {
    state: &'static str,
    region: PovertyRegion,
    guideline_year: i32,
    household_size: u32,
    poverty_level: u32,
    income_lines: Vec<IncomeLine>,
}

pub(crate) async fn benefits_handler(
    State(service): State<Arc<ScreeningService>>,
    Query(query): Query<LocaleQuery>,
    Json(answers): Json<HouseholdAnswers>,
) -> Result<Json<BenefitsReport>, AppError> {
    let today = Local::now().date_naive();
    let report = service.screen_benefits(&answers, query.locale(), today)?;
    Ok(Json(report))
}

pub(crate) async fn tax_credits_handler(
    State(service): State<Arc<ScreeningService>>,
    Query(query): Query<LocaleQuery>,
    Json(answers): Json<FilerAnswers>,
) -> Result<Json<TaxCreditReport>, AppError> {
    let today = Local::now().date_naive();
    let report = service.screen_tax_credits(&answers, query.locale(), today)?;
    Ok(Json(report))
}

pub(crate) async fn programs_handler(State(service): State<Arc<ScreeningService>>) -> Response {
    (StatusCode::OK, Json(service.programs().programs())).into_response()
}

pub(crate) async fn credits_handler(State(service): State<Arc<ScreeningService>>) -> Response {
    (StatusCode::OK, Json(service.credits().credits())).into_response()
}

pub(crate) async fn states_handler() -> Response {
    (StatusCode::OK, Json(STATES)).into_response()
}

pub(crate) async fn poverty_level_handler(
    Query(query): Query<PovertyLevelQuery>,
) -> Result<Json<PovertyLevelResponse>, AppError> {
    let Some(state) = state_by_code(&query.state) else {
        return Err(AnswerError::UnknownState(query.state).into());
    };
    if query.household_size == 0 {
        return Err(AnswerError::EmptyHousehold.into());
    }
    if query.household_size > MAX_HOUSEHOLD_SIZE {
        return Err(AnswerError::HouseholdTooLarge(query.household_size).into());
    }

    let income_lines = REFERENCE_PERCENTS
        .iter()
        .map(|&percent| IncomeLine {
            percent,
            annual_income: income_at_percent(f64::from(percent), query.household_size, state.code),
        })
        .collect();

    let payload = PovertyLevelResponse {
        state: state.code,
        region: PovertyRegion::for_state(state.code),
        guideline_year: GUIDELINE_YEAR,
        household_size: query.household_size,
        poverty_level: federal_poverty_level(query.household_size, state.code),
        income_lines,
    };
    Ok(Json(payload))
}
