use crate::errors::AppError;
use crate::models::{HospitalStats, PatientSnapshot, Prediction};
use crate::state::AppState;
use crate::triage;
use crate::ui::render_page;
use crate::view::{PageState, Section};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Html,
    Json,
};
use chrono::Local;
use tracing::{info, warn};

pub async fn dashboard(State(state): State<AppState>) -> Html<String> {
    render_section(&state, Section::Dashboard)
}

pub async fn section(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, AppError> {
    let section = Section::from_slug(&slug)
        .ok_or_else(|| AppError::not_found(format!("no such section: {slug}")))?;
    Ok(render_section(&state, section))
}

pub async fn get_stats(State(state): State<AppState>) -> Json<HospitalStats> {
    Json(state.stats.clone())
}

/// Scores a patient snapshot, preferring the prediction service but falling
/// back to the on-board triage rules when it cannot deliver a verdict.
///
/// Every caller gets a 200 with a usable assessment; only an undecodable
/// request body is rejected.
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<PatientSnapshot>, JsonRejection>,
) -> Result<Json<Prediction>, AppError> {
    let Json(snapshot) = payload?;

    let prediction = match state.predictor.predict(&snapshot).await {
        Ok(prediction) => {
            info!(risk = %prediction.risk, "prediction service answered");
            prediction
        }
        Err(err) => {
            warn!("prediction service unavailable, falling back to triage rules: {err}");
            triage::assess(snapshot.vitals.spo2)
        }
    };

    Ok(Json(prediction))
}

fn render_section(state: &AppState, section: Section) -> Html<String> {
    let mut page = PageState::default();
    page.show_section(Some(section));
    Html(render_page(&page, &state.stats, &census_date()))
}

fn census_date() -> String {
    Local::now().date_naive().to_string()
}
