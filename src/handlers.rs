use crate::errors::AppError;
use crate::models::{
    CheckInForm, CheckInRequest, CheckInResponse, DashboardResponse, HistoryResponse, IndexQuery,
    MoodLevel, MoodOption, RecommendationQuery, RecommendationsResponse, TrendsResponse,
};
use crate::recommendations::{resolve_raw, select_level};
use crate::session::{recorded_notification, CheckIn, CheckInError};
use crate::state::AppState;
use crate::stats::build_trends;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Form, Json,
};
use chrono::Utc;

const NOTICE_RECORDED: &str = "recorded";
const NOTICE_REJECTED: &str = "rejected";

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> Html<String> {
    let notice = match query.notice.as_deref() {
        Some(NOTICE_RECORDED) => Some(recorded_notification()),
        Some(NOTICE_REJECTED) => Some(CheckInError::MissingLevel.notification()),
        _ => None,
    };
    let dashboard = state.dashboard.lock().await;
    Html(render_index(&dashboard, notice.as_ref()))
}

pub async fn get_moods() -> Json<Vec<MoodOption>> {
    Json(
        MoodLevel::all()
            .map(|level| MoodOption {
                level,
                label: level.label(),
                emoji: level.emoji(),
            })
            .collect(),
    )
}

pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    let dashboard = state.dashboard.lock().await;
    Json(DashboardResponse {
        checked_in_today: dashboard.checked_in_today(),
        current_level: dashboard.current_level(),
        headline: dashboard.headline(),
        subline: dashboard.subline(),
        entries_recorded: dashboard.history().len(),
    })
}

pub async fn checkin(
    State(state): State<AppState>,
    Json(payload): Json<CheckInRequest>,
) -> Result<Json<CheckInResponse>, AppError> {
    let response = apply_check_in(&state, payload.level, payload.note).await?;
    Ok(Json(response))
}

pub async fn checkin_form(
    State(state): State<AppState>,
    Form(form): Form<CheckInForm>,
) -> Result<Redirect, AppError> {
    let level = match form.level.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(
            raw.parse::<i64>()
                .map_err(|_| AppError::bad_request("level must be a whole number"))?,
        ),
    };

    match apply_check_in(&state, level, form.note).await {
        Ok(_) => Ok(Redirect::to(&format!("/?notice={NOTICE_RECORDED}"))),
        Err(AppError::Rejected(_)) => Ok(Redirect::to(&format!("/?notice={NOTICE_REJECTED}"))),
        Err(err) => Err(err),
    }
}

pub async fn get_recommendations(
    State(state): State<AppState>,
    Query(query): Query<RecommendationQuery>,
) -> Json<RecommendationsResponse> {
    let level = match query.level.as_deref() {
        Some(raw) => resolve_raw(raw),
        None => state.dashboard.lock().await.current_level(),
    };
    Json(RecommendationsResponse {
        level,
        recommendations: select_level(level).to_vec(),
    })
}

pub async fn get_history(State(state): State<AppState>) -> Json<HistoryResponse> {
    let dashboard = state.dashboard.lock().await;
    Json(HistoryResponse {
        entries: dashboard.history().to_vec(),
    })
}

pub async fn get_trends(State(state): State<AppState>) -> Json<TrendsResponse> {
    let dashboard = state.dashboard.lock().await;
    Json(build_trends(dashboard.history()))
}

async fn apply_check_in(
    state: &AppState,
    level: Option<i64>,
    note: Option<String>,
) -> Result<CheckInResponse, AppError> {
    let mut dashboard = state.dashboard.lock().await;
    let entry = dashboard.submit(CheckIn {
        level,
        note,
        timestamp: Utc::now(),
    })?;

    Ok(CheckInResponse {
        entry,
        current_level: dashboard.current_level(),
        checked_in_today: dashboard.checked_in_today(),
        notification: recorded_notification(),
    })
}
