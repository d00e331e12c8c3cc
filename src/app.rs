use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/checkin", post(handlers::checkin_form))
        .route("/api/moods", get(handlers::get_moods))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/checkin", post(handlers::checkin))
        .route("/api/recommendations", get(handlers::get_recommendations))
        .route("/api/history", get(handlers::get_history))
        .route("/api/trends", get(handlers::get_trends))
        .with_state(state)
}
