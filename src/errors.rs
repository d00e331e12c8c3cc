use crate::models::RejectionResponse;
use crate::session::CheckInError;
use axum::{http::StatusCode, response::IntoResponse, Json};

#[derive(Debug)]
pub enum AppError {
    /// Check-in refused; the body carries the toast to show.
    Rejected(CheckInError),
    BadRequest(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<CheckInError> for AppError {
    fn from(err: CheckInError) -> Self {
        Self::Rejected(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        match self {
            AppError::Rejected(err) => (
                status,
                Json(RejectionResponse {
                    notification: err.notification(),
                }),
            )
                .into_response(),
            AppError::BadRequest(message) => (status, message).into_response(),
        }
    }
}
