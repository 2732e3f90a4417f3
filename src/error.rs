use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::email::MailError;
use crate::sheets::StoreError;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    RateLimited(u64),
    Unavailable(String),
    Store(StoreError),
    Mail(MailError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            AppError::RateLimited(secs) => write!(f, "Rate Limited: retry after {secs}s"),
            AppError::Unavailable(msg) => write!(f, "Unavailable: {msg}"),
            AppError::Store(err) => write!(f, "Store Error: {err}"),
            AppError::Mail(err) => write!(f, "Mail Error: {err}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::RateLimited(secs) => {
                let body = json!({
                    "success": false,
                    "error": format!("Too many messages. Try again in {secs}s"),
                });
                return (
                    StatusCode::TOO_MANY_REQUESTS,
                    [(header::RETRY_AFTER, secs.to_string())],
                    axum::Json(body),
                )
                    .into_response();
            }
            AppError::Unavailable(msg) => {
                tracing::warn!("Unavailable: {msg}");
                (StatusCode::SERVICE_UNAVAILABLE, msg.clone())
            }
            AppError::Store(err) => {
                tracing::error!("Store error: {err}");
                (
                    StatusCode::BAD_GATEWAY,
                    "Failed to read spreadsheet".to_string(),
                )
            }
            AppError::Mail(err) => {
                tracing::error!("Mail error: {err}");
                (StatusCode::BAD_GATEWAY, "Failed to send message".to_string())
            }
        };

        let body = json!({ "success": false, "error": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err)
    }
}

impl From<MailError> for AppError {
    fn from(err: MailError) -> Self {
        AppError::Mail(err)
    }
}
