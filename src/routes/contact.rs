use std::net::SocketAddr;

use axum::body::Bytes;
use axum::extract::{ConnectInfo, State};
use axum::http::{header, HeaderMap};
use axum::Json;
use serde_json::{json, Value};

use crate::contact::{self, client_ip, parser};
use crate::error::AppError;
use crate::state::SharedState;

pub async fn submit(
    State(state): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let ip = client_ip::resolve(&headers, addr.ip(), &state.config.trusted_proxies);

    state
        .contact_limiter
        .try_acquire(ip)
        .map_err(|retry_after| {
            tracing::info!("Contact submission from {ip} rate limited");
            AppError::RateLimited(retry_after)
        })?;

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    let submission =
        parser::parse_submission(content_type, &body).map_err(AppError::BadRequest)?;

    let mailer = state
        .mailer
        .as_ref()
        .ok_or_else(|| AppError::Unavailable("Mail delivery is not configured".to_string()))?;

    contact::relay(mailer.as_ref(), &state.config.contact_recipient, &submission).await?;

    tracing::info!("Relayed contact message from {ip}");
    Ok(Json(json!({ "success": true })))
}
