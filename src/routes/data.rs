use axum::extract::{RawQuery, State};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::AppError;
use crate::projections::{self, Action};
use crate::state::SharedState;

pub const LIVENESS_MESSAGE: &str = "Contact form backend is running.";

pub async fn dispatch(
    State(state): State<SharedState>,
    RawQuery(query): RawQuery,
) -> Result<Response, AppError> {
    let Some(action) = query.as_deref().and_then(requested_action) else {
        return Ok(LIVENESS_MESSAGE.into_response());
    };

    let payload = projections::run(state.store.as_ref(), action).await?;
    Ok(Json(payload).into_response())
}

/// First `action` parameter wins. Anything unreadable falls back to the liveness text.
fn requested_action(query: &str) -> Option<Action> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "action")
        .and_then(|(_, value)| Action::from_param(&value))
}
