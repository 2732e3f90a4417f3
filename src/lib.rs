pub mod config;
pub mod error;
pub mod state;
pub mod models;
pub mod sheets;
pub mod projections;
pub mod email;
pub mod contact;
pub mod routes;
pub mod rate_limit;

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::email::Mailer;
use crate::rate_limit::ContactRateLimiter;
use crate::sheets::SheetStore;
use crate::state::{AppState, SharedState};

pub fn build_app(
    config: Config,
    store: Arc<dyn SheetStore>,
    mailer: Option<Arc<dyn Mailer>>,
) -> (Router, SharedState) {
    if mailer.is_none() {
        tracing::warn!("No mailer configured; contact submissions will be rejected");
    }

    // `*` (or no list at all) means any origin; tower-http refuses it inside a list
    let origins = if config.cors_origins.is_empty()
        || config.cors_origins.iter().any(|o| o.as_bytes() == b"*")
    {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(config.cors_origins.clone())
    };
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let max_body_size = config.max_body_size;

    let contact_limiter = ContactRateLimiter::new(
        config.contact_rate_limit,
        Duration::from_secs(config.contact_rate_window_secs),
    );

    let state: SharedState = Arc::new(AppState {
        config,
        store,
        mailer,
        contact_limiter,
    });

    let app = Router::new()
        .merge(routes::site_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(max_body_size))
                .layer(cors)
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                )),
        )
        .with_state(state.clone());

    (app, state)
}
