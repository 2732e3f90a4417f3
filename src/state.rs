use std::sync::Arc;

use crate::config::Config;
use crate::email::Mailer;
use crate::rate_limit::ContactRateLimiter;
use crate::sheets::SheetStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn SheetStore>,
    pub mailer: Option<Arc<dyn Mailer>>,
    pub contact_limiter: ContactRateLimiter,
}
