use crate::config::SiteConfig;
use crate::services::EmailJsClient;
use crate::web::security::RateLimiter;

/// Shared by every actix worker; reached from server functions through
/// `leptos_actix::extract`.
pub struct AppState {
    pub mailer: EmailJsClient,
    pub rate_limiter: RateLimiter,
    pub contact_rate_limit: usize,
}

impl AppState {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            mailer: EmailJsClient::new(config.email),
            rate_limiter: RateLimiter::new(),
            contact_rate_limit: config.contact_rate_limit,
        }
    }
}
