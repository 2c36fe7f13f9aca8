pub mod middleware;
pub mod security;
pub mod state;

pub use middleware::SecurityHeaders;
pub use security::RateLimiter;
pub use state::AppState;
