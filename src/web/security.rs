use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// In-memory sliding-window rate limiter, keyed by client.
pub struct RateLimiter {
    requests: Mutex<HashMap<String, Vec<Instant>>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(HashMap::new()),
        }
    }

    /// Records a request for `key` and reports whether it is within
    /// `max_requests` per `window`. Rejected requests are not recorded.
    pub fn check_rate_limit(&self, key: &str, max_requests: usize, window: Duration) -> bool {
        self.check_at(key, max_requests, window, Instant::now())
    }

    pub fn check_at(&self, key: &str, max_requests: usize, window: Duration, now: Instant) -> bool {
        let mut requests = self
            .requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let entry = requests.entry(key.to_string()).or_default();
        entry.retain(|&at| now.saturating_duration_since(at) < window);

        let allowed = entry.len() < max_requests;
        if allowed {
            entry.push(now);
        }

        // Drop idle clients so the map does not grow without bound.
        requests.retain(|_, times| !times.is_empty());

        allowed
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}
