//! Runtime configuration read from the environment (and `.env` via dotenvy).

use std::time::Duration;

use crate::common::ConfigError;
use crate::content::SCHOOL_EMAIL;

pub const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DEFAULT_SERVICE_ID: &str = "service_delight";
pub const DEFAULT_TEMPLATE_ID: &str = "template_contact";
pub const DEFAULT_CONTACT_RATE_LIMIT: usize = 5;

/// Sliding window for the contact form rate limit.
pub const CONTACT_RATE_WINDOW: Duration = Duration::from_secs(10 * 60);

/// Credentials and routing for the external email delivery service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: Option<String>,
    pub private_key: Option<String>,
    /// Where contact form messages are delivered.
    pub inbox: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_EMAILJS_ENDPOINT.to_string(),
            service_id: DEFAULT_SERVICE_ID.to_string(),
            template_id: DEFAULT_TEMPLATE_ID.to_string(),
            public_key: None,
            private_key: None,
            inbox: SCHOOL_EMAIL.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub email: EmailConfig,
    /// Contact messages accepted per client within `CONTACT_RATE_WINDOW`.
    pub contact_rate_limit: usize,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = EmailConfig::default();

        let inbox = get("CONTACT_INBOX").unwrap_or(defaults.inbox);
        if !inbox.contains('@') {
            return Err(ConfigError::Invalid {
                var: "CONTACT_INBOX",
                reason: format!("{inbox:?} is not an email address"),
            });
        }

        let contact_rate_limit = match get("CONTACT_RATE_LIMIT") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(0) | Err(_) => {
                    return Err(ConfigError::Invalid {
                        var: "CONTACT_RATE_LIMIT",
                        reason: format!("expected a positive integer, got {raw:?}"),
                    });
                }
                Ok(n) => n,
            },
            None => DEFAULT_CONTACT_RATE_LIMIT,
        };

        Ok(Self {
            email: EmailConfig {
                endpoint: get("EMAILJS_ENDPOINT").unwrap_or(defaults.endpoint),
                service_id: get("EMAILJS_SERVICE_ID").unwrap_or(defaults.service_id),
                template_id: get("EMAILJS_TEMPLATE_ID").unwrap_or(defaults.template_id),
                public_key: get("EMAILJS_PUBLIC_KEY"),
                private_key: get("EMAILJS_PRIVATE_KEY"),
                inbox,
            },
            contact_rate_limit,
        })
    }
}
