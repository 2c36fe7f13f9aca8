mod common;

#[cfg(test)]
pub mod email_tests {
    use std::collections::HashMap;
    use std::time::{Duration, Instant};

    use leptos::prelude::ServerFnError;

    use super::common::*;

    use delight_school::api::{public_error, DELIVERY_FAILED};
    use delight_school::common::*;
    use delight_school::config::*;
    use delight_school::services::EmailJsClient;
    use delight_school::web::RateLimiter;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_site_config_defaults() {
        let config = SiteConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.email, EmailConfig::default());
        assert_eq!(config.email.inbox, "delightintschool@gmail.com");
        assert_eq!(config.email.endpoint, DEFAULT_EMAILJS_ENDPOINT);
        assert_eq!(config.email.public_key, None);
        assert_eq!(config.contact_rate_limit, DEFAULT_CONTACT_RATE_LIMIT);
    }

    #[test]
    fn test_site_config_reads_overrides() {
        let config = SiteConfig::from_lookup(lookup(&[
            ("EMAILJS_SERVICE_ID", "svc"),
            ("EMAILJS_TEMPLATE_ID", "tpl"),
            ("EMAILJS_PUBLIC_KEY", "pk"),
            ("EMAILJS_PRIVATE_KEY", "   "),
            ("CONTACT_INBOX", "office@school.test"),
            ("CONTACT_RATE_LIMIT", "2"),
        ]))
        .unwrap();

        assert_eq!(config.email.service_id, "svc");
        assert_eq!(config.email.template_id, "tpl");
        assert_eq!(config.email.public_key.as_deref(), Some("pk"));
        assert_eq!(config.email.private_key, None);
        assert_eq!(config.email.inbox, "office@school.test");
        assert_eq!(config.contact_rate_limit, 2);
    }

    #[test]
    fn test_site_config_fails_on_zero_rate_limit() {
        let err = SiteConfig::from_lookup(lookup(&[("CONTACT_RATE_LIMIT", "0")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                var: "CONTACT_RATE_LIMIT",
                ..
            }
        ));
    }

    #[test]
    fn test_site_config_fails_on_bad_inbox() {
        let err = SiteConfig::from_lookup(lookup(&[("CONTACT_INBOX", "office")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "CONTACT_INBOX", .. }));
    }

    #[test]
    fn test_request_body_fields() {
        let client = EmailJsClient::new(get_configured_email());
        let body = client.request_body(&get_seed_contact_form()).unwrap();

        assert_eq!(body["service_id"], DEFAULT_SERVICE_ID);
        assert_eq!(body["template_id"], DEFAULT_TEMPLATE_ID);
        assert_eq!(body["user_id"], "public-key");
        assert!(body.get("accessToken").is_none());

        let params = &body["template_params"];
        assert_eq!(params["from_name"], "Esi Owusu");
        assert_eq!(params["from_email"], "esi@example.com");
        assert_eq!(params["to_email"], "delightintschool@gmail.com");
        assert_eq!(params["message"], get_seed_contact_form().message);
    }

    #[test]
    fn test_request_body_includes_access_token() {
        let mut config = get_configured_email();
        config.private_key = Some("secret".to_string());
        let body = EmailJsClient::new(config)
            .request_body(&get_seed_contact_form())
            .unwrap();

        assert_eq!(body["accessToken"], "secret");
    }

    #[test]
    fn test_request_body_fails_without_public_key() {
        let client = EmailJsClient::new(EmailConfig::default());
        let err = client.request_body(&get_seed_contact_form()).unwrap_err();
        assert!(matches!(err, DeliveryError::NotConfigured));
    }

    #[test]
    fn test_request_body_fails_on_invalid_message() {
        let client = EmailJsClient::new(get_configured_email());
        let mut form = get_seed_contact_form();
        form.email = "not-an-address".to_string();

        let err = client.request_body(&form).unwrap_err();
        assert!(matches!(err, DeliveryError::InvalidMessage(_)));
    }

    #[test]
    fn test_rate_limiter_blocks_after_max() {
        let limiter = RateLimiter::new();
        let window = Duration::from_secs(60);
        let now = Instant::now();

        assert!(limiter.check_at("10.0.0.1", 2, window, now));
        assert!(limiter.check_at("10.0.0.1", 2, window, now));
        assert!(!limiter.check_at("10.0.0.1", 2, window, now));
        assert!(limiter.check_at("10.0.0.2", 2, window, now));
    }

    #[test]
    fn test_rate_limiter_window_slides() {
        let limiter = RateLimiter::new();
        let window = Duration::from_secs(60);
        let start = Instant::now();

        assert!(limiter.check_at("client", 1, window, start));
        assert!(!limiter.check_at("client", 1, window, start + Duration::from_secs(30)));
        assert!(limiter.check_at("client", 1, window, start + Duration::from_secs(61)));
    }

    #[test]
    fn test_public_error_keeps_visitor_errors() {
        let invalid = DeliveryError::InvalidMessage("name, email and message are required".to_string());
        assert_eq!(public_error(&invalid), ServerFnError::new(invalid.to_string()));
        assert_eq!(
            public_error(&DeliveryError::RateLimited),
            ServerFnError::new(DeliveryError::RateLimited.to_string())
        );
    }

    #[test]
    fn test_public_error_hides_provider_details() {
        let internal = [
            DeliveryError::NotConfigured,
            DeliveryError::Transport("dns error: api.emailjs.com".to_string()),
            DeliveryError::Rejected {
                status: 401,
                body: "The Public Key is invalid".to_string(),
            },
            DeliveryError::Server("boom".to_string()),
        ];

        for err in internal {
            let public = public_error(&err);
            assert_eq!(public, ServerFnError::new(DELIVERY_FAILED));
            assert!(!public.to_string().contains("emailjs"));
            assert!(!public.to_string().contains("Public Key"));
        }
    }
}
