#![allow(dead_code)]

use std::cell::Cell;

use delight_school::common::DeliveryError;
use delight_school::config::EmailConfig;
use delight_school::forms::{ApplyForm, ContactForm};
use delight_school::services::EmailDelivery;

pub fn get_seed_apply_form() -> ApplyForm {
    ApplyForm {
        full_name: "Ama Mensah".to_string(),
        dob: "2018-03-14".to_string(),
        gender: "female".to_string(),
        grade: "Primary".to_string(),
        parent_name: "Kofi Mensah".to_string(),
        parent_contact: "+233 24 000 0000".to_string(),
        address: "12 Ring Road, Kotobabi".to_string(),
    }
}

pub fn get_seed_contact_form() -> ContactForm {
    ContactForm {
        full_name: "Esi Owusu".to_string(),
        email: "esi@example.com".to_string(),
        message: "When does the next term begin?\nThank you.".to_string(),
    }
}

pub fn get_configured_email() -> EmailConfig {
    EmailConfig {
        public_key: Some("public-key".to_string()),
        ..EmailConfig::default()
    }
}

/// Delivery double that records how often it was called.
pub struct MockDelivery {
    fail: bool,
    calls: Cell<usize>,
}

impl MockDelivery {
    pub fn succeeding() -> Self {
        Self {
            fail: false,
            calls: Cell::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl EmailDelivery for MockDelivery {
    async fn deliver(&self, _enquiry: &ContactForm) -> Result<(), DeliveryError> {
        self.calls.set(self.calls.get() + 1);
        if self.fail {
            Err(DeliveryError::Transport("connection reset".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Splits a `mailto:` URI into its decoded subject and body.
pub fn decode_mailto(uri: &str) -> (String, String, String) {
    let rest = uri.strip_prefix("mailto:").expect("not a mailto URI");
    let (to, query) = rest.split_once('?').expect("mailto URI without query");
    let (subject, body) = query
        .strip_prefix("subject=")
        .and_then(|q| q.split_once("&body="))
        .expect("mailto URI without subject and body");

    (
        to.to_string(),
        urlencoding::decode(subject).unwrap().into_owned(),
        urlencoding::decode(body).unwrap().into_owned(),
    )
}
