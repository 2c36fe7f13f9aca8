use serde::{Deserialize, Serialize};

use super::{compose_body, mailto_uri};
use crate::common::DeliveryError;
use crate::content::SCHOOL_EMAIL;
use crate::services::{ContactMessage, EmailDelivery};

pub const ENQUIRY_SUBJECT: &str = "Website Enquiry";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ContactField {
    FullName,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [Self::FullName, Self::Email, Self::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub full_name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FullName => &self.full_name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::FullName => self.full_name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn is_complete(&self) -> bool {
        ContactField::ALL
            .iter()
            .all(|field| !self.get(*field).trim().is_empty())
    }

    /// Checks done again on the server, where browser `required` attributes
    /// cannot be trusted.
    pub fn validate(&self) -> Result<(), DeliveryError> {
        if !self.is_complete() {
            return Err(DeliveryError::InvalidMessage(
                "name, email and message are required".to_string(),
            ));
        }
        if !looks_like_email(&self.email) {
            return Err(DeliveryError::InvalidMessage(format!(
                "{:?} is not a valid email address",
                self.email.trim()
            )));
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn to_message(&self, to_email: &str) -> ContactMessage {
        ContactMessage {
            from_name: self.full_name.trim().to_string(),
            from_email: self.email.trim().to_string(),
            message: self.message.clone(),
            to_email: to_email.to_string(),
        }
    }

    pub fn body(&self) -> String {
        let lines: Vec<(&str, &str)> = ContactField::ALL
            .iter()
            .map(|field| (field.label(), self.get(*field)))
            .collect();
        compose_body(&lines)
    }

    /// Draft of the same enquiry for the visitor's own mail client.
    pub fn mailto(&self) -> String {
        mailto_uri(SCHOOL_EMAIL, ENQUIRY_SUBJECT, &self.body())
    }
}

/// Basic shape check: one `@`, non-empty local part, dotted domain.
pub fn looks_like_email(email: &str) -> bool {
    let email = email.trim();
    if email.is_empty() || email.len() > 254 {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && local.len() <= 64
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Outcome shown to the visitor once a send attempt completes.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Notice {
    Sent,
    Failed,
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Self::Sent => "Thank you! Your message has been sent successfully.".to_string(),
            Self::Failed => format!(
                "Sorry, there was an error sending your message. Please try again or contact us directly at {SCHOOL_EMAIL}"
            ),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// Contact form fields plus the in-flight flag that disables the submit button.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ContactFormState {
    pub fields: ContactForm,
    sending: bool,
}

impl ContactFormState {
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        self.fields.set(field, value);
    }

    /// Marks the form as sending and returns a snapshot of the enquiry.
    /// Returns `None` when a send is already in flight or a field is empty.
    pub fn begin_submit(&mut self) -> Option<ContactForm> {
        if self.sending || !self.fields.is_complete() {
            return None;
        }
        self.sending = true;
        Some(self.fields.clone())
    }

    /// Always clears the in-flight flag. Fields are reset only on success.
    pub fn finish_submit(&mut self, outcome: Result<(), DeliveryError>) -> Notice {
        self.sending = false;
        match outcome {
            Ok(()) => {
                self.fields.clear();
                Notice::Sent
            }
            Err(e) => {
                log::error!("Failed to send contact message: {}", e);
                Notice::Failed
            }
        }
    }

    /// Runs one full submission through `delivery`.
    pub async fn submit<D: EmailDelivery>(&mut self, delivery: &D) -> Option<Notice> {
        let enquiry = self.begin_submit()?;
        let outcome = delivery.deliver(&enquiry).await;
        Some(self.finish_submit(outcome))
    }
}
