use serde::{Deserialize, Serialize};

use crate::common::DeliveryError;
use crate::forms::ContactForm;

/// Template parameters handed to the delivery service.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub to_email: String,
}

/// Anything that can deliver a contact enquiry to the school inbox.
#[allow(async_fn_in_trait)]
pub trait EmailDelivery {
    async fn deliver(&self, enquiry: &ContactForm) -> Result<(), DeliveryError>;
}
