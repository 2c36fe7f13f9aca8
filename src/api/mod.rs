use leptos::prelude::*;

use crate::common::DeliveryError;
use crate::forms::ContactForm;
use crate::services::EmailDelivery;

/// Delivers a contact form enquiry through the server-side email client.
/// Errors carry a message that is safe to show to visitors.
#[server(SendContactMessage, "/api")]
pub async fn send_contact_message(enquiry: ContactForm) -> Result<(), ServerFnError> {
    use actix_web::web::Data;
    use actix_web::HttpRequest;

    use crate::config::CONTACT_RATE_WINDOW;
    use crate::web::AppState;

    let state: Data<AppState> = leptos_actix::extract().await?;
    let req: HttpRequest = leptos_actix::extract().await?;

    let client = req
        .peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    if !state.rate_limiter.check_rate_limit(
        &client,
        state.contact_rate_limit,
        CONTACT_RATE_WINDOW,
    ) {
        log::warn!("Contact form rate limit hit for {}", client);
        return Err(public_error(&DeliveryError::RateLimited));
    }

    state.mailer.send(&enquiry).await.map_err(|e| {
        log::error!("Contact delivery failed: {}", e);
        public_error(&e)
    })
}

/// Shown to visitors when delivery fails for a reason they cannot act on.
pub const DELIVERY_FAILED: &str = "The message could not be delivered";

/// Error returned to the browser. Validation and rate-limit errors keep their
/// text; provider and configuration details stay in the server log.
pub fn public_error(err: &DeliveryError) -> ServerFnError {
    match err {
        DeliveryError::InvalidMessage(_) | DeliveryError::RateLimited => {
            ServerFnError::new(err.to_string())
        }
        _ => ServerFnError::new(DELIVERY_FAILED),
    }
}

/// Delivery used by the Contact page in the browser: calls `SendContactMessage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerFnDelivery;

impl EmailDelivery for ServerFnDelivery {
    async fn deliver(&self, enquiry: &ContactForm) -> Result<(), DeliveryError> {
        send_contact_message(enquiry.clone())
            .await
            .map_err(|e| DeliveryError::Server(e.to_string()))
    }
}
