use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Email delivery is not configured")]
    NotConfigured,

    #[error("Message is incomplete: {0}")]
    InvalidMessage(String),

    #[error("Too many messages from this client, try again later")]
    RateLimited,

    #[error("Could not reach the email service: {0}")]
    Transport(String),

    #[error("Email service rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("Server error: {0}")]
    Server(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}
