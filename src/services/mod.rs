//! Outbound email delivery for contact enquiries.

mod email;
#[cfg(feature = "ssr")]
mod emailjs;

pub use email::*;
#[cfg(feature = "ssr")]
pub use emailjs::EmailJsClient;
