use leptos::prelude::*;

use crate::content::{COPYRIGHT_YEAR, PHONE_NUMBERS, POSTAL_ADDRESS, SCHOOL_EMAIL, SCHOOL_NAME};

#[derive(Clone, Copy, Default, PartialEq)]
pub enum FooterVariant {
    #[default]
    Dark,
    Wine,
}

impl FooterVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Wine => "wine",
        }
    }
}

#[component]
pub fn Footer(
    #[prop(optional)] variant: FooterVariant,
    /// Adds the phone, postal address and email line above the copyright.
    #[prop(optional)]
    with_contact: bool,
) -> impl IntoView {
    let contact_line = format!(
        "📞 Phone: {} | 📍 Address: {SCHOOL_NAME} {POSTAL_ADDRESS} | ✉️ Email: {SCHOOL_EMAIL}",
        PHONE_NUMBERS.join(" and ")
    );

    view! {
        <footer class=format!("site-footer footer-{}", variant.as_str())>
            {with_contact.then(|| view! { <p class="footer-contact">{contact_line}</p> })}
            <p>{format!("© {COPYRIGHT_YEAR} {SCHOOL_NAME} | All Rights Reserved")}</p>
        </footer>
    }
}
