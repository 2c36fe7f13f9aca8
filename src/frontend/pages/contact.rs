use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use crate::api::ServerFnDelivery;
use crate::content::{
    BRANCHES, OFFICE_HOURS, PHONE_NUMBERS, POSTAL_ADDRESS, SCHOOL_EMAIL, SCHOOL_NAME, WHATSAPP,
};
use crate::forms::{ContactField, ContactFormState, Notice};
use crate::frontend::components::{
    Alert, AlertVariant, Footer, FooterVariant, Header, HeaderVariant, Hero, HeroVariant,
    SubmitButton, TextAreaField, TextField,
};
use crate::models::SiteRoute;
use crate::services::EmailDelivery;

#[component]
pub fn ContactPage() -> impl IntoView {
    let state = RwSignal::new(ContactFormState::default());
    let notice = RwSignal::new(None::<Notice>);

    let value = move |field: ContactField| {
        Signal::derive(move || state.with(|s| s.fields.get(field).to_string()))
    };
    let setter = move |field: ContactField| move |input: String| state.update(|s| s.set(field, input));
    let sending = Signal::derive(move || state.with(ContactFormState::is_sending));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // Ignored while a send is in flight or a field is still empty.
        let Some(enquiry) = state.try_update(ContactFormState::begin_submit).flatten() else {
            return;
        };
        notice.set(None);

        spawn_local(async move {
            let outcome = ServerFnDelivery.deliver(&enquiry).await;
            let Some(result) = state.try_update(|s| s.finish_submit(outcome)) else {
                return;
            };
            if let Err(err) = window().alert_with_message(&result.message()) {
                log::warn!("Could not show contact notification: {:?}", err);
            }
            notice.set(Some(result));
        });
    };

    view! {
        <Title text=SiteRoute::Contact.title()/>
        <div class="page contact">
            <Header variant=HeaderVariant::Wine/>
            <Hero
                title="Contact Us"
                subtitle="We'd love to hear from you. Reach out with any questions or enquiries."
                variant=HeroVariant::Wine
            />
            <section class="contact-section">
                <div class="contact-info">
                    <h3>"Get in Touch"</h3>
                    <p><strong>"School: "</strong>{SCHOOL_NAME}</p>
                    <p><strong>"Postal Address: "</strong>{POSTAL_ADDRESS}</p>
                    {BRANCHES.iter().map(|branch| view! { <p>"📍 " {*branch}</p> }).collect_view()}
                    <p><strong>"Phone: "</strong>{PHONE_NUMBERS.join(" / ")}</p>
                    <p><strong>"Email: "</strong><a href=format!("mailto:{SCHOOL_EMAIL}")>{SCHOOL_EMAIL}</a></p>
                    <p><strong>"Chat: "</strong>{WHATSAPP}</p>
                    <h4>"Office Hours"</h4>
                    {OFFICE_HOURS.iter().map(|hours| view! { <p>{*hours}</p> }).collect_view()}
                </div>

                <form class="contact-form" on:submit=on_submit>
                    <h3>"Send Us a Message"</h3>
                    <TextField
                        label=ContactField::FullName.label()
                        id="name"
                        placeholder="Your full name"
                        value=value(ContactField::FullName)
                        on_input=setter(ContactField::FullName)
                    />
                    <TextField
                        label=ContactField::Email.label()
                        id="email"
                        input_type="email"
                        placeholder="you@example.com"
                        value=value(ContactField::Email)
                        on_input=setter(ContactField::Email)
                    />
                    <TextAreaField
                        label=ContactField::Message.label()
                        id="message"
                        rows=5
                        placeholder="How can we help?"
                        value=value(ContactField::Message)
                        on_input=setter(ContactField::Message)
                    />
                    <SubmitButton label="Send Message" busy=sending/>
                </form>

                {move || {
                    notice
                        .get()
                        .map(|result| {
                            let variant = if result.is_error() {
                                AlertVariant::Error
                            } else {
                                AlertVariant::Success
                            };
                            let fallback = result
                                .is_error()
                                .then(|| state.with_untracked(|s| s.fields.mailto()));
                            view! {
                                <Alert message=result.message() variant=variant>
                                    {fallback.map(|href| view! {
                                        <a href=href class="mailto-fallback">"Open this message in your email app"</a>
                                    })}
                                </Alert>
                            }
                        })
                }}
            </section>
            <Footer variant=FooterVariant::Wine/>
        </div>
    }
}
