use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::DOWNLOAD_FORM_LINK;
use crate::forms::{ApplyField, ApplyForm, GENDERS, GRADE_OPTIONS};
use crate::frontend::components::{
    Footer, Header, HeaderVariant, Hero, SelectField, SubmitButton, TextField,
};
use crate::models::SiteRoute;

#[component]
pub fn ApplyPage() -> impl IntoView {
    let form = RwSignal::new(ApplyForm::default());

    let value = move |field: ApplyField| {
        Signal::derive(move || form.with(|f| f.get(field).to_string()))
    };
    let setter = move |field: ApplyField| move |input: String| form.update(|f| f.set(field, input));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(uri) = form.try_update(ApplyForm::take_submission).flatten() else {
            return;
        };
        if let Err(err) = window().location().set_href(&uri) {
            log::warn!("Could not open the mail client: {:?}", err);
        }
    };

    view! {
        <Title text=SiteRoute::Apply.title()/>
        <div class="page apply">
            <Header variant=HeaderVariant::Blue/>
            <Hero
                title="Apply Now"
                subtitle="Complete the form below and your application will open in your email app, ready to send."
            />
            <section class="apply-section">
                <form class="apply-form" on:submit=on_submit>
                    <h3>"Student Information"</h3>
                    <TextField
                        label=ApplyField::FullName.label()
                        id="fullName"
                        placeholder="Student's full name"
                        value=value(ApplyField::FullName)
                        on_input=setter(ApplyField::FullName)
                    />
                    <TextField
                        label=ApplyField::DateOfBirth.label()
                        id="dob"
                        input_type="date"
                        value=value(ApplyField::DateOfBirth)
                        on_input=setter(ApplyField::DateOfBirth)
                    />
                    <SelectField
                        label=ApplyField::Gender.label()
                        id="gender"
                        prompt="Select gender"
                        options=GENDERS.to_vec()
                        value=value(ApplyField::Gender)
                        on_change=setter(ApplyField::Gender)
                    />
                    <SelectField
                        label=ApplyField::Grade.label()
                        id="grade"
                        prompt="Select grade"
                        options=GRADE_OPTIONS.to_vec()
                        value=value(ApplyField::Grade)
                        on_change=setter(ApplyField::Grade)
                    />

                    <h3>"Parent / Guardian"</h3>
                    <TextField
                        label=ApplyField::ParentName.label()
                        id="parentName"
                        placeholder="Parent or guardian's full name"
                        value=value(ApplyField::ParentName)
                        on_input=setter(ApplyField::ParentName)
                    />
                    <TextField
                        label=ApplyField::ParentContact.label()
                        id="parentContact"
                        input_type="tel"
                        placeholder="+233 ..."
                        value=value(ApplyField::ParentContact)
                        on_input=setter(ApplyField::ParentContact)
                    />
                    <TextField
                        label=ApplyField::Address.label()
                        id="address"
                        placeholder="House number, street and town"
                        value=value(ApplyField::Address)
                        on_input=setter(ApplyField::Address)
                    />

                    <SubmitButton label="Submit Application"/>
                </form>
                <p class="apply-alt">
                    "Prefer paper? "
                    <a href=DOWNLOAD_FORM_LINK.path download="">{DOWNLOAD_FORM_LINK.label}</a>
                </p>
            </section>
            <Footer/>
        </div>
    }
}
