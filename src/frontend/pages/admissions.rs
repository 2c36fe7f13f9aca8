use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::admissions::{ENTRY_PROGRAMS, REQUIREMENTS, STEPS};
use crate::content::{ADMISSION_FORM_PDF, ONLINE_APPLICATION_URL};
use crate::frontend::components::{CardGrid, Footer, Header, HeaderVariant, Hero};
use crate::models::SiteRoute;

#[component]
pub fn AdmissionsPage() -> impl IntoView {
    view! {
        <Title text=SiteRoute::Admissions.title()/>
        <div class="page admissions">
            <Header variant=HeaderVariant::Blue/>
            <Hero
                title="Admissions"
                subtitle="Join a community dedicated to nurturing excellence and inspiring young minds for the future."
            />
            <section class="admission-section">
                <h3>"Welcome to Delight International School Admissions"</h3>
                <p>
                    "At Delight International School, we are excited to welcome new students and families into our vibrant learning community. "
                    "Our admissions process is designed to ensure that each child's unique abilities and potential are recognized and nurtured from day one."
                </p>

                <h3>"Admission Process"</h3>
                <CardGrid cards=&STEPS class="steps"/>

                <div class="programs-section">
                    <h3>"Admissions & Entry"</h3>
                    <p>
                        "We accept applications year-round. Our admission process is simple: submit an application, "
                        "attend an open day (optional), and complete a brief assessment/interview."
                    </p>
                    <div class="programs">
                        {ENTRY_PROGRAMS
                            .iter()
                            .map(|program| view! {
                                <div class="program-card">
                                    <strong>{program.title}</strong>
                                    <p>{format!("{} • {}", program.ages, program.summary)}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>

                <h3>"Admission Requirements"</h3>
                <p>"Parents or guardians should submit the following documents during the admission process:"</p>
                <ul class="requirements-list">
                    {REQUIREMENTS.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                </ul>

                <div class="apply-cta">
                    <h3>"Ready to Join Us?"</h3>
                    <p>"Begin your child's journey with Delight International School today."</p>
                    <div class="apply-actions">
                        <a class="apply-btn" href=ONLINE_APPLICATION_URL target="_blank" rel="noreferrer">
                            "Apply Now"
                        </a>
                        <a class="download-btn" href=ADMISSION_FORM_PDF download="">"Download Form"</a>
                    </div>
                </div>
            </section>
            <Footer/>
        </div>
    }
}
