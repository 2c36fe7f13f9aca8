use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::curriculum::SUBJECTS;
use crate::frontend::components::{CardGrid, Footer, Header, HeaderVariant, Hero, HeroVariant};
use crate::models::SiteRoute;

#[component]
pub fn CurriculumPage() -> impl IntoView {
    view! {
        <Title text=SiteRoute::Curriculum.title()/>
        <div class="page curriculum">
            <Header variant=HeaderVariant::Cream/>
            <Hero
                title="Our Curriculum"
                subtitle="Empowering students through a balanced curriculum focused on academics, creativity, and character development."
                variant=HeroVariant::Cream
            />
            <section class="curriculum-section">
                <h3>"Academic Excellence with Purpose"</h3>
                <p>
                    "Delight International School follows a holistic and engaging curriculum designed to inspire a lifelong love for learning. "
                    "Our curriculum combines academic rigor with creativity, moral education, and real-world problem-solving skills."
                </p>
                <h3>"Core Learning Areas"</h3>
                <CardGrid cards=&SUBJECTS class="curriculum-grid"/>
                <div class="apply-cta">
                    <h3>"Be Part of Our Academic Journey"</h3>
                    <p>"Enroll your child today and experience quality education that inspires confidence and excellence."</p>
                    <a href=SiteRoute::Apply.path() class="apply-btn">"Apply Now"</a>
                </div>
            </section>
            <Footer/>
        </div>
    }
}
