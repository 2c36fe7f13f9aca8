use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::about::{CORE_VALUES, LEARNING_AREAS, MISSION, VISION, WHO_WE_ARE};
use crate::frontend::components::{CardGrid, Footer, Header, HeaderVariant, Hero, HeroVariant};
use crate::models::SiteRoute;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text=SiteRoute::About.title()/>
        <div class="page about">
            <Header variant=HeaderVariant::Wine/>
            <Hero
                title="About Delight International School"
                subtitle="Inspiring young minds through excellence, discipline, and creativity."
                variant=HeroVariant::Wine
            />
            <section class="about-section">
                <h3>"Who We Are"</h3>
                <p>{WHO_WE_ARE}</p>
                <h3>"Our Mission"</h3>
                <p>{MISSION}</p>
                <h3>"Our Vision"</h3>
                <p>{VISION}</p>
                <h3>"Our Core Values"</h3>
                <CardGrid cards=&CORE_VALUES class="values"/>
                <h3>"Core Learning Areas"</h3>
                <p>
                    "Our curriculum combines academic rigor with creativity, moral education, and real-world problem-solving skills."
                </p>
                <CardGrid cards=&LEARNING_AREAS class="values"/>
            </section>
            <Footer/>
        </div>
    }
}
