use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::home::{
    ABOUT_CHECKLIST, ABOUT_PHOTO, ABOUT_SUMMARY, CAMPUS_PREVIEW, FACILITIES, HERO_BACKGROUNDS,
    HERO_PHOTOS, PROGRAMS, STATS, TESTIMONIALS,
};
use crate::content::{ADMISSION_FORM_PDF, LOGO, SCHOOL_NAME};
use crate::frontend::components::{Footer, Header};
use crate::models::SiteRoute;
use crate::slideshow::{Slideshow, SLIDE_INTERVAL};

#[component]
pub fn HomePage() -> impl IntoView {
    let slides = RwSignal::new(Slideshow::new(HERO_BACKGROUNDS.len()));

    // Browser only: effects never run during server rendering. The interval is
    // cleared when the page's owner is disposed on navigation.
    Effect::new(move |_| {
        match set_interval_with_handle(move || slides.update(Slideshow::advance), SLIDE_INTERVAL) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(err) => log::warn!("Slideshow timer unavailable: {:?}", err),
        }
    });

    view! {
        <Title text=SiteRoute::Home.title()/>
        <div class="page home">
            <div class="floating-elements" aria-hidden="true">
                <img class="float-1 float-logo" src=LOGO alt=format!("{SCHOOL_NAME} logo")/>
                <span class="float-2">"✏️"</span>
                <span class="float-3">"🎓"</span>
                <img class="float-4 float-logo" src=LOGO alt=format!("{SCHOOL_NAME} logo")/>
                <span class="float-5">"📐"</span>
                <span class="float-6">"🔬"</span>
            </div>

            <Header/>

            <section class="home-hero">
                <div class="hero-backgrounds">
                    {HERO_BACKGROUNDS
                        .iter()
                        .enumerate()
                        .map(|(i, image)| view! {
                            <div
                                class=move || {
                                    if slides.with(|s| s.is_current(i)) { "hero-bg active" } else { "hero-bg" }
                                }
                                style=format!("background-image: url({image})")
                            ></div>
                        })
                        .collect_view()}
                </div>
                <div class="hero-overlay"></div>
                <div class="hero-content">
                    <span class="badge">"🏆 Excellence in Education Since 2010"</span>
                    <h1>"Where Young Minds " <span class="highlight">"Blossom"</span></h1>
                    <p>
                        "Empowering students with knowledge, creativity, and integrity to succeed in a rapidly changing world."
                    </p>
                    <div class="hero-buttons">
                        <a href=SiteRoute::Apply.path() class="primary-btn">"Start Your Journey " <span>"→"</span></a>
                        <a href=ADMISSION_FORM_PDF class="secondary-btn" download="">"Download Form"</a>
                        <a href=SiteRoute::Gallery.path() class="secondary-btn">
                            <span class="play-icon">"▶"</span> " Virtual Tour"
                        </a>
                    </div>
                </div>
                <div class="hero-images">
                    {HERO_PHOTOS
                        .iter()
                        .enumerate()
                        .map(|(i, photo)| view! {
                            <img src=photo.src alt=photo.alt class=format!("hero-img-{}", i + 1)/>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="stats-section">
                <div class="stats-container">
                    {STATS
                        .iter()
                        .map(|stat| view! {
                            <div class="stat-card">
                                <span class="stat-number">{stat.number}</span>
                                <span class="stat-label">{stat.label}</span>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="features-section">
                <div class="section-header">
                    <span class="section-badge">"✨ Our Facilities"</span>
                    <h2>"World-Class Learning Environment"</h2>
                    <p>"We provide everything your child needs to thrive academically and personally"</p>
                </div>
                <div class="features-grid">
                    {FACILITIES
                        .iter()
                        .map(|feature| view! {
                            <div class="feature-card">
                                <div class="feature-icon">{feature.icon}</div>
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="gallery-preview">
                <div class="gallery-grid">
                    {CAMPUS_PREVIEW
                        .iter()
                        .map(|item| view! {
                            <div class="gallery-item">
                                <img src=item.src alt=item.alt/>
                                <div class="gallery-overlay"><span>{item.caption}</span></div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="about-preview">
                <div class="about-images">
                    <img src=ABOUT_PHOTO alt="African teacher with students" class="about-img"/>
                    <div class="exp-badge">
                        <span class="exp-number">"20+"</span>
                        <span>"Years"</span>
                    </div>
                </div>
                <div class="about-content">
                    <span class="section-badge">"🏫 About Us"</span>
                    <h2>"Nurturing Tomorrow's Leaders Today"</h2>
                    <p>{ABOUT_SUMMARY}</p>
                    <ul class="check-list">
                        {ABOUT_CHECKLIST.iter().map(|item| view! { <li>"✓ " {*item}</li> }).collect_view()}
                    </ul>
                    <a href=SiteRoute::About.path() class="learn-more-btn">"Learn More About Us →"</a>
                </div>
            </section>

            <section class="programs-section">
                <div class="section-header">
                    <span class="section-badge">"📚 Our Programs"</span>
                    <h2>"Education for Every Stage"</h2>
                </div>
                <div class="programs-grid">
                    {PROGRAMS
                        .iter()
                        .map(|program| view! {
                            <div class="program-card">
                                {program.image_url.map(|src| view! { <img src=src alt=program.title/> })}
                                <div class="program-content">
                                    <span class="program-age">{program.ages}</span>
                                    <h3>{program.title}</h3>
                                    <p>{program.summary}</p>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="testimonials-section">
                <div class="section-header">
                    <span class="section-badge">"💬 Testimonials"</span>
                    <h2>"What Parents & Students Say"</h2>
                </div>
                <div class="testimonials-grid">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| view! {
                            <div class="testimonial-card">
                                <div class="quote-icon">"\""</div>
                                <p>{t.quote}</p>
                                <div class="testimonial-author">
                                    <div class="avatar">{t.initial()}</div>
                                    <div>
                                        <strong>{t.author}</strong>
                                        <span>{t.role}</span>
                                    </div>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="cta-section">
                <h2>"Be Part of Our Academic Journey"</h2>
                <p>"Enroll your child today and experience quality education that inspires confidence and excellence."</p>
                <div class="cta-buttons">
                    <a href=SiteRoute::Apply.path() class="cta-primary-btn">"Apply Now"</a>
                    <a href=ADMISSION_FORM_PDF class="cta-secondary-btn" download="">"Download Form"</a>
                </div>
            </section>

            <Footer with_contact=true/>
        </div>
    }
}
