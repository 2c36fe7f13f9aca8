use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::gallery::gallery_images;
use crate::frontend::components::{Footer, Header, HeaderVariant, Hero, HeroVariant};
use crate::models::{GalleryImage, SiteRoute};

#[component]
pub fn GalleryPage() -> impl IntoView {
    view! {
        <Title text=SiteRoute::Gallery.title()/>
        <div class="page gallery">
            <Header variant=HeaderVariant::Cream/>
            <Hero
                title="Our Gallery"
                subtitle="Capturing memorable moments of learning, creativity, and community at Delight International School."
                variant=HeroVariant::Cream
            />
            <section class="gallery-section">
                <h2 class="gallery-title">"Our Gallery"</h2>
                <GalleryGrid images=gallery_images()/>
            </section>
            <Footer/>
        </div>
    }
}

/// One `<img>` per image, in the order given.
#[component]
pub fn GalleryGrid(images: Vec<GalleryImage>) -> impl IntoView {
    view! {
        <div class="gallery-container">
            {images
                .into_iter()
                .map(|image| view! { <img src=image.src alt=image.alt loading="lazy"/> })
                .collect_view()}
        </div>
    }
}
