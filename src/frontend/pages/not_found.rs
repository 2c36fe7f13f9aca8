//! Fallback page for unmatched routes

use leptos::prelude::*;
use leptos_meta::Title;

use crate::frontend::components::{Footer, Header};

/// Rendered for any path the router does not know; answers 404 when server-rendered.
#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_actix::ResponseOptions>() {
        response.set_status(actix_web::http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Page Not Found | Delight International School"/>
        <div class="page not-found">
            <Header/>
            <div class="not-found-content">
                <h1 class="not-found-code">"404"</h1>
                <p class="not-found-message">"Page not found"</p>
                <p class="not-found-desc">"The page you're looking for doesn't exist or has been moved."</p>
                <a href="/" class="primary-btn">"Return Home"</a>
            </div>
            <Footer/>
        </div>
    }
}
