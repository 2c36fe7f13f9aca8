pub mod components;
pub mod pages;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::content::SCHOOL_NAME;
use pages::{
    AboutPage, AdmissionsPage, ApplyPage, ContactPage, CurriculumPage, EventsPage, GalleryPage,
    HomePage, NotFound,
};

/// HTML shell for SSR - provides the full document structure
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root component: one page per path, `NotFound` for everything else
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/delight-school.css"/>
        <Link rel="icon" href="/images/logo.jpg"/>
        <Title text=SCHOOL_NAME/>
        <Meta name="description" content="Delight International School, Accra: nurturing young minds from nursery through junior high."/>

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/about") view=AboutPage/>
                    <Route path=path!("/admissions") view=AdmissionsPage/>
                    <Route path=path!("/curriculum") view=CurriculumPage/>
                    <Route path=path!("/gallery") view=GalleryPage/>
                    <Route path=path!("/events") view=EventsPage/>
                    <Route path=path!("/contact") view=ContactPage/>
                    <Route path=path!("/apply") view=ApplyPage/>
                </Routes>
            </main>
        </Router>
    }
}
