use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::events::EVENTS;
use crate::frontend::components::{Footer, Header, Hero};
use crate::models::{chronological, EventEntry, SiteRoute};

#[component]
pub fn EventsPage() -> impl IntoView {
    view! {
        <Title text=SiteRoute::Events.title()/>
        <div class="page events">
            <Header/>
            <Hero
                title="Upcoming Events"
                subtitle="Stay informed about school activities and events"
            />
            <div class="events-main">
                <section class="events-list">
                    {chronological(&EVENTS)
                        .into_iter()
                        .map(|event| view! { <EventCard event=event/> })
                        .collect_view()}
                </section>
            </div>
            <Footer/>
        </div>
    }
}

#[component]
fn EventCard(event: EventEntry) -> impl IntoView {
    view! {
        <article class="event-card" id=format!("event-{}", event.id)>
            {event.image_url.map(|src| view! { <img class="event-image" src=src alt=event.title loading="lazy"/> })}
            <div class="event-header">
                <h3 class="event-title">{event.title}</h3>
                <time class="event-date" datetime=event.date>{event.display_date()}</time>
            </div>
            <p class="event-location">"📍 " {event.location}</p>
            <p class="event-description">{event.description}</p>
        </article>
    }
}
