use leptos::prelude::*;

use crate::models::{CardVariant, ContentCard};

#[component]
pub fn Card(
    title: &'static str,
    description: &'static str,
    #[prop(optional)] variant: CardVariant,
) -> impl IntoView {
    view! {
        <div class=format!("card card-{}", variant.as_str())>
            <h4>{title}</h4>
            <p>{description}</p>
        </div>
    }
}

/// One `Card` per entry, in order.
#[component]
pub fn CardGrid(
    cards: &'static [ContentCard],
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <div class=format!("card-grid {class}")>
            {cards
                .iter()
                .map(|card| view! {
                    <Card title=card.title description=card.description variant=card.variant/>
                })
                .collect_view()}
        </div>
    }
}
