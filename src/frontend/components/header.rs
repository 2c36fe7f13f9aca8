use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::content::{PRIMARY_NAV, SCHOOL_NAME};
use crate::models::{active_index, NavLink};

/// Colour theme of the header bar; affects styling only.
#[derive(Clone, Copy, Default, PartialEq)]
pub enum HeaderVariant {
    #[default]
    Default,
    Wine,
    Blue,
    Cream,
}

impl HeaderVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Wine => "wine",
            Self::Blue => "blue",
            Self::Cream => "cream",
        }
    }
}

/// Site navigation. The link matching the router's current path exactly is marked active.
#[component]
pub fn Header(#[prop(optional)] variant: HeaderVariant) -> impl IntoView {
    let pathname = use_location().pathname;
    let active = Memo::new(move |_| pathname.with(|path| active_index(&PRIMARY_NAV, path)));

    view! {
        <header class=format!("site-header header-{}", variant.as_str())>
            <nav class="site-nav">
                <a href="/" class="site-logo">{SCHOOL_NAME}</a>
                <ul class="nav-list">
                    {PRIMARY_NAV
                        .iter()
                        .enumerate()
                        .map(|(i, link)| {
                            let is_active = Signal::derive(move || active.get() == Some(i));
                            view! {
                                <li>
                                    <NavItem link=*link active=is_active/>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </header>
    }
}

#[component]
fn NavItem(link: NavLink, active: Signal<bool>) -> impl IntoView {
    let base = if link.highlight_when_active { "nav-link" } else { "nav-link apply-btn" };

    view! {
        <a
            href=link.path
            class=move || if active.get() { format!("{base} active") } else { base.to_string() }
            aria-current=move || active.get().then_some("page")
            target=link.external.then_some("_blank")
            rel=link.external.then_some("noreferrer")
        >
            {link.label}
        </a>
    }
}
