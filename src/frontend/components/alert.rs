use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum AlertVariant {
    #[default]
    Success,
    Error,
}

/// Inline status banner shown beneath a form.
#[component]
pub fn Alert(
    #[prop(into)] message: String,
    #[prop(optional)] variant: AlertVariant,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let (icon, class) = match variant {
        AlertVariant::Success => ("✓", "alert alert-success"),
        AlertVariant::Error => ("✕", "alert alert-error"),
    };

    view! {
        <div class=class role="status">
            <p>
                <span>{icon}</span>
                " "
                <span>{message}</span>
            </p>
            {children.map(|c| view! { <div class="alert-extra">{c()}</div> })}
        </div>
    }
}
