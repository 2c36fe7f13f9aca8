use leptos::prelude::*;

/// Form submit button; disabled and relabelled while `busy` is true.
#[component]
pub fn SubmitButton(
    #[prop(into)] label: String,
    #[prop(optional, into)] busy: Option<Signal<bool>>,
    #[prop(optional, into)] busy_label: String,
) -> impl IntoView {
    let is_busy = move || busy.map(|b| b.get()).unwrap_or(false);
    let busy_label = if busy_label.is_empty() {
        "Sending...".to_string()
    } else {
        busy_label
    };

    view! {
        <button type="submit" class="submit-btn" disabled=is_busy>
            {move || if is_busy() { busy_label.clone() } else { label.clone() }}
        </button>
    }
}
