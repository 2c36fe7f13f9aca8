use leptos::prelude::*;

/// Required single-line input bound to `value`.
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] id: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] input_type: String,
    value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    let input_type = if input_type.is_empty() {
        "text".to_string()
    } else {
        input_type
    };

    view! {
        <label for=id.clone()>{label}</label>
        <input
            type=input_type
            id=id.clone()
            name=id
            placeholder=placeholder
            required=true
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}

#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    #[prop(into)] id: String,
    #[prop(optional, into)] placeholder: String,
    rows: u32,
    value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <label for=id.clone()>{label}</label>
        <textarea
            id=id.clone()
            name=id
            rows=rows.to_string()
            placeholder=placeholder
            required=true
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        ></textarea>
    }
}

/// Required drop-down; `prompt` is the empty first option.
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    #[prop(into)] id: String,
    #[prop(into)] prompt: String,
    /// `(value, text)` pairs
    options: Vec<(&'static str, &'static str)>,
    value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label for=id.clone()>{label}</label>
        <select
            id=id.clone()
            name=id
            required=true
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="">{prompt}</option>
            {options
                .into_iter()
                .map(|(option_value, text)| view! { <option value=option_value>{text}</option> })
                .collect_view()}
        </select>
    }
}
