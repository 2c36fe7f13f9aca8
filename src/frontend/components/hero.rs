use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum HeroVariant {
    #[default]
    Blue,
    Wine,
    Cream,
}

impl HeroVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Wine => "wine",
            Self::Cream => "cream",
        }
    }
}

/// Page banner. The call-to-action renders only when both its text and link are set.
#[component]
pub fn Hero(
    title: &'static str,
    subtitle: &'static str,
    #[prop(optional)] background_image: Option<&'static str>,
    #[prop(optional)] variant: HeroVariant,
    #[prop(optional)] cta_text: Option<&'static str>,
    #[prop(optional)] cta_link: Option<&'static str>,
) -> impl IntoView {
    let style = background_image.map(|image| {
        format!("background-image: linear-gradient(var(--overlay), var(--overlay)), url({image})")
    });
    let cta = cta_text.zip(cta_link);

    view! {
        <section class=format!("hero hero-{}", variant.as_str()) style=style>
            <h2>{title}</h2>
            <p>{subtitle}</p>
            {cta.map(|(text, link)| view! { <a href=link class="cta-button">{text}</a> })}
        </section>
    }
}
