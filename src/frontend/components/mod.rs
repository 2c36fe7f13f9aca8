//! Reusable layout and UI components

mod alert;
mod button;
mod card;
mod footer;
mod header;
mod hero;
mod input;

pub use alert::{Alert, AlertVariant};
pub use button::SubmitButton;
pub use card::{Card, CardGrid};
pub use footer::{Footer, FooterVariant};
pub use header::{Header, HeaderVariant};
pub use hero::{Hero, HeroVariant};
pub use input::{SelectField, TextAreaField, TextField};
