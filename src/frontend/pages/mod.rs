//! One component per routable page

mod about;
mod admissions;
mod apply;
mod contact;
mod curriculum;
mod events;
mod gallery;
mod home;
mod not_found;

pub use about::AboutPage;
pub use admissions::AdmissionsPage;
pub use apply::ApplyPage;
pub use contact::ContactPage;
pub use curriculum::CurriculumPage;
pub use events::EventsPage;
pub use gallery::{GalleryGrid, GalleryPage};
pub use home::HomePage;
pub use not_found::NotFound;
