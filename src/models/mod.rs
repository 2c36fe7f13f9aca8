pub use content_card::*;
pub use event::*;
pub use gallery_image::*;
pub use highlight::*;
pub use nav_link::*;
pub use route::*;

mod content_card;
mod event;
mod gallery_image;
mod highlight;
mod nav_link;
mod route;
