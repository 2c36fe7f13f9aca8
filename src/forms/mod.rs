//! Form state for the Apply and Contact pages.

mod apply;
mod contact;
mod mailto;

pub use apply::*;
pub use contact::*;
pub use mailto::*;
