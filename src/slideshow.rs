//! Auto-advancing index for the home page hero backgrounds.

use std::time::Duration;

/// Time each background stays on screen.
pub const SLIDE_INTERVAL: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Slideshow {
    index: usize,
    len: usize,
}

impl Slideshow {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_current(&self, index: usize) -> bool {
        !self.is_empty() && self.index == index
    }

    /// Moves to the next slide, wrapping to the first after the last.
    /// An empty slideshow stays at 0.
    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }
}
