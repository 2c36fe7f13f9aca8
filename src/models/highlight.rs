//! Small records for the home and admissions page sections.

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

impl Testimonial {
    pub fn initial(&self) -> String {
        self.author.chars().next().map(String::from).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Program {
    pub title: &'static str,
    pub ages: &'static str,
    pub summary: &'static str,
    pub image_url: Option<&'static str>,
}

/// A captioned photo in the home page preview grid.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Showcase {
    pub src: &'static str,
    pub alt: &'static str,
    pub caption: &'static str,
}
