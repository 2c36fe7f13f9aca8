/// Every page the router can render, excluding the not-found fallback.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum SiteRoute {
    Home,
    About,
    Admissions,
    Curriculum,
    Gallery,
    Events,
    Contact,
    Apply,
}

impl SiteRoute {
    pub const ALL: [SiteRoute; 8] = [
        Self::Home,
        Self::About,
        Self::Admissions,
        Self::Curriculum,
        Self::Gallery,
        Self::Events,
        Self::Contact,
        Self::Apply,
    ];

    pub const fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Admissions => "/admissions",
            Self::Curriculum => "/curriculum",
            Self::Gallery => "/gallery",
            Self::Events => "/events",
            Self::Contact => "/contact",
            Self::Apply => "/apply",
        }
    }

    /// Label used in the site navigation.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Admissions => "Admissions",
            Self::Curriculum => "Curriculum",
            Self::Gallery => "Gallery",
            Self::Events => "Upcoming Events",
            Self::Contact => "Contact",
            Self::Apply => "Apply Now",
        }
    }

    /// Document title shown in the browser tab.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Delight International School",
            Self::About => "About Us | Delight International School",
            Self::Admissions => "Admissions | Delight International School",
            Self::Curriculum => "Curriculum | Delight International School",
            Self::Gallery => "Gallery | Delight International School",
            Self::Events => "Upcoming Events | Delight International School",
            Self::Contact => "Contact Us | Delight International School",
            Self::Apply => "Apply Now | Delight International School",
        }
    }

    /// Exact match only; `/about/` and `/about/team` resolve to nothing.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

impl std::fmt::Display for SiteRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
