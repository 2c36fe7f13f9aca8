use super::SiteRoute;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
    /// Opens outside the single-page router (new tab or download).
    pub external: bool,
    pub highlight_when_active: bool,
}

impl NavLink {
    pub const fn route(route: SiteRoute) -> Self {
        Self {
            label: route.label(),
            path: route.path(),
            external: false,
            // Apply Now is a call-to-action button, never the highlighted tab.
            highlight_when_active: !matches!(route, SiteRoute::Apply),
        }
    }

    pub const fn external(label: &'static str, path: &'static str) -> Self {
        Self {
            label,
            path,
            external: true,
            highlight_when_active: false,
        }
    }

    pub fn is_active(&self, current_path: &str) -> bool {
        self.highlight_when_active && !self.external && self.path == current_path
    }
}

/// Index of the link to mark active for `current_path`, if any.
pub fn active_index(links: &[NavLink], current_path: &str) -> Option<usize> {
    links.iter().position(|link| link.is_active(current_path))
}
