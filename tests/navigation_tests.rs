mod common;

#[cfg(test)]
pub mod navigation_tests {
    use delight_school::content::PRIMARY_NAV;
    use delight_school::models::*;

    #[test]
    fn test_primary_nav_order() {
        let labels: Vec<&str> = PRIMARY_NAV.iter().map(|link| link.label).collect();
        assert_eq!(
            labels,
            vec![
                "Home",
                "About",
                "Admissions",
                "Curriculum",
                "Gallery",
                "Upcoming Events",
                "Contact",
                "Apply Now",
            ]
        );
    }

    #[test]
    fn test_active_index_exact_match() {
        assert_eq!(active_index(&PRIMARY_NAV, "/"), Some(0));
        assert_eq!(active_index(&PRIMARY_NAV, "/events"), Some(5));
        assert_eq!(active_index(&PRIMARY_NAV, "/contact"), Some(6));
    }

    #[test]
    fn test_active_index_at_most_one() {
        for route in SiteRoute::ALL {
            let active = PRIMARY_NAV
                .iter()
                .filter(|link| link.is_active(route.path()))
                .count();
            assert!(active <= 1, "{route} marked {active} links");
        }
    }

    #[test]
    fn test_active_index_fails_on_prefix() {
        assert_eq!(active_index(&PRIMARY_NAV, "/about/team"), None);
        assert_eq!(active_index(&PRIMARY_NAV, "/about/"), None);
        assert_eq!(active_index(&PRIMARY_NAV, "/unknown"), None);
    }

    #[test]
    fn test_apply_link_never_highlighted() {
        assert_eq!(active_index(&PRIMARY_NAV, "/apply"), None);
    }

    #[test]
    fn test_external_link_never_active() {
        let link = NavLink::external("Download Form", "/files/form.pdf");
        assert!(!link.is_active("/files/form.pdf"));
    }

    #[test]
    fn test_site_route_from_path() {
        for route in SiteRoute::ALL {
            assert_eq!(SiteRoute::from_path(route.path()), Some(route));
        }
        assert_eq!(SiteRoute::from_path("/gallery/"), None);
        assert_eq!(SiteRoute::from_path(""), None);
    }

    #[test]
    fn test_site_route_titles_name_school() {
        for route in SiteRoute::ALL {
            assert!(route.title().contains("Delight International School"));
        }
    }
}
