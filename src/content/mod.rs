//! Static site content. Everything here is fixed at build time and rendered
//! as-is by the page components.

pub mod about;
pub mod admissions;
pub mod curriculum;
pub mod events;
pub mod gallery;
pub mod home;

use crate::models::{NavLink, SiteRoute};

pub const SCHOOL_NAME: &str = "Delight International School";
pub const SCHOOL_EMAIL: &str = "delightintschool@gmail.com";
pub const PHONE_NUMBERS: [&str; 2] = ["+233 244 113 286", "+233 277 776 449"];
pub const WHATSAPP: &str = "WhatsApp (+233244113286 , +233277776449)";
pub const POSTAL_ADDRESS: &str = "Box AN 5044 Accra North";
pub const BRANCHES: [&str; 2] = [
    "Branch 1 @ Accra ~ Kotobabi, Ghana",
    "Branch 2 @ Accra ~ Ofankor, Ghana",
];
pub const OFFICE_HOURS: [&str; 2] = [
    "Monday - Friday: 8:00 AM - 4:00 PM",
    "Saturday & Sunday: Closed",
];
pub const COPYRIGHT_YEAR: u16 = 2025;

pub const LOGO: &str = "/images/logo.jpg";
/// Printable admission form, kept under its original (space-containing) filename.
pub const ADMISSION_FORM_PDF: &str = "/files/ADMISSION%20FORM%20NEW.pdf";
/// Hosted online application form used by the Admissions page.
pub const ONLINE_APPLICATION_URL: &str = "https://docs.google.com/forms/d/e/1FAIpQLSe0gID4VYQBk6m1ZTvgodypO1bKIYs1m43R22ueAxqXClhK4Q/viewform?usp=sharing&ouid=114204056174231630483";

/// Header navigation, in display order.
pub const PRIMARY_NAV: [NavLink; 8] = [
    NavLink::route(SiteRoute::Home),
    NavLink::route(SiteRoute::About),
    NavLink::route(SiteRoute::Admissions),
    NavLink::route(SiteRoute::Curriculum),
    NavLink::route(SiteRoute::Gallery),
    NavLink::route(SiteRoute::Events),
    NavLink::route(SiteRoute::Contact),
    NavLink::route(SiteRoute::Apply),
];

pub const DOWNLOAD_FORM_LINK: NavLink = NavLink::external("Download Form", ADMISSION_FORM_PDF);
