use chrono::NaiveDate;

const ISO_DATE: &str = "%Y-%m-%d";
const DISPLAY_DATE: &str = "%B %-d, %Y";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct EventEntry {
    pub id: u32,
    pub title: &'static str,
    /// ISO-8601 calendar date, e.g. `2026-02-15`.
    pub date: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub image_url: Option<&'static str>,
}

impl EventEntry {
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date, ISO_DATE).ok()
    }

    /// Long form such as "February 15, 2026"; falls back to the raw value.
    pub fn display_date(&self) -> String {
        match self.date() {
            Some(date) => date.format(DISPLAY_DATE).to_string(),
            None => self.date.to_string(),
        }
    }
}

/// Events in calendar order. Undated entries sort last, keeping their relative order.
pub fn chronological(events: &[EventEntry]) -> Vec<EventEntry> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|event| (event.date().is_none(), event.date()));
    sorted
}
