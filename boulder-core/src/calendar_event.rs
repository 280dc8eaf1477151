//! Shapes handed to calendar web widgets.
//!
//! Widgets expect events as `{ title, start, extendedProps }` and a separate
//! options object controlling the calendar view.

use serde::{Deserialize, Serialize};

use crate::appointment::Appointment;
use crate::date::format_date;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub title: String,
    /// Appointment date as `YYYY-MM-DD`
    pub start: String,
    pub extended_props: ExtendedProps,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedProps {
    pub participants: Vec<String>,
}

impl From<&Appointment> for CalendarEvent {
    fn from(appt: &Appointment) -> Self {
        CalendarEvent {
            title: appt.title.clone(),
            start: format_date(appt.date),
            extended_props: ExtendedProps {
                participants: appt.participants.clone(),
            },
        }
    }
}

impl From<Appointment> for CalendarEvent {
    fn from(appt: Appointment) -> Self {
        CalendarEvent {
            start: format_date(appt.date),
            title: appt.title,
            extended_props: ExtendedProps {
                participants: appt.participants,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderToolbar {
    pub left: String,
    pub center: String,
    pub right: String,
}

impl Default for HeaderToolbar {
    fn default() -> Self {
        HeaderToolbar {
            left: "today prev,next".to_string(),
            center: "title".to_string(),
            right: "dayGridMonth,dayGridWeek".to_string(),
        }
    }
}

/// Calendar view options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarOptions {
    pub header_toolbar: HeaderToolbar,
    pub initial_view: String,
    pub selectable: bool,
    pub select_mirror: bool,
    pub day_max_events: bool,
    pub week_numbers: bool,
    pub nav_links: bool,
}

impl CalendarOptions {
    pub fn with_initial_view(view: impl Into<String>) -> Self {
        CalendarOptions {
            initial_view: view.into(),
            ..Default::default()
        }
    }
}

impl Default for CalendarOptions {
    fn default() -> Self {
        CalendarOptions {
            header_toolbar: HeaderToolbar::default(),
            initial_view: "dayGridWeek".to_string(),
            selectable: true,
            select_mirror: true,
            day_max_events: true,
            week_numbers: true,
            nav_links: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn event_serializes_in_widget_shape() {
        let appt = Appointment::new(
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            "Bouldern",
            vec!["Alice".to_string(), "Bob".to_string()],
        );

        let value = serde_json::to_value(CalendarEvent::from(&appt)).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "Bouldern",
                "start": "2024-06-01",
                "extendedProps": { "participants": ["Alice", "Bob"] }
            })
        );
    }

    #[test]
    fn options_use_camel_case_keys() {
        let value = serde_json::to_value(CalendarOptions::with_initial_view("dayGridMonth")).unwrap();

        assert_eq!(value["initialView"], "dayGridMonth");
        assert_eq!(value["headerToolbar"]["right"], "dayGridMonth,dayGridWeek");
        assert_eq!(value["weekNumbers"], true);
        assert_eq!(value["dayMaxEvents"], true);
    }
}
