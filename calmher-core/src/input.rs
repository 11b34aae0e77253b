//! Upload boundary: tagged calendar input.
//!
//! The caller decides which decoder applies (by file extension, or by
//! sniffing the content) before any parsing happens. There is no
//! "try JSON, fall back to ICS on failure" path.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::CalmherResult;
use crate::event::Event;
use crate::ics::parse_ics;
use crate::schedule::{ScheduleBody, ScheduleEvents};

/// Raw uploaded calendar content, tagged with its format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarInput {
    /// A JSON event list (or a schedule response carrying one)
    Json(String),
    /// iCalendar text
    Ics(String),
}

/// JSON uploads are a bare event list or a generator response, with or
/// without the endpoint's `{"success", "schedule"}` envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonUpload {
    Events(Vec<Event>),
    Schedule(ScheduleBody<ScheduleEvents>),
}

impl CalendarInput {
    /// Tag content by the uploaded file's extension, sniffing when the
    /// extension is neither `.ics` nor `.json`.
    pub fn from_file_name(name: &str, content: String) -> Self {
        let extension = Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("ics") => CalendarInput::Ics(content),
            Some("json") => CalendarInput::Json(content),
            _ => Self::sniff(content),
        }
    }

    /// Tag content by its first non-whitespace character: `[` or `{` is JSON,
    /// anything else is treated as iCalendar.
    pub fn sniff(content: String) -> Self {
        match content.trim_start().chars().next() {
            Some('[' | '{') => CalendarInput::Json(content),
            _ => CalendarInput::Ics(content),
        }
    }

    /// Short label for messages ("ics" or "json").
    pub fn format_name(&self) -> &'static str {
        match self {
            CalendarInput::Json(_) => "json",
            CalendarInput::Ics(_) => "ics",
        }
    }

    /// Decode into events. Only malformed JSON can fail; ICS parsing is
    /// permissive and returns whatever complete events it finds.
    pub fn into_events(self) -> CalmherResult<Vec<Event>> {
        match self {
            CalendarInput::Ics(content) => Ok(parse_ics(&content)),
            CalendarInput::Json(content) => {
                let events = match serde_json::from_str::<JsonUpload>(&content)? {
                    JsonUpload::Events(events) => events,
                    JsonUpload::Schedule(body) => body.into_inner().events,
                };
                debug!(count = events.len(), "Decoded JSON events");
                Ok(events)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalmherError;
    use crate::schedule::ScheduleResponse;

    const ICS: &str = "BEGIN:VCALENDAR\nBEGIN:VEVENT\nSUMMARY:Yoga\nDTSTART:20260209T070000\nDTEND:20260209T080000\nEND:VEVENT\nEND:VCALENDAR\n";

    #[test]
    fn test_extension_picks_format() {
        assert_eq!(
            CalendarInput::from_file_name("export.ics", "x".into()),
            CalendarInput::Ics("x".into())
        );
        assert_eq!(
            CalendarInput::from_file_name("events.JSON", "x".into()),
            CalendarInput::Json("x".into())
        );
    }

    #[test]
    fn test_extension_wins_over_content() {
        // A .ics file is never JSON-decoded, even if it looks like JSON
        let input = CalendarInput::from_file_name("odd.ics", "[]".into());
        assert_eq!(input.format_name(), "ics");
        assert!(input.into_events().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_extension_sniffs_content() {
        let input = CalendarInput::from_file_name("calendar.txt", "  [\n]".into());
        assert_eq!(input.format_name(), "json");

        let input = CalendarInput::from_file_name("calendar", ICS.into());
        assert_eq!(input.format_name(), "ics");
    }

    #[test]
    fn test_ics_input_parses_events() {
        let events = CalendarInput::Ics(ICS.into()).into_events().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Yoga");
        assert_eq!(events[0].start, "2026-02-09T07:00");
    }

    #[test]
    fn test_json_event_array() {
        let json = r#"[{"title":"Rest","start":"2026-02-09T13:00","end":"2026-02-09T13:30"}]"#;
        let events = CalendarInput::Json(json.into()).into_events().unwrap();
        assert_eq!(events, vec![Event::new("Rest", "2026-02-09T13:00", "2026-02-09T13:30")]);
    }

    #[test]
    fn test_json_schedule_response() {
        let json = r#"{
            "schedule_summary": {"burnout_level": 2},
            "events": [{"title":"Rest","start":"2026-02-09T13:00","end":"2026-02-09T13:30","type":"rest"}]
        }"#;
        let events = CalendarInput::Json(json.into()).into_events().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind.as_deref(), Some("rest"));
    }

    #[test]
    fn test_json_schedule_envelope() {
        let json = r#"{"success": true, "schedule": {
            "schedule_summary": {
                "burnout_level": 2,
                "interpreted_burnout_category": "moderate",
                "date_range": {"start": "2026-02-09", "end": "2026-02-09"},
                "total_events_created": 1
            },
            "events": [{"title":"Walk","start":"2026-02-09T16:00","end":"2026-02-09T16:30"}]
        }}"#;
        let events = CalendarInput::Json(json.into()).into_events().unwrap();
        assert_eq!(events[0].title, "Walk");
    }

    #[test]
    fn test_json_upload_matches_schedule_decoding() {
        let schedule = r#"{
            "schedule_summary": {
                "burnout_level": 3,
                "interpreted_burnout_category": "high",
                "date_range": {"start": "2026-02-09", "end": "2026-02-10"},
                "total_events_created": 2
            },
            "events": [
                {"title":"Stretch","start":"2026-02-09T07:00","end":"2026-02-09T07:15","type":"movement"},
                {"title":"Journal","start":"2026-02-10T21:00","end":"2026-02-10T21:20","notes":"Three wins"}
            ]
        }"#;
        let envelope = format!(r#"{{"success": true, "schedule": {schedule}}}"#);

        for json in [schedule.to_string(), envelope] {
            let expected = ScheduleResponse::from_json(&json).unwrap().events;
            let events = CalendarInput::Json(json).into_events().unwrap();
            assert_eq!(events, expected);
            assert_eq!(events.len(), 2);
        }
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let result = CalendarInput::Json("[{".into()).into_events();
        assert!(matches!(result, Err(CalmherError::Json(_))));
    }
}
