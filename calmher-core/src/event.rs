//! The simplified calendar event model.
//!
//! This is the shape exchanged with the UI, the schedule generator and
//! `.json` uploads. It is deliberately looser than a VEVENT: times are
//! naive `YYYY-MM-DDTHH:MM` strings with no timezone identity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A calendar event as seen by the wellness planner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub title: String,
    /// Local date-time, `YYYY-MM-DDTHH:MM`
    #[serde(default)]
    pub start: String,
    /// Local date-time, `YYYY-MM-DDTHH:MM`
    #[serde(default)]
    pub end: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-text notes written by the schedule generator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Application-level tag (meditation, journaling, ...). Not part of iCalendar.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Event {
    pub fn new(title: impl Into<String>, start: impl Into<String>, end: impl Into<String>) -> Self {
        Event {
            title: title.into(),
            start: start.into(),
            end: end.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Whether title, start and end are all present and non-empty.
    pub fn has_required_fields(&self) -> bool {
        !self.title.is_empty() && !self.start.is_empty() && !self.end.is_empty()
    }

    /// Text written to DESCRIPTION on export: notes, then description, then nothing.
    pub fn export_description(&self) -> &str {
        self.notes
            .as_deref()
            .or(self.description.as_deref())
            .unwrap_or("")
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.start, self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_field_uses_json_key_type() {
        let event = Event::new("Meditation", "2026-02-09T10:00", "2026-02-09T10:30")
            .with_kind("meditation");

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "meditation");
        assert!(json.get("kind").is_none());
        // Absent optionals are not serialized
        assert!(json.get("notes").is_none());
        assert!(json.get("location").is_none());
    }

    #[test]
    fn test_deserialize_generator_event() {
        let json = r#"{
            "title": "Journaling",
            "type": "journaling",
            "start": "2026-02-10T08:00",
            "end": "2026-02-10T08:20",
            "notes": "Write three things you noticed"
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.title, "Journaling");
        assert_eq!(event.kind.as_deref(), Some("journaling"));
        assert_eq!(event.notes.as_deref(), Some("Write three things you noticed"));
        assert!(event.has_required_fields());
    }

    #[test]
    fn test_missing_required_field_deserializes_as_empty() {
        let event: Event = serde_json::from_str(r#"{"title": "No times"}"#).unwrap();
        assert!(!event.has_required_fields());
    }

    #[test]
    fn test_export_description_prefers_notes() {
        let event = Event::new("Rest", "2026-02-09T10:00", "2026-02-09T11:00")
            .with_description("from description")
            .with_notes("from notes");
        assert_eq!(event.export_description(), "from notes");

        let event = Event::new("Rest", "2026-02-09T10:00", "2026-02-09T11:00")
            .with_description("from description");
        assert_eq!(event.export_description(), "from description");

        let event = Event::new("Rest", "2026-02-09T10:00", "2026-02-09T11:00");
        assert_eq!(event.export_description(), "");
    }

    #[test]
    fn test_display() {
        let event = Event::new("Meditation", "2026-02-09T10:00", "2026-02-09T11:00");
        assert_eq!(event.to_string(), "2026-02-09T10:00 Meditation");
    }
}
