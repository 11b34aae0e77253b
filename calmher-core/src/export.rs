//! Download boundary: rendering events for the user to save.

use std::fmt;
use std::str::FromStr;

use crate::constants::DEFAULT_EXPORT_STEM;
use crate::error::{CalmherError, CalmherResult};
use crate::event::Event;
use crate::ics::generate_ics;

/// A downloadable representation of an event list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Ics,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Ics => "ics",
            ExportFormat::Json => "json",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Ics => "text/calendar",
            ExportFormat::Json => "application/json",
        }
    }

    /// `<stem>.<extension>`, using `wellness-schedule` when no stem is given.
    pub fn file_name(&self, stem: Option<&str>) -> String {
        format!("{}.{}", stem.unwrap_or(DEFAULT_EXPORT_STEM), self.extension())
    }

    /// Render events as file content. The calendar name only applies to ICS.
    pub fn render(&self, events: &[Event], calendar_name: Option<&str>) -> CalmherResult<String> {
        match self {
            ExportFormat::Ics => Ok(generate_ics(events, calendar_name)),
            ExportFormat::Json => Ok(serde_json::to_string_pretty(events)?),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = CalmherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ics" | "ical" | "icalendar" => Ok(ExportFormat::Ics),
            "json" => Ok(ExportFormat::Json),
            other => Err(CalmherError::Config(format!(
                "Unknown export format '{other}'. Expected 'ics' or 'json'"
            ))),
        }
    }
}
