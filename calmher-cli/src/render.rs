//! TUI rendering traits for calmher types.
//!
//! Extension traits that add colored terminal rendering to calmher-core
//! types using owo_colors. Everything here goes to stderr; stdout carries
//! JSON only.

use calmher_core::Event;
use calmher_core::schedule::BurnoutCategory;
use calmher_core::scoring::Severity;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let time = format!("{} → {}", self.start, self.end);
        match &self.kind {
            Some(kind) => format!("{} {} {}", time.dimmed(), self.title, format!("[{kind}]").dimmed()),
            None => format!("{} {}", time.dimmed(), self.title),
        }
    }
}

impl Render for Severity {
    fn render(&self) -> String {
        match self {
            Severity::Low => "low".green().to_string(),
            Severity::Medium => "medium".yellow().to_string(),
            Severity::High => "high".red().to_string(),
        }
    }
}

impl Render for BurnoutCategory {
    fn render(&self) -> String {
        match self {
            BurnoutCategory::Low => self.as_str().green().to_string(),
            BurnoutCategory::Moderate => self.as_str().yellow().to_string(),
            BurnoutCategory::High | BurnoutCategory::Critical => self.as_str().red().to_string(),
        }
    }
}

/// Threshold for compact view (show only the count instead of each event)
const COMPACT_THRESHOLD: usize = 10;

/// Render an event list: a count line, then each event unless there are many.
pub fn render_event_list(events: &[Event]) -> Vec<String> {
    if events.is_empty() {
        return vec!["No events found".dimmed().to_string()];
    }

    let mut lines = vec![format!(
        "{} {} {} loaded",
        "✓".green(),
        events.len(),
        pluralize("event", events.len())
    )];

    if events.len() <= COMPACT_THRESHOLD {
        lines.extend(events.iter().map(|e| format!("   {}", e.render())));
    }

    lines
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_is_informational() {
        let lines = render_event_list(&[]);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("No events found"));
    }

    #[test]
    fn test_count_line() {
        let events = vec![Event::new("Rest", "2026-02-09T13:00", "2026-02-09T13:30")];
        let lines = render_event_list(&events);
        assert!(lines[0].contains("1 event loaded"));
        assert!(lines[1].contains("Rest"));
    }

    #[test]
    fn test_many_events_are_compacted() {
        let events: Vec<Event> = (0..12)
            .map(|i| Event::new(format!("Block {i}"), "2026-02-09T13:00", "2026-02-09T13:30"))
            .collect();
        let lines = render_event_list(&events);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("12 events loaded"));
    }
}
