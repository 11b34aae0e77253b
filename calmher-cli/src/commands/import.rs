use std::path::Path;

use anyhow::Result;
use calmher_core::export::ExportFormat;

use super::{read_calendar, write_output};
use crate::render::render_event_list;

pub async fn run(file: &Path, output: Option<&Path>) -> Result<()> {
    let events = read_calendar(file).await?;

    for line in render_event_list(&events) {
        eprintln!("{}", line);
    }

    let json = ExportFormat::Json.render(&events, None)?;
    match output {
        Some(path) => write_output(path, &json).await?,
        None => println!("{}", json),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calmher_core::Event;

    #[tokio::test]
    async fn test_import_ics_to_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("work.ics");
        let output = dir.path().join("work.json");
        std::fs::write(
            &input,
            "BEGIN:VCALENDAR\nBEGIN:VEVENT\nSUMMARY:Review\nDTSTART;TZID=Europe/Paris:20260209T140000\nDTEND;TZID=Europe/Paris:20260209T150000\nLOCATION:Room%201\nEND:VEVENT\nEND:VCALENDAR\n",
        )
        .unwrap();

        run(&input, Some(&output)).await.unwrap();

        let events: Vec<Event> =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(
            events,
            vec![Event::new("Review", "2026-02-09T14:00", "2026-02-09T15:00").with_location("Room 1")]
        );
    }

    #[tokio::test]
    async fn test_import_with_no_events_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("empty.ics");
        let output = dir.path().join("empty.json");
        std::fs::write(&input, "BEGIN:VCALENDAR\nEND:VCALENDAR\n").unwrap();

        run(&input, Some(&output)).await.unwrap();
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "[]");
    }
}
