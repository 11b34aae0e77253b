use std::path::{Path, PathBuf};

use anyhow::Result;
use calmher_core::export::ExportFormat;
use owo_colors::OwoColorize;

use super::{read_calendar, write_output};
use crate::config::CliConfig;

pub async fn run(
    file: &Path,
    name: Option<String>,
    format: ExportFormat,
    output: Option<PathBuf>,
    config: &CliConfig,
) -> Result<()> {
    let events = read_calendar(file).await?;

    let calendar_name = name.as_deref().unwrap_or(&config.calendar_name);
    let content = format.render(&events, Some(calendar_name))?;

    let path = output.unwrap_or_else(|| config.output_path().join(format.file_name(None)));
    write_output(&path, &content).await?;

    eprintln!(
        "{} Wrote {} events to {} {}",
        "✓".green(),
        events.len(),
        path.display(),
        format!("({})", format.content_type()).dimmed()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calmher_core::ics::parse_ics;

    const SCHEDULE: &str = r#"{
        "success": true,
        "schedule": {
            "schedule_summary": {
                "burnout_level": 2,
                "interpreted_burnout_category": "moderate",
                "date_range": {"start": "2026-02-09", "end": "2026-02-09"},
                "total_events_created": 2
            },
            "events": [
                {"title": "Meditation", "type": "meditation", "start": "2026-02-09T08:00", "end": "2026-02-09T08:15", "notes": "Eyes closed"},
                {"title": "Journaling", "type": "journaling", "start": "2026-02-09T18:00", "end": "2026-02-09T18:20"}
            ]
        }
    }"#;

    fn config_in(dir: &Path) -> CliConfig {
        CliConfig {
            output_dir: dir.to_path_buf(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_export_generated_schedule_to_ics() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("schedule.json");
        std::fs::write(&input, SCHEDULE).unwrap();

        let config = config_in(dir.path());
        run(&input, None, ExportFormat::Ics, None, &config).await.unwrap();

        let ics = std::fs::read_to_string(dir.path().join("wellness-schedule.ics")).unwrap();
        assert!(ics.contains("X-WR-CALNAME:CalmHer Wellness Schedule\r\n"));
        assert!(ics.contains("DESCRIPTION:Eyes closed\r\n"));

        let events = parse_ics(&ics);
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].title, "Journaling");
        assert_eq!(events[1].start, "2026-02-09T18:00");
    }

    #[tokio::test]
    async fn test_export_json_with_explicit_output_and_name() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("events.json");
        std::fs::write(
            &input,
            r#"[{"title":"Rest","start":"2026-02-09T13:00","end":"2026-02-09T13:30","type":"rest"}]"#,
        )
        .unwrap();
        let output = dir.path().join("out/rest.json");

        let config = config_in(dir.path());
        run(&input, Some("Ignored for JSON".into()), ExportFormat::Json, Some(output.clone()), &config)
            .await
            .unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.contains("\"type\": \"rest\""));
        assert!(!dir.path().join("wellness-schedule.json").exists());
    }
}
