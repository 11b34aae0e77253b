use std::path::Path;

use anyhow::Result;
use calmher_core::schedule::ScheduleRequest;
use owo_colors::OwoColorize;

use super::read_calendar;
use crate::render::Render;

pub async fn run(
    start_date: String,
    end_date: String,
    burnout_level: f64,
    preferences: String,
    calendar: Option<&Path>,
) -> Result<()> {
    let request =
        build_request(start_date, end_date, burnout_level, preferences, calendar).await?;

    eprintln!(
        "{} {} to {}, burnout {} ({}), {} existing events",
        "Schedule request".bold(),
        request.start_date,
        request.end_date,
        request.burnout_level,
        request.burnout_category().render(),
        request.calendar_events.len()
    );
    println!("{}", serde_json::to_string_pretty(&request)?);

    Ok(())
}

async fn build_request(
    start_date: String,
    end_date: String,
    burnout_level: f64,
    preferences: String,
    calendar: Option<&Path>,
) -> Result<ScheduleRequest> {
    let calendar_events = match calendar {
        Some(path) => read_calendar(path).await?,
        None => Vec::new(),
    };

    let request = ScheduleRequest {
        start_date,
        end_date,
        preferences,
        burnout_level,
        calendar_events,
    };
    request.validate()?;

    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_request_with_calendar() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("busy.ics");
        std::fs::write(
            &path,
            "BEGIN:VEVENT\nSUMMARY:Standup\nDTSTART:20260209T091500Z\nDTEND:20260209T093000Z\nEND:VEVENT\n",
        )
        .unwrap();

        let request = build_request(
            "2026-02-09".into(),
            "2026-02-13".into(),
            2.5,
            "No evenings".into(),
            Some(&path),
        )
        .await
        .unwrap();

        assert_eq!(request.calendar_events.len(), 1);
        assert_eq!(request.calendar_events[0].start, "2026-02-09T09:15");
    }

    #[tokio::test]
    async fn test_build_request_rejects_bad_level() {
        let err = build_request("2026-02-09".into(), "2026-02-13".into(), 7.0, String::new(), None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Burnout level"));
    }
}
