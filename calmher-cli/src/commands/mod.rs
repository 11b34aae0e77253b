pub mod config;
pub mod export;
pub mod import;
pub mod request;
pub mod score;

use std::path::Path;

use anyhow::{Context, Result};
use calmher_core::Event;
use calmher_core::input::CalendarInput;

/// Read an uploaded calendar file and decode it by extension (or content).
pub async fn read_calendar(path: &Path) -> Result<Vec<Event>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Could not read {}", path.display()))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let input = CalendarInput::from_file_name(&file_name, content);
    let format = input.format_name();

    let events = input.into_events().with_context(|| {
        format!(
            "Error parsing {} as {format}. Make sure it's a valid ICS or JSON file",
            path.display()
        )
    })?;

    tracing::info!(path = %path.display(), format, count = events.len(), "Read calendar");
    Ok(events)
}

/// Write file content, creating parent directories as needed.
pub async fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Could not create {}", parent.display()))?;
    }

    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Could not write {}", path.display()))?;

    Ok(())
}
