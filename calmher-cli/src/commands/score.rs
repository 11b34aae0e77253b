use std::path::Path;

use anyhow::{Context, Result};
use calmher_core::scoring::{Answer, ScoreReport, calculate_burnout_score};
use owo_colors::OwoColorize;

use crate::render::Render;

pub async fn run(file: &Path) -> Result<()> {
    let report = score_file(file).await?;

    eprintln!(
        "{} {}/100 ({})",
        "Burnout score".bold(),
        report.score,
        report.severity.render()
    );
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

async fn score_file(file: &Path) -> Result<ScoreReport> {
    let content = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Could not read {}", file.display()))?;

    let answers: Vec<Answer> = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a list of assessment answers", file.display()))?;

    Ok(calculate_burnout_score(&answers))
}
