//! Payloads exchanged with the schedule-generation service.
//!
//! The generator itself is external. These types pin down the JSON it
//! receives and returns so the calendar core can feed it parsed events
//! and export the events it hands back.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CalmherError, CalmherResult};
use crate::event::Event;

/// Lowest and highest burnout levels the generator accepts.
pub const MIN_BURNOUT_LEVEL: f64 = 1.0;
pub const MAX_BURNOUT_LEVEL: f64 = 5.0;

/// Request body for the generate-schedule endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// First day of the schedule (YYYY-MM-DD)
    pub start_date: String,
    /// Last day of the schedule (YYYY-MM-DD)
    pub end_date: String,
    /// Free-text preferences
    #[serde(default)]
    pub preferences: String,
    /// 1 (very low) to 5 (extreme)
    pub burnout_level: f64,
    /// Existing events the generator must not overlap
    #[serde(default)]
    pub calendar_events: Vec<Event>,
}

impl ScheduleRequest {
    /// Check the request before it is sent.
    pub fn validate(&self) -> CalmherResult<()> {
        if !(MIN_BURNOUT_LEVEL..=MAX_BURNOUT_LEVEL).contains(&self.burnout_level) {
            return Err(CalmherError::InvalidRequest(format!(
                "Burnout level must be {MIN_BURNOUT_LEVEL}-{MAX_BURNOUT_LEVEL}, got {}",
                self.burnout_level
            )));
        }

        let start = parse_date(&self.start_date)?;
        let end = parse_date(&self.end_date)?;
        if end < start {
            return Err(CalmherError::InvalidRequest(format!(
                "End date {} is before start date {}",
                self.end_date, self.start_date
            )));
        }

        Ok(())
    }

    pub fn burnout_category(&self) -> BurnoutCategory {
        BurnoutCategory::from_level(self.burnout_level)
    }
}

fn parse_date(s: &str) -> CalmherResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        CalmherError::InvalidRequest(format!("Invalid date format '{s}'. Expected YYYY-MM-DD"))
    })
}

/// How the generator interprets a burnout level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BurnoutCategory {
    Low,
    Moderate,
    High,
    Critical,
}

impl BurnoutCategory {
    /// 1.0-1.9 low, 2.0-2.9 moderate, 3.0-3.9 high, 4.0-5.0 critical.
    pub fn from_level(level: f64) -> Self {
        if level < 2.0 {
            BurnoutCategory::Low
        } else if level < 3.0 {
            BurnoutCategory::Moderate
        } else if level < 4.0 {
            BurnoutCategory::High
        } else {
            BurnoutCategory::Critical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BurnoutCategory::Low => "low",
            BurnoutCategory::Moderate => "moderate",
            BurnoutCategory::High => "high",
            BurnoutCategory::Critical => "critical",
        }
    }
}

impl fmt::Display for BurnoutCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// Summary block of a generated schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub burnout_level: f64,
    pub interpreted_burnout_category: BurnoutCategory,
    pub date_range: DateRange,
    pub total_events_created: usize,
    /// Why no (or few) events could be placed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// A generated schedule: its summary and the events to export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub schedule_summary: ScheduleSummary,
    #[serde(default)]
    pub events: Vec<Event>,
}

/// Wire wrapper returned by the generate-schedule endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEnvelope<T = ScheduleResponse> {
    pub success: bool,
    pub schedule: T,
}

/// A generator payload, enveloped or bare. Shared by every decoder of
/// generator output so both accept the same shapes.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum ScheduleBody<T> {
    Envelope(ScheduleEnvelope<T>),
    Bare(T),
}

impl<T> ScheduleBody<T> {
    pub(crate) fn into_inner(self) -> T {
        match self {
            ScheduleBody::Envelope(envelope) => envelope.schedule,
            ScheduleBody::Bare(schedule) => schedule,
        }
    }
}

/// Only the events of a generator payload, for callers that ignore the
/// summary.
#[derive(Deserialize)]
pub(crate) struct ScheduleEvents {
    pub(crate) events: Vec<Event>,
}

impl ScheduleResponse {
    /// Decode either the endpoint envelope or a bare schedule.
    pub fn from_json(json: &str) -> CalmherResult<Self> {
        Ok(serde_json::from_str::<ScheduleBody<Self>>(json)?.into_inner())
    }
}
