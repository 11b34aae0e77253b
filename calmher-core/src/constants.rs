/// Calendar name used when the caller does not supply one.
pub const DEFAULT_CALENDAR_NAME: &str = "Wellness Schedule";

/// PRODID written into every generated calendar.
pub const PRODID: &str = "-//CalmHer//Wellness Schedule//EN";

/// Domain token that scopes generated UIDs to this application.
pub const UID_DOMAIN: &str = "calmher.app";

/// File stem for downloads (`wellness-schedule.ics`, `wellness-schedule.json`).
pub const DEFAULT_EXPORT_STEM: &str = "wellness-schedule";
