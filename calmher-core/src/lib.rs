//! Core types for CalmHer's calendar interchange.
//!
//! This crate provides the pieces shared by the CLI and any service that
//! moves wellness schedules in and out of calendar clients:
//! - `Event`, the simplified JSON event model
//! - `ics` for reading and writing iCalendar (RFC 5545 subset) text
//! - `input` and `export` for the upload and download boundaries
//! - `schedule` and `scoring` for the payloads exchanged with the
//!   schedule generator and the burnout assessment

pub mod constants;
pub mod error;
pub mod event;
pub mod export;
pub mod ics;
pub mod input;
pub mod schedule;
pub mod scoring;

pub use error::{CalmherError, CalmherResult};
pub use event::Event;
