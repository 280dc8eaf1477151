//! Core types for boulder.
//!
//! This crate provides the appointment store shared by the CLI and server:
//! - `Appointment` and the CSV-backed `AppointmentStore`
//! - `CalendarEvent` / `CalendarOptions` for calendar web widgets
//! - `BoulderConfig` for locating the store

pub mod appointment;
pub mod calendar_event;
pub mod config;
pub mod csv_format;
pub mod date;
pub mod error;
pub mod participants;
pub mod store;

pub use appointment::Appointment;
pub use calendar_event::{CalendarEvent, CalendarOptions};
pub use config::BoulderConfig;
pub use error::{BoulderError, BoulderResult};
pub use store::{AppointmentStore, UpsertOutcome};
