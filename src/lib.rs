//! Attendance rules engine.
//!
//! Pure functions over in-memory subject and roster lists: derived
//! percentages, band classification, classes needed to reach 75%, and the
//! reminder feed. Nothing here holds state or performs I/O except [`data`].

pub mod data;
pub mod error;
pub mod models;
pub mod reminders;
pub mod report;
pub mod roster;
pub mod rules;
pub mod seed;

pub use error::RulesError;
pub use models::{AggregateStats, OverallBand, Reminder, ReminderBand, Student, Subject, SubjectStatus};
