//! Crate error type.
//!
//! The generator and conflict detector never fail; these errors come from
//! timetable editing and configuration checks.

use thiserror::Error;

use crate::models::Day;

/// Errors raised by fallible timetable operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("schedule entry not found: {0}")]
    EntryNotFound(String),

    #[error("{level} / {grade} already has entry '{existing_id}' at {day} period {period}")]
    CellOccupied {
        level: String,
        grade: String,
        day: Day,
        period: u8,
        existing_id: String,
    },

    #[error("period {period} is outside 1..={max}")]
    InvalidPeriod { period: u8, max: u8 },

    #[error("invalid generator config: {0}")]
    InvalidConfig(String),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;
