//! Weekly school timetable generation and conflict detection.
//!
//! Builds a best-effort weekly timetable for every (level, grade) of a
//! school from its teacher roster and subject catalog, and detects teachers
//! booked into two places at once.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Teacher`, `Subject`, `Day`, `Slot`,
//!   `LevelTaxonomy`, `ScheduleEntry`, `Timetable`
//! - **`scheduler`**: Randomized greedy `TimetableGenerator`, qualification
//!   resolution, and `TeacherWorkload` reports
//! - **`conflicts`**: Pairwise teacher double-booking detection
//! - **`validation`**: Input integrity checks (duplicate IDs, dangling
//!   subject assignments, grades outside the taxonomy)
//! - **`config`**: `GeneratorConfig` (grid shape and placement limits)
//!
//! # Usage
//!
//! ```
//! use school_timetable::conflicts::find_conflicts;
//! use school_timetable::models::{LevelTaxonomy, Subject, Teacher, Timetable};
//! use school_timetable::scheduler::{GenerationOutcome, TimetableGenerator};
//!
//! let taxonomy = LevelTaxonomy::standard();
//! let subjects = vec![
//!     Subject::new("s1", "Math", "Primary", "Grade 4").with_sessions_per_week(5),
//!     Subject::new("s2", "Arabic", "Primary", "Grade 4"),
//! ];
//! let teachers = vec![
//!     Teacher::new("t1", "Ahmed").with_assigned_subject("s1"),
//!     Teacher::new("t2", "Sara").with_subject_name("Arabic"),
//! ];
//!
//! let result = TimetableGenerator::new().generate(&teachers, &subjects, &taxonomy);
//! assert_eq!(result.outcome(), GenerationOutcome::Generated);
//!
//! let mut timetable = Timetable::new();
//! timetable.replace_all(result.entries);
//! assert_eq!(timetable.len(), 9);
//! assert!(find_conflicts(&timetable.entries, &teachers).is_empty());
//! ```
//!
//! # Non-goals
//!
//! The generator is not a constraint solver: it neither guarantees that a
//! full schedule exists nor finds an optimal one.

pub mod config;
pub mod conflicts;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{Error, Result};
