//! School timetable domain models.
//!
//! Reference data (teachers, subjects, the level/grade taxonomy) and the
//! committed schedule (entries in a timetable).
//!
//! # Domain Mappings
//!
//! | school-timetable | General scheduling |
//! |------------------|--------------------|
//! | Teacher | Resource |
//! | Subject | Job type with a weekly demand |
//! | Slot | Time bucket |
//! | ScheduleEntry | Assignment |
//! | Timetable | Schedule |

mod slot;
mod subject;
mod taxonomy;
mod teacher;
mod timetable;

pub use slot::{Day, Slot, PERIODS_PER_DAY};
pub use subject::{Subject, DEFAULT_SESSIONS_PER_WEEK};
pub use taxonomy::{Level, LevelTaxonomy};
pub use teacher::{JobType, Teacher};
pub use timetable::{new_entry_id, ScheduleEntry, Timetable};
