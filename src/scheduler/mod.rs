//! Timetable generation and workload reporting.
//!
//! # Algorithm
//!
//! `TimetableGenerator` is a randomized greedy placer: per grade it shuffles
//! the slot pool and the task list, then fills each task's weekly quota
//! front-to-back with a linear lookahead. It is not optimal and does not
//! backtrack; tasks that cannot be fully placed are reported in
//! [`GenerationResult::fulfillment`].
//!
//! # Workload
//!
//! `TeacherWorkload` compares each teacher's weekly quotas with the
//! committed timetable.

mod generator;
mod qualification;
mod workload;

pub use generator::{GenerationOutcome, GenerationResult, TaskFulfillment, TimetableGenerator};
pub use qualification::{all_qualifications, derive_grade_tasks, resolve_qualifications, TeachingTask};
pub use workload::{QuotaStatus, SubjectLoad, TeacherWorkload};
