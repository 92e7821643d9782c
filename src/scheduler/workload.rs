//! Teacher workload: weekly quota versus scheduled sessions.
//!
//! For each subject a teacher is qualified for, compares the subject's
//! weekly quota with the number of committed entries that match the
//! teacher, level, grade, and subject name.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Required | Sum of weekly quotas over qualified subjects, plus the default quota for each assigned id missing from the catalog |
//! | Scheduled | Matching entries over qualified subjects |
//! | Total entries | All entries of the teacher, any subject |

use serde::{Deserialize, Serialize};

use super::qualification::all_qualifications;
use crate::models::{ScheduleEntry, Subject, Teacher, DEFAULT_SESSIONS_PER_WEEK};

/// How a subject's scheduled count compares with its quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuotaStatus {
    Balanced,
    Under,
    Over,
}

/// Quota comparison for one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectLoad {
    pub subject_id: String,
    pub subject_name: String,
    pub level: String,
    pub grade: String,
    pub required: u32,
    pub scheduled: u32,
}

impl SubjectLoad {
    pub fn status(&self) -> QuotaStatus {
        match self.scheduled.cmp(&self.required) {
            std::cmp::Ordering::Equal => QuotaStatus::Balanced,
            std::cmp::Ordering::Less => QuotaStatus::Under,
            std::cmp::Ordering::Greater => QuotaStatus::Over,
        }
    }
}

/// Workload report for one teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherWorkload {
    pub teacher_id: String,
    pub subjects: Vec<SubjectLoad>,
    /// Assigned subject ids that no longer exist in the catalog.
    pub unknown_subject_ids: Vec<String>,
    /// Sum of quotas. Each unknown subject id counts as the default quota.
    pub total_required: u32,
    /// All entries of the teacher, including subjects outside the
    /// qualification list.
    pub total_entries: u32,
}

impl TeacherWorkload {
    /// Computes the workload of `teacher` against committed `entries`.
    pub fn calculate(teacher: &Teacher, subjects: &[Subject], entries: &[ScheduleEntry]) -> Self {
        let own: Vec<&ScheduleEntry> = entries
            .iter()
            .filter(|e| e.teacher_id == teacher.id)
            .collect();

        let loads: Vec<SubjectLoad> = all_qualifications(teacher, subjects)
            .into_iter()
            .map(|subject| {
                let scheduled = own
                    .iter()
                    .filter(|e| e.is_in(&subject.level, &subject.grade) && e.subject == subject.name)
                    .count() as u32;
                SubjectLoad {
                    subject_id: subject.id.clone(),
                    subject_name: subject.name.clone(),
                    level: subject.level.clone(),
                    grade: subject.grade.clone(),
                    required: subject.weekly_quota(),
                    scheduled,
                }
            })
            .collect();

        let unknown_subject_ids: Vec<String> = teacher
            .assigned_subject_ids
            .iter()
            .filter(|id| !subjects.iter().any(|s| &s.id == *id))
            .cloned()
            .collect();
        let total_required = loads.iter().map(|l| l.required).sum::<u32>()
            + unknown_subject_ids.len() as u32 * DEFAULT_SESSIONS_PER_WEEK;

        Self {
            teacher_id: teacher.id.clone(),
            unknown_subject_ids,
            total_required,
            total_entries: own.len() as u32,
            subjects: loads,
        }
    }

    /// Whether every qualified subject is exactly at quota.
    pub fn is_balanced(&self) -> bool {
        self.subjects
            .iter()
            .all(|l| l.status() == QuotaStatus::Balanced)
    }
}
