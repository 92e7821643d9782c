//! Teacher double-booking detection.
//!
//! A conflict is two distinct entries that put the same teacher in the same
//! day and period. Detection spans the whole timetable with no grade
//! scoping, so cross-grade clashes (the common case after manual edits) are
//! found. Conflicts are derived data: recompute them after every change to
//! entries or teachers rather than storing them.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Day, ScheduleEntry, Teacher};

/// Display name used when an entry references a teacher no longer on the roster.
pub const UNKNOWN_TEACHER: &str = "Unknown teacher";

/// Two entries booking the same teacher into the same slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    pub entry_a: ScheduleEntry,
    pub entry_b: ScheduleEntry,
    /// Resolved teacher name, or [`UNKNOWN_TEACHER`].
    pub teacher_name: String,
    pub day: Day,
    pub period: u8,
}

/// Resolves a teacher's display name, falling back to [`UNKNOWN_TEACHER`].
pub fn teacher_display_name<'a>(teachers: &'a [Teacher], teacher_id: &str) -> &'a str {
    teachers
        .iter()
        .find(|t| t.id == teacher_id)
        .map(|t| t.name.as_str())
        .unwrap_or(UNKNOWN_TEACHER)
}

/// Finds every unordered pair of entries that double-book a teacher.
///
/// Pairs are reported in scan order: `entry_a` precedes `entry_b` in
/// `entries`. Entries sharing an id are treated as the same entry.
///
/// # Complexity
/// O(n²) in the number of entries.
pub fn find_conflicts(entries: &[ScheduleEntry], teachers: &[Teacher]) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for (i, a) in entries.iter().enumerate() {
        for b in &entries[i + 1..] {
            if a.teacher_id == b.teacher_id
                && a.day == b.day
                && a.period == b.period
                && a.id != b.id
            {
                conflicts.push(Conflict {
                    entry_a: a.clone(),
                    entry_b: b.clone(),
                    teacher_name: teacher_display_name(teachers, &a.teacher_id).to_string(),
                    day: a.day,
                    period: a.period,
                });
            }
        }
    }

    if !conflicts.is_empty() {
        debug!(conflicts = conflicts.len(), entries = entries.len(), "teacher conflicts found");
    }
    conflicts
}

/// Ids of every entry involved in at least one conflict.
pub fn conflicting_entry_ids(conflicts: &[Conflict]) -> HashSet<&str> {
    conflicts
        .iter()
        .flat_map(|c| [c.entry_a.id.as_str(), c.entry_b.id.as_str()])
        .collect()
}
