//! Committed timetable model.
//!
//! A timetable is the flat list of schedule entries the application keeps.
//! Entries are the only schedule state: quota fulfillment and conflicts are
//! always derived by scanning them. Entries are created (in bulk by the
//! generator, or one at a time by hand) and deleted; an edit is a delete
//! followed by an add.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{Day, Slot, Teacher, PERIODS_PER_DAY};
use crate::conflicts::{find_conflicts, Conflict};
use crate::error::{Error, Result};

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 9;

/// Generates a short random entry id (9 lowercase base-36 characters).
pub fn new_entry_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ID_LEN)
        .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

/// One teacher teaching one subject to one grade at one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub id: String,
    pub day: Day,
    /// 1-based period number.
    pub period: u8,
    pub level: String,
    pub grade: String,
    pub teacher_id: String,
    /// Subject name (entries reference subjects by name).
    pub subject: String,
}

impl ScheduleEntry {
    /// Creates an entry.
    pub fn new(
        id: impl Into<String>,
        slot: Slot,
        level: impl Into<String>,
        grade: impl Into<String>,
        teacher_id: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            day: slot.day,
            period: slot.period,
            level: level.into(),
            grade: grade.into(),
            teacher_id: teacher_id.into(),
            subject: subject.into(),
        }
    }

    /// The grid cell this entry occupies.
    #[inline]
    pub fn slot(&self) -> Slot {
        Slot::new(self.day, self.period)
    }

    /// Whether this entry belongs to the given level and grade.
    #[inline]
    pub fn is_in(&self, level: &str, grade: &str) -> bool {
        self.level == level && self.grade == grade
    }
}

fn default_periods_per_day() -> u8 {
    PERIODS_PER_DAY
}

/// The committed set of schedule entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timetable {
    pub entries: Vec<ScheduleEntry>,
    #[serde(default = "default_periods_per_day")]
    pub periods_per_day: u8,
}

impl Default for Timetable {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            periods_per_day: PERIODS_PER_DAY,
        }
    }
}

impl Timetable {
    /// Creates an empty timetable on the standard grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of periods per day accepted by [`add_entry`](Self::add_entry).
    pub fn with_periods_per_day(mut self, periods: u8) -> Self {
        self.periods_per_day = periods;
        self
    }

    /// Wraps an existing entry list.
    pub fn from_entries(entries: Vec<ScheduleEntry>) -> Self {
        Self {
            entries,
            ..Self::default()
        }
    }

    /// Adds a single entry by hand and returns its generated id.
    ///
    /// Fails if the period is outside the grid or the grade already has an
    /// entry in that cell. Teacher double-booking is *not* rejected here;
    /// it is reported by [`conflicts`](Self::conflicts).
    pub fn add_entry(
        &mut self,
        slot: Slot,
        level: &str,
        grade: &str,
        teacher_id: &str,
        subject: &str,
    ) -> Result<String> {
        if !(1..=self.periods_per_day).contains(&slot.period) {
            return Err(Error::InvalidPeriod {
                period: slot.period,
                max: self.periods_per_day,
            });
        }
        if let Some(existing) = self.entry_at(level, grade, slot) {
            return Err(Error::CellOccupied {
                level: level.to_string(),
                grade: grade.to_string(),
                day: slot.day,
                period: slot.period,
                existing_id: existing.id.clone(),
            });
        }

        let mut rng = rand::rng();
        let mut id = new_entry_id(&mut rng);
        while self.contains(&id) {
            id = new_entry_id(&mut rng);
        }

        self.entries
            .push(ScheduleEntry::new(id.clone(), slot, level, grade, teacher_id, subject));
        Ok(id)
    }

    /// Removes an entry by id.
    pub fn remove_entry(&mut self, id: &str) -> Result<ScheduleEntry> {
        let pos = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| Error::EntryNotFound(id.to_string()))?;
        Ok(self.entries.remove(pos))
    }

    /// Replaces every entry (e.g., with a freshly generated list).
    ///
    /// Returns the discarded entries.
    pub fn replace_all(&mut self, entries: Vec<ScheduleEntry>) -> Vec<ScheduleEntry> {
        std::mem::replace(&mut self.entries, entries)
    }

    /// Whether replacing the timetable would discard existing work.
    ///
    /// Callers should ask the user for confirmation when this is `true`.
    pub fn requires_confirmation(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Whether an entry with the given id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Finds an entry by id.
    pub fn entry(&self, id: &str) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// The entry occupying a grade's cell, if any.
    pub fn entry_at(&self, level: &str, grade: &str, slot: Slot) -> Option<&ScheduleEntry> {
        self.entries
            .iter()
            .find(|e| e.is_in(level, grade) && e.slot() == slot)
    }

    /// All entries of one grade.
    pub fn entries_for_grade(&self, level: &str, grade: &str) -> Vec<&ScheduleEntry> {
        self.entries.iter().filter(|e| e.is_in(level, grade)).collect()
    }

    /// All entries of one teacher, across grades.
    pub fn entries_for_teacher(&self, teacher_id: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.teacher_id == teacher_id)
            .collect()
    }

    /// Current teacher double-bookings.
    pub fn conflicts(&self, teachers: &[Teacher]) -> Vec<Conflict> {
        find_conflicts(&self.entries, teachers)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
