//! Randomized greedy timetable generator.
//!
//! # Algorithm
//!
//! Grades are processed independently, in taxonomy order:
//! 1. Derive the grade's tasks (one per qualified teacher–subject pair).
//! 2. Shuffle the grade's slot pool (days × periods).
//! 3. Shuffle the task list.
//! 4. For each task, place up to its weekly quota. A cursor walks the pool
//!    and is shared by all tasks of the grade, so each slot holds at most
//!    one entry per grade. If the slot under the cursor is busy for the
//!    teacher, the first free slot further along is swapped into the cursor
//!    position. If none exists, the task stops short of its quota.
//!
//! A teacher's booked slots accumulate across every grade of one run, so a
//! teacher who teaches several grades is never placed twice in the same
//! slot by the generator. Conflicts can still arise from manual edits.
//!
//! # Complexity
//! O(g · (t + s²)) where g=grades, t=tasks per grade, s=slots per grade.

use std::collections::{HashMap, HashSet};

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::qualification::{derive_grade_tasks, TeachingTask};
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::models::{new_entry_id, LevelTaxonomy, ScheduleEntry, Slot, Subject, Teacher};

/// How far one task got toward its weekly quota.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFulfillment {
    pub teacher_id: String,
    pub subject_id: String,
    pub subject_name: String,
    pub level: String,
    pub grade: String,
    /// Weekly quota.
    pub required: u32,
    /// Entries actually placed.
    pub placed: u32,
}

impl TaskFulfillment {
    /// Whether the quota was reached.
    #[inline]
    pub fn is_met(&self) -> bool {
        self.placed >= self.required
    }

    /// Sessions left unplaced.
    #[inline]
    pub fn shortfall(&self) -> u32 {
        self.required.saturating_sub(self.placed)
    }
}

/// Summary classification of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationOutcome {
    /// At least one entry was produced.
    Generated,
    /// No teacher is qualified for any subject in any grade.
    NoQualifications,
    /// Tasks exist, but no slot could be filled.
    NothingPlaced,
}

impl GenerationOutcome {
    /// User-facing explanation.
    pub fn message(self) -> &'static str {
        match self {
            GenerationOutcome::Generated => "Timetable generated.",
            GenerationOutcome::NoQualifications => {
                "No teacher-subject assignments were found. Assign subjects to teachers first."
            }
            GenerationOutcome::NothingPlaced => {
                "No sessions could be placed. Check the subject and session settings."
            }
        }
    }
}

/// Result of one generation run.
///
/// `entries` is a full replacement for the committed timetable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub entries: Vec<ScheduleEntry>,
    /// Number of teacher–subject tasks discovered across all grades.
    pub tasks_found: usize,
    /// Per-task placement counts, in placement order.
    pub fulfillment: Vec<TaskFulfillment>,
}

impl GenerationResult {
    /// Classifies the run for diagnostics.
    pub fn outcome(&self) -> GenerationOutcome {
        if !self.entries.is_empty() {
            GenerationOutcome::Generated
        } else if self.tasks_found == 0 {
            GenerationOutcome::NoQualifications
        } else {
            GenerationOutcome::NothingPlaced
        }
    }

    /// Tasks that ended below their quota.
    pub fn under_quota(&self) -> impl Iterator<Item = &TaskFulfillment> {
        self.fulfillment.iter().filter(|f| !f.is_met())
    }

    /// Total sessions requested across all tasks.
    pub fn total_required(&self) -> u32 {
        self.fulfillment.iter().map(|f| f.required).sum()
    }
}

/// Randomized greedy timetable generator.
///
/// # Example
///
/// ```
/// use school_timetable::models::{LevelTaxonomy, Subject, Teacher};
/// use school_timetable::scheduler::TimetableGenerator;
///
/// let taxonomy = LevelTaxonomy::new().with_level("Primary", ["Grade 4"]);
/// let subjects = vec![Subject::new("s1", "Math", "Primary", "Grade 4")];
/// let teachers = vec![Teacher::new("t1", "Ahmed").with_assigned_subject("s1")];
///
/// let result = TimetableGenerator::new().generate(&teachers, &subjects, &taxonomy);
/// assert_eq!(result.tasks_found, 1);
/// assert_eq!(result.entries.len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableGenerator {
    config: GeneratorConfig,
}

impl TimetableGenerator {
    /// Creates a generator for the standard grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with a validated configuration.
    pub fn with_config(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a timetable using the thread-local random source.
    pub fn generate(
        &self,
        teachers: &[Teacher],
        subjects: &[Subject],
        taxonomy: &LevelTaxonomy,
    ) -> GenerationResult {
        self.generate_with_rng(teachers, subjects, taxonomy, &mut rand::rng())
    }

    /// Generates a timetable using the given random source.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        teachers: &[Teacher],
        subjects: &[Subject],
        taxonomy: &LevelTaxonomy,
        rng: &mut R,
    ) -> GenerationResult {
        let mut run = GenerationRun::default();

        for (level, grade) in taxonomy.pairs() {
            let mut tasks = derive_grade_tasks(teachers, subjects, level, grade);
            if tasks.is_empty() {
                continue;
            }
            run.result.tasks_found += tasks.len();

            let mut pool = self.config.slot_grid();
            pool.shuffle(rng);
            tasks.shuffle(rng);

            debug!(level, grade, tasks = tasks.len(), slots = pool.len(), "placing grade");
            self.place_grade(&mut run, level, grade, &tasks, &mut pool, rng);
        }

        let result = run.result;
        let under_quota = result.under_quota().count();
        match result.outcome() {
            GenerationOutcome::Generated => info!(
                entries = result.entries.len(),
                tasks_found = result.tasks_found,
                under_quota,
                "timetable generated"
            ),
            outcome => warn!(tasks_found = result.tasks_found, ?outcome, "no entries generated"),
        }
        result
    }

    fn place_grade<'a, R: Rng + ?Sized>(
        &self,
        run: &mut GenerationRun<'a>,
        level: &str,
        grade: &str,
        tasks: &[TeachingTask<'a>],
        pool: &mut [Slot],
        rng: &mut R,
    ) {
        let mut cursor = 0;

        for task in tasks {
            let required = task
                .subject
                .weekly_quota_or(self.config.default_sessions_per_week);
            let busy = run.busy.entry(task.teacher_id).or_default();
            let mut placed = 0;
            let mut attempts = 0;

            while placed < required
                && cursor < pool.len()
                && attempts < self.config.max_attempts_per_task
            {
                attempts += 1;
                let Some(free) = (cursor..pool.len()).find(|&i| !busy.contains(&pool[i])) else {
                    break;
                };
                pool.swap(cursor, free);
                let slot = pool[cursor];
                cursor += 1;

                busy.insert(slot);
                let id = unique_id(&mut run.used_ids, rng);
                run.result.entries.push(ScheduleEntry::new(
                    id,
                    slot,
                    level,
                    grade,
                    task.teacher_id,
                    task.subject.name.as_str(),
                ));
                placed += 1;
            }

            if placed < required {
                warn!(
                    teacher_id = task.teacher_id,
                    subject = %task.subject.name,
                    level,
                    grade,
                    placed,
                    required,
                    "task left under quota"
                );
            }
            run.result.fulfillment.push(TaskFulfillment {
                teacher_id: task.teacher_id.to_string(),
                subject_id: task.subject.id.clone(),
                subject_name: task.subject.name.clone(),
                level: level.to_string(),
                grade: grade.to_string(),
                required,
                placed,
            });
        }
    }
}

/// Mutable state of one `generate` call.
#[derive(Default)]
struct GenerationRun<'a> {
    /// Slots already booked per teacher, across all grades.
    busy: HashMap<&'a str, HashSet<Slot>>,
    used_ids: HashSet<String>,
    result: GenerationResult,
}

fn unique_id<R: Rng + ?Sized>(used: &mut HashSet<String>, rng: &mut R) -> String {
    loop {
        let id = new_entry_id(rng);
        if used.insert(id.clone()) {
            return id;
        }
    }
}
