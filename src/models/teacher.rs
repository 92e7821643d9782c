//! Teacher model.
//!
//! Teachers are the resources the generator books into slots. A teacher's
//! qualifications are recorded in two forms for backward compatibility:
//! subject ids (`assigned_subject_ids`, preferred) and subject names
//! (`subjects`, the legacy fallback). See
//! [`resolve_qualifications`](crate::scheduler::resolve_qualifications)
//! for the precedence rule.

use serde::{Deserialize, Serialize};

/// A member of the teaching staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub specialization: String,
    /// Legacy qualification list: subject names.
    #[serde(default)]
    pub subjects: Vec<String>,
    /// Qualification list: ids of specific [`Subject`](super::Subject) entries.
    #[serde(default)]
    pub assigned_subject_ids: Vec<String>,
    /// Salary classification.
    pub job_type: JobType,
    /// Rate per lecture (private staff).
    #[serde(default)]
    pub lecture_price: f64,
}

/// Salary classification of a teacher.
///
/// Also accepts the Arabic labels of previously stored records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    /// Government-salaried, fixed stipend.
    #[serde(alias = "حكومي")]
    Government,
    /// Privately salaried, paid per lecture.
    #[serde(alias = "أهلي")]
    Private,
}

impl Teacher {
    /// Creates a government-salaried teacher with no qualifications.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone_number: String::new(),
            specialization: String::new(),
            subjects: Vec::new(),
            assigned_subject_ids: Vec::new(),
            job_type: JobType::Government,
            lecture_price: 0.0,
        }
    }

    /// Sets the job type.
    pub fn with_job_type(mut self, job_type: JobType) -> Self {
        self.job_type = job_type;
        self
    }

    /// Sets the per-lecture rate.
    pub fn with_lecture_price(mut self, price: f64) -> Self {
        self.lecture_price = price;
        self
    }

    /// Sets the phone number.
    pub fn with_phone_number(mut self, phone: impl Into<String>) -> Self {
        self.phone_number = phone.into();
        self
    }

    /// Sets the specialization label.
    pub fn with_specialization(mut self, specialization: impl Into<String>) -> Self {
        self.specialization = specialization.into();
        self
    }

    /// Adds a qualification by subject name (legacy form).
    pub fn with_subject_name(mut self, name: impl Into<String>) -> Self {
        self.subjects.push(name.into());
        self
    }

    /// Adds a qualification by subject id.
    pub fn with_assigned_subject(mut self, subject_id: impl Into<String>) -> Self {
        self.assigned_subject_ids.push(subject_id.into());
        self
    }

    /// Whether the id-based qualification list is in effect.
    #[inline]
    pub fn uses_assigned_ids(&self) -> bool {
        !self.assigned_subject_ids.is_empty()
    }

    /// Whether the teacher has any qualification at all.
    pub fn has_qualifications(&self) -> bool {
        self.uses_assigned_ids() || !self.subjects.is_empty()
    }
}
