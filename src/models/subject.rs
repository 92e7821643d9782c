//! Subject model.
//!
//! A subject is a teachable unit scoped to one (level, grade). The same
//! subject name may exist in several grades, each with its own id, price,
//! and weekly quota.

use serde::{Deserialize, Serialize};

/// Weekly session count used when a subject leaves its quota unset or zero.
pub const DEFAULT_SESSIONS_PER_WEEK: u32 = 4;

/// A subject offered in a specific level and grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    /// Unique subject identifier.
    pub id: String,
    /// Subject name (e.g., "Math").
    pub name: String,
    /// School level (stage) this subject belongs to.
    pub level: String,
    /// Grade within the level.
    pub grade: String,
    /// Price per lecture.
    #[serde(default)]
    pub price: f64,
    /// Target weekly occurrences. Zero means "use the default".
    #[serde(default)]
    pub sessions_per_week: u32,
}

impl Subject {
    /// Creates a subject with the default weekly quota.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        level: impl Into<String>,
        grade: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            level: level.into(),
            grade: grade.into(),
            price: 0.0,
            sessions_per_week: 0,
        }
    }

    /// Sets the per-lecture price.
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Sets the weekly quota.
    pub fn with_sessions_per_week(mut self, sessions: u32) -> Self {
        self.sessions_per_week = sessions;
        self
    }

    /// Effective weekly quota, falling back to `default` when unset.
    #[inline]
    pub fn weekly_quota_or(&self, default: u32) -> u32 {
        if self.sessions_per_week == 0 {
            default
        } else {
            self.sessions_per_week
        }
    }

    /// Effective weekly quota with the standard fallback.
    #[inline]
    pub fn weekly_quota(&self) -> u32 {
        self.weekly_quota_or(DEFAULT_SESSIONS_PER_WEEK)
    }

    /// Whether this subject belongs to the given level and grade.
    #[inline]
    pub fn is_in(&self, level: &str, grade: &str) -> bool {
        self.level == level && self.grade == grade
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_defaults() {
        let s = Subject::new("s1", "Math", "Primary", "Grade 4");
        assert_eq!(s.weekly_quota(), DEFAULT_SESSIONS_PER_WEEK);
        assert_eq!(s.weekly_quota_or(6), 6);

        let s = s.with_sessions_per_week(2);
        assert_eq!(s.weekly_quota(), 2);
        assert_eq!(s.weekly_quota_or(6), 2);
    }

    #[test]
    fn test_is_in() {
        let s = Subject::new("s1", "Math", "Primary", "Grade 4").with_price(15000.0);
        assert!(s.is_in("Primary", "Grade 4"));
        assert!(!s.is_in("Primary", "Grade 5"));
        assert!(!s.is_in("Kindergarten", "Grade 4"));
    }

    #[test]
    fn test_deserialize_missing_quota() {
        let json = r#"{"id":"s3","name":"Science","level":"Primary","grade":"Grade 4","price":10000}"#;
        let s: Subject = serde_json::from_str(json).unwrap();
        assert_eq!(s.sessions_per_week, 0);
        assert_eq!(s.weekly_quota(), 4);
        assert!((s.price - 10000.0).abs() < 1e-10);
    }
}
