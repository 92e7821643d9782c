//! Generator configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Day, Slot, DEFAULT_SESSIONS_PER_WEEK, PERIODS_PER_DAY};

/// Upper bound on placement attempts for a single task.
pub const DEFAULT_MAX_ATTEMPTS_PER_TASK: u32 = 50;

/// Shape of the weekly grid and placement limits.
///
/// The default is the standard school week: Sunday–Thursday, seven periods
/// a day, four sessions per subject unless the subject says otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Teaching days, in week order.
    pub days: Vec<Day>,
    /// Periods per day; periods are numbered from 1.
    pub periods_per_day: u8,
    /// Quota used for subjects whose `sessions_per_week` is zero.
    pub default_sessions_per_week: u32,
    /// Cap on placement attempts per task.
    pub max_attempts_per_task: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            days: Day::ALL.to_vec(),
            periods_per_day: PERIODS_PER_DAY,
            default_sessions_per_week: DEFAULT_SESSIONS_PER_WEEK,
            max_attempts_per_task: DEFAULT_MAX_ATTEMPTS_PER_TASK,
        }
    }
}

impl GeneratorConfig {
    /// Creates the standard configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the teaching days.
    pub fn with_days(mut self, days: Vec<Day>) -> Self {
        self.days = days;
        self
    }

    /// Sets the number of periods per day.
    pub fn with_periods_per_day(mut self, periods: u8) -> Self {
        self.periods_per_day = periods;
        self
    }

    /// Sets the fallback weekly quota.
    pub fn with_default_sessions_per_week(mut self, sessions: u32) -> Self {
        self.default_sessions_per_week = sessions;
        self
    }

    /// Sets the per-task attempt cap.
    pub fn with_max_attempts_per_task(mut self, attempts: u32) -> Self {
        self.max_attempts_per_task = attempts;
        self
    }

    /// Number of slots available to one grade per week.
    pub fn slots_per_grade(&self) -> usize {
        self.days.len() * self.periods_per_day as usize
    }

    /// The unshuffled slot grid for one grade.
    pub fn slot_grid(&self) -> Vec<Slot> {
        Slot::grid(&self.days, self.periods_per_day)
    }

    /// Whether `period` is a valid period number.
    pub fn is_valid_period(&self, period: u8) -> bool {
        (1..=self.periods_per_day).contains(&period)
    }

    /// Checks that the configuration describes a usable grid.
    pub fn validate(&self) -> Result<()> {
        if self.days.is_empty() {
            return Err(Error::InvalidConfig("no teaching days".into()));
        }
        for (i, day) in self.days.iter().enumerate() {
            if self.days[..i].contains(day) {
                return Err(Error::InvalidConfig(format!("day {day} listed twice")));
            }
        }
        if self.periods_per_day == 0 {
            return Err(Error::InvalidConfig("periods_per_day must be at least 1".into()));
        }
        if self.default_sessions_per_week == 0 {
            return Err(Error::InvalidConfig(
                "default_sessions_per_week must be at least 1".into(),
            ));
        }
        if self.max_attempts_per_task == 0 {
            return Err(Error::InvalidConfig(
                "max_attempts_per_task must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = GeneratorConfig::default();
        assert_eq!(cfg.slots_per_grade(), 35);
        assert_eq!(cfg.slot_grid().len(), 35);
        assert_eq!(cfg.default_sessions_per_week, 4);
        assert_eq!(cfg.max_attempts_per_task, 50);
        assert!(cfg.validate().is_ok());
        assert!(cfg.is_valid_period(1));
        assert!(cfg.is_valid_period(7));
        assert!(!cfg.is_valid_period(0));
        assert!(!cfg.is_valid_period(8));
    }

    #[test]
    fn test_invalid_configs() {
        let no_days = GeneratorConfig::new().with_days(vec![]);
        assert!(matches!(no_days.validate(), Err(Error::InvalidConfig(_))));

        let dup = GeneratorConfig::new().with_days(vec![Day::Monday, Day::Monday]);
        assert!(matches!(dup.validate(), Err(Error::InvalidConfig(_))));

        let no_periods = GeneratorConfig::new().with_periods_per_day(0);
        assert!(no_periods.validate().is_err());

        let no_quota = GeneratorConfig::new().with_default_sessions_per_week(0);
        assert!(no_quota.validate().is_err());

        let no_attempts = GeneratorConfig::new().with_max_attempts_per_task(0);
        assert!(no_attempts.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg: GeneratorConfig = serde_json::from_str(r#"{"periodsPerDay": 6}"#).unwrap();
        assert_eq!(cfg.periods_per_day, 6);
        assert_eq!(cfg.days.len(), 5);
        assert_eq!(cfg.slots_per_grade(), 30);
    }
}
