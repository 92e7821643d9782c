//! Weekly grid coordinates.
//!
//! The school week runs Sunday through Thursday, each day divided into
//! numbered periods starting at 1. A [`Slot`] is one cell of that grid;
//! the full grid for one grade is the Cartesian product of days × periods.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of teaching periods per day in the standard grid.
pub const PERIODS_PER_DAY: u8 = 7;

/// A teaching day of the school week.
///
/// Deserialization also accepts the Arabic day names used by stored
/// records of the school's existing application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    #[serde(alias = "الأحد")]
    Sunday,
    #[serde(alias = "الاثنين")]
    Monday,
    #[serde(alias = "الثلاثاء")]
    Tuesday,
    #[serde(alias = "الأربعاء")]
    Wednesday,
    #[serde(alias = "الخميس")]
    Thursday,
}

impl Day {
    /// All teaching days in week order.
    pub const ALL: [Day; 5] = [
        Day::Sunday,
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Day::Sunday => "Sunday",
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One cell of the weekly grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Slot {
    pub day: Day,
    /// 1-based period number.
    pub period: u8,
}

impl Slot {
    /// Creates a slot.
    pub fn new(day: Day, period: u8) -> Self {
        Self { day, period }
    }

    /// Builds the full grid for the given days, ordered day-major.
    ///
    /// Periods run from 1 to `periods_per_day` inclusive.
    pub fn grid(days: &[Day], periods_per_day: u8) -> Vec<Slot> {
        days.iter()
            .flat_map(|&day| (1..=periods_per_day).map(move |period| Slot::new(day, period)))
            .collect()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} P{}", self.day, self.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_standard_grid_size() {
        let grid = Slot::grid(&Day::ALL, PERIODS_PER_DAY);
        assert_eq!(grid.len(), 35);

        let unique: HashSet<_> = grid.iter().collect();
        assert_eq!(unique.len(), 35);
    }

    #[test]
    fn test_grid_order_and_bounds() {
        let grid = Slot::grid(&[Day::Monday, Day::Tuesday], 3);
        assert_eq!(grid.first(), Some(&Slot::new(Day::Monday, 1)));
        assert_eq!(grid.last(), Some(&Slot::new(Day::Tuesday, 3)));
        assert!(grid.iter().all(|s| (1..=3).contains(&s.period)));
    }

    #[test]
    fn test_day_display() {
        assert_eq!(Day::Wednesday.to_string(), "Wednesday");
        assert_eq!(Slot::new(Day::Monday, 2).to_string(), "Monday P2");
    }

    #[test]
    fn test_day_accepts_arabic_names() {
        let days: Vec<Day> = serde_json::from_str(
            r#"["الأحد", "الاثنين", "الثلاثاء", "الأربعاء", "الخميس"]"#,
        )
        .unwrap();
        assert_eq!(days, Day::ALL.to_vec());

        let english: Day = serde_json::from_str(r#""Wednesday""#).unwrap();
        assert_eq!(english, Day::Wednesday);
    }
}
