//! Level/grade taxonomy.
//!
//! The school is partitioned into levels (stages), each holding an ordered
//! list of grades. The generator walks this taxonomy in order, producing one
//! independent timetable per (level, grade) pair.

use serde::{Deserialize, Serialize};

/// One school level and its grades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    pub grades: Vec<String>,
}

/// Ordered mapping from level to its ordered grades.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelTaxonomy {
    pub levels: Vec<Level>,
}

impl LevelTaxonomy {
    /// Creates an empty taxonomy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a level with its grades.
    ///
    /// Grades are appended to an existing level of the same name.
    pub fn with_level<I, S>(mut self, name: impl Into<String>, grades: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let grades = grades.into_iter().map(Into::<String>::into);
        match self.levels.iter_mut().find(|l| l.name == name) {
            Some(level) => level.grades.extend(grades),
            None => self.levels.push(Level {
                name,
                grades: grades.collect(),
            }),
        }
        self
    }

    /// The standard four-stage school layout.
    pub fn standard() -> Self {
        let secondary = [
            "First Intermediate",
            "Second Intermediate",
            "Third Intermediate",
            "Fourth Preparatory",
            "Fifth Preparatory",
            "Sixth Preparatory",
        ];
        Self::new()
            .with_level("Kindergarten", ["First Preschool", "Second Preschool"])
            .with_level(
                "Primary",
                [
                    "Grade 1", "Grade 2", "Grade 3", "Grade 4", "Grade 5", "Grade 6",
                ],
            )
            .with_level("Girls Secondary", secondary)
            .with_level("Boys Secondary", secondary)
    }

    /// Iterates all (level, grade) pairs in taxonomy order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.levels.iter().flat_map(|level| {
            level
                .grades
                .iter()
                .map(move |grade| (level.name.as_str(), grade.as_str()))
        })
    }

    /// Whether the taxonomy contains the given (level, grade).
    pub fn contains(&self, level: &str, grade: &str) -> bool {
        self.pairs().any(|(l, g)| l == level && g == grade)
    }

    /// Total number of (level, grade) pairs.
    pub fn grade_count(&self) -> usize {
        self.levels.iter().map(|l| l.grades.len()).sum()
    }
}
