//! Qualification resolution and task derivation.
//!
//! # Precedence
//!
//! A teacher's qualifications come from exactly one of two lists:
//! 1. `assigned_subject_ids`, whenever it is non-empty. Only subjects with
//!    a matching id are considered; the name list is ignored entirely.
//! 2. `subjects` (names), only when no id is assigned. A name matches the
//!    catalog subject with that name in the requested level and grade.

use crate::models::{Subject, Teacher};

/// One teacher–subject obligation for a grade.
///
/// Requires `subject.weekly_quota_or(..)` placements in the grade's grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeachingTask<'a> {
    pub teacher_id: &'a str,
    pub subject: &'a Subject,
}

/// Subjects in `(level, grade)` that `teacher` is qualified to teach.
pub fn resolve_qualifications<'a>(
    teacher: &Teacher,
    subjects: &'a [Subject],
    level: &str,
    grade: &str,
) -> Vec<&'a Subject> {
    if teacher.uses_assigned_ids() {
        teacher
            .assigned_subject_ids
            .iter()
            .filter_map(|id| subjects.iter().find(|s| &s.id == id))
            .filter(|s| s.is_in(level, grade))
            .collect()
    } else {
        teacher
            .subjects
            .iter()
            .filter_map(|name| {
                subjects
                    .iter()
                    .find(|s| &s.name == name && s.is_in(level, grade))
            })
            .collect()
    }
}

/// Every (teacher, subject) task for one grade, in roster order.
///
/// Teachers with no qualifying subject contribute nothing.
pub fn derive_grade_tasks<'a>(
    teachers: &'a [Teacher],
    subjects: &'a [Subject],
    level: &str,
    grade: &str,
) -> Vec<TeachingTask<'a>> {
    teachers
        .iter()
        .flat_map(|teacher| {
            resolve_qualifications(teacher, subjects, level, grade)
                .into_iter()
                .map(move |subject| TeachingTask {
                    teacher_id: teacher.id.as_str(),
                    subject,
                })
        })
        .collect()
}

/// Every subject `teacher` is qualified for, across all grades.
pub fn all_qualifications<'a>(teacher: &Teacher, subjects: &'a [Subject]) -> Vec<&'a Subject> {
    if teacher.uses_assigned_ids() {
        teacher
            .assigned_subject_ids
            .iter()
            .filter_map(|id| subjects.iter().find(|s| &s.id == id))
            .collect()
    } else {
        subjects
            .iter()
            .filter(|s| teacher.subjects.contains(&s.name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Subject> {
        vec![
            Subject::new("s1", "Math", "Primary", "Grade 4"),
            Subject::new("s2", "Math", "Primary", "Grade 5"),
            Subject::new("s3", "Science", "Primary", "Grade 4"),
        ]
    }

    #[test]
    fn test_name_fallback_single_task() {
        let subjects = vec![Subject::new("m", "Math", "L", "G")];
        let teachers = vec![Teacher::new("t1", "Ali").with_subject_name("Math")];

        let tasks = derive_grade_tasks(&teachers, &subjects, "L", "G");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].teacher_id, "t1");
        assert_eq!(tasks[0].subject.id, "m");
    }

    #[test]
    fn test_id_precedence_ignores_names() {
        let subjects = catalog();
        // s1 is Grade 4; the name "Math" would also match s2 in Grade 5.
        let teacher = Teacher::new("t1", "Ali")
            .with_assigned_subject("s1")
            .with_subject_name("Math");

        let g4 = resolve_qualifications(&teacher, &subjects, "Primary", "Grade 4");
        assert_eq!(g4.len(), 1);
        assert_eq!(g4[0].id, "s1");

        let g5 = resolve_qualifications(&teacher, &subjects, "Primary", "Grade 5");
        assert!(g5.is_empty());
    }

    #[test]
    fn test_unknown_assigned_id_does_not_fall_back() {
        let subjects = catalog();
        let teacher = Teacher::new("t1", "Ali")
            .with_assigned_subject("deleted")
            .with_subject_name("Science");

        assert!(resolve_qualifications(&teacher, &subjects, "Primary", "Grade 4").is_empty());
    }

    #[test]
    fn test_name_scoped_to_grade() {
        let subjects = catalog();
        let teacher = Teacher::new("t1", "Ali").with_subject_name("Math");

        let g5 = resolve_qualifications(&teacher, &subjects, "Primary", "Grade 5");
        assert_eq!(g5.len(), 1);
        assert_eq!(g5[0].id, "s2");
        assert!(resolve_qualifications(&teacher, &subjects, "Primary", "Grade 6").is_empty());
    }

    #[test]
    fn test_unqualified_teacher_contributes_nothing() {
        let subjects = catalog();
        let teachers = vec![
            Teacher::new("t1", "Ali"),
            Teacher::new("t2", "Sara").with_assigned_subject("s3"),
        ];
        let tasks = derive_grade_tasks(&teachers, &subjects, "Primary", "Grade 4");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].teacher_id, "t2");
    }

    #[test]
    fn test_all_qualifications() {
        let subjects = catalog();
        let by_name = Teacher::new("t1", "Ali").with_subject_name("Math");
        assert_eq!(all_qualifications(&by_name, &subjects).len(), 2);

        let by_id = Teacher::new("t2", "Sara")
            .with_assigned_subject("s3")
            .with_subject_name("Math");
        let quals = all_qualifications(&by_id, &subjects);
        assert_eq!(quals.len(), 1);
        assert_eq!(quals[0].id, "s3");
    }
}
