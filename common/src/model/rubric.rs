//! A single student's scoring record.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clock::format_date;

use super::criterion::Criterion;

/// Identifier of a rubric, unique for the lifetime of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RubricId(Uuid);

impl RubricId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RubricId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RubricId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Top-level text fields editable on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RubricField {
    StudentName,
    Grade,
    Date,
}

/// A scoring record.
///
/// `criteria` always holds the fixed six entries in order; only their
/// `score` values change after creation. `date` is free text in
/// `YYYY-MM-DD` form as produced by the date input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rubric {
    pub id: RubricId,
    pub student_name: String,
    pub grade: String,
    pub date: String,
    pub criteria: Vec<Criterion>,
}

impl Rubric {
    /// Blank rubric dated `today`, every criterion unscored.
    pub fn empty(today: NaiveDate) -> Self {
        Self {
            id: RubricId::new(),
            student_name: String::new(),
            grade: String::new(),
            date: format_date(today),
            criteria: Criterion::fixed_set(),
        }
    }

    /// Deep copy under a freshly generated id.
    pub fn duplicate(&self) -> Self {
        Self {
            id: RubricId::new(),
            ..self.clone()
        }
    }

    pub fn field(&self, field: RubricField) -> &str {
        match field {
            RubricField::StudentName => &self.student_name,
            RubricField::Grade => &self.grade,
            RubricField::Date => &self.date,
        }
    }

    pub(crate) fn field_mut(&mut self, field: RubricField) -> &mut String {
        match field {
            RubricField::StudentName => &mut self.student_name,
            RubricField::Grade => &mut self.grade,
            RubricField::Date => &mut self.date,
        }
    }

    /// Sum of all scores; unset or non-numeric scores count as zero.
    pub fn total(&self) -> f64 {
        self.criteria.iter().map(Criterion::points).sum()
    }

    pub fn max_total(&self) -> u32 {
        self.criteria.iter().map(|c| c.max_points).sum()
    }

    /// Indexes of criteria whose score falls outside `0..=max_points`.
    pub fn out_of_range_criteria(&self) -> Vec<usize> {
        self.criteria
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_in_range())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn has_student_name(&self) -> bool {
        !self.student_name.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    }

    fn scored(scores: &[&str]) -> Rubric {
        let mut rubric = Rubric::empty(today());
        for (criterion, score) in rubric.criteria.iter_mut().zip(scores) {
            criterion.score = score.to_string();
        }
        rubric
    }

    #[test]
    fn empty_rubric_defaults() {
        let rubric = Rubric::empty(today());
        assert!(rubric.student_name.is_empty());
        assert!(rubric.grade.is_empty());
        assert_eq!(rubric.date, "2024-05-20");
        assert_eq!(rubric.criteria.len(), 6);
        assert_eq!(rubric.max_total(), 100);
    }

    #[test]
    fn unscored_total_is_zero() {
        assert_eq!(Rubric::empty(today()).total(), 0.0);
    }

    #[test]
    fn full_marks_total_one_hundred() {
        let rubric = scored(&["25", "20", "20", "15", "10", "10"]);
        assert_eq!(rubric.total(), 100.0);
    }

    #[test]
    fn non_numeric_score_contributes_nothing() {
        let rubric = scored(&["abc", "20", "", "15", "x1", "10"]);
        assert_eq!(rubric.total(), 45.0);
    }

    #[test]
    fn fractional_scores_sum() {
        let rubric = scored(&["12.5", "7.5"]);
        assert_eq!(rubric.total(), 20.0);
    }

    #[test]
    fn duplicate_gets_new_id_and_same_content() {
        let original = scored(&["1", "2", "3"]);
        let copy = original.duplicate();
        assert_ne!(copy.id, original.id);
        assert_eq!(copy.criteria, original.criteria);
        assert_eq!(copy.date, original.date);
    }

    #[test]
    fn out_of_range_scores_are_reported() {
        let rubric = scored(&["26", "20", "-1", "15", "abc", "10.5"]);
        assert_eq!(rubric.out_of_range_criteria(), vec![0, 2, 5]);
    }

    #[test]
    fn whitespace_name_is_not_a_name() {
        let mut rubric = Rubric::empty(today());
        rubric.student_name = "   ".into();
        assert!(!rubric.has_student_name());
        rubric.student_name = " Mina ".into();
        assert!(rubric.has_student_name());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let rubric = Rubric::empty(today());
        let value = serde_json::to_value(&rubric).unwrap();
        assert!(value.get("studentName").is_some());
        assert!(value["criteria"][0].get("maxPoints").is_some());
        assert!(value["criteria"][0].get("needsImprovement").is_some());
        assert!(value["id"].is_string());
    }
}
