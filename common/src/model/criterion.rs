//! The six fixed evaluation criteria and their per-rubric score entries.

use serde::{Deserialize, Serialize};

use super::score;

/// Static definition of one criterion: label, band texts and point ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CriterionTemplate {
    pub name: &'static str,
    pub excellent: &'static str,
    pub satisfactory: &'static str,
    pub needs_improvement: &'static str,
    pub max_points: u32,
}

/// Criteria every rubric is scored against, in display order.
/// The ceilings add up to 100.
pub const CRITERIA: [CriterionTemplate; 6] = [
    CriterionTemplate {
        name: "Word Formatting Skills",
        excellent: "Effectively uses various formatting features such as titles, headings, fonts, paragraph alignment, bullet/numbered lists",
        satisfactory: "Uses only basic formatting (titles, paragraphs); readability is maintained",
        needs_improvement: "Little or no use of formatting; poor readability",
        max_points: 25,
    },
    CriterionTemplate {
        name: "Tables and Images",
        excellent: "Appropriately inserts/edits tables and images to clearly present comparisons",
        satisfactory: "Some use of tables/images; moderately effective",
        needs_improvement: "Rarely uses tables/images, or placement is awkward",
        max_points: 20,
    },
    CriterionTemplate {
        name: "Comparison & Analysis",
        excellent: "Provides clear and specific comparisons of past and present daily life with detailed examples",
        satisfactory: "Some comparison but lacks detailed examples",
        needs_improvement: "Mostly listing, little or no comparison/analysis",
        max_points: 20,
    },
    CriterionTemplate {
        name: "Organization & Logic",
        excellent: "Clear structure (introduction–body–conclusion); ideas flow logically",
        satisfactory: "Structure is present but somewhat repetitive or awkward",
        needs_improvement: "Unclear structure; ideas not logically developed",
        max_points: 15,
    },
    CriterionTemplate {
        name: "Teamwork & Collaboration",
        excellent: "Both members actively participate in writing and editing in Word",
        satisfactory: "One member contributes more than the other",
        needs_improvement: "Relies heavily on one member; poor collaboration",
        max_points: 10,
    },
    CriterionTemplate {
        name: "Creativity",
        excellent: "Original ideas, engaging title, visually appealing layout",
        satisfactory: "Some originality but mostly conventional",
        needs_improvement: "Little or no originality",
        max_points: 10,
    },
];

/// One criterion as it appears on a rubric, carrying the score typed for it.
///
/// `score` keeps the raw input text. An empty string means "not scored yet".
/// Nothing here clamps it to `0..=max_points`; see [`Criterion::is_in_range`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Criterion {
    pub name: String,
    pub excellent: String,
    pub satisfactory: String,
    pub needs_improvement: String,
    pub max_points: u32,
    pub score: String,
}

impl Criterion {
    pub fn unscored(template: &CriterionTemplate) -> Self {
        Self {
            name: template.name.to_string(),
            excellent: template.excellent.to_string(),
            satisfactory: template.satisfactory.to_string(),
            needs_improvement: template.needs_improvement.to_string(),
            max_points: template.max_points,
            score: String::new(),
        }
    }

    /// Fresh, unscored copies of all of [`CRITERIA`].
    pub fn fixed_set() -> Vec<Self> {
        CRITERIA.iter().map(Self::unscored).collect()
    }

    /// Numeric value of the score, zero when unset or not a number.
    pub fn points(&self) -> f64 {
        score::coerce(&self.score)
    }

    pub fn is_scored(&self) -> bool {
        !self.score.trim().is_empty()
    }

    /// Whether the numeric score lies within `0..=max_points`.
    pub fn is_in_range(&self) -> bool {
        let points = self.points();
        (0.0..=f64::from(self.max_points)).contains(&points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_points_sum_to_one_hundred() {
        let sum: u32 = CRITERIA.iter().map(|c| c.max_points).sum();
        assert_eq!(sum, 100);
    }

    #[test]
    fn fixed_set_keeps_order_and_ceilings() {
        let set = Criterion::fixed_set();
        let ceilings: Vec<u32> = set.iter().map(|c| c.max_points).collect();
        assert_eq!(ceilings, vec![25, 20, 20, 15, 10, 10]);
        assert_eq!(set[0].name, "Word Formatting Skills");
        assert_eq!(set[5].name, "Creativity");
        assert!(set.iter().all(|c| c.score.is_empty()));
    }

    #[test]
    fn range_check_uses_coerced_score() {
        let mut c = Criterion::unscored(&CRITERIA[0]);
        assert!(c.is_in_range());
        c.score = "25".into();
        assert!(c.is_in_range());
        c.score = "26".into();
        assert!(!c.is_in_range());
        c.score = "-1".into();
        assert!(!c.is_in_range());
        c.score = "abc".into();
        assert!(c.is_in_range());
    }

    #[test]
    fn blank_score_is_not_scored() {
        let mut c = Criterion::unscored(&CRITERIA[3]);
        assert!(!c.is_scored());
        c.score = "  ".into();
        assert!(!c.is_scored());
        c.score = "0".into();
        assert!(c.is_scored());
    }
}
