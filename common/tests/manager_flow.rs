use chrono::NaiveDate;
use rubric_common::clock::FixedClock;
use rubric_common::{DeleteOutcome, RubricField, RubricManager, SaveError, CRITERIA};

fn manager() -> RubricManager<FixedClock> {
    RubricManager::with_clock(FixedClock(NaiveDate::from_ymd_opt(2024, 11, 4).unwrap()))
}

fn fill(m: &mut RubricManager<FixedClock>, name: &str, grade: &str, scores: &[&str]) {
    m.set_field(RubricField::StudentName, name);
    m.set_field(RubricField::Grade, grade);
    for (index, score) in scores.iter().enumerate() {
        m.set_score(index, *score).unwrap();
    }
}

#[test]
fn grading_session() {
    let mut m = manager();

    assert_eq!(m.save(), Err(SaveError::MissingStudentName));

    fill(&mut m, "Kim Minjun", "5", &["25", "20", "20", "15", "10", "10"]);
    assert_eq!(m.total(), 100.0);
    let first = m.save().unwrap();

    fill(&mut m, "Lee Sora", "5", &["20", "15", "abc", "10", "", "8"]);
    assert_eq!(m.total(), 53.0);
    let second = m.save().unwrap();

    fill(&mut m, "Park Jun", "6", &["10"]);
    let third = m.save().unwrap();

    let names: Vec<&str> = m.rubrics().iter().map(|r| r.student_name.as_str()).collect();
    assert_eq!(names, vec!["Kim Minjun", "Lee Sora", "Park Jun"]);

    // Revise the second student's work from a loaded copy.
    let revision = m.load(second).unwrap();
    assert_ne!(revision, second);
    m.set_score(2, "12").unwrap();
    assert_eq!(m.total(), 65.0);
    assert_eq!(m.get(second).unwrap().total(), 53.0);
    m.save().unwrap();
    assert_eq!(m.len(), 4);

    assert!(matches!(m.delete(first, |_| true), DeleteOutcome::Deleted(_)));
    assert_eq!(m.delete(third, |_| false), DeleteOutcome::Cancelled);

    let remaining: Vec<f64> = m.rubrics().iter().map(|r| r.total()).collect();
    assert_eq!(remaining, vec![53.0, 10.0, 65.0]);
}

#[test]
fn every_rubric_carries_the_fixed_criteria() {
    let mut m = manager();
    fill(&mut m, "A", "1", &[]);
    m.save().unwrap();
    fill(&mut m, "B", "1", &[]);
    m.save().unwrap();

    for rubric in m.rubrics().iter().chain(std::iter::once(m.current())) {
        assert_eq!(rubric.criteria.len(), CRITERIA.len());
        for (criterion, template) in rubric.criteria.iter().zip(CRITERIA.iter()) {
            assert_eq!(criterion.name, template.name);
            assert_eq!(criterion.max_points, template.max_points);
        }
        assert_eq!(rubric.max_total(), 100);
    }

    let ids: std::collections::HashSet<_> = m.rubrics().iter().map(|r| r.id).collect();
    assert_eq!(ids.len(), 2);
}
