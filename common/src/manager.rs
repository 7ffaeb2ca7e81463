//! In-memory session of the grading form.
//!
//! `RubricManager` owns the saved collection and the rubric being edited.
//! The presentation layer reads it and mutates it only through the methods
//! here; every operation completes synchronously.
//!
//! Deleting is split in two so the caller can ask the user first:
//! `request_delete` hands out a [`DeleteRequest`], and `resolve_delete`
//! applies it once the answer is known.

use log::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::error::{RubricError, SaveError};
use crate::model::rubric::{Rubric, RubricField, RubricId};

/// A deletion awaiting the user's confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    id: RubricId,
    student_name: String,
}

impl DeleteRequest {
    pub fn id(&self) -> RubricId {
        self.id
    }

    pub fn student_name(&self) -> &str {
        &self.student_name
    }

    /// Question to put to the user before deleting.
    pub fn prompt(&self) -> String {
        if self.student_name.trim().is_empty() {
            "Are you sure you want to delete this rubric?".to_string()
        } else {
            format!(
                "Are you sure you want to delete the rubric for {}?",
                self.student_name.trim()
            )
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Deleted(Rubric),
    Cancelled,
    NotFound,
}

pub struct RubricManager<C: Clock = SystemClock> {
    rubrics: Vec<Rubric>,
    current: Rubric,
    clock: C,
}

impl RubricManager<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for RubricManager<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> RubricManager<C> {
    pub fn with_clock(clock: C) -> Self {
        let current = Rubric::empty(clock.today());
        Self {
            rubrics: Vec::new(),
            current,
            clock,
        }
    }

    /// Blank rubric dated today. Does not touch the session.
    pub fn new_rubric(&self) -> Rubric {
        Rubric::empty(self.clock.today())
    }

    pub fn current(&self) -> &Rubric {
        &self.current
    }

    /// Saved rubrics in the order they were saved.
    pub fn rubrics(&self) -> &[Rubric] {
        &self.rubrics
    }

    pub fn get(&self, id: RubricId) -> Option<&Rubric> {
        self.rubrics.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.rubrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rubrics.is_empty()
    }

    /// Discards the in-progress rubric and starts a blank one.
    pub fn reset(&mut self) {
        self.current = self.new_rubric();
        debug!("started new rubric {}", self.current.id);
    }

    pub fn set_field(&mut self, field: RubricField, value: impl Into<String>) {
        let value = value.into();
        debug!("set {:?} on rubric {}", field, self.current.id);
        *self.current.field_mut(field) = value;
    }

    /// Replaces the raw score text of criterion `index`. The text is not
    /// validated; see `Rubric::total` for how it is read.
    pub fn set_score(&mut self, index: usize, value: impl Into<String>) -> Result<(), RubricError> {
        let Some(criterion) = self.current.criteria.get_mut(index) else {
            warn!("ignored score for unknown criterion {}", index);
            return Err(RubricError::UnknownCriterion(index));
        };
        criterion.score = value.into();
        debug!("set score of criterion {} to {:?}", index, criterion.score);
        Ok(())
    }

    /// Total of the in-progress rubric.
    pub fn total(&self) -> f64 {
        self.current.total()
    }

    /// Stores a copy of the in-progress rubric and starts a blank one.
    ///
    /// Fails without changing anything when the student name is blank.
    pub fn save(&mut self) -> Result<RubricId, SaveError> {
        if !self.current.has_student_name() {
            warn!("refused to save rubric {} without a student name", self.current.id);
            return Err(SaveError::MissingStudentName);
        }

        let fresh = self.new_rubric();
        let saved = std::mem::replace(&mut self.current, fresh);
        let id = saved.id;
        info!(
            "saved rubric {} for {:?} (total {})",
            id,
            saved.student_name,
            saved.total()
        );
        self.rubrics.push(saved);
        Ok(id)
    }

    pub fn request_delete(&self, id: RubricId) -> Option<DeleteRequest> {
        self.get(id).map(|rubric| DeleteRequest {
            id,
            student_name: rubric.student_name.clone(),
        })
    }

    /// Applies a pending deletion once the user has answered.
    pub fn resolve_delete(&mut self, request: DeleteRequest, confirmed: bool) -> DeleteOutcome {
        if !confirmed {
            debug!("delete of rubric {} cancelled", request.id);
            return DeleteOutcome::Cancelled;
        }

        match self.rubrics.iter().position(|r| r.id == request.id) {
            Some(index) => {
                let removed = self.rubrics.remove(index);
                info!("deleted rubric {} for {:?}", removed.id, removed.student_name);
                DeleteOutcome::Deleted(removed)
            }
            None => DeleteOutcome::NotFound,
        }
    }

    /// Deletes `id` if `confirm` agrees. `confirm` is not called for an
    /// unknown id.
    pub fn delete<F>(&mut self, id: RubricId, confirm: F) -> DeleteOutcome
    where
        F: FnOnce(&DeleteRequest) -> bool,
    {
        match self.request_delete(id) {
            Some(request) => {
                let confirmed = confirm(&request);
                self.resolve_delete(request, confirmed)
            }
            None => DeleteOutcome::NotFound,
        }
    }

    /// Copies saved rubric `id` into the editor under a new id, leaving the
    /// saved record as it was. Returns the new id, or `None` if `id` is not
    /// saved.
    pub fn load(&mut self, id: RubricId) -> Option<RubricId> {
        let copy = self.get(id)?.duplicate();
        let new_id = copy.id;
        info!("loaded rubric {} into editor as {}", id, new_id);
        self.current = copy;
        Some(new_id)
    }
}
