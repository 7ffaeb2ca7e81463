//! Shared rubric model and session state for the grading form.
//!
//! `model` holds the record types and the fixed criteria table, `manager`
//! holds the in-memory session (`RubricManager`) that the frontend drives.

pub mod clock;
pub mod error;
pub mod manager;
pub mod model;

pub use clock::{Clock, SystemClock};
pub use error::{RubricError, SaveError};
pub use manager::{DeleteOutcome, DeleteRequest, RubricManager};
pub use model::criterion::{Criterion, CRITERIA};
pub use model::rubric::{Rubric, RubricField, RubricId};
