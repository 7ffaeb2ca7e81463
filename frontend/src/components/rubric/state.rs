//! Component state for the grading rubric form.
//!
//! All rubric data lives in the `RubricManager`; the component only adds
//! what the UI itself needs (the pending delete prompt and a DOM ref).

use rubric_common::{DeleteRequest, RubricManager};
use yew::prelude::*;

/// Main state container for the `RubricManagerComponent`.
///
/// Fields are `pub` because they are accessed by `view` and `update` modules.
pub struct RubricManagerComponent {
    /// Saved rubrics and the rubric being edited.
    pub manager: RubricManager,

    /// Deletion waiting for the user to confirm in the dialog.
    pub pending_delete: Option<DeleteRequest>,

    /// Reference to the delete confirmation top-sheet container node.
    pub confirm_dialog_ref: NodeRef,
}

impl RubricManagerComponent {
    pub fn new() -> Self {
        Self {
            manager: RubricManager::new(),
            pending_delete: None,
            confirm_dialog_ref: Default::default(),
        }
    }
}
