use thiserror::Error;

/// Reasons `RubricManager::save` refuses to store the in-progress rubric.
///
/// The `Display` text is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("Please enter the student's name.")]
    MissingStudentName,
}

/// Misuse of the editing API, as opposed to bad user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RubricError {
    #[error("criterion index {0} is out of range")]
    UnknownCriterion(usize),
}
