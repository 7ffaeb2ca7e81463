use rubric_common::{RubricField, RubricId};

#[derive(Clone, Debug)]
pub enum Msg {
    NewForm,
    SetField(RubricField, String),
    SetScore(usize, String),
    Save,
    Load(RubricId),
    RequestDelete(RubricId),
    ConfirmDelete,
    CancelDelete,
}
