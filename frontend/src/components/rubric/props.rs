//! Defines the properties for the `RubricManagerComponent`.

use yew::prelude::*;

/// Properties for the `RubricManagerComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct RubricManagerProps {
    /// Heading shown above the form.
    #[prop_or(AttrValue::Static("Teacher's Grading Rubric"))]
    pub title: AttrValue,
}
