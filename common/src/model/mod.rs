pub mod criterion;
pub mod rubric;
pub mod score;
