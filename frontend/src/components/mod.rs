pub mod rubric;
