pub mod advice;
pub mod learning;
pub mod progress;
