pub mod builder;
pub mod form;
pub mod progress;
pub mod review;
pub mod step;
pub mod validation;
