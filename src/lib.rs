pub mod app;
pub mod batch;
pub mod cli;
pub mod constants;
pub mod contour;
pub mod goatherd_errors;
