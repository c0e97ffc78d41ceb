//! Environment doctor for the wrapper.
//!
//! Answers one question before a build is attempted: can `hvigorw` launch
//! the vendored tool on this machine?

pub mod checks;
pub mod report;

pub use checks::{ToolCheck, run_checks};
pub use report::{DoctorReport, print_report};
