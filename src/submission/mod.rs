//! Submission workflow: the controller state machine and its
//! presentation-facing state.

pub mod controller;
pub mod state;


pub use controller::SubmissionController;
pub use state::{SubmissionPhase, SubmissionState};
