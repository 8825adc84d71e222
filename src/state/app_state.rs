//! Application state definitions

use crate::state::FeedbackForm;
use serde::{Deserialize, Serialize};

/// A single submitted feedback entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    /// The in-progress draft bound to the visible form fields
    pub form: FeedbackForm,
    /// The most recent submission; display-only, overwritten on each submit
    pub latest_feedback: Option<FeedbackRecord>,
}

impl AppState {
    /// Whether anything has been submitted yet
    pub fn has_submission(&self) -> bool {
        self.latest_feedback.is_some()
    }
}
