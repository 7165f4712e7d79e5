//! Submission state for the two AI demo widgets.
//!
//! DESIGN
//! ======
//! `begin_submit` is the single gate every submission passes through: it
//! enforces one outstanding request per widget and routes un-activated
//! submissions to the activation callback instead of the API.

#[cfg(test)]
#[path = "demo_test.rs"]
mod demo_test;

use crate::net::types::{ApiError, ErrorKind};

pub const STRATEGY_FAILED: &str = "Failed to generate strategy. Please check your connection or API key.";
pub const CREATIVE_FAILED: &str = "Creative generation failed. Please try again.";

/// What the widget should do with a submit event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Blank input or a request already in flight.
    Ignore,
    /// No usable key; hand off to the activation callback.
    Activate,
    /// Call the API with this (trimmed) text.
    Send(String),
}

/// What the widget should do after a request settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FinishAction {
    None,
    /// The key was rejected; ask the host to re-select one.
    Reactivate,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetState<T> {
    pub input: String,
    pub loading: bool,
    pub result: Option<T>,
    pub error: Option<String>,
    failure_notice: &'static str,
}

impl<T> WidgetState<T> {
    #[must_use]
    pub fn new(failure_notice: &'static str) -> Self {
        Self { input: String::new(), loading: false, result: None, error: None, failure_notice }
    }

    pub fn begin_submit(&mut self, activated: bool) -> SubmitDecision {
        if self.loading {
            return SubmitDecision::Ignore;
        }
        let text = self.input.trim();
        if text.is_empty() {
            return SubmitDecision::Ignore;
        }
        if !activated {
            return SubmitDecision::Activate;
        }
        let text = text.to_owned();
        self.loading = true;
        self.error = None;
        SubmitDecision::Send(text)
    }

    /// Settle the in-flight request. A failure never touches `result`.
    pub fn finish(&mut self, outcome: Result<T, ApiError>) -> FinishAction {
        self.loading = false;
        match outcome {
            Ok(value) => {
                self.result = Some(value);
                FinishAction::None
            }
            Err(err) => {
                self.error = Some(self.failure_notice.to_owned());
                if err.kind == ErrorKind::Unauthorized { FinishAction::Reactivate } else { FinishAction::None }
            }
        }
    }
}
