//! FAQ Errors
//!
//! Every failure carries the action that was attempted so the screen can
//! show the matching generic message.

use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

pub type FaqResult<T> = Result<T, FaqError>;

/// The four round trips against the remote FAQ store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaqAction {
    Fetch,
    Create,
    Update,
    Delete,
}

impl FaqAction {
    /// Toast text shown when the action fails
    pub fn failure_message(self) -> &'static str {
        match self {
            FaqAction::Fetch => "Failed to fetch FAQs. Please try again.",
            FaqAction::Create => "Failed to create FAQ. Please try again.",
            FaqAction::Update => "Failed to update FAQ. Please try again.",
            FaqAction::Delete => "Failed to delete FAQ. Please try again.",
        }
    }

    /// Toast text shown when the action succeeds
    pub fn success_message(self) -> &'static str {
        match self {
            FaqAction::Fetch => "FAQs loaded.",
            FaqAction::Create => "FAQ created successfully.",
            FaqAction::Update => "FAQ updated successfully.",
            FaqAction::Delete => "FAQ deleted successfully.",
        }
    }
}

impl fmt::Display for FaqAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FaqAction::Fetch => "fetch FAQs",
            FaqAction::Create => "create FAQ",
            FaqAction::Update => "update FAQ",
            FaqAction::Delete => "delete FAQ",
        })
    }
}

#[derive(Debug, Error)]
pub enum FaqError {
    #[error("{field} is required")]
    Validation { field: &'static str },

    #[error("failed to {action}: request error: {source}")]
    Transport {
        action: FaqAction,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to {action}: server responded with {status}")]
    Status { action: FaqAction, status: StatusCode },

    #[error("failed to {action}: unreadable response: {source}")]
    Decode {
        action: FaqAction,
        #[source]
        source: reqwest::Error,
    },
}

impl FaqError {
    /// Action that failed; validation failures never reach the store
    pub fn action(&self) -> Option<FaqAction> {
        match self {
            FaqError::Validation { .. } => None,
            FaqError::Transport { action, .. }
            | FaqError::Status { action, .. }
            | FaqError::Decode { action, .. } => Some(*action),
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self.action() {
            Some(action) => action.failure_message(),
            None => "Question and answer are both required.",
        }
    }
}
