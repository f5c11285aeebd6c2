use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

use crate::contact::Contact;
use crate::error::WabulkError;

/// One bulk-send invocation. Immutable once started, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendJob {
    pub id: Uuid,
    /// Message body sent to every target.
    pub message: String,
    /// Optional media attachment. A path that does not exist at send time is
    /// skipped silently, not treated as a failure.
    pub media_path: Option<PathBuf>,
    /// Targets in send order. Order is the only audit trail.
    pub targets: Vec<Contact>,
    pub created_at: DateTime<Utc>,
}

impl SendJob {
    /// Build a job, enforcing the start invariant: non-empty message and at
    /// least one target. Violations fail here, before any navigation.
    pub fn new(
        message: impl Into<String>,
        media_path: Option<PathBuf>,
        targets: Vec<Contact>,
    ) -> Result<Self, WabulkError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(WabulkError::Validation("message must not be empty".into()));
        }
        if targets.is_empty() {
            return Err(WabulkError::Validation(
                "job has no targets to send to".into(),
            ));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            message,
            media_path,
            targets,
            created_at: Utc::now(),
        })
    }
}

/// Terminal outcome of one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SendOutcome {
    Success,
    Failure,
}

/// Per-target result, produced in input order, one per target.
///
/// `Success` means the submit action was issued without an immediate error.
/// It does NOT confirm actual delivery or a read receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendResult {
    pub number: String,
    pub outcome: SendOutcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SendResult {
    pub fn success(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            outcome: SendOutcome::Success,
            error: None,
        }
    }

    pub fn failure(number: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            outcome: SendOutcome::Failure,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome == SendOutcome::Success
    }
}
