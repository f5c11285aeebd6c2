use serde::{Deserialize, Serialize};

/// A single entry in the contact list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    /// Display name, if known.
    pub name: Option<String>,
    /// Free-form phone number. No country-code validation or E.164
    /// enforcement is applied anywhere.
    pub number: String,
    /// Updated only after a send attempt.
    #[serde(default)]
    pub status: ContactStatus,
}

impl Contact {
    pub fn new(name: Option<String>, number: impl Into<String>) -> Self {
        Self {
            name,
            number: number.into(),
            status: ContactStatus::Pending,
        }
    }
}

/// Send status of a contact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    Pending,
    Sent,
    Failed,
}

impl ContactStatus {
    /// Human-readable name for display (e.g. in the contacts table).
    pub fn display_name(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Sent => "sent",
            Self::Failed => "failed",
        }
    }
}
