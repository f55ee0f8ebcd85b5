//! Pending command — the single-slot mailbox record written for the
//! external controller.
//!
//! There is no queue and no acknowledgment: writing a new command replaces
//! any prior one, and the controller deletes the file after consuming it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// Source marker stamped on every command this component issues.
pub const COMMAND_SOURCE: &str = "web_api";

/// Action requested of the external controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Dispense one feed unit now.
    ManualFeed,
    /// Eject the current can without dispensing.
    EjectOnly,
    /// Ask the controller process to shut down.
    Terminate,
}

impl Action {
    /// The wire tag for this action.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ManualFeed => "manual_feed",
            Self::EjectOnly => "eject_only",
            Self::Terminate => "terminate",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The record written to the command file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// Requested action.
    pub action: Action,
    /// Issuing component marker.
    pub source: String,
    /// Unix time of issuance, assigned at write time.
    pub timestamp: i64,
}

impl Command {
    /// Build a command issued at `issued_at` with the fixed source marker.
    #[must_use]
    pub fn new(action: Action, issued_at: Timestamp) -> Self {
        Self {
            action,
            source: COMMAND_SOURCE.to_string(),
            timestamp: issued_at.timestamp(),
        }
    }
}
