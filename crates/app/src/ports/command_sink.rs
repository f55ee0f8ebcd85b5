//! Command sink port — the single-slot pending-command mailbox.

use std::future::Future;

use catfeeder_domain::command::Command;
use catfeeder_domain::error::FeederError;

/// Accepts commands for the external controller.
///
/// Submitting unconditionally replaces any prior pending command; there is
/// no queue and no delivery acknowledgment (last write wins).
pub trait CommandSink {
    /// Persist `command` for the controller to pick up.
    fn submit(&self, command: Command) -> impl Future<Output = Result<(), FeederError>> + Send;
}

impl<T: CommandSink + Send + Sync> CommandSink for std::sync::Arc<T> {
    fn submit(&self, command: Command) -> impl Future<Output = Result<(), FeederError>> + Send {
        (**self).submit(command)
    }
}
