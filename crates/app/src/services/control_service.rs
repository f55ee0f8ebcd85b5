//! Control service — stamp and submit action commands.

use catfeeder_domain::command::{Action, Command};
use catfeeder_domain::error::FeederError;
use catfeeder_domain::time;

use crate::ports::CommandSink;

/// Application service for issuing controller commands.
///
/// Fire-and-forget by design: success means the command was written, not
/// that the controller acted on it.
pub struct ControlService<C> {
    sink: C,
}

impl<C: CommandSink> ControlService<C> {
    /// Create a new service backed by the given command sink.
    pub fn new(sink: C) -> Self {
        Self { sink }
    }

    /// Issue `action`, replacing any pending command.
    ///
    /// The current machine state is deliberately not inspected first; any
    /// busy guard belongs to the controller (and, cosmetically, the
    /// dashboard).
    ///
    /// # Errors
    ///
    /// Returns [`FeederError::CommandWrite`] when the command could not be
    /// persisted.
    #[tracing::instrument(skip(self), fields(action = %action))]
    pub async fn request(&self, action: Action) -> Result<(), FeederError> {
        let command = Command::new(action, time::now());
        self.sink.submit(command).await?;
        tracing::info!("command submitted");
        Ok(())
    }
}
