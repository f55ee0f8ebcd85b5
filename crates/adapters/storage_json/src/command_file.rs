//! Command-file adapter — the single-slot mailbox the controller polls.

use std::path::PathBuf;

use catfeeder_app::ports::CommandSink;
use catfeeder_domain::command::Command;
use catfeeder_domain::error::{CommandWriteError, FeederError};

/// [`CommandSink`] backed by the JSON file the external controller polls.
///
/// Writes go to a sibling temp file first and are renamed into place, so
/// the poller never observes a torn write. The rename also gives the
/// last-write-wins semantics the mailbox contract requires.
#[derive(Debug, Clone)]
pub struct JsonCommandFile {
    path: PathBuf,
}

impl JsonCommandFile {
    /// Create an adapter writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CommandSink for JsonCommandFile {
    async fn submit(&self, command: Command) -> Result<(), FeederError> {
        // Pretty-printed to match what the controller's line-oriented
        // parser historically consumed.
        let body = serde_json::to_vec_pretty(&command).map_err(CommandWriteError::Serialize)?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &body)
            .await
            .map_err(CommandWriteError::Io)?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(CommandWriteError::Io)?;

        tracing::debug!(action = %command.action, path = %self.path.display(), "command file written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catfeeder_domain::command::{Action, COMMAND_SOURCE};
    use catfeeder_domain::time;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(name: &str) -> PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        std::env::temp_dir().join(format!("catfeeder-command-{name}-{stamp}.json"))
    }

    async fn read_back(path: &PathBuf) -> Command {
        let bytes = tokio::fs::read(path).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_write_command_record() {
        let path = temp_path("write");
        let sink = JsonCommandFile::new(&path);

        let command = Command::new(Action::ManualFeed, time::now());
        sink.submit(command.clone()).await.unwrap();

        let written = read_back(&path).await;
        assert_eq!(written, command);
        assert_eq!(written.source, COMMAND_SOURCE);

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn should_replace_prior_command_entirely() {
        let path = temp_path("replace");
        let sink = JsonCommandFile::new(&path);

        sink.submit(Command::new(Action::ManualFeed, time::now()))
            .await
            .unwrap();
        sink.submit(Command::new(Action::EjectOnly, time::now()))
            .await
            .unwrap();

        let written = read_back(&path).await;
        assert_eq!(written.action, Action::EjectOnly);

        let text = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(!text.contains("manual_feed"));

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn should_not_leave_temp_file_behind() {
        let path = temp_path("tmpfile");
        let sink = JsonCommandFile::new(&path);

        sink.submit(Command::new(Action::Terminate, time::now()))
            .await
            .unwrap();

        let tmp = path.with_extension("json.tmp");
        assert!(!tokio::fs::try_exists(&tmp).await.unwrap());

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn should_report_io_failure_when_directory_missing() {
        let path = std::env::temp_dir()
            .join("catfeeder-no-such-dir")
            .join("does-not-exist")
            .join("web_commands.json");
        let sink = JsonCommandFile::new(&path);

        let result = sink.submit(Command::new(Action::ManualFeed, time::now())).await;
        assert!(matches!(
            result,
            Err(FeederError::CommandWrite(CommandWriteError::Io(_)))
        ));
    }
}
