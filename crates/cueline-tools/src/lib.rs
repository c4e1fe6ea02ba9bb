//! Cueline Tools - Show Orchestration
//!
//! High-level operations that string several encoded commands together and
//! ship them over one console connection. The encoders stay pure; this crate
//! owns the sequencing and the connection lifetime.

#![warn(missing_docs)]

use thiserror::Error;
use tracing::info;

use cueline_cmd::{
    go_sequence, goto_cue, label_group, pause_sequence, select_fixture, store_group, Ident,
};
use cueline_remote::{ConsoleClient, RemoteConfig, RemoteError};

/// Tool errors
#[derive(Error, Debug)]
pub enum ToolsError {
    /// Command could not be encoded
    #[error(transparent)]
    Command(#[from] cueline_cmd::CommandError),

    /// Transport failure
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

/// Result type for tool operations
pub type Result<T> = std::result::Result<T, ToolsError>;

/// What to do with a sequence
#[derive(Debug, Clone, PartialEq)]
pub enum SequenceAction {
    /// Run the sequence forward
    Go,
    /// Pause the sequence
    Pause,
    /// Jump to a cue in the sequence
    Goto(Ident),
}

/// Connected tool surface
///
/// ```no_run
/// use cueline_remote::{ConsoleClient, RemoteConfig};
/// use cueline_tools::ShowTools;
///
/// # async fn run() -> anyhow::Result<()> {
/// let mut tools = ShowTools::connect(RemoteConfig::new("192.168.1.100")).await?;
/// tools.create_fixture_group(1, 10, 3, Some("Backtruss")).await?;
/// tools.close().await?;
/// # Ok(())
/// # }
/// ```
pub struct ShowTools {
    client: ConsoleClient,
}

impl ShowTools {
    /// Connect and log in
    pub async fn connect(config: RemoteConfig) -> Result<Self> {
        let mut client = ConsoleClient::new(config);
        client.connect().await?;
        client.login().await?;
        Ok(Self { client })
    }

    /// Wrap an already-connected client
    pub fn with_client(client: ConsoleClient) -> Self {
        Self { client }
    }

    /// Select a fixture range, store it as a group, and optionally label it
    pub async fn create_fixture_group(
        &mut self,
        start_fixture: i64,
        end_fixture: i64,
        group_id: u32,
        group_name: Option<&str>,
    ) -> Result<String> {
        self.client
            .send(&select_fixture(start_fixture..=end_fixture)?)
            .await?;
        info!(start_fixture, end_fixture, "selected fixtures");

        self.client.send(&store_group(group_id)).await?;
        info!(group_id, "stored group");

        if let Some(name) = group_name {
            self.client.send(&label_group(group_id, name)).await?;
            info!(group_id, name, "labeled group");
            return Ok(format!(
                "created group {} \"{}\" containing fixtures {} thru {}",
                group_id, name, start_fixture, end_fixture
            ));
        }
        Ok(format!(
            "created group {} containing fixtures {} thru {}",
            group_id, start_fixture, end_fixture
        ))
    }

    /// Run, pause, or jump within a sequence
    pub async fn run_sequence(
        &mut self,
        sequence_id: u32,
        action: SequenceAction,
    ) -> Result<String> {
        match action {
            SequenceAction::Go => {
                self.client.send(&go_sequence(sequence_id)).await?;
                Ok(format!("started sequence {}", sequence_id))
            }
            SequenceAction::Pause => {
                self.client.send(&pause_sequence(sequence_id)).await?;
                Ok(format!("paused sequence {}", sequence_id))
            }
            SequenceAction::Goto(cue) => {
                let message = format!("jumped to cue {} of sequence {}", cue, sequence_id);
                self.client.send(&goto_cue(sequence_id, cue)).await?;
                Ok(message)
            }
        }
    }

    /// Ship one raw command line unmodified
    ///
    /// Escape hatch for commands the typed surface does not cover.
    pub async fn send_raw(&mut self, command: &str) -> Result<String> {
        self.client.send(command).await?;
        info!(command, "sent raw command");
        Ok(format!("sent: {}", command))
    }

    /// Ship a command and return the console's feedback
    pub async fn query(&mut self, command: &str) -> Result<String> {
        Ok(self.client.send_with_response(command).await?)
    }

    /// Close the connection
    pub async fn close(&mut self) -> Result<()> {
        Ok(self.client.close().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::io::{AsyncBufReadExt, BufReader};
    use tokio::net::TcpListener;

    async fn tools_against(listener: &TcpListener) -> ShowTools {
        let port = listener.local_addr().unwrap().port();
        let config = RemoteConfig::new("127.0.0.1").with_port(port);
        let mut client = ConsoleClient::new(config);
        client.connect().await.unwrap();
        ShowTools::with_client(client)
    }

    #[tokio::test]
    async fn test_group_tool_sends_expected_lines() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let mut tools = tools_against(&listener).await;
        let server = tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            let mut lines = BufReader::new(stream).lines();
            let mut received = Vec::new();
            for _ in 0..3 {
                received.push(lines.next_line().await.unwrap().unwrap());
            }
            received
        });

        let message = tools
            .create_fixture_group(1, 10, 3, Some("Backtruss"))
            .await
            .unwrap();
        tools.close().await.unwrap();

        let received = server.await.unwrap();
        // next_line strips the CRLF; cueline-remote's tests cover the framing
        assert_eq!(received[0], "selfix fixture 1 thru 10");
        assert_eq!(received[1], "store group 3");
        assert_eq!(received[2], "label group 3 \"Backtruss\"");
        assert!(message.contains("group 3"));
    }

    #[tokio::test]
    async fn test_sequence_tool_actions() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let mut tools = tools_against(&listener).await;
        let server = tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            let mut lines = BufReader::new(stream).lines();
            let mut received = Vec::new();
            for _ in 0..3 {
                received.push(lines.next_line().await.unwrap().unwrap());
            }
            received
        });

        tools.run_sequence(1, SequenceAction::Go).await.unwrap();
        tools.run_sequence(1, SequenceAction::Pause).await.unwrap();
        tools
            .run_sequence(1, SequenceAction::Goto(3.into()))
            .await
            .unwrap();
        tools.close().await.unwrap();

        let received = server.await.unwrap();
        assert_eq!(received[0], "go+ sequence 1");
        assert_eq!(received[1], "pause sequence 1");
        assert_eq!(received[2], "goto cue 3 sequence 1");
    }
}
