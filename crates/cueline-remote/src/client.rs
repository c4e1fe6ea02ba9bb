//! Console telnet client
//!
//! The one place in the workspace that touches the socket: it opens the
//! connection, performs the login handshake, and ships CRLF-terminated
//! command lines. The console treats the stream as a plain line protocol,
//! so no telnet option negotiation is needed.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::{sleep, timeout};
use tracing::{debug, info, warn};

use crate::config::RemoteConfig;
use crate::error::{RemoteError, Result};

/// Settle time after the TCP connect before the console accepts input
const SETTLE: Duration = Duration::from_millis(500);
/// Processing delay after each command
const COMMAND_DELAY: Duration = Duration::from_millis(300);
/// How long to wait for the login banner; the console often stays silent
const LOGIN_READ_TIMEOUT: Duration = Duration::from_secs(1);
/// Drain window for stale data before a response read
const DRAIN_TIMEOUT: Duration = Duration::from_millis(100);
/// Wait for the first response chunk
const RESPONSE_TIMEOUT: Duration = Duration::from_secs(2);
/// Wait for follow-up chunks once the response has started
const RESPONSE_FOLLOWUP_TIMEOUT: Duration = Duration::from_millis(300);

/// Telnet connection to a console
///
/// ```no_run
/// use cueline_remote::{ConsoleClient, RemoteConfig};
///
/// # async fn run() -> cueline_remote::Result<()> {
/// let mut client = ConsoleClient::new(RemoteConfig::new("192.168.1.100"));
/// client.connect().await?;
/// client.login().await?;
/// client.send("selfix fixture 1 thru 10").await?;
/// client.close().await?;
/// # Ok(())
/// # }
/// ```
pub struct ConsoleClient {
    config: RemoteConfig,
    stream: Option<TcpStream>,
}

impl ConsoleClient {
    /// New client; does not connect yet
    pub fn new(config: RemoteConfig) -> Self {
        Self {
            config,
            stream: None,
        }
    }

    /// The connection settings this client was built with
    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    /// True once [`connect`](Self::connect) has succeeded
    pub fn is_connected(&self) -> bool {
        self.stream.is_some()
    }

    /// Open the TCP connection
    pub async fn connect(&mut self) -> Result<()> {
        info!(host = %self.config.host, port = self.config.port, "connecting");
        let stream = TcpStream::connect((self.config.host.as_str(), self.config.port))
            .await
            .map_err(|source| RemoteError::Connect {
                host: self.config.host.clone(),
                port: self.config.port,
                source,
            })?;
        self.stream = Some(stream);
        sleep(SETTLE).await;
        info!(host = %self.config.host, port = self.config.port, "connected");
        Ok(())
    }

    /// Log in with the configured credentials
    ///
    /// The console does not acknowledge a successful login reliably; a read
    /// timeout here is normal.
    pub async fn login(&mut self) -> Result<()> {
        // the password itself is never logged
        info!(user = %self.config.user, "logging in");
        let line = format!(
            "login \"{}\" \"{}\"\r\n",
            self.config.user, self.config.password
        );
        let stream = self.stream.as_mut().ok_or(RemoteError::NotConnected)?;
        stream.write_all(line.as_bytes()).await?;
        stream.flush().await?;
        sleep(SETTLE).await;

        let mut buf = [0u8; 1024];
        match timeout(LOGIN_READ_TIMEOUT, stream.read(&mut buf)).await {
            Ok(Ok(n)) => debug!(bytes = n, "login response"),
            Ok(Err(e)) => return Err(e.into()),
            Err(_) => debug!("no login response, continuing"),
        }
        info!("login sent");
        Ok(())
    }

    /// Send one command line, CRLF-terminated, and give the console time to
    /// process it
    pub async fn send(&mut self, command: &str) -> Result<()> {
        debug!(command, "sending");
        let stream = self.stream.as_mut().ok_or(RemoteError::NotConnected)?;
        stream.write_all(command.as_bytes()).await?;
        stream.write_all(b"\r\n").await?;
        stream.flush().await?;
        sleep(COMMAND_DELAY).await;
        Ok(())
    }

    /// Send a command and collect the console's feedback
    ///
    /// Meant for list and info commands that print to the feedback window.
    /// Stale data from earlier commands is drained first; reading stops when
    /// the console goes quiet.
    pub async fn send_with_response(&mut self, command: &str) -> Result<String> {
        debug!(command, "sending with response");
        let stream = self.stream.as_mut().ok_or(RemoteError::NotConnected)?;

        let mut buf = [0u8; 4096];
        if let Ok(Ok(n)) = timeout(DRAIN_TIMEOUT, stream.read(&mut buf)).await {
            debug!(bytes = n, "drained stale data");
        }

        stream.write_all(command.as_bytes()).await?;
        stream.write_all(b"\r\n").await?;
        stream.flush().await?;
        sleep(COMMAND_DELAY).await;

        let mut response = Vec::new();
        let mut window = RESPONSE_TIMEOUT;
        loop {
            match timeout(window, stream.read(&mut buf)).await {
                Ok(Ok(0)) => break,
                Ok(Ok(n)) => {
                    response.extend_from_slice(&buf[..n]);
                    window = RESPONSE_FOLLOWUP_TIMEOUT;
                }
                Ok(Err(e)) => {
                    warn!(error = %e, "error reading response");
                    break;
                }
                Err(_) => break,
            }
        }
        debug!(bytes = response.len(), "response received");
        Ok(String::from_utf8_lossy(&response).into_owned())
    }

    /// Shut the connection down
    pub async fn close(&mut self) -> Result<()> {
        if let Some(mut stream) = self.stream.take() {
            info!("closing connection");
            stream.shutdown().await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::io::{AsyncBufReadExt, BufReader};
    use tokio::net::TcpListener;

    async fn local_config() -> (TcpListener, RemoteConfig) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let config = RemoteConfig::new("127.0.0.1").with_port(port);
        (listener, config)
    }

    #[tokio::test]
    async fn test_login_line_format() {
        let (listener, config) = local_config().await;
        let server = tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            // read_line keeps the terminator so the wire framing is visible
            let mut reader = BufReader::new(stream);
            let mut line = String::new();
            reader.read_line(&mut line).await.unwrap();
            line
        });

        let mut client = ConsoleClient::new(config);
        client.connect().await.unwrap();
        client.login().await.unwrap();
        client.close().await.unwrap();

        assert_eq!(
            server.await.unwrap(),
            "login \"administrator\" \"admin\"\r\n"
        );
    }

    #[tokio::test]
    async fn test_commands_are_crlf_terminated() {
        let (listener, config) = local_config().await;
        let server = tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            let mut reader = BufReader::new(stream);
            let mut first = String::new();
            reader.read_line(&mut first).await.unwrap();
            let mut second = String::new();
            reader.read_line(&mut second).await.unwrap();
            (first, second)
        });

        let mut client = ConsoleClient::new(config);
        client.connect().await.unwrap();
        client.send("store cue 1").await.unwrap();
        client.send("go executor 3").await.unwrap();
        client.close().await.unwrap();

        let (first, second) = server.await.unwrap();
        assert_eq!(first, "store cue 1\r\n");
        assert_eq!(second, "go executor 3\r\n");
    }

    #[tokio::test]
    async fn test_send_with_response() {
        let (listener, config) = local_config().await;
        let server = tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            let mut reader = BufReader::new(stream);
            let mut line = String::new();
            reader.read_line(&mut line).await.unwrap();
            let mut stream = reader.into_inner();
            stream.write_all(b"Cue 1 'Opening'\r\n").await.unwrap();
            stream.flush().await.unwrap();
            line
        });

        let mut client = ConsoleClient::new(config);
        client.connect().await.unwrap();
        let response = client.send_with_response("list cue").await.unwrap();
        client.close().await.unwrap();

        assert_eq!(server.await.unwrap(), "list cue\r\n");
        assert!(response.contains("Cue 1 'Opening'"));
    }

    #[tokio::test]
    async fn test_send_before_connect_fails() {
        let config = RemoteConfig::new("127.0.0.1");
        let mut client = ConsoleClient::new(config);
        assert!(matches!(
            client.send("clear").await,
            Err(RemoteError::NotConnected)
        ));
    }
}
