//! TCP connection management and the request/response cycle.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use super::error::ClientError;

/// Maximum number of bytes read for a single response.
pub const RESPONSE_BUFFER_SIZE: usize = 1024;

const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Outcome of one command/response cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Response payload, at most [`RESPONSE_BUFFER_SIZE`] bytes. Treated
    /// as opaque bytes; no encoding is assumed.
    Payload(Vec<u8>),
    /// The server closed the connection before (or instead of) replying.
    PeerClosed,
}

/// An established TCP connection to the server.
///
/// Owned exclusively by the input loop and passed explicitly through it;
/// dropping the connection closes the underlying socket.
pub struct Connection {
    stream: TcpStream,
}

impl Connection {
    /// Establish a TCP connection with a bounded timeout.
    ///
    /// Exactly one attempt is made; an unreachable host, a refused
    /// connection, or an elapsed timeout all fail with
    /// [`ClientError::Connect`].
    pub async fn connect(host: &str, port: u16) -> Result<Self, ClientError> {
        let addr = format!("{}:{}", host, port);

        let stream = tokio::time::timeout(
            Duration::from_secs(CONNECT_TIMEOUT_SECS),
            TcpStream::connect(&addr),
        )
        .await
        .map_err(|_| {
            ClientError::Connect(format!(
                "timed out connecting to {} after {}s",
                addr, CONNECT_TIMEOUT_SECS
            ))
        })?
        .map_err(|e| ClientError::Connect(format!("failed to connect to {}: {}", addr, e)))?;

        Ok(Self { stream })
    }

    /// Send one command and read the response that follows it.
    ///
    /// The command is written as a single newline-terminated UTF-8 line,
    /// then one read of up to [`RESPONSE_BUFFER_SIZE`] bytes is made. A
    /// zero-length read means the peer closed the connection cleanly.
    ///
    /// At most one command is in flight at a time: callers must not send
    /// a second command before this returns.
    pub async fn send_command(&mut self, command: &str) -> Result<Reply, ClientError> {
        let mut line = String::with_capacity(command.len() + 1);
        line.push_str(command);
        line.push('\n');
        self.stream.write_all(line.as_bytes()).await?;
        tracing::debug!("Sent command: {}", command);

        let mut buf = vec![0u8; RESPONSE_BUFFER_SIZE];
        let n = self.stream.read(&mut buf).await?;
        if n == 0 {
            return Ok(Reply::PeerClosed);
        }

        buf.truncate(n);
        Ok(Reply::Payload(buf))
    }

    /// Close the connection, flushing any buffered writes.
    pub async fn shutdown(mut self) {
        if let Err(e) = self.stream.shutdown().await {
            tracing::debug!("Error shutting down connection: {}", e);
        }
    }
}
