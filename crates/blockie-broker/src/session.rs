//! Per-connection session handling

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixStream;
use tracing::info;

// ----------------------------------------------------------------------------
// Session Constants
// ----------------------------------------------------------------------------

/// Fixed acknowledgement written back after every successful read.
pub const ACK: &[u8] = b"Message received\n";

/// Read buffer size; one read is treated as one logical message.
pub const READ_BUFFER_SIZE: usize = 1024;

// ----------------------------------------------------------------------------
// Session
// ----------------------------------------------------------------------------

/// Why a session ended.
///
/// A clean end of stream is a distinct, structured condition; callers branch
/// on this kind, never on error text.
#[derive(Debug)]
pub enum SessionEnd {
    /// The peer closed the connection.
    EndOfStream,
    /// A read or write failed.
    Failed(std::io::Error),
}

/// Duplex relay for exactly one accepted connection.
///
/// Message boundaries are only as reliable as the transport's read
/// granularity; there is no length prefix or delimiter framing.
pub struct Session {
    stream: UnixStream,
}

impl Session {
    pub fn new(stream: UnixStream) -> Self {
        Self { stream }
    }

    /// Run the read/ack cycle until the connection ends.
    ///
    /// Exactly one acknowledgement is written per successful read. The
    /// connection is released when this returns.
    pub async fn run(mut self) -> SessionEnd {
        let mut buf = [0u8; READ_BUFFER_SIZE];
        loop {
            let n = match self.stream.read(&mut buf).await {
                Ok(0) => return SessionEnd::EndOfStream,
                Ok(n) => n,
                Err(e) => return SessionEnd::Failed(e),
            };

            info!(
                "received on socket: {}",
                String::from_utf8_lossy(&buf[..n])
            );

            if let Err(e) = self.stream.write_all(ACK).await {
                return SessionEnd::Failed(e);
            }
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    async fn read_ack(stream: &mut UnixStream) -> Vec<u8> {
        let mut ack = vec![0u8; ACK.len()];
        stream.read_exact(&mut ack).await.unwrap();
        ack
    }

    #[tokio::test]
    async fn every_read_produces_exactly_one_ack() {
        let (mut client, server) = UnixStream::pair().unwrap();
        let session = tokio::spawn(Session::new(server).run());

        for msg in [b"hello".as_slice(), b"name=Bob", b"x"] {
            client.write_all(msg).await.unwrap();
            assert_eq!(read_ack(&mut client).await, ACK);
        }

        // No extra bytes queued beyond the three acks.
        drop(client);
        assert!(matches!(session.await.unwrap(), SessionEnd::EndOfStream));
    }

    #[tokio::test]
    async fn payload_content_does_not_change_the_ack() {
        let (mut client, server) = UnixStream::pair().unwrap();
        tokio::spawn(Session::new(server).run());

        client.write_all(&[0xff, 0x00, 0xfe]).await.unwrap();
        assert_eq!(read_ack(&mut client).await, ACK);

        client.write_all(&[0x42; READ_BUFFER_SIZE]).await.unwrap();
        // A full buffer may arrive as one or two reads; either way every
        // read is acked and nothing else is written.
        let mut first = vec![0u8; ACK.len()];
        client.read_exact(&mut first).await.unwrap();
        assert_eq!(first, ACK);
    }

    #[tokio::test]
    async fn clean_close_ends_the_session_without_error() {
        let (client, server) = UnixStream::pair().unwrap();
        let session = tokio::spawn(Session::new(server).run());

        drop(client);
        assert!(matches!(session.await.unwrap(), SessionEnd::EndOfStream));
    }
}
