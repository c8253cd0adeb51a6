//! Listening socket ownership and the accept loop

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::net::{UnixListener, UnixStream};
use tracing::{debug, error, info, warn};

use crate::error::{BrokerError, Result};
use crate::session::{Session, SessionEnd};

/// Well-known socket path used when none is configured.
pub const DEFAULT_SOCKET_PATH: &str = "/tmp/blockie_talkie_comm";

// ----------------------------------------------------------------------------
// Broker
// ----------------------------------------------------------------------------

/// Owns the listening socket and spawns one session task per connection.
pub struct Broker {
    socket_path: PathBuf,
}

impl Broker {
    pub fn new(socket_path: impl Into<PathBuf>) -> Self {
        Self {
            socket_path: socket_path.into(),
        }
    }

    pub fn default_socket_path() -> PathBuf {
        PathBuf::from(DEFAULT_SOCKET_PATH)
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    /// Clear any stale socket file and bind the listener.
    ///
    /// A leftover file from a crashed prior run is removed so it cannot
    /// block startup; a path held by a live listener is left alone so the
    /// bind reports the conflict instead of stealing the socket. Bind
    /// failure is fatal to the broker.
    pub async fn bind(&self) -> Result<UnixListener> {
        self.remove_stale_socket().await;
        UnixListener::bind(&self.socket_path).map_err(|source| BrokerError::Bind {
            path: self.socket_path.clone(),
            source,
        })
    }

    /// Accept connections until process termination.
    ///
    /// A single accept failure is logged and the loop continues; session
    /// lifetimes never block the accept loop.
    pub async fn run(&self) -> Result<()> {
        let listener = self.bind().await?;
        info!(socket = %self.socket_path.display(), "broker listening");

        loop {
            match listener.accept().await {
                Ok((stream, _addr)) => {
                    debug!("accepted socket connection");
                    tokio::spawn(async move {
                        match Session::new(stream).run().await {
                            SessionEnd::EndOfStream => debug!("session ended: peer closed"),
                            SessionEnd::Failed(e) => error!("session failed: {}", e),
                        }
                    });
                }
                Err(e) => error!("accept failed: {}", e),
            }
        }
    }

    /// Best-effort removal of a dead socket file at the bind path.
    async fn remove_stale_socket(&self) {
        // A connectable path has a live owner; leave it for bind to reject.
        match UnixStream::connect(&self.socket_path).await {
            Ok(_) => return,
            Err(e) if e.kind() == ErrorKind::NotFound => return,
            Err(_) => {}
        }

        match tokio::fs::remove_file(&self.socket_path).await {
            Ok(()) => debug!(
                "removed stale socket file {}",
                self.socket_path.display()
            ),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!(
                "could not remove stale socket file {}: {}",
                self.socket_path.display(),
                e
            ),
        }
    }
}

impl Default for Broker {
    fn default() -> Self {
        Self::new(Self::default_socket_path())
    }
}
