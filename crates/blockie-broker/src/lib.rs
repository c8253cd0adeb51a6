//! Unix-domain-socket broker for the Blockie Talkie bridge
//!
//! Local processes talk to the bridge over a Unix socket at a fixed,
//! well-known path. The [`Broker`] owns the listening socket and spawns an
//! independent [`Session`] task per accepted connection; each session relays
//! unframed bytes and answers every read with a fixed acknowledgement.
//!
//! The socket path is not cross-wired to the BLE side yet; that link is a
//! documented future seam.

// ----------------------------------------------------------------------------
// Module Declarations
// ----------------------------------------------------------------------------

pub mod broker;
pub mod error;
pub mod session;

// ----------------------------------------------------------------------------
// Public API
// ----------------------------------------------------------------------------

pub use broker::{Broker, DEFAULT_SOCKET_PATH};
pub use error::{BrokerError, Result};
pub use session::{Session, SessionEnd, ACK, READ_BUFFER_SIZE};
