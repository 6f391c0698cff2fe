//! Error types for the probe.

use thiserror::Error;

/// Main error type for all probe operations.
///
/// Every variant is terminal: there are no retries anywhere in this crate,
/// so an error aborts the exchange and propagates to the caller.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// A request string field contains an embedded NUL byte, which would
    /// corrupt the frame boundary on the wire.
    #[error("{field} contains an embedded NUL byte")]
    EmbeddedNul { field: &'static str },

    /// A request buffer could not be re-parsed (missing terminator, truncated
    /// opcode).
    #[error("malformed request packet: {0}")]
    MalformedRequest(&'static str),

    /// The outbound datagram send was rejected by the transport.
    #[error("failed to send request datagram: {0}")]
    Send(#[source] std::io::Error),

    /// The blocking receive failed before any datagram arrived.
    #[error("failed to receive reply datagram: {0}")]
    Receive(#[source] std::io::Error),

    /// The reply datagram is too short to carry the two 16-bit header fields.
    #[error("reply too short for header: got {len} bytes, need at least 4")]
    ShortReply { len: usize },

    /// I/O error while reading the configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    /// The configured peer host/port did not resolve to a socket address.
    #[error("invalid peer address {0:?}")]
    Addr(String),
}

/// Result type alias using ProbeError.
pub type Result<T> = std::result::Result<T, ProbeError>;
