//! Diagnostic TFTP probe: encode one request, send it over UDP, decode the
//! first reply's header.

pub mod codec;
pub mod config;
pub mod error;
pub mod exchange;
pub mod transport;

pub use codec::{ReplyHeader, RequestPacket};
pub use config::ProbeConfig;
pub use error::{ProbeError, Result};
pub use exchange::{Exchange, ReplyOutcome};
pub use transport::{DatagramTransport, UdpTransport};
