use crate::codec::DEFAULT_TRANSFER_MODE;
use crate::error::{ProbeError, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::net::{SocketAddr, ToSocketAddrs};

/// Probe configuration, loaded from a JSON file. Only the peer host and the
/// requested filename are mandatory; everything else has a protocol default.
#[derive(Debug, Deserialize, Clone)]
pub struct ProbeConfig {
    /// Peer IP literal or hostname.
    pub host: String,
    /// Peer port (default: 69, the well-known TFTP port).
    #[serde(default = "default_port")]
    pub port: u16,
    /// Operation code of the request (default: 1, read request).
    #[serde(default = "default_opcode")]
    pub opcode: u16,
    /// Resource to request from the peer.
    pub filename: String,
    /// Transfer mode token (default: "octet").
    #[serde(default = "default_mode")]
    pub mode: String,
    /// Reply buffer capacity in bytes; larger datagrams are truncated
    /// (default: 100, plenty for an error packet or the first data block of
    /// a small file).
    #[serde(default = "default_max_reply_size")]
    pub max_reply_size: usize,
}

fn default_port() -> u16 {
    69
}
fn default_opcode() -> u16 {
    crate::codec::OPCODE_RRQ
}
fn default_mode() -> String {
    DEFAULT_TRANSFER_MODE.to_string()
}
fn default_max_reply_size() -> usize {
    100
}

impl ProbeConfig {
    pub fn load(path: &str) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    /// Resolve host + port to the fixed peer address for one exchange.
    pub fn peer_addr(&self) -> Result<SocketAddr> {
        let target = (self.host.as_str(), self.port);
        target
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| ProbeError::Addr(format!("{}:{}", self.host, self.port)))
    }
}
