use std::io::Result;
use std::net::SocketAddr;

/// Trait representing an unreliable datagram channel.
/// Object-safe and pluggable so tests can script replies without a socket.
pub trait DatagramTransport: Send + Sync {
    /// Send one datagram to the destination. Returns the bytes sent.
    fn send(&self, data: &[u8], destination: SocketAddr) -> Result<usize>;

    /// Block until one datagram arrives, reading at most `buffer.len()`
    /// bytes. Returns the number of bytes read and the source address.
    fn receive(&self, buffer: &mut [u8]) -> Result<(usize, SocketAddr)>;

    /// Get the local socket address.
    fn local_addr(&self) -> Result<SocketAddr>;
}
