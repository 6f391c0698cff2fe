use super::traits::DatagramTransport;
use std::io::Result;
use std::net::{SocketAddr, UdpSocket};
use std::time::Duration;

pub struct UdpTransport {
    socket: UdpSocket,
}

impl UdpTransport {
    pub fn bind(bind_addr: SocketAddr) -> Result<Self> {
        let socket = UdpSocket::bind(bind_addr)?;
        Ok(UdpTransport { socket })
    }

    /// Bind to an OS-assigned ephemeral port on all interfaces.
    pub fn ephemeral() -> Result<Self> {
        Self::bind(SocketAddr::from(([0, 0, 0, 0], 0)))
    }

    /// Pass-through read timeout. The exchange itself never sets one (its
    /// receive blocks indefinitely); tests use this to bound their waits.
    pub fn set_read_timeout(&self, timeout: Option<Duration>) -> Result<()> {
        self.socket.set_read_timeout(timeout)
    }
}

impl DatagramTransport for UdpTransport {
    fn send(&self, data: &[u8], destination: SocketAddr) -> Result<usize> {
        self.socket.send_to(data, destination)
    }

    fn receive(&self, buffer: &mut [u8]) -> Result<(usize, SocketAddr)> {
        self.socket.recv_from(buffer)
    }

    fn local_addr(&self) -> Result<SocketAddr> {
        self.socket.local_addr()
    }
}
