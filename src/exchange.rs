//! One-shot request/response exchange.
//!
//! The exchange owns its transport for exactly one request/response pair:
//! encode, send one datagram, block for one reply, decode the header. No
//! retries, no timeout, no transaction matching. If the peer never replies
//! the receive blocks until externally interrupted; that is the documented
//! behavior of this diagnostic tool, not a bug.

use crate::codec::{ReplyHeader, RequestPacket};
use crate::error::{ProbeError, Result};
use crate::transport::{DatagramTransport, UdpTransport};
use log::{debug, info};
use std::net::SocketAddr;

/// What one completed exchange observed, for diagnostic output.
#[derive(Debug)]
pub struct ReplyOutcome {
    pub header: ReplyHeader,
    /// Raw datagram size as delivered by the transport, after any truncation
    /// to the configured reply buffer capacity.
    pub bytes_received: usize,
    /// Sender of the reply. TFTP servers answer from a fresh transfer port,
    /// so this usually differs from the request's destination port.
    pub from: SocketAddr,
}

pub struct Exchange<T: DatagramTransport = UdpTransport> {
    transport: T,
}

impl Exchange<UdpTransport> {
    /// Acquire a UDP socket on an ephemeral local port. The socket is
    /// released when the exchange is dropped, on every exit path.
    pub fn udp() -> Result<Self> {
        let transport = UdpTransport::ephemeral()?;
        Ok(Exchange { transport })
    }
}

impl<T: DatagramTransport> Exchange<T> {
    pub fn new(transport: T) -> Self {
        Exchange { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run one request/response cycle: Idle -> Sent -> Completed.
    ///
    /// Any failure is terminal; there is no retry transition. The receive
    /// blocks indefinitely and reads at most `max_reply_size` bytes, the
    /// datagram layer discards any excess.
    pub fn run(
        &self,
        peer: SocketAddr,
        request: &RequestPacket,
        max_reply_size: usize,
    ) -> Result<ReplyOutcome> {
        let encoded = request.to_bytes();
        debug!(
            "sending {} byte request (opcode {}) to {}",
            encoded.len(),
            request.opcode(),
            peer
        );

        // Idle -> Sent
        self.transport
            .send(&encoded, peer)
            .map_err(ProbeError::Send)?;

        // Sent -> Completed
        let mut buf = vec![0u8; max_reply_size];
        let (amt, from) = self
            .transport
            .receive(&mut buf)
            .map_err(ProbeError::Receive)?;
        info!("received {amt} byte reply from {from}");

        let header = ReplyHeader::deserialize(&buf[..amt])?;
        Ok(ReplyOutcome {
            header,
            bytes_received: amt,
            from,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::OPCODE_RRQ;
    use std::io;
    use std::net::{Ipv4Addr, SocketAddrV4};
    use std::sync::Mutex;

    /// Scripted transport: records the sent frame, then serves one canned
    /// reply (or a canned error) on receive.
    struct ScriptedTransport {
        sent: Mutex<Vec<u8>>,
        reply: std::result::Result<Vec<u8>, io::ErrorKind>,
    }

    impl ScriptedTransport {
        fn replying(reply: &[u8]) -> Self {
            ScriptedTransport {
                sent: Mutex::new(Vec::new()),
                reply: Ok(reply.to_vec()),
            }
        }

        fn failing(kind: io::ErrorKind) -> Self {
            ScriptedTransport {
                sent: Mutex::new(Vec::new()),
                reply: Err(kind),
            }
        }
    }

    fn peer() -> SocketAddr {
        SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 69))
    }

    impl DatagramTransport for ScriptedTransport {
        fn send(&self, data: &[u8], _destination: SocketAddr) -> io::Result<usize> {
            self.sent.lock().unwrap().extend_from_slice(data);
            Ok(data.len())
        }

        fn receive(&self, buffer: &mut [u8]) -> io::Result<(usize, SocketAddr)> {
            match &self.reply {
                Ok(reply) => {
                    let n = reply.len().min(buffer.len());
                    buffer[..n].copy_from_slice(&reply[..n]);
                    Ok((n, peer()))
                }
                Err(kind) => Err(io::Error::from(*kind)),
            }
        }

        fn local_addr(&self) -> io::Result<SocketAddr> {
            Ok(peer())
        }
    }

    #[test]
    fn test_exchange_sends_encoded_request_and_decodes_reply() {
        let transport = ScriptedTransport::replying(&[0x00, 0x05, 0x00, 0x01, 0xAA]);
        let exchange = Exchange::new(transport);

        let request = RequestPacket::new(OPCODE_RRQ, "file2.txt", "ocet").unwrap();
        let outcome = exchange.run(peer(), &request, 100).unwrap();

        assert_eq!(outcome.header.opcode, 5);
        assert_eq!(outcome.header.code, 1);
        assert_eq!(outcome.header.remainder, [0xAA]);
        assert_eq!(outcome.bytes_received, 5);
        assert_eq!(outcome.from, peer());

        let sent = exchange.transport().sent.lock().unwrap().clone();
        assert_eq!(sent, request.to_bytes());
    }

    #[test]
    fn test_exchange_truncates_reply_to_cap() {
        let transport = ScriptedTransport::replying(&[0x00, 0x03, 0x00, 0x01, 1, 2, 3, 4, 5, 6]);
        let exchange = Exchange::new(transport);

        let request = RequestPacket::new(OPCODE_RRQ, "a", "octet").unwrap();
        let outcome = exchange.run(peer(), &request, 6).unwrap();

        assert_eq!(outcome.bytes_received, 6);
        assert_eq!(outcome.header.remainder, [1, 2]);
    }

    #[test]
    fn test_exchange_short_reply_is_an_error() {
        let transport = ScriptedTransport::replying(&[0x00, 0x05]);
        let exchange = Exchange::new(transport);

        let request = RequestPacket::new(OPCODE_RRQ, "a", "octet").unwrap();
        let err = exchange.run(peer(), &request, 100).unwrap_err();
        assert!(matches!(err, ProbeError::ShortReply { len: 2 }));
    }

    #[test]
    fn test_exchange_receive_failure_is_terminal() {
        let transport = ScriptedTransport::failing(io::ErrorKind::ConnectionReset);
        let exchange = Exchange::new(transport);

        let request = RequestPacket::new(OPCODE_RRQ, "a", "octet").unwrap();
        let err = exchange.run(peer(), &request, 100).unwrap_err();
        assert!(matches!(err, ProbeError::Receive(_)));
    }
}
