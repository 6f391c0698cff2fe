pub mod traits;
pub mod udp;

pub use traits::DatagramTransport;
pub use udp::UdpTransport;
