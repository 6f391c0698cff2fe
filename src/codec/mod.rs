//! # TFTP Codec Module
//!
//! Serialization and deserialization of the TFTP packets the probe touches.
//! Pure transformations, no socket I/O.
//!
//! ## Key Types
//!
//! - [`RequestPacket`] - RRQ/WRQ request frame (opcode + filename + mode)
//! - [`ReplyHeader`] - leading two 16-bit fields of any reply datagram
//!
//! ## Example
//!
//! ```ignore
//! use tftp_probe::codec::{RequestPacket, OPCODE_RRQ};
//!
//! let req = RequestPacket::new(OPCODE_RRQ, "file2.txt", "octet")?;
//! let bytes = req.to_bytes();
//! ```

pub mod reply;
pub mod request;

pub use reply::ReplyHeader;
pub use request::RequestPacket;

/// Read request.
pub const OPCODE_RRQ: u16 = 1;
/// Write request.
pub const OPCODE_WRQ: u16 = 2;
pub const OPCODE_DATA: u16 = 3;
pub const OPCODE_ACK: u16 = 4;
pub const OPCODE_ERROR: u16 = 5;

/// Transfer mode the protocol defaults to.
pub const DEFAULT_TRANSFER_MODE: &str = "octet";

/// Largest datagram the protocol ever produces (header + full data block).
pub const PACKET_MAX_SIZE: usize = 1024;

/// Standard name for a TFTP error code, for diagnostic output.
pub fn error_code_name(code: u16) -> &'static str {
    match code {
        0 => "Not defined",
        1 => "File not found",
        2 => "Access violation",
        3 => "Disk full or allocation exceeded",
        4 => "Illegal TFTP operation",
        5 => "Unknown transfer ID",
        6 => "File already exists",
        7 => "No such user",
        _ => "Unknown error code",
    }
}
