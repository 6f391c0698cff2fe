use crate::error::{ProbeError, Result};

/// The leading two 16-bit fields of a reply datagram, interpreted without
/// deeper protocol knowledge. For an ERROR reply `code` is the error code;
/// for DATA or ACK it is the block number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyHeader {
    pub opcode: u16,
    pub code: u16,
    /// Everything past the two header fields, uninterpreted. May be empty.
    pub remainder: Vec<u8>,
}

impl ReplyHeader {
    pub const HEADER_LENGTH: usize = 4;

    pub fn deserialize(buffer: &[u8]) -> Result<Self> {
        if buffer.len() < Self::HEADER_LENGTH {
            return Err(ProbeError::ShortReply { len: buffer.len() });
        }

        Ok(ReplyHeader {
            opcode: u16::from_be_bytes([buffer[0], buffer[1]]),
            code: u16::from_be_bytes([buffer[2], buffer[3]]),
            remainder: buffer[Self::HEADER_LENGTH..].to_vec(),
        })
    }
}
