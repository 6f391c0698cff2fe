use crate::error::{ProbeError, Result};
use std::io::Write;

/* Request frame layout

2 bytes     string    1 byte   string    1 byte
------------------------------------------------
| Opcode |  Filename  |  0  |   Mode    |   0  |
------------------------------------------------
*/

/// An RRQ/WRQ request frame. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestPacket {
    opcode: u16,
    filename: String,
    mode: String,
}

impl RequestPacket {
    /// Builds a request, rejecting filename or mode strings that contain an
    /// embedded NUL byte. A NUL inside either string would be read as the
    /// field terminator on the wire and silently shift the frame boundary.
    pub fn new(opcode: u16, filename: &str, mode: &str) -> Result<Self> {
        if filename.as_bytes().contains(&0x00) {
            return Err(ProbeError::EmbeddedNul { field: "filename" });
        }
        if mode.as_bytes().contains(&0x00) {
            return Err(ProbeError::EmbeddedNul { field: "mode" });
        }
        Ok(RequestPacket {
            opcode,
            filename: filename.to_string(),
            mode: mode.to_string(),
        })
    }

    pub fn opcode(&self) -> u16 {
        self.opcode
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// Encoded length: opcode (2) + filename + NUL + mode + NUL.
    pub fn encoded_len(&self) -> usize {
        2 + self.filename.len() + 1 + self.mode.len() + 1
    }

    pub fn serialize<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.opcode.to_be_bytes())?;
        writer.write_all(self.filename.as_bytes())?;
        writer.write_all(&[0x00])?;
        writer.write_all(self.mode.as_bytes())?;
        writer.write_all(&[0x00])?;
        Ok(())
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        // Writing to a Vec cannot fail.
        self.serialize(&mut buf).unwrap();
        buf
    }

    /// Structural re-parse of an encoded request frame.
    pub fn deserialize(buffer: &[u8]) -> Result<Self> {
        if buffer.len() < 2 {
            return Err(ProbeError::MalformedRequest("truncated opcode"));
        }
        let opcode = u16::from_be_bytes([buffer[0], buffer[1]]);

        let rest = &buffer[2..];
        let (filename, rest) = take_string(rest, "filename missing NUL terminator")?;
        let (mode, _) = take_string(rest, "mode missing NUL terminator")?;

        Ok(RequestPacket {
            opcode,
            filename,
            mode,
        })
    }
}

fn take_string<'a>(buffer: &'a [u8], missing: &'static str) -> Result<(String, &'a [u8])> {
    let nul = buffer
        .iter()
        .position(|&b| b == 0x00)
        .ok_or(ProbeError::MalformedRequest(missing))?;
    let s = std::str::from_utf8(&buffer[..nul])
        .map_err(|_| ProbeError::MalformedRequest("string field is not valid UTF-8"))?;
    Ok((s.to_string(), &buffer[nul + 1..]))
}
