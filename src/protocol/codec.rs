//! Protocol codec
//!
//! Encoding and decoding functions for remote-console frames. Pure and
//! stateless; the stream helpers at the bottom do the frame-at-a-time
//! socket I/O on top of them.

use bytes::{Buf, BufMut, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::{RconError, Result};
use super::{Packet, PacketType};

/// Bytes of the length prefix
const LENGTH_PREFIX_SIZE: usize = 4;

/// Bytes before the body: length prefix + request id + type
const HEADER_SIZE: usize = 12;

/// Smallest declared frame size: id (4) + type (4) + empty body + 2 terminators
pub const MIN_FRAME_SIZE: i32 = 10;

/// Largest declared frame size the client accepts
pub const MAX_FRAME_SIZE: i32 = 4096;

// =============================================================================
// Encoding/Decoding
// =============================================================================

/// Encode a frame
///
/// Format: size (4, LE) + request id (4, LE) + type (4, LE) + body +
/// two null terminators. `size` covers everything after the prefix.
pub fn encode_packet(request_id: i32, packet_type: PacketType, body: &str) -> Vec<u8> {
    let size = (8 + body.len() + 2) as i32;

    let mut frame = BytesMut::with_capacity(LENGTH_PREFIX_SIZE + size as usize);
    frame.put_i32_le(size);
    frame.put_i32_le(request_id);
    frame.put_i32_le(packet_type.code());
    frame.put_slice(body.as_bytes());
    frame.put_u8(0);
    frame.put_u8(0);

    frame.to_vec()
}

/// Decode a frame
///
/// Validates the declared size against `[MIN_FRAME_SIZE, MAX_FRAME_SIZE]`
/// and against the buffer actually supplied. The body is everything between
/// the header and the end of the declared frame, with null bytes (embedded
/// and trailing terminators alike) stripped, decoded as UTF-8 text. The raw
/// type code is preserved as-is.
pub fn decode_packet(bytes: &[u8]) -> Result<Packet> {
    if bytes.len() < LENGTH_PREFIX_SIZE {
        return Err(RconError::Protocol(format!(
            "Incomplete length prefix: expected {} bytes, got {}",
            LENGTH_PREFIX_SIZE,
            bytes.len()
        )));
    }

    let mut buf = bytes;
    let declared = buf.get_i32_le();
    let size = check_frame_size(declared)?;

    if buf.remaining() < size {
        return Err(RconError::Protocol(format!(
            "Incomplete frame: declared {} bytes, got {}",
            size,
            buf.remaining()
        )));
    }

    let request_id = buf.get_i32_le();
    let packet_type = buf.get_i32_le();

    let body_bytes: Vec<u8> = bytes[HEADER_SIZE..LENGTH_PREFIX_SIZE + size]
        .iter()
        .copied()
        .filter(|&b| b != 0)
        .collect();
    let body = String::from_utf8_lossy(&body_bytes).into_owned();

    Ok(Packet {
        request_id,
        packet_type,
        body,
    })
}

/// Validate a declared frame size against protocol bounds
fn check_frame_size(declared: i32) -> Result<usize> {
    if !(MIN_FRAME_SIZE..=MAX_FRAME_SIZE).contains(&declared) {
        return Err(RconError::Protocol(format!(
            "Frame size {} outside valid range [{}, {}]",
            declared, MIN_FRAME_SIZE, MAX_FRAME_SIZE
        )));
    }
    Ok(declared as usize)
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Read exactly one frame from a stream
///
/// Reads the 4-byte length prefix, validates it, then reads the rest of the
/// declared frame. Callers bound the wait with their own deadline.
pub async fn read_packet<R>(reader: &mut R) -> Result<Packet>
where
    R: AsyncRead + Unpin,
{
    let mut prefix = [0u8; LENGTH_PREFIX_SIZE];
    reader.read_exact(&mut prefix).await?;

    let declared = i32::from_le_bytes(prefix);
    let size = check_frame_size(declared)?;

    let mut rest = vec![0u8; size];
    reader.read_exact(&mut rest).await?;

    // Combine and decode
    let mut frame = Vec::with_capacity(LENGTH_PREFIX_SIZE + size);
    frame.extend_from_slice(&prefix);
    frame.extend_from_slice(&rest);

    decode_packet(&frame)
}

/// Write one frame to a stream
pub async fn write_packet<W>(
    writer: &mut W,
    request_id: i32,
    packet_type: PacketType,
    body: &str,
) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let frame = encode_packet(request_id, packet_type, body);
    writer.write_all(&frame).await?;
    writer.flush().await?;
    Ok(())
}
