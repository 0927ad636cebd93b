//! Packet definitions
//!
//! Represents frames exchanged with the remote console.

/// Packet type codes
///
/// The wire format reuses code `2`: outbound it is a COMMAND, inbound it is
/// the server's AUTH_RESPONSE. Decoded packets therefore carry the raw code
/// as it appeared on the wire (see [`Packet::packet_type`]), and
/// [`PacketType::AUTH_RESPONSE`] aliases the COMMAND discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum PacketType {
    ResponseValue = 0,
    Command = 2,
    Auth = 3,
}

impl PacketType {
    /// Inbound alias: the server answers AUTH with this code
    pub const AUTH_RESPONSE: PacketType = PacketType::Command;

    /// Raw wire code
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// A decoded protocol frame
#[derive(Debug, Clone)]
pub struct Packet {
    /// Request id the frame correlates to (`-1` marks failed auth)
    pub request_id: i32,

    /// Raw type code as it appeared on the wire
    pub packet_type: i32,

    /// Body text, null bytes stripped
    pub body: String,
}

impl Packet {
    /// Whether the frame carries the auth reply code
    pub fn is_auth_response(&self) -> bool {
        self.packet_type == PacketType::AUTH_RESPONSE.code()
    }

    /// Whether the frame signals failed authentication
    pub fn is_auth_failure(&self) -> bool {
        self.request_id == -1
    }
}
