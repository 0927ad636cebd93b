//! Protocol Module
//!
//! Defines the wire protocol spoken with the game server's remote console.
//!
//! ## Frame Format (little-endian throughout)
//!
//! ```text
//! ┌───────────┬───────────┬───────────┬──────────┬──────┬──────┐
//! │ Size (4)  │ ReqId (4) │ Type (4)  │   Body   │ 0x00 │ 0x00 │
//! └───────────┴───────────┴───────────┴──────────┴──────┴──────┘
//! ```
//!
//! `Size` covers request id + type + body + the two mandatory null
//! terminators, i.e. `8 + body_len + 2`.
//!
//! ### Type Codes
//! - 3: AUTH          - outbound, carries the password
//! - 2: COMMAND       - outbound, carries a console command
//! - 2: AUTH_RESPONSE - inbound, the server's answer to AUTH
//! - 0: RESPONSE_VALUE - inbound, a command's result text
//!
//! Code `2` is genuinely reused by the wire format for both an outgoing
//! COMMAND and an incoming AUTH_RESPONSE. A response with request id `-1`
//! signals failed authentication regardless of its type code.

mod packet;
mod codec;

pub use packet::{Packet, PacketType};
pub use codec::{
    decode_packet, encode_packet, read_packet, write_packet, MAX_FRAME_SIZE, MIN_FRAME_SIZE,
};
