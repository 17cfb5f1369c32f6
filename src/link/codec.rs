//! Length-prefix frame codec for the serial link.
//!
//! Wire format:
//! ```text
//! ┌────────────┬──────────────────────────┐
//! │ Length (4B)│ postcard payload (N B)   │
//! │ LE u32     │                          │
//! └────────────┴──────────────────────────┘
//! ```
//!
//! The link consumes exactly one frame per poll and keeps no framing
//! state between polls; a short or oversized frame is dropped, not
//! reassembled. Buffering across polls is the transport's concern.

/// Maximum frame payload size. Requests and responses are small, fixed
/// records; anything larger is garbage.
pub const MAX_FRAME_SIZE: usize = 512;

/// Frame header size (4-byte little-endian length).
pub const HEADER_SIZE: usize = 4;

/// Encode `payload` into `out_buf` as `[LE-u32 length][payload]`.
///
/// Returns the total number of bytes written, or `None` if the payload is
/// oversized or `out_buf` is too small.
pub fn encode_frame(payload: &[u8], out_buf: &mut [u8]) -> Option<usize> {
    let total = HEADER_SIZE + payload.len();
    if total > out_buf.len() || payload.len() > MAX_FRAME_SIZE {
        return None;
    }

    out_buf[..HEADER_SIZE].copy_from_slice(&(payload.len() as u32).to_le_bytes());
    out_buf[HEADER_SIZE..total].copy_from_slice(payload);
    Some(total)
}

/// Extract one frame payload from `buf`.
///
/// Returns `None` when the header is incomplete, the advertised length is
/// zero or oversized, or the payload has not fully arrived.
pub fn decode_frame(buf: &[u8]) -> Option<&[u8]> {
    if buf.len() < HEADER_SIZE {
        return None;
    }
    let mut header = [0u8; HEADER_SIZE];
    header.copy_from_slice(&buf[..HEADER_SIZE]);
    let len = u32::from_le_bytes(header) as usize;

    if len == 0 || len > MAX_FRAME_SIZE || buf.len() < HEADER_SIZE + len {
        return None;
    }
    Some(&buf[HEADER_SIZE..HEADER_SIZE + len])
}
