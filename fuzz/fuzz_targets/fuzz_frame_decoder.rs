//! Fuzz target: `codec::decode_frame`
//!
//! Drives arbitrary byte sequences into the frame decoder and asserts
//! that it never panics, never yields an empty or oversized payload,
//! and that anything it accepts re-encodes to the same bytes.
//!
//! cargo fuzz run fuzz_frame_decoder

#![no_main]

use libfuzzer_sys::fuzz_target;
use motionlight::link::codec::{self, HEADER_SIZE, MAX_FRAME_SIZE};

fuzz_target!(|data: &[u8]| {
    if let Some(payload) = codec::decode_frame(data) {
        assert!(!payload.is_empty(), "decoder must not yield empty payload");
        assert!(
            payload.len() <= MAX_FRAME_SIZE,
            "payload exceeds MAX_FRAME_SIZE"
        );

        // Anything accepted must re-encode byte for byte.
        let mut frame = [0u8; HEADER_SIZE + MAX_FRAME_SIZE];
        let total = codec::encode_frame(payload, &mut frame).unwrap();
        assert_eq!(&frame[..total], &data[..total]);
    }
});
