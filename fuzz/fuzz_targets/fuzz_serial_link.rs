//! Fuzz target: `SerialLink::step`
//!
//! Feeds arbitrary bytes to the serial link and asserts the invariant
//! the host relies on: any non-empty input produces exactly one
//! well-formed response frame carrying a status snapshot.
//!
//! cargo fuzz run fuzz_serial_link

#![no_main]

use libfuzzer_sys::fuzz_target;
use motionlight::controller::Controller;
use motionlight::fakes::FakeBoard;
use motionlight::link::codec;
use motionlight::link::messages::Response;
use motionlight::link::SerialLink;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut board = FakeBoard::new();
    let mut controller = Controller::new();
    controller
        .init(0, &mut board.io, &mut board.sensor, &mut board.power, &board.eeprom)
        .unwrap();
    let mut link = SerialLink::new();

    board.transport.push_rx(data);
    link.step(
        &mut board.transport,
        &mut controller,
        &mut board.io,
        &mut board.sensor,
        &mut board.temperature,
        &mut board.eeprom,
    );

    let tx = board.transport.take_tx();
    assert!(!tx.is_empty(), "every request gets an answer");
    let payload = codec::decode_frame(&tx).expect("response frame must decode");
    let response: Response = postcard::from_bytes(payload).expect("response must deserialize");
    assert!(response.status.is_some());
});
