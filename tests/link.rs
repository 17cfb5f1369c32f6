//! Integration tests: serial request/response handling end to end.

use motionlight::FIRMWARE_VERSION;
use motionlight::config::Config;
use motionlight::controller::Controller;
use motionlight::fakes::FakeBoard;
use motionlight::link::codec;
use motionlight::link::messages::{Request, Response};
use motionlight::link::SerialLink;
use motionlight::storage::ConfigStore;

fn init_board() -> (FakeBoard, Controller, SerialLink) {
    let mut board = FakeBoard::new();
    let mut controller = Controller::new();
    controller
        .init(
            0,
            &mut board.io,
            &mut board.sensor,
            &mut board.power,
            &board.eeprom,
        )
        .unwrap();
    (board, controller, SerialLink::new())
}

fn push_request(board: &mut FakeBoard, request: &Request) {
    let mut payload = [0u8; codec::MAX_FRAME_SIZE];
    let encoded = postcard::to_slice(request, &mut payload).unwrap();
    let mut frame = [0u8; codec::HEADER_SIZE + codec::MAX_FRAME_SIZE];
    let total = codec::encode_frame(encoded, &mut frame).unwrap();
    board.transport.push_rx(&frame[..total]);
}

fn poll(board: &mut FakeBoard, controller: &mut Controller, link: &mut SerialLink) {
    let FakeBoard {
        io,
        sensor,
        power: _,
        temperature,
        transport,
        eeprom,
    } = board;
    link.step(transport, controller, io, sensor, temperature, eeprom);
}

fn pop_response(board: &mut FakeBoard) -> Response {
    let tx = board.transport.take_tx();
    assert!(!tx.is_empty(), "a response frame must be written");
    let payload = codec::decode_frame(&tx).expect("response must be a valid frame");
    postcard::from_bytes(payload).expect("response payload must decode")
}

#[test]
fn idle_transport_produces_no_response() {
    let (mut board, mut controller, mut link) = init_board();
    poll(&mut board, &mut controller, &mut link);
    assert!(board.transport.take_tx().is_empty());
}

#[test]
fn bare_poll_gets_a_status_snapshot() {
    let (mut board, mut controller, mut link) = init_board();
    board.sensor.set_proximity(77);
    board.sensor.set_ambient(140);

    push_request(&mut board, &Request::default());
    poll(&mut board, &mut controller, &mut link);

    let response = pop_response(&mut board);
    assert!(response.config.is_none(), "config only comes when asked for");
    let status = response.status.expect("status always present");
    assert_eq!(status.battery_voltage_millivolts, Some(3000));
    assert_eq!(
        status.firmware_version.as_deref(),
        Some(FIRMWARE_VERSION)
    );
    assert_eq!(status.proximity_value, Some(77));
    assert_eq!(status.ambient_light_value, Some(140));
    assert_eq!(status.temperature_celsius, Some(21));
}

#[test]
fn request_config_echoes_the_active_config() {
    let (mut board, mut controller, mut link) = init_board();

    push_request(
        &mut board,
        &Request {
            config: None,
            request_config: true,
        },
    );
    poll(&mut board, &mut controller, &mut link);

    let response = pop_response(&mut board);
    assert_eq!(response.config.as_ref(), Some(controller.config()));
}

#[test]
fn new_config_is_applied_and_persisted() {
    let (mut board, mut controller, mut link) = init_board();

    let new_config = Config {
        led_duty_cycle: 200,
        motion_timeout_seconds: 120,
        ..Config::default()
    };
    push_request(
        &mut board,
        &Request {
            config: Some(new_config.clone()),
            request_config: true,
        },
    );
    poll(&mut board, &mut controller, &mut link);

    assert_eq!(controller.config(), &new_config);
    // The echo reflects the applied config, not the default.
    let response = pop_response(&mut board);
    assert_eq!(response.config, Some(new_config.clone()));
    // And it survives a reload from the store.
    assert_eq!(ConfigStore::try_load(&board.eeprom).unwrap(), new_config);
}

#[test]
fn persisted_config_is_picked_up_by_a_fresh_controller() {
    let (mut board, mut controller, mut link) = init_board();

    let new_config = Config {
        auto_brightness_threshold: 42,
        ..Config::default()
    };
    push_request(
        &mut board,
        &Request {
            config: Some(new_config.clone()),
            request_config: false,
        },
    );
    poll(&mut board, &mut controller, &mut link);
    board.transport.take_tx();

    let mut rebooted = Controller::new();
    rebooted
        .init(
            0,
            &mut board.io,
            &mut board.sensor,
            &mut board.power,
            &board.eeprom,
        )
        .unwrap();
    assert_eq!(rebooted.config(), &new_config);
}

#[test]
fn malformed_frame_still_gets_a_status_answer() {
    let (mut board, mut controller, mut link) = init_board();
    let before = controller.config().clone();

    board.transport.push_rx(&[0xFF, 0xFF, 0x00]);
    poll(&mut board, &mut controller, &mut link);

    let response = pop_response(&mut board);
    assert!(response.config.is_none());
    assert!(response.status.is_some());
    assert_eq!(controller.config(), &before, "garbage must not touch config");
}

#[test]
fn garbage_payload_inside_a_valid_frame_is_dropped() {
    let (mut board, mut controller, mut link) = init_board();

    // A well-formed frame whose payload is not a valid request.
    let payload = [0xFF; 24];
    let mut frame = [0u8; codec::HEADER_SIZE + 24];
    let total = codec::encode_frame(&payload, &mut frame).unwrap();
    board.transport.push_rx(&frame[..total]);
    poll(&mut board, &mut controller, &mut link);

    let response = pop_response(&mut board);
    assert!(response.config.is_none());
    assert!(response.status.is_some());
}
