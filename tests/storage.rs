//! Integration tests: config persistence as seen through controller
//! bring-up.

use motionlight::config::{Config, MotionSensitivity};
use motionlight::controller::Controller;
use motionlight::fakes::FakeBoard;
use motionlight::storage::{ConfigStore, STORE_VERSION};

fn boot(board: &mut FakeBoard) -> Controller {
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
    controller
}

#[test]
fn blank_eeprom_boots_with_defaults() {
    let mut board = FakeBoard::new();
    let controller = boot(&mut board);
    assert_eq!(controller.config(), &Config::default());
}

#[test]
fn stored_config_is_loaded_at_boot() {
    let mut board = FakeBoard::new();
    let stored = Config {
        motion_timeout_seconds: 90,
        led_duty_cycle: 64,
        motion_sensitivity: MotionSensitivity::One,
        ..Config::default()
    };
    ConfigStore::save(&mut board.eeprom, &stored).unwrap();

    let controller = boot(&mut board);
    assert_eq!(controller.config(), &stored);
    // Loaded settings take effect, not just the record.
    assert_eq!(board.io.motion_sensitivity, Some(MotionSensitivity::One));
}

#[test]
fn corrupted_store_falls_back_to_defaults_at_boot() {
    let mut board = FakeBoard::new();
    let stored = Config {
        led_duty_cycle: 17,
        ..Config::default()
    };
    ConfigStore::save(&mut board.eeprom, &stored).unwrap();
    // Flip one magic byte.
    board.eeprom.bytes[0] ^= 0xFF;

    let controller = boot(&mut board);
    assert_eq!(controller.config(), &Config::default());
}

#[test]
fn layout_version_bump_invalidates_stored_config() {
    let mut board = FakeBoard::new();
    let stored = Config {
        led_duty_cycle: 17,
        ..Config::default()
    };
    ConfigStore::save(&mut board.eeprom, &stored).unwrap();
    board.eeprom.bytes[8] = (STORE_VERSION as u8).wrapping_add(1);

    let controller = boot(&mut board);
    assert_eq!(controller.config(), &Config::default());
}

#[test]
fn save_is_idempotent_across_reboots() {
    let mut board = FakeBoard::new();
    let stored = Config {
        proximity_threshold: 450,
        ..Config::default()
    };
    ConfigStore::save(&mut board.eeprom, &stored).unwrap();

    let first = boot(&mut board);
    ConfigStore::save(&mut board.eeprom, first.config()).unwrap();
    let second = boot(&mut board);
    assert_eq!(second.config(), &stored);
}
