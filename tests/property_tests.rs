//! Property tests for the ramper, the frame codec, the config store and
//! controller invariants under random inputs.

use proptest::prelude::*;

use motionlight::config::{BrightnessMode, Config, MotionSensitivity, ProximityMode};
use motionlight::controller::{Controller, PowerMode, PowerStatus, UsbStatus};
use motionlight::fakes::{FakeBoard, FakeEeprom};
use motionlight::link::codec;
use motionlight::pins::Pin;
use motionlight::ramper::Ramper;
use motionlight::storage::ConfigStore;

fn arb_config() -> impl Strategy<Value = Config> {
    (
        any::<u16>(),
        prop_oneof![
            Just(BrightnessMode::Disabled),
            Just(BrightnessMode::OnWhenBelow)
        ],
        prop_oneof![Just(ProximityMode::Disabled), Just(ProximityMode::Toggle)],
        1u16..=7200,
        any::<u16>(),
        1u16..=7200,
        1u8..,
        prop_oneof![
            Just(MotionSensitivity::One),
            Just(MotionSensitivity::Two),
            Just(MotionSensitivity::Three)
        ],
    )
        .prop_map(
            |(
                threshold,
                brightness_mode,
                proximity_mode,
                toggle_timeout,
                proximity_threshold,
                motion_timeout,
                duty,
                sensitivity,
            )| {
                Config {
                    auto_brightness_threshold: threshold,
                    brightness_mode,
                    proximity_mode,
                    proximity_toggle_timeout_seconds: toggle_timeout,
                    proximity_threshold,
                    motion_timeout_seconds: motion_timeout,
                    led_duty_cycle: duty,
                    motion_sensitivity: sensitivity,
                    ..Config::default()
                }
            },
        )
}

proptest! {
    /// The ramper's actual value never overshoots its target and never
    /// moves away from it, whatever the step spacing.
    #[test]
    fn ramper_never_overshoots(
        target in -255i16..=255,
        up_rate in 1i16..=16,
        up_period in 1u32..=20,
        down_rate in 1i16..=16,
        down_period in 1u32..=20,
        deltas in prop::collection::vec(1u32..=50, 1..200),
    ) {
        let mut ramper = Ramper::new();
        ramper.set_max_increase(up_rate, up_period);
        ramper.set_max_decrease(down_rate, down_period);
        ramper.set_target(target);

        let mut now = 0u32;
        let mut previous = ramper.actual();
        for delta in deltas {
            now = now.wrapping_add(delta);
            ramper.step(now);
            let actual = ramper.actual();
            if target >= previous {
                prop_assert!(actual >= previous, "moved away from target");
                prop_assert!(actual <= target, "overshot rising");
            } else {
                prop_assert!(actual <= previous, "moved away from target");
                prop_assert!(actual >= target, "overshot falling");
            }
            previous = actual;
        }
    }

    /// Whatever payload goes into a frame comes back out of it.
    #[test]
    fn frame_roundtrip(payload in prop::collection::vec(any::<u8>(), 1..codec::MAX_FRAME_SIZE)) {
        let mut frame = [0u8; codec::HEADER_SIZE + codec::MAX_FRAME_SIZE];
        let total = codec::encode_frame(&payload, &mut frame).unwrap();
        prop_assert_eq!(total, codec::HEADER_SIZE + payload.len());
        let decoded = codec::decode_frame(&frame[..total]).unwrap();
        prop_assert_eq!(decoded, payload.as_slice());
    }

    /// The frame decoder never panics on arbitrary bytes.
    #[test]
    fn frame_decoder_total(bytes in prop::collection::vec(any::<u8>(), 0..600)) {
        let _ = codec::decode_frame(&bytes);
    }

    /// Any config survives a save/load cycle through the store.
    #[test]
    fn config_store_roundtrip(config in arb_config()) {
        let mut eeprom = FakeEeprom::new(2048);
        ConfigStore::save(&mut eeprom, &config).unwrap();
        prop_assert_eq!(ConfigStore::try_load(&eeprom).unwrap(), config);
    }

    /// The store never panics on arbitrary stored bytes; it either loads
    /// a config or reports an error.
    #[test]
    fn config_store_total(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let mut eeprom = FakeEeprom::new(bytes.len());
        for (offset, byte) in bytes.iter().enumerate() {
            eeprom.bytes[offset] = *byte;
        }
        let _ = ConfigStore::try_load(&eeprom);
    }

    /// Controller invariants that must hold under any input sequence:
    /// the high-current charge line tracks the USB class, Toggled never
    /// appears with proximity toggling disabled, and the white LED is
    /// dark whenever the hard low-battery floor is active.
    #[test]
    fn controller_invariants_under_random_inputs(
        inputs in prop::collection::vec(
            (
                any::<bool>(),  // power-auto line
                any::<bool>(),  // power-on line
                any::<bool>(),  // motion line
                any::<bool>(),  // charge line
                any::<bool>(),  // done line
                0u16..=1023,    // cc1 counts
                200u16..=900,   // adc reference counts
                1u32..=2000,    // time delta
            ),
            1..100,
        ),
    ) {
        let mut board = FakeBoard::new();
        let mut controller = Controller::new();
        controller
            .init(0, &mut board.io, &mut board.sensor, &mut board.power, &board.eeprom)
            .unwrap();

        let mut now = 0u32;
        for (auto, on, motion, charge, done, cc1, reference, delta) in inputs {
            board.io.set_digital(Pin::PowerAuto, !auto);
            board.io.set_digital(Pin::PowerOn, !on);
            board.io.set_digital(Pin::MotionSensor, motion);
            board.io.set_digital(Pin::BatteryCharge, !charge);
            board.io.set_digital(Pin::BatteryDone, !done);
            board.io.set_analog(Pin::Cc1, cc1);
            board.io.set_analog(Pin::AdcReference, reference);
            now = now.wrapping_add(delta);
            controller.step(now, &mut board.io, &mut board.sensor, &mut board.power);

            let high_current = board.io.digital_out(Pin::ChargeHighCurrentEnable);
            let usb = controller.usb_status();
            prop_assert_eq!(
                high_current,
                usb == UsbStatus::Usb1A5 || usb == UsbStatus::Usb3A0
            );
            prop_assert_ne!(controller.power_mode(), PowerMode::Toggled);
            if controller.power_status() == PowerStatus::LowBatteryCutoff {
                prop_assert_eq!(board.io.analog_out(Pin::WhiteLed), 0);
                prop_assert_eq!(controller.led_actual(), 0);
            }
            prop_assert!((0..=255).contains(&controller.led_actual()));
        }
    }
}
