//! Test doubles for every port trait.
//!
//! All state is plain public fields so tests can arrange inputs and
//! inspect outputs directly; call recording is limited to what the test
//! suites actually assert on (sleep requests, wake sources, EEPROM write
//! order).

use std::collections::VecDeque;

use crate::config::MotionSensitivity;
use crate::pins::Pin;
use crate::ports::{Eeprom, Io, LightSensor, PowerControl, TemperatureSensor, Transport, WakeupMode};

/// Matches the factory calibration constant used by the board-level test
/// jig: divisible by four so `vrefint_cal / 4` reads back exactly 3000 mV.
pub const FAKE_VREFINT_CAL: u16 = 1656;

// ───────────────────────────────────────────────────────────────
// Pin I/O
// ───────────────────────────────────────────────────────────────

/// Pin-state arrays indexed by [`Pin`].
#[derive(Debug, Clone)]
pub struct FakeIo {
    pub digital_in: [bool; Pin::COUNT],
    pub digital_out: [bool; Pin::COUNT],
    pub analog_in: [u16; Pin::COUNT],
    pub analog_out: [u8; Pin::COUNT],
    pub vrefint_cal: u16,
    pub motion_sensitivity: Option<MotionSensitivity>,
}

impl FakeIo {
    pub fn new() -> Self {
        Self {
            digital_in: [false; Pin::COUNT],
            digital_out: [false; Pin::COUNT],
            analog_in: [0; Pin::COUNT],
            analog_out: [0; Pin::COUNT],
            vrefint_cal: FAKE_VREFINT_CAL,
            motion_sensitivity: None,
        }
    }

    pub fn set_digital(&mut self, pin: Pin, high: bool) {
        self.digital_in[pin.index()] = high;
    }

    pub fn set_analog(&mut self, pin: Pin, value: u16) {
        self.analog_in[pin.index()] = value;
    }

    pub fn digital_out(&self, pin: Pin) -> bool {
        self.digital_out[pin.index()]
    }

    pub fn analog_out(&self, pin: Pin) -> u8 {
        self.analog_out[pin.index()]
    }
}

impl Default for FakeIo {
    fn default() -> Self {
        Self::new()
    }
}

impl Io for FakeIo {
    fn digital_read(&mut self, pin: Pin) -> bool {
        self.digital_in[pin.index()]
    }

    fn digital_write(&mut self, pin: Pin, high: bool) {
        self.digital_out[pin.index()] = high;
    }

    fn analog_read(&mut self, pin: Pin) -> u16 {
        self.analog_in[pin.index()]
    }

    fn analog_write(&mut self, pin: Pin, value: u8) {
        self.analog_out[pin.index()] = value;
    }

    fn vrefint_calibration(&self) -> u16 {
        self.vrefint_cal
    }

    fn set_motion_sensitivity(&mut self, sensitivity: MotionSensitivity) {
        self.motion_sensitivity = Some(sensitivity);
    }
}

// ───────────────────────────────────────────────────────────────
// Light / proximity sensor
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct FakeLightSensor {
    pub begin_ok: bool,
    pub begun: bool,
    pub led_current_ma: u8,
    pub periodic_ambient: bool,
    pub periodic_proximity: bool,
    pub ambient: u16,
    pub ambient_ready: bool,
    pub proximity: u16,
    pub proximity_ready: bool,
}

impl FakeLightSensor {
    pub fn new() -> Self {
        Self {
            begin_ok: true,
            begun: false,
            led_current_ma: 0,
            periodic_ambient: false,
            periodic_proximity: false,
            ambient: 0,
            ambient_ready: false,
            proximity: 0,
            proximity_ready: false,
        }
    }

    /// Stage a fresh ambient sample.
    pub fn set_ambient(&mut self, value: u16) {
        self.ambient = value;
        self.ambient_ready = true;
    }

    /// Stage a fresh proximity sample.
    pub fn set_proximity(&mut self, value: u16) {
        self.proximity = value;
        self.proximity_ready = true;
    }
}

impl Default for FakeLightSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl LightSensor for FakeLightSensor {
    fn begin(&mut self) -> bool {
        self.begun = self.begin_ok;
        self.begin_ok
    }

    fn set_led_current(&mut self, milliamps: u8) {
        self.led_current_ma = milliamps.min(200) / 10 * 10;
    }

    fn set_periodic_ambient(&mut self, enable: bool) {
        self.periodic_ambient = enable;
    }

    fn ambient_ready(&mut self) -> bool {
        self.ambient_ready
    }

    fn read_ambient(&mut self) -> u16 {
        self.ambient_ready = false;
        self.ambient
    }

    fn set_periodic_proximity(&mut self, enable: bool) {
        self.periodic_proximity = enable;
    }

    fn proximity_ready(&mut self) -> bool {
        self.proximity_ready
    }

    fn read_proximity(&mut self) -> u16 {
        self.proximity_ready = false;
        self.proximity
    }
}

// ───────────────────────────────────────────────────────────────
// Power control
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct FakePowerControl {
    pub begin_ok: bool,
    pub begun: bool,
    pub wakeups: Vec<(Pin, WakeupMode)>,
    pub sleep_requests: Vec<u32>,
    pub stopped: bool,
}

impl FakePowerControl {
    pub fn new() -> Self {
        Self {
            begin_ok: true,
            ..Self::default()
        }
    }

    pub fn total_sleep_ms(&self) -> u64 {
        self.sleep_requests.iter().map(|&ms| u64::from(ms)).sum()
    }
}

impl PowerControl for FakePowerControl {
    fn begin(&mut self) -> bool {
        self.begun = self.begin_ok;
        self.begin_ok
    }

    fn attach_interrupt_wakeup(&mut self, pin: Pin, mode: WakeupMode) {
        self.wakeups.push((pin, mode));
    }

    fn sleep(&mut self, duration_ms: u32) {
        self.sleep_requests.push(duration_ms);
    }

    fn stop(&mut self) {
        self.stopped = true;
    }
}

// ───────────────────────────────────────────────────────────────
// Temperature
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct FakeTemperatureSensor {
    pub celsius: i16,
}

impl FakeTemperatureSensor {
    pub fn new(celsius: i16) -> Self {
        Self { celsius }
    }
}

impl TemperatureSensor for FakeTemperatureSensor {
    fn read_celsius(&mut self) -> i16 {
        self.celsius
    }
}

// ───────────────────────────────────────────────────────────────
// Serial transport
// ───────────────────────────────────────────────────────────────

/// Loopback byte queues: `rx` is what the device will read, `tx` collects
/// what it writes.
#[derive(Debug, Clone, Default)]
pub struct FakeTransport {
    pub rx: VecDeque<u8>,
    pub tx: Vec<u8>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue bytes for the device to receive.
    pub fn push_rx(&mut self, data: &[u8]) {
        self.rx.extend(data.iter().copied());
    }

    /// Drain everything the device has sent.
    pub fn take_tx(&mut self) -> Vec<u8> {
        core::mem::take(&mut self.tx)
    }
}

impl Transport for FakeTransport {
    fn available(&mut self) -> bool {
        !self.rx.is_empty()
    }

    fn read(&mut self, buf: &mut [u8]) -> usize {
        let mut count = 0;
        while count < buf.len() {
            match self.rx.pop_front() {
                Some(byte) => {
                    buf[count] = byte;
                    count += 1;
                }
                None => break,
            }
        }
        count
    }

    fn write(&mut self, data: &[u8]) -> usize {
        self.tx.extend_from_slice(data);
        data.len()
    }
}

// ───────────────────────────────────────────────────────────────
// EEPROM
// ───────────────────────────────────────────────────────────────

/// In-memory byte store that logs every write, letting tests replay an
/// interrupted save byte by byte.
#[derive(Debug, Clone)]
pub struct FakeEeprom {
    pub bytes: Vec<u8>,
    pub write_log: Vec<(usize, u8)>,
}

impl FakeEeprom {
    pub fn new(capacity: usize) -> Self {
        Self {
            bytes: vec![0; capacity],
            write_log: Vec::new(),
        }
    }
}

impl Eeprom for FakeEeprom {
    fn capacity(&self) -> usize {
        self.bytes.len()
    }

    fn read_byte(&self, offset: usize) -> u8 {
        self.bytes[offset]
    }

    fn write_byte(&mut self, offset: usize, value: u8) {
        self.bytes[offset] = value;
        self.write_log.push((offset, value));
    }
}

/// The full hardware complement, bundled for integration tests.
pub struct FakeBoard {
    pub io: FakeIo,
    pub sensor: FakeLightSensor,
    pub power: FakePowerControl,
    pub temperature: FakeTemperatureSensor,
    pub transport: FakeTransport,
    pub eeprom: FakeEeprom,
}

impl FakeBoard {
    pub fn new() -> Self {
        let mut io = FakeIo::new();
        // Inverted inputs idle high: switch in Off, charger lines inactive.
        io.set_digital(Pin::PowerAuto, true);
        io.set_digital(Pin::PowerOn, true);
        io.set_digital(Pin::BatteryCharge, true);
        io.set_digital(Pin::BatteryDone, true);
        // vrefint_cal / 4 counts reads back as exactly 3000 mV.
        io.set_analog(Pin::AdcReference, FAKE_VREFINT_CAL / 4);

        Self {
            io,
            sensor: FakeLightSensor::new(),
            power: FakePowerControl::new(),
            temperature: FakeTemperatureSensor::new(21),
            transport: FakeTransport::new(),
            eeprom: FakeEeprom::new(2048),
        }
    }
}

impl Default for FakeBoard {
    fn default() -> Self {
        Self::new()
    }
}
