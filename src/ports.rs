//! Port traits — the boundary between the control core and hardware.
//!
//! ```text
//!   hardware adapter ──▶ port trait ──▶ Controller / SerialLink (domain)
//! ```
//!
//! The controller consumes these via generics, so the core never touches a
//! register. Hardware-backed implementations live in the firmware image;
//! [`fakes`](crate::fakes) provides host-side doubles for every trait.
//!
//! Failure model: `begin()` returning false is fatal at init. Everything
//! else is best-effort and infallible from the core's perspective — a
//! missing sample simply leaves the previous value in place.

use crate::config::MotionSensitivity;
use crate::pins::Pin;

// ───────────────────────────────────────────────────────────────
// Raw pin I/O
// ───────────────────────────────────────────────────────────────

/// Digital/analog pin access, by role.
///
/// Implementations may panic on a pin used against its direction (an
/// out-of-range or misused pin is a firmware bug, not a runtime
/// condition).
pub trait Io {
    fn digital_read(&mut self, pin: Pin) -> bool;
    fn digital_write(&mut self, pin: Pin, high: bool);
    /// 10-bit ADC count (0–1023 with the configured resolution).
    fn analog_read(&mut self, pin: Pin) -> u16;
    /// 8-bit PWM duty.
    fn analog_write(&mut self, pin: Pin, value: u8);

    /// Factory-calibrated raw reading of the internal voltage reference,
    /// burned into system flash at 3.0 V / 12-bit.
    fn vrefint_calibration(&self) -> u16;

    /// Apply the PIR sensitivity level as pin bias configuration.
    fn set_motion_sensitivity(&mut self, sensitivity: MotionSensitivity);
}

// ───────────────────────────────────────────────────────────────
// Ambient light / proximity sensor
// ───────────────────────────────────────────────────────────────

/// Combined ambient-light and proximity sensor (VCNL40x0 family).
pub trait LightSensor {
    /// Initialise the sensor. False is fatal at bring-up.
    fn begin(&mut self) -> bool;

    /// Proximity emitter current in milliamps, 10 mA precision, capped at
    /// 200 mA by the implementation.
    fn set_led_current(&mut self, milliamps: u8);

    /// Enable or disable periodic ambient-light sampling.
    fn set_periodic_ambient(&mut self, enable: bool);
    /// True once a fresh ambient sample is available.
    fn ambient_ready(&mut self) -> bool;
    /// Read the latest ambient sample (1/4-lux units); clears the ready
    /// flag.
    fn read_ambient(&mut self) -> u16;

    /// Enable or disable periodic proximity sampling.
    fn set_periodic_proximity(&mut self, enable: bool);
    /// True once a fresh proximity sample is available.
    fn proximity_ready(&mut self) -> bool;
    /// Read the latest proximity sample; clears the ready flag.
    fn read_proximity(&mut self) -> u16;
}

// ───────────────────────────────────────────────────────────────
// Low-power / wakeup control
// ───────────────────────────────────────────────────────────────

/// Edge selection for a wake-on-interrupt source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WakeupMode {
    Rising,
    Falling,
    AnyEdge,
}

/// MCU low-power controller.
///
/// `sleep` may block the whole device for up to the requested interval;
/// wake interrupts only cause it to return early and never mutate core
/// state directly.
pub trait PowerControl {
    /// Initialise the low-power subsystem. False is fatal at bring-up.
    fn begin(&mut self) -> bool;

    /// Arm `pin` as a wake-from-sleep interrupt source.
    fn attach_interrupt_wakeup(&mut self, pin: Pin, mode: WakeupMode);

    /// Enter low-power sleep for up to `duration_ms`.
    fn sleep(&mut self, duration_ms: u32);

    /// Enter the deep halt state. Only a charger attach or reset leaves
    /// it; used as the low-battery floor.
    fn stop(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Temperature sensor
// ───────────────────────────────────────────────────────────────

/// MCU temperature, reported in the serial status block.
pub trait TemperatureSensor {
    fn read_celsius(&mut self) -> i16;
}

// ───────────────────────────────────────────────────────────────
// Serial transport
// ───────────────────────────────────────────────────────────────

/// Byte-oriented point-to-point transport for the config/status link.
///
/// Framing above this is the link's concern; buffering below it is the
/// transport's. A short read of a partial frame is dropped by the link,
/// not reassembled.
pub trait Transport {
    /// True if at least one byte is buffered for reading.
    fn available(&mut self) -> bool;
    /// Read up to `buf.len()` bytes; returns the count actually read.
    fn read(&mut self, buf: &mut [u8]) -> usize;
    /// Write `data`; returns the count actually written.
    fn write(&mut self, data: &[u8]) -> usize;
}

// ───────────────────────────────────────────────────────────────
// Persistent byte store
// ───────────────────────────────────────────────────────────────

/// Fixed-capacity persistent byte store (EEPROM or emulated flash).
///
/// Single-byte writes are durable individually; there is no transaction
/// support. [`ConfigStore`](crate::storage::ConfigStore) builds its
/// commit-marker scheme on top of that.
pub trait Eeprom {
    fn capacity(&self) -> usize;
    fn read_byte(&self, offset: usize) -> u8;
    fn write_byte(&mut self, offset: usize, value: u8);
}
