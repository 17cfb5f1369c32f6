//! Device configuration.
//!
//! All user-tunable parameters for the light. The record is replaced
//! wholesale — never field-merged — whenever a new config arrives over the
//! serial link or is loaded from EEPROM.

use serde::{Deserialize, Serialize};

/// Ambient light brightness sensing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrightnessMode {
    /// Ignore the ambient light level; motion always turns the light on.
    Disabled,
    /// Only turn on when the ambient reading is below the threshold.
    OnWhenBelow,
}

/// Proximity sensing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProximityMode {
    Disabled,
    /// A large proximity delta toggles between Auto and a latched
    /// "Toggled" power mode.
    Toggle,
}

/// PIR sensitivity level, applied as pin bias by the I/O layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionSensitivity {
    One,
    Two,
    Three,
}

/// Core configuration record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Version of this config data. Monotonically non-decreasing across the
    /// lifetime of stored data; a mismatch invalidates stored data.
    pub version: u32,

    pub brightness_mode: BrightnessMode,

    /// Units of 1/4 lux — a value of 120 corresponds to 30 lux.
    pub auto_brightness_threshold: u16,

    pub proximity_mode: ProximityMode,

    /// Turn off the light if it has been on this long in proximity toggle
    /// mode.
    pub proximity_toggle_timeout_seconds: u16,

    /// The proximity reading must change by more than this to toggle.
    pub proximity_threshold: u16,

    /// How long the light stays on after the last detected motion.
    pub motion_timeout_seconds: u16,

    /// PWM duty cycle of the white LED when on (0–255).
    pub led_duty_cycle: u8,

    /// Below this filtered battery voltage the device enters the
    /// low-battery cutoff floor.
    pub low_battery_cutoff_millivolts: u16,

    /// Filtered voltage must exceed this (strictly above the cutoff) to
    /// leave the low-battery state.
    pub low_battery_hysteresis_threshold_millivolts: u16,

    pub motion_sensitivity: MotionSensitivity,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            brightness_mode: BrightnessMode::OnWhenBelow,
            auto_brightness_threshold: 4 * 30,
            proximity_mode: ProximityMode::Disabled,
            proximity_toggle_timeout_seconds: 10 * 60,
            proximity_threshold: 300,
            motion_timeout_seconds: 30,
            led_duty_cycle: 128,
            low_battery_cutoff_millivolts: 3000,
            low_battery_hysteresis_threshold_millivolts: 3300,
            motion_sensitivity: MotionSensitivity::Two,
        }
    }
}
