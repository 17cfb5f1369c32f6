//! Fixed pin roles on the light's main board.
//!
//! The core never addresses raw pin numbers; the [`Io`](crate::ports::Io)
//! implementation maps each role to its physical pin (PA0/PA1 for the CC
//! lines, PA15 for the white LED, and so on).

/// Every pin role the controller reads or drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Pin {
    /// CC1 USB Type-C sense line (analog in).
    Cc1 = 0,
    /// CC2 USB Type-C sense line (analog in).
    Cc2 = 1,
    /// Power switch "auto" position (digital in, inverted).
    PowerAuto = 2,
    /// Power switch "on" position (digital in, inverted).
    PowerOn = 3,
    /// PIR motion sensor output (digital in).
    MotionSensor = 4,
    /// Charger "charging" indicator (digital in, active low).
    BatteryCharge = 5,
    /// Charger "done" indicator (digital in, active low).
    BatteryDone = 6,
    /// Internal ADC voltage reference (analog in).
    AdcReference = 7,
    /// White LED PWM output.
    WhiteLed = 8,
    /// Battery level LED 1 (PWM out).
    BatteryLed1 = 9,
    /// Battery level LED 2 (PWM out).
    BatteryLed2 = 10,
    /// Battery level LED 3 (digital out).
    BatteryLed3 = 11,
    /// Enables the high-current USB charge path (digital out).
    ChargeHighCurrentEnable = 12,
}

impl Pin {
    /// Number of pin roles — sizes the fake I/O state arrays.
    pub const COUNT: usize = 13;

    pub const fn index(self) -> usize {
        self as usize
    }
}
