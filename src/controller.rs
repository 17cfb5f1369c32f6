//! The central control state machine.
//!
//! `Controller::step` runs once per outer-loop iteration and, in order:
//! filters the battery voltage, debounces the power-mode switch, handles
//! proximity toggling, classifies the USB supply, derives the power
//! status with low-battery hysteresis, decides the LED target, renders
//! the battery LEDs, steps the ramper, and finally decides whether the
//! device may sleep.
//!
//! The controller owns all per-instance state (timers, filters, ramper,
//! config, mode/status enums). Hardware is injected per call through the
//! port traits, so exactly one `step` mutates the state at a time and the
//! whole machine runs host-side in tests.

use log::{info, warn};

use crate::clock::{CountDownTimer, CountUpTimer};
use crate::config::{BrightnessMode, Config, ProximityMode};
use crate::error::Error;
use crate::filters::{EmaFilter, MedianFilter};
use crate::pins::Pin;
use crate::ports::{Eeprom, Io, LightSensor, PowerControl, WakeupMode};
use crate::ramper::Ramper;
use crate::storage::ConfigStore;

// ---------------------------------------------------------------------------
// Derived state enums
// ---------------------------------------------------------------------------

/// Operating mode, derived from the slide switch plus proximity toggling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerMode {
    Off,
    Auto,
    On,
    /// Latched on from Auto by a proximity-delta event; leaves via another
    /// delta, the toggle timeout, or the switch moving away from Auto.
    Toggled,
}

/// Charging/battery condition, re-derived every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerStatus {
    Battery,
    Charging,
    Charged,
    ChargeError,
    LowBatteryCutoff,
    LowBatteryCutoffCharging,
}

/// Classified USB supply, from the higher CC sense-line voltage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsbStatus {
    NoConnection,
    StandardUsb,
    Usb1A5,
    Usb3A0,
}

// ---------------------------------------------------------------------------
// Tuning constants
// ---------------------------------------------------------------------------

/// Switch reads must be stable this long before a new mode applies.
pub const DEBOUNCE_MS: u32 = 10;

/// Battery median filter window (odd).
pub const BATTERY_MEDIAN_WINDOW: usize = 5;
/// Minimum interval between battery filter samples.
pub const BATTERY_FILTER_RUN_INTERVAL_MS: u32 = 100;
/// EMA weight, in 1/256 units.
pub const BATTERY_FILTER_ALPHA: u8 = 64;

/// ADC reference supply used for the factory calibration value.
pub const REFERENCE_SUPPLY_MILLIVOLTS: u32 = 3000;
/// Full 12-bit ADC range the calibration value was taken at.
pub const ADC_MAX_COUNT: u32 = 4096;
/// Resolution the ADC is actually configured for.
pub const ADC_CONFIGURED_MAX_COUNT: u32 = 1024;

/// CC-line classification thresholds, in millivolts.
pub const USB_STANDARD_MIN_MILLIVOLTS: u32 = 200;
pub const USB_1A5_MIN_MILLIVOLTS: u32 = 660;
pub const USB_3A0_MIN_MILLIVOLTS: u32 = 1230;

/// Battery display window after a mode change.
pub const BATTERY_LEVEL_DISPLAY_TIME_SECONDS: u32 = 10;
/// Two-level display thresholds.
pub const BATTERY_VOLTAGE_0: i32 = 3500;
pub const BATTERY_VOLTAGE_1: i32 = 3800;
/// Brightness for a level the battery has dropped below.
pub const BATTERY_LED_DIM_BRIGHTNESS: u8 = 16;

const SLOW_BLINK_PERIOD_MS: u32 = 1000;
const FAST_BLINK_PERIOD_MS: u32 = 200;

/// White LED ramp times; per-step rates are re-derived from these and the
/// configured duty cycle on every config apply.
pub const RAMP_UP_TIME_MS: u32 = 500;
pub const RAMP_DOWN_TIME_MS: u32 = 1000;

/// Motion reads are suppressed this long after the white LED changes, so
/// the PIR does not retrigger on the light's own thermal signature.
const LED_CHANGE_MOTION_IGNORE_MS: u32 = 2000;
/// Ambient readings are trusted again this long after the LED turns on.
const AMBIENT_IGNORE_MS: u32 = 2000;
/// Proximity sampling window opened by a motion edge.
const MOTION_PROXIMITY_WINDOW_MS: u32 = 10_000;

/// One sleep request.
const SLEEP_INTERVAL_MS: u32 = 500;
/// Stay-awake window after any mode change.
const SLEEP_LOCKOUT_MS: u32 = 1000;

/// Proximity emitter current (mA).
const SENSOR_LED_CURRENT_MA: u8 = 200;

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

pub struct Controller {
    power_mode: PowerMode,
    power_status: PowerStatus,
    usb_status: UsbStatus,
    previous_usb_status: UsbStatus,

    debounce_timer: CountDownTimer,
    sleep_lockout_timer: CountDownTimer,
    motion_timer: CountUpTimer,
    battery_display_timer: CountDownTimer,
    led_change_ignore_timer: CountDownTimer,
    ambient_ignore_timer: CountDownTimer,
    motion_proximity_timer: CountDownTimer,

    led_on: bool,
    previous_motion: bool,
    battery_low: bool,
    last_proximity: u16,
    last_ambient: u16,
    last_led_output: i16,

    config: Config,
    ramper: Ramper,
    battery_median_filter: MedianFilter<BATTERY_MEDIAN_WINDOW>,
    battery_average_filter: EmaFilter,
}

impl Controller {
    pub fn new() -> Self {
        Self {
            power_mode: PowerMode::Off,
            power_status: PowerStatus::Battery,
            usb_status: UsbStatus::NoConnection,
            previous_usb_status: UsbStatus::NoConnection,
            debounce_timer: CountDownTimer::new(DEBOUNCE_MS),
            sleep_lockout_timer: CountDownTimer::new(SLEEP_LOCKOUT_MS),
            motion_timer: CountUpTimer::new(),
            battery_display_timer: CountDownTimer::new(BATTERY_LEVEL_DISPLAY_TIME_SECONDS * 1000),
            led_change_ignore_timer: CountDownTimer::new(LED_CHANGE_MOTION_IGNORE_MS),
            ambient_ignore_timer: CountDownTimer::new(AMBIENT_IGNORE_MS),
            motion_proximity_timer: CountDownTimer::new(MOTION_PROXIMITY_WINDOW_MS),
            led_on: false,
            previous_motion: false,
            battery_low: false,
            last_proximity: 0,
            last_ambient: 0,
            last_led_output: 0,
            config: Config::default(),
            ramper: Ramper::new(),
            battery_median_filter: MedianFilter::new(),
            battery_average_filter: EmaFilter::new(BATTERY_FILTER_ALPHA),
        }
    }

    // -- Accessors ---------------------------------------------------------

    pub fn power_mode(&self) -> PowerMode {
        self.power_mode
    }

    pub fn power_status(&self) -> PowerStatus {
        self.power_status
    }

    pub fn usb_status(&self) -> UsbStatus {
        self.usb_status
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn filtered_battery_millivolts(&self) -> u16 {
        self.battery_average_filter.filtered().clamp(0, i32::from(u16::MAX)) as u16
    }

    /// Commanded LED duty (ramper target).
    pub fn led_target(&self) -> i16 {
        self.ramper.target()
    }

    /// Current ramped LED duty.
    pub fn led_actual(&self) -> i16 {
        self.ramper.actual()
    }

    // -- ADC helpers (visible for tests) -----------------------------------

    /// Battery voltage in millivolts, measured indirectly through the
    /// factory-calibrated internal reference. The 32-bit arithmetic is
    /// arranged to avoid losing precision before the final division.
    pub fn read_raw_battery_millivolts(io: &mut impl Io) -> u16 {
        let vrefint_cal = u32::from(io.vrefint_calibration());
        let vrefint_raw = u32::from(io.analog_read(Pin::AdcReference));
        if vrefint_raw == 0 {
            return 0;
        }
        ((vrefint_cal * REFERENCE_SUPPLY_MILLIVOLTS / (ADC_MAX_COUNT / ADC_CONFIGURED_MAX_COUNT))
            / vrefint_raw) as u16
    }

    /// A pin voltage in millivolts, using the battery rail (the ADC's
    /// full-scale reference) measured above.
    pub fn read_analog_voltage_millivolts(
        io: &mut impl Io,
        pin: Pin,
        battery_millivolts: u16,
    ) -> u16 {
        (u32::from(io.analog_read(pin)) * u32::from(battery_millivolts) / ADC_CONFIGURED_MAX_COUNT)
            as u16
    }

    // -- Lifecycle ---------------------------------------------------------

    /// Bring up the controller: pre-fill the battery filters, start the
    /// sensor and power collaborators, arm wake sources, and load the
    /// persisted config (falling back silently to defaults).
    ///
    /// A collaborator `begin` failure is fatal and propagates; the
    /// bootstrap code owns the error-blink loop.
    pub fn init(
        &mut self,
        now_ms: u32,
        io: &mut impl Io,
        sensor: &mut impl LightSensor,
        power: &mut impl PowerControl,
        eeprom: &impl Eeprom,
    ) -> Result<(), Error> {
        io.analog_write(Pin::WhiteLed, 0);

        // Pre-fill the median ring, then seed the EMA from it so the
        // first real reading does not ramp up from zero.
        for _ in 0..BATTERY_MEDIAN_WINDOW {
            self.battery_median_filter
                .run(now_ms, || i32::from(Self::read_raw_battery_millivolts(io)));
        }
        self.battery_average_filter
            .initialize(self.battery_median_filter.filtered());
        self.battery_average_filter
            .run(now_ms, self.battery_median_filter.filtered());
        self.battery_median_filter
            .set_min_run_interval(BATTERY_FILTER_RUN_INTERVAL_MS);
        self.battery_average_filter
            .set_min_run_interval(BATTERY_FILTER_RUN_INTERVAL_MS);

        if !sensor.begin() {
            return Err(Error::Init("light sensor"));
        }
        sensor.set_led_current(SENSOR_LED_CURRENT_MA);

        if !power.begin() {
            return Err(Error::Init("power controller"));
        }
        power.attach_interrupt_wakeup(Pin::MotionSensor, WakeupMode::Rising);
        power.attach_interrupt_wakeup(Pin::PowerAuto, WakeupMode::AnyEdge);
        power.attach_interrupt_wakeup(Pin::PowerOn, WakeupMode::AnyEdge);

        let config = ConfigStore::load_or_default(eeprom);
        self.set_config(config, io);
        Ok(())
    }

    /// Replace the whole config (never field-merged), re-derive the
    /// ramper rates from the new duty cycle, and re-apply the PIR
    /// sensitivity bias.
    pub fn set_config(&mut self, config: Config, io: &mut impl Io) {
        info!("applying config v{}", config.version);
        self.config = config;

        let duty = i16::from(self.config.led_duty_cycle);
        let (magnitude, period) = ramp_rate(duty, RAMP_UP_TIME_MS);
        self.ramper.set_max_increase(magnitude, period);
        let (magnitude, period) = ramp_rate(duty, RAMP_DOWN_TIME_MS);
        self.ramper.set_max_decrease(magnitude, period);

        io.set_motion_sensitivity(self.config.motion_sensitivity);
    }

    // -- Main loop ---------------------------------------------------------

    pub fn step(
        &mut self,
        now_ms: u32,
        io: &mut impl Io,
        sensor: &mut impl LightSensor,
        power: &mut impl PowerControl,
    ) {
        // 1. Battery filters: median feeds the EMA.
        self.battery_median_filter
            .run(now_ms, || i32::from(Self::read_raw_battery_millivolts(io)));
        self.battery_average_filter
            .run(now_ms, self.battery_median_filter.filtered());

        // 2. Debounced power-mode switch.
        let auto_triggered = self.update_power_mode(now_ms, sensor, io);

        // 3. Proximity delta toggling between Auto and Toggled.
        self.update_proximity_toggle(now_ms, sensor);

        // 4. USB classification from the CC sense lines.
        self.update_usb_status(io, sensor);

        // 5. Power status with low-battery hysteresis.
        self.update_power_status(io);

        // 6. Hard low-power floor: kill the light and halt.
        if self.power_status == PowerStatus::LowBatteryCutoff {
            self.ramper.set_target(0);
            self.ramper.snap_to_target(now_ms);
            io.analog_write(Pin::WhiteLed, 0);
            self.led_on = false;
            self.last_led_output = 0;
            self.write_battery_leds(io, 0, 0, false);
            power.stop();
            return;
        }

        // 7. Motion, suppressed while the LED itself just changed.
        let motion = if self.led_change_ignore_timer.active(now_ms) {
            false
        } else {
            io.digital_read(Pin::MotionSensor)
        };
        if motion {
            // Held motion keeps re-arming the timeout; the light stays on
            // until a full timeout after the last high sample.
            self.motion_timer.reset(now_ms);
            if !self.previous_motion {
                self.motion_proximity_timer.reset(now_ms);
                if self.config.proximity_mode == ProximityMode::Toggle {
                    sensor.set_periodic_proximity(true);
                }
            }
        }
        self.previous_motion = motion;

        // 8. LED target by mode.
        self.update_led_target(now_ms, sensor, motion, auto_triggered);

        // 9. Close the motion-opened proximity window.
        if self.motion_proximity_timer.expired(now_ms)
            && self.power_mode != PowerMode::Toggled
            && self.usb_status == UsbStatus::NoConnection
        {
            sensor.set_periodic_proximity(false);
        }

        // 10. Battery/status LEDs.
        self.render_battery_leds(now_ms, io);

        // 11. Ramp the white LED output.
        self.ramper.step(now_ms);
        let actual = self.ramper.actual();
        if actual != self.last_led_output {
            io.analog_write(Pin::WhiteLed, actual.clamp(0, 255) as u8);
            self.last_led_output = actual;
        }
        self.led_on = actual > 0;

        // 12. Sleep decision.
        let proximity_lockout = self.config.proximity_mode == ProximityMode::Toggle
            && self.motion_proximity_timer.active(now_ms);
        if !self.led_on
            && self.power_status != PowerStatus::Charging
            && !self.sleep_lockout_timer.active(now_ms)
            && !proximity_lockout
            && !self.battery_display_timer.active(now_ms)
        {
            power.sleep(SLEEP_INTERVAL_MS);
        }
    }

    // -- Step pieces -------------------------------------------------------

    /// Reads the power switch when the debounce window allows it and
    /// applies mode-entry side effects. Returns whether this step entered
    /// Auto from the switch.
    fn update_power_mode(
        &mut self,
        now_ms: u32,
        sensor: &mut impl LightSensor,
        io: &mut impl Io,
    ) -> bool {
        if self.debounce_timer.running(now_ms) && !self.debounce_timer.expired(now_ms) {
            return false;
        }

        let switch_mode = read_power_switch(io);
        // While latched in Toggled, a switch still sitting in Auto must
        // not pull the mode back; only the switch leaving Auto does.
        let new_mode = if self.power_mode == PowerMode::Toggled && switch_mode == PowerMode::Auto {
            PowerMode::Toggled
        } else {
            switch_mode
        };

        if new_mode == self.power_mode {
            return false;
        }

        info!("power mode {:?} -> {:?}", self.power_mode, new_mode);
        let previous = self.power_mode;
        self.power_mode = new_mode;
        self.debounce_timer.reset(now_ms);
        self.sleep_lockout_timer.reset(now_ms);

        match new_mode {
            PowerMode::Off | PowerMode::On => {
                sensor.set_periodic_ambient(false);
                self.battery_display_timer.reset(now_ms);
            }
            PowerMode::Auto if previous != PowerMode::Toggled => {
                sensor.set_periodic_ambient(
                    self.config.brightness_mode == BrightnessMode::OnWhenBelow,
                );
                self.motion_timer.reset(now_ms);
                self.battery_display_timer.reset(now_ms);
                self.motion_proximity_timer.reset(now_ms);
                if self.config.proximity_mode == ProximityMode::Toggle {
                    sensor.set_periodic_proximity(true);
                }
                return true;
            }
            _ => {}
        }
        false
    }

    /// Auto ⇄ Toggled on a large proximity delta. The baseline resets to
    /// zero after each flip, so the next comparison starts fresh.
    fn update_proximity_toggle(&mut self, now_ms: u32, sensor: &mut impl LightSensor) {
        if self.config.proximity_mode != ProximityMode::Toggle {
            return;
        }
        if self.power_mode != PowerMode::Auto && self.power_mode != PowerMode::Toggled {
            return;
        }
        if !sensor.proximity_ready() {
            return;
        }

        let reading = sensor.read_proximity();
        let delta = i32::from(reading).abs_diff(i32::from(self.last_proximity));
        if delta > u32::from(self.config.proximity_threshold) {
            self.power_mode = if self.power_mode == PowerMode::Auto {
                info!("proximity toggle: Auto -> Toggled");
                self.motion_timer.reset(now_ms);
                PowerMode::Toggled
            } else {
                info!("proximity toggle: Toggled -> Auto");
                PowerMode::Auto
            };
            self.last_proximity = 0;
        } else {
            self.last_proximity = reading;
        }
    }

    /// Classify the USB supply from the higher CC line and drive the
    /// high-current charge path for the 1.5 A / 3.0 A classes.
    fn update_usb_status(&mut self, io: &mut impl Io, sensor: &mut impl LightSensor) {
        let battery_millivolts = Self::read_raw_battery_millivolts(io);
        let cc1 = Self::read_analog_voltage_millivolts(io, Pin::Cc1, battery_millivolts);
        let cc2 = Self::read_analog_voltage_millivolts(io, Pin::Cc2, battery_millivolts);
        let cc = u32::from(cc1.max(cc2));

        self.previous_usb_status = self.usb_status;
        self.usb_status = if cc < USB_STANDARD_MIN_MILLIVOLTS {
            UsbStatus::NoConnection
        } else if cc < USB_1A5_MIN_MILLIVOLTS {
            UsbStatus::StandardUsb
        } else if cc < USB_3A0_MIN_MILLIVOLTS {
            UsbStatus::Usb1A5
        } else {
            UsbStatus::Usb3A0
        };

        let high_current =
            self.usb_status == UsbStatus::Usb1A5 || self.usb_status == UsbStatus::Usb3A0;
        io.digital_write(Pin::ChargeHighCurrentEnable, high_current);

        if self.usb_status != self.previous_usb_status {
            // On USB power the sensor can sample continuously; on battery
            // each subsystem re-enables sampling only while it needs it.
            let connected = self.usb_status != UsbStatus::NoConnection;
            sensor.set_periodic_ambient(connected);
            sensor.set_periodic_proximity(connected);
        }
    }

    /// Hysteretic battery-low flag combined with the two charge-indicator
    /// lines (active low) and the USB classification.
    fn update_power_status(&mut self, io: &mut impl Io) {
        let filtered = self.battery_average_filter.filtered();
        if self.battery_low {
            if filtered > i32::from(self.config.low_battery_hysteresis_threshold_millivolts) {
                self.battery_low = false;
            }
        } else if filtered < i32::from(self.config.low_battery_cutoff_millivolts) {
            warn!("battery low: {filtered} mV filtered");
            self.battery_low = true;
        }

        let charging = !io.digital_read(Pin::BatteryCharge);
        let done = !io.digital_read(Pin::BatteryDone);

        self.power_status = if self.battery_low {
            if charging {
                PowerStatus::LowBatteryCutoffCharging
            } else {
                PowerStatus::LowBatteryCutoff
            }
        } else {
            match (charging, done) {
                // Both lines asserted is impossible per the charger
                // datasheet; report it rather than guessing.
                (true, true) => PowerStatus::ChargeError,
                (true, false) => PowerStatus::Charging,
                (false, true) => PowerStatus::Charged,
                (false, false) => {
                    if self.usb_status == UsbStatus::NoConnection {
                        PowerStatus::Battery
                    } else {
                        // USB present but the charger reports nothing.
                        PowerStatus::ChargeError
                    }
                }
            }
        };
    }

    /// Step 8: choose the ramper target for the white LED.
    fn update_led_target(
        &mut self,
        now_ms: u32,
        sensor: &mut impl LightSensor,
        motion: bool,
        auto_triggered: bool,
    ) {
        if sensor.ambient_ready() {
            self.last_ambient = sensor.read_ambient();
        }

        let duty = i16::from(self.config.led_duty_cycle);

        if self.power_status == PowerStatus::LowBatteryCutoffCharging
            || self.usb_status != UsbStatus::NoConnection
            || self.power_mode == PowerMode::Off
        {
            self.set_led_target(now_ms, 0);
            return;
        }

        match self.power_mode {
            PowerMode::On => self.set_led_target(now_ms, duty),
            PowerMode::Toggled => {
                let timeout_ms = u32::from(self.config.proximity_toggle_timeout_seconds) * 1000;
                if self.motion_timer.running() && self.motion_timer.elapsed(now_ms) > timeout_ms {
                    info!("proximity toggle timeout: Toggled -> Auto");
                    self.power_mode = PowerMode::Auto;
                    self.motion_timer.stop();
                    self.set_led_target(now_ms, 0);
                } else {
                    self.set_led_target(now_ms, duty);
                }
            }
            PowerMode::Auto => {
                if motion || auto_triggered {
                    let dark_enough = self.config.brightness_mode == BrightnessMode::Disabled
                        || auto_triggered
                        || self.ambient_ignore_timer.active(now_ms)
                        || self.last_ambient < self.config.auto_brightness_threshold;
                    if dark_enough {
                        self.set_led_target(now_ms, duty);
                    }
                } else if self.motion_timer.running()
                    && self.motion_timer.elapsed(now_ms)
                        > u32::from(self.config.motion_timeout_seconds) * 1000
                {
                    self.set_led_target(now_ms, 0);
                    self.motion_timer.stop();
                }
            }
            PowerMode::Off => {}
        }
    }

    /// Retargets the ramper, arming the anti-retrigger windows whenever
    /// the light actually changes to on. Turning off arms nothing — a
    /// motion edge right after the timeout must retrigger immediately.
    fn set_led_target(&mut self, now_ms: u32, target: i16) {
        if target == self.ramper.target() {
            return;
        }
        self.ramper.set_target(target);
        if target > 0 {
            self.led_change_ignore_timer.reset(now_ms);
            self.ambient_ignore_timer.reset(now_ms);
        }
    }

    /// Step 10: battery LEDs. Slow blink while charging, fast blink on a
    /// charge error, steady while charged, two-level voltage display
    /// during the post-mode-change window, otherwise dark.
    fn render_battery_leds(&mut self, now_ms: u32, io: &mut impl Io) {
        match self.power_status {
            PowerStatus::Charging | PowerStatus::LowBatteryCutoffCharging => {
                let on = (now_ms / SLOW_BLINK_PERIOD_MS) % 2 == 0;
                if on {
                    self.write_battery_leds(io, 255, 255, true);
                } else {
                    self.write_battery_leds(io, 0, 0, false);
                }
            }
            PowerStatus::ChargeError => {
                let on = (now_ms / FAST_BLINK_PERIOD_MS) % 2 == 0;
                if on {
                    self.write_battery_leds(io, 255, 255, true);
                } else {
                    self.write_battery_leds(io, 0, 0, false);
                }
            }
            PowerStatus::Charged => self.write_battery_leds(io, 255, 255, true),
            PowerStatus::Battery if self.battery_display_timer.active(now_ms) => {
                let filtered = self.battery_average_filter.filtered();
                let led1 = if filtered > BATTERY_VOLTAGE_1 {
                    255
                } else {
                    BATTERY_LED_DIM_BRIGHTNESS
                };
                let led2 = if filtered > BATTERY_VOLTAGE_0 {
                    255
                } else {
                    BATTERY_LED_DIM_BRIGHTNESS
                };
                self.write_battery_leds(io, led1, led2, true);
            }
            _ => self.write_battery_leds(io, 0, 0, false),
        }
    }

    fn write_battery_leds(&mut self, io: &mut impl Io, led1: u8, led2: u8, led3: bool) {
        io.analog_write(Pin::BatteryLed1, led1);
        io.analog_write(Pin::BatteryLed2, led2);
        io.digital_write(Pin::BatteryLed3, led3);
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

/// Switch decode: On dominates Auto dominates Off. The inputs are
/// inverted; both asserted at once only happens briefly mid-slide.
fn read_power_switch(io: &mut impl Io) -> PowerMode {
    if !io.digital_read(Pin::PowerOn) {
        PowerMode::On
    } else if !io.digital_read(Pin::PowerAuto) {
        PowerMode::Auto
    } else {
        PowerMode::Off
    }
}

/// Split a total change over a total time into an integer per-period
/// rate: whole units per millisecond when the change is larger than the
/// time, otherwise one unit every few milliseconds.
fn ramp_rate(duty: i16, ramp_time_ms: u32) -> (i16, u32) {
    if duty <= 0 || ramp_time_ms == 0 {
        return (0, 0);
    }
    let duty_u32 = duty as u32;
    if duty_u32 >= ramp_time_ms {
        ((duty_u32 / ramp_time_ms) as i16, 1)
    } else {
        (1, ramp_time_ms / duty_u32)
    }
}
