//! Request/response records exchanged over the serial link.
//!
//! Encoded with postcard inside a length-prefixed frame. Every optional
//! field carries its own presence flag on the wire (`Option` maps to a
//! one-byte discriminant), so a host can send a bare status poll or a
//! config update with the same record.

use heapless::String;
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Capacity of the firmware version field; longer versions are truncated.
pub const FIRMWARE_VERSION_LEN: usize = 16;

/// Host → device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// New configuration to apply and persist.
    pub config: Option<Config>,
    /// Ask the device to echo its current configuration.
    pub request_config: bool,
}

/// Device status snapshot, every field individually presence-flagged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub battery_voltage_millivolts: Option<u16>,
    pub firmware_version: Option<String<FIRMWARE_VERSION_LEN>>,
    pub proximity_value: Option<u16>,
    pub ambient_light_value: Option<u16>,
    pub temperature_celsius: Option<i16>,
}

/// Device → host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Present only when the request asked for it.
    pub config: Option<Config>,
    pub status: Option<Status>,
}

/// Truncate `version` into the fixed-capacity wire field.
pub fn firmware_version_field(version: &str) -> String<FIRMWARE_VERSION_LEN> {
    let mut out = String::new();
    for c in version.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}
