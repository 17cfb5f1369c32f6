//! Serial request/response link.
//!
//! One poll handles at most one request: decode a length-prefixed frame,
//! optionally apply and persist a new config, and always answer with a
//! status snapshot. A malformed frame never goes unanswered — the host
//! still gets status, it just sees its config ignored.

pub mod codec;
pub mod messages;

use log::warn;

use crate::FIRMWARE_VERSION;
use crate::controller::Controller;
use crate::ports::{Eeprom, Io, LightSensor, TemperatureSensor, Transport};
use crate::storage::ConfigStore;
use messages::{Request, Response, Status, firmware_version_field};

/// Request/response handler. Holds no framing state between polls.
#[derive(Debug, Default)]
pub struct SerialLink;

impl SerialLink {
    pub const fn new() -> Self {
        Self
    }

    /// Poll the transport and answer one request, if any.
    ///
    /// Persistence failures are logged and swallowed: the host learns the
    /// outcome by reading the echoed config back, not from an error code.
    pub fn step(
        &mut self,
        transport: &mut impl Transport,
        controller: &mut Controller,
        io: &mut impl Io,
        sensor: &mut impl LightSensor,
        temperature: &mut impl TemperatureSensor,
        eeprom: &mut impl Eeprom,
    ) {
        if !transport.available() {
            return;
        }

        let mut rx = [0u8; codec::HEADER_SIZE + codec::MAX_FRAME_SIZE];
        let received = transport.read(&mut rx);

        let request = codec::decode_frame(&rx[..received])
            .and_then(|payload| postcard::from_bytes::<Request>(payload).ok());
        if request.is_none() {
            warn!("serial link: dropping malformed request ({received} bytes)");
        }

        if let Some(req) = &request {
            if let Some(config) = &req.config {
                controller.set_config(config.clone(), io);
                if let Err(e) = ConfigStore::save(eeprom, config) {
                    warn!("serial link: config not persisted: {e}");
                }
            }
        }

        let status = Status {
            battery_voltage_millivolts: Some(controller.filtered_battery_millivolts()),
            firmware_version: Some(firmware_version_field(FIRMWARE_VERSION)),
            proximity_value: Some(sensor.read_proximity()),
            ambient_light_value: Some(sensor.read_ambient()),
            temperature_celsius: Some(temperature.read_celsius()),
        };

        let response = Response {
            config: request
                .as_ref()
                .filter(|req| req.request_config)
                .map(|_| controller.config().clone()),
            status: Some(status),
        };

        let mut payload = [0u8; codec::MAX_FRAME_SIZE];
        let Ok(encoded) = postcard::to_slice(&response, &mut payload) else {
            warn!("serial link: response encode failed");
            return;
        };
        let mut frame = [0u8; codec::HEADER_SIZE + codec::MAX_FRAME_SIZE];
        if let Some(total) = codec::encode_frame(encoded, &mut frame) {
            transport.write(&frame[..total]);
        }
    }
}
