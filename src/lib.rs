//! MotionLight control core.
//!
//! Decision logic for a battery-powered, motion-activated light fixture:
//! the power-mode/power-status state machine, battery-voltage filtering,
//! the rate-limited LED ramper, crash-safe config persistence, and the
//! serial request/response link. All hardware access goes through the
//! port traits in [`ports`], so the whole core runs host-side against the
//! doubles in [`fakes`].

#![deny(unused_must_use)]

pub mod clock;
pub mod config;
pub mod controller;
pub mod filters;
pub mod link;
pub mod pins;
pub mod ports;
pub mod ramper;
pub mod storage;

pub mod error;

// Test doubles for every port. Compiled unconditionally so the `tests/`
// suites, the fuzz targets, and downstream emulators can reuse them.
pub mod fakes;

/// Version string reported in the serial status block.
pub const FIRMWARE_VERSION: &str = env!("CARGO_PKG_VERSION");
