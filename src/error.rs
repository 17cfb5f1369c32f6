//! Unified error types for the control core.
//!
//! Follows embedded practice: small `Copy` enums with hand-rolled
//! `Display` impls so errors can move through the control loop without
//! allocation. Expected conditions (missing samples, malformed requests,
//! absent config) are not errors at all — they fall back silently.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the core funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A collaborator failed to initialise during bring-up. Fatal: the
    /// bootstrap code is expected to enter its error-blink loop.
    Init(&'static str),
    /// The persistent config store failed.
    Store(StoreError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(what) => write!(f, "init: {what}"),
            Self::Store(e) => write!(f, "config store: {e}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Config store errors
// ---------------------------------------------------------------------------

/// Failures from [`ConfigStore`](crate::storage::ConfigStore).
///
/// A load failure of any kind means "use the compiled-in defaults"; the
/// variants exist so the fallback can be logged with a reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// One or both magic words did not match — the store was never
    /// committed, or a save was interrupted before the header was written.
    BadMagic,
    /// The stored version word does not match the current layout version.
    VersionMismatch,
    /// The recorded payload length does not fit the store capacity.
    BadLength,
    /// Payload serialisation failed or did not fit the data region.
    Encode,
    /// Payload deserialisation failed.
    Decode,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadMagic => write!(f, "magic word mismatch"),
            Self::VersionMismatch => write!(f, "version mismatch"),
            Self::BadLength => write!(f, "payload length out of range"),
            Self::Encode => write!(f, "payload encode failed"),
            Self::Decode => write!(f, "payload decode failed"),
        }
    }
}

impl From<StoreError> for Error {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}
