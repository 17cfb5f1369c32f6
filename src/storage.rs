//! Crash-safe config persistence.
//!
//! Record layout in the EEPROM:
//!
//! ```text
//! ┌───────────┬───────────┬───────────┬──────────────────────────────┐
//! │ magic A   │ magic B   │ version   │ u32 length ┊ postcard payload │
//! │ [0..4)    │ [4..8)    │ [8..12)   │ [12..capacity)               │
//! └───────────┴───────────┴───────────┴──────────────────────────────┘
//! ```
//!
//! `save` writes the payload first and commits the header (version word,
//! then both magic words) only afterwards. A power loss mid-save leaves
//! the header absent or stale, so the next `try_load` fails closed and the
//! caller falls back to defaults. No partial-payload recovery is
//! attempted.

use log::warn;

use crate::config::Config;
use crate::error::StoreError;
use crate::ports::Eeprom;

/// Magic words marking a committed record.
pub const MAGIC_WORD_A: u32 = 0xDEAD_BEEF;
pub const MAGIC_WORD_B: u32 = 0xBADD_F00D;

/// Layout version of the stored record. Increments exactly when a new
/// payload is incompatible with the older one — unlikely, since postcard
/// tolerates appended fields, but cheap to carry.
pub const STORE_VERSION: u32 = 1;

/// Byte offset of the encoded payload (three u32 header words).
const HEADER_LEN: usize = 12;

/// Upper bound on the encoded payload (length prefix included).
const MAX_PAYLOAD: usize = 256;

/// Stateless codec over an [`Eeprom`] port.
pub struct ConfigStore;

impl ConfigStore {
    /// Load the committed config, if any.
    ///
    /// Fails without producing a config unless both magic words and the
    /// version word match and the payload decodes.
    pub fn try_load(eeprom: &impl Eeprom) -> Result<Config, StoreError> {
        if eeprom.capacity() < HEADER_LEN + 4 {
            return Err(StoreError::BadLength);
        }
        if read_u32(eeprom, 0) != MAGIC_WORD_A || read_u32(eeprom, 4) != MAGIC_WORD_B {
            return Err(StoreError::BadMagic);
        }
        if read_u32(eeprom, 8) != STORE_VERSION {
            return Err(StoreError::VersionMismatch);
        }

        let len = read_u32(eeprom, HEADER_LEN) as usize;
        if len == 0 || len > MAX_PAYLOAD || HEADER_LEN + 4 + len > eeprom.capacity() {
            return Err(StoreError::BadLength);
        }

        let mut buf = [0u8; MAX_PAYLOAD];
        for (i, slot) in buf[..len].iter_mut().enumerate() {
            *slot = eeprom.read_byte(HEADER_LEN + 4 + i);
        }

        postcard::from_bytes(&buf[..len]).map_err(|_| StoreError::Decode)
    }

    /// Persist `config`.
    ///
    /// The payload is encoded to RAM first; nothing is written to the
    /// store at all if encoding fails. The header words go last, in the
    /// order version, magic A, magic B, acting as the commit marker.
    pub fn save(eeprom: &mut impl Eeprom, config: &Config) -> Result<(), StoreError> {
        let mut buf = [0u8; MAX_PAYLOAD];
        let len = postcard::to_slice(config, &mut buf)
            .map_err(|_| StoreError::Encode)?
            .len();
        if HEADER_LEN + 4 + len > eeprom.capacity() {
            return Err(StoreError::Encode);
        }

        write_u32(eeprom, HEADER_LEN, len as u32);
        for (i, byte) in buf[..len].iter().enumerate() {
            eeprom.write_byte(HEADER_LEN + 4 + i, *byte);
        }

        write_u32(eeprom, 8, STORE_VERSION);
        write_u32(eeprom, 0, MAGIC_WORD_A);
        write_u32(eeprom, 4, MAGIC_WORD_B);
        Ok(())
    }

    /// `try_load` with the silent-fallback policy applied: any failure
    /// yields the compiled-in defaults.
    pub fn load_or_default(eeprom: &impl Eeprom) -> Config {
        match Self::try_load(eeprom) {
            Ok(config) => config,
            Err(e) => {
                warn!("config store: {e}; using defaults");
                Config::default()
            }
        }
    }
}

fn read_u32(eeprom: &impl Eeprom, offset: usize) -> u32 {
    let mut word = [0u8; 4];
    for (i, slot) in word.iter_mut().enumerate() {
        *slot = eeprom.read_byte(offset + i);
    }
    u32::from_le_bytes(word)
}

fn write_u32(eeprom: &mut impl Eeprom, offset: usize, value: u32) {
    for (i, byte) in value.to_le_bytes().iter().enumerate() {
        eeprom.write_byte(offset + i, *byte);
    }
}
