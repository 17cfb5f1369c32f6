//! Fuzz target: `ConfigStore::try_load`
//!
//! Treats the fuzz input as raw EEPROM contents and verifies the store
//! never panics, and that whatever it does load survives a save/reload
//! cycle unchanged.
//!
//! cargo fuzz run fuzz_config_store

#![no_main]

use libfuzzer_sys::fuzz_target;
use motionlight::fakes::FakeEeprom;
use motionlight::storage::ConfigStore;

fuzz_target!(|data: &[u8]| {
    let mut eeprom = FakeEeprom::new(data.len());
    eeprom.bytes.copy_from_slice(data);

    if let Ok(config) = ConfigStore::try_load(&eeprom) {
        // A loadable image must stay loadable through a rewrite.
        let mut fresh = FakeEeprom::new(2048);
        ConfigStore::save(&mut fresh, &config).unwrap();
        assert_eq!(ConfigStore::try_load(&fresh).unwrap(), config);
    }
});
