//! Fuzz target for `procsafe.toml` parsing and resolution.
//!
//! Goal: config handling should **never panic** on any input.
//! It may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // procsafe.toml must be UTF-8
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(cfg) = procsafe_settings::parse_config_toml(text) {
            let _ = procsafe_settings::resolve_config(cfg, procsafe_settings::Overrides::default());
        }
    }
});
