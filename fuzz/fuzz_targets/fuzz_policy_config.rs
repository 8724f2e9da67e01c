//! Fuzz target for policy file parsing and resolution.
//!
//! Goal: TOML/JSON parsing and policy resolution should **never panic** on any input.
//! They may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_policy_config
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(cfg) = cguard_settings::parse_config_toml(text) {
        let _ = cguard_settings::resolve_policy(cfg);
    }
    if let Ok(cfg) = cguard_settings::parse_config_json(text) {
        let _ = cguard_settings::resolve_policy(cfg);
    }
});
