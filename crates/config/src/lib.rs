//! Configuration management for SocialCard Pro.
//!
//! This crate provides the configuration record for the SocialCard Pro
//! client along with a loader for assembling it from build-time injected
//! values and environment variables.

pub mod constants;
mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{Config, ConfigError, Feature, FeatureFlags, RuntimeContext, Variant};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
