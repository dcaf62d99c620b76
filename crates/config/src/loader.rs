//! Configuration loader for the production deployment variant.
//!
//! Responsibilities:
//! - Merge placeholder defaults, build-time injected credentials, and
//!   runtime environment variables into a `Config`, override-wins.
//! - Provide a builder-pattern `ConfigLoader` for explicit overrides.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv
//!   loading in tests.
//!
//! Does NOT handle:
//! - Validation of the assembled value (see `Config::is_configured` and
//!   `Config::init`). Construction never fails, even when every credential
//!   is still a placeholder; the unconfigured state is caught at `init`.
//! - The development template variant (see `Config::template`), which has
//!   no environment override path.
//!
//! Invariants / Assumptions:
//! - Runtime environment variables take precedence over build-time injected
//!   values; explicit `with_*` overrides applied after `from_env()` take
//!   precedence over both.
//! - Empty and whitespace-only environment values count as unset.

use secrecy::SecretString;

use crate::constants;
use crate::types::{Config, FeatureFlags, Variant};

/// Builder assembling the production configuration.
pub struct ConfigLoader {
    supabase_url: Option<String>,
    supabase_anon_key: Option<SecretString>,
    google_client_id: Option<String>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self {
            supabase_url: None,
            supabase_anon_key: None,
            google_client_id: None,
        }
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// If the `DOTENV_DISABLED` environment variable is set to "true" or
    /// "1", the `.env` file will not be loaded (useful for testing).
    pub fn load_dotenv(self) -> Self {
        if std::env::var("DOTENV_DISABLED").ok().as_deref() != Some("true")
            && std::env::var("DOTENV_DISABLED").ok().as_deref() != Some("1")
        {
            dotenvy::dotenv().ok();
        }
        self
    }

    /// Read an environment variable, returning None if unset, empty, or
    /// whitespace-only.
    pub fn env_var_or_none(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.trim().is_empty())
    }

    /// Read configuration from environment variables.
    ///
    /// Values supplied here win over anything captured at build time.
    pub fn from_env(mut self) -> Self {
        if let Some(url) = Self::env_var_or_none(constants::ENV_SUPABASE_URL) {
            self.supabase_url = Some(url);
        }
        if let Some(key) = Self::env_var_or_none(constants::ENV_SUPABASE_ANON_KEY) {
            self.supabase_anon_key = Some(SecretString::new(key.into()));
        }
        if let Some(id) = Self::env_var_or_none(constants::ENV_GOOGLE_CLIENT_ID) {
            self.google_client_id = Some(id);
        }
        self
    }

    /// Set the Supabase project URL.
    pub fn with_supabase_url(mut self, url: String) -> Self {
        self.supabase_url = Some(url);
        self
    }

    /// Set the Supabase anonymous key.
    pub fn with_supabase_anon_key(mut self, key: String) -> Self {
        self.supabase_anon_key = Some(SecretString::new(key.into()));
        self
    }

    /// Set the Google OAuth client ID.
    pub fn with_google_client_id(mut self, id: String) -> Self {
        self.google_client_id = Some(id);
        self
    }

    /// Build the production configuration.
    ///
    /// Every credential falls back through the build-time injected value to
    /// an obvious non-functional placeholder, so construction always
    /// succeeds and validation stays a separate, explicit step.
    pub fn build(self) -> Config {
        let supabase_url = self
            .supabase_url
            .or_else(|| constants::BUILD_SUPABASE_URL.map(str::to_string))
            .unwrap_or_else(|| constants::PLACEHOLDER_SUPABASE_URL.to_string());

        let supabase_anon_key = self.supabase_anon_key.unwrap_or_else(|| {
            let key = constants::BUILD_SUPABASE_ANON_KEY
                .unwrap_or(constants::PLACEHOLDER_SUPABASE_ANON_KEY);
            SecretString::new(key.to_string().into())
        });

        let google_client_id = self
            .google_client_id
            .or_else(|| constants::BUILD_GOOGLE_CLIENT_ID.map(str::to_string))
            .unwrap_or_else(|| constants::PLACEHOLDER_GOOGLE_CLIENT_ID.to_string());

        Config {
            variant: Variant::Production,
            supabase_url,
            supabase_anon_key,
            is_production: true,
            app_name: constants::APP_NAME.to_string(),
            version: constants::APP_VERSION.to_string(),
            google_client_id: Some(google_client_id),
            features: FeatureFlags::production_defaults(),
            analytics_enabled: true,
            error_reporting_enabled: true,
        }
    }
}
