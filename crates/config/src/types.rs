//! Configuration types for SocialCard Pro.

use std::collections::BTreeMap;
use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::{Origin, Url};

use crate::constants;

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Errors surfaced by configuration validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required credentials are absent or still placeholders.
    #[error("{app_name} {variant} configuration missing")]
    NotConfigured {
        /// Application display name, so the abort message identifies the app.
        app_name: String,
        /// Which construction path produced the rejected value.
        variant: Variant,
    },
}

/// Which configuration flavor a value was assembled from.
///
/// The production flavor reads injected credentials and falls back to
/// obvious non-functional placeholders; the template flavor carries fixed
/// instructional placeholders for a developer to replace by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Production,
    Template,
}

impl Variant {
    /// Placeholder the Supabase URL keeps until a real value is supplied.
    pub fn supabase_url_placeholder(self) -> &'static str {
        match self {
            Self::Production => constants::PLACEHOLDER_SUPABASE_URL,
            Self::Template => constants::TEMPLATE_SUPABASE_URL,
        }
    }

    /// Placeholder the anonymous key keeps until a real value is supplied.
    pub fn supabase_anon_key_placeholder(self) -> &'static str {
        match self {
            Self::Production => constants::PLACEHOLDER_SUPABASE_ANON_KEY,
            Self::Template => constants::TEMPLATE_SUPABASE_ANON_KEY,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => f.write_str("production"),
            Self::Template => f.write_str("template"),
        }
    }
}

/// A toggleable application feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Scan contact QR codes with the device camera.
    QrScanning,
    /// Share contact cards with other users.
    ContactSharing,
    /// Attach social media links to a card.
    SocialLinks,
    /// Customize card layout and colors.
    ProfileCustomization,
    /// Collect card view statistics.
    Analytics,
}

impl Feature {
    /// Every known feature, in serialization order.
    pub const ALL: [Feature; 5] = [
        Feature::QrScanning,
        Feature::ContactSharing,
        Feature::SocialLinks,
        Feature::ProfileCustomization,
        Feature::Analytics,
    ];
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QrScanning => write!(f, "qr_scanning"),
            Self::ContactSharing => write!(f, "contact_sharing"),
            Self::SocialLinks => write!(f, "social_links"),
            Self::ProfileCustomization => write!(f, "profile_customization"),
            Self::Analytics => write!(f, "analytics"),
        }
    }
}

/// Per-feature enable switches.
///
/// Only features explicitly listed here are enabled; absent entries count
/// as off. Using BTreeMap for deterministic serialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureFlags {
    /// Map of feature -> enabled.
    #[serde(default)]
    pub flags: BTreeMap<Feature, bool>,
}

impl FeatureFlags {
    /// Flag set shipped with the production configuration: everything on.
    pub fn production_defaults() -> Self {
        Self {
            flags: Feature::ALL.iter().map(|f| (*f, true)).collect(),
        }
    }

    /// Returns true if no flags are configured.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Whether a feature is enabled. Absent features are off.
    pub fn is_enabled(&self, feature: Feature) -> bool {
        self.flags.get(&feature).copied().unwrap_or(false)
    }
}

/// Execution context the derived URLs are computed against.
///
/// Stands in for the ambient globals of a web runtime: when the application
/// runs in a page, the context carries that page's URL; during server-side
/// or test evaluation it carries nothing. Passed explicitly so the derived
/// values stay pure functions of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeContext {
    page_url: Option<Url>,
}

impl RuntimeContext {
    /// Context for a browser-like runtime currently displaying `page_url`.
    pub fn browser(page_url: Url) -> Self {
        Self {
            page_url: Some(page_url),
        }
    }

    /// Context with no browser globals (server-side evaluation, tests).
    pub fn headless() -> Self {
        Self { page_url: None }
    }

    /// Current origin (scheme + host + port) if a page with a tuple origin
    /// is present. Opaque origins (`data:` and friends) carry no usable
    /// origin and yield `None`.
    pub fn origin(&self) -> Option<String> {
        self.page_url.as_ref().and_then(|url| match url.origin() {
            origin @ Origin::Tuple(..) => Some(origin.ascii_serialization()),
            Origin::Opaque(_) => None,
        })
    }
}

/// Main configuration record.
///
/// Constructed once at bootstrap, via [`ConfigLoader`](crate::ConfigLoader)
/// for deployments or [`Config::template`] for local development, and passed
/// by reference to consumers. Read-only after construction; the URL
/// properties are recomputed from the supplied [`RuntimeContext`] on every
/// call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Which construction path produced this value.
    pub variant: Variant,
    /// Supabase project endpoint.
    pub supabase_url: String,
    /// Supabase anonymous key (a JWT).
    #[serde(with = "secret_string")]
    pub supabase_anon_key: SecretString,
    /// Environment flag; fixed true for the production variant.
    pub is_production: bool,
    /// Application display name.
    pub app_name: String,
    /// Application version.
    pub version: String,
    /// Google OAuth client identifier (production variant only).
    pub google_client_id: Option<String>,
    /// Per-feature enable switches (production variant only).
    #[serde(default)]
    pub features: FeatureFlags,
    /// Whether usage analytics are collected.
    pub analytics_enabled: bool,
    /// Whether runtime errors are reported upstream.
    pub error_reporting_enabled: bool,
}

impl Config {
    /// Development template configuration.
    ///
    /// Mirrors the checked-in template file: fixed instructional
    /// placeholders and every production-only surface disabled. There is no
    /// environment override path; a developer edits the values by hand.
    pub fn template() -> Self {
        Self {
            variant: Variant::Template,
            supabase_url: constants::TEMPLATE_SUPABASE_URL.to_string(),
            supabase_anon_key: SecretString::new(
                constants::TEMPLATE_SUPABASE_ANON_KEY.to_string().into(),
            ),
            is_production: false,
            app_name: constants::APP_NAME.to_string(),
            version: constants::APP_VERSION.to_string(),
            google_client_id: None,
            features: FeatureFlags::default(),
            analytics_enabled: false,
            error_reporting_enabled: false,
        }
    }

    /// Human-readable environment label for diagnostics.
    pub fn environment_label(&self) -> &'static str {
        if self.is_production {
            "PRODUCTION"
        } else {
            "DEVELOPMENT"
        }
    }

    /// Root origin the application considers itself deployed under.
    ///
    /// The production variant resolves the live origin from the runtime
    /// context, falling back to the canonical deployment URL when none is
    /// present. The template variant ignores the context and switches on
    /// `is_production`.
    ///
    /// Recomputed on every call; a context change between calls is always
    /// reflected.
    pub fn base_url(&self, ctx: &RuntimeContext) -> String {
        match self.variant {
            Variant::Production => ctx
                .origin()
                .unwrap_or_else(|| constants::PRODUCTION_FALLBACK_URL.to_string()),
            Variant::Template => {
                if self.is_production {
                    constants::TEMPLATE_PRODUCTION_URL.to_string()
                } else {
                    constants::LOCAL_DEV_URL.to_string()
                }
            }
        }
    }

    /// Absolute URL the OAuth provider redirects back to.
    ///
    /// Always consistent with the current [`Config::base_url`].
    pub fn auth_redirect_url(&self, ctx: &RuntimeContext) -> String {
        format!("{}{}", self.base_url(ctx), constants::AUTH_CALLBACK_PATH)
    }

    /// Whether all required credentials are present and structurally
    /// well-formed.
    ///
    /// True iff both credentials differ from their placeholder defaults,
    /// the URL uses https, and the key looks like a JWT. Pure and free of
    /// side effects; safe to call repeatedly.
    pub fn is_configured(&self) -> bool {
        let key = self.supabase_anon_key.expose_secret();
        self.supabase_url != self.variant.supabase_url_placeholder()
            && key != self.variant.supabase_anon_key_placeholder()
            && self.supabase_url.starts_with(constants::SECURE_URL_PREFIX)
            && key.starts_with(constants::ANON_KEY_PREFIX)
    }

    /// Truncated preview of the anonymous key for diagnostics.
    ///
    /// Only the first [`constants::KEY_PREVIEW_CHARS`] characters are ever
    /// shown; the full secret never reaches the log sink.
    pub fn anon_key_preview(&self) -> String {
        let preview: String = self
            .supabase_anon_key
            .expose_secret()
            .chars()
            .take(constants::KEY_PREVIEW_CHARS)
            .collect();
        format!("{preview}...")
    }

    /// Multi-line remediation text for an unconfigured state.
    ///
    /// Lists the required values, where to obtain and set them, and the
    /// current (invalid) values with the anonymous key redacted.
    pub fn setup_report(&self) -> String {
        match self.variant {
            Variant::Production => format!(
                "PRODUCTION CONFIGURATION ERROR\n\
                 \n\
                 Environment variables required:\n\
                 - {url_var}: your Supabase project URL\n\
                 - {key_var}: your Supabase anonymous key\n\
                 - {client_var}: your Google OAuth client ID\n\
                 \n\
                 Current status:\n\
                 - Supabase URL: {url}\n\
                 - Anon key: {key}\n\
                 - Google client ID: {client}\n\
                 \n\
                 Set these in your hosting platform's environment variable settings.",
                url_var = constants::ENV_SUPABASE_URL,
                key_var = constants::ENV_SUPABASE_ANON_KEY,
                client_var = constants::ENV_GOOGLE_CLIENT_ID,
                url = self.supabase_url,
                key = self.anon_key_preview(),
                client = self.google_client_id.as_deref().unwrap_or("(unset)"),
            ),
            Variant::Template => format!(
                "CONFIGURATION ERROR: configuration not set up\n\
                 \n\
                 1. Copy the configuration template into your local config\n\
                 2. Update it with your Supabase credentials from:\n\
                 \x20   https://supabase.com/dashboard -> Your Project -> Settings -> API\n\
                 3. For production deployments, supply {url_var} and {key_var}\n\
                 \x20   through your hosting platform's environment variable settings\n\
                 \n\
                 Current status:\n\
                 - Supabase URL: {url}\n\
                 - Anon key: {key}\n\
                 - Environment: {env}",
                url_var = constants::ENV_SUPABASE_URL,
                key_var = constants::ENV_SUPABASE_ANON_KEY,
                url = self.supabase_url,
                key = self.anon_key_preview(),
                env = self.environment_label(),
            ),
        }
    }

    /// Validate the configuration once at bootstrap, emitting diagnostics.
    ///
    /// The production variant logs its environment and derived URLs before
    /// validating. On an unconfigured state the full remediation report is
    /// logged at error level and an error returned; the caller decides
    /// whether to abort bootstrap. There is no retry path here.
    pub fn init(&self, ctx: &RuntimeContext) -> Result<(), ConfigError> {
        if self.variant == Variant::Production {
            tracing::info!(
                environment = self.environment_label(),
                base_url = %self.base_url(ctx),
                auth_redirect_url = %self.auth_redirect_url(ctx),
                "initializing {}",
                self.app_name,
            );
        }

        if !self.is_configured() {
            tracing::error!("{}", self.setup_report());
            return Err(ConfigError::NotConfigured {
                app_name: self.app_name.clone(),
                variant: self.variant,
            });
        }

        tracing::info!("{} configuration loaded successfully", self.app_name);
        Ok(())
    }
}
