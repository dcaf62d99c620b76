//! Centralized constants for the SocialCard Pro configuration crate.
//!
//! Placeholder strings, environment variable names, and default URLs live
//! here to avoid magic string duplication across modules.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application display name, used in diagnostics and error messages.
pub const APP_NAME: &str = "SocialCard Pro";

/// Application version reported in the configuration record.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable supplying the Supabase project URL.
pub const ENV_SUPABASE_URL: &str = "SUPABASE_URL";

/// Environment variable supplying the Supabase anonymous key.
pub const ENV_SUPABASE_ANON_KEY: &str = "SUPABASE_ANON_KEY";

/// Environment variable supplying the Google OAuth client ID.
pub const ENV_GOOGLE_CLIENT_ID: &str = "GOOGLE_CLIENT_ID";

// =============================================================================
// Build-Time Injected Values
// =============================================================================

/// Supabase project URL captured when the release artifact was built, if the
/// build environment supplied one. Runtime environment variables still win.
pub const BUILD_SUPABASE_URL: Option<&str> = option_env!("SUPABASE_URL");

/// Supabase anonymous key captured at build time.
pub const BUILD_SUPABASE_ANON_KEY: Option<&str> = option_env!("SUPABASE_ANON_KEY");

/// Google OAuth client ID captured at build time.
pub const BUILD_GOOGLE_CLIENT_ID: Option<&str> = option_env!("GOOGLE_CLIENT_ID");

// =============================================================================
// Placeholder Defaults
// =============================================================================

/// Non-functional Supabase URL the production variant falls back to when no
/// value was injected.
pub const PLACEHOLDER_SUPABASE_URL: &str = "https://your-project.supabase.co";

/// Non-functional anonymous key fallback for the production variant.
pub const PLACEHOLDER_SUPABASE_ANON_KEY: &str = "your-anon-key";

/// Non-functional Google client ID fallback for the production variant.
pub const PLACEHOLDER_GOOGLE_CLIENT_ID: &str = "your-google-client-id";

/// Instructional Supabase URL placeholder carried by the development
/// template until a developer replaces it by hand.
pub const TEMPLATE_SUPABASE_URL: &str = "YOUR_SUPABASE_URL_HERE";

/// Instructional anonymous key placeholder in the development template.
pub const TEMPLATE_SUPABASE_ANON_KEY: &str = "YOUR_SUPABASE_ANON_KEY_HERE";

// =============================================================================
// Base URLs
// =============================================================================

/// Production origin assumed when no browser context is available.
pub const PRODUCTION_FALLBACK_URL: &str = "https://socialcard-pro.vercel.app";

/// Placeholder production domain used by the development template.
pub const TEMPLATE_PRODUCTION_URL: &str = "https://your-domain.com";

/// Local development server origin.
pub const LOCAL_DEV_URL: &str = "http://localhost:3001";

/// Path appended to the base URL to form the OAuth callback target.
pub const AUTH_CALLBACK_PATH: &str = "/auth-callback.html";

// =============================================================================
// Validation
// =============================================================================

/// Scheme prefix a usable Supabase URL must carry.
pub const SECURE_URL_PREFIX: &str = "https://";

/// Prefix of a base64url-encoded JWT header; every real anonymous key
/// starts with it.
pub const ANON_KEY_PREFIX: &str = "eyJ";

/// Number of key characters shown in diagnostics before truncation.
pub const KEY_PREVIEW_CHARS: usize = 20;
