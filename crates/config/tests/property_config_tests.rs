//! Property-based tests for configuration derivation and validation.
//!
//! These tests verify the derived-URL and configuredness contracts with
//! randomly generated inputs to catch edge cases that might not be covered
//! by unit tests.
//!
//! Test coverage:
//! - auth_redirect_url: Always extends base_url with the callback path
//! - base_url: Total over is_production for the template variant
//! - is_configured: Accepts every structurally valid non-placeholder pair
//! - anon_key_preview: Bounded length, never the full long key

use proptest::prelude::*;
use url::Url;

use socialcard_config::{Config, ConfigLoader, RuntimeContext};

/// Strategy for generating page URLs with tuple origins.
///
/// Generates URLs in the form:
/// - `https://{host}.{domain}/{path}` for default-port scenarios
/// - `https://{host}.{domain}:{port}/{path}` for explicit-port scenarios
fn page_url_strategy() -> impl Strategy<Value = Url> {
    let host_strategy = "[a-z][a-z0-9]{0,10}";
    let domain_strategy = prop_oneof![
        Just("socialcard.pro"),
        Just("example.com"),
        Just("vercel.app"),
    ];
    let port_strategy = proptest::option::of(1024u16..=65535u16);
    let path_strategy = "[a-z0-9/]{0,12}";

    (host_strategy, domain_strategy, port_strategy, path_strategy).prop_map(
        |(host, domain, port, path)| {
            let url = match port {
                Some(port) => format!("https://{host}.{domain}:{port}/{path}"),
                None => format!("https://{host}.{domain}/{path}"),
            };
            Url::parse(&url).expect("generated URL should parse")
        },
    )
}

/// Strategy for generating Supabase project URLs distinct from the
/// placeholder (the character class cannot produce `your-project`).
fn supabase_url_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{3,19}".prop_map(|project| format!("https://{project}.supabase.co"))
}

/// Strategy for generating anonymous keys with a JWT-shaped prefix.
fn anon_key_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_\\-]{8,80}".prop_map(|body| format!("eyJ{body}"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// The redirect URL is the base URL plus the fixed callback path, for
    /// any browser context the production variant can observe.
    #[test]
    fn test_auth_redirect_extends_base_url(page in page_url_strategy()) {
        let config = ConfigLoader::new().build();
        let ctx = RuntimeContext::browser(page);

        let base = config.base_url(&ctx);
        prop_assert_eq!(
            config.auth_redirect_url(&ctx),
            format!("{}/auth-callback.html", base)
        );
    }

    /// Template base URLs are fixed: local development origin when
    /// `is_production` is off, the placeholder domain when it is on. The
    /// browser context is never consulted.
    #[test]
    fn test_template_base_url_total(page in page_url_strategy(), is_production in any::<bool>()) {
        let mut config = Config::template();
        config.is_production = is_production;
        let ctx = RuntimeContext::browser(page);

        let expected = if is_production {
            "https://your-domain.com"
        } else {
            "http://localhost:3001"
        };
        prop_assert_eq!(config.base_url(&ctx), expected);
        prop_assert_eq!(
            config.auth_redirect_url(&ctx),
            format!("{}/auth-callback.html", expected)
        );
    }

    /// Every https URL that differs from the placeholder, combined with
    /// every JWT-shaped key, validates.
    #[test]
    fn test_well_formed_credentials_validate(
        url in supabase_url_strategy(),
        key in anon_key_strategy()
    ) {
        let config = ConfigLoader::new()
            .with_supabase_url(url)
            .with_supabase_anon_key(key)
            .build();
        prop_assert!(config.is_configured());

        let ctx = RuntimeContext::headless();
        prop_assert!(config.init(&ctx).is_ok());
    }

    /// The diagnostic preview shows at most 20 key characters and never the
    /// tail of a long key.
    #[test]
    fn test_anon_key_preview_is_bounded(key in anon_key_strategy()) {
        let config = ConfigLoader::new()
            .with_supabase_anon_key(key.clone())
            .build();

        let preview = config.anon_key_preview();
        prop_assert!(preview.ends_with("..."));
        prop_assert!(preview.chars().count() <= 23);
        if key.chars().count() > 20 {
            prop_assert!(!preview.contains(&key));
        }
    }
}
