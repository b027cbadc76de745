//! Supabase client factory and shared handle.
//!
//! The application builds one [`Supabase`] from [`SupabaseSettings`] at
//! startup and passes clones to whichever components need table access.
//! Construction performs no network I/O and never fails because of empty
//! settings; an unusable endpoint surfaces from the first store operation
//! instead.

use std::time::Duration;

use reqwest::Client;
use tracing::warn;

use crate::config::SupabaseSettings;
use crate::outbound::postgrest::{PostgrestGroceryStore, PostgrestProfileStore, RestTransport};

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared handle over the remote Supabase project.
///
/// Clones are cheap and alias one reference-counted HTTP client, so passing
/// the handle around by clone preserves the single shared connection pool.
#[derive(Debug, Clone)]
pub struct Supabase {
    transport: RestTransport,
}

impl Supabase {
    /// Build a handle with the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be
    /// constructed (for example a TLS backend failure), never because the
    /// settings are empty.
    pub fn new(settings: &SupabaseSettings) -> Result<Self, reqwest::Error> {
        Self::with_timeout(settings, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Build a handle with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be
    /// constructed.
    pub fn with_timeout(
        settings: &SupabaseSettings,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_http_client(settings, client))
    }

    /// Build a handle around an injected HTTP client.
    ///
    /// Useful in tests and when the application already maintains a shared
    /// reqwest client with its own middleware or timeout policy.
    #[must_use]
    pub fn with_http_client(settings: &SupabaseSettings, client: Client) -> Self {
        if !settings.is_configured() {
            warn!(
                url_set = !settings.url.trim().is_empty(),
                anon_key_set = !settings.anon_key.trim().is_empty(),
                "supabase settings incomplete; store operations will fail until configured"
            );
        }
        Self {
            transport: RestTransport {
                client,
                endpoint: settings.url.clone(),
                anon_key: settings.anon_key.clone(),
            },
        }
    }

    /// The endpoint URL exactly as configured.
    #[must_use]
    pub fn endpoint_url(&self) -> &str {
        self.transport.endpoint.as_str()
    }

    /// The anon key exactly as configured.
    #[must_use]
    pub fn anon_key(&self) -> &str {
        self.transport.anon_key.as_str()
    }

    /// Store adapter for the `profiles` table.
    #[must_use]
    pub fn profiles(&self) -> PostgrestProfileStore {
        PostgrestProfileStore::new(self.transport.clone())
    }

    /// Store adapter for the `groceries` table.
    #[must_use]
    pub fn groceries(&self) -> PostgrestGroceryStore {
        PostgrestGroceryStore::new(self.transport.clone())
    }
}
