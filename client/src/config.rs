//! Supabase connection settings loaded via OrthoConfig.

use std::ffi::OsString;
use std::sync::Arc;

use ortho_config::{OrthoConfig, OrthoError};
use serde::Deserialize;

/// Connection settings for the remote Supabase project.
///
/// Both values are public-facing (the anon key is a client-side credential
/// scoped by server-side row policies) and both default to the empty string
/// when unset, so loading never fails on a machine without them. An
/// unconfigured value is only detected when a store operation first needs
/// the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PUBLIC_SUPABASE")]
pub struct SupabaseSettings {
    /// Project endpoint, e.g. `https://abcdefgh.supabase.co`.
    #[ortho_config(default = String::new())]
    pub url: String,
    /// Anonymous API key sent with every request.
    #[ortho_config(default = String::new())]
    pub anon_key: String,
}

impl SupabaseSettings {
    /// Load settings from `PUBLIC_SUPABASE_URL` and
    /// `PUBLIC_SUPABASE_ANON_KEY`.
    ///
    /// Missing variables fall back to empty strings rather than failing, so
    /// a handle can still be constructed on an unconfigured machine.
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration layers cannot be merged
    /// (for example a present but undecodable configuration file), never
    /// because a value is absent.
    pub fn from_env() -> Result<Self, Arc<OrthoError>> {
        Self::load_from_iter([OsString::from("pantry-client")])
    }

    /// Report whether both values are present and non-blank.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty() && !self.anon_key.trim().is_empty()
    }
}
