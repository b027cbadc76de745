//! Driven ports over the two remote tables.
//!
//! The domain owns the operation shapes and the error contract so consumers
//! stay agnostic of the PostgREST adapter behind them. Each trait exposes
//! strongly typed errors so adapters map their failures into predictable
//! variants instead of returning `anyhow::Result`.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Grocery, NewGrocery, Profile};

/// Errors surfaced while talking to the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StoreError {
    /// The client is not configured well enough to build a request.
    ///
    /// This is the lazy surfacing point for empty or malformed endpoint
    /// settings; construction of the handle itself never fails on them.
    #[error("store configuration unusable: {message}")]
    Configuration {
        /// Human-readable description of the configuration problem.
        message: String,
    },
    /// Network transport failed before a response was received.
    #[error("store transport failed: {message}")]
    Transport {
        /// Human-readable description of the transport failure.
        message: String,
    },
    /// The request exceeded its timeout.
    #[error("store request timed out: {message}")]
    Timeout {
        /// Human-readable description of the timeout.
        message: String,
    },
    /// The remote store rate-limited the request.
    #[error("store rate limited request: {message}")]
    RateLimited {
        /// Human-readable description of the rejection.
        message: String,
    },
    /// The anon key was missing, invalid, or blocked by a row policy.
    #[error("store rejected credentials: {message}")]
    Unauthorized {
        /// Human-readable description of the rejection.
        message: String,
    },
    /// The remote store rejected the request as malformed.
    #[error("store request invalid: {message}")]
    InvalidRequest {
        /// Human-readable description of the rejection.
        message: String,
    },
    /// The response body could not be decoded into the expected rows.
    #[error("store response decode failed: {message}")]
    Decode {
        /// Human-readable description of the decode failure.
        message: String,
    },
}

impl StoreError {
    /// Helper for configuration errors.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Helper for transport errors.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Helper for timeout errors.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Helper for rate-limit errors.
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited {
            message: message.into(),
        }
    }

    /// Helper for credential rejections.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Helper for malformed-request rejections.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Helper for decode errors.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Return whether retrying this error is expected to help.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Timeout { .. } | Self::RateLimited { .. }
        )
    }
}

/// Port for reading participant profiles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch every profile.
    async fn list(&self) -> Result<Vec<Profile>, StoreError>;

    /// Fetch one profile by identifier, `None` when no row matches.
    async fn find(&self, id: &str) -> Result<Option<Profile>, StoreError>;
}

/// Port for reading and mutating grocery list items.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GroceryStore: Send + Sync {
    /// Fetch every list item, newest first.
    async fn list(&self) -> Result<Vec<Grocery>, StoreError>;

    /// Insert a new item and return the stored row.
    async fn add(&self, item: NewGrocery) -> Result<Grocery, StoreError>;

    /// Set the ticked-off flag on one item.
    async fn set_done(&self, id: &str, is_done: bool) -> Result<(), StoreError>;

    /// Attach a photo URL to one item.
    async fn attach_photo(&self, id: &str, photo_url: &str) -> Result<(), StoreError>;

    /// Delete one item.
    async fn remove(&self, id: &str) -> Result<(), StoreError>;
}

/// Fixture implementation returning no profiles.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureProfileStore;

#[async_trait]
impl ProfileStore for FixtureProfileStore {
    async fn list(&self) -> Result<Vec<Profile>, StoreError> {
        Ok(Vec::new())
    }

    async fn find(&self, _id: &str) -> Result<Option<Profile>, StoreError> {
        Ok(None)
    }
}

/// Fixture implementation with an always-empty list.
///
/// `add` echoes the payload back as a stored row with a fixed identifier and
/// the epoch timestamp so assertions stay deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureGroceryStore;

#[async_trait]
impl GroceryStore for FixtureGroceryStore {
    async fn list(&self) -> Result<Vec<Grocery>, StoreError> {
        Ok(Vec::new())
    }

    async fn add(&self, item: NewGrocery) -> Result<Grocery, StoreError> {
        Ok(Grocery {
            id: "fixture-grocery".to_owned(),
            name: item.name,
            added_by: item.added_by,
            is_done: false,
            photo_url: item.photo_url,
            created_at: chrono::DateTime::UNIX_EPOCH,
        })
    }

    async fn set_done(&self, _id: &str, _is_done: bool) -> Result<(), StoreError> {
        Ok(())
    }

    async fn attach_photo(&self, _id: &str, _photo_url: &str) -> Result<(), StoreError> {
        Ok(())
    }

    async fn remove(&self, _id: &str) -> Result<(), StoreError> {
        Ok(())
    }
}
