//! Reqwest-backed PostgREST store adapters.
//!
//! These adapters own transport details only: URL and filter construction,
//! header assembly, HTTP status mapping, and JSON decoding into model rows.
//! No request is sent until a port operation runs, so an empty or malformed
//! endpoint only surfaces then, as `StoreError::Configuration`.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;
use url::Url;

use crate::domain::ports::{GroceryStore, ProfileStore, StoreError};
use crate::models::{Grocery, NewGrocery, Profile};

const PROFILES_TABLE: &str = "profiles";
const GROCERIES_TABLE: &str = "groceries";

/// Shared transport state behind both table adapters.
///
/// Cloning is cheap: the reqwest client is reference-counted, so every clone
/// aliases one connection pool.
#[derive(Debug, Clone)]
pub(crate) struct RestTransport {
    pub(crate) client: Client,
    pub(crate) endpoint: String,
    pub(crate) anon_key: String,
}

impl RestTransport {
    /// Resolve the REST URL for one table, without filters.
    fn table_url(&self, table: &str) -> Result<Url, StoreError> {
        let base = self.endpoint.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(StoreError::configuration(
                "endpoint URL is empty; set PUBLIC_SUPABASE_URL",
            ));
        }
        Url::parse(&format!("{base}/rest/v1/{table}")).map_err(|error| {
            StoreError::configuration(format!("endpoint URL unparseable: {error}"))
        })
    }

    /// Start a request carrying the anon-key headers Supabase expects.
    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", self.anon_key.as_str())
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", self.anon_key),
            )
            .header(reqwest::header::ACCEPT, "application/json")
    }

    /// Send a request and return the body of a successful response.
    async fn send(&self, request: RequestBuilder) -> Result<Vec<u8>, StoreError> {
        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        Ok(body.to_vec())
    }
}

/// PostgREST-backed [`ProfileStore`].
#[derive(Debug, Clone)]
pub struct PostgrestProfileStore {
    transport: RestTransport,
}

impl PostgrestProfileStore {
    pub(crate) const fn new(transport: RestTransport) -> Self {
        Self { transport }
    }

    fn list_url(&self) -> Result<Url, StoreError> {
        let mut url = self.transport.table_url(PROFILES_TABLE)?;
        url.query_pairs_mut().append_pair("select", "*");
        Ok(url)
    }

    fn find_url(&self, id: &str) -> Result<Url, StoreError> {
        let mut url = self.transport.table_url(PROFILES_TABLE)?;
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("id", &format!("eq.{id}"))
            .append_pair("limit", "1");
        Ok(url)
    }
}

#[async_trait]
impl ProfileStore for PostgrestProfileStore {
    async fn list(&self) -> Result<Vec<Profile>, StoreError> {
        let url = self.list_url()?;
        let body = self.transport.send(self.transport.request(Method::GET, url)).await?;
        decode_rows(&body)
    }

    async fn find(&self, id: &str) -> Result<Option<Profile>, StoreError> {
        let url = self.find_url(id)?;
        let body = self.transport.send(self.transport.request(Method::GET, url)).await?;
        let rows: Vec<Profile> = decode_rows(&body)?;
        Ok(rows.into_iter().next())
    }
}

/// PostgREST-backed [`GroceryStore`].
#[derive(Debug, Clone)]
pub struct PostgrestGroceryStore {
    transport: RestTransport,
}

impl PostgrestGroceryStore {
    pub(crate) const fn new(transport: RestTransport) -> Self {
        Self { transport }
    }

    fn list_url(&self) -> Result<Url, StoreError> {
        let mut url = self.transport.table_url(GROCERIES_TABLE)?;
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("order", "created_at.desc");
        Ok(url)
    }

    fn item_url(&self, id: &str) -> Result<Url, StoreError> {
        let mut url = self.transport.table_url(GROCERIES_TABLE)?;
        url.query_pairs_mut().append_pair("id", &format!("eq.{id}"));
        Ok(url)
    }

    /// Apply a partial update to one row, discarding the response body.
    async fn patch_item(&self, id: &str, patch: serde_json::Value) -> Result<(), StoreError> {
        let url = self.item_url(id)?;
        let request = self
            .transport
            .request(Method::PATCH, url)
            .header("Prefer", "return=minimal")
            .json(&patch);
        self.transport.send(request).await.map(drop)
    }
}

#[async_trait]
impl GroceryStore for PostgrestGroceryStore {
    async fn list(&self) -> Result<Vec<Grocery>, StoreError> {
        let url = self.list_url()?;
        let body = self.transport.send(self.transport.request(Method::GET, url)).await?;
        decode_rows(&body)
    }

    async fn add(&self, item: NewGrocery) -> Result<Grocery, StoreError> {
        let url = self.transport.table_url(GROCERIES_TABLE)?;
        let request = self
            .transport
            .request(Method::POST, url)
            .header("Prefer", "return=representation")
            .json(&item);
        let body = self.transport.send(request).await?;
        let rows: Vec<Grocery> = decode_rows(&body)?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::decode("insert returned no rows"))
    }

    async fn set_done(&self, id: &str, is_done: bool) -> Result<(), StoreError> {
        self.patch_item(id, json!({ "is_done": is_done })).await
    }

    async fn attach_photo(&self, id: &str, photo_url: &str) -> Result<(), StoreError> {
        self.patch_item(id, json!({ "photo_url": photo_url })).await
    }

    async fn remove(&self, id: &str) -> Result<(), StoreError> {
        let url = self.item_url(id)?;
        let request = self
            .transport
            .request(Method::DELETE, url)
            .header("Prefer", "return=minimal");
        self.transport.send(request).await.map(drop)
    }
}

fn decode_rows<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>, StoreError> {
    serde_json::from_slice(body).map_err(|error| {
        debug!(%error, "postgrest row decode failed");
        StoreError::decode(format!("invalid PostgREST payload: {error}"))
    })
}

fn map_transport_error(error: reqwest::Error) -> StoreError {
    if error.is_timeout() {
        StoreError::timeout(error.to_string())
    } else {
        StoreError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> StoreError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), preview)
    };
    debug!(status = status.as_u16(), "postgrest request rejected");

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => StoreError::unauthorized(message),
        StatusCode::TOO_MANY_REQUESTS => StoreError::rate_limited(message),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => StoreError::timeout(message),
        _ if status.is_client_error() => StoreError::invalid_request(message),
        _ => StoreError::transport(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 120;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        let preview: String = compact.chars().take(PREVIEW_CHAR_LIMIT).collect();
        format!("{preview}...")
    } else {
        compact
    }
}
