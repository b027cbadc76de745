//! PostgREST adapters for the Supabase-hosted tables.

mod http_store;

pub use http_store::{PostgrestGroceryStore, PostgrestProfileStore};

pub(crate) use http_store::RestTransport;
