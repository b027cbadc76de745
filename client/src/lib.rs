//! Client-side data access for the Pantry shared grocery list.
//!
//! The crate wires three layers together:
//!
//! - [`config`] loads the Supabase endpoint and anon key from the process
//!   environment, tolerating absent values.
//! - [`domain`] defines the store ports and the error taxonomy consumers
//!   match on.
//! - [`outbound`] implements those ports against the Supabase PostgREST
//!   surface using `reqwest`.
//!
//! [`Supabase`] is the single shared handle: the application constructs it
//! once from [`SupabaseSettings`] and passes clones to whichever components
//! need table access. Construction performs no network I/O; misconfiguration
//! surfaces as [`domain::ports::StoreError::Configuration`] on first use.

pub mod config;
pub mod domain;
pub mod models;
pub mod outbound;
pub mod supabase;

pub use config::SupabaseSettings;
pub use supabase::Supabase;
