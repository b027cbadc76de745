//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! This module follows the hexagonal architecture pattern: adapters are thin
//! translators between domain types and infrastructure representations and
//! contain no business logic.
//!
//! - **postgrest**: Supabase PostgREST-backed stores using `reqwest`.

pub mod postgrest;
