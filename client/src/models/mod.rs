//! Wire-level data models.
//!
//! Purpose: mirror the two remote tables the application reads and writes.
//! These types are the serde shapes sent to and received from PostgREST;
//! `deny_unknown_fields` keeps them honest against schema drift on the
//! remote side.
//!
//! Public surface:
//! - Profile (alias to `profile::Profile`) — participant row.
//! - Grocery (alias to `grocery::Grocery`) — list item row.
//! - NewGrocery (alias to `grocery::NewGrocery`) — insert payload for a
//!   list item.

pub mod grocery;
pub mod profile;

pub use self::grocery::{Grocery, NewGrocery};
pub use self::profile::Profile;
