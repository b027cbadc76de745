//! Domain ports for the remote grocery store.
//!
//! The application talks to the two remote tables exclusively through the
//! traits defined here, keeping consumers adapter-agnostic and easy to test
//! with mocks or fixtures.

pub mod ports;

pub use self::ports::{GroceryStore, ProfileStore, StoreError};
