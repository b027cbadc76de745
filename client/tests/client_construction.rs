//! Behavioural tests for handle construction and lazy misconfiguration.

use env_lock::lock_env;
use pantry_client::domain::ports::StoreError;
use pantry_client::domain::{GroceryStore, ProfileStore};
use pantry_client::{Supabase, SupabaseSettings};
use rstest::rstest;

fn empty_settings() -> SupabaseSettings {
    SupabaseSettings {
        url: String::new(),
        anon_key: String::new(),
    }
}

fn configured_settings() -> SupabaseSettings {
    SupabaseSettings {
        url: "https://abcdefgh.supabase.co".to_owned(),
        anon_key: "anon-key-123".to_owned(),
    }
}

#[rstest]
fn empty_settings_still_produce_a_handle() {
    let handle = Supabase::new(&empty_settings()).expect("handle should build");
    assert_eq!(handle.endpoint_url(), "");
    assert_eq!(handle.anon_key(), "");
}

#[rstest]
fn configured_values_pass_through_unmodified() {
    let handle = Supabase::new(&configured_settings()).expect("handle should build");
    assert_eq!(handle.endpoint_url(), "https://abcdefgh.supabase.co");
    assert_eq!(handle.anon_key(), "anon-key-123");
}

#[rstest]
fn clones_alias_the_same_configuration() {
    let handle = Supabase::new(&configured_settings()).expect("handle should build");
    let clone = handle.clone();
    assert_eq!(clone.endpoint_url(), handle.endpoint_url());
    assert_eq!(clone.anon_key(), handle.anon_key());
}

#[rstest]
fn environment_loading_feeds_the_factory() {
    let _guard = lock_env([
        (
            "PUBLIC_SUPABASE_URL",
            Some("https://abcdefgh.supabase.co".to_owned()),
        ),
        ("PUBLIC_SUPABASE_ANON_KEY", Some("anon-key-123".to_owned())),
    ]);

    let settings = SupabaseSettings::from_env().expect("settings should load");
    let handle = Supabase::new(&settings).expect("handle should build");
    assert_eq!(handle.endpoint_url(), "https://abcdefgh.supabase.co");
    assert_eq!(handle.anon_key(), "anon-key-123");
}

#[rstest]
fn missing_environment_still_produces_a_handle() {
    let _guard = lock_env([
        ("PUBLIC_SUPABASE_URL", None::<String>),
        ("PUBLIC_SUPABASE_ANON_KEY", None::<String>),
    ]);

    let settings = SupabaseSettings::from_env().expect("settings should load");
    let handle = Supabase::new(&settings).expect("handle should build");
    assert_eq!(handle.endpoint_url(), "");
}

#[tokio::test]
async fn grocery_operations_fail_lazily_on_empty_settings() {
    let handle = Supabase::new(&empty_settings()).expect("handle should build");
    let error = handle
        .groceries()
        .list()
        .await
        .expect_err("list must fail without an endpoint");
    assert!(
        matches!(error, StoreError::Configuration { .. }),
        "empty endpoint should surface as Configuration, got {error:?}",
    );
}

#[tokio::test]
async fn profile_operations_fail_lazily_on_malformed_endpoints() {
    let settings = SupabaseSettings {
        url: "not-a-url".to_owned(),
        anon_key: "anon-key-123".to_owned(),
    };
    let handle = Supabase::new(&settings).expect("handle should build");
    let error = handle
        .profiles()
        .find("user-1")
        .await
        .expect_err("find must fail without a parseable endpoint");
    assert!(
        matches!(error, StoreError::Configuration { .. }),
        "malformed endpoint should surface as Configuration, got {error:?}",
    );
}
