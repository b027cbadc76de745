//! Grocery list item rows and insert payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single item on the shared grocery list.
///
/// Rows live in the remote `groceries` table. `id` and `created_at` are
/// assigned server-side; clients insert via [`NewGrocery`] and receive the
/// completed row back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Grocery {
    /// Stable row identifier assigned by the remote database.
    pub id: String,
    /// Item label as typed by the participant.
    pub name: String,
    /// Identifier of the [`Profile`](crate::models::Profile) that added the
    /// item.
    pub added_by: String,
    /// Whether the item has been ticked off.
    pub is_done: bool,
    /// Photo attached to the item, when one has been uploaded.
    pub photo_url: Option<String>,
    /// Server-side insertion timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new list item.
///
/// Omits the server-generated columns; `photo_url` is skipped entirely when
/// absent so the remote default applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewGrocery {
    /// Item label as typed by the participant.
    pub name: String,
    /// Identifier of the profile adding the item.
    pub added_by: String,
    /// Optional photo to attach at insert time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl NewGrocery {
    /// Build an insert payload without a photo.
    #[must_use]
    pub fn new(name: impl Into<String>, added_by: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            added_by: added_by.into(),
            photo_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Serialisation contract tests for [`Grocery`] and [`NewGrocery`].

    use super::*;

    use serde_json::json;

    fn sample_row() -> serde_json::Value {
        json!({
            "id": "a3bb189e-8bf9-3888-9912-ace4e6543002",
            "name": "Oat milk",
            "added_by": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
            "is_done": false,
            "photo_url": null,
            "created_at": "2025-03-14T09:26:53.589793+00:00"
        })
    }

    #[test]
    fn decodes_a_row_with_null_photo() {
        let grocery: Grocery =
            serde_json::from_value(sample_row()).expect("row should decode");
        assert_eq!(grocery.name, "Oat milk");
        assert!(!grocery.is_done);
        assert!(grocery.photo_url.is_none());
        assert_eq!(grocery.created_at.timezone(), Utc);
    }

    #[test]
    fn decodes_a_row_with_a_photo() {
        let mut row = sample_row();
        row["photo_url"] = json!("https://example.invalid/storage/oat-milk.jpg");

        let grocery: Grocery = serde_json::from_value(row).expect("row should decode");
        assert_eq!(
            grocery.photo_url.as_deref(),
            Some("https://example.invalid/storage/oat-milk.jpg")
        );
    }

    #[test]
    fn rejects_unknown_columns() {
        let mut row = sample_row();
        row["quantity"] = json!(3);

        assert!(serde_json::from_value::<Grocery>(row).is_err());
    }

    #[test]
    fn rejects_rows_missing_required_columns() {
        let row = json!({
            "id": "a3bb189e-8bf9-3888-9912-ace4e6543002",
            "name": "Oat milk"
        });

        assert!(serde_json::from_value::<Grocery>(row).is_err());
    }

    #[test]
    fn insert_payload_omits_absent_photo() {
        let payload = serde_json::to_value(NewGrocery::new("Oat milk", "user-1"))
            .expect("payload should encode");

        assert_eq!(
            payload,
            json!({ "name": "Oat milk", "added_by": "user-1" })
        );
    }

    #[test]
    fn insert_payload_includes_photo_when_present() {
        let mut item = NewGrocery::new("Oat milk", "user-1");
        item.photo_url = Some("https://example.invalid/storage/oat-milk.jpg".to_owned());

        let payload = serde_json::to_value(item).expect("payload should encode");
        assert_eq!(
            payload["photo_url"],
            json!("https://example.invalid/storage/oat-milk.jpg")
        );
    }
}
