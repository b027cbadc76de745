//! Participant profile row.

use serde::{Deserialize, Serialize};

/// A participant in the shared grocery list.
///
/// Rows live in the remote `profiles` table; this code never creates them,
/// it only reads them to attribute list items to people.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    /// Stable row identifier assigned by the remote database.
    pub id: String,
    /// Display name shown next to the participant's items.
    pub name: String,
    /// Accent colour used to badge the participant's entries.
    pub color: String,
}
