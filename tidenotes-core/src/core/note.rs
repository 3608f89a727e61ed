use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A note row as stored by the backend.
///
/// Field names match the backend columns, so the same shape is used on the
/// wire and across the IPC boundary. `tags` may be stored as SQL `NULL` for
/// rows created before the column existed; those deserialize as an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub content: String,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Returns whether this note matches a search needle.
    ///
    /// `needle` must already be lowercased; the match is a substring test
    /// against the lowercased content and each lowercased tag.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        self.content.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

/// Insert payload for a new note. Both timestamps are stamped by the caller.
#[derive(Debug, Clone, Serialize)]
pub struct NewNote {
    pub content: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Update payload for an existing note. Content and tags are replaced
/// wholesale and `updated_at` is refreshed; `created_at` is never touched.
#[derive(Debug, Clone, Serialize)]
pub struct NoteChanges {
    pub content: String,
    pub tags: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

/// Splits a comma-separated tag string into individual tags.
///
/// Each entry is trimmed of surrounding whitespace; entries left empty by
/// stray commas are dropped. Order and case are preserved.
#[must_use]
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn null_to_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(tags.unwrap_or_default())
}
