use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Category;

/// Synthesized image reference with fixed dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Thumbnail {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Thumbnail {
    pub fn new(url: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            url: url.into(),
            width: Some(width),
            height: Some(height),
        }
    }
}

/// Thumbnail list of a canonical item.
///
/// Songs with a media id get a synthesized list; every other item keeps the
/// upstream entries exactly as delivered, whatever keys they carry. Both
/// serialize as a plain JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Thumbnails {
    Synthesized(Vec<Thumbnail>),
    Upstream(Vec<Value>),
}

impl Default for Thumbnails {
    fn default() -> Self {
        Self::Upstream(Vec::new())
    }
}

impl Thumbnails {
    pub fn len(&self) -> usize {
        match self {
            Self::Synthesized(entries) => entries.len(),
            Self::Upstream(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// String `url` of each entry, in order; upstream entries without one
    /// are skipped.
    pub fn urls(&self) -> Vec<&str> {
        match self {
            Self::Synthesized(entries) => entries.iter().map(|thumb| thumb.url.as_str()).collect(),
            Self::Upstream(entries) => entries
                .iter()
                .filter_map(|entry| entry.get("url").and_then(Value::as_str))
                .collect(),
        }
    }
}

/// Category tag plus the fields that only exist for that category.
///
/// Serialized inline with the item, tagged by `type`, so a song carries
/// `artists`, an album `year` and an artist `subscribers`; nothing else does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemDetails {
    Song { artists: Value },
    Album { year: Value },
    Artist { subscribers: Value },
    Playlist,
    Unknown,
}

impl ItemDetails {
    pub const fn category(&self) -> Category {
        match self {
            Self::Song { .. } => Category::Song,
            Self::Album { .. } => Category::Album,
            Self::Artist { .. } => Category::Artist,
            Self::Playlist => Category::Playlist,
            Self::Unknown => Category::Unknown,
        }
    }
}

/// Unified output record produced by normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalItem {
    #[serde(flatten)]
    pub details: ItemDetails,
    pub id: Option<String>,
    pub title: Option<String>,
    pub thumbnails: Thumbnails,
}

impl CanonicalItem {
    pub const fn category(&self) -> Category {
        self.details.category()
    }

    /// Deduplication identity: `(category, id)`.
    pub fn identity(&self) -> (Category, Option<&str>) {
        (self.category(), self.id.as_deref())
    }
}
