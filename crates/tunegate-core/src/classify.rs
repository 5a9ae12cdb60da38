//! Category inference for upstream records.
//!
//! Feed sections deliver records without a category, so the category is
//! inferred from which identifier fields the record carries. The rules are
//! evaluated in order and the first match wins.
//!
//! # Known limitation
//!
//! A `browseId` is shared by albums and artists, so a record that only has a
//! browse id cannot be told apart. Such records are classified as
//! [`Category::Album`]. Downstream consumers rely on that default, so it is
//! kept as is; see [`AMBIGUOUS_BROWSE_ID`].

use crate::domain::{Category, RawRecord};

/// One classification rule: records containing `field` belong to `category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierRule {
    pub field: &'static str,
    pub category: Category,
}

/// Ordered rules used for feed records.
pub const FEED_RULES: [ClassifierRule; 3] = [
    ClassifierRule {
        field: "videoId",
        category: Category::Song,
    },
    ClassifierRule {
        field: "playlistId",
        category: Category::Playlist,
    },
    AMBIGUOUS_BROWSE_ID,
];

/// Browse ids identify albums and artists alike; album is the default call.
pub const AMBIGUOUS_BROWSE_ID: ClassifierRule = ClassifierRule {
    field: "browseId",
    category: Category::Album,
};

/// Infers the category of a feed record.
///
/// A field counts when its key exists, even if the value is `null`. Records
/// matching no rule are [`Category::Unknown`].
pub fn classify(raw: &RawRecord) -> Category {
    FEED_RULES
        .iter()
        .find(|rule| raw.contains(rule.field))
        .map_or(Category::Unknown, |rule| rule.category)
}

/// Maps an explicit search `resultType` tag to a category.
///
/// Unrecognized or missing tags (videos, episodes, profiles, ...) fall back
/// to [`Category::Song`].
pub fn classify_result_type(tag: Option<&str>) -> Category {
    match tag.and_then(|tag| tag.parse::<Category>().ok()) {
        Some(Category::Unknown) | None => Category::Song,
        Some(category) => category,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(value: serde_json::Value) -> RawRecord {
        RawRecord::from_value(value)
    }

    #[test]
    fn media_id_wins_over_playlist_id() {
        let raw = record(json!({"videoId": "v1", "playlistId": "PL1", "browseId": "MPRE"}));
        assert_eq!(classify(&raw), Category::Song);
    }

    #[test]
    fn playlist_id_wins_over_browse_id() {
        let raw = record(json!({"playlistId": "PL1", "browseId": "VLPL1"}));
        assert_eq!(classify(&raw), Category::Playlist);
    }

    #[test]
    fn browse_id_alone_defaults_to_album() {
        let raw = record(json!({"browseId": "UCartist", "subscribers": "1M"}));
        assert_eq!(classify(&raw), Category::Album);
    }

    #[test]
    fn null_valued_key_still_counts_as_present() {
        let raw = record(json!({"videoId": null, "browseId": "MPRE1"}));
        assert_eq!(classify(&raw), Category::Song);
    }

    #[test]
    fn records_without_identifiers_are_unknown() {
        assert_eq!(classify(&record(json!({"title": "x"}))), Category::Unknown);
    }

    #[test]
    fn search_tags_map_to_categories_with_song_fallback() {
        assert_eq!(classify_result_type(Some("album")), Category::Album);
        assert_eq!(classify_result_type(Some("artist")), Category::Artist);
        assert_eq!(classify_result_type(Some("playlist")), Category::Playlist);
        assert_eq!(classify_result_type(Some("song")), Category::Song);
        assert_eq!(classify_result_type(Some("video")), Category::Song);
        assert_eq!(classify_result_type(Some("unknown")), Category::Song);
        assert_eq!(classify_result_type(None), Category::Song);
    }
}
