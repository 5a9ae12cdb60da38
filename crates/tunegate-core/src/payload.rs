//! Response payloads and their assembly from raw upstream documents.
//!
//! Each `*::from_raw` constructor is total: unexpected document shapes read
//! as empty lists, and individual records go through the classifier, the
//! normalizer and (where the endpoint calls for it) the deduplicator.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::classify::{classify, classify_result_type};
use crate::dedupe::dedupe;
use crate::domain::{CanonicalItem, Category, RawRecord};
use crate::normalize::normalize;

/// One home feed section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedSection {
    #[serde(rename = "sectionTitle")]
    pub section_title: Option<String>,
    pub items: Vec<CanonicalItem>,
}

/// Home feed payload; categories are inferred per record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeFeed {
    pub feed: Vec<FeedSection>,
}

impl HomeFeed {
    /// Builds the feed from a list of sections, deduplicating each section on
    /// its own.
    pub fn from_raw(raw: &Value) -> Self {
        let feed = as_list(raw)
            .iter()
            .map(|section| {
                let section = RawRecord::from_value(section.clone());
                let items = section
                    .list("contents")
                    .iter()
                    .map(|content| {
                        let record = RawRecord::from_value(content.clone());
                        normalize(&record, classify(&record))
                    })
                    .collect();

                FeedSection {
                    section_title: section.text("title").map(str::to_owned),
                    items: dedupe(items),
                }
            })
            .collect();

        Self { feed }
    }
}

/// Search results; categories come from the upstream `resultType` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub results: Vec<CanonicalItem>,
}

impl SearchResults {
    pub fn from_raw(raw: &Value) -> Self {
        let results = as_list(raw)
            .iter()
            .map(|result| {
                let record = RawRecord::from_value(result.clone());
                normalize(&record, classify_result_type(record.text("resultType")))
            })
            .collect();

        Self {
            results: dedupe(results),
        }
    }
}

/// Search suggestions, passed through as delivered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestions {
    pub suggestions: Value,
}

impl Suggestions {
    pub fn from_raw(raw: Value) -> Self {
        Self { suggestions: raw }
    }
}

/// Songs related to a track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedSongs {
    pub related: Vec<CanonicalItem>,
}

impl RelatedSongs {
    /// Collects the records carrying a media id across all sections, in
    /// order, and keeps the first `limit`.
    pub fn from_raw(raw: &Value, limit: usize) -> Self {
        let related = as_list(raw)
            .iter()
            .flat_map(|section| field_list(section, "contents"))
            .map(|content| RawRecord::from_value(content.clone()))
            .filter(|record| record.contains("videoId"))
            .take(limit)
            .map(|record| normalize(&record, Category::Song))
            .collect();

        Self { related }
    }
}

/// Playlist summary as listed on a user profile; fields are copied verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPlaylist {
    pub title: Value,
    #[serde(rename = "playlistId")]
    pub playlist_id: Value,
    pub thumbnails: Value,
    pub count: Value,
}

/// Playlists owned by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPlaylists {
    pub playlists: Vec<UserPlaylist>,
}

impl UserPlaylists {
    pub fn from_raw(raw: &Value) -> Self {
        let playlists = as_list(raw)
            .iter()
            .map(|playlist| {
                let record = RawRecord::from_value(playlist.clone());
                UserPlaylist {
                    title: record.verbatim("title"),
                    playlist_id: record.verbatim("playlistId"),
                    thumbnails: record.verbatim("thumbnails"),
                    count: record.verbatim("count"),
                }
            })
            .collect();

        Self { playlists }
    }
}

/// Chart lists for one country, each deduplicated on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charts {
    pub songs: Vec<CanonicalItem>,
    pub artists: Vec<CanonicalItem>,
    #[serde(rename = "genrePlaylists")]
    pub genre_playlists: Vec<CanonicalItem>,
}

impl Charts {
    pub fn from_raw(raw: &Value) -> Self {
        Self {
            songs: dedupe(normalize_all(field_list(raw, "videos"), Category::Song)),
            artists: dedupe(normalize_all(field_list(raw, "artists"), Category::Artist)),
            genre_playlists: dedupe(normalize_all(
                field_list(raw, "genres"),
                Category::Playlist,
            )),
        }
    }
}

/// Artist page: the artist itself plus its songs and albums.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistDetail {
    pub artist: CanonicalItem,
    pub songs: Vec<CanonicalItem>,
    pub albums: Vec<CanonicalItem>,
}

impl ArtistDetail {
    /// `songs` and `albums` may be plain lists or shelves with a `results`
    /// list; both shapes are accepted.
    pub fn from_raw(raw: &Value) -> Self {
        Self {
            artist: normalize(&RawRecord::from_value(raw.clone()), Category::Artist),
            songs: normalize_all(shelf(raw, "songs"), Category::Song),
            albums: normalize_all(shelf(raw, "albums"), Category::Album),
        }
    }
}

/// Album page with its tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumDetail {
    pub album: CanonicalItem,
    pub tracks: Vec<CanonicalItem>,
}

impl AlbumDetail {
    pub fn from_raw(raw: &Value) -> Self {
        Self {
            album: normalize(&RawRecord::from_value(raw.clone()), Category::Album),
            tracks: normalize_all(field_list(raw, "tracks"), Category::Song),
        }
    }
}

/// Playlist page with its tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistDetail {
    pub playlist: CanonicalItem,
    pub tracks: Vec<CanonicalItem>,
}

impl PlaylistDetail {
    pub fn from_raw(raw: &Value) -> Self {
        Self {
            playlist: normalize(&RawRecord::from_value(raw.clone()), Category::Playlist),
            tracks: normalize_all(field_list(raw, "tracks"), Category::Song),
        }
    }
}

fn normalize_all(records: &[Value], category: Category) -> Vec<CanonicalItem> {
    records
        .iter()
        .map(|record| normalize(&RawRecord::from_value(record.clone()), category))
        .collect()
}

fn as_list(value: &Value) -> &[Value] {
    value.as_array().map(Vec::as_slice).unwrap_or(&[])
}

fn field_list<'a>(value: &'a Value, field: &str) -> &'a [Value] {
    value.get(field).map(as_list).unwrap_or(&[])
}

fn shelf<'a>(value: &'a Value, field: &str) -> &'a [Value] {
    match value.get(field) {
        Some(shelf @ Value::Object(_)) => field_list(shelf, "results"),
        Some(list) => as_list(list),
        None => &[],
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn feed_sections_are_deduplicated_independently() {
        let raw = json!([
            {"title": "Quick picks", "contents": [{"videoId": "v1"}, {"videoId": "v1"}]},
            {"title": "Again", "contents": [{"videoId": "v1"}]}
        ]);

        let feed = HomeFeed::from_raw(&raw);
        assert_eq!(feed.feed.len(), 2);
        assert_eq!(feed.feed[0].items.len(), 1);
        assert_eq!(feed.feed[1].items.len(), 1);
        assert_eq!(feed.feed[0].section_title.as_deref(), Some("Quick picks"));
    }

    #[test]
    fn feed_tolerates_non_list_document() {
        assert!(HomeFeed::from_raw(&json!({"error": "x"})).feed.is_empty());
    }

    #[test]
    fn related_songs_skip_records_without_media_id_and_respect_limit() {
        let raw = json!([
            {"contents": [{"browseId": "MPRE1"}, {"videoId": "a"}, {"videoId": "b"}]},
            {"contents": [{"videoId": "c"}]}
        ]);

        let related = RelatedSongs::from_raw(&raw, 2);
        let ids: Vec<_> = related.related.iter().filter_map(|item| item.id.as_deref()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn artist_shelves_accept_both_shapes() {
        let raw = json!({
            "name": "Artist",
            "browseId": "UC1",
            "subscribers": "2M",
            "songs": {"results": [{"videoId": "s1"}]},
            "albums": [{"browseId": "MPRE1", "year": "2019"}]
        });

        let detail = ArtistDetail::from_raw(&raw);
        assert_eq!(detail.artist.category(), Category::Artist);
        assert_eq!(detail.artist.title.as_deref(), Some("Artist"));
        assert_eq!(detail.songs.len(), 1);
        assert_eq!(detail.albums[0].category(), Category::Album);
    }

    #[test]
    fn user_playlists_copy_fields_verbatim() {
        let raw = json!([{"title": "Mine", "playlistId": "PL1", "count": 3}]);
        let value = serde_json::to_value(UserPlaylists::from_raw(&raw)).expect("serializes");
        assert_eq!(
            value,
            json!({"playlists": [{"title": "Mine", "playlistId": "PL1", "thumbnails": null, "count": 3}]})
        );
    }
}
