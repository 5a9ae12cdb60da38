//! Behaviour tests for the classify → normalize → dedupe pipeline.
//!
//! These tests drive the public API only and check the properties callers
//! rely on: stable identity, first-seen ordering and synthesized artwork.

use serde_json::{json, Value};
use tunegate_core::{classify, dedupe, normalize, CanonicalItem, Category, RawRecord, Thumbnails};

fn pipeline(records: Vec<Value>) -> Vec<CanonicalItem> {
    let items = records
        .into_iter()
        .map(RawRecord::from_value)
        .map(|raw| normalize(&raw, classify(&raw)))
        .collect();
    dedupe(items)
}

fn ids(items: &[CanonicalItem]) -> Vec<Option<&str>> {
    items.iter().map(|item| item.id.as_deref()).collect()
}

// =============================================================================
// Deduplication
// =============================================================================

#[test]
fn when_feed_repeats_a_song_only_the_first_copy_survives() {
    // Given: Two upstream records sharing a media id
    let records = vec![
        json!({"videoId": "x1", "title": "A"}),
        json!({"videoId": "x1", "title": "A-dup"}),
    ];

    // When: They pass through the whole pipeline
    let items = pipeline(records);

    // Then: Exactly one song remains, with the first title
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].category(), Category::Song);
    assert_eq!(items[0].id.as_deref(), Some("x1"));
    assert_eq!(items[0].title.as_deref(), Some("A"));
}

#[test]
fn dedupe_is_idempotent() {
    // Given: A mixed sequence with repeats across categories
    let items = pipeline(vec![
        json!({"videoId": "v1"}),
        json!({"playlistId": "v1"}),
        json!({"videoId": "v1"}),
        json!({"browseId": "MPRE1"}),
        json!({"title": "no id"}),
        json!({"browseId": "MPRE1"}),
    ]);

    // When: Deduplicating a second time
    let again = dedupe(items.clone());

    // Then: Nothing changes
    assert_eq!(again, items);
}

#[test]
fn dedupe_keeps_first_occurrences_in_input_order() {
    // Given: Interleaved duplicates
    let items = pipeline(vec![
        json!({"videoId": "c"}),
        json!({"videoId": "a"}),
        json!({"videoId": "c"}),
        json!({"videoId": "b"}),
        json!({"videoId": "a"}),
    ]);

    // Then: First occurrences keep their relative order
    assert_eq!(ids(&items), [Some("c"), Some("a"), Some("b")]);
}

#[test]
fn same_id_in_different_categories_is_not_a_duplicate() {
    let items = pipeline(vec![json!({"videoId": "x"}), json!({"playlistId": "x"})]);

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].category(), Category::Song);
    assert_eq!(items[1].category(), Category::Playlist);
}

// =============================================================================
// Normalization
// =============================================================================

#[test]
fn song_artwork_is_synthesized_from_media_id() {
    // Given: A song record with a media id and no thumbnails
    let raw = RawRecord::from_value(json!({"videoId": "abc123", "title": "Track"}));

    // When: Normalized as a song
    let item = normalize(&raw, Category::Song);

    // Then: Five fixed-size thumbnails embed the media id
    let Thumbnails::Synthesized(thumbnails) = &item.thumbnails else {
        panic!("song artwork should be synthesized, got {:?}", item.thumbnails);
    };
    let widths: Vec<_> = thumbnails.iter().filter_map(|thumb| thumb.width).collect();
    assert_eq!(widths, [120, 320, 480, 640, 1280]);
    assert!(thumbnails.iter().all(|thumb| thumb.url.contains("abc123")));
}

#[test]
fn album_artwork_is_passed_through_as_delivered() {
    // Given: Upstream thumbnails with a url-less entry and an extra key
    let upstream = json!([
        {"url": "https://lh3/a.jpg", "width": 60, "height": 60},
        {"width": 544, "height": 544},
        {"url": "https://lh3/b.jpg", "width": 226, "height": 226, "extra": "x"}
    ]);
    let raw = RawRecord::from_value(json!({"browseId": "MPRE1", "thumbnails": upstream.clone()}));

    // When: Normalized as an album and serialized
    let value = serde_json::to_value(normalize(&raw, Category::Album)).expect("serializes");

    // Then: Every entry survives untouched and in order
    assert_eq!(value["thumbnails"], upstream);
}

#[test]
fn records_without_any_id_field_have_no_id() {
    let raw = RawRecord::from_value(json!({"title": "Orphan", "year": "2001"}));

    for category in Category::ALL {
        assert_eq!(normalize(&raw, category).id, None, "category {category}");
    }
}

#[test]
fn conditional_fields_appear_only_under_their_category() {
    // Given: A record carrying every category-specific field
    let raw = RawRecord::from_value(json!({
        "browseId": "B1",
        "artists": [{"name": "X"}],
        "year": "2020",
        "subscribers": "1M"
    }));

    // When: Serialized per category
    let song = serde_json::to_value(normalize(&raw, Category::Song)).expect("serializes");
    let album = serde_json::to_value(normalize(&raw, Category::Album)).expect("serializes");
    let playlist = serde_json::to_value(normalize(&raw, Category::Playlist)).expect("serializes");

    // Then: Each shape carries only its own field
    assert_eq!(song["type"], "song");
    assert_eq!(song["artists"], json!([{"name": "X"}]));
    assert!(song.get("year").is_none());

    assert_eq!(album["type"], "album");
    assert_eq!(album["year"], "2020");
    assert!(album.get("artists").is_none());
    assert!(album.get("subscribers").is_none());

    assert!(playlist.get("artists").is_none());
    assert!(playlist.get("year").is_none());
    assert!(playlist.get("subscribers").is_none());
}

// =============================================================================
// Classification
// =============================================================================

#[test]
fn media_id_wins_over_playlist_id() {
    let raw = RawRecord::from_value(json!({"videoId": "v", "playlistId": "p", "browseId": "b"}));
    assert_eq!(classify(&raw), Category::Song);
}

#[test]
fn browse_id_alone_defaults_to_album() {
    let raw = RawRecord::from_value(json!({"browseId": "UCartist"}));
    assert_eq!(classify(&raw), Category::Album);
}

#[test]
fn record_without_known_ids_is_unknown() {
    let raw = RawRecord::from_value(json!({"id": "generic"}));
    assert_eq!(classify(&raw), Category::Unknown);
    assert_eq!(normalize(&raw, Category::Unknown).id.as_deref(), Some("generic"));
}
