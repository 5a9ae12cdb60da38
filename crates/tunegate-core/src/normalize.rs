//! Normalization of raw upstream records into [`CanonicalItem`]s.
//!
//! Normalization is total: missing or malformed optional fields degrade to
//! absent values and never abort. Only the identity can end up absent, in
//! which case callers decide whether to keep the item.

use crate::domain::{CanonicalItem, Category, ItemDetails, RawRecord, Thumbnail, Thumbnails};

/// Identifier fields in resolution order; the first present one becomes the id.
///
/// Non-empty strings and non-zero numbers count as present.
pub const ID_FIELDS: [&str; 4] = ["videoId", "playlistId", "browseId", "id"];

/// Title fields in resolution order.
pub const TITLE_FIELDS: [&str; 2] = ["title", "name"];

/// Synthesized still-image variants for songs: (file, width, height).
const SONG_THUMBNAIL_VARIANTS: [(&str, u32, u32); 5] = [
    ("default.jpg", 120, 90),
    ("mqdefault.jpg", 320, 180),
    ("hqdefault.jpg", 480, 360),
    ("sddefault.jpg", 640, 480),
    ("maxresdefault.jpg", 1280, 720),
];

const SONG_THUMBNAIL_BASE: &str = "https://img.youtube.com/vi";

/// Maps one raw record into a canonical item of the given category.
pub fn normalize(raw: &RawRecord, category: Category) -> CanonicalItem {
    let id = ID_FIELDS.iter().find_map(|field| raw.identifier(field));
    let title = TITLE_FIELDS
        .iter()
        .find_map(|field| raw.text(field))
        .map(str::to_owned);

    let thumbnails = match (category, raw.text("videoId")) {
        (Category::Song, Some(video_id)) => Thumbnails::Synthesized(song_thumbnails(video_id)),
        _ => Thumbnails::Upstream(raw.list("thumbnails").to_vec()),
    };

    let details = match category {
        Category::Song => ItemDetails::Song {
            artists: raw.verbatim("artists"),
        },
        Category::Album => ItemDetails::Album {
            year: raw.verbatim("year"),
        },
        Category::Artist => ItemDetails::Artist {
            subscribers: raw.verbatim("subscribers"),
        },
        Category::Playlist => ItemDetails::Playlist,
        Category::Unknown => ItemDetails::Unknown,
    };

    CanonicalItem {
        details,
        id,
        title,
        thumbnails,
    }
}

/// Builds the fixed set of thumbnails for a media id.
///
/// The URLs depend only on `video_id`, so the result is deterministic.
pub fn song_thumbnails(video_id: &str) -> Vec<Thumbnail> {
    SONG_THUMBNAIL_VARIANTS
        .iter()
        .map(|(file, width, height)| {
            Thumbnail::new(
                format!("{SONG_THUMBNAIL_BASE}/{video_id}/{file}"),
                *width,
                *height,
            )
        })
        .collect()
}
