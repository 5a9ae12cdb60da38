//! # Domain Models
//!
//! Canonical catalog types shared by the normalizer, the deduplicator and
//! the response payloads.
//!
//! ## Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Category`] | Closed set of item categories (song, album, artist, playlist, unknown) |
//! | [`CanonicalItem`] | Unified item produced from any upstream record |
//! | [`ItemDetails`] | Category tag plus the fields only that category carries |
//! | [`Thumbnail`] | Synthesized image reference with fixed dimensions |
//! | [`Thumbnails`] | Synthesized list, or upstream entries kept verbatim |
//! | [`RawRecord`] | Heterogeneous upstream record with total accessors |
//!
//! ## Wire Shape
//!
//! A canonical song serializes as:
//!
//! ```json
//! {"type": "song", "artists": [...], "id": "x1", "title": "A", "thumbnails": [...]}
//! ```
//!
//! Albums carry `year` instead of `artists`, artists carry `subscribers`, and
//! playlists or unknown items carry none of the three.

mod category;
mod item;
mod raw;

pub use category::Category;
pub use item::{CanonicalItem, ItemDetails, Thumbnail, Thumbnails};
pub use raw::RawRecord;
