//! # Tunegate Core
//!
//! Normalization, deduplication and caching core for the tunegate catalog
//! gateway.
//!
//! ## Overview
//!
//! The gateway sits in front of a third-party media catalog. Upstream records
//! are heterogeneous; this crate turns them into one canonical item schema,
//! removes duplicates and caches selected responses for a bounded window.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Upstream adapters (HTTP relay, in-memory fixture) |
//! | [`cache`] | TTL cache store with lazy expiry, cache keys |
//! | [`classify`] | Category inference for untagged and tagged records |
//! | [`data_source`] | Upstream contract, requests and errors |
//! | [`dedupe`] | Order-preserving duplicate removal |
//! | [`domain`] | Canonical item model and raw records |
//! | [`envelope`] | Success/error response envelope |
//! | [`error`] | Core error types |
//! | [`gateway`] | Per-endpoint orchestration |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`normalize`] | Raw record to canonical item mapping |
//! | [`params`] | Request parameter defaults and validation |
//! | [`payload`] | Response payloads assembled from raw documents |
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use tunegate_core::{classify, dedupe, normalize, Category, RawRecord};
//!
//! let records = [
//!     json!({"videoId": "x1", "title": "A"}),
//!     json!({"videoId": "x1", "title": "A-dup"}),
//! ];
//!
//! let items = records
//!     .into_iter()
//!     .map(RawRecord::from_value)
//!     .map(|raw| normalize(&raw, classify(&raw)))
//!     .collect();
//!
//! let items = dedupe(items);
//! assert_eq!(items.len(), 1);
//! assert_eq!(items[0].category(), Category::Song);
//! assert_eq!(items[0].title.as_deref(), Some("A"));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────┐
//! │ Catalog Gateway │────▶│ Cache Store      │
//! └────────┬────────┘     └──────────────────┘
//!          │ miss
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ Catalog Source  │────▶│ HTTP Client      │
//! │ (Adapter Trait) │     │ (reqwest)        │
//! └────────┬────────┘     └──────────────────┘
//!          │ raw records
//!          ▼
//! ┌─────────────────┐
//! │ classify →      │
//! │ normalize →     │
//! │ dedupe          │
//! └─────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Normalization and deduplication never fail. Requests fail only on
//! parameter validation or upstream errors:
//!
//! ```rust
//! use tunegate_core::GatewayError;
//!
//! fn status(error: &GatewayError) -> u16 {
//!     match error {
//!         GatewayError::MissingParameter { .. } | GatewayError::InvalidParameter { .. } => 400,
//!         _ => error.status_code(),
//!     }
//! }
//! ```

pub mod adapters;
pub mod cache;
pub mod classify;
pub mod data_source;
pub mod dedupe;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod gateway;
pub mod http_client;
pub mod normalize;
pub mod params;
pub mod payload;

// Adapter implementations
pub use adapters::{FixtureCatalogSource, RelayCatalogSource};

// Caching
pub use cache::{CacheKey, CacheStore, DEFAULT_TTL};

// Classification, normalization, deduplication
pub use classify::{classify, classify_result_type, ClassifierRule, FEED_RULES};
pub use dedupe::dedupe;
pub use normalize::{normalize, song_thumbnails};

// Upstream contract
pub use data_source::{CatalogRequest, CatalogSource, SourceError, SourceErrorKind};

// Domain models
pub use domain::{CanonicalItem, Category, ItemDetails, RawRecord, Thumbnail, Thumbnails};

// Envelope and errors
pub use envelope::Envelope;
pub use error::{CoreError, GatewayError, ValidationError};

// Orchestration
pub use gateway::CatalogGateway;

// HTTP client types
pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};

// Parameters and payloads
pub use params::Locale;
pub use payload::{
    AlbumDetail, ArtistDetail, Charts, FeedSection, HomeFeed, PlaylistDetail, RelatedSongs,
    SearchResults, Suggestions, UserPlaylist, UserPlaylists,
};
