//! Upstream catalog contract and request types.
//!
//! This module defines the adapter contract (`CatalogSource`) that every
//! upstream implementation follows. A source only produces raw JSON
//! documents; reshaping them into canonical items is the job of
//! [`payload`](crate::payload).
//!
//! # Operations
//!
//! | Request | Operation | Raw document |
//! |---------|-----------|--------------|
//! | [`CatalogRequest::Home`] | `get_home` | list of sections with `title` and `contents` |
//! | [`CatalogRequest::SearchSuggestions`] | `get_search_suggestions` | list of suggestions |
//! | [`CatalogRequest::SongRelated`] | `get_song_related` | list of sections with `contents` |
//! | [`CatalogRequest::User`] | `get_user` | user document |
//! | [`CatalogRequest::UserPlaylists`] | `get_user_playlists` | list of playlists |
//! | [`CatalogRequest::Search`] | `search` | list of records tagged with `resultType` |
//! | [`CatalogRequest::Charts`] | `get_charts` | object with `videos`, `artists`, `genres` |
//! | [`CatalogRequest::Artist`] | `get_artist` | artist document with `songs` and `albums` |
//! | [`CatalogRequest::Album`] | `get_album` | album document with `tracks` |
//! | [`CatalogRequest::Playlist`] | `get_playlist` | playlist document with `tracks` |

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use serde_json::Value;

use crate::params::Locale;

/// Number of playlist tracks requested for playlist detail.
pub const PLAYLIST_TRACK_LIMIT: usize = 50;

/// One upstream read. Pagination tokens and locale values are opaque and
/// forwarded verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogRequest {
    Home {
        locale: Locale,
        limit: usize,
    },
    SearchSuggestions {
        locale: Locale,
        query: String,
    },
    SongRelated {
        locale: Locale,
        video_id: String,
    },
    User {
        locale: Locale,
        user_id: String,
    },
    UserPlaylists {
        locale: Locale,
        user_id: String,
        params: Option<String>,
    },
    Search {
        locale: Locale,
        query: String,
        filter: String,
    },
    Charts {
        country: String,
    },
    Artist {
        locale: Locale,
        artist_id: String,
    },
    Album {
        locale: Locale,
        album_id: String,
    },
    Playlist {
        locale: Locale,
        playlist_id: String,
        limit: usize,
    },
}

impl CatalogRequest {
    /// Upstream operation name, used in logs and error messages.
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Home { .. } => "get_home",
            Self::SearchSuggestions { .. } => "get_search_suggestions",
            Self::SongRelated { .. } => "get_song_related",
            Self::User { .. } => "get_user",
            Self::UserPlaylists { .. } => "get_user_playlists",
            Self::Search { .. } => "search",
            Self::Charts { .. } => "get_charts",
            Self::Artist { .. } => "get_artist",
            Self::Album { .. } => "get_album",
            Self::Playlist { .. } => "get_playlist",
        }
    }

    /// Locale of the request; charts use the upstream default locale.
    pub fn locale(&self) -> Option<&Locale> {
        match self {
            Self::Home { locale, .. }
            | Self::SearchSuggestions { locale, .. }
            | Self::SongRelated { locale, .. }
            | Self::User { locale, .. }
            | Self::UserPlaylists { locale, .. }
            | Self::Search { locale, .. }
            | Self::Artist { locale, .. }
            | Self::Album { locale, .. }
            | Self::Playlist { locale, .. } => Some(locale),
            Self::Charts { .. } => None,
        }
    }
}

/// Upstream error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    Unavailable,
    InvalidRequest,
    Decode,
}

/// Structured upstream error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
}

impl SourceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Unavailable,
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidRequest,
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Decode,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::Unavailable => "source.unavailable",
            SourceErrorKind::InvalidRequest => "source.invalid_request",
            SourceErrorKind::Decode => "source.decode",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

/// Boxed future returned by [`CatalogSource::fetch`].
pub type FetchFuture<'a> = Pin<Box<dyn Future<Output = Result<Value, SourceError>> + Send + 'a>>;

/// Upstream adapter contract.
///
/// Implementations must be `Send + Sync`; one instance is shared by every
/// request handler.
pub trait CatalogSource: Send + Sync {
    /// Short adapter name used in logs.
    fn name(&self) -> &'static str;

    /// Performs one upstream read and returns the raw document.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the upstream is unreachable, answers with a
    /// failure status, or returns a body that is not JSON.
    fn fetch<'a>(&'a self, request: CatalogRequest) -> FetchFuture<'a>;
}
