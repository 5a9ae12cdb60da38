//! Per-endpoint orchestration.
//!
//! [`CatalogGateway`] ties the pieces together for each endpoint: it consults
//! the cache for cacheable endpoints, calls the upstream source on a miss,
//! assembles the payload and stores it. Upstream failures are logged and
//! surfaced as [`GatewayError::Upstream`]; they are never retried here.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::cache::{CacheKey, CacheStore};
use crate::data_source::{CatalogRequest, CatalogSource, PLAYLIST_TRACK_LIMIT};
use crate::params::Locale;
use crate::payload::{
    AlbumDetail, ArtistDetail, Charts, HomeFeed, PlaylistDetail, RelatedSongs, SearchResults,
    Suggestions, UserPlaylists,
};
use crate::{CoreError, GatewayError};

/// Shared gateway service: one upstream source plus the process-wide cache.
///
/// Cloning is cheap and every clone shares the same cache.
#[derive(Clone)]
pub struct CatalogGateway {
    source: Arc<dyn CatalogSource>,
    cache: CacheStore,
}

impl CatalogGateway {
    pub fn new(source: Arc<dyn CatalogSource>, cache: CacheStore) -> Self {
        Self { source, cache }
    }

    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    /// Home feed, cached under `homefeed:{region}:{lang}:{limit}`.
    pub async fn home_feed(&self, locale: Locale, limit: usize) -> Result<Value, GatewayError> {
        let key = CacheKey::home_feed(locale.region(), locale.language(), limit);
        self.cached(key, CatalogRequest::Home { locale, limit }, HomeFeed::from_raw)
            .await
    }

    /// Charts for one country, cached under `charts:{country}`.
    pub async fn charts(&self, country: String) -> Result<Value, GatewayError> {
        let key = CacheKey::charts(&country);
        self.cached(key, CatalogRequest::Charts { country }, Charts::from_raw)
            .await
    }

    pub async fn search_suggestions(
        &self,
        locale: Locale,
        query: String,
    ) -> Result<Suggestions, GatewayError> {
        let raw = self
            .fetch(CatalogRequest::SearchSuggestions { locale, query })
            .await?;
        Ok(Suggestions::from_raw(raw))
    }

    pub async fn song_related(
        &self,
        locale: Locale,
        video_id: String,
        limit: usize,
    ) -> Result<RelatedSongs, GatewayError> {
        let raw = self
            .fetch(CatalogRequest::SongRelated { locale, video_id })
            .await?;
        Ok(RelatedSongs::from_raw(&raw, limit))
    }

    /// User profile, returned exactly as delivered by the upstream.
    pub async fn user(&self, locale: Locale, user_id: String) -> Result<Value, GatewayError> {
        self.fetch(CatalogRequest::User { locale, user_id }).await
    }

    pub async fn user_playlists(
        &self,
        locale: Locale,
        user_id: String,
        params: Option<String>,
    ) -> Result<UserPlaylists, GatewayError> {
        let raw = self
            .fetch(CatalogRequest::UserPlaylists {
                locale,
                user_id,
                params,
            })
            .await?;
        Ok(UserPlaylists::from_raw(&raw))
    }

    pub async fn search(
        &self,
        locale: Locale,
        query: String,
        filter: String,
    ) -> Result<SearchResults, GatewayError> {
        let raw = self
            .fetch(CatalogRequest::Search {
                locale,
                query,
                filter,
            })
            .await?;
        Ok(SearchResults::from_raw(&raw))
    }

    pub async fn artist(
        &self,
        locale: Locale,
        artist_id: String,
    ) -> Result<ArtistDetail, GatewayError> {
        let raw = self
            .fetch(CatalogRequest::Artist { locale, artist_id })
            .await?;
        Ok(ArtistDetail::from_raw(&raw))
    }

    pub async fn album(&self, locale: Locale, album_id: String) -> Result<AlbumDetail, GatewayError> {
        let raw = self
            .fetch(CatalogRequest::Album { locale, album_id })
            .await?;
        Ok(AlbumDetail::from_raw(&raw))
    }

    pub async fn playlist(
        &self,
        locale: Locale,
        playlist_id: String,
    ) -> Result<PlaylistDetail, GatewayError> {
        let raw = self
            .fetch(CatalogRequest::Playlist {
                locale,
                playlist_id,
                limit: PLAYLIST_TRACK_LIMIT,
            })
            .await?;
        Ok(PlaylistDetail::from_raw(&raw))
    }

    // Concurrent misses on one key both fetch and both store; last write wins.
    async fn cached<P, F>(
        &self,
        key: CacheKey,
        request: CatalogRequest,
        assemble: F,
    ) -> Result<Value, GatewayError>
    where
        P: Serialize,
        F: FnOnce(&Value) -> P,
    {
        let key = key.to_string();
        if let Some(hit) = self.cache.get(&key) {
            debug!(%key, "cache hit");
            return Ok(hit);
        }

        debug!(%key, "cache miss");
        let raw = self.fetch(request).await?;
        let payload = serde_json::to_value(assemble(&raw)).map_err(CoreError::from)?;
        self.cache.set(key, payload.clone());
        Ok(payload)
    }

    async fn fetch(&self, request: CatalogRequest) -> Result<Value, GatewayError> {
        let operation = request.operation();
        self.source.fetch(request).await.map_err(|err| {
            error!(
                operation,
                adapter = self.source.name(),
                code = err.code(),
                "{operation} failed: {}",
                err.message()
            );
            GatewayError::upstream(operation, err)
        })
    }
}
