//! HTTP routes for the gateway.
//!
//! Every `/api` route answers with an [`Envelope`]: parameters are parsed with
//! the shared helpers in [`tunegate_core::params`], the gateway does the rest.

use std::sync::Arc;

use axum::async_trait;
use axum::extract::{FromRequestParts, Path, Query, State};
use axum::http::request::Parts;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tunegate_core::params::{self, DEFAULT_SEARCH_FILTER};
use tunegate_core::{
    AlbumDetail, ArtistDetail, CatalogGateway, Envelope, Locale, PlaylistDetail, RelatedSongs,
    SearchResults, Suggestions, UserPlaylists,
};

use crate::error::ApiError;

type ApiResult<T> = Result<Json<Envelope<T>>, ApiError>;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub gateway: CatalogGateway,
}

impl AppState {
    pub fn new(gateway: CatalogGateway) -> Self {
        Self { gateway }
    }
}

/// Raw query string; every value is optional until a handler asks for it.
///
/// When a key repeats, the first value wins and later ones are ignored.
#[derive(Debug, Default)]
pub struct CatalogQuery {
    pub region: Option<String>,
    pub lang: Option<String>,
    pub limit: Option<String>,
    pub query: Option<String>,
    pub filter: Option<String>,
    pub params: Option<String>,
}

impl CatalogQuery {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "region" => &mut query.region,
                "lang" => &mut query.lang,
                "limit" => &mut query.limit,
                "query" => &mut query.query,
                "filter" => &mut query.filter,
                "params" => &mut query.params,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    fn locale(&self) -> Locale {
        Locale::from_query(self.region.as_deref(), self.lang.as_deref())
    }

    fn limit(&self) -> Result<usize, ApiError> {
        Ok(params::parse_limit(self.limit.as_deref())?)
    }

    fn search_query(&self) -> Result<String, ApiError> {
        Ok(params::require("query", self.query.as_deref())?)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CatalogQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state).await?;
        Ok(Self::from_pairs(pairs))
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Builds the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/homefeed", get(home_feed))
        .route("/api/search", get(search))
        .route("/api/search/suggestions", get(search_suggestions))
        .route("/api/song/related/:video_id", get(song_related))
        .route("/api/user/:user_id", get(user))
        .route("/api/user/:user_id/playlists", get(user_playlists))
        .route("/api/charts", get(charts))
        .route("/api/artist/:artist_id", get(artist))
        .route("/api/album/:album_id", get(album))
        .route("/api/playlist/:playlist_id", get(playlist))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn home_feed(
    State(state): State<Arc<AppState>>,
    query: CatalogQuery,
) -> ApiResult<Value> {
    let limit = query.limit()?;
    let feed = state.gateway.home_feed(query.locale(), limit).await?;
    Ok(Json(Envelope::success(feed)))
}

pub async fn search_suggestions(
    State(state): State<Arc<AppState>>,
    query: CatalogQuery,
) -> ApiResult<Suggestions> {
    let text = query.search_query()?;
    let suggestions = state
        .gateway
        .search_suggestions(query.locale(), text)
        .await?;
    Ok(Json(Envelope::success(suggestions)))
}

pub async fn song_related(
    State(state): State<Arc<AppState>>,
    Path(video_id): Path<String>,
    query: CatalogQuery,
) -> ApiResult<RelatedSongs> {
    let limit = query.limit()?;
    let related = state
        .gateway
        .song_related(query.locale(), video_id, limit)
        .await?;
    Ok(Json(Envelope::success(related)))
}

pub async fn user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    query: CatalogQuery,
) -> ApiResult<Value> {
    let profile = state.gateway.user(query.locale(), user_id).await?;
    Ok(Json(Envelope::success(profile)))
}

pub async fn user_playlists(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    query: CatalogQuery,
) -> ApiResult<UserPlaylists> {
    let token = params::optional(query.params.as_deref());
    let playlists = state
        .gateway
        .user_playlists(query.locale(), user_id, token)
        .await?;
    Ok(Json(Envelope::success(playlists)))
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    query: CatalogQuery,
) -> ApiResult<SearchResults> {
    let text = query.search_query()?;
    let filter = params::optional(query.filter.as_deref())
        .unwrap_or_else(|| String::from(DEFAULT_SEARCH_FILTER));
    let results = state
        .gateway
        .search(query.locale(), text, filter)
        .await?;
    Ok(Json(Envelope::success(results)))
}

pub async fn charts(
    State(state): State<Arc<AppState>>,
    query: CatalogQuery,
) -> ApiResult<Value> {
    let country = params::country_from_query(query.region.as_deref());
    let charts = state.gateway.charts(country).await?;
    Ok(Json(Envelope::success(charts)))
}

pub async fn artist(
    State(state): State<Arc<AppState>>,
    Path(artist_id): Path<String>,
    query: CatalogQuery,
) -> ApiResult<ArtistDetail> {
    let detail = state.gateway.artist(query.locale(), artist_id).await?;
    Ok(Json(Envelope::success(detail)))
}

pub async fn album(
    State(state): State<Arc<AppState>>,
    Path(album_id): Path<String>,
    query: CatalogQuery,
) -> ApiResult<AlbumDetail> {
    let detail = state.gateway.album(query.locale(), album_id).await?;
    Ok(Json(Envelope::success(detail)))
}

pub async fn playlist(
    State(state): State<Arc<AppState>>,
    Path(playlist_id): Path<String>,
    query: CatalogQuery,
) -> ApiResult<PlaylistDetail> {
    let detail = state.gateway.playlist(query.locale(), playlist_id).await?;
    Ok(Json(Envelope::success(detail)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_defaults_apply_when_absent() {
        let query = CatalogQuery::default();
        assert_eq!(query.locale(), Locale::default());
        assert_eq!(query.limit().expect("default limit"), params::DEFAULT_LIMIT);
    }

    #[test]
    fn repeated_keys_keep_the_first_value() {
        let query = CatalogQuery::from_pairs([
            (String::from("query"), String::from("a")),
            (String::from("region"), String::from("us")),
            (String::from("query"), String::from("b")),
            (String::from("unrelated"), String::from("x")),
        ]);
        assert_eq!(query.query.as_deref(), Some("a"));
        assert_eq!(query.region.as_deref(), Some("us"));
        assert_eq!(query.lang, None);
    }

    #[test]
    fn blank_search_query_is_missing() {
        let query = CatalogQuery {
            query: Some(String::from("   ")),
            ..CatalogQuery::default()
        };
        let err = query.search_query().expect_err("blank query");
        assert_eq!(err.to_string(), "missing query param");
    }
}
