use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::data_source::{CatalogRequest, CatalogSource, FetchFuture, SourceError};
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient, DEFAULT_TIMEOUT_MS};

/// Adapter for a JSON relay exposing the upstream catalog over plain HTTP.
///
/// Every request maps to `GET {base_url}/{path}` with percent-encoded query
/// parameters. Locale-aware requests carry `language` and `location`.
///
/// | Request | Path | Query |
/// |---------|------|-------|
/// | home | `/home` | `limit` |
/// | search suggestions | `/search/suggestions` | `query` |
/// | song related | `/song/{video_id}/related` | |
/// | user | `/user/{user_id}` | |
/// | user playlists | `/user/{user_id}/playlists` | `params` (when given) |
/// | search | `/search` | `query`, `filter` |
/// | charts | `/charts` | `country` |
/// | artist | `/artist/{artist_id}` | |
/// | album | `/album/{album_id}` | |
/// | playlist | `/playlist/{playlist_id}` | `limit` |
#[derive(Clone)]
pub struct RelayCatalogSource {
    base_url: String,
    http_client: Arc<dyn HttpClient>,
    timeout_ms: u64,
}

impl RelayCatalogSource {
    /// Creates a relay adapter using the reqwest transport.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url, Arc::new(ReqwestHttpClient::default()))
    }

    pub fn with_http_client(base_url: impl Into<String>, http_client: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            base_url,
            http_client,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    fn build_request(&self, request: &CatalogRequest) -> HttpRequest {
        let limit;
        let mut query: Vec<(&str, &str)> = Vec::new();

        let path = match request {
            CatalogRequest::Home { limit: value, .. } => {
                limit = value.to_string();
                query.push(("limit", limit.as_str()));
                String::from("/home")
            }
            CatalogRequest::SearchSuggestions { query: text, .. } => {
                query.push(("query", text.as_str()));
                String::from("/search/suggestions")
            }
            CatalogRequest::SongRelated { video_id, .. } => {
                format!("/song/{}/related", urlencoding::encode(video_id))
            }
            CatalogRequest::User { user_id, .. } => {
                format!("/user/{}", urlencoding::encode(user_id))
            }
            CatalogRequest::UserPlaylists {
                user_id, params, ..
            } => {
                if let Some(params) = params {
                    query.push(("params", params.as_str()));
                }
                format!("/user/{}/playlists", urlencoding::encode(user_id))
            }
            CatalogRequest::Search {
                query: text,
                filter,
                ..
            } => {
                query.push(("query", text.as_str()));
                query.push(("filter", filter.as_str()));
                String::from("/search")
            }
            CatalogRequest::Charts { country } => {
                query.push(("country", country.as_str()));
                String::from("/charts")
            }
            CatalogRequest::Artist { artist_id, .. } => {
                format!("/artist/{}", urlencoding::encode(artist_id))
            }
            CatalogRequest::Album { album_id, .. } => {
                format!("/album/{}", urlencoding::encode(album_id))
            }
            CatalogRequest::Playlist {
                playlist_id,
                limit: value,
                ..
            } => {
                limit = value.to_string();
                query.push(("limit", limit.as_str()));
                format!("/playlist/{}", urlencoding::encode(playlist_id))
            }
        };

        if let Some(locale) = request.locale() {
            query.push(("language", locale.language()));
            query.push(("location", locale.region()));
        }

        HttpRequest::get(format!("{}{path}", self.base_url))
            .with_query(query)
            .with_header("accept", "application/json")
            .with_timeout_ms(self.timeout_ms)
    }
}

impl CatalogSource for RelayCatalogSource {
    fn name(&self) -> &'static str {
        "relay"
    }

    fn fetch<'a>(&'a self, request: CatalogRequest) -> FetchFuture<'a> {
        Box::pin(async move {
            let operation = request.operation();
            let http_request = self.build_request(&request);
            debug!(operation, url = %http_request.url, "calling catalog relay");

            let response = self
                .http_client
                .execute(http_request)
                .await
                .map_err(|error| {
                    if error.timed_out() {
                        SourceError::unavailable(format!(
                            "relay timed out after {} ms",
                            self.timeout_ms
                        ))
                    } else {
                        SourceError::unavailable(format!(
                            "relay transport error: {}",
                            error.message()
                        ))
                    }
                })?;

            if !response.is_success() {
                let message = format!("relay returned status {}", response.status);
                return Err(if (400..500).contains(&response.status) {
                    SourceError::invalid_request(message)
                } else {
                    SourceError::unavailable(message)
                });
            }

            serde_json::from_str::<Value>(&response.body).map_err(|error| {
                SourceError::decode(format!("relay body is not valid JSON: {error}"))
            })
        })
    }
}
