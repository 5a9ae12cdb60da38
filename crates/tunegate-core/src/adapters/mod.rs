//! Upstream catalog adapters.
//!
//! | Adapter | Transport | Use |
//! |---------|-----------|-----|
//! | [`RelayCatalogSource`] | HTTP via [`HttpClient`](crate::http_client::HttpClient) | production |
//! | [`FixtureCatalogSource`] | in-memory documents | tests |

mod fixture;
mod relay;

pub use fixture::FixtureCatalogSource;
pub use relay::RelayCatalogSource;
