//! Command-line and environment configuration for the gateway server.
//!
//! | Option | Env | Default |
//! |--------|-----|---------|
//! | `--host` | `HOST` | `0.0.0.0` |
//! | `--port` | `PORT` | `5000` |
//! | `--cache-ttl` | `CACHE_TTL` | `600` |
//! | `--upstream-url` | `UPSTREAM_URL` | `http://127.0.0.1:8000` |
//! | `--upstream-timeout-ms` | `UPSTREAM_TIMEOUT_MS` | `10000` |

use std::time::Duration;

use clap::Parser;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 600;
pub const DEFAULT_UPSTREAM_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 10_000;

/// Tunegate - normalizing, caching gateway for a media catalog
#[derive(Debug, Clone, Parser)]
#[command(name = "tunegate", author, version, about = "Normalizing, caching catalog gateway")]
pub struct ServerArgs {
    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Lifetime of cached home feed and chart responses, in seconds.
    #[arg(long, env = "CACHE_TTL", default_value_t = DEFAULT_CACHE_TTL_SECS)]
    pub cache_ttl: u64,

    /// Base URL of the catalog relay.
    #[arg(long, env = "UPSTREAM_URL", default_value = DEFAULT_UPSTREAM_URL)]
    pub upstream_url: String,

    /// Timeout budget for each upstream call, in milliseconds.
    #[arg(long, env = "UPSTREAM_TIMEOUT_MS", default_value_t = DEFAULT_UPSTREAM_TIMEOUT_MS)]
    pub upstream_timeout_ms: u64,
}

/// Resolved server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cache_ttl: Duration,
    pub upstream_url: String,
    pub upstream_timeout_ms: u64,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            upstream_url: String::from(DEFAULT_UPSTREAM_URL),
            upstream_timeout_ms: DEFAULT_UPSTREAM_TIMEOUT_MS,
        }
    }
}

impl From<ServerArgs> for ServerConfig {
    fn from(args: ServerArgs) -> Self {
        Self {
            host: args.host,
            port: args.port,
            cache_ttl: Duration::from_secs(args.cache_ttl),
            upstream_url: args.upstream_url,
            upstream_timeout_ms: args.upstream_timeout_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = ServerArgs::try_parse_from([
            "tunegate",
            "--port",
            "8080",
            "--cache-ttl",
            "30",
            "--upstream-url",
            "http://relay:9000",
        ])
        .expect("valid flags");

        let config = ServerConfig::from(args);
        assert_eq!(config.port, 8080);
        assert_eq!(config.cache_ttl, Duration::from_secs(30));
        assert_eq!(config.upstream_url, "http://relay:9000");
        assert_eq!(config.upstream_timeout_ms, DEFAULT_UPSTREAM_TIMEOUT_MS);
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        assert!(ServerArgs::try_parse_from(["tunegate", "--port", "http"]).is_err());
    }

    #[test]
    fn bind_addr_joins_host_and_port() {
        assert_eq!(ServerConfig::default().bind_addr(), "0.0.0.0:5000");
    }
}
