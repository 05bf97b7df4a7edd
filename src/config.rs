//! Server configuration loaded from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;

/// Runtime settings for the HTTP server.
#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Address to bind (from SKYWEATHER_HOST)
    pub host: IpAddr,
    /// Port to bind (from SKYWEATHER_PORT)
    pub port: u16,
    /// Allowed CORS origins (from SKYWEATHER_CORS_ORIGINS, comma-separated).
    /// `None` allows any origin.
    pub cors_origins: Option<Vec<String>>,
    /// Whether to preload the Mars and Titan fixtures (from SKYWEATHER_SEED)
    pub seed: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            cors_origins: None,
            seed: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key/value source. Unparseable values fall
    /// back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = parse_or(&lookup, "SKYWEATHER_HOST", defaults.host);
        let port = parse_or(&lookup, "SKYWEATHER_PORT", defaults.port);

        let cors_origins = lookup("SKYWEATHER_CORS_ORIGINS").map(|s| {
            s.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        let seed = match lookup("SKYWEATHER_SEED") {
            Some(value) => !matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            ),
            None => defaults.seed,
        };

        Self {
            host,
            port,
            cors_origins,
            seed,
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid value for {}: {:?}, using default", key, raw);
            default
        }),
        None => default,
    }
}
