//! Player configuration

use std::env;

use url::Url;

use crate::error::ConfigError;
use crate::infrastructure::http_client::DEFAULT_TIMEOUT_SECS;

/// Server used when none is configured
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

/// Player configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    /// HTTP base for the catalog endpoints
    pub server_url: Url,
    /// Game socket endpoint
    pub ws_url: Url,
    /// Name to join with when none is typed
    pub player_name: Option<String>,
    /// Character to preselect instead of the first catalog entry
    pub character_id: Option<String>,
    /// Catalog request timeout (seconds)
    pub http_timeout_secs: u64,
}

impl PlayerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let raw_server = non_empty("TILEBRAWL_SERVER_URL")
            .or_else(|| non_empty("SERVER_URL"))
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        let server_url = parse_url(raw_server.trim())?;
        if !matches!(server_url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(server_url.scheme().to_string()));
        }

        let ws_url = match non_empty("TILEBRAWL_WS_URL") {
            Some(raw) => {
                let url = parse_url(raw.trim())?;
                if !matches!(url.scheme(), "ws" | "wss") {
                    return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
                }
                url
            }
            None => derive_ws_url(&server_url)?,
        };

        let http_timeout_secs = match non_empty("TILEBRAWL_HTTP_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "TILEBRAWL_HTTP_TIMEOUT_SECS",
                    value: raw.clone(),
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            server_url,
            ws_url,
            player_name: non_empty("TILEBRAWL_NAME").map(|name| name.trim().to_string()),
            character_id: non_empty("TILEBRAWL_CHARACTER").map(|id| id.trim().to_string()),
            http_timeout_secs,
        })
    }

    /// Catalog base URL without a trailing slash.
    pub fn http_base(&self) -> &str {
        self.server_url.as_str().trim_end_matches('/')
    }
}

/// `http://host:port/...` becomes `ws://host:port/ws`, `https` becomes `wss`.
pub fn derive_ws_url(server_url: &Url) -> Result<Url, ConfigError> {
    let scheme = match server_url.scheme() {
        "http" => "ws",
        "https" => "wss",
        other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
    };

    let mut ws_url = server_url.clone();
    ws_url
        .set_scheme(scheme)
        .map_err(|_| ConfigError::UnsupportedScheme(scheme.to_string()))?;
    ws_url.set_path("/ws");
    ws_url.set_query(None);
    ws_url.set_fragment(None);
    Ok(ws_url)
}

fn parse_url(raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<PlayerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        PlayerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_point_at_localhost() {
        let config = load(&[]).expect("defaults");

        assert_eq!(config.http_base(), "http://localhost:8000");
        assert_eq!(config.ws_url.as_str(), "ws://localhost:8000/ws");
        assert_eq!(config.http_timeout_secs, 5);
        assert_eq!(config.player_name, None);
    }

    #[test]
    fn secure_server_derives_wss() {
        let config = load(&[("TILEBRAWL_SERVER_URL", "https://game.example.com/lobby?x=1")])
            .expect("valid");
        assert_eq!(config.ws_url.as_str(), "wss://game.example.com/ws");
    }

    #[test]
    fn legacy_variable_and_overrides() {
        let config = load(&[
            ("SERVER_URL", "http://10.0.0.2:9000"),
            ("TILEBRAWL_WS_URL", "ws://10.0.0.3:9001/socket"),
            ("TILEBRAWL_NAME", " ann "),
            ("TILEBRAWL_CHARACTER", "elf"),
            ("TILEBRAWL_HTTP_TIMEOUT_SECS", "9"),
        ])
        .expect("valid");

        assert_eq!(config.http_base(), "http://10.0.0.2:9000");
        assert_eq!(config.ws_url.as_str(), "ws://10.0.0.3:9001/socket");
        assert_eq!(config.player_name.as_deref(), Some("ann"));
        assert_eq!(config.character_id.as_deref(), Some("elf"));
        assert_eq!(config.http_timeout_secs, 9);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            load(&[("TILEBRAWL_SERVER_URL", "not a url")]),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            load(&[("TILEBRAWL_SERVER_URL", "ftp://example.com")]),
            Err(ConfigError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            load(&[("TILEBRAWL_HTTP_TIMEOUT_SECS", "soon")]),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
