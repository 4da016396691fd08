/// Default GraphQL endpoint used when no build-time override is given.
pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "http://localhost:5000/graphql";

/// Storage key the login flow writes the access token under.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Storage key the request transport reads the outgoing token header from.
///
/// Differs from [`TOKEN_STORAGE_KEY`]; both names are kept as the backend and
/// the rest of the application expect them.
pub const HEADER_STORAGE_KEY: &str = "access_token";

/// Notice shown when the backend rejects the credentials.
pub const REJECTED_MESSAGE: &str = "ログイン情報が不正です。";

/// Runtime settings shared by the login view and its adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub graphql_endpoint: String,
    pub token_storage_key: String,
    pub header_storage_key: String,
    pub header_name: String,
    pub home_path: String,
    pub rejected_message: String,
    /// Minimum log level, as accepted by `log::Level::from_str`.
    pub log_level: String,
}

impl ClientConfig {
    /// Build a config from optional overrides, falling back to defaults for
    /// anything missing or blank.
    pub fn from_overrides(endpoint: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(endpoint) = endpoint.map(str::trim).filter(|s| !s.is_empty()) {
            config.graphql_endpoint = endpoint.to_string();
        }
        if let Some(level) = log_level.map(str::trim).filter(|s| !s.is_empty()) {
            config.log_level = level.to_string();
        }

        config
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            graphql_endpoint: DEFAULT_GRAPHQL_ENDPOINT.to_string(),
            token_storage_key: TOKEN_STORAGE_KEY.to_string(),
            header_storage_key: HEADER_STORAGE_KEY.to_string(),
            header_name: "token".to_string(),
            home_path: "/".to_string(),
            rejected_message: REJECTED_MESSAGE.to_string(),
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_both_token_keys() {
        let config = ClientConfig::default();
        assert_eq!(config.token_storage_key, "token");
        assert_eq!(config.header_storage_key, "access_token");
        assert_eq!(config.home_path, "/");
    }

    #[test]
    fn overrides_replace_endpoint_and_level() {
        let config = ClientConfig::from_overrides(Some("https://api.test/graphql"), Some("debug"));
        assert_eq!(config.graphql_endpoint, "https://api.test/graphql");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn blank_overrides_fall_back_to_defaults() {
        let config = ClientConfig::from_overrides(Some("  "), None);
        assert_eq!(config, ClientConfig::default());
    }
}
