//! Client configuration.

use serde::{Deserialize, Serialize};

/// Where the listing API lives.
///
/// Deserializable so an embedding application can load it from whatever
/// config source it uses; a missing field falls back to the local
/// development server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the listing API, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:5000/api/v1".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiConfig {
    /// Config pointing at the given base URL. Trailing slashes are trimmed
    /// so paths can be appended verbatim.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_api() {
        assert_eq!(ApiConfig::default().base_url, "http://localhost:5000/api/v1");
    }

    #[test]
    fn test_new_trims_trailing_slashes() {
        let config = ApiConfig::new("http://example.com/api/v1///");
        assert_eq!(config.base_url, "http://example.com/api/v1");
    }

    #[test]
    fn test_deserialize_empty_uses_default() {
        let config: ApiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ApiConfig::default());
    }
}
