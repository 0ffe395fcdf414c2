//! Application configuration. API endpoint, search policy, offline mode.

use crate::usecases::search::SearchPolicy;
use serde::Deserialize;

/// Public JSONPlaceholder instance.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// API root; collections are resolved under it. Read from PH_BROWSE_BASE_URL.
    #[serde(default)]
    pub base_url: Option<String>,

    /// `race` or `cancel-previous`. Read from PH_BROWSE_SEARCH_POLICY.
    #[serde(default)]
    pub search_policy: Option<String>,

    /// Serve the built-in fixture data instead of calling the network. Read from PH_BROWSE_OFFLINE.
    #[serde(default)]
    pub offline: Option<bool>,

    /// Simulated latency of the fixture gateway in ms. Read from PH_BROWSE_FIXTURE_DELAY_MS.
    #[serde(default)]
    pub fixture_delay_ms: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("PH_BROWSE").try_parsing(true));
        if let Ok(path) = std::env::var("PH_BROWSE_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the API base URL. Defaults to the public JSONPlaceholder instance.
    pub fn base_url_or_default(&self) -> String {
        self.base_url
            .clone()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Returns the search policy. Unknown values fall back to `race`.
    pub fn search_policy_or_default(&self) -> SearchPolicy {
        self.search_policy
            .as_deref()
            .and_then(SearchPolicy::parse)
            .unwrap_or_default()
    }

    pub fn is_offline(&self) -> bool {
        self.offline.unwrap_or(false)
    }

    pub fn fixture_delay_ms_or_default(&self) -> u64 {
        self.fixture_delay_ms.unwrap_or(0)
    }
}
