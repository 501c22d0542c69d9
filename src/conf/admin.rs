use serde::{Deserialize, Serialize};

/// Settings for the Edge Delivery admin cache-clear endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AdminConfig {
    /// Full cache-clear URL, e.g.
    /// `https://admin.hlx.page/cache/{owner}/{repo}/main/*`.
    #[serde(default)]
    pub purge_url: Option<String>,
    #[serde(default = "AdminConfig::default_user_agent")]
    pub user_agent: String,
}

impl AdminConfig {
    fn default_user_agent() -> String {
        String::from("wknd-headless")
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            purge_url: None,
            user_agent: Self::default_user_agent(),
        }
    }
}
