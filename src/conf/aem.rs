use serde::{Deserialize, Serialize};

/// Backend origins and query-endpoint settings for one AEM instance.
///
/// The author host serves draft content for in-editor preview, the publish
/// host serves the public cached output. Which one a caller should talk to
/// depends on where the page itself is served from, see [`select_host`].
///
/// [`select_host`]: AemConfig::select_host
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AemConfig {
    #[serde(default = "AemConfig::default_author_host")]
    pub author_host: String,
    #[serde(default = "AemConfig::default_publish_host")]
    pub publish_host: String,
    /// Hostname suffix identifying pages served by the authoring stack.
    #[serde(default = "AemConfig::default_author_suffix")]
    pub author_suffix: String,
    #[serde(default = "AemConfig::default_graphql_path")]
    pub graphql_path: String,
    /// Append a timestamp parameter to every query to defeat caching.
    #[serde(default)]
    pub disable_cache: bool,
}

impl AemConfig {
    fn default_author_host() -> String {
        String::from("https://author-p156903-e1726641.adobeaemcloud.com")
    }

    fn default_publish_host() -> String {
        String::from("https://publish-p156903-e1726641.adobeaemcloud.com")
    }

    fn default_author_suffix() -> String {
        String::from("adobeaemcloud.com")
    }

    fn default_graphql_path() -> String {
        String::from("/graphql/execute.json")
    }

    /// Pick the backend origin for a page served from `current_hostname`:
    /// the author host when the hostname ends with `author_suffix`, the
    /// publish host otherwise.
    pub fn select_host(&self, current_hostname: &str) -> &str {
        if current_hostname.ends_with(&self.author_suffix) {
            &self.author_host
        } else {
            &self.publish_host
        }
    }
}

impl Default for AemConfig {
    fn default() -> Self {
        Self {
            author_host: Self::default_author_host(),
            publish_host: Self::default_publish_host(),
            author_suffix: Self::default_author_suffix(),
            graphql_path: Self::default_graphql_path(),
            disable_cache: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_host_for_authoring_pages() {
        let conf = AemConfig::default();
        assert_eq!(
            conf.select_host("author-p156903-e1726641.adobeaemcloud.com"),
            conf.author_host
        );
    }

    #[test]
    fn test_publish_host_for_live_pages() {
        let conf = AemConfig::default();
        assert_eq!(conf.select_host("main--wknd--org.aem.live"), conf.publish_host);
        assert_eq!(conf.select_host("localhost"), conf.publish_host);
    }
}
