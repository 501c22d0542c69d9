use serde::{Deserialize, Serialize};

/// A rich-text value carrying both renditions the backend produces.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RichText {
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub plaintext: Option<String>,
}

impl RichText {
    /// The rendition to display: HTML when non-empty, plain text otherwise.
    /// This preference order is fixed, not configurable.
    pub fn rendition(&self) -> Option<&str> {
        match self.html.as_deref() {
            Some(html) if !html.is_empty() => Some(html),
            _ => self.plaintext.as_deref(),
        }
    }
}

/// Reference to an image asset on the AEM instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ImageRef {
    #[serde(rename = "_path", default)]
    pub path: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "mimeType", default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub width: Option<i64>,
    #[serde(default)]
    pub height: Option<i64>,
}

/// Rendition parameters appended to a delivery URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageParams {
    pub width: u32,
    pub format: String,
    pub optimize: String,
}

impl Default for ImageParams {
    fn default() -> Self {
        Self {
            width: 1200,
            format: String::from("webply"),
            optimize: String::from("medium"),
        }
    }
}

impl ImageRef {
    /// Display URL for this asset: host, asset path, then the literal
    /// rendition query. `None` when the asset has no path.
    pub fn delivery_url(&self, host: &str, params: &ImageParams) -> Option<String> {
        let path = self.path.as_deref()?;
        Some(format!(
            "{}{}?width={}&format={}&optimize={}",
            host.trim_end_matches('/'),
            path,
            params.width,
            params.format,
            params.optimize
        ))
    }
}

/// Flat adventure record extracted from one GraphQL response item.
///
/// Every field other than `path` is optional; fields the backend did not
/// return are simply absent.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Adventure {
    #[serde(rename = "_path")]
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<RichText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_image: Option<ImageRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adventure_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trip_length: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gear_list: Option<RichText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub itinerary: Option<RichText>,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Some("<p>Hi</p>"), Some("Hi"), Some("<p>Hi</p>"))]
    #[case(Some(""), Some("Plain"), Some("Plain"))]
    #[case(None, Some("Plain"), Some("Plain"))]
    #[case(Some("<p>Hi</p>"), None, Some("<p>Hi</p>"))]
    #[case(None, None, None)]
    fn test_rendition_prefers_nonempty_html(
        #[case] html: Option<&str>,
        #[case] plaintext: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let text = RichText {
            html: html.map(String::from),
            plaintext: plaintext.map(String::from),
        };
        assert_eq!(text.rendition(), expected);
    }

    #[test]
    fn test_delivery_url() {
        let image = ImageRef {
            path: Some(String::from("/content/dam/wknd-shared/en/adventures/bali/hero.jpg")),
            ..ImageRef::default()
        };
        assert_eq!(
            image
                .delivery_url("https://publish.example.com/", &ImageParams::default())
                .unwrap(),
            "https://publish.example.com/content/dam/wknd-shared/en/adventures/bali/hero.jpg?width=1200&format=webply&optimize=medium"
        );
    }

    #[test]
    fn test_delivery_url_without_path() {
        let image = ImageRef::default();
        assert_eq!(
            image.delivery_url("https://publish.example.com", &ImageParams::default()),
            None
        );
    }
}
