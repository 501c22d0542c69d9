use serde_json::Value;

use crate::core::HeadlessError;
use crate::fragment::{normalize, Adventure, KeyMap};
use crate::query::{QueryExecutor, QueryParams, QueryRef};

const WKND_ENDPOINT: &str = "wknd-shared";
const ADVENTURE_BY_PATH: &str = "adventure-by-path";
const ADVENTURE_BY_SLUG: &str = "adventure-by-slug";

// Image rendition parameters the by-path query expects.
const IMAGE_FORMAT: &str = "JPG";
const IMAGE_WIDTH: i64 = 1200;
const IMAGE_QUALITY: i64 = 80;

/// High-level adventure lookups over the persisted WKND queries.
///
/// Wraps a [`QueryExecutor`] and unwraps the per-query response roots
/// (`adventureByPath.item`, `adventureBySlug.item`) into normalized
/// [`Adventure`] records. `Ok(None)` means the backend had no match.
#[derive(Debug, Clone)]
pub struct AdventureClient {
    executor: QueryExecutor,
    keys: Option<KeyMap>,
}

impl AdventureClient {
    pub fn new(executor: QueryExecutor) -> Self {
        Self {
            executor,
            keys: None,
        }
    }

    /// Read responses through a field mapping, for schema variants that
    /// rename the adventure fields.
    pub fn with_keys(mut self, keys: KeyMap) -> Self {
        self.keys = Some(keys);
        self
    }

    pub fn executor(&self) -> &QueryExecutor {
        &self.executor
    }

    pub async fn by_path(&self, path: &str) -> Result<Option<Adventure>, HeadlessError> {
        let query = QueryRef::new(WKND_ENDPOINT, ADVENTURE_BY_PATH);
        let params = QueryParams::new()
            .with("adventurePath", path)
            .with("imageFormat", IMAGE_FORMAT)
            .with("imageSeoName", "")
            .with("imageWidth", IMAGE_WIDTH)
            .with("imageQuality", IMAGE_QUALITY);

        let data = self.executor.execute(&query, &params).await?;
        Ok(self.item(&data, "adventureByPath"))
    }

    pub async fn by_slug(&self, slug: &str) -> Result<Option<Adventure>, HeadlessError> {
        let query = QueryRef::new(WKND_ENDPOINT, ADVENTURE_BY_SLUG);
        let params = QueryParams::new().with("adventureSlug", slug);

        let data = self.executor.execute(&query, &params).await?;
        Ok(self.item(&data, "adventureBySlug"))
    }

    fn item(&self, data: &Value, root: &str) -> Option<Adventure> {
        let raw = data.get(root).and_then(|v| v.get("item"));
        normalize(raw, self.keys.as_ref())
    }
}
