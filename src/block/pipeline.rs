use async_trait::async_trait;
use log::warn;

use crate::adventures::AdventureClient;
use crate::core::HeadlessError;
use crate::fragment::Adventure;

use super::ViewState;

/// Anything that can resolve a content path to an adventure fragment.
///
/// `Ok(None)` means the backend has no fragment at that path.
#[async_trait]
pub trait FragmentSource: Send + Sync {
    async fn fetch(&self, path: &str) -> Result<Option<Adventure>, HeadlessError>;
}

#[async_trait]
impl FragmentSource for AdventureClient {
    async fn fetch(&self, path: &str) -> Result<Option<Adventure>, HeadlessError> {
        self.by_path(path).await
    }
}

/// Clean up authored content references: trim whitespace, drop blanks,
/// strip a trailing `.html` (the picker links to the rendered page).
pub fn content_paths(refs: &[String]) -> Vec<String> {
    refs.iter()
        .map(|r| r.trim())
        .filter(|r| !r.is_empty())
        .map(|r| r.strip_suffix(".html").unwrap_or(r).to_string())
        .collect()
}

/// Fetch every referenced fragment concurrently and fold the outcomes into
/// one [`ViewState`].
///
/// Fragments come back in reference order. A failed or not-found fetch is
/// logged and dropped; it never hides fragments that did load. Only a pass
/// where nothing loads yields the aggregate `NotFound` state.
pub async fn load_fragments<S>(source: &S, refs: &[String]) -> ViewState
where
    S: FragmentSource + Clone + 'static,
{
    let paths = content_paths(refs);
    if paths.is_empty() {
        return ViewState::NoSelection;
    }

    let handles: Vec<_> = paths
        .into_iter()
        .map(|path| {
            let source = source.clone();
            tokio::spawn(async move {
                let outcome = source.fetch(&path).await;
                (path, outcome)
            })
        })
        .collect();

    let mut fragments = Vec::new();
    for handle in handles {
        match handle.await {
            Ok((_, Ok(Some(adventure)))) => fragments.push(adventure),
            Ok((path, Ok(None))) => warn!("no fragment at '{path}'"),
            Ok((path, Err(err))) => warn!("fetching '{path}': {err}"),
            Err(err) => warn!("fetch task failed: {err}"),
        }
    }

    if fragments.is_empty() {
        ViewState::NotFound
    } else {
        ViewState::Ready(fragments)
    }
}
