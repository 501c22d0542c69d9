use std::future::Future;
use std::time::Duration;

use log::debug;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// A content-change notification from the page editor.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentEvent {
    /// Resource identifier of the edited content.
    pub resource: String,
}

/// Handle to a live refresh subscription.
///
/// The subscription keeps running until the event sender is dropped or
/// [`cancel`](Self::cancel) is called; dropping the handle alone does not
/// stop it.
pub struct RefreshHandle {
    task: JoinHandle<()>,
}

impl RefreshHandle {
    /// Tear the listener down. Idempotent.
    pub fn cancel(&self) {
        self.task.abort();
    }

    pub fn is_active(&self) -> bool {
        !self.task.is_finished()
    }
}

/// Run `reload` after editor events, debounced by `delay`.
///
/// A burst of events collapses into a single reload once the stream has
/// been quiet for `delay`; each event during the quiet period restarts it.
/// Reloads run back to back, never concurrently with each other — but a
/// reload does not cancel fetches a previous pass left in flight.
pub fn subscribe<F, Fut>(
    mut events: mpsc::Receiver<ContentEvent>,
    delay: Duration,
    reload: F,
) -> RefreshHandle
where
    F: Fn() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let task = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            debug!("content changed: {}", event.resource);
            loop {
                match tokio::time::timeout(delay, events.recv()).await {
                    Ok(Some(event)) => debug!("content changed: {}", event.resource),
                    Ok(None) | Err(_) => break,
                }
            }
            reload().await;
        }
    });
    RefreshHandle { task }
}
