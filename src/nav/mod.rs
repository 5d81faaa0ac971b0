//! Navigation resolution for a selected search result.
//!
//! The DOM, router, and window handling live on the other side of
//! [`UiBridge`]; this module only decides what happens (external open
//! versus in-app navigate) and drives the best-effort scroll/highlight
//! sequence with its fixed timings.

use crate::search::SearchResult;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// Delay before the post-navigation scroll attempt, giving the target
/// page a beat to render.
pub const SCROLL_SETTLE_DELAY: Duration = Duration::from_millis(100);

/// How long the highlight ring stays on the target element.
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(2000);

// ============================================================================
// UI Bridge
// ============================================================================

/// The out-of-scope UI side of navigation: route changes, window opens,
/// and DOM scroll/highlight. Mocked in tests.
#[async_trait]
pub trait UiBridge: Send + Sync {
    /// Change the in-app route, fragment included (`/experience#exp-0`).
    async fn navigate(&self, target: &str);

    /// Open a URL in a new, independent browsing context.
    async fn open_external(&self, url: &str);

    /// Scroll the element with this id into the centered viewport with
    /// smooth animation. Returns whether the element was present.
    async fn scroll_into_view(&self, element_id: &str) -> bool;

    /// Toggle the temporary highlight ring on the element.
    async fn set_highlight(&self, element_id: &str, on: bool);
}

/// Bridge that does nothing. Used by the headless CLI, where results are
/// printed rather than navigated to.
#[derive(Debug, Default)]
pub struct NoopUiBridge;

#[async_trait]
impl UiBridge for NoopUiBridge {
    async fn navigate(&self, _target: &str) {}
    async fn open_external(&self, _url: &str) {}
    async fn scroll_into_view(&self, _element_id: &str) -> bool {
        false
    }
    async fn set_highlight(&self, _element_id: &str, _on: bool) {}
}

// ============================================================================
// Resolver
// ============================================================================

/// Acts on the user's selection of one result.
pub struct NavigationResolver {
    ui: Arc<dyn UiBridge>,
    settle_delay: Duration,
    highlight_duration: Duration,
}

impl NavigationResolver {
    pub fn new(ui: Arc<dyn UiBridge>) -> Self {
        Self::with_timing(ui, SCROLL_SETTLE_DELAY, HIGHLIGHT_DURATION)
    }

    pub fn with_timing(
        ui: Arc<dyn UiBridge>,
        settle_delay: Duration,
        highlight_duration: Duration,
    ) -> Self {
        Self {
            ui,
            settle_delay,
            highlight_duration,
        }
    }

    /// Resolve a selection.
    ///
    /// Externally-hosted results open their URL and leave the in-app
    /// route untouched. Everything else navigates to `{path}#{id}` and
    /// spawns the scroll/highlight sequence; the returned handle lets
    /// callers await it. A missing target element skips the highlight
    /// silently; no retry, no surfaced error.
    pub async fn select(&self, result: &SearchResult) -> Option<JoinHandle<()>> {
        if result.is_external() {
            if let Some(url) = result.external_url.as_deref() {
                debug!(id = %result.id, %url, "opening external result");
                self.ui.open_external(url).await;
            }
            return None;
        }

        let target = format!("{}#{}", result.path, result.id);
        debug!(id = %result.id, %target, "navigating to result");
        self.ui.navigate(&target).await;

        let ui = self.ui.clone();
        let element_id = result.id.clone();
        let settle = self.settle_delay;
        let hold = self.highlight_duration;
        Some(tokio::spawn(async move {
            tokio::time::sleep(settle).await;
            if !ui.scroll_into_view(&element_id).await {
                debug!(%element_id, "scroll target not present, skipping highlight");
                return;
            }
            ui.set_highlight(&element_id, true).await;
            tokio::time::sleep(hold).await;
            ui.set_highlight(&element_id, false).await;
        }))
    }
}
