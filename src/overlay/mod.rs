//! Overlay controller: the search surface's state machine.
//!
//! Owns the open/closed state and the query text, kicks off remote
//! fetches on open, recomputes results synchronously per keystroke, and
//! hands selections to the navigation resolver. Cheap to clone; clones
//! share one session.

use crate::config::{Config, ContentApiConfig};
use crate::nav::{NavigationResolver, UiBridge};
use crate::remote::{ContentApiClient, GithubClient};
use crate::search::{self, SearchResult};
use crate::session::SessionCache;
use crate::sources::{self, ContentSource};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// The overlay is either hidden or showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Closed,
    Open,
}

/// Controller for one search session.
///
/// Remote snapshots live for the controller's lifetime: a source fetched
/// once stays fetched across close/reopen, a failed one is retried on
/// the next open.
#[derive(Clone)]
pub struct OverlayController {
    inner: Arc<Inner>,
}

struct Inner {
    state: RwLock<OverlayState>,
    query: RwLock<String>,
    cache: Arc<SessionCache>,
    sources: Vec<Box<dyn ContentSource>>,
    github: GithubClient,
    content_api: ContentApiClient,
    content_cfg: ContentApiConfig,
    resolver: NavigationResolver,
}

impl OverlayController {
    pub fn new(config: &Config, ui: Arc<dyn UiBridge>) -> Self {
        let cache = Arc::new(SessionCache::new());
        let sources = sources::default_registry(cache.clone());
        let github = GithubClient::new(config.github.api_base.clone(), config.github.user.clone());
        let content_api = ContentApiClient::new(
            config.content_api.base_url.clone(),
            config.content_api.anon_key.clone(),
        );
        let resolver = NavigationResolver::with_timing(
            ui,
            Duration::from_millis(config.search.scroll_settle_delay_ms),
            Duration::from_millis(config.search.highlight_duration_ms),
        );

        Self {
            inner: Arc::new(Inner {
                state: RwLock::new(OverlayState::Closed),
                query: RwLock::new(String::new()),
                cache,
                sources,
                github,
                content_api,
                content_cfg: config.content_api.clone(),
                resolver,
            }),
        }
    }

    // ========================================================================
    // State Machine
    // ========================================================================

    pub fn state(&self) -> OverlayState {
        *self.inner.state.read()
    }

    pub fn is_open(&self) -> bool {
        self.state() == OverlayState::Open
    }

    /// Open the overlay. Kicks off a fire-and-forget fetch for every
    /// remote source that has not been fetched yet this session (or whose
    /// last attempt failed). Must be called from within a tokio runtime.
    pub fn open(&self) {
        *self.inner.state.write() = OverlayState::Open;
        debug!("overlay opened");
        self.spawn_pending_fetches();
    }

    /// Close the overlay and clear transient UI state. In-flight fetches
    /// are not cancelled; a late resolution just updates the cache.
    pub fn close(&self) {
        *self.inner.state.write() = OverlayState::Closed;
        self.inner.query.write().clear();
        debug!("overlay closed");
    }

    /// Escape key: close if showing.
    pub fn on_escape(&self) {
        if self.is_open() {
            self.close();
        }
    }

    /// The open chord (Cmd/Ctrl-K style): toggle.
    pub fn on_shortcut(&self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    // ========================================================================
    // Query / Results
    // ========================================================================

    pub fn query(&self) -> String {
        self.inner.query.read().clone()
    }

    /// Update the query and recompute results. Called on every keystroke;
    /// assembly is a pure in-memory projection, so there is no debounce.
    pub fn set_query(&self, query: &str) -> Vec<SearchResult> {
        *self.inner.query.write() = query.to_string();
        self.results()
    }

    /// Recompute results for the current query against current snapshots.
    pub fn results(&self) -> Vec<SearchResult> {
        search::assemble(&self.inner.query.read(), &self.inner.sources)
    }

    /// Whether any remote fetch this session triggered is outstanding.
    pub fn loading(&self) -> bool {
        self.inner.cache.any_fetching()
    }

    /// Names of the sources whose fetch is outstanding, for a per-source
    /// loading indicator. Static sources never appear here.
    pub fn loading_sources(&self) -> Vec<&'static str> {
        let cache = &self.inner.cache;
        let mut names = Vec::new();
        if cache.repos.is_fetching() {
            names.push("projects");
        }
        if cache.photos.is_fetching() {
            names.push("photography");
        }
        if cache.videos.is_fetching() {
            names.push("videography");
        }
        if cache.writings.is_fetching() {
            names.push("writing-shelf");
        }
        names
    }

    /// Snapshot-change notifications, so an embedding UI can re-run
    /// [`results`](Self::results) when a fetch lands mid-query instead of
    /// waiting for the next keystroke.
    pub fn subscribe_changes(&self) -> watch::Receiver<u64> {
        self.inner.cache.subscribe()
    }

    /// The session cache backing this controller.
    pub fn cache(&self) -> Arc<SessionCache> {
        self.inner.cache.clone()
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Act on a selected result, then close the overlay. The returned
    /// handle (for in-app selections) completes when the scroll/highlight
    /// sequence does.
    pub async fn select(&self, result: &SearchResult) -> Option<JoinHandle<()>> {
        let handle = self.inner.resolver.select(result).await;
        self.close();
        handle
    }

    // ========================================================================
    // Remote Fetches
    // ========================================================================

    fn spawn_pending_fetches(&self) {
        if self.inner.cache.repos.begin_fetch() {
            let ctrl = self.clone();
            tokio::spawn(async move { ctrl.fetch_repos().await });
        }

        if !self.inner.content_cfg.is_configured() {
            return;
        }
        if self.inner.cache.photos.begin_fetch() {
            let ctrl = self.clone();
            tokio::spawn(async move { ctrl.fetch_photos().await });
        }
        if self.inner.cache.videos.begin_fetch() {
            let ctrl = self.clone();
            tokio::spawn(async move { ctrl.fetch_videos().await });
        }
        if self.inner.cache.writings.begin_fetch() {
            let ctrl = self.clone();
            tokio::spawn(async move { ctrl.fetch_writings().await });
        }
    }

    /// Fetch every pending remote source and wait for completion. The
    /// overlay path never calls this; it exists for one-shot embeddings
    /// like the CLI.
    pub async fn fetch_now(&self) {
        let repos = async {
            if self.inner.cache.repos.begin_fetch() {
                self.fetch_repos().await;
            }
        };
        let content = async {
            if !self.inner.content_cfg.is_configured() {
                return;
            }
            let photos = async {
                if self.inner.cache.photos.begin_fetch() {
                    self.fetch_photos().await;
                }
            };
            let videos = async {
                if self.inner.cache.videos.begin_fetch() {
                    self.fetch_videos().await;
                }
            };
            let writings = async {
                if self.inner.cache.writings.begin_fetch() {
                    self.fetch_writings().await;
                }
            };
            futures::join!(photos, videos, writings);
        };
        futures::join!(repos, content);
    }

    async fn fetch_repos(&self) {
        match self.inner.github.list_repos().await {
            Ok(repos) => {
                debug!(count = repos.len(), "repo listing fetched");
                self.inner.cache.repos.complete(repos);
            }
            Err(e) => {
                warn!(error = %e, "repo fetch failed; projects stay empty until reopen");
                self.inner.cache.repos.fail();
            }
        }
        self.inner.cache.mark_changed();
    }

    async fn fetch_photos(&self) {
        let table = &self.inner.content_cfg.photos_table;
        match self.inner.content_api.list_photos(table).await {
            Ok(rows) => {
                debug!(count = rows.len(), "photo rows fetched");
                self.inner.cache.photos.complete(rows);
            }
            Err(e) => {
                warn!(error = %e, "photo fetch failed; photography stays empty until reopen");
                self.inner.cache.photos.fail();
            }
        }
        self.inner.cache.mark_changed();
    }

    async fn fetch_videos(&self) {
        let table = &self.inner.content_cfg.videos_table;
        match self.inner.content_api.list_videos(table).await {
            Ok(rows) => {
                debug!(count = rows.len(), "video rows fetched");
                self.inner.cache.videos.complete(rows);
            }
            Err(e) => {
                warn!(error = %e, "video fetch failed; videography stays empty until reopen");
                self.inner.cache.videos.fail();
            }
        }
        self.inner.cache.mark_changed();
    }

    async fn fetch_writings(&self) {
        let table = &self.inner.content_cfg.writings_table;
        match self.inner.content_api.list_writings(table).await {
            Ok(rows) => {
                debug!(count = rows.len(), "writing rows fetched");
                self.inner.cache.writings.complete(rows);
            }
            Err(e) => {
                warn!(error = %e, "writing fetch failed; writing shelf stays empty until reopen");
                self.inner.cache.writings.fail();
            }
        }
        self.inner.cache.mark_changed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::NoopUiBridge;

    /// A config whose remote endpoints refuse connections immediately, so
    /// state-machine tests never touch the network.
    fn offline_config() -> Config {
        let mut config = Config::default();
        config.github.api_base = "http://127.0.0.1:9".to_string();
        config
    }

    fn controller() -> OverlayController {
        OverlayController::new(&offline_config(), Arc::new(NoopUiBridge))
    }

    #[tokio::test]
    async fn starts_closed_with_empty_query() {
        let ctrl = controller();
        assert_eq!(ctrl.state(), OverlayState::Closed);
        assert!(ctrl.query().is_empty());
        assert!(ctrl.results().is_empty());
    }

    #[tokio::test]
    async fn open_close_transitions() {
        let ctrl = controller();
        ctrl.open();
        assert!(ctrl.is_open());
        ctrl.close();
        assert_eq!(ctrl.state(), OverlayState::Closed);
    }

    #[tokio::test]
    async fn escape_closes_only_when_open() {
        let ctrl = controller();
        ctrl.on_escape();
        assert_eq!(ctrl.state(), OverlayState::Closed);
        ctrl.open();
        ctrl.on_escape();
        assert_eq!(ctrl.state(), OverlayState::Closed);
    }

    #[tokio::test]
    async fn shortcut_toggles() {
        let ctrl = controller();
        ctrl.on_shortcut();
        assert!(ctrl.is_open());
        ctrl.on_shortcut();
        assert!(!ctrl.is_open());
    }

    #[tokio::test]
    async fn close_clears_query() {
        let ctrl = controller();
        ctrl.open();
        ctrl.set_query("engineer");
        ctrl.close();
        assert!(ctrl.query().is_empty());
    }

    #[tokio::test]
    async fn static_sources_answer_without_any_fetch() {
        let ctrl = controller();
        let results = ctrl.set_query("engineer jp");
        assert!(results.iter().any(|r| r.id.starts_with("exp-")));
    }

    #[tokio::test]
    async fn empty_query_matches_nothing() {
        let ctrl = controller();
        assert!(ctrl.set_query("").is_empty());
        assert!(ctrl.set_query("   ").is_empty());
    }
}
