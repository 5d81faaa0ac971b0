//! Session-scoped cache of remote source snapshots.
//!
//! The overlay controller owns one [`SessionCache`] for the life of a
//! browsing session and injects it into the result assembler. Each remote
//! source gets an explicit fetch state; reopening the overlay re-triggers
//! a fetch only for `NotFetched` and `Failed` slots, so an in-flight
//! fetch is never duplicated and a successful fetch is never refreshed
//! within the session. Retrying failed sources on reopen is intentional.
//!
//! Single-writer invariant: only the controller's fetch-completion paths
//! mutate slots; the assembler only reads snapshots.

use crate::remote::{PhotoRow, Repo, VideoRow, WritingRow};
use parking_lot::RwLock;
use tokio::sync::watch;

// ============================================================================
// Fetch State
// ============================================================================

/// Lifecycle of one remote source's snapshot within a session.
#[derive(Debug, Clone)]
pub enum FetchState<T> {
    NotFetched,
    Fetching,
    Fetched(Vec<T>),
    Failed,
}

/// One remote source's slot: its fetch state behind a lock.
pub struct RemoteSlot<T> {
    state: RwLock<FetchState<T>>,
}

impl<T: Clone> RemoteSlot<T> {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(FetchState::NotFetched),
        }
    }

    /// The rows currently available from this source. Empty unless the
    /// slot is `Fetched`; an unfetched or failed source contributes zero
    /// results, never an error.
    pub fn snapshot(&self) -> Vec<T> {
        match &*self.state.read() {
            FetchState::Fetched(rows) => rows.clone(),
            _ => Vec::new(),
        }
    }

    /// Claim the slot for fetching. Returns whether the caller should
    /// actually issue the request: `NotFetched` and `Failed` transition to
    /// `Fetching`; `Fetching` and `Fetched` are left alone.
    pub fn begin_fetch(&self) -> bool {
        let mut state = self.state.write();
        match *state {
            FetchState::NotFetched | FetchState::Failed => {
                *state = FetchState::Fetching;
                true
            }
            FetchState::Fetching | FetchState::Fetched(_) => false,
        }
    }

    /// Replace the snapshot entirely with freshly fetched rows.
    pub fn complete(&self, rows: Vec<T>) {
        *self.state.write() = FetchState::Fetched(rows);
    }

    /// Record a fetch failure. The slot becomes eligible for retry on the
    /// next overlay open.
    pub fn fail(&self) {
        *self.state.write() = FetchState::Failed;
    }

    pub fn is_fetching(&self) -> bool {
        matches!(*self.state.read(), FetchState::Fetching)
    }

    pub fn is_fetched(&self) -> bool {
        matches!(*self.state.read(), FetchState::Fetched(_))
    }
}

impl<T: Clone> Default for RemoteSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Session Cache
// ============================================================================

/// All remote source slots for one session, plus a generation channel
/// bumped whenever any slot settles so observers can recompute results
/// without waiting for the next keystroke.
pub struct SessionCache {
    pub repos: RemoteSlot<Repo>,
    pub photos: RemoteSlot<PhotoRow>,
    pub videos: RemoteSlot<VideoRow>,
    pub writings: RemoteSlot<WritingRow>,
    changes: watch::Sender<u64>,
}

impl SessionCache {
    pub fn new() -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            repos: RemoteSlot::new(),
            photos: RemoteSlot::new(),
            videos: RemoteSlot::new(),
            writings: RemoteSlot::new(),
            changes,
        }
    }

    /// Subscribe to snapshot-change notifications. The value is a
    /// generation counter; only "changed" matters.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    /// Bump the generation after a slot settles.
    pub fn mark_changed(&self) {
        self.changes.send_modify(|gen| *gen = gen.wrapping_add(1));
    }

    /// Whether any remote fetch is currently outstanding. Drives the
    /// overlay's loading indicator.
    pub fn any_fetching(&self) -> bool {
        self.repos.is_fetching()
            || self.photos.is_fetching()
            || self.videos.is_fetching()
            || self.writings.is_fetching()
    }
}

impl Default for SessionCache {
    fn default() -> Self {
        Self::new()
    }
}
