//! Match predicate and result assembler.
//!
//! Every content source projects its native records into [`Candidate`]
//! values; the assembler walks the source registry in declaration order,
//! keeps the candidates whose fields satisfy the query, and returns the
//! normalized results. Assembly is a pure projection over whatever
//! snapshots are resident right now, so it is safe to recompute on every
//! keystroke.

use crate::sources::ContentSource;
use serde::{Deserialize, Serialize};
use tracing::debug;

// ============================================================================
// Result Types
// ============================================================================

/// Which section of the site a result belongs to. Drives the icon shown
/// in the overlay and which searchable fields apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Page,
    Experience,
    Education,
    Projects,
    Photography,
    Videography,
    Writing,
    Substack,
}

impl Category {
    /// Display label used by the overlay and the CLI listing.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Page => "Page",
            Category::Experience => "Experience",
            Category::Education => "Education",
            Category::Projects => "Projects",
            Category::Photography => "Photography",
            Category::Videography => "Videography",
            Category::Writing => "Writing",
            Category::Substack => "Substack",
        }
    }
}

/// A normalized, source-agnostic search result.
///
/// `id` is a source prefix plus the originating record's native identifier
/// (`exp-0`, `proj-42`, `photo-3`). Uniqueness holds within a single
/// result set only; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    /// In-app route the result navigates to (no fragment).
    pub path: String,
    /// Present for externally-hosted content; selection opens this URL in
    /// a new browsing context instead of navigating in-app.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
}

impl SearchResult {
    /// Whether selecting this result should open an external URL rather
    /// than navigate in-app.
    pub fn is_external(&self) -> bool {
        self.category == Category::Substack && self.external_url.is_some()
    }
}

/// A source's projection of one native record: the fields the match
/// predicate sees, plus the result to emit when they match. Absent native
/// fields are simply left out of `fields`.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub fields: Vec<String>,
    pub result: SearchResult,
}

// ============================================================================
// Match Predicate
// ============================================================================

/// Split a query into lowercase terms, discarding empty ones.
///
/// A trimmed-empty query yields no terms, which the assembler treats as
/// "match nothing" rather than "match everything".
pub fn query_terms(query: &str) -> Vec<String> {
    query.split_whitespace().map(|t| t.to_lowercase()).collect()
}

/// Conjunctive case-insensitive substring match: every term must appear
/// somewhere in the concatenation of the candidate's fields. Terms may
/// match across different fields (`"engineer jp"` hits a record whose
/// title holds "Software Engineer" and whose company holds "JPMorgan").
pub fn matches_terms(fields: &[String], terms: &[String]) -> bool {
    if terms.is_empty() {
        return false;
    }
    let haystack = fields.join(" ").to_lowercase();
    terms.iter().all(|t| haystack.contains(t.as_str()))
}

// ============================================================================
// Result Assembler
// ============================================================================

/// Assemble the full ordered result list for `query` across `sources`.
///
/// Ordering is strictly source-declaration order; within a source, native
/// record order is preserved. No relevance scoring. Remote sources whose
/// snapshot has not landed contribute zero results without blocking.
pub fn assemble(query: &str, sources: &[Box<dyn ContentSource>]) -> Vec<SearchResult> {
    let terms = query_terms(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut results = Vec::new();
    for source in sources {
        let candidates = source.candidates();
        let before = results.len();
        results.extend(
            candidates
                .into_iter()
                .filter(|c| matches_terms(&c.fields, &terms))
                .map(|c| c.result),
        );
        debug!(
            source = source.name(),
            matched = results.len() - before,
            "assembled source"
        );
    }
    results
}
