//! Table-driven content source registry.
//!
//! Every origin of searchable records (static collections, the GitHub
//! repo listing, hosted content rows) implements [`ContentSource`] and
//! projects its native records into [`Candidate`] values. The assembler
//! is then one generic loop over [`default_registry`]'s declaration
//! order, not a bespoke block per source.

use crate::content::{self, EducationEntry, ExperienceEntry, PageLink, Poem, SubstackPost};
use crate::search::{Candidate, Category, SearchResult};
use crate::session::SessionCache;
use std::sync::Arc;

// ============================================================================
// Source Trait
// ============================================================================

/// An origin of searchable records.
///
/// `candidates` projects the source's current in-memory snapshot; it must
/// be side-effect free so assembly stays a pure recomputation. Remote
/// sources read their session-cache slot and yield nothing until a fetch
/// has landed.
pub trait ContentSource: Send + Sync {
    fn name(&self) -> &'static str;
    fn candidates(&self) -> Vec<Candidate>;
}

fn result(
    id: String,
    title: &str,
    description: &str,
    category: Category,
    path: &str,
) -> SearchResult {
    SearchResult {
        id,
        title: title.to_string(),
        description: description.to_string(),
        category,
        path: path.to_string(),
        external_url: None,
    }
}

// ============================================================================
// Static Sources
// ============================================================================

/// The site's routed pages, searchable by name and blurb.
pub struct PagesSource {
    pages: Vec<PageLink>,
}

impl PagesSource {
    pub fn new(pages: Vec<PageLink>) -> Self {
        Self { pages }
    }

    pub fn from_content() -> Self {
        Self::new(content::pages().to_vec())
    }
}

impl ContentSource for PagesSource {
    fn name(&self) -> &'static str {
        "pages"
    }

    fn candidates(&self) -> Vec<Candidate> {
        self.pages
            .iter()
            .map(|page| Candidate {
                fields: vec![page.name.clone(), page.blurb.clone()],
                result: result(
                    format!("page-{}", page.slug),
                    &page.name,
                    &page.blurb,
                    Category::Page,
                    &page.path,
                ),
            })
            .collect()
    }
}

/// Work history. Matches on title, company, and description.
pub struct ExperienceSource {
    entries: Vec<ExperienceEntry>,
}

impl ExperienceSource {
    pub fn new(entries: Vec<ExperienceEntry>) -> Self {
        Self { entries }
    }

    pub fn from_content() -> Self {
        Self::new(content::experiences().to_vec())
    }
}

impl ContentSource for ExperienceSource {
    fn name(&self) -> &'static str {
        "experience"
    }

    fn candidates(&self) -> Vec<Candidate> {
        self.entries
            .iter()
            .enumerate()
            .map(|(idx, exp)| Candidate {
                fields: vec![exp.title.clone(), exp.company.clone(), exp.description.clone()],
                result: result(
                    format!("exp-{}", idx),
                    &exp.title,
                    &exp.company,
                    Category::Experience,
                    "/experience",
                ),
            })
            .collect()
    }
}

/// Education entries. Matches on degree and school.
pub struct EducationSource {
    entries: Vec<EducationEntry>,
}

impl EducationSource {
    pub fn new(entries: Vec<EducationEntry>) -> Self {
        Self { entries }
    }

    pub fn from_content() -> Self {
        Self::new(content::education().to_vec())
    }
}

impl ContentSource for EducationSource {
    fn name(&self) -> &'static str {
        "education"
    }

    fn candidates(&self) -> Vec<Candidate> {
        self.entries
            .iter()
            .enumerate()
            .map(|(idx, edu)| Candidate {
                fields: vec![edu.degree.clone(), edu.school.clone()],
                result: result(
                    format!("edu-{}", idx),
                    &edu.degree,
                    &edu.school,
                    Category::Education,
                    "/education",
                ),
            })
            .collect()
    }
}

/// Poems on the writing page. Matches on title and excerpt.
pub struct PoemsSource {
    poems: Vec<Poem>,
}

impl PoemsSource {
    pub fn new(poems: Vec<Poem>) -> Self {
        Self { poems }
    }

    pub fn from_content() -> Self {
        Self::new(content::poems().to_vec())
    }
}

impl ContentSource for PoemsSource {
    fn name(&self) -> &'static str {
        "poems"
    }

    fn candidates(&self) -> Vec<Candidate> {
        self.poems
            .iter()
            .map(|poem| Candidate {
                fields: vec![poem.title.clone(), poem.excerpt.clone()],
                result: result(
                    format!("poem-{}", poem.id),
                    &poem.title,
                    &poem.excerpt,
                    Category::Writing,
                    "/writing",
                ),
            })
            .collect()
    }
}

/// Externally-hosted long-form posts. Selection opens the URL in a new
/// browsing context instead of navigating in-app.
pub struct SubstackSource {
    posts: Vec<SubstackPost>,
}

impl SubstackSource {
    pub fn new(posts: Vec<SubstackPost>) -> Self {
        Self { posts }
    }

    pub fn from_content() -> Self {
        Self::new(content::substack_posts().to_vec())
    }
}

impl ContentSource for SubstackSource {
    fn name(&self) -> &'static str {
        "substack"
    }

    fn candidates(&self) -> Vec<Candidate> {
        self.posts
            .iter()
            .enumerate()
            .map(|(idx, post)| {
                let mut result = result(
                    format!("substack-{}", idx),
                    &post.title,
                    &post.blurb,
                    Category::Substack,
                    "/writing",
                );
                result.external_url = Some(post.url.clone());
                Candidate {
                    fields: vec![post.title.clone(), post.blurb.clone()],
                    result,
                }
            })
            .collect()
    }
}

// ============================================================================
// Remote Sources
// ============================================================================

/// GitHub repositories. Matches on name, description, and language;
/// yields nothing until the session's repo fetch has landed.
pub struct ProjectsSource {
    cache: Arc<SessionCache>,
}

impl ProjectsSource {
    pub fn new(cache: Arc<SessionCache>) -> Self {
        Self { cache }
    }
}

impl ContentSource for ProjectsSource {
    fn name(&self) -> &'static str {
        "projects"
    }

    fn candidates(&self) -> Vec<Candidate> {
        self.cache
            .repos
            .snapshot()
            .into_iter()
            .map(|repo| {
                let mut fields = vec![repo.name.clone()];
                fields.extend(repo.description.clone());
                fields.extend(repo.language.clone());
                let description = repo.description.as_deref().unwrap_or("GitHub Repository");
                Candidate {
                    fields,
                    result: result(
                        format!("proj-{}", repo.id),
                        &repo.name,
                        description,
                        Category::Projects,
                        "/technical",
                    ),
                }
            })
            .collect()
    }
}

/// Hosted photo rows. Matches on title, category, and location.
pub struct PhotographySource {
    cache: Arc<SessionCache>,
}

impl PhotographySource {
    pub fn new(cache: Arc<SessionCache>) -> Self {
        Self { cache }
    }
}

impl ContentSource for PhotographySource {
    fn name(&self) -> &'static str {
        "photography"
    }

    fn candidates(&self) -> Vec<Candidate> {
        self.cache
            .photos
            .snapshot()
            .into_iter()
            .map(|photo| {
                let mut fields = vec![photo.title.clone()];
                fields.extend(photo.category.clone());
                fields.extend(photo.location.clone());
                let description = photo.category.as_deref().unwrap_or("Photo");
                Candidate {
                    fields,
                    result: result(
                        format!("photo-{}", photo.id),
                        &photo.title,
                        description,
                        Category::Photography,
                        "/photography",
                    ),
                }
            })
            .collect()
    }
}

/// Hosted video rows. Matches on title, platform, and category.
pub struct VideographySource {
    cache: Arc<SessionCache>,
}

impl VideographySource {
    pub fn new(cache: Arc<SessionCache>) -> Self {
        Self { cache }
    }
}

impl ContentSource for VideographySource {
    fn name(&self) -> &'static str {
        "videography"
    }

    fn candidates(&self) -> Vec<Candidate> {
        self.cache
            .videos
            .snapshot()
            .into_iter()
            .map(|video| {
                let mut fields = vec![video.title.clone()];
                fields.extend(video.platform.clone());
                fields.extend(video.category.clone());
                let description = video.platform.as_deref().unwrap_or("Video");
                Candidate {
                    fields,
                    result: result(
                        format!("video-{}", video.id),
                        &video.title,
                        description,
                        Category::Videography,
                        "/videography",
                    ),
                }
            })
            .collect()
    }
}

/// Hosted writing rows. Matches on title and category.
pub struct WritingShelfSource {
    cache: Arc<SessionCache>,
}

impl WritingShelfSource {
    pub fn new(cache: Arc<SessionCache>) -> Self {
        Self { cache }
    }
}

impl ContentSource for WritingShelfSource {
    fn name(&self) -> &'static str {
        "writing-shelf"
    }

    fn candidates(&self) -> Vec<Candidate> {
        self.cache
            .writings
            .snapshot()
            .into_iter()
            .map(|row| {
                let description = row.category.as_deref().unwrap_or("Writing");
                let mut fields = vec![row.title.clone()];
                fields.extend(row.category.clone());
                Candidate {
                    fields,
                    result: result(
                        format!("writing-{}", row.id),
                        &row.title,
                        description,
                        Category::Writing,
                        "/writing",
                    ),
                }
            })
            .collect()
    }
}

// ============================================================================
// Registry
// ============================================================================

/// All sources in their fixed declaration order. Result ordering follows
/// this order exactly; within a source, native record order is preserved.
pub fn default_registry(cache: Arc<SessionCache>) -> Vec<Box<dyn ContentSource>> {
    vec![
        Box::new(PagesSource::from_content()),
        Box::new(ExperienceSource::from_content()),
        Box::new(EducationSource::from_content()),
        Box::new(ProjectsSource::new(cache.clone())),
        Box::new(PhotographySource::new(cache.clone())),
        Box::new(VideographySource::new(cache.clone())),
        Box::new(PoemsSource::from_content()),
        Box::new(WritingShelfSource::new(cache)),
        Box::new(SubstackSource::from_content()),
    ]
}
