use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One routed page of the site, searchable by name and blurb.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLink {
    pub slug: String,
    pub name: String,
    pub path: String,
    pub blurb: String,
}

impl PageLink {
    fn new(slug: &str, name: &str, path: &str, blurb: &str) -> Self {
        Self {
            slug: slug.to_string(),
            name: name.to_string(),
            path: path.to_string(),
            blurb: blurb.to_string(),
        }
    }
}

static PAGES: Lazy<Vec<PageLink>> = Lazy::new(|| {
    vec![
        PageLink::new("home", "Home", "/", "Biography, skills, and highlights"),
        PageLink::new("experience", "Experience", "/experience", "Work history"),
        PageLink::new("education", "Education", "/education", "Degrees and coursework"),
        PageLink::new("technical", "Technical Projects", "/technical", "Open-source repositories"),
        PageLink::new("photography", "Photography", "/photography", "Photo gallery"),
        PageLink::new("videography", "Videography", "/videography", "Video reel"),
        PageLink::new("writing", "Writing", "/writing", "Poems and essays"),
        PageLink::new("contact", "Contact", "/contact", "Get in touch"),
    ]
});

pub fn pages() -> &'static [PageLink] {
    &PAGES
}
