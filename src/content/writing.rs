use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A poem shown on the writing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poem {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
}

/// An externally-hosted long-form post. Selecting one of these from the
/// overlay opens the URL in a new browsing context.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstackPost {
    pub title: String,
    pub blurb: String,
    pub url: String,
}

static POEMS: Lazy<Vec<Poem>> = Lazy::new(|| {
    vec![
        Poem {
            id: 1,
            title: "Echoes of Silence".to_string(),
            excerpt: "In the quiet moments between breaths...".to_string(),
        },
        Poem {
            id: 2,
            title: "Digital Dreams".to_string(),
            excerpt: "Pixels falling like summer rain...".to_string(),
        },
        Poem {
            id: 3,
            title: "The Alchemist".to_string(),
            excerpt: "Turning lead moments into golden memories...".to_string(),
        },
    ]
});

static SUBSTACK_POSTS: Lazy<Vec<SubstackPost>> = Lazy::new(|| {
    vec![
        SubstackPost {
            title: "On Building in Public".to_string(),
            blurb: "Why shipping small things often beats shipping big things rarely".to_string(),
            url: "https://niyashroff.substack.com/p/on-building-in-public".to_string(),
        },
        SubstackPost {
            title: "Notes From a Dual Degree".to_string(),
            blurb: "Computer science and economics, four years in parallel".to_string(),
            url: "https://niyashroff.substack.com/p/notes-from-a-dual-degree".to_string(),
        },
    ]
});

pub fn poems() -> &'static [Poem] {
    &POEMS
}

pub fn substack_posts() -> &'static [SubstackPost] {
    &SUBSTACK_POSTS
}
