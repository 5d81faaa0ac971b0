//! Static content collections.
//!
//! These are loaded once at process start and never change for the
//! process lifetime. The search subsystem only reads them; projection
//! into searchable candidates happens in `sources`.

mod education;
mod experience;
mod pages;
mod writing;

pub use education::{education, EducationEntry};
pub use experience::{experiences, ExperienceEntry};
pub use pages::{pages, PageLink};
pub use writing::{poems, substack_posts, Poem, SubstackPost};
