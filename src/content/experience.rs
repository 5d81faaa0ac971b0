use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One work-history entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub description: String,
}

impl ExperienceEntry {
    fn new(title: &str, company: &str, location: &str, period: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            company: company.to_string(),
            location: location.to_string(),
            period: period.to_string(),
            description: description.to_string(),
        }
    }
}

static EXPERIENCES: Lazy<Vec<ExperienceEntry>> = Lazy::new(|| {
    vec![
        ExperienceEntry::new(
            "Software Engineer",
            "JPMorgan Chase & Co.",
            "Jersey City, NJ",
            "Jul 2025 - Present",
            "Full-stack software engineer within the Asset & Wealth Management Line of Business, \
             developing enterprise-level financial applications and contributing to critical \
             business systems.",
        ),
        ExperienceEntry::new(
            "Sales Specialist",
            "Apple",
            "Holyoke, MA",
            "Nov 2024 - Jan 2025",
            "Provided exceptional customer support and technical expertise while contributing to \
             store success and maintaining high customer satisfaction scores.",
        ),
        ExperienceEntry::new(
            "Student IT Consultant",
            "University of Massachusetts Amherst",
            "Amherst, MA",
            "Oct 2023 - Dec 2024",
            "Delivered comprehensive technical support to the university community through \
             multiple channels including in-person assistance and remote support platforms.",
        ),
        ExperienceEntry::new(
            "Software Engineering Intern",
            "J.P. Morgan Asset Management",
            "Manhattan, NY",
            "Jun 2024 - Aug 2024",
            "Joined the hedge fund Highbridge's Engineering Team within the Asset & Wealth \
             Management division, developing enterprise-level financial software solutions.",
        ),
        ExperienceEntry::new(
            "Undergraduate Researcher",
            "Human Computer Interaction & Visualization Lab at UMass Amherst",
            "Amherst, MA",
            "Feb 2023 - Jan 2024",
            "Conducted advanced research in data visualization and network analysis, \
             collaborating with post-doctoral researchers and faculty members on cutting-edge \
             HCI projects.",
        ),
        ExperienceEntry::new(
            "Software Engineering Intern",
            "JPMorgan Chase & Co.",
            "Jersey City, NJ",
            "Jun 2023 - Aug 2023",
            "Worked within the Corporate Technology LOB and Legal Tech sub-division, developing \
             full-stack applications and gaining comprehensive experience in enterprise software \
             development lifecycle.",
        ),
        ExperienceEntry::new(
            "NPO Founder",
            "Care Cardz",
            "Chelmsford, MA",
            "Jun 2020 - May 2023",
            "Founded and led a nonprofit organization dedicated to spreading joy in the community \
             through handwritten cards, managing all aspects from operations to partnerships.",
        ),
    ]
});

/// The full work-history collection, oldest last.
pub fn experiences() -> &'static [ExperienceEntry] {
    &EXPERIENCES
}
