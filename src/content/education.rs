use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One education entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub location: String,
    pub period: String,
    pub description: String,
}

static EDUCATION: Lazy<Vec<EducationEntry>> = Lazy::new(|| {
    vec![
        EducationEntry {
            degree: "B.S. in Computer Science & B.A. in Economics (Dual Degree)".to_string(),
            school: "University of Massachusetts Amherst".to_string(),
            location: "Amherst, MA".to_string(),
            period: "December 2024".to_string(),
            description: "Completed two Bachelor's degrees simultaneously, combining technical \
                          computer science expertise with economic analysis and theory."
                .to_string(),
        },
        EducationEntry {
            degree: "High School Diploma".to_string(),
            school: "Chelmsford High School".to_string(),
            location: "Chelmsford, MA".to_string(),
            period: "June 2021".to_string(),
            description: "Graduated with high honors after completing numerous Honors and AP \
                          courses."
                .to_string(),
        },
    ]
});

pub fn education() -> &'static [EducationEntry] {
    &EDUCATION
}
